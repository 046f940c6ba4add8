//! Comparison front door: configuration and the claim comparer

use crate::align::{AlignmentStrategy, PositionalAligner};
use crate::assembler::{Fragments, MarkupAssembler};
use crate::diff::{DiffEngine, MarkupStyle, WordDiffEngine};
use crate::error::Result;
use crate::session::Session;
use crate::splitter::ClaimSplitter;
use serde::Serialize;
use std::str::FromStr;

/// Comparison configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) style: MarkupStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: MarkupStyle::RedGreen,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn style(&self) -> MarkupStyle {
        self.style
    }
}

/// Fluent builder for configuration. Style validation happens in
/// [`ConfigBuilder::build`], before any pipeline work can start.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    style: Option<MarkupStyle>,
    style_token: Option<String>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the markup style.
    pub fn style(mut self, style: MarkupStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Set the markup style from its textual token ("red-green", "none",
    /// "red", "ghfm"). An unknown token fails `build`.
    pub fn style_str(mut self, token: impl Into<String>) -> Self {
        self.style_token = Some(token.into());
        self
    }

    /// Build the configuration, rejecting unsupported style tokens.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();
        if let Some(token) = self.style_token {
            config.style = MarkupStyle::from_str(&token)?;
        }
        if let Some(style) = self.style {
            config.style = style;
        }
        Ok(config)
    }
}

/// Claim counts observed during one comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompareStats {
    /// Claims found in the before-document
    pub before_claims: usize,
    /// Claims found in the after-document
    pub after_claims: usize,
    /// Aligned pairs the run will produce
    pub pairs: usize,
}

/// The split claim sequences of one document pair, ready for alignment.
#[derive(Debug, Clone)]
pub struct Comparison {
    before_claims: Vec<String>,
    after_claims: Vec<String>,
}

impl Comparison {
    pub fn before_claims(&self) -> &[String] {
        &self.before_claims
    }

    pub fn after_claims(&self) -> &[String] {
        &self.after_claims
    }

    pub fn stats(&self) -> CompareStats {
        CompareStats {
            before_claims: self.before_claims.len(),
            after_claims: self.after_claims.len(),
            pairs: self.before_claims.len().max(self.after_claims.len()),
        }
    }
}

/// Runs the full pipeline: split both documents, align the claim
/// sequences, and stream per-pair redline fragments into a session.
///
/// Execution is synchronous and single-threaded; a run completes within
/// the triggering operation, with no cancellation and no timeout.
pub struct ClaimComparer<E = WordDiffEngine> {
    config: Config,
    splitter: ClaimSplitter,
    aligner: Box<dyn AlignmentStrategy>,
    assembler: MarkupAssembler<E>,
}

impl ClaimComparer<WordDiffEngine> {
    /// Comparer with the default word-diff engine.
    pub fn new(config: Config) -> Self {
        Self::with_engine(config, WordDiffEngine::new())
    }
}

impl<E: DiffEngine> ClaimComparer<E> {
    /// Comparer with a caller-supplied diff engine.
    pub fn with_engine(config: Config, engine: E) -> Self {
        Self {
            config,
            splitter: ClaimSplitter::new(),
            aligner: Box::new(PositionalAligner::new()),
            assembler: MarkupAssembler::new(engine),
        }
    }

    /// Substitute the alignment strategy. Positional alignment is the
    /// default and the shipped contract.
    pub fn with_aligner(mut self, aligner: Box<dyn AlignmentStrategy>) -> Self {
        self.aligner = aligner;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Split both documents into their claim sequences.
    pub fn prepare(&self, before: &str, after: &str) -> Comparison {
        let before_claims = self.splitter.split(before);
        let after_claims = self.splitter.split(after);
        log::info!(
            "split documents into {} and {} claims",
            before_claims.len(),
            after_claims.len()
        );
        Comparison {
            before_claims,
            after_claims,
        }
    }

    /// Align the prepared claims and stream redline fragments. The
    /// session artifact is replaced as the stream starts; each fragment
    /// is appended as it is yielded.
    pub fn fragments<'a>(
        &'a self,
        comparison: &'a Comparison,
        session: &'a mut Session,
    ) -> Fragments<'a, E> {
        let pairs = self
            .aligner
            .align(&comparison.before_claims, &comparison.after_claims);
        self.assembler.assemble(pairs, self.config.style, session)
    }

    /// Run the whole pipeline eagerly and collect the fragments. The
    /// first engine failure aborts the remainder of the run; fragments
    /// already in the session stay there.
    pub fn compare(&self, before: &str, after: &str, session: &mut Session) -> Result<Vec<String>> {
        let comparison = self.prepare(before, after);
        self.fragments(&comparison, session).collect()
    }
}
