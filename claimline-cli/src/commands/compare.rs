//! Compare command implementation

use crate::input;
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use anyhow::{Context, Result};
use clap::Args;
use claimline_core::{ClaimComparer, Config, MarkupStyle, Session};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;

/// Fixed file name the accumulated artifact is exported under.
pub const EXPORT_FILE_NAME: &str = "redline.md";

/// Arguments for the compare command
#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Before-version document (.txt or .docx)
    #[arg(value_name = "BEFORE")]
    pub before: PathBuf,

    /// After-version document (.txt or .docx)
    #[arg(value_name = "AFTER")]
    pub after: PathBuf,

    /// Markup style, passed through to the diff engine unchanged
    #[arg(short, long, value_enum, default_value = "red-green")]
    pub style: Style,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also write the accumulated artifact to the fixed export file
    #[arg(long)]
    pub export: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported markup styles. Unknown style tokens are rejected at argument
/// parsing time, before any file is read.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Style {
    /// Red strike-through deletions, green insertions
    RedGreen,
    /// Bare del/ins tags without styling
    None,
    /// Red for both deletions and insertions
    Red,
    /// GitHub-flavored markdown markers
    Ghfm,
}

impl From<Style> for MarkupStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::RedGreen => MarkupStyle::RedGreen,
            Style::None => MarkupStyle::None,
            Style::Red => MarkupStyle::Red,
            Style::Ghfm => MarkupStyle::Ghfm,
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Raw redline stream, identical to the exported artifact
    Text,
    /// JSON array of claim-pair records
    Json,
    /// Markdown with one headed section per claim
    Markdown,
}

impl CompareArgs {
    /// Execute the compare command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!(
            "comparing {} against {}",
            self.before.display(),
            self.after.display()
        );

        let before_text = input::ingest(&self.before)?;
        let after_text = input::ingest(&self.after)?;

        let config = Config::builder().style(self.style.into()).build()?;
        let comparer = ClaimComparer::new(config);
        let mut session = Session::new();

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            ),
            None => Box::new(io::stdout()),
        };
        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };

        let comparison = comparer.prepare(&before_text, &after_text);
        let stats = comparison.stats();
        log::info!(
            "{} claims before, {} after, {} aligned pairs",
            stats.before_claims,
            stats.after_claims,
            stats.pairs
        );

        {
            let mut index = 0;
            let stream = comparer.fragments(&comparison, &mut session);
            for result in stream {
                // an engine failure aborts here; fragments already
                // written stay visible
                let fragment = result?;
                formatter.format_fragment(
                    index,
                    comparison.before_claims().get(index).map(String::as_str),
                    comparison.after_claims().get(index).map(String::as_str),
                    &fragment,
                )?;
                index += 1;
            }
        }
        formatter.finish()?;

        if self.export {
            fs::write(EXPORT_FILE_NAME, session.export())
                .with_context(|| format!("Failed to write export file: {EXPORT_FILE_NAME}"))?;
            log::info!("artifact exported to {EXPORT_FILE_NAME}");
        }

        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}
