//! Markup assembly over aligned claim pairs
//!
//! Drives the diff engine once per pair, in order, and emits each
//! fragment the moment it is produced rather than buffering the whole
//! result. Fragments land in the session as they are yielded, so a
//! presentation layer pulling the iterator shows incremental progress.

use crate::align::ClaimPair;
use crate::diff::{DiffEngine, MarkupStyle};
use crate::error::Result;
use crate::session::Session;

/// Appended to every fragment, restoring the claim-ending period the
/// splitter consumed at the boundary.
pub const CLAIM_TERMINATOR: &str = ".\n";

/// Handed to the diff engine in place of an absent side, so a one-sided
/// pair reads as a whole-claim insertion or deletion.
const ABSENT_PLACEHOLDER: &str = " ";

/// Drives a [`DiffEngine`] over aligned pairs and accumulates the
/// resulting fragments in a [`Session`].
pub struct MarkupAssembler<E> {
    engine: E,
}

impl<E: DiffEngine> MarkupAssembler<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Begin a fresh run over `pairs`. The session artifact is replaced
    /// wholesale up front; each fragment is appended to it as the
    /// returned iterator yields it.
    pub fn assemble<'a>(
        &'a self,
        pairs: Vec<ClaimPair<'a>>,
        style: MarkupStyle,
        session: &'a mut Session,
    ) -> Fragments<'a, E> {
        log::debug!("assembling {} aligned pairs, style {}", pairs.len(), style);
        session.begin_run();
        Fragments {
            engine: &self.engine,
            pairs: pairs.into_iter(),
            style,
            session,
            failed: false,
        }
    }
}

/// Lazy, finite fragment stream over one run. Not restartable: once a
/// pair has been consumed it is not revisited. An engine failure is
/// yielded once and the iterator then fuses; fragments emitted before the
/// failure stay in the session, so partial output remains visible.
pub struct Fragments<'a, E> {
    engine: &'a E,
    pairs: std::vec::IntoIter<ClaimPair<'a>>,
    style: MarkupStyle,
    session: &'a mut Session,
    failed: bool,
}

impl<'a, E: DiffEngine> Iterator for Fragments<'a, E> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let pair = self.pairs.next()?;
        let before = pair.left().unwrap_or(ABSENT_PLACEHOLDER);
        let after = pair.right().unwrap_or(ABSENT_PLACEHOLDER);

        match self.engine.diff(before, after, self.style) {
            Ok(markup) => {
                let fragment = format!("{markup}{CLAIM_TERMINATOR}");
                self.session.push_fragment(fragment.clone());
                Some(Ok(fragment))
            }
            Err(err) => {
                log::warn!("diff engine failed mid-run: {err}");
                self.failed = true;
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            self.pairs.size_hint()
        }
    }
}
