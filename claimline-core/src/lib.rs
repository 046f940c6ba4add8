//! Claim-by-claim redline generation for numbered-claim documents
//!
//! Compares two versions of a legal or technical document (patent claims
//! and similar) and produces a word-level redline per claim. The pipeline
//! is: split each document into an ordered claim sequence, pair the
//! sequences position by position, then drive a diff engine over each
//! pair, accumulating the annotated fragments in a session artifact that
//! can be exported or cleared on demand.
//!
//! The boundary heuristic and the positional pairing are deliberately
//! simple and have documented failure modes; see [`splitter`] and
//! [`align`].

pub mod align;
pub mod assembler;
pub mod comparer;
pub mod diff;
pub mod error;
pub mod session;
pub mod splitter;

pub use align::{AlignmentStrategy, ClaimPair, PositionalAligner};
pub use assembler::{Fragments, MarkupAssembler, CLAIM_TERMINATOR};
pub use comparer::{ClaimComparer, CompareStats, Comparison, Config, ConfigBuilder};
pub use diff::{DiffEngine, MarkupStyle, WordDiffEngine};
pub use error::{Error, Result};
pub use session::Session;
pub use splitter::ClaimSplitter;
