//! Session-scoped artifact accumulation
//!
//! The accumulated artifact is the only state that outlives a single
//! comparison run. Each session owns its own artifact; a server hosting
//! several operators must hold one `Session` per operator so that
//! simultaneous runs never observe or overwrite each other.

/// Accumulated artifact of the most recent comparison run: the ordered
/// terminator-suffixed markup fragments, exportable as one UTF-8 payload.
#[derive(Debug, Default, Clone)]
pub struct Session {
    fragments: Vec<String>,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard any prior artifact. Called by the assembler when a run
    /// begins, so every run replaces the artifact wholesale.
    pub(crate) fn begin_run(&mut self) {
        self.fragments.clear();
    }

    /// Append one fragment as it is produced.
    pub(crate) fn push_fragment(&mut self, fragment: String) {
        self.fragments.push(fragment);
    }

    /// Reset the artifact to empty. Idempotent; safe when already empty.
    pub fn clear(&mut self) {
        self.fragments.clear();
    }

    /// Serialize the full current artifact as one UTF-8 payload, fragments
    /// in pair order, each carrying its claim terminator.
    pub fn export(&self) -> String {
        self.fragments.concat()
    }

    /// Fragments of the most recent run, in pair order.
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_exports_empty_payload() {
        assert_eq!(Session::new().export(), "");
    }

    #[test]
    fn export_concatenates_fragments_in_order() {
        let mut session = Session::new();
        session.begin_run();
        session.push_fragment("first.\n".to_string());
        session.push_fragment("second.\n".to_string());
        assert_eq!(session.export(), "first.\nsecond.\n");
    }

    #[test]
    fn begin_run_replaces_prior_artifact() {
        let mut session = Session::new();
        session.push_fragment("stale.\n".to_string());
        session.begin_run();
        session.push_fragment("fresh.\n".to_string());
        assert_eq!(session.export(), "fresh.\n");
    }

    #[test]
    fn clear_is_idempotent() {
        let mut session = Session::new();
        session.push_fragment("data.\n".to_string());
        session.clear();
        assert!(session.is_empty());
        session.clear();
        assert!(session.is_empty());
        assert_eq!(session.export(), "");
    }

    #[test]
    fn sessions_are_independent() {
        let mut a = Session::new();
        let b = Session::new();
        a.push_fragment("only in a.\n".to_string());
        assert!(!a.is_empty());
        assert!(b.is_empty());
    }
}
