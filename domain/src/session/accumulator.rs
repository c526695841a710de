//! Growing document built from stream fragments.

use super::stream::Fragment;

/// Ordered concatenation of the fragments of the current session.
///
/// `append` is a plain `push_str`, so each call costs time proportional to the
/// fragment only, never to the document accumulated so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputAccumulator {
    document: String,
}

impl OutputAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the document for a new session.
    pub fn reset(&mut self) {
        self.document.clear();
    }

    /// Append a fragment and return the full document.
    pub fn append(&mut self, fragment: &Fragment) -> &str {
        self.document.push_str(fragment.text());
        &self.document
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn is_empty(&self) -> bool {
        self.document.is_empty()
    }

    pub fn into_document(self) -> String {
        self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_returns_ordered_concatenation() {
        let fragments = ["## Summary\n", "Patient stable.\n", "", "- Follow up\n"];
        let mut acc = OutputAccumulator::new();
        let mut expected = String::new();

        for text in fragments {
            expected.push_str(text);
            assert_eq!(acc.append(&Fragment::from(text)), expected);
        }
        assert_eq!(acc.document(), "## Summary\nPatient stable.\n- Follow up\n");
    }

    #[test]
    fn repeated_fragments_are_not_deduplicated() {
        let mut acc = OutputAccumulator::new();
        acc.append(&"ok ".into());
        acc.append(&"ok ".into());
        assert_eq!(acc.document(), "ok ok ");
    }

    #[test]
    fn reset_discards_previous_session() {
        let mut acc = OutputAccumulator::new();
        acc.append(&"old session text".into());

        acc.reset();
        assert!(acc.is_empty());
        assert_eq!(acc.append(&"new".into()), "new");
    }
}
