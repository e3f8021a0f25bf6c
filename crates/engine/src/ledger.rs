//! Tracking which suggestions the user has marked for acceptance.

/// The set of suggestion names currently marked for commit.
///
/// Names compare case-insensitively, mirroring [`crate::SkillSet`]. The
/// ledger stores whatever spelling the caller passed in; sessions resolve
/// names to their canonical batch spelling before selecting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionLedger {
    selected: Vec<String>,
}

impl SelectionLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a name. Returns false when it was already marked.
    pub fn select(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.is_selected(&name) {
            return false;
        }
        self.selected.push(name);
        true
    }

    /// Unmark a name. Returns false when it was not marked; unmarking an
    /// unknown name is a quiet no-op.
    pub fn deselect(&mut self, name: &str) -> bool {
        let before = self.selected.len();
        self.selected.retain(|n| !n.eq_ignore_ascii_case(name));
        self.selected.len() != before
    }

    /// Whether a name is currently marked.
    #[must_use]
    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.iter().any(|n| n.eq_ignore_ascii_case(name))
    }

    /// Marked names in selection order.
    #[must_use]
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Number of marked names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is marked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Unmark everything.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Drain the marked names, leaving the ledger empty.
    #[must_use]
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.selected)
    }
}
