#![forbid(unsafe_code)]

//! The reorder gate: whether manual reordering is currently valid.
//!
//! Manual order is only meaningful relative to the *complete* unfiltered
//! collection. Reordering a filtered subset would silently corrupt the
//! global order for the records that are filtered out of view, so the gate
//! closes as soon as a search term or a non-"all" selection is active.
//!
//! The gate is a pure derivation of the current view filter. The gesture
//! adapter consults it to suppress drag handling entirely; the engine
//! re-checks it defensively on every drop so that a stale gesture arriving
//! after a filter change still produces no mutation and no request.

/// Which slice of the collection the view is currently showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// The complete collection; the only selection that permits reordering.
    #[default]
    All,
    /// A named subset (a status value, a parent category, ...).
    Only(String),
}

impl Selection {
    /// Whether this selection shows the complete collection.
    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

/// Current search/filter state of the owning view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewFilter {
    search_term: String,
    selection: Selection,
}

impl ViewFilter {
    /// An unfiltered view: empty search, [`Selection::All`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current search term (possibly empty).
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Replace the search term.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Clear the search term.
    pub fn clear_search(&mut self) {
        self.search_term.clear();
    }

    /// Current selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Replace the selection.
    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    /// The reorder gate: open iff the view shows the complete collection.
    ///
    /// A whitespace-only search term does not close the gate.
    #[must_use]
    pub fn permits_reorder(&self) -> bool {
        self.search_term.trim().is_empty() && self.selection.is_all()
    }
}
