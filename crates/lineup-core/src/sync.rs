#![forbid(unsafe_code)]

//! Fetch-sync reduction: decide whether a fetched list replaces the
//! client's ordered working copy.
//!
//! # Design
//!
//! The reducer compares each fetch against the fingerprint of the **previous
//! accepted fetch**, never against the current (possibly drag-mutated)
//! working copy. Without this, any background refetch — e.g. one triggered
//! by an unrelated mutation invalidating a cached list — would clobber an
//! in-progress or just-committed client-side reorder before the server echo
//! of that reorder lands.
//!
//! An unchanged fetch is reduced to [`SyncOutcome::Unchanged`] and the
//! fetched data is dropped. A changed fetch is sorted with the stable
//! ordering key and handed back as [`SyncOutcome::Replaced`]: the caller
//! replaces its working copy wholesale (replacement, not merge).
//!
//! # Failure Modes
//!
//! An empty fetch is a real result: its fingerprint differs from the unset
//! (never-fetched) state, so it replaces a non-empty working copy with an
//! empty one rather than being mistaken for "nothing fetched yet".

use crate::entity::Orderable;
use crate::fingerprint::FetchFingerprint;
use crate::order_key::sort_by_order_key;

/// Result of reducing one fetch.
#[derive(Debug)]
pub enum SyncOutcome<T> {
    /// Fingerprint matched the previous accepted fetch; working copy must
    /// not be touched.
    Unchanged,
    /// Fingerprint changed; the sorted list replaces the working copy.
    Replaced(Vec<T>),
}

impl<T> SyncOutcome<T> {
    /// Whether this outcome replaces the working copy.
    #[must_use]
    pub fn is_replacement(&self) -> bool {
        matches!(self, Self::Replaced(_))
    }
}

/// Per-collection sync state: the fingerprint of the last accepted fetch.
#[derive(Debug, Default)]
pub struct SyncReducer {
    accepted: Option<FetchFingerprint>,
}

impl SyncReducer {
    /// Create a reducer that has not yet accepted a fetch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any fetch has been accepted yet.
    #[must_use]
    pub fn has_accepted(&self) -> bool {
        self.accepted.is_some()
    }

    /// Reduce one fetched list.
    ///
    /// Consumes the fetch; on the unchanged path the data is dropped, on the
    /// changed path it is returned sorted and ready to become the new
    /// working copy.
    pub fn reduce<T: Orderable>(&mut self, mut fetched: Vec<T>) -> SyncOutcome<T> {
        let fingerprint = FetchFingerprint::capture(&fetched);
        if self.accepted.as_ref() == Some(&fingerprint) {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                target: "lineup.sync",
                len = fingerprint.len(),
                "fetch unchanged, working copy preserved"
            );
            return SyncOutcome::Unchanged;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "lineup.sync",
            len = fingerprint.len(),
            first_accept = self.accepted.is_none(),
            "fetch changed, replacing working copy"
        );

        self.accepted = Some(fingerprint);
        sort_by_order_key(&mut fetched);
        SyncOutcome::Replaced(fetched)
    }

    /// Forget the accepted fingerprint, forcing the next fetch to replace.
    ///
    /// Used when the owning view unmounts or the collection cache is
    /// invalidated out of band.
    pub fn reset(&mut self) {
        self.accepted = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        order: Option<u32>,
        name: String,
    }

    impl Orderable for Row {
        fn id(&self) -> &str {
            &self.id
        }

        fn order(&self) -> Option<u32> {
            self.order
        }

        fn display_name(&self) -> &str {
            &self.name
        }
    }

    fn row(id: &str, order: Option<u32>, name: &str) -> Row {
        Row {
            id: id.to_string(),
            order,
            name: name.to_string(),
        }
    }

    #[test]
    fn first_fetch_replaces_and_sorts() {
        let mut reducer = SyncReducer::new();
        let outcome = reducer.reduce(vec![row("x", Some(2), "B"), row("y", Some(1), "A")]);
        match outcome {
            SyncOutcome::Replaced(items) => {
                let ids: Vec<&str> = items.iter().map(|r| r.id.as_str()).collect();
                assert_eq!(ids, vec!["y", "x"]);
            }
            SyncOutcome::Unchanged => panic!("first fetch must replace"),
        }
    }

    #[test]
    fn identical_refetch_is_unchanged() {
        let mut reducer = SyncReducer::new();
        let fetch = || vec![row("x", Some(2), "B"), row("y", Some(1), "A")];
        assert!(reducer.reduce(fetch()).is_replacement());
        assert!(!reducer.reduce(fetch()).is_replacement());
        // Fetch order is part of the fingerprint, but a same-set refetch in
        // the same server order stays a no-op regardless of repetition.
        assert!(!reducer.reduce(fetch()).is_replacement());
    }

    #[test]
    fn changed_order_field_replaces() {
        let mut reducer = SyncReducer::new();
        assert!(reducer.reduce(vec![row("x", Some(1), "A")]).is_replacement());
        assert!(reducer.reduce(vec![row("x", Some(7), "A")]).is_replacement());
    }

    #[test]
    fn empty_fetch_replaces_nonempty() {
        let mut reducer = SyncReducer::new();
        assert!(
            reducer
                .reduce(vec![row("x", Some(1), "A")])
                .is_replacement()
        );
        match reducer.reduce(Vec::<Row>::new()) {
            SyncOutcome::Replaced(items) => assert!(items.is_empty()),
            SyncOutcome::Unchanged => panic!("empty fetch must replace non-empty state"),
        }
        // And a second empty fetch is then a no-op.
        assert!(!reducer.reduce(Vec::<Row>::new()).is_replacement());
    }

    #[test]
    fn reset_forces_replacement() {
        let mut reducer = SyncReducer::new();
        let fetch = || vec![row("x", Some(1), "A")];
        assert!(reducer.reduce(fetch()).is_replacement());
        assert!(!reducer.reduce(fetch()).is_replacement());
        reducer.reset();
        assert!(reducer.reduce(fetch()).is_replacement());
    }
}
