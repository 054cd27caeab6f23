//! Property tests for the stable ordering key and sync reduction.

use std::cmp::Ordering;

use lineup_core::{Orderable, SyncOutcome, SyncReducer, order_key_cmp, sort_by_order_key};
use proptest::prelude::*;

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

fn row_strategy() -> impl Strategy<Value = Row> {
    (
        "[a-z0-9]{1,8}",
        proptest::option::of(0u32..64),
        "[A-Za-z ]{0,10}",
    )
        .prop_map(|(id, order, name)| Row { id, order, name })
}

fn rows_strategy() -> impl Strategy<Value = Vec<Row>> {
    proptest::collection::vec(row_strategy(), 0..32)
}

proptest! {
    /// Re-sorting an already-sorted slice is a no-op, including for inputs
    /// with ties on `order` and on the display name.
    #[test]
    fn sort_is_idempotent(mut rows in rows_strategy()) {
        sort_by_order_key(&mut rows);
        let once = rows.clone();
        sort_by_order_key(&mut rows);
        prop_assert_eq!(once, rows);
    }

    /// Adjacent pairs of a sorted slice never compare as Greater.
    #[test]
    fn sorted_output_is_non_decreasing(mut rows in rows_strategy()) {
        sort_by_order_key(&mut rows);
        for pair in rows.windows(2) {
            prop_assert_ne!(order_key_cmp(&pair[0], &pair[1]), Ordering::Greater);
        }
    }

    /// Every record with a present `order` sorts before every record
    /// without one.
    #[test]
    fn unordered_records_sort_last(mut rows in rows_strategy()) {
        sort_by_order_key(&mut rows);
        let first_unordered = rows.iter().position(|r| r.order.is_none());
        if let Some(boundary) = first_unordered {
            prop_assert!(rows[boundary..].iter().all(|r| r.order.is_none()));
        }
    }

    /// The comparator is antisymmetric: cmp(a, b) is the reverse of
    /// cmp(b, a).
    #[test]
    fn comparator_is_antisymmetric(a in row_strategy(), b in row_strategy()) {
        prop_assert_eq!(order_key_cmp(&a, &b), order_key_cmp(&b, &a).reverse());
    }

    /// Re-running the reducer with an unchanged fetch result never replaces
    /// the working copy.
    #[test]
    fn reducer_skips_identical_refetch(rows in rows_strategy()) {
        let mut reducer = SyncReducer::new();
        match reducer.reduce(rows.clone()) {
            SyncOutcome::Replaced(_) => {}
            SyncOutcome::Unchanged => prop_assert!(false, "first fetch must replace"),
        }
        prop_assert!(!reducer.reduce(rows).is_replacement());
    }

    /// A fetch of the same records in a different server order (different
    /// fingerprint sequence) replaces, but the sorted result is the same
    /// when the ordering key is unambiguous.
    #[test]
    fn replacement_order_is_permutation_independent(rows in rows_strategy()) {
        // Deduplicate the tie-break key so stability cannot distinguish
        // permutations.
        let mut rows = rows;
        rows.sort_by(|a, b| {
            (a.order, a.name.to_lowercase()).cmp(&(b.order, b.name.to_lowercase()))
        });
        rows.dedup_by(|a, b| a.order == b.order && a.name.eq_ignore_ascii_case(&b.name));

        let mut reversed = rows.clone();
        reversed.reverse();

        let mut forward = SyncReducer::new();
        let mut backward = SyncReducer::new();
        let a = match forward.reduce(rows) {
            SyncOutcome::Replaced(items) => items,
            SyncOutcome::Unchanged => return Ok(()),
        };
        let b = match backward.reduce(reversed) {
            SyncOutcome::Replaced(items) => items,
            SyncOutcome::Unchanged => return Ok(()),
        };
        let a_ids: Vec<&str> = a.iter().map(|r| r.id.as_str()).collect();
        let b_ids: Vec<&str> = b.iter().map(|r| r.id.as_str()).collect();
        prop_assert_eq!(a_ids, b_ids);
    }
}
