#![forbid(unsafe_code)]

//! Stable ordering key over [`Orderable`] records.
//!
//! The comparator yields a **total order** even while the backend has not
//! yet assigned `order` to every record:
//!
//! 1. A missing `order` sorts after every present one.
//! 2. Present, unequal `order` values compare numerically.
//! 3. Ties (equal values, or both missing) fall back to a case-insensitive
//!    ascending comparison of the display name.
//!
//! # Invariants
//!
//! - Deterministic: the same pair always compares the same way.
//! - Idempotent under [`sort_by_order_key`]: re-sorting an already-sorted
//!   slice is a no-op (the sort is stable and the comparator is pure).

use std::cmp::Ordering;

use crate::entity::Orderable;

/// Compare two records by the stable ordering key.
#[must_use]
pub fn order_key_cmp<T: Orderable>(a: &T, b: &T) -> Ordering {
    match (a.order(), b.order()) {
        (Some(x), Some(y)) if x != y => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        // Equal orders, or both unordered: tie-break on the name.
        _ => cmp_ignore_case(a.display_name(), b.display_name()),
    }
}

/// Stable-sort a slice by the ordering key.
pub fn sort_by_order_key<T: Orderable>(items: &mut [T]) {
    items.sort_by(|a, b| order_key_cmp(a, b));
}

/// Allocation-free case-insensitive comparison for the common ASCII case.
fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    // Fast path for ASCII
    if a.is_ascii() && b.is_ascii() {
        let a_bytes = a.as_bytes();
        let b_bytes = b.as_bytes();
        let len = a_bytes.len().min(b_bytes.len());
        for i in 0..len {
            let ca = a_bytes[i].to_ascii_lowercase();
            let cb = b_bytes[i].to_ascii_lowercase();
            match ca.cmp(&cb) {
                Ordering::Equal => {}
                non_eq => return non_eq,
            }
        }
        return a_bytes.len().cmp(&b_bytes.len());
    }
    // Fallback for Unicode (allocates, but correct)
    a.to_lowercase().cmp(&b.to_lowercase())
}
