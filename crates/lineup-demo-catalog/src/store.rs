#![forbid(unsafe_code)]

//! In-memory stand-in for the real per-collection backend.
//!
//! Honors the contract the engine relies on: `fetch` returns the complete
//! list, `persist_order` assigns `order = positional index` for each id and
//! rejects a request whose id set does not match the stored set (extra or
//! missing ids) instead of partially applying it. Create/delete invalidate
//! nothing here — the views refetch after calling them, which is exactly how
//! a cache-invalidating mutation behaves against a real API.

use std::collections::BTreeSet;

use lineup_engine::{CollectionBackend, CommitError, FetchError, ReorderRequest};
use tracing::debug;

use crate::collections::CatalogRecord;

/// One collection's rows, plus failure injection for demo purposes.
#[derive(Debug)]
pub struct InMemoryCollection<T> {
    rows: Vec<T>,
    next_id: u64,
    id_prefix: &'static str,
    fail_next: Option<CommitError>,
}

impl<T: CatalogRecord> InMemoryCollection<T> {
    /// A collection seeded with the given rows.
    #[must_use]
    pub fn new(id_prefix: &'static str, rows: Vec<T>) -> Self {
        let next_id = rows.len() as u64 + 1;
        Self {
            rows,
            next_id,
            id_prefix,
            fail_next: None,
        }
    }

    /// Insert a fresh, unordered row (it sorts last until renumbered by a
    /// subsequent reorder).
    pub fn create(&mut self, name: impl Into<String>) -> String {
        let id = format!("{}-{}", self.id_prefix, self.next_id);
        self.next_id += 1;
        self.rows.push(T::fresh(id.clone(), name.into()));
        debug!(target: "lineup.demo", id = %id, "row created");
        id
    }

    /// Delete a row by id. Returns whether it existed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id() != id);
        before != self.rows.len()
    }

    /// Make the next persist call fail with the given error.
    pub fn fail_next_persist(&mut self, err: CommitError) {
        self.fail_next = Some(err);
    }
}

impl<T: CatalogRecord> CollectionBackend<T> for InMemoryCollection<T> {
    fn fetch(&mut self) -> Result<Vec<T>, FetchError> {
        Ok(self.rows.clone())
    }

    fn persist_order(&mut self, request: &ReorderRequest) -> Result<(), CommitError> {
        if let Some(err) = self.fail_next.take() {
            return Err(err);
        }

        let known: BTreeSet<&str> = self.rows.iter().map(|row| row.id()).collect();
        let requested: BTreeSet<&str> = request.ordered_ids.iter().map(String::as_str).collect();
        if known != requested || request.ordered_ids.len() != self.rows.len() {
            return Err(CommitError::validation(
                "ordered id set does not match the collection",
            ));
        }

        for (position, id) in request.ordered_ids.iter().enumerate() {
            if let Some(row) = self.rows.iter_mut().find(|row| row.id() == id) {
                row.set_order(position as u32);
            }
        }
        debug!(
            target: "lineup.demo",
            len = request.ordered_ids.len(),
            "order persisted"
        );
        Ok(())
    }
}
