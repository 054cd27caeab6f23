#![forbid(unsafe_code)]

//! The per-collection backend collaborator, as seen by the core.
//!
//! Everything behind this trait — HTTP, auth, caching — is a black box. Two
//! operations matter: fetch the (complete, unfiltered) list, and persist a
//! full ordered id sequence. Create/update/delete exist on real backends but
//! only interact with this subsystem by invalidating the cached list, which
//! re-triggers the fetch→sync path.

use lineup_core::Orderable;

use crate::effect::ReorderRequest;
use crate::error::{CommitError, FetchError};

/// Fetch and persist operations for one reorderable collection.
pub trait CollectionBackend<T: Orderable> {
    /// Fetch the complete list.
    ///
    /// The result may arrive in any order; the sync path sorts it.
    fn fetch(&mut self) -> Result<Vec<T>, FetchError>;

    /// Persist `order = positional index` for each id in the request.
    ///
    /// Implementations must reject a request whose id set does not match
    /// the backend's known set (extra or missing ids) rather than partially
    /// applying it.
    fn persist_order(&mut self, request: &ReorderRequest) -> Result<(), CommitError>;
}
