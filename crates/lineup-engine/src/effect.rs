#![forbid(unsafe_code)]

//! Side-effect values emitted by the engine.
//!
//! The engine is sans-I/O: instead of calling the backend itself it returns
//! [`Effect`] values from its transition methods. The host executes them —
//! synchronously in tests, as asynchronous requests in a real UI — and feeds
//! commit results back through
//! [`ReorderEngine::resolve_commit`](crate::ReorderEngine::resolve_commit).
//! This keeps the machine single-threaded and deterministic while the UI
//! stays interactive during an outstanding request.

use lineup_core::Orderable;

/// Identifies one in-flight commit.
///
/// Tickets are monotonically increasing per engine; a resolution carrying a
/// ticket that is not the currently pending one is stale and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommitTicket(pub(crate) u64);

impl CommitTicket {
    /// Raw ticket number, for logging.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// The full ordered id list sent to the backend.
///
/// The backend is expected to persist `order = positional index` for each id
/// and to reject a request whose id set does not match its known set rather
/// than partially applying it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReorderRequest {
    /// Every id in the collection, in the desired order.
    pub ordered_ids: Vec<String>,
}

impl ReorderRequest {
    /// Build a request from a working copy, in array order.
    #[must_use]
    pub fn from_items<T: Orderable>(items: &[T]) -> Self {
        Self {
            ordered_ids: items.iter().map(|item| item.id().to_string()).collect(),
        }
    }
}

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Informational.
    Info,
    /// A confirmed operation.
    Success,
    /// A failed operation.
    Error,
}

/// A single user-facing notification.
///
/// Rendering (toast, status line, ...) is the host's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Notice {
    /// Notice severity.
    pub severity: Severity,
    /// Display text.
    pub text: String,
}

impl Notice {
    /// A success notice.
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            text: text.into(),
        }
    }

    /// An error notice.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            text: text.into(),
        }
    }
}

/// A side effect for the host to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue the persistence call for an optimistic reorder, then feed the
    /// result back with the given ticket.
    Commit {
        /// Ticket to echo back on resolution.
        ticket: CommitTicket,
        /// The ordered id list to persist.
        request: ReorderRequest,
    },
    /// Re-run the list fetch and hand the result to
    /// [`ReorderEngine::apply_fetch`](crate::ReorderEngine::apply_fetch).
    Refetch,
    /// Show a notification.
    Notice(Notice),
}
