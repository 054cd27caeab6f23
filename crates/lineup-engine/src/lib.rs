#![forbid(unsafe_code)]

//! Engine: the optimistic reorder state machine and its gate.
//!
//! # Role in Lineup
//! `lineup-engine` owns the Ordered Working Copy for one collection and runs
//! the drag lifecycle against it: `Idle → Dragging → Committing → (Idle |
//! RolledBack)`. A drop splice-moves the dragged record, publishes the
//! mutated array immediately (optimistic update), and emits a commit effect;
//! the host performs the persistence call and feeds the result back. On
//! failure the pre-drag snapshot is restored wholesale.
//!
//! # Primary responsibilities
//! - **ViewFilter / reorder gate**: reordering is only permitted against the
//!   complete, unfiltered collection.
//! - **ReorderEngine**: drag tracking, optimistic splice-move, drag
//!   snapshot, ticketed commit resolution, rollback, sync integration.
//! - **Effects**: `Commit`, `Refetch`, and `Notice` values for the host to
//!   execute; the engine itself performs no I/O.
//!
//! # How it fits in the system
//! `lineup-gesture` translates platform gestures into [`DragCall`]s;
//! `lineup-core` supplies the ordering key and sync reduction. The backend
//! behind [`CollectionBackend`] stays a black box: list and persist, nothing
//! else.

pub mod backend;
pub mod call;
pub mod effect;
pub mod engine;
pub mod error;
pub mod gate;
pub mod stats;

pub use backend::CollectionBackend;
pub use call::DragCall;
pub use effect::{CommitTicket, Effect, Notice, ReorderRequest, Severity};
pub use engine::{EngineConfig, ReorderEngine};
pub use error::{CommitError, CommitErrorKind, FetchError};
pub use gate::{Selection, ViewFilter};
pub use stats::EngineStats;
