#![forbid(unsafe_code)]

//! The reorder engine: one state machine per reorderable collection.
//!
//! # State Machine
//!
//! ```text
//! Idle ──drag_start──► Dragging ──drop_at (dest ≠ source)──► Committing
//!  ▲                      │                                      │
//!  │   abandon / same     │                 resolve Ok           │
//!  ◄──────index───────────┘              ◄───────────────────────┤
//!  │                                        resolve Err          │
//!  ◄───────────── RolledBack (snapshot restored) ◄───────────────┘
//! ```
//!
//! Drag tracking is cleared **pre-emptively** when the drop is accepted: the
//! visible highlight disappears while the commit request is still
//! outstanding and the working copy already shows the new order.
//!
//! # Invariants
//!
//! 1. The working copy holds the id set of the last accepted fetch, no
//!    duplicates; array order is the single rendering truth.
//! 2. At most one commit is in flight; drag input while committing is
//!    rejected, so two requests can never race.
//! 3. A drop while the gate is closed produces no mutation and no request,
//!    even if the adapter failed to suppress it.
//! 4. Rollback restores the exact pre-drag array, not a re-sort.
//! 5. Commit resolutions with a stale ticket are ignored.

use lineup_core::{Orderable, SyncOutcome, SyncReducer};
use tracing::{debug, warn};

use crate::call::DragCall;
use crate::effect::{CommitTicket, Effect, Notice, ReorderRequest};
use crate::error::{CommitError, FetchError};
use crate::gate::{Selection, ViewFilter};
use crate::stats::EngineStats;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Tunables for one engine instance.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Emit [`Effect::Refetch`] after a confirmed commit so the host
    /// reconciles with the server echo through the ordinary sync path.
    pub refetch_on_success: bool,
    /// Text of the success notice.
    pub success_notice: String,
    /// Fallback text when a failed commit carries no server message.
    pub failure_fallback: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            refetch_on_success: false,
            success_notice: "Order updated".to_string(),
            failure_fallback: "Failed to update order".to_string(),
        }
    }
}

impl EngineConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether a confirmed commit triggers a refetch.
    #[must_use]
    pub fn refetch_on_success(mut self, refetch: bool) -> Self {
        self.refetch_on_success = refetch;
        self
    }

    /// Set the success notice text.
    #[must_use]
    pub fn success_notice(mut self, text: impl Into<String>) -> Self {
        self.success_notice = text.into();
        self
    }

    /// Set the fallback text for failed commits without a server message.
    #[must_use]
    pub fn failure_fallback(mut self, text: impl Into<String>) -> Self {
        self.failure_fallback = text.into();
        self
    }
}

// ---------------------------------------------------------------------------
// Internal state
// ---------------------------------------------------------------------------

/// Tracks the Dragging phase.
#[derive(Debug, Clone, Copy)]
struct DragState {
    /// Array index the drag started on.
    source: usize,
    /// Array index currently hovered, for highlight rendering.
    hover: Option<usize>,
}

/// Tracks the Committing phase.
struct PendingCommit<T> {
    ticket: CommitTicket,
    /// Pre-drag working copy; `None` once a newer fetch superseded it.
    snapshot: Option<Vec<T>>,
}

// ---------------------------------------------------------------------------
// ReorderEngine
// ---------------------------------------------------------------------------

/// Optimistic reorder state machine owning one Ordered Working Copy.
///
/// Create one instance per collection and keep it for the lifetime of the
/// owning view. All methods are synchronous; persistence happens in the host
/// via the emitted [`Effect`]s.
pub struct ReorderEngine<T> {
    config: EngineConfig,
    items: Vec<T>,
    reducer: SyncReducer,
    filter: ViewFilter,
    drag: Option<DragState>,
    pending: Option<PendingCommit<T>>,
    next_ticket: u64,
    stats: EngineStats,
}

impl<T> std::fmt::Debug for ReorderEngine<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReorderEngine")
            .field("len", &self.items.len())
            .field("dragging", &self.drag.is_some())
            .field("committing", &self.pending.is_some())
            .finish()
    }
}

impl<T: Orderable + Clone> ReorderEngine<T> {
    /// Create an engine with the given configuration and an empty working
    /// copy.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            items: Vec::new(),
            reducer: SyncReducer::new(),
            filter: ViewFilter::new(),
            drag: None,
            pending: None,
            next_ticket: 1,
            stats: EngineStats::default(),
        }
    }

    /// Create an engine with the default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(EngineConfig::default())
    }

    // -- Rendering surface --------------------------------------------------

    /// The Ordered Working Copy; array order is rendering order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of records in the working copy.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the working copy is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index the current drag started on, while Dragging.
    #[must_use]
    pub fn dragging_from(&self) -> Option<usize> {
        self.drag.map(|d| d.source)
    }

    /// Hovered drop target, while Dragging, for highlight rendering.
    #[must_use]
    pub fn hover_index(&self) -> Option<usize> {
        self.drag.and_then(|d| d.hover)
    }

    /// Whether a commit request is outstanding.
    #[must_use]
    pub fn is_committing(&self) -> bool {
        self.pending.is_some()
    }

    /// Lifetime counters.
    #[must_use]
    pub fn stats(&self) -> EngineStats {
        self.stats
    }

    // -- Filter / gate ------------------------------------------------------

    /// Current view filter.
    #[must_use]
    pub fn filter(&self) -> &ViewFilter {
        &self.filter
    }

    /// Replace the search term; closes the gate while non-empty.
    ///
    /// An in-progress drag is abandoned when the gate closes under it.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.set_search_term(term);
        self.abandon_if_gated();
    }

    /// Replace the selection; any value but [`Selection::All`] closes the
    /// gate.
    pub fn set_selection(&mut self, selection: Selection) {
        self.filter.set_selection(selection);
        self.abandon_if_gated();
    }

    /// Whether a new drag would currently be accepted: gate open and no
    /// commit in flight.
    #[must_use]
    pub fn reorder_allowed(&self) -> bool {
        self.filter.permits_reorder() && self.pending.is_none()
    }

    fn abandon_if_gated(&mut self) {
        if self.drag.is_some() && !self.filter.permits_reorder() {
            debug!(target: "lineup.engine", "gate closed mid-drag, abandoning");
            self.drag = None;
            self.stats.drags_abandoned += 1;
        }
    }

    // -- Sync path ----------------------------------------------------------

    /// Feed one fetched list through the sync reducer.
    ///
    /// Returns `true` when the working copy was replaced. A replacement
    /// abandons any in-progress drag (its indices point into the old array)
    /// and supersedes the snapshot of an in-flight commit: the fetch is
    /// newer server truth, so a later commit failure no longer restores
    /// over it.
    pub fn apply_fetch(&mut self, fetched: Vec<T>) -> bool {
        match self.reducer.reduce(fetched) {
            SyncOutcome::Unchanged => {
                self.stats.syncs_skipped += 1;
                false
            }
            SyncOutcome::Replaced(items) => {
                debug!(
                    target: "lineup.engine",
                    len = items.len(),
                    "working copy replaced from fetch"
                );
                self.items = items;
                self.stats.syncs_applied += 1;
                if self.drag.take().is_some() {
                    warn!(target: "lineup.engine", "fetch replaced working copy mid-drag");
                    self.stats.drags_abandoned += 1;
                }
                if let Some(pending) = &mut self.pending
                    && pending.snapshot.take().is_some()
                {
                    debug!(
                        target: "lineup.engine",
                        ticket = pending.ticket.value(),
                        "in-flight commit snapshot superseded by fetch"
                    );
                }
                true
            }
        }
    }

    /// Surface a fetch failure; the working copy is left intact.
    pub fn apply_fetch_error(&mut self, err: &FetchError) -> Vec<Effect> {
        warn!(target: "lineup.engine", error = %err, "list fetch failed");
        self.stats.fetch_errors += 1;
        vec![Effect::Notice(Notice::error(err.to_string()))]
    }

    // -- Drag lifecycle -----------------------------------------------------

    /// Dispatch one adapter call.
    pub fn apply(&mut self, call: DragCall) -> Vec<Effect> {
        match call {
            DragCall::Start(index) => {
                self.drag_start(index);
                Vec::new()
            }
            DragCall::Over(index) => {
                self.drag_over(index);
                Vec::new()
            }
            DragCall::Drop(index) => self.drop_at(index),
            DragCall::Abandon => {
                self.abandon_drag();
                Vec::new()
            }
        }
    }

    /// Enter the Dragging phase on the record at `source`.
    ///
    /// Returns `false` (and does nothing) when the gate is closed, a commit
    /// is in flight, or the index is out of bounds.
    pub fn drag_start(&mut self, source: usize) -> bool {
        if !self.filter.permits_reorder() {
            warn!(target: "lineup.engine", source, "drag start rejected: gate closed");
            self.stats.gated_rejections += 1;
            return false;
        }
        if self.pending.is_some() {
            warn!(target: "lineup.engine", source, "drag start rejected: commit in flight");
            self.stats.busy_rejections += 1;
            return false;
        }
        if source >= self.items.len() {
            warn!(target: "lineup.engine", source, len = self.items.len(), "drag start out of bounds");
            return false;
        }
        debug!(target: "lineup.engine", source, "drag started");
        self.drag = Some(DragState {
            source,
            hover: None,
        });
        self.stats.drags_started += 1;
        true
    }

    /// Update the hovered drop target. Presentation only; no mutation.
    pub fn drag_over(&mut self, index: usize) {
        if let Some(drag) = &mut self.drag {
            drag.hover = Some(index.min(self.items.len().saturating_sub(1)));
        }
    }

    /// Leave the Dragging phase without a drop.
    pub fn abandon_drag(&mut self) {
        if self.drag.take().is_some() {
            debug!(target: "lineup.engine", "drag abandoned");
            self.stats.drags_abandoned += 1;
        }
    }

    /// Complete the drag at `dest`.
    ///
    /// On an accepted move this captures the drag snapshot, splice-moves the
    /// record, publishes the mutated array, clears drag tracking, and emits
    /// [`Effect::Commit`]. Dropping on the source index, with the gate
    /// closed, with a commit in flight, or without a tracked drag emits
    /// nothing.
    pub fn drop_at(&mut self, dest: usize) -> Vec<Effect> {
        // Drag tracking clears on any drop outcome; the highlight must not
        // survive the gesture.
        let Some(drag) = self.drag.take() else {
            warn!(target: "lineup.engine", dest, "drop without tracked drag ignored");
            return Vec::new();
        };

        // Defensive re-check: the adapter should have suppressed these.
        if !self.filter.permits_reorder() {
            warn!(target: "lineup.engine", dest, "drop rejected: gate closed");
            self.stats.gated_rejections += 1;
            self.stats.drags_abandoned += 1;
            return Vec::new();
        }
        if self.pending.is_some() {
            warn!(target: "lineup.engine", dest, "drop rejected: commit in flight");
            self.stats.busy_rejections += 1;
            self.stats.drags_abandoned += 1;
            return Vec::new();
        }

        let source = drag.source;
        if source >= self.items.len() {
            warn!(target: "lineup.engine", source, len = self.items.len(), "stale drop ignored");
            self.stats.drags_abandoned += 1;
            return Vec::new();
        }
        let dest = dest.min(self.items.len() - 1);
        if dest == source {
            debug!(target: "lineup.engine", source, "drop on source index, no-op");
            self.stats.drags_abandoned += 1;
            return Vec::new();
        }

        let snapshot = self.items.clone();
        move_entry(&mut self.items, source, dest);

        let ticket = CommitTicket(self.next_ticket);
        self.next_ticket += 1;
        let request = ReorderRequest::from_items(&self.items);
        self.pending = Some(PendingCommit {
            ticket,
            snapshot: Some(snapshot),
        });
        self.stats.commits_started += 1;
        debug!(
            target: "lineup.engine",
            source,
            dest,
            ticket = ticket.value(),
            "optimistic reorder applied, commit issued"
        );

        vec![Effect::Commit { ticket, request }]
    }

    // -- Commit resolution --------------------------------------------------

    /// Feed back the result of the persistence call for `ticket`.
    ///
    /// Success confirms the already-visible order. Failure restores the
    /// pre-drag snapshot wholesale — unless a newer fetch superseded it, in
    /// which case only the failure notice is emitted.
    pub fn resolve_commit(
        &mut self,
        ticket: CommitTicket,
        result: Result<(), CommitError>,
    ) -> Vec<Effect> {
        let pending = match self.pending.take() {
            Some(pending) if pending.ticket == ticket => pending,
            other => {
                self.pending = other;
                warn!(
                    target: "lineup.engine",
                    ticket = ticket.value(),
                    "stale commit resolution ignored"
                );
                self.stats.stale_resolutions += 1;
                return Vec::new();
            }
        };

        match result {
            Ok(()) => {
                debug!(target: "lineup.engine", ticket = ticket.value(), "commit confirmed");
                self.stats.commits_confirmed += 1;
                let mut effects = vec![Effect::Notice(Notice::success(
                    self.config.success_notice.clone(),
                ))];
                if self.config.refetch_on_success {
                    effects.push(Effect::Refetch);
                }
                effects
            }
            Err(err) => {
                let text = err
                    .message()
                    .unwrap_or(&self.config.failure_fallback)
                    .to_string();
                match pending.snapshot {
                    Some(snapshot) => {
                        warn!(
                            target: "lineup.engine",
                            ticket = ticket.value(),
                            error = %err,
                            "commit failed, restoring pre-drag snapshot"
                        );
                        self.items = snapshot;
                        self.stats.rollbacks += 1;
                    }
                    None => {
                        warn!(
                            target: "lineup.engine",
                            ticket = ticket.value(),
                            error = %err,
                            "commit failed after snapshot was superseded, keeping fetched state"
                        );
                    }
                }
                vec![Effect::Notice(Notice::error(text))]
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Splice move
// ---------------------------------------------------------------------------

/// Move `items[source]` to `dest`, shifting the records in between.
///
/// Splice semantics: remove then reinsert. No resorting, no renumbering of
/// other records' `order` fields.
fn move_entry<T>(items: &mut Vec<T>, source: usize, dest: usize) {
    let entry = items.remove(source);
    items.insert(dest, entry);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
