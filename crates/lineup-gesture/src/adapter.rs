#![forbid(unsafe_code)]

//! The drag interaction adapter: pointer/keyboard input to [`DragCall`]s.
//!
//! # State Machine
//!
//! ```text
//! Idle ──press on row──► Armed ──move to other row──► Tracking
//!  ▲                       │                             │
//!  │   release (click,     │                             │ release on row
//!  ◄──────no drag)─────────┘                             ▼
//!  ◄──────────────────────────────────────────── Drop emitted, Idle
//! ```
//!
//! # Invariants
//!
//! 1. [`DragCall::Drop`] is emitted **exactly once** per completed
//!    press→release interaction. A release arriving in `Idle` (a duplicate
//!    native event, or a release with no press) is swallowed; forwarding it
//!    would trigger a second, conflicting reorder request against an
//!    already-mutated array.
//! 2. While `enabled` is false (gate closed, commit in flight) no calls are
//!    emitted at all; an interrupted track emits a final
//!    [`DragCall::Abandon`] so the engine's highlight state clears.
//! 3. The adapter never inspects or mutates the ordered collection; it only
//!    relays indices the host hit-tested.

use lineup_core::Orderable;
use lineup_engine::{DragCall, Effect, ReorderEngine};
use tracing::debug;

use crate::event::{KeyCommand, PointerEvent, PointerPhase};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Tunables for the adapter.
#[derive(Debug, Clone)]
pub struct AdapterConfig {
    /// Emit `Start` on press instead of on the first movement to a
    /// different row. Off by default so plain clicks never enter a drag.
    pub start_on_press: bool,
    /// Translate [`KeyCommand`]s. On by default.
    pub keyboard_moves: bool,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            start_on_press: false,
            keyboard_moves: true,
        }
    }
}

impl AdapterConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether `Start` fires on press.
    #[must_use]
    pub fn start_on_press(mut self, on_press: bool) -> Self {
        self.start_on_press = on_press;
        self
    }

    /// Set whether keyboard move commands are translated.
    #[must_use]
    pub fn keyboard_moves(mut self, enabled: bool) -> Self {
        self.keyboard_moves = enabled;
        self
    }
}

// ---------------------------------------------------------------------------
// DragAdapter
// ---------------------------------------------------------------------------

/// Tracks one pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// No interaction.
    Idle,
    /// Pressed on a row; not yet a drag.
    Armed { source: usize },
    /// Dragging; `Start` has been emitted.
    Tracking { source: usize },
}

/// Stateful translator from hit-tested input to engine drag calls.
#[derive(Debug)]
pub struct DragAdapter {
    config: AdapterConfig,
    phase: Phase,
    swallowed_releases: u64,
}

impl Default for DragAdapter {
    fn default() -> Self {
        Self::new(AdapterConfig::default())
    }
}

impl DragAdapter {
    /// Create an adapter with the given configuration.
    #[must_use]
    pub fn new(config: AdapterConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
            swallowed_releases: 0,
        }
    }

    /// Whether a drag is currently being tracked.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        matches!(self.phase, Phase::Tracking { .. })
    }

    /// Release events swallowed by the exactly-once guard.
    #[must_use]
    pub fn swallowed_releases(&self) -> u64 {
        self.swallowed_releases
    }

    /// Reset to idle without emitting anything.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Translate one pointer event.
    ///
    /// `enabled` is the host's combined "reordering currently permitted"
    /// flag (gate open, no commit in flight); while false, translation is
    /// suppressed entirely.
    pub fn on_pointer(&mut self, event: &PointerEvent, enabled: bool) -> Vec<DragCall> {
        if !enabled {
            return self.suppress();
        }

        match event.phase {
            PointerPhase::Press => match event.row {
                Some(row) => {
                    if self.config.start_on_press {
                        self.phase = Phase::Tracking { source: row };
                        vec![DragCall::Start(row)]
                    } else {
                        self.phase = Phase::Armed { source: row };
                        Vec::new()
                    }
                }
                // Pressed outside the list.
                None => {
                    self.phase = Phase::Idle;
                    Vec::new()
                }
            },
            PointerPhase::Move => match (self.phase, event.row) {
                (Phase::Armed { source }, Some(row)) if row != source => {
                    self.phase = Phase::Tracking { source };
                    vec![DragCall::Start(source), DragCall::Over(row)]
                }
                (Phase::Tracking { .. }, Some(row)) => vec![DragCall::Over(row)],
                _ => Vec::new(),
            },
            PointerPhase::Release => match self.phase {
                Phase::Tracking { .. } => {
                    self.phase = Phase::Idle;
                    match event.row {
                        Some(row) => vec![DragCall::Drop(row)],
                        // Released outside the list: nothing to drop onto.
                        None => vec![DragCall::Abandon],
                    }
                }
                Phase::Armed { .. } => {
                    // A plain click; no drag ever started.
                    self.phase = Phase::Idle;
                    Vec::new()
                }
                Phase::Idle => {
                    // Duplicate native release. Exactly-once guard.
                    self.swallowed_releases += 1;
                    debug!(target: "lineup.gesture", "duplicate release swallowed");
                    Vec::new()
                }
            },
            PointerPhase::Cancel => {
                let was_tracking = self.is_tracking();
                self.phase = Phase::Idle;
                if was_tracking {
                    vec![DragCall::Abandon]
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// Translate one keyboard move command for the selected row.
    ///
    /// Synthesizes the same start→drop pair a pointer drag produces.
    /// `len` is the current working-copy length; moves past either end are
    /// ignored. A command arriving mid-pointer-drag is ignored rather than
    /// interleaved.
    pub fn on_key(
        &mut self,
        command: KeyCommand,
        selected: Option<usize>,
        len: usize,
        enabled: bool,
    ) -> Vec<DragCall> {
        if !enabled || !self.config.keyboard_moves {
            return Vec::new();
        }
        if self.phase != Phase::Idle {
            debug!(target: "lineup.gesture", "key move ignored during pointer drag");
            return Vec::new();
        }
        let Some(source) = selected else {
            return Vec::new();
        };
        if source >= len {
            return Vec::new();
        }

        let dest = match command {
            KeyCommand::MoveUp => source.checked_sub(1),
            KeyCommand::MoveDown => {
                let below = source + 1;
                (below < len).then_some(below)
            }
        };
        match dest {
            Some(dest) => vec![DragCall::Start(source), DragCall::Drop(dest)],
            None => Vec::new(),
        }
    }

    /// Suppressed-input path: clear state, telling the engine if a track
    /// was interrupted.
    fn suppress(&mut self) -> Vec<DragCall> {
        let was_tracking = self.is_tracking();
        self.phase = Phase::Idle;
        if was_tracking {
            debug!(target: "lineup.gesture", "translation disabled mid-drag, abandoning");
            vec![DragCall::Abandon]
        } else {
            Vec::new()
        }
    }
}

/// Apply a batch of adapter calls to an engine, collecting the effects.
pub fn apply_calls<T: Orderable + Clone>(
    engine: &mut ReorderEngine<T>,
    calls: impl IntoIterator<Item = DragCall>,
) -> Vec<Effect> {
    let mut effects = Vec::new();
    for call in calls {
        effects.extend(engine.apply(call));
    }
    effects
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
