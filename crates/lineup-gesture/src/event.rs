#![forbid(unsafe_code)]

//! Platform-agnostic input vocabulary for list reordering.
//!
//! The host is responsible for hit-testing: a pointer position becomes the
//! array index of the row under it (`row: Some(i)`), or `None` when the
//! pointer is outside the list.

/// What the pointer did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// Primary button (or touch) went down.
    Press,
    /// The pointer moved while down.
    Move,
    /// Primary button (or touch) was released.
    Release,
    /// The interaction was cancelled (Escape, focus loss, pointer capture
    /// lost).
    Cancel,
}

/// One hit-tested pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// Gesture phase.
    pub phase: PointerPhase,
    /// Array index of the row under the pointer, if any.
    pub row: Option<usize>,
}

impl PointerEvent {
    /// Press on a row.
    #[must_use]
    pub fn press(row: usize) -> Self {
        Self {
            phase: PointerPhase::Press,
            row: Some(row),
        }
    }

    /// Move over a row.
    #[must_use]
    pub fn move_over(row: usize) -> Self {
        Self {
            phase: PointerPhase::Move,
            row: Some(row),
        }
    }

    /// Release on a row.
    #[must_use]
    pub fn release(row: usize) -> Self {
        Self {
            phase: PointerPhase::Release,
            row: Some(row),
        }
    }

    /// Release outside the list.
    #[must_use]
    pub fn release_outside() -> Self {
        Self {
            phase: PointerPhase::Release,
            row: None,
        }
    }

    /// Cancel the interaction.
    #[must_use]
    pub fn cancel() -> Self {
        Self {
            phase: PointerPhase::Cancel,
            row: None,
        }
    }
}

/// Keyboard reordering commands for the selected row.
///
/// These synthesize the same start→drop contract as a pointer drag, which
/// keeps reordering accessible without a pointing device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Move the selected row one position up.
    MoveUp,
    /// Move the selected row one position down.
    MoveDown,
}
