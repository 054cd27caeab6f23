#![forbid(unsafe_code)]

//! The three-callback drag contract exposed to gesture adapters.
//!
//! Any gesture mechanism — pointer drag-and-drop, a list-reordering widget,
//! keyboard move-up/move-down commands — reduces to this vocabulary. The
//! adapter supplies the record's current array index on start and the target
//! index on over/drop; it must deliver [`DragCall::Drop`] exactly once per
//! completed interaction.

/// One drag-lifecycle call into the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragCall {
    /// A drag gesture started on the record at this array index.
    Start(usize),
    /// The drag is hovering over this array index (presentation only).
    Over(usize),
    /// The drag was released on this array index.
    Drop(usize),
    /// The drag ended without a drop (cancelled, focus lost).
    Abandon,
}
