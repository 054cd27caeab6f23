#![forbid(unsafe_code)]

//! Gesture translation: platform input to engine drag calls.
//!
//! # Role in Lineup
//! `lineup-gesture` is the input layer. It turns hit-tested pointer events
//! and keyboard move commands into the engine's three-callback contract
//! ([`DragCall`](lineup_engine::DragCall)) and carries no ordering logic of
//! its own.
//!
//! # Primary responsibilities
//! - **PointerEvent / KeyCommand**: a platform-agnostic input vocabulary;
//!   any list UI that can hit-test a pointer to a row index can produce it.
//! - **DragAdapter**: the press → track → release state machine, including
//!   the exactly-once drop guarantee (duplicate release events are
//!   swallowed, never forwarded).
//!
//! # How it fits in the system
//! The host feeds the adapter, the adapter emits `DragCall`s, the engine
//! consumes them. While the reorder gate is closed or a commit is in
//! flight, the host passes `enabled = false` and the adapter suppresses
//! translation entirely.

pub mod adapter;
pub mod event;

pub use adapter::{AdapterConfig, DragAdapter, apply_calls};
pub use event::{KeyCommand, PointerEvent, PointerPhase};
