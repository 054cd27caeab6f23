#![forbid(unsafe_code)]

//! Core: entity contract, stable ordering key, and fetch-sync reduction.
//!
//! # Role in Lineup
//! `lineup-core` is the pure-logic layer. It owns the [`Orderable`] contract
//! that every reorderable record implements, the deterministic comparator
//! that turns a raw fetch into a rendering order, and the fingerprint-guarded
//! sync reduction that decides whether a fetched list may replace the
//! client's working copy.
//!
//! # Primary responsibilities
//! - **Orderable**: id / optional order / display-name accessors.
//! - **Order key**: total-order comparator; missing order sorts last, ties
//!   break on the display name, case-insensitively.
//! - **FetchFingerprint**: identity+order+name capture of a fetched list.
//! - **SyncReducer**: unchanged fetch ⇒ no-op, changed fetch ⇒ sorted
//!   wholesale replacement.
//!
//! # How it fits in the system
//! The engine (`lineup-engine`) owns the ordered working copy and consumes
//! this crate's reduction decisions; it never re-derives ordering logic of
//! its own. Nothing in this crate performs I/O.

pub mod entity;
pub mod fingerprint;
pub mod order_key;
pub mod sync;

pub use entity::Orderable;
pub use fingerprint::FetchFingerprint;
pub use order_key::{order_key_cmp, sort_by_order_key};
pub use sync::{SyncOutcome, SyncReducer};
