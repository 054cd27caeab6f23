#![forbid(unsafe_code)]

//! Test harness and reference fixtures for Lineup.
//!
//! # Role in Lineup
//! Everything a deterministic reorder test needs: a fixture entity type, a
//! backend with scripted fetch/persist outcomes that records every reorder
//! request it receives, and a session driver that wires engine, adapter,
//! and backend together and executes effects synchronously.
//!
//! # How it fits in the system
//! Production hosts execute [`Effect`](lineup_engine::Effect)s
//! asynchronously; the driver here executes them inline, which makes
//! end-to-end scenarios (fetch → drag → commit → rollback) single
//! deterministic function calls in tests.

pub mod driver;
pub mod fixtures;
pub mod scripted;

pub use driver::SessionDriver;
pub use fixtures::{FixtureEntity, entity};
pub use scripted::ScriptedBackend;
