#![forbid(unsafe_code)]

//! Monotonic counters describing one engine's lifetime.

/// Counters over everything an engine has seen.
///
/// All counts are monotonic; the struct is cheap to copy out for display or
/// assertions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineStats {
    /// Fetches that replaced the working copy.
    pub syncs_applied: u64,
    /// Fetches skipped because the fingerprint was unchanged.
    pub syncs_skipped: u64,
    /// Fetch failures surfaced.
    pub fetch_errors: u64,
    /// Drags accepted into the Dragging phase.
    pub drags_started: u64,
    /// Drags that ended without a commit (same index, cancelled, stale).
    pub drags_abandoned: u64,
    /// Commit requests issued.
    pub commits_started: u64,
    /// Commits confirmed by the backend.
    pub commits_confirmed: u64,
    /// Failed commits rolled back to the pre-drag snapshot.
    pub rollbacks: u64,
    /// Drag input rejected because the gate was closed.
    pub gated_rejections: u64,
    /// Drag input rejected because a commit was already in flight.
    pub busy_rejections: u64,
    /// Commit resolutions ignored because their ticket was stale.
    pub stale_resolutions: u64,
}
