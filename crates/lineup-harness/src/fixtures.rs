#![forbid(unsafe_code)]

//! Fixture entity for tests.

use lineup_core::Orderable;

/// A minimal reorderable record for test scenarios.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FixtureEntity {
    /// Backend-assigned id.
    pub id: String,
    /// Persisted position, if any.
    pub order: Option<u32>,
    /// Display name; the ordering tie-break.
    pub display_name: String,
}

impl Orderable for FixtureEntity {
    fn id(&self) -> &str {
        &self.id
    }

    fn order(&self) -> Option<u32> {
        self.order
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }
}

/// Build a fixture entity.
#[must_use]
pub fn entity(id: &str, order: Option<u32>, display_name: &str) -> FixtureEntity {
    FixtureEntity {
        id: id.to_string(),
        order,
        display_name: display_name.to_string(),
    }
}
