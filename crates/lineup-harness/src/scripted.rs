#![forbid(unsafe_code)]

//! A backend with scripted outcomes.
//!
//! Fetch results and persist outcomes are queues: each call consumes the
//! front. An exhausted fetch queue is a test bug and fails loudly; an
//! exhausted persist queue defaults to success, so happy-path tests only
//! script the failures they care about. Every reorder request is recorded
//! verbatim for assertions.

use std::collections::VecDeque;

use lineup_engine::{CollectionBackend, CommitError, FetchError, ReorderRequest};

use crate::fixtures::FixtureEntity;

/// Scripted [`CollectionBackend`] for tests.
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    fetches: VecDeque<Result<Vec<FixtureEntity>, FetchError>>,
    persists: VecDeque<Result<(), CommitError>>,
    requests: Vec<ReorderRequest>,
}

impl ScriptedBackend {
    /// An empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful fetch result.
    pub fn push_fetch(&mut self, items: Vec<FixtureEntity>) -> &mut Self {
        self.fetches.push_back(Ok(items));
        self
    }

    /// Queue a failed fetch.
    pub fn push_fetch_error(&mut self, err: FetchError) -> &mut Self {
        self.fetches.push_back(Err(err));
        self
    }

    /// Queue a failed persist outcome.
    pub fn push_persist_error(&mut self, err: CommitError) -> &mut Self {
        self.persists.push_back(Err(err));
        self
    }

    /// Queue an explicit persist success (only needed between scripted
    /// failures).
    pub fn push_persist_ok(&mut self) -> &mut Self {
        self.persists.push_back(Ok(()));
        self
    }

    /// Every reorder request received, oldest first.
    #[must_use]
    pub fn requests(&self) -> &[ReorderRequest] {
        &self.requests
    }

    /// The recorded requests as pretty JSON, for golden comparisons.
    ///
    /// # Panics
    ///
    /// Panics if serialization fails; requests are plain string lists, so
    /// it cannot in practice.
    #[must_use]
    pub fn requests_json(&self) -> String {
        serde_json::to_string_pretty(&self.requests).expect("serialize reorder requests")
    }
}

impl CollectionBackend<FixtureEntity> for ScriptedBackend {
    fn fetch(&mut self) -> Result<Vec<FixtureEntity>, FetchError> {
        self.fetches
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::new("scripted fetch queue exhausted")))
    }

    fn persist_order(&mut self, request: &ReorderRequest) -> Result<(), CommitError> {
        self.requests.push(request.clone());
        self.persists.pop_front().unwrap_or(Ok(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::entity;

    #[test]
    fn fetch_queue_is_consumed_in_order() {
        let mut backend = ScriptedBackend::new();
        backend
            .push_fetch(vec![entity("a", Some(0), "A")])
            .push_fetch(vec![]);
        assert_eq!(backend.fetch().unwrap().len(), 1);
        assert!(backend.fetch().unwrap().is_empty());
        assert!(backend.fetch().is_err());
    }

    #[test]
    fn persist_defaults_to_success_and_records() {
        let mut backend = ScriptedBackend::new();
        let request = ReorderRequest {
            ordered_ids: vec!["b".to_string(), "a".to_string()],
        };
        assert!(backend.persist_order(&request).is_ok());
        assert_eq!(backend.requests(), &[request]);
    }

    #[test]
    fn scripted_persist_failure_is_returned_once() {
        let mut backend = ScriptedBackend::new();
        backend.push_persist_error(CommitError::network("down"));
        let request = ReorderRequest {
            ordered_ids: vec!["a".to_string()],
        };
        assert!(backend.persist_order(&request).is_err());
        assert!(backend.persist_order(&request).is_ok());
        assert_eq!(backend.requests().len(), 2);
    }
}
