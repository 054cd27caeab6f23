//! End-to-end reorder sessions: fetch → drag → commit → confirm/rollback,
//! driven synchronously through the scripted backend.

use lineup_engine::{
    CommitError, EngineConfig, FetchError, Selection, Severity,
};
use lineup_gesture::{AdapterConfig, KeyCommand, PointerEvent};
use lineup_harness::{ScriptedBackend, SessionDriver, entity};

fn backend_with_catalog() -> ScriptedBackend {
    let mut backend = ScriptedBackend::new();
    backend.push_fetch(vec![
        entity("x", Some(2), "B"),
        entity("y", Some(1), "A"),
    ]);
    backend
}

#[test]
fn failed_commit_rolls_back_and_notifies() {
    let mut backend = backend_with_catalog();
    backend.push_persist_error(CommitError::network("gateway timeout"));
    let mut session = SessionDriver::new(backend);

    // Fetch sorts by order: y (1) before x (2).
    session.fetch();
    assert_eq!(session.ids(), vec!["y", "x"]);

    // Drag y from index 0 to index 1. The optimistic order [x, y] is what
    // the request carries; the failure then restores [y, x] wholesale.
    session.drag(0, 1);

    assert_eq!(session.ids(), vec!["y", "x"]);
    assert_eq!(session.backend().requests().len(), 1);
    assert_eq!(
        session.backend().requests()[0].ordered_ids,
        vec!["x", "y"]
    );
    assert_eq!(session.notices().len(), 1);
    assert_eq!(session.notices()[0].severity, Severity::Error);
    assert_eq!(session.notices()[0].text, "gateway timeout");
    assert_eq!(session.engine().stats().rollbacks, 1);
}

#[test]
fn confirmed_commit_keeps_optimistic_order() {
    let mut session = SessionDriver::new(backend_with_catalog());
    session.fetch();
    session.drag(0, 1);

    assert_eq!(session.ids(), vec!["x", "y"]);
    assert_eq!(session.notices().len(), 1);
    assert_eq!(session.notices()[0].severity, Severity::Success);
    assert!(!session.engine().is_committing());
}

#[test]
fn background_refetch_does_not_clobber_committed_order() {
    let mut backend = backend_with_catalog();
    // The server echo of the reorder has not landed yet: a background
    // refetch still returns the original order fields.
    backend.push_fetch(vec![
        entity("x", Some(2), "B"),
        entity("y", Some(1), "A"),
    ]);
    let mut session = SessionDriver::new(backend);

    session.fetch();
    session.drag(0, 1);
    assert_eq!(session.ids(), vec!["x", "y"]);

    session.fetch();
    assert_eq!(session.ids(), vec!["x", "y"]);
    assert_eq!(session.engine().stats().syncs_skipped, 1);
}

#[test]
fn refetch_on_success_reconciles_with_server_echo() {
    let mut backend = backend_with_catalog();
    // Server echo after the commit: new positional orders.
    backend.push_fetch(vec![
        entity("x", Some(0), "B"),
        entity("y", Some(1), "A"),
    ]);
    let mut session = SessionDriver::with_configs(
        backend,
        EngineConfig::new().refetch_on_success(true),
        AdapterConfig::default(),
    );

    session.fetch();
    session.drag(0, 1);

    assert_eq!(session.ids(), vec!["x", "y"]);
    assert_eq!(session.engine().stats().syncs_applied, 2);
    assert!(!session.engine().is_committing());
}

#[test]
fn filtered_view_produces_no_mutation_and_no_request() {
    let mut session = SessionDriver::new(backend_with_catalog());
    session.fetch();
    session
        .engine_mut()
        .set_selection(Selection::Only("published".to_string()));

    session.drag(0, 1);

    assert_eq!(session.ids(), vec!["y", "x"]);
    assert!(session.backend().requests().is_empty());
    assert!(session.notices().is_empty());
}

#[test]
fn search_term_blocks_reorder_until_cleared() {
    let mut session = SessionDriver::new(backend_with_catalog());
    session.fetch();

    session.engine_mut().set_search_term("beach");
    session.drag(0, 1);
    assert!(session.backend().requests().is_empty());

    session.engine_mut().set_search_term("");
    session.drag(0, 1);
    assert_eq!(session.backend().requests().len(), 1);
}

#[test]
fn keyboard_move_issues_the_same_request() {
    let mut session = SessionDriver::new(backend_with_catalog());
    session.fetch();

    session.key(KeyCommand::MoveDown, Some(0));

    assert_eq!(session.ids(), vec!["x", "y"]);
    assert_eq!(
        session.backend().requests()[0].ordered_ids,
        vec!["x", "y"]
    );
}

#[test]
fn duplicate_release_sends_exactly_one_request() {
    let mut session = SessionDriver::new(backend_with_catalog());
    session.fetch();

    session.pointer(PointerEvent::press(0));
    session.pointer(PointerEvent::move_over(1));
    session.pointer(PointerEvent::release(1));
    // Platform fires the release a second time.
    session.pointer(PointerEvent::release(1));

    assert_eq!(session.backend().requests().len(), 1);
    assert_eq!(session.ids(), vec!["x", "y"]);
}

#[test]
fn fetch_failure_keeps_previous_working_copy() {
    let mut backend = backend_with_catalog();
    backend.push_fetch_error(FetchError::new("upstream 503"));
    let mut session = SessionDriver::new(backend);

    session.fetch();
    assert_eq!(session.ids(), vec!["y", "x"]);

    session.fetch();
    assert_eq!(session.ids(), vec!["y", "x"]);
    assert_eq!(session.notices().len(), 1);
    assert_eq!(session.notices()[0].severity, Severity::Error);
}

#[test]
fn unordered_entities_sort_after_ordered_ones() {
    let mut backend = ScriptedBackend::new();
    backend.push_fetch(vec![
        entity("new", None, "Brand new"),
        entity("a", Some(1), "First"),
        entity("b", Some(2), "Second"),
    ]);
    let mut session = SessionDriver::new(backend);
    session.fetch();
    assert_eq!(session.ids(), vec!["a", "b", "new"]);
}

#[test]
fn empty_fetch_clears_the_collection() {
    let mut backend = backend_with_catalog();
    backend.push_fetch(Vec::new());
    let mut session = SessionDriver::new(backend);

    session.fetch();
    assert_eq!(session.ids().len(), 2);
    session.fetch();
    assert!(session.ids().is_empty());
}
