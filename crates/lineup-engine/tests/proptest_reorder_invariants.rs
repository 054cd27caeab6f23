//! Property tests for the reorder engine's optimistic-update invariants.

use lineup_engine::{CommitError, CommitTicket, Effect, ReorderEngine, ReorderRequest};
use lineup_harness::{FixtureEntity, entity};
use proptest::prelude::*;

fn catalog(len: usize) -> Vec<FixtureEntity> {
    (0..len)
        .map(|i| entity(&format!("r{i}"), Some(i as u32), &format!("Row {i}")))
        .collect()
}

fn loaded_engine(len: usize) -> ReorderEngine<FixtureEntity> {
    let mut engine = ReorderEngine::with_defaults();
    assert!(engine.apply_fetch(catalog(len)));
    engine
}

fn ids(engine: &ReorderEngine<FixtureEntity>) -> Vec<String> {
    engine.items().iter().map(|r| r.id.clone()).collect()
}

fn single_commit(effects: &[Effect]) -> (CommitTicket, ReorderRequest) {
    match effects {
        [Effect::Commit { ticket, request }] => (*ticket, request.clone()),
        other => panic!("expected one commit effect, got {other:?}"),
    }
}

/// (len, source, dest) with both indices in bounds.
fn move_strategy() -> impl Strategy<Value = (usize, usize, usize)> {
    (2usize..12).prop_flat_map(|len| (Just(len), 0..len, 0..len))
}

proptest! {
    /// The optimistic mutation matches remove-then-insert splice semantics.
    #[test]
    fn drop_matches_splice_model((len, source, dest) in move_strategy()) {
        let mut engine = loaded_engine(len);
        prop_assert!(engine.drag_start(source));
        let effects = engine.drop_at(dest);

        let mut model: Vec<String> = catalog(len).into_iter().map(|r| r.id).collect();
        if source != dest {
            let moved = model.remove(source);
            model.insert(dest, moved);
        }
        prop_assert_eq!(ids(&engine), model.clone());

        // The request carries exactly the mutated array's id sequence.
        if source != dest {
            let (_, request) = single_commit(&effects);
            prop_assert_eq!(request.ordered_ids, model);
        } else {
            prop_assert!(effects.is_empty());
        }
    }

    /// A failed commit restores the exact pre-drag array, for every move.
    #[test]
    fn rollback_restores_exact_array((len, source, dest) in move_strategy()) {
        prop_assume!(source != dest);
        let mut engine = loaded_engine(len);
        let before = ids(&engine);

        prop_assert!(engine.drag_start(source));
        let (ticket, _) = single_commit(&engine.drop_at(dest));
        engine.resolve_commit(ticket, Err(CommitError::network("injected")));

        prop_assert_eq!(ids(&engine), before);
        prop_assert!(!engine.is_committing());
    }

    /// However many drops are attempted before the first commit resolves,
    /// exactly one request is issued.
    #[test]
    fn drop_storm_issues_one_request(
        (len, source, dest) in move_strategy(),
        extra in proptest::collection::vec((0usize..12, 0usize..12), 0..6),
    ) {
        prop_assume!(source != dest);
        let mut engine = loaded_engine(len);
        prop_assert!(engine.drag_start(source));
        let mut commits = engine
            .drop_at(dest)
            .iter()
            .filter(|e| matches!(e, Effect::Commit { .. }))
            .count();

        for (s, d) in extra {
            engine.drag_start(s % len);
            commits += engine
                .drop_at(d % len)
                .iter()
                .filter(|e| matches!(e, Effect::Commit { .. }))
                .count();
        }
        prop_assert_eq!(commits, 1);
        prop_assert_eq!(engine.stats().commits_started, 1);
    }

    /// Confirm-then-stale-resolve never double-applies: after a success,
    /// replaying the same ticket with a failure changes nothing.
    #[test]
    fn replayed_resolution_is_inert((len, source, dest) in move_strategy()) {
        prop_assume!(source != dest);
        let mut engine = loaded_engine(len);
        prop_assert!(engine.drag_start(source));
        let (ticket, _) = single_commit(&engine.drop_at(dest));

        engine.resolve_commit(ticket, Ok(()));
        let after_confirm = ids(&engine);
        engine.resolve_commit(ticket, Err(CommitError::network("late duplicate")));
        prop_assert_eq!(ids(&engine), after_confirm);
        prop_assert_eq!(engine.stats().rollbacks, 0);
    }
}
