//! Property tests for the drag adapter's translation invariants.

use lineup_engine::DragCall;
use lineup_gesture::{AdapterConfig, DragAdapter, PointerEvent, PointerPhase};
use proptest::prelude::*;

fn event_strategy() -> impl Strategy<Value = PointerEvent> {
    (0usize..4, proptest::option::of(0usize..8)).prop_map(|(phase, row)| {
        let phase = match phase {
            0 => PointerPhase::Press,
            1 => PointerPhase::Move,
            2 => PointerPhase::Release,
            _ => PointerPhase::Cancel,
        };
        PointerEvent { phase, row }
    })
}

proptest! {
    /// However chaotic the event stream, a `Drop` is only ever emitted for
    /// an interaction that began with a press: drops can never outnumber
    /// presses, and two drops always have a press between them.
    #[test]
    fn drop_requires_a_fresh_press(events in proptest::collection::vec(event_strategy(), 0..64)) {
        let mut adapter = DragAdapter::default();
        let mut presses_since_drop = 0u32;
        for event in &events {
            if event.phase == PointerPhase::Press && event.row.is_some() {
                presses_since_drop += 1;
            }
            for call in adapter.on_pointer(event, true) {
                if matches!(call, DragCall::Drop(_)) {
                    prop_assert!(presses_since_drop > 0, "drop without a fresh press");
                    presses_since_drop = 0;
                }
            }
        }
    }

    /// A disabled adapter never emits anything except a single `Abandon`
    /// for an interrupted track.
    #[test]
    fn disabled_adapter_is_silent(events in proptest::collection::vec(event_strategy(), 0..64)) {
        let mut adapter = DragAdapter::default();
        for event in &events {
            for call in adapter.on_pointer(event, false) {
                prop_assert_eq!(call, DragCall::Abandon);
            }
        }
    }

    /// `Start` is emitted at most once per press, in both arming modes.
    #[test]
    fn one_start_per_press(
        events in proptest::collection::vec(event_strategy(), 0..64),
        on_press in any::<bool>(),
    ) {
        let mut adapter = DragAdapter::new(AdapterConfig::new().start_on_press(on_press));
        let mut starts_since_press = 0u32;
        for event in &events {
            if event.phase == PointerPhase::Press {
                starts_since_press = 0;
            }
            for call in adapter.on_pointer(event, true) {
                if matches!(call, DragCall::Start(_)) {
                    starts_since_press += 1;
                    prop_assert!(starts_since_press <= 1);
                }
            }
        }
    }
}
