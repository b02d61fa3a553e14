use proptest::prelude::*;
use tabkit_navigation::{move_focus, FocusDirection, FocusEngine, KeyOutcome, RovingTabIndex};

fn direction() -> impl Strategy<Value = FocusDirection> {
    prop_oneof![
        Just(FocusDirection::Next),
        Just(FocusDirection::Previous),
        Just(FocusDirection::First),
        Just(FocusDirection::Last),
    ]
}

proptest! {
    #[test]
    fn next_n_times_returns_to_start((len, start) in (1usize..64).prop_flat_map(|n| (Just(n), 0..n))) {
        let mut cursor = start;
        for _ in 0..len {
            cursor = move_focus(FocusDirection::Next, Some(cursor), len).unwrap().target;
        }
        prop_assert_eq!(cursor, start);
    }

    #[test]
    fn previous_undoes_next((len, start) in (1usize..64).prop_flat_map(|n| (Just(n), 0..n))) {
        let forward = move_focus(FocusDirection::Next, Some(start), len).unwrap().target;
        let back = move_focus(FocusDirection::Previous, Some(forward), len).unwrap().target;
        prop_assert_eq!(back, start);
    }

    #[test]
    fn first_is_always_zero((len, start) in (1usize..64).prop_flat_map(|n| (Just(n), 0..n))) {
        prop_assert_eq!(move_focus(FocusDirection::First, Some(start), len).unwrap().target, 0);
        prop_assert_eq!(move_focus(FocusDirection::Last, Some(start), len).unwrap().target, len - 1);
    }

    #[test]
    fn exactly_one_focusable_after_any_moves(
        len in 1usize..32,
        moves in prop::collection::vec(direction(), 0..50),
    ) {
        let mut roving = RovingTabIndex::new(len, None);
        for direction in moves {
            // focus follows the roving mark, as it does after each applied move
            if let Some(transition) = move_focus(direction, roving.focusable(), len) {
                roving.apply(&transition);
                prop_assert_eq!(transition.hints().iter().filter(|h| h.is_focusable()).count(), 1);
            }
            let focusable = roving.hints().iter().filter(|h| h.is_focusable()).count();
            prop_assert_eq!(focusable, 1);
        }
    }

    #[test]
    fn empty_strip_never_moves(direction in direction(), focused in prop::option::of(0usize..4)) {
        prop_assert!(move_focus(direction, focused, 0).is_none());
    }

    #[test]
    fn unknown_keys_are_never_claimed(key in "[a-z]{2,8}", len in 0usize..8) {
        let engine = FocusEngine::default();
        prop_assert_eq!(engine.handle_key(&key, Some(0), len), KeyOutcome::Ignored);
    }
}
