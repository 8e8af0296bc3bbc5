//! Property tests over arbitrary move sequences.

use proptest::prelude::*;
use tictac_engine::{Cell, GameEngine, GameState, Marker, PlayOutcome};

/// Arbitrary sequences of in-range indices, repeats allowed.
fn moves() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..9, 0..20)
}

proptest! {
    #[test]
    fn placed_markers_alternate_starting_with_x(indices in moves()) {
        let mut engine = GameEngine::new();
        let mut expected = Marker::X;
        for index in indices {
            if let PlayOutcome::Placed(placement) = engine.play(index).unwrap() {
                prop_assert_eq!(placement.marker, expected);
                expected = expected.opponent();
            }
        }
    }

    #[test]
    fn play_changes_at_most_the_target_cell(indices in moves(), target in 0usize..9) {
        let mut engine = GameEngine::new();
        for index in indices {
            engine.play(index).unwrap();
        }
        let before = engine.state().board().clone();
        engine.play(target).unwrap();
        let after = engine.state().board();

        for cell in Cell::ALL {
            if cell.index() != target {
                prop_assert_eq!(before.get(cell), after.get(cell));
            }
        }
    }

    #[test]
    fn marked_cells_stay_marked(indices in moves()) {
        let mut engine = GameEngine::new();
        let mut seen = engine.state().board().clone();
        for index in indices {
            engine.play(index).unwrap();
            let now = engine.state().board();
            for cell in Cell::ALL {
                if let Some(marker) = seen.get(cell).marker() {
                    prop_assert_eq!(now.get(cell).marker(), Some(marker));
                }
            }
            seen = now.clone();
        }
    }

    #[test]
    fn ignored_moves_change_nothing(indices in moves()) {
        let mut engine = GameEngine::new();
        for index in indices {
            let before = engine.state().clone();
            let outcome = engine.play(index).unwrap();
            if outcome.is_ignored() {
                prop_assert_eq!(engine.state(), &before);
                prop_assert!(outcome.updates().is_empty());
            }
        }
    }

    #[test]
    fn reset_restores_initial_state(indices in moves()) {
        let mut engine = GameEngine::new();
        for index in indices {
            engine.play(index).unwrap();
        }
        engine.reset();
        prop_assert_eq!(engine.state(), &GameState::new());
    }
}
