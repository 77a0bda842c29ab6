//! Property-based tests for the tic-tac-toe state machine.
//!
//! Move sequences are drawn from 0..12 so roughly a quarter of the inputs
//! are off the board, and repeats exercise occupied cells.

use proptest::prelude::*;
use tictactoe_core::{GameState, GameStatus, LINES, Player};

fn arb_moves() -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(0usize..12, 0..30)
}

/// Count of lines held entirely by one player.
fn complete_lines(state: &GameState) -> usize {
    LINES
        .iter()
        .filter(|line| {
            let marks: Vec<_> = line
                .iter()
                .filter_map(|&i| state.board().get(i).and_then(|cell| cell.mark()))
                .collect();
            marks.len() == 3 && marks.iter().all(|&m| m == marks[0])
        })
        .count()
}

proptest! {
    #[test]
    fn move_count_matches_occupied_cells(moves in arb_moves()) {
        let mut state = GameState::new();
        for index in moves {
            state = state.apply_move(index);
            prop_assert_eq!(usize::from(state.move_count()), state.board().occupied_count());
        }
    }

    #[test]
    fn current_player_tracks_parity(moves in arb_moves()) {
        let mut state = GameState::new();
        for index in moves {
            state = state.apply_move(index);
            let expected = if state.move_count() % 2 == 0 { Player::X } else { Player::O };
            prop_assert_eq!(state.current_player(), expected);
        }
    }

    #[test]
    fn accepted_moves_flip_the_player(moves in arb_moves()) {
        let mut state = GameState::new();
        for index in moves {
            let next = state.apply_move(index);
            if next != state {
                prop_assert_eq!(next.current_player(), state.current_player().opponent());
                prop_assert_eq!(next.move_count(), state.move_count() + 1);
            }
            state = next;
        }
    }

    #[test]
    fn illegal_moves_never_change_state(moves in arb_moves(), probe in 0usize..12) {
        let state = moves.into_iter().fold(GameState::new(), |s, i| s.apply_move(i));
        let legal = !state.is_decided() && state.board().is_empty(probe);
        if !legal {
            prop_assert_eq!(state.apply_move(probe), state);
            prop_assert!(state.try_apply_move(probe).is_err());
        }
    }

    #[test]
    fn winning_line_set_iff_a_line_is_complete(moves in arb_moves()) {
        let state = moves.into_iter().fold(GameState::new(), |s, i| s.apply_move(i));
        prop_assert_eq!(state.winning_line().is_some(), complete_lines(&state) > 0);
        if let GameStatus::Won { player, line } = state.status() {
            for index in line {
                prop_assert_eq!(state.board().get(index).and_then(|c| c.mark()), Some(player));
            }
        }
    }

    #[test]
    fn decided_games_stay_decided(moves in arb_moves(), extra in arb_moves()) {
        let state = moves.into_iter().fold(GameState::new(), |s, i| s.apply_move(i));
        if state.is_decided() {
            let after = extra.into_iter().fold(state, |s, i| s.apply_move(i));
            prop_assert_eq!(after, state);
        }
    }

    #[test]
    fn reset_returns_to_initial_state(moves in arb_moves()) {
        let mut game = tictactoe_core::Game::new();
        for index in moves {
            game.apply_move(index);
        }
        game.reset();
        prop_assert_eq!(game.state(), &GameState::new());
    }
}
