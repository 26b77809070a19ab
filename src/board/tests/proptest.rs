//! Property-based tests using proptest.

use crate::board::{Color, GameState, Move};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=24usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `num_moves` random legal moves from the start position.
fn random_position(seed: u64, num_moves: usize) -> GameState {
    let mut state = GameState::new();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..num_moves {
        let moves = state.legal_moves();
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        state.make_move(mv);
    }
    state
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: make_move followed by undo_move restores the state exactly,
    /// for every legal move of the position
    #[test]
    fn prop_make_undo_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut state = random_position(seed, num_moves);

        let board = state.board().clone();
        let white_to_move = state.white_to_move();
        let kings = [state.king_square(Color::White), state.king_square(Color::Black)];
        let log_len = state.move_log().len();

        let moves = state.legal_moves();
        for mv in moves {
            state.make_move(mv);
            prop_assert_eq!(state.move_log().len(), log_len + 1);
            prop_assert_ne!(state.white_to_move(), white_to_move);
            let undone = state.undo_move();
            prop_assert_eq!(undone, Some(mv));

            prop_assert_eq!(state.board(), &board);
            prop_assert_eq!(state.white_to_move(), white_to_move);
            prop_assert_eq!(state.king_square(Color::White), kings[0]);
            prop_assert_eq!(state.king_square(Color::Black), kings[1]);
            prop_assert_eq!(state.move_log().len(), log_len);
        }
    }

    /// Property: terminal flags are exclusive and both clear when moves exist
    #[test]
    fn prop_terminal_flags_consistent(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut state = random_position(seed, num_moves);
        let moves = state.legal_moves();

        prop_assert!(!(state.is_checkmate() && state.is_stalemate()));
        if moves.is_empty() {
            prop_assert_eq!(state.is_checkmate(), state.is_in_check());
            prop_assert_eq!(state.is_stalemate(), !state.is_in_check());
        } else {
            prop_assert!(!state.is_checkmate());
            prop_assert!(!state.is_stalemate());
        }
    }

    /// Property: no legal move leaves the mover's own king attacked
    #[test]
    fn prop_legal_moves_never_expose_king(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut state = random_position(seed, num_moves);
        let mover = state.side_to_move();

        let moves = state.legal_moves();
        for mv in moves {
            state.make_move(mv);
            let king = state.king_square(mover);
            let attacked = state
                .pseudo_legal_moves_for(mover.opponent())
                .iter()
                .any(|reply: &Move| reply.to() == king);
            prop_assert!(!attacked, "{} leaves the king on {} attacked", mv, king);
            state.undo_move();
        }
    }

    /// Property: the king cache always points at the king
    #[test]
    fn prop_king_cache_matches_board(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let state = random_position(seed, num_moves);
        for color in Color::BOTH {
            let sq = state.king_square(color);
            prop_assert_eq!(state.piece_at(sq), Some((color, crate::board::Piece::King)));
        }
    }

    /// Property: the legal moves are a subset of the pseudo-legal moves
    #[test]
    fn prop_legal_subset_of_pseudo_legal(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut state = random_position(seed, num_moves);
        let pseudo = state.pseudo_legal_moves_for(state.side_to_move());
        let legal = state.legal_moves();
        prop_assert!(legal.len() <= pseudo.len());
        for mv in &legal {
            prop_assert!(pseudo.contains(mv));
        }
    }
}
