use super::INFINITY;
use crate::board::{GameState, Move};

/// Per-search state. Lives only for one `search` call.
pub(super) struct SearchContext<'a> {
    state: &'a mut GameState,
    alpha_beta: bool,
    nodes: u64,
}

impl<'a> SearchContext<'a> {
    pub(super) fn new(state: &'a mut GameState, alpha_beta: bool) -> Self {
        SearchContext {
            state,
            alpha_beta,
            nodes: 0,
        }
    }

    pub(super) fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Minimax value of the current position given its legal `moves`, plus
    /// the first move that reached that value.
    ///
    /// The side to move maximizes when White and minimizes when Black. A
    /// position with no moves is terminal and scored statically, which needs
    /// the terminal flags set by the `legal_moves` call that produced `moves`.
    pub(super) fn minimax(
        &mut self,
        moves: &[Move],
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> (i32, Option<Move>) {
        self.nodes += 1;
        if depth == 0 || moves.is_empty() {
            return (self.state.evaluate(), None);
        }

        let maximizing = self.state.white_to_move();
        let log_len = self.state.move_log().len();
        let mut best_score = if maximizing { -INFINITY } else { INFINITY };
        let mut best_move = None;

        for &mv in moves {
            self.state.make_move(mv);
            let replies = self.state.legal_moves();
            let (score, _) = self.minimax(&replies, depth - 1, alpha, beta);
            self.state.undo_move();

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                beta = beta.min(best_score);
            }

            if self.alpha_beta && beta <= alpha {
                break;
            }
        }

        debug_assert_eq!(self.state.move_log().len(), log_len);
        (best_score, best_move)
    }
}
