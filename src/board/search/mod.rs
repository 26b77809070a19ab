//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! The search runs on the caller's `GameState`, making and taking back moves
//! in strict stack order, so the position is unchanged when it returns.
//! White maximizes and Black minimizes a pure material evaluation (see
//! [`GameState::evaluate`]).

mod minimax;
mod params;
mod report;

use rand::seq::SliceRandom;
use rand::Rng;

use super::{GameState, Move};
pub use params::SearchParams;

/// Bound larger than any evaluation, including mate.
pub(crate) const INFINITY: i32 = 1_000_000;

/// Outcome of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen move, `None` only when there were no moves to choose from
    pub best_move: Option<Move>,
    /// Minimax value of the position from White's point of view
    pub score: i32,
    /// Positions visited, including leaves
    pub nodes: u64,
}

/// Pick a move for the side to move using the default settings (depth 2,
/// shuffled root, alpha-beta).
///
/// `moves` must be the current legal moves, as returned by
/// [`GameState::legal_moves`]. An empty list yields `None`, meaning the game
/// is over; it is not an error.
///
/// # Example
/// ```
/// use mailbox_chess::board::{find_best_move, GameState};
///
/// let mut state = GameState::new();
/// let moves = state.legal_moves();
/// let mv = find_best_move(&mut state, moves).expect("start position has moves");
/// state.make_move(mv);
/// ```
pub fn find_best_move(state: &mut GameState, moves: Vec<Move>) -> Option<Move> {
    search(state, moves, &SearchParams::default(), &mut rand::thread_rng()).best_move
}

/// Search `moves` (the legal moves of the current position) and return the
/// best one with its score.
///
/// Ties at the root go to the first move that reached the best score in the
/// order searched; later moves with an equal score do not replace it.
pub fn search<R: Rng + ?Sized>(
    state: &mut GameState,
    mut moves: Vec<Move>,
    params: &SearchParams,
    rng: &mut R,
) -> SearchResult {
    let depth = params.depth.max(1);
    report::search_started(depth, moves.len());

    if moves.is_empty() {
        let result = SearchResult {
            best_move: None,
            score: state.evaluate(),
            nodes: 1,
        };
        report::search_finished(depth, &result);
        return result;
    }

    if params.shuffle {
        moves.shuffle(rng);
    }

    let mut ctx = minimax::SearchContext::new(state, params.alpha_beta);
    let (score, best_move) = ctx.minimax(&moves, depth, -INFINITY, INFINITY);
    let result = SearchResult {
        best_move,
        score,
        nodes: ctx.nodes(),
    };
    report::search_finished(depth, &result);
    result
}
