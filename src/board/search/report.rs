//! Search reporting through the `log` facade (`logging` feature).

use super::SearchResult;

#[cfg(feature = "logging")]
pub(super) fn search_started(depth: u32, root_moves: usize) {
    log::trace!("search depth {depth} over {root_moves} root moves");
}

#[cfg(not(feature = "logging"))]
pub(super) fn search_started(_depth: u32, _root_moves: usize) {}

#[cfg(feature = "logging")]
pub(super) fn search_finished(depth: u32, result: &SearchResult) {
    let best = result
        .best_move
        .map_or_else(|| "none".to_string(), |m| m.to_string());
    log::debug!(
        "search depth {depth} best {best} score {} nodes {}",
        result.score,
        result.nodes
    );
}

#[cfg(not(feature = "logging"))]
pub(super) fn search_finished(_depth: u32, _result: &SearchResult) {}
