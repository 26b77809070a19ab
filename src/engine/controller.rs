//! Background search job.

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::Mutex;

use crate::board::{search, GameState, SearchParams, SearchResult};

/// Search thread stack size (8 MB)
const SEARCH_STACK_SIZE: usize = 8 * 1024 * 1024;

/// A search running on its own thread over a private copy of a position.
///
/// The caller's `GameState` is cloned when the job starts, so the caller may
/// keep playing on it. There is no way to stop a job early; a fixed-depth
/// search always runs to completion.
pub struct SearchJob {
    /// Filled in by the worker when the search completes
    result: Arc<Mutex<Option<SearchResult>>>,
    /// Handle to the search thread
    handle: JoinHandle<()>,
}

impl SearchJob {
    /// Start searching the current position with `params`.
    ///
    /// The root moves are the legal moves of `state`, generated on the
    /// worker. Fails only if the operating system refuses to create the
    /// thread.
    pub fn spawn(state: &GameState, params: SearchParams) -> io::Result<Self> {
        let mut search_state = state.clone();
        let result = Arc::new(Mutex::new(None));
        let slot = Arc::clone(&result);

        #[cfg(feature = "logging")]
        log::debug!(
            "spawning search job: depth {} to move {}",
            params.depth,
            search_state.side_to_move()
        );

        let handle = thread::Builder::new()
            .name("search".into())
            .stack_size(SEARCH_STACK_SIZE)
            .spawn(move || {
                let moves = search_state.legal_moves();
                let outcome =
                    search(&mut search_state, moves, &params, &mut rand::thread_rng());
                *slot.lock() = Some(outcome);
            })?;

        Ok(SearchJob { result, handle })
    }

    /// Whether the worker has produced its result.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.result.lock().is_some()
    }

    /// The result, if the search has completed. Does not block.
    #[must_use]
    pub fn try_result(&self) -> Option<SearchResult> {
        *self.result.lock()
    }

    /// Block until the search completes and return its result.
    ///
    /// Returns `None` only if the worker thread panicked.
    pub fn wait(self) -> Option<SearchResult> {
        if self.handle.join().is_err() {
            #[cfg(feature = "logging")]
            log::warn!("search thread panicked");
            return None;
        }
        let outcome = self.result.lock().take();
        outcome
    }
}
