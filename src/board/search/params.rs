#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tunable search settings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchParams {
    /// Plies to look ahead. Values below 1 are treated as 1.
    pub depth: u32,
    /// Shuffle the root moves before searching, so equal moves vary between games.
    pub shuffle: bool,
    /// Cut off siblings once a branch is proven no better than an alternative.
    pub alpha_beta: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            depth: 2,
            shuffle: true,
            alpha_beta: true,
        }
    }
}

impl SearchParams {
    /// Default settings searched to `depth` plies.
    #[must_use]
    pub fn with_depth(depth: u32) -> Self {
        SearchParams {
            depth,
            ..SearchParams::default()
        }
    }

    /// Fixed move order, for reproducible searches.
    #[must_use]
    pub fn deterministic(mut self) -> Self {
        self.shuffle = false;
        self
    }
}
