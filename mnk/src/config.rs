use serde::{Deserialize, Serialize};

use crate::Strategy;

/// Everything needed to set up a [`Game`](crate::Game).
///
/// Missing fields take their value from [`EngineConfig::default()`], so a
/// JSON file like `{"m": 5, "n": 5, "k": 4}` is a valid configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of columns.
    pub m: usize,
    /// Number of rows.
    pub n: usize,
    /// Run length needed to win.
    pub k: usize,
    pub strategy: Strategy,
    /// How many plies the opponent looks ahead. When `None`, the depth is
    /// derived from the number of empty cells and the run length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            m: 3,
            n: 3,
            k: 3,
            strategy: Strategy::default(),
            max_depth: None,
        }
    }
}
