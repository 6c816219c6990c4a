//! Display names for the two symbols.

use super::Symbol;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Name given to X until renamed.
pub const DEFAULT_X_NAME: &str = "Player 1";

/// Name given to O until renamed.
pub const DEFAULT_O_NAME: &str = "Player 2";

/// Mapping from symbol to a human-readable name.
///
/// Independent of the move log: restarting a game keeps the names.
/// Deserializes from a table with optional `x` and `o` keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerRegistry {
    x: String,
    o: String,
}

impl PlayerRegistry {
    /// Creates a registry with the given names.
    pub fn new(x: impl Into<String>, o: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            o: o.into(),
        }
    }

    /// Name registered for `symbol`.
    pub fn name(&self, symbol: Symbol) -> &str {
        match symbol {
            Symbol::X => &self.x,
            Symbol::O => &self.o,
        }
    }

    /// Replaces the name for `symbol`, returning the previous one.
    ///
    /// Any string is accepted, including the empty string.
    #[instrument(skip(self, name))]
    pub fn rename(&mut self, symbol: Symbol, name: impl Into<String>) -> String {
        let slot = match symbol {
            Symbol::X => &mut self.x,
            Symbol::O => &mut self.o,
        };
        let previous = std::mem::replace(slot, name.into());
        info!(%symbol, from = %previous, to = %slot, "Player renamed");
        previous
    }
}

impl Default for PlayerRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_X_NAME, DEFAULT_O_NAME)
    }
}
