//! Simulator settings, read from the environment.
//!
//! - `TETRIS_SIM_SEED`: RNG seed (default 1)
//! - `TETRIS_SIM_PIECES`: maximum pieces to place (default 500)
//! - `TETRIS_SIM_JSON`: `1`/`true` prints the final frame as JSON
//!
//! Unparseable values fall back to the defaults.

use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub seed: u32,
    pub max_pieces: usize,
    pub json: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            max_pieces: 500,
            json: false,
        }
    }
}

impl SimConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("TETRIS_SIM_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);

        let max_pieces = lookup("TETRIS_SIM_PIECES")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.max_pieces);

        let json = lookup("TETRIS_SIM_JSON")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(defaults.json);

        Self {
            seed,
            max_pieces,
            json,
        }
    }
}
