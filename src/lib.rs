//! Falling-block rules engine (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tetris_rules::{types, core, engine}`.

pub use tetris_rules_core as core;
pub use tetris_rules_engine as engine;
pub use tetris_rules_types as types;
