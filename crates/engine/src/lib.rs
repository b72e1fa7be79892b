//! Reference driver for the rules engine
//!
//! The core crate only offers pure rule functions. This crate strings them
//! together into the transitions a real game needs, without owning any timer
//! or input device:
//!
//! - [`GameState`]: board, current and next piece, score, level, lines, game over
//! - [`GameAction`]: the moves a player (or bot) can make
//! - [`apply_place`]: rotate + shift + hard drop as one checked move
//!
//! # Example
//!
//! ```
//! use tetris_rules_core::SimpleRng;
//! use tetris_rules_engine::{GameAction, GameState};
//!
//! let mut rng = SimpleRng::new(12345);
//! let game = GameState::new(&mut rng);
//!
//! let game = game
//!     .apply_action(GameAction::MoveLeft, &mut rng)
//!     .apply_action(GameAction::Rotate, &mut rng)
//!     .apply_action(GameAction::HardDrop, &mut rng);
//!
//! assert_eq!(game.board().filled_count(), 4);
//! assert_eq!(game.drop_interval_ms(), 1000);
//! ```

pub mod action;
pub mod game_state;
pub mod place;

pub use tetris_rules_core as core;
pub use tetris_rules_types as types;

pub use action::GameAction;
pub use game_state::{GameState, LockEvent};
pub use place::{apply_place, x_range, PlaceError};
