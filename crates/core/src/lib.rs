//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the falling-block game: the piece
//! catalog, the board, spawning, rotation, collision, merging, line clears,
//! and score/level/speed progression. It has **zero dependencies** on
//! rendering, input, or timing, making it:
//!
//! - **Pure**: every operation takes values and returns new values
//! - **Deterministic**: randomness is injected, so a seeded source replays a game
//! - **Total**: no operation panics or errors on an off-board piece
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven tetromino definitions and the square shape matrix
//! - [`board`]: 10x20 grid of empty/filled cells
//! - [`piece`]: the active piece, random spawning, and clockwise rotation
//! - [`collision`]: collision checks, merging a landed piece, clearing full rows
//! - [`scoring`]: score, level, and drop-speed progression
//! - [`rng`]: injectable random sources
//! - [`snapshot`]: the data a renderer draws from
//!
//! # Example
//!
//! ```
//! use tetris_rules_core::{
//!     calculate_level, calculate_score, check_collision, clear_lines, create_empty_board,
//!     hard_drop_position, merge_tetromino, random_tetromino, SimpleRng,
//! };
//!
//! let mut rng = SimpleRng::new(12345);
//! let board = create_empty_board();
//! let piece = random_tetromino(&mut rng);
//! assert!(!check_collision(&board, &piece));
//!
//! // Land the piece and settle the board.
//! let landed = hard_drop_position(&board, &piece);
//! let merged = merge_tetromino(&board, &landed);
//! let result = clear_lines(&merged);
//!
//! let score = calculate_score(result.lines_cleared, calculate_level(0));
//! assert_eq!(score, 0);
//! ```

pub mod board;
pub mod collision;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use tetris_rules_types as types;

// Re-export commonly used types for convenience
pub use board::{create_empty_board, Board, BoardError};
pub use collision::{
    check_collision, clear_lines, drop_distance, hard_drop_position, is_landed, merge_tetromino,
    try_move, try_rotate, LineClear,
};
pub use piece::{random_tetromino, rotate_tetromino, spawn_position, Tetromino};
pub use rng::{RandSource, RandomSource, SimpleRng};
pub use scoring::{calculate_level, calculate_score, get_drop_speed};
pub use shapes::{shape_def, ShapeDef, ShapeError, ShapeMatrix, TETROMINOES};
pub use snapshot::{preview_surface_size, surface_size, FrameSnapshot};
