//! Frame snapshot handed to a renderer
//!
//! A renderer paints a `BOARD_WIDTH x BOARD_HEIGHT` grid of square cells and
//! a small square preview of the next piece. It needs nothing else from the
//! rules than what this struct carries.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::collision::merge_tetromino;
use crate::piece::Tetromino;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, PREVIEW_CELLS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub board: Board,
    pub current: Option<Tetromino>,
    pub next: Option<Tetromino>,
    pub game_over: bool,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

impl FrameSnapshot {
    /// Board with the current piece drawn in, as the player sees it
    pub fn composited(&self) -> Board {
        match &self.current {
            Some(piece) => merge_tetromino(&self.board, piece),
            None => self.board.clone(),
        }
    }

    pub fn playable(&self) -> bool {
        !self.game_over && self.current.is_some()
    }
}

/// Drawing surface (width, height) for the board at `cell_size` units per cell
pub fn surface_size(cell_size: u32) -> (u32, u32) {
    (
        BOARD_WIDTH as u32 * cell_size,
        BOARD_HEIGHT as u32 * cell_size,
    )
}

/// Side of the square next-piece preview surface
pub fn preview_surface_size(cell_size: u32) -> u32 {
    PREVIEW_CELLS * cell_size
}
