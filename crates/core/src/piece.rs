//! Piece module - the active tetromino, spawning, and rotation
//!
//! A [`Tetromino`] carries its own copy of the shape matrix, so rotating or
//! moving one never touches the catalog or any other piece. Every transform
//! returns a new value.

use serde::{Deserialize, Serialize};

use crate::rng::RandomSource;
use crate::shapes::{shape_def, ShapeMatrix};
use crate::types::{Color, PieceKind, Position, BOARD_WIDTH};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub shape: ShapeMatrix,
    pub color: Color,
    pub position: Position,
}

impl Tetromino {
    /// Create a new tetromino in its base rotation at the spawn position
    pub fn new(kind: PieceKind) -> Self {
        let def = shape_def(kind);
        Self {
            kind,
            shape: def.shape,
            color: def.color,
            position: spawn_position(&def.shape),
        }
    }

    pub fn with_position(self, position: Position) -> Self {
        Self { position, ..self }
    }

    pub fn with_shape(self, shape: ShapeMatrix) -> Self {
        Self { shape, ..self }
    }

    pub fn moved(self, dx: i32, dy: i32) -> Self {
        self.with_position(self.position.offset(dx, dy))
    }

    /// Board coordinates of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        let origin = self.position;
        self.shape
            .occupied()
            .map(move |(r, c)| origin.offset(c as i32, r as i32))
    }
}

/// Top row, horizontally centered for the shape's width
pub fn spawn_position(shape: &ShapeMatrix) -> Position {
    let x = (BOARD_WIDTH / 2) as i32 - (shape.width() / 2) as i32;
    Position::new(x, 0)
}

/// Map a uniform draw in `[0, 1)` to a kind; out-of-range draws are clamped.
pub fn kind_from_unit(u: f64) -> PieceKind {
    let count = PieceKind::ALL.len();
    let scaled = (u * count as f64).floor();
    // NaN and negatives land on the first kind.
    let index = if scaled >= 0.0 { scaled as usize } else { 0 };
    PieceKind::ALL[index.min(count - 1)]
}

/// Spawn a piece of a uniformly random kind, consuming one draw from `rng`.
///
/// # Examples
///
/// ```
/// use tetris_rules_core::{random_tetromino, Tetromino};
/// use tetris_rules_types::{PieceKind, Position};
///
/// let mut always_half = || 0.5;
/// let piece = random_tetromino(&mut always_half);
/// assert_eq!(piece.kind, PieceKind::S);
/// assert_eq!(piece.position, Position::new(4, 0));
/// assert_eq!(piece, Tetromino::new(PieceKind::S));
/// ```
pub fn random_tetromino<R: RandomSource + ?Sized>(rng: &mut R) -> Tetromino {
    Tetromino::new(kind_from_unit(rng.next_unit()))
}

/// The piece's shape rotated 90° clockwise. Does not check the board.
pub fn rotate_tetromino(piece: &Tetromino) -> ShapeMatrix {
    piece.shape.rotated_cw()
}
