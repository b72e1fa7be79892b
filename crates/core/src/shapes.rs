//! Shapes module - the seven tetromino definitions and the shape matrix type
//!
//! Every kind is stored as a square binary matrix so one rotation routine
//! works for all of them. Non-square footprints are padded: I lives in a 4x4
//! with its bar on row 1, the three-wide pieces in a 3x3 with an empty bottom
//! row, and O is a full 2x2.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::types::{Color, PieceKind, MAX_SHAPE_SIZE};

/// Rejected input to [`ShapeMatrix::from_rows`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("shape matrix has no rows")]
    Empty,
    #[error("shape matrix of size {size} exceeds the {max}x{max} limit", max = MAX_SHAPE_SIZE)]
    TooLarge { size: usize },
    #[error("row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("cell ({row}, {col}) is {value}, expected 0 or 1")]
    InvalidCell { row: usize, col: usize, value: u8 },
    #[error("shape matrix has no occupied cells")]
    NoOccupiedCells,
}

/// Square binary matrix of a piece in one rotation.
///
/// Storage is a fixed 4x4 array; only the leading `size x size` block is
/// meaningful and the rest is kept zero so equality compares shapes only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    size: u8,
    cells: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl ShapeMatrix {
    const fn from_square<const N: usize>(rows: [[u8; N]; N]) -> Self {
        let mut cells = [[0u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut r = 0;
        while r < N {
            let mut c = 0;
            while c < N {
                cells[r][c] = rows[r][c];
                c += 1;
            }
            r += 1;
        }
        Self {
            size: N as u8,
            cells,
        }
    }

    /// Build a matrix from caller-supplied rows (1 = occupied).
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_rules_core::ShapeMatrix;
    ///
    /// let o = ShapeMatrix::from_rows(&[[1u8, 1], [1, 1]]).unwrap();
    /// assert_eq!(o.size(), 2);
    /// assert!(ShapeMatrix::from_rows(&[[1u8, 1]]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, ShapeError> {
        let size = rows.len();
        if size == 0 {
            return Err(ShapeError::Empty);
        }
        if size > MAX_SHAPE_SIZE {
            return Err(ShapeError::TooLarge { size });
        }

        let mut cells = [[0u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(ShapeError::NotSquare {
                    row: r,
                    len: row.len(),
                    expected: size,
                });
            }
            for (c, &value) in row.iter().enumerate() {
                if value > 1 {
                    return Err(ShapeError::InvalidCell { row: r, col: c, value });
                }
                cells[r][c] = value;
            }
        }

        let shape = Self {
            size: size as u8,
            cells,
        };
        if shape.cell_count() == 0 {
            return Err(ShapeError::NoOccupiedCells);
        }
        Ok(shape)
    }

    /// Side length N of the N x N matrix
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Column count (same as [`ShapeMatrix::size`])
    pub fn width(&self) -> usize {
        self.size()
    }

    /// Row count (same as [`ShapeMatrix::size`])
    pub fn height(&self) -> usize {
        self.size()
    }

    /// Whether (row, col) is occupied; false outside the matrix
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        row < self.size() && col < self.size() && self.cells[row][col] != 0
    }

    /// Rows of the meaningful `size x size` block
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        let n = self.size();
        self.cells[..n].iter().map(move |row| &row[..n])
    }

    /// (row, col) of every occupied cell, row-major
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.size();
        (0..n).flat_map(move |r| {
            (0..n)
                .filter(move |&c| self.cells[r][c] != 0)
                .map(move |c| (r, c))
        })
    }

    pub fn cell_count(&self) -> usize {
        self.occupied().count()
    }

    /// 90° clockwise rotation: `out[r][c] = in[N-1-c][r]`
    pub fn rotated_cw(&self) -> Self {
        let n = self.size();
        let mut cells = [[0u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, row) in cells.iter_mut().enumerate().take(n) {
            for (c, cell) in row.iter_mut().enumerate().take(n) {
                *cell = self.cells[n - 1 - c][r];
            }
        }
        Self {
            size: self.size,
            cells,
        }
    }

    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows().map(<[u8]>::to_vec).collect()
    }
}

impl Serialize for ShapeMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

impl<'de> Deserialize<'de> for ShapeMatrix {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<u8>>::deserialize(deserializer)?;
        ShapeMatrix::from_rows(&rows).map_err(de::Error::custom)
    }
}

/// Catalog entry: base (spawn) rotation and color of one kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeDef {
    pub kind: PieceKind,
    pub shape: ShapeMatrix,
    pub color: Color,
}

/// The seven definitions, in [`PieceKind::ALL`] order
pub static TETROMINOES: [ShapeDef; 7] = [
    ShapeDef {
        kind: PieceKind::I,
        shape: ShapeMatrix::from_square([
            [0, 0, 0, 0],
            [1, 1, 1, 1],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]),
        color: Color::CYAN,
    },
    ShapeDef {
        kind: PieceKind::O,
        shape: ShapeMatrix::from_square([[1, 1], [1, 1]]),
        color: Color::YELLOW,
    },
    ShapeDef {
        kind: PieceKind::T,
        shape: ShapeMatrix::from_square([[0, 1, 0], [1, 1, 1], [0, 0, 0]]),
        color: Color::PURPLE,
    },
    ShapeDef {
        kind: PieceKind::S,
        shape: ShapeMatrix::from_square([[0, 1, 1], [1, 1, 0], [0, 0, 0]]),
        color: Color::GREEN,
    },
    ShapeDef {
        kind: PieceKind::Z,
        shape: ShapeMatrix::from_square([[1, 1, 0], [0, 1, 1], [0, 0, 0]]),
        color: Color::RED,
    },
    ShapeDef {
        kind: PieceKind::J,
        shape: ShapeMatrix::from_square([[1, 0, 0], [1, 1, 1], [0, 0, 0]]),
        color: Color::BLUE,
    },
    ShapeDef {
        kind: PieceKind::L,
        shape: ShapeMatrix::from_square([[0, 0, 1], [1, 1, 1], [0, 0, 0]]),
        color: Color::ORANGE,
    },
];

/// Catalog lookup
pub fn shape_def(kind: PieceKind) -> &'static ShapeDef {
    &TETROMINOES[kind.index()]
}
