//! Board module - the fixed 10x20 grid
//!
//! Cells are stored in a flat row-major array. Coordinates are (x, y) with x
//! in 0..10 (left to right) and y in 0..20 (top to bottom); signed so that
//! callers can ask about positions off the board and get `None` back.
//!
//! The board is a value: rule functions take `&Board` and return a new one.
//! The only public edit is [`Board::with_cell`], which returns a copy.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::types::{Cell, Color, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
pub(crate) const BOARD_SIZE: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// Rejected input to [`Board::from_rows`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board needs {expected} rows, got {got}")]
    RowCount { expected: usize, got: usize },
    #[error("row {row} needs {expected} cells, got {got}")]
    RowWidth {
        row: usize,
        expected: usize,
        got: usize,
    },
}

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    pub(crate) cells: [Cell; BOARD_SIZE],
}

/// A board with every cell empty
pub fn create_empty_board() -> Board {
    Board::new()
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Build a board from text art, top row first.
    ///
    /// `.` is an empty cell; any other character is filled with `color`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_rules_core::Board;
    /// use tetris_rules_types::Color;
    ///
    /// let mut rows = vec![".........."; 19];
    /// rows.push("#########.");
    /// let board = Board::from_rows(&rows, Color::RED).unwrap();
    /// assert!(board.is_filled(0, 19));
    /// assert!(!board.is_filled(9, 19));
    /// ```
    pub fn from_rows(rows: &[&str], color: Color) -> Result<Self, BoardError> {
        if rows.len() != BOARD_HEIGHT {
            return Err(BoardError::RowCount {
                expected: BOARD_HEIGHT,
                got: rows.len(),
            });
        }

        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            let width = row.chars().count();
            if width != BOARD_WIDTH {
                return Err(BoardError::RowWidth {
                    row: y,
                    expected: BOARD_WIDTH,
                    got: width,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                if ch != '.' {
                    board.cells[y * BOARD_WIDTH + x] = Cell::Filled(color);
                }
            }
        }
        Ok(board)
    }

    /// Build a board from explicit rows of cells (top row first)
    pub fn from_cells<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self, BoardError> {
        if rows.len() != BOARD_HEIGHT {
            return Err(BoardError::RowCount {
                expected: BOARD_HEIGHT,
                got: rows.len(),
            });
        }
        let mut board = Board::new();
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != BOARD_WIDTH {
                return Err(BoardError::RowWidth {
                    row: y,
                    expected: BOARD_WIDTH,
                    got: row.len(),
                });
            }
            board.cells[y * BOARD_WIDTH..(y + 1) * BOARD_WIDTH].copy_from_slice(row);
        }
        Ok(board)
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    pub(crate) fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i32 || y < 0 || y >= BOARD_HEIGHT as i32 {
            return None;
        }
        Some((y as usize) * BOARD_WIDTH + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> usize {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> usize {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Check if position is within bounds and filled
    pub fn is_filled(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Cell::Filled(_)))
    }

    /// Copy of this board with one cell replaced; out-of-bounds writes are ignored
    pub fn with_cell(&self, x: i32, y: i32, cell: Cell) -> Self {
        let mut next = self.clone();
        if let Some(idx) = Self::index(x, y) {
            next.cells[idx] = cell;
        }
        next
    }

    /// Row `y`, or None past the bottom
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= BOARD_HEIGHT {
            return None;
        }
        let start = y * BOARD_WIDTH;
        Some(&self.cells[start..start + BOARD_WIDTH])
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(BOARD_WIDTH)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(Cell::is_filled))
            .unwrap_or(false)
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<Cell>>::deserialize(deserializer)?;
        Board::from_cells(&rows).map_err(de::Error::custom)
    }
}

/// Text art: `.` for empty, `#` for filled, one line per row.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                f.write_str(if cell.is_filled() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_with_cell_leaves_original_untouched() {
        let board = Board::new();
        let edited = board.with_cell(5, 10, Cell::Filled(Color::GREEN));

        assert_eq!(board.get(5, 10), Some(Cell::Empty));
        assert_eq!(edited.get(5, 10), Some(Cell::Filled(Color::GREEN)));
        assert_eq!(edited.cells[10 * 10 + 5], Cell::Filled(Color::GREEN));
    }

    #[test]
    fn test_with_cell_out_of_bounds_is_ignored() {
        let board = Board::new();
        assert_eq!(board.with_cell(-1, 0, Cell::Filled(Color::RED)), board);
        assert_eq!(board.with_cell(0, 20, Cell::Filled(Color::RED)), board);
    }

    #[test]
    fn test_from_rows_dimension_errors() {
        let short = vec![".........."; 19];
        assert_eq!(
            Board::from_rows(&short, Color::RED),
            Err(BoardError::RowCount {
                expected: 20,
                got: 19
            })
        );

        let mut narrow = vec![".........."; 20];
        narrow[3] = ".........";
        assert_eq!(
            Board::from_rows(&narrow, Color::RED),
            Err(BoardError::RowWidth {
                row: 3,
                expected: 10,
                got: 9
            })
        );
    }

    #[test]
    fn test_display_matches_from_rows() {
        let mut rows = vec![".........."; 20];
        rows[18] = "#........#";
        rows[19] = "##########";
        let board = Board::from_rows(&rows, Color::BLUE).unwrap();

        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, rows);
    }

    #[test]
    fn test_board_json_round_trip() {
        let board = Board::new()
            .with_cell(0, 19, Cell::Filled(Color::RED))
            .with_cell(9, 0, Cell::Filled(Color::new("teal").unwrap()));
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);

        let short = serde_json::json!([[{"filled": false, "color": ""}]]);
        assert!(serde_json::from_value::<Board>(short).is_err());
    }
}
