//! Collision & placement - legality checks, merging, and line clears
//!
//! Rules for a piece cell at board (x, y):
//! - `x < 0` or `x >= BOARD_WIDTH` collides (wall);
//! - `y >= BOARD_HEIGHT` collides (floor);
//! - `y < 0` never collides, whatever the column contents, so pieces can
//!   spawn and rotate partly above the board (walls still apply);
//! - otherwise it collides iff the board cell is filled.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::piece::{rotate_tetromino, Tetromino};
use crate::types::{Cell, Position, BOARD_HEIGHT, BOARD_WIDTH, MAX_SHAPE_SIZE};

/// Result of [`clear_lines`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClear {
    /// Board after removal, padded with empty rows at the top
    pub board: Board,
    /// Number of rows removed (0..=BOARD_HEIGHT)
    pub lines_cleared: usize,
    /// Indices of the removed rows in the input board, top to bottom
    pub cleared_rows: ArrayVec<usize, BOARD_HEIGHT>,
}

/// Whether any occupied cell of `piece` hits a wall, the floor, or a filled cell.
///
/// # Examples
///
/// ```
/// use tetris_rules_core::{check_collision, create_empty_board, Tetromino};
/// use tetris_rules_types::{PieceKind, Position};
///
/// let board = create_empty_board();
/// let i = Tetromino::new(PieceKind::I);
/// assert!(!check_collision(&board, &i.with_position(Position::new(3, 0))));
/// assert!(check_collision(&board, &i.with_position(Position::new(-1, 0))));
/// ```
pub fn check_collision(board: &Board, piece: &Tetromino) -> bool {
    piece.cells().any(|p| {
        if p.x < 0 || p.x >= BOARD_WIDTH as i32 || p.y >= BOARD_HEIGHT as i32 {
            return true;
        }
        p.y >= 0 && board.is_filled(p.x, p.y)
    })
}

/// Copy of `board` with the piece's cells filled in its color.
///
/// Cells outside the board are skipped.
pub fn merge_tetromino(board: &Board, piece: &Tetromino) -> Board {
    let mut merged = board.clone();
    for p in piece.cells() {
        if let Some(idx) = Board::index(p.x, p.y) {
            merged.cells[idx] = Cell::Filled(piece.color);
        }
    }
    merged
}

/// Remove every full row, let the rows above settle, pad the top with empties.
pub fn clear_lines(board: &Board) -> LineClear {
    let mut cleared_rows = ArrayVec::new();
    let mut next = Board::new();
    let mut write_y = BOARD_HEIGHT;

    // Scan from bottom to top
    for read_y in (0..BOARD_HEIGHT).rev() {
        if board.is_row_full(read_y) {
            cleared_rows.push(read_y);
        } else {
            write_y -= 1;
            let src = read_y * BOARD_WIDTH;
            let dst = write_y * BOARD_WIDTH;
            next.cells[dst..dst + BOARD_WIDTH]
                .copy_from_slice(&board.cells[src..src + BOARD_WIDTH]);
        }
    }

    // Rows 0..write_y are already empty in `next`.
    cleared_rows.reverse();
    LineClear {
        board: next,
        lines_cleared: cleared_rows.len(),
        cleared_rows,
    }
}

/// The piece shifted by (dx, dy), or None if that position collides
pub fn try_move(board: &Board, piece: &Tetromino, dx: i32, dy: i32) -> Option<Tetromino> {
    let moved = piece.moved(dx, dy);
    (!check_collision(board, &moved)).then_some(moved)
}

/// The piece rotated clockwise in place, or None if that collides.
///
/// No wall kicks: the rotation either fits where it is or is refused.
pub fn try_rotate(board: &Board, piece: &Tetromino) -> Option<Tetromino> {
    let rotated = piece.with_shape(rotate_tetromino(piece));
    (!check_collision(board, &rotated)).then_some(rotated)
}

/// How many rows the piece can fall before it would collide
pub fn drop_distance(board: &Board, piece: &Tetromino) -> u32 {
    if is_landed(board, piece) {
        return 0;
    }

    // Cells above row 0 never collide, so fall straight until the lowest one reaches row -1.
    let bottom = piece.cells().map(|p| p.y).max().unwrap_or(0);
    let skip = (-1 - i64::from(bottom)).max(0);
    let start_y = i64::from(piece.position.y) + skip;
    let start = piece.with_position(Position::new(
        piece.position.x,
        i32::try_from(start_y).unwrap_or(i32::MAX),
    ));

    let limit = (BOARD_HEIGHT + MAX_SHAPE_SIZE) as i32;
    let mut distance = 0;
    while distance < limit && !check_collision(board, &start.moved(0, distance + 1)) {
        distance += 1;
    }
    u32::try_from(skip).unwrap_or(u32::MAX).saturating_add(distance as u32)
}

/// The piece moved straight down to its landing row
pub fn hard_drop_position(board: &Board, piece: &Tetromino) -> Tetromino {
    let y = i64::from(piece.position.y) + i64::from(drop_distance(board, piece));
    piece.with_position(Position::new(
        piece.position.x,
        i32::try_from(y).unwrap_or(i32::MAX),
    ))
}

/// Whether the piece cannot move down one row
pub fn is_landed(board: &Board, piece: &Tetromino) -> bool {
    check_collision(board, &piece.moved(0, 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, PieceKind};

    fn filled_row(board: &Board, y: i32) -> Board {
        (0..BOARD_WIDTH as i32).fold(board.clone(), |b, x| {
            b.with_cell(x, y, Cell::Filled(Color::RED))
        })
    }

    #[test]
    fn negative_rows_ignore_filled_cells_but_not_walls() {
        let board = Board::new();
        let i = Tetromino::new(PieceKind::I);

        // Bar on row -1, inside the columns.
        assert!(!check_collision(&board, &i.with_position(Position::new(3, -2))));
        // Bar on row -1, past the right wall.
        assert!(check_collision(&board, &i.with_position(Position::new(7, -2))));
    }

    #[test]
    fn all_cells_checked_before_reporting_clear() {
        // Only the last occupied cell of the bar is blocked.
        let board = Board::new().with_cell(6, 1, Cell::Filled(Color::RED));
        let i = Tetromino::new(PieceKind::I).with_position(Position::new(3, 0));
        assert!(check_collision(&board, &i));
    }

    #[test]
    fn merge_skips_cells_off_the_board() {
        let board = Board::new();
        let o = Tetromino::new(PieceKind::O).with_position(Position::new(-1, -1));
        let merged = merge_tetromino(&board, &o);

        assert_eq!(merged.filled_count(), 1);
        assert_eq!(merged.get(0, 0), Some(Cell::Filled(Color::YELLOW)));
        assert_eq!(board.filled_count(), 0);
    }

    #[test]
    fn clear_keeps_order_of_remaining_rows() {
        let mut board = filled_row(&Board::new(), 19);
        board = filled_row(&board, 17);
        board = board
            .with_cell(0, 18, Cell::Filled(Color::BLUE))
            .with_cell(1, 16, Cell::Filled(Color::GREEN));

        let result = clear_lines(&board);
        assert_eq!(result.lines_cleared, 2);
        assert_eq!(result.cleared_rows.to_vec(), vec![17usize, 19]);
        assert_eq!(result.board.get(0, 19), Some(Cell::Filled(Color::BLUE)));
        assert_eq!(result.board.get(1, 18), Some(Cell::Filled(Color::GREEN)));
        assert_eq!(result.board.filled_count(), 2);
    }

    #[test]
    fn clear_whole_board() {
        let board = (0..BOARD_HEIGHT as i32).fold(Board::new(), |b, y| filled_row(&b, y));
        let result = clear_lines(&board);
        assert_eq!(result.lines_cleared, BOARD_HEIGHT);
        assert_eq!(result.board, Board::new());
    }

    #[test]
    fn drop_distance_on_empty_board() {
        let board = Board::new();
        // I bar sits on row 1 of its matrix.
        let i = Tetromino::new(PieceKind::I);
        assert_eq!(drop_distance(&board, &i), 18);

        let landed = hard_drop_position(&board, &i);
        assert!(is_landed(&board, &landed));
        assert!(!check_collision(&board, &landed));
    }

    #[test]
    fn drop_distance_of_colliding_piece_is_zero() {
        let board = Board::new();
        let o = Tetromino::new(PieceKind::O).with_position(Position::new(0, 19));
        assert!(check_collision(&board, &o));
        assert_eq!(drop_distance(&board, &o), 0);
    }

    #[test]
    fn try_rotate_refused_at_wall() {
        let board = Board::new();
        // Vertical I hugging the left wall (column 2 of its matrix at x = 0).
        let i = Tetromino::new(PieceKind::I);
        let vertical = i
            .with_shape(rotate_tetromino(&i))
            .with_position(Position::new(-2, 5));
        assert!(!check_collision(&board, &vertical));
        assert!(try_rotate(&board, &vertical).is_none());
    }

    #[test]
    fn try_move_blocked_by_wall() {
        let board = Board::new();
        let o = Tetromino::new(PieceKind::O).with_position(Position::new(0, 0));
        assert!(try_move(&board, &o, -1, 0).is_none());
        assert_eq!(
            try_move(&board, &o, 1, 0).map(|p| p.position),
            Some(Position::new(1, 0))
        );
    }

    #[test]
    fn extreme_rows_do_not_overflow() {
        let board = Board::new();
        let o = Tetromino::new(PieceKind::O);

        let below = o.with_position(Position::new(0, i32::MAX));
        assert!(check_collision(&board, &below));
        assert_eq!(merge_tetromino(&board, &below), board);
        assert_eq!(drop_distance(&board, &below), 0);

        let far_right = o.with_position(Position::new(i32::MAX, 5));
        assert!(check_collision(&board, &far_right));
        assert_eq!(merge_tetromino(&board, &far_right), board);
    }

    #[test]
    fn piece_far_above_falls_to_the_floor() {
        let board = Board::new();
        let o = Tetromino::new(PieceKind::O);

        let high = o.with_position(Position::new(0, i32::MIN));
        let landed = hard_drop_position(&board, &high);
        assert_eq!(landed.position, Position::new(0, BOARD_HEIGHT as i32 - 2));
        assert_eq!(
            i64::from(drop_distance(&board, &high)),
            i64::from(BOARD_HEIGHT as i32 - 2) - i64::from(i32::MIN)
        );

        // Stack in the way is still found after the skip.
        let blocked = board.with_cell(1, 10, Cell::Filled(Color::RED));
        let landed = hard_drop_position(&blocked, &o.with_position(Position::new(0, -1000)));
        assert_eq!(landed.position, Position::new(0, 8));
    }
}
