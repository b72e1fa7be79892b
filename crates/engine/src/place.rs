//! Placement: rotate, shift, and hard-drop the current piece in one call
//!
//! Bots and replays describe a move as "this many clockwise turns, then this
//! column". Each step goes through the same legality checks as single
//! actions, so a placement is only accepted if it could have been played.

use crate::action::GameAction;
use crate::core::{try_move, try_rotate, RandomSource};
use crate::game_state::GameState;
use crate::types::BOARD_WIDTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlaceError {
    #[error("could not rotate to target rotation")]
    RotationBlocked,
    #[error("target x would place piece out of bounds")]
    XOutOfBounds,
    #[error("could not move to target x due to collision")]
    XBlocked,
    #[error("game is not playable")]
    NotPlayable,
}

impl PlaceError {
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::NotPlayable => "not_playable",
            PlaceError::RotationBlocked | PlaceError::XOutOfBounds | PlaceError::XBlocked => {
                "invalid_place"
            }
        }
    }
}

/// Rotate the current piece `rotations` times clockwise, shift it so its
/// matrix origin sits at column `target_x`, and hard-drop it.
///
/// On error the input state is left as it was (nothing is returned).
pub fn apply_place<R: RandomSource + ?Sized>(
    state: &GameState,
    target_x: i32,
    rotations: u8,
    rng: &mut R,
) -> Result<GameState, PlaceError> {
    let Some(mut piece) = state.current().filter(|_| !state.game_over()) else {
        return Err(PlaceError::NotPlayable);
    };
    let board = state.board();

    for _ in 0..rotations % 4 {
        piece = try_rotate(board, &piece).ok_or(PlaceError::RotationBlocked)?;
    }

    // Validate x bounds based on the rotated shape.
    let mut min_dx = i32::MAX;
    let mut max_dx = i32::MIN;
    for (_, c) in piece.shape.occupied() {
        min_dx = min_dx.min(c as i32);
        max_dx = max_dx.max(c as i32);
    }
    if target_x.saturating_add(min_dx) < 0
        || target_x.saturating_add(max_dx) >= BOARD_WIDTH as i32
    {
        return Err(PlaceError::XOutOfBounds);
    }

    let step = (target_x - piece.position.x).signum();
    while piece.position.x != target_x {
        piece = try_move(board, &piece, step, 0).ok_or(PlaceError::XBlocked)?;
    }

    Ok(state
        .with_piece(piece)
        .apply_action(GameAction::HardDrop, rng))
}

/// Columns `target_x` may take for `piece` rotated `rotations` times,
/// ignoring obstacles
pub fn x_range(state: &GameState, rotations: u8) -> Option<(i32, i32)> {
    let mut shape = state.current()?.shape;
    for _ in 0..rotations % 4 {
        shape = shape.rotated_cw();
    }
    let (mut min_c, mut max_c) = (usize::MAX, 0);
    for (_, c) in shape.occupied() {
        min_c = min_c.min(c);
        max_c = max_c.max(c);
    }
    Some((-(min_c as i32), BOARD_WIDTH as i32 - 1 - max_c as i32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Tetromino};
    use crate::types::{Cell, Color, PieceKind, Position};

    fn always(kind: PieceKind) -> impl FnMut() -> f64 {
        move || (kind.index() as f64 + 0.5) / 7.0
    }

    #[test]
    fn place_lands_at_target_column() {
        let mut rng = always(PieceKind::O);
        let gs = GameState::new(&mut rng);

        let after = apply_place(&gs, 0, 0, &mut rng).unwrap();
        assert!(after.board().is_filled(0, 19));
        assert!(after.board().is_filled(1, 18));
        assert_eq!(after.board().filled_count(), 4);
    }

    #[test]
    fn place_rejected_when_x_out_of_bounds() {
        let mut rng = always(PieceKind::T);
        let gs = GameState::new(&mut rng);

        let err = apply_place(&gs, -50, 0, &mut rng).unwrap_err();
        assert_eq!(err, PlaceError::XOutOfBounds);
        assert_eq!(err.code(), "invalid_place");

        for x in [i32::MIN, i32::MAX] {
            assert_eq!(
                apply_place(&gs, x, 0, &mut rng),
                Err(PlaceError::XOutOfBounds)
            );
        }
    }

    #[test]
    fn place_rejected_when_x_blocked_by_collision() {
        let mut rng = always(PieceKind::O);
        let start = GameState::new(&mut rng);
        let o = start.current().unwrap();

        // Wall of cells one column left of the spawn, on the spawn rows.
        let board = Board::new()
            .with_cell(o.position.x - 1, 0, Cell::Filled(Color::RED))
            .with_cell(o.position.x - 1, 1, Cell::Filled(Color::RED));
        let gs = GameState::from_parts(board, o, start.next());

        let err = apply_place(&gs, 0, 0, &mut rng).unwrap_err();
        assert_eq!(err, PlaceError::XBlocked);
    }

    #[test]
    fn place_rejected_when_rotation_blocked() {
        let mut rng = always(PieceKind::I);
        let i = Tetromino::new(PieceKind::I).with_position(Position::new(3, 18));
        let gs = GameState::from_parts(Board::new(), i, Tetromino::new(PieceKind::I));

        // The vertical bar would reach below the floor.
        let err = apply_place(&gs, 3, 1, &mut rng).unwrap_err();
        assert_eq!(err, PlaceError::RotationBlocked);
    }

    #[test]
    fn x_range_tracks_rotation() {
        let mut rng = always(PieceKind::I);
        let gs = GameState::new(&mut rng);

        // Horizontal bar fills columns 0-3 of its matrix.
        assert_eq!(x_range(&gs, 0), Some((0, 6)));
        // Vertical bar sits in column 2.
        assert_eq!(x_range(&gs, 1), Some((-2, 7)));
    }
}
