//! Game state module - one immutable snapshot of a running game
//!
//! `GameState` ties the core rules together the way a driver would: move and
//! rotate only when the result is legal, land the piece when it cannot fall,
//! clear rows, advance score/level, and promote the next piece. Every
//! transition takes `&self` and returns a new state; the caller replaces its
//! copy. There is no timer here: gravity is a `SoftDrop` issued at
//! [`GameState::drop_interval_ms`] by whoever owns the clock.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::action::GameAction;
use crate::core::{
    calculate_level, calculate_score, check_collision, clear_lines, get_drop_speed,
    hard_drop_position, merge_tetromino, random_tetromino, try_move, try_rotate, Board,
    FrameSnapshot, LineClear, RandomSource, Tetromino,
};

/// Outcome of the landing that produced a state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub points: u32,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    /// None once the game is over
    current: Option<Tetromino>,
    next: Tetromino,
    score: u32,
    level: u32,
    lines: u32,
    game_over: bool,
    /// Set only by the transition that landed a piece
    last_lock: Option<LockEvent>,
}

impl GameState {
    /// Start a game on an empty board, drawing the current and next pieces
    pub fn new<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let current = random_tetromino(rng);
        let next = random_tetromino(rng);
        Self::from_parts(Board::new(), current, next)
    }

    /// Resume from an explicit board and pieces, with zeroed progress.
    ///
    /// The game is over immediately if `current` collides.
    pub fn from_parts(board: Board, current: Tetromino, next: Tetromino) -> Self {
        let game_over = check_collision(&board, &current);
        Self {
            board,
            current: (!game_over).then_some(current),
            next,
            score: 0,
            level: calculate_level(0),
            lines: 0,
            game_over,
            last_lock: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Option<Tetromino> {
        self.current
    }

    pub fn next(&self) -> Tetromino {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn last_lock(&self) -> Option<LockEvent> {
        self.last_lock
    }

    /// Gravity interval the driver should use at the current level
    pub fn drop_interval_ms(&self) -> u32 {
        get_drop_speed(self.level)
    }

    /// Apply one action and return the resulting state.
    ///
    /// `rng` is only drawn from when a piece lands (to refill the next slot)
    /// or on `Restart`. Actions other than `Restart` leave a finished game
    /// unchanged.
    pub fn apply_action<R: RandomSource + ?Sized>(
        &self,
        action: GameAction,
        rng: &mut R,
    ) -> Self {
        let piece = match self.current {
            Some(piece) if !self.game_over => piece,
            _ if action != GameAction::Restart => return self.clone(),
            _ => return self.restart(rng),
        };

        match action {
            GameAction::MoveLeft => self.with_current(try_move(&self.board, &piece, -1, 0)),
            GameAction::MoveRight => self.with_current(try_move(&self.board, &piece, 1, 0)),
            GameAction::Rotate => self.with_current(try_rotate(&self.board, &piece)),
            GameAction::SoftDrop => match try_move(&self.board, &piece, 0, 1) {
                Some(moved) => self.with_current(Some(moved)),
                None => self.lock(piece, rng),
            },
            GameAction::HardDrop => self.lock(hard_drop_position(&self.board, &piece), rng),
            GameAction::Restart => self.restart(rng),
        }
    }

    fn restart<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Self {
        info!(score = self.score, lines = self.lines, "restarting game");
        Self::new(rng)
    }

    /// One gravity step
    pub fn tick<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Self {
        self.apply_action(GameAction::SoftDrop, rng)
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            board: self.board.clone(),
            current: self.current,
            next: (!self.game_over).then_some(self.next),
            game_over: self.game_over,
            score: self.score,
            level: self.level,
            lines: self.lines,
        }
    }

    /// Same state with a piece the caller has already checked
    pub(crate) fn with_piece(&self, piece: Tetromino) -> Self {
        self.with_current(Some(piece))
    }

    /// Same state with the piece replaced when the move was legal
    fn with_current(&self, moved: Option<Tetromino>) -> Self {
        Self {
            current: moved.or(self.current),
            last_lock: None,
            ..self.clone()
        }
    }

    /// Merge `piece`, clear rows, score, and bring in the next piece
    fn lock<R: RandomSource + ?Sized>(&self, piece: Tetromino, rng: &mut R) -> Self {
        let merged = merge_tetromino(&self.board, &piece);
        let LineClear {
            board,
            lines_cleared,
            ..
        } = clear_lines(&merged);

        let points = calculate_score(lines_cleared, self.level);
        let lines = self.lines.saturating_add(lines_cleared as u32);
        let level = calculate_level(lines);
        let score = self.score.saturating_add(points);

        debug!(
            kind = piece.kind.as_str(),
            x = piece.position.x,
            y = piece.position.y,
            lines_cleared,
            points,
            "piece locked"
        );
        if level != self.level {
            debug!(level, lines, "level up");
        }

        let current = self.next;
        let next = random_tetromino(rng);
        let game_over = check_collision(&board, &current);
        if game_over {
            info!(score, lines, level, "game over");
        }

        Self {
            board,
            current: (!game_over).then_some(current),
            next,
            score,
            level,
            lines,
            game_over,
            last_lock: Some(LockEvent {
                lines_cleared: lines_cleared as u32,
                points,
            }),
        }
    }
}
