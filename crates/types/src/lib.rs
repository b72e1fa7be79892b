//! Core types module - shared data structures and constants
//!
//! This crate defines the plain data used by the rules engine and by whatever
//! draws it. Nothing here knows about collision or scoring; it only fixes the
//! vocabulary (piece kinds, colors, cells, positions) and the tuning constants.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! # Progression Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `LINE_CLEAR_POINTS` | 0/100/300/500/800 | Base points for 0-4 lines in one landing |
//! | `LINES_PER_LEVEL` | 10 | Cumulative lines per level step |
//! | `BASE_DROP_MS` | 1000 | Gravity interval at level 1 |
//! | `DROP_STEP_MS` | 100 | Interval reduction per level |
//! | `MIN_DROP_MS` | 100 | Gravity floor (level 10 and above) |
//!
//! # Examples
//!
//! ```
//! use tetris_rules_types::{Cell, Color, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//!
//! let cell = Cell::Filled(Color::new("red").unwrap());
//! assert!(cell.is_filled());
//! assert_eq!(cell.color_str(), "red");
//! assert_eq!(Cell::Empty.color_str(), "");
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: usize = 20;

/// Largest side of a shape matrix (the I piece is 4x4)
pub const MAX_SHAPE_SIZE: usize = 4;

/// Cell edge length, in surface units, used by the reference renderer
pub const CELL_SIZE: u32 = 30;

/// Side of the next-piece preview surface, in cells
pub const PREVIEW_CELLS: u32 = 4;

/// Base points for clearing N lines in a single landing, before the level multiplier.
///
/// Index 0 is unused by the scorer; the driver only scores landings that clear lines.
pub const LINE_CLEAR_POINTS: [u32; 5] = [0, 100, 300, 500, 800];

/// Cumulative lines needed per level step
pub const LINES_PER_LEVEL: u32 = 10;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity interval reduction per level
pub const DROP_STEP_MS: u32 = 100;

/// Minimum gravity interval
pub const MIN_DROP_MS: u32 = 100;

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_rules_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to uppercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }

    /// Position in [`PieceKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }

    /// Inverse of [`PieceKind::index`]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Longest color string a cell can carry, in bytes
pub const MAX_COLOR_LEN: usize = 23;

/// Returned by [`Color::new`] for a string a cell cannot carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("a filled cell needs a non-empty color")]
    Empty,
    #[error("color is {len} bytes, at most {MAX_COLOR_LEN} allowed")]
    TooLong { len: usize },
}

/// Color identity of a filled cell.
///
/// Opaque to the rules: the renderer decides what the string means (the
/// catalog uses `#rrggbb`). Never empty, so a filled cell always has a color.
/// Stored inline so cells stay `Copy`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    len: u8,
    bytes: [u8; MAX_COLOR_LEN],
}

impl Color {
    pub const CYAN: Color = Color::named("#00f0f0");
    pub const YELLOW: Color = Color::named("#f0f000");
    pub const PURPLE: Color = Color::named("#a000f0");
    pub const GREEN: Color = Color::named("#00f000");
    pub const RED: Color = Color::named("#f00000");
    pub const BLUE: Color = Color::named("#0000f0");
    pub const ORANGE: Color = Color::named("#f0a000");

    /// Build a color from any string, e.g. one read from a save file
    pub fn new(value: &str) -> Result<Self, ColorError> {
        match value.len() {
            0 => Err(ColorError::Empty),
            len if len > MAX_COLOR_LEN => Err(ColorError::TooLong { len }),
            _ => Ok(Self::named(value)),
        }
    }

    /// Callers pass 1..=MAX_COLOR_LEN bytes
    const fn named(value: &str) -> Self {
        let src = value.as_bytes();
        assert!(!src.is_empty() && src.len() <= MAX_COLOR_LEN);
        let mut bytes = [0u8; MAX_COLOR_LEN];
        let mut i = 0;
        while i < src.len() {
            bytes[i] = src[i];
            i += 1;
        }
        Self {
            len: src.len() as u8,
            bytes,
        }
    }

    pub fn as_str(&self) -> &str {
        // Bytes are always a whole copied `&str`.
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap_or("")
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Color").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Color::new(&value).map_err(de::Error::custom)
    }
}

/// A cell on the game board
///
/// Serializes as `{"filled": bool, "color": string}` with `""` for empty cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(Color),
}

impl Cell {
    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled(_))
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Filled(color) => Some(*color),
        }
    }

    /// Color string, `""` when empty
    pub fn color_str(&self) -> &str {
        match self {
            Cell::Empty => "",
            Cell::Filled(color) => color.as_str(),
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Cell", 2)?;
        s.serialize_field("filled", &self.is_filled())?;
        s.serialize_field("color", self.color_str())?;
        s.end()
    }
}

#[derive(Deserialize)]
struct CellRepr {
    filled: bool,
    #[serde(default)]
    color: String,
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = CellRepr::deserialize(deserializer)?;
        if !repr.filled {
            return Ok(Cell::Empty);
        }
        Color::new(&repr.color)
            .map(Cell::Filled)
            .map_err(de::Error::custom)
    }
}

/// Board offset of a shape matrix's top-left corner.
///
/// `x` grows to the right, `y` grows downward. Either may be negative while a
/// piece is partly outside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shifted copy. Saturates at the `i32` range, which is far off the board.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}
