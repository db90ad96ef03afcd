//! Canonical rule constants for the pawn-only variant.
//!
//! Board extents, the rows each side starts on and the layout string used to
//! initialize a fresh game.

/// Number of files and ranks on the board.
pub const BOARD_SIZE: usize = 8;

pub const FIRST_COLUMN: char = 'a';
pub const LAST_COLUMN: char = 'h';
pub const MIN_ROW: u8 = 1;
pub const MAX_ROW: u8 = 8;

pub const WHITE_STARTING_ROW: u8 = 2;
pub const BLACK_STARTING_ROW: u8 = 7;

/// Standard pawn-only starting layout (see `utils::fen_parser` for the notation).
pub const STARTING_LAYOUT: &str = "8/pppppppp/8/8/8/8/PPPPPPPP/8 w -";
