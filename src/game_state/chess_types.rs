//! Value types shared by the whole engine: sides, board coordinates and pawns.
//! All of them are small `Copy` values and are passed by value.

use std::fmt;

pub use crate::game_state::game_state::PawnState;

use crate::game_state::chess_rules::{
    BLACK_STARTING_ROW, BOARD_SIZE, FIRST_COLUMN, LAST_COLUMN, MAX_ROW, MIN_ROW,
    WHITE_STARTING_ROW,
};

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::White, Side::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Row delta of one forward step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    #[inline]
    pub const fn starting_row(self) -> u8 {
        match self {
            Side::White => WHITE_STARTING_ROW,
            Side::Black => BLACK_STARTING_ROW,
        }
    }

    /// Arriving on this row wins the game.
    #[inline]
    pub const fn far_row(self) -> u8 {
        match self {
            Side::White => MAX_ROW,
            Side::Black => MIN_ROW,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Side::White => "White",
            Side::Black => "Black",
        }
    }

    pub const fn lowercase_name(self) -> &'static str {
        match self {
            Side::White => "white",
            Side::Black => "black",
        }
    }

    /// Single-letter board symbol.
    pub const fn symbol(self) -> char {
        match self {
            Side::White => 'W',
            Side::Black => 'B',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A square on the board. Construction is checked, so an off-board
/// `Position` cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    column: char,
    row: u8,
}

impl Position {
    pub fn new(column: char, row: u8) -> Option<Self> {
        if (FIRST_COLUMN..=LAST_COLUMN).contains(&column) && (MIN_ROW..=MAX_ROW).contains(&row) {
            Some(Self { column, row })
        } else {
            None
        }
    }

    /// Build from zero-based file/rank indices (`0 == a` / `0 == row 1`).
    pub fn from_indices(file: usize, rank: usize) -> Option<Self> {
        if file >= BOARD_SIZE || rank >= BOARD_SIZE {
            return None;
        }
        Self::new(char::from(b'a' + file as u8), rank as u8 + MIN_ROW)
    }

    #[inline]
    pub const fn column(self) -> char {
        self.column
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub fn file_index(self) -> usize {
        (self.column as u8 - FIRST_COLUMN as u8) as usize
    }

    #[inline]
    pub fn rank_index(self) -> usize {
        (self.row - MIN_ROW) as usize
    }

    /// Shift by whole columns and rows; `None` when the result leaves the board.
    pub fn offset(self, columns: i8, rows: i8) -> Option<Self> {
        let file = self.file_index() as i16 + columns as i16;
        let rank = self.rank_index() as i16 + rows as i16;
        if file < 0 || rank < 0 {
            return None;
        }
        Self::from_indices(file as usize, rank as usize)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pawn {
    pub side: Side,
    pub position: Position,
}

impl Pawn {
    #[inline]
    pub const fn new(side: Side, position: Position) -> Self {
        Self { side, position }
    }

    /// Square `steps` rows ahead in this pawn's direction of travel.
    #[inline]
    pub fn ahead(self, steps: i8) -> Option<Position> {
        self.position.offset(0, self.side.forward() * steps)
    }

    /// Derived from the row alone: pawns never move backwards, so a pawn on
    /// its side's starting row has not moved yet.
    #[inline]
    pub fn on_starting_row(self) -> bool {
        self.position.row() == self.side.starting_row()
    }
}

/// Read-only occupancy grid handed to renderers, indexed `[rank][file]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardSnapshot {
    squares: [[Option<Side>; BOARD_SIZE]; BOARD_SIZE],
}

impl BoardSnapshot {
    pub(crate) fn set(&mut self, position: Position, side: Side) {
        self.squares[position.rank_index()][position.file_index()] = Some(side);
    }

    #[inline]
    pub fn get(&self, position: Position) -> Option<Side> {
        self.squares[position.rank_index()][position.file_index()]
    }

    pub fn occupied_count(&self) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|square| square.is_some())
            .count()
    }
}
