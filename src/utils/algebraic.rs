//! Text coordinate (`e4`) parsing. `Position` formats itself via `Display`.

use crate::game_state::chess_types::Position;

/// Convert a coordinate such as "e4" to a `Position`.
#[inline]
pub fn parse_square(square: &str) -> Result<Position, String> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {square}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    Position::new(file as char, rank - b'0')
        .ok_or_else(|| format!("Square off the board: {square}"))
}
