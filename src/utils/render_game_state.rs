//! Terminal board renderer.
//!
//! Draws the bordered 8x8 grid shown after every move: rank 8 on top, one
//! cell per square holding `W`, `B` or a blank, files labelled underneath.

use crate::game_state::chess_types::*;

const BORDER_LINE: &str = "  +---+---+---+---+---+---+---+---+";
const FOOTER_LINE: &str = "    a   b   c   d   e   f   g   h";

/// Render the board; the text ends with the footer and one blank line.
pub fn render_game_state(snapshot: &BoardSnapshot) -> String {
    let mut out = String::with_capacity(64 * 18);

    out.push_str(BORDER_LINE);
    out.push('\n');

    for rank in (0..8).rev() {
        out.push(char::from(b'1' + rank as u8));
        out.push_str(" |");

        for file in 0..8 {
            let symbol = Position::from_indices(file, rank)
                .and_then(|square| snapshot.get(square))
                .map_or(' ', Side::symbol);
            out.push(' ');
            out.push(symbol);
            out.push_str(" |");
        }

        out.push('\n');
        out.push_str(BORDER_LINE);
        out.push('\n');
    }

    out.push_str(FOOTER_LINE);
    out.push_str("\n\n");

    out
}
