use crate::game_state::chess_types::*;

/// Inverse of `utils::fen_parser::parse_layout`.
pub fn generate_layout(state: &PawnState, side_to_move: Side) -> String {
    let board = generate_board_field(&state.snapshot());
    let side = match side_to_move {
        Side::White => "w",
        Side::Black => "b",
    };
    let en_passant = state
        .en_passant_targets()
        .next()
        .map(|pawn| pawn.position.to_string())
        .unwrap_or_else(|| "-".to_owned());

    format!("{board} {side} {en_passant}")
}

fn generate_board_field(snapshot: &BoardSnapshot) -> String {
    let mut out = String::new();

    for rank in (0..8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8 {
            let occupant = Position::from_indices(file, rank).and_then(|sq| snapshot.get(sq));
            if let Some(side) = occupant {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(layout_char(side));
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn layout_char(side: Side) -> char {
    match side {
        Side::White => 'P',
        Side::Black => 'p',
    }
}

#[cfg(test)]
mod tests {
    use super::generate_layout;
    use crate::game_state::chess_rules::STARTING_LAYOUT;
    use crate::game_state::chess_types::{PawnState, Side};
    use crate::utils::fen_parser::parse_layout;

    #[test]
    fn new_game_generates_starting_layout() {
        assert_eq!(
            generate_layout(&PawnState::new_game(), Side::White),
            STARTING_LAYOUT
        );
    }

    #[test]
    fn layouts_survive_parse_and_generate() {
        for layout in [
            "8/2p4p/8/3pP3/8/1P6/P7/8 w d5",
            "8/8/8/8/3Pp3/8/8/8 b d4",
            "8/8/8/8/8/8/8/8 b -",
        ] {
            let parsed = parse_layout(layout).expect("layout should parse");
            assert_eq!(generate_layout(&parsed.state, parsed.side_to_move), layout);
        }
    }
}
