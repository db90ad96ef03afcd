use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::{MoveKind, PawnMove};

pub fn generate_pawn_moves(state: &PawnState, pawn: Pawn, out: &mut Vec<PawnMove>) {
    let side = pawn.side;
    let enemy = side.opposite();

    if let Some(one_step) = pawn.ahead(1) {
        if state.is_vacant(one_step) {
            out.push(PawnMove::new(pawn, one_step, MoveKind::Advance));

            // Intermediate square is known empty here.
            if pawn.on_starting_row() {
                if let Some(two_step) = pawn.ahead(2) {
                    if state.is_vacant(two_step) {
                        out.push(PawnMove::new(pawn, two_step, MoveKind::DoubleStep));
                    }
                }
            }
        }
    }

    // captures and en-passant
    for file_delta in [-1i8, 1i8] {
        let Some(to) = pawn.position.offset(file_delta, side.forward()) else {
            continue;
        };

        match state.occupant(to) {
            Some(occupant) if occupant == enemy => {
                out.push(PawnMove::new(pawn, to, MoveKind::Capture));
            }
            Some(_) => {}
            None => {
                let Some(beside) = pawn.position.offset(file_delta, 0) else {
                    continue;
                };
                if state.is_en_passant_target(Pawn::new(enemy, beside)) {
                    out.push(PawnMove::new(
                        pawn,
                        to,
                        MoveKind::EnPassant { captured: beside },
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::generate_pawn_moves;
    use crate::game_state::chess_types::{Pawn, PawnState, Position, Side};
    use crate::move_generation::move_generator::{legal_destinations, MoveKind};
    use crate::utils::fen_parser::parse_layout;

    fn square(name: &str) -> Position {
        crate::utils::algebraic::parse_square(name).expect("test square should parse")
    }

    fn squares(names: &[&str]) -> BTreeSet<Position> {
        names.iter().map(|name| square(name)).collect()
    }

    fn pawn_of(state: &PawnState, name: &str) -> Pawn {
        state.pawn_at(square(name)).expect("fixture pawn should exist")
    }

    #[test]
    fn starting_pawn_has_single_and_double_step() {
        let state = PawnState::new_game();
        assert_eq!(
            legal_destinations(&state, pawn_of(&state, "e2")),
            squares(&["e3", "e4"])
        );
        assert_eq!(
            legal_destinations(&state, pawn_of(&state, "d7")),
            squares(&["d6", "d5"])
        );
    }

    #[test]
    fn moved_pawn_never_double_steps() {
        let parsed = parse_layout("8/8/8/8/8/4P3/8/8 w -").expect("layout should parse");
        assert_eq!(
            legal_destinations(&parsed.state, pawn_of(&parsed.state, "e3")),
            squares(&["e4"])
        );
    }

    #[test]
    fn double_step_needs_both_squares_empty() {
        let blocked_far = parse_layout("8/8/8/8/4p3/8/4P3/8 w -").expect("layout should parse");
        assert_eq!(
            legal_destinations(&blocked_far.state, pawn_of(&blocked_far.state, "e2")),
            squares(&["e3"])
        );

        let blocked_near = parse_layout("8/8/8/8/8/4p3/4P3/8 w -").expect("layout should parse");
        assert!(legal_destinations(&blocked_near.state, pawn_of(&blocked_near.state, "e2"))
            .is_empty());
    }

    #[test]
    fn diagonal_capture_only_onto_enemy_pawns() {
        // d5 black, f5 white, e4 white
        let parsed = parse_layout("8/8/8/3p1P2/4P3/8/8/8 w -").expect("layout should parse");
        let mut moves = Vec::new();
        generate_pawn_moves(&parsed.state, pawn_of(&parsed.state, "e4"), &mut moves);

        let captures: Vec<_> = moves
            .iter()
            .filter(|mv| mv.kind == MoveKind::Capture)
            .map(|mv| mv.to)
            .collect();
        assert_eq!(captures, vec![square("d5")]);
        assert_eq!(
            legal_destinations(&parsed.state, pawn_of(&parsed.state, "e4")),
            squares(&["e5", "d5"])
        );
    }

    #[test]
    fn en_passant_targets_the_flagged_neighbour() {
        let parsed = parse_layout("8/8/8/3pP3/8/8/8/8 w d5").expect("layout should parse");
        let mut moves = Vec::new();
        generate_pawn_moves(&parsed.state, pawn_of(&parsed.state, "e5"), &mut moves);

        assert!(moves.iter().any(|mv| mv.to == square("d6")
            && mv.kind == MoveKind::EnPassant {
                captured: square("d5")
            }));
        assert!(moves.iter().any(|mv| mv.to == square("e6")));
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn unflagged_neighbour_cannot_be_taken_en_passant() {
        let parsed = parse_layout("8/8/8/3pP3/8/8/8/8 w -").expect("layout should parse");
        assert_eq!(
            legal_destinations(&parsed.state, pawn_of(&parsed.state, "e5")),
            squares(&["e6"])
        );
    }

    #[test]
    fn own_pawns_are_never_captured() {
        let parsed = parse_layout("8/8/8/8/3P1P2/4P3/8/8 w -").expect("layout should parse");
        assert_eq!(
            legal_destinations(&parsed.state, pawn_of(&parsed.state, "e3")),
            squares(&["e4"])
        );
    }

    #[test]
    fn edge_files_only_look_inward() {
        let parsed = parse_layout("8/8/8/8/8/1p6/P7/8 w -").expect("layout should parse");
        assert_eq!(
            legal_destinations(&parsed.state, pawn_of(&parsed.state, "a2")),
            squares(&["a3", "a4", "b3"])
        );
        let black = Pawn::new(Side::Black, square("b3"));
        assert_eq!(
            legal_destinations(&parsed.state, black),
            squares(&["b2", "a2"])
        );
    }
}
