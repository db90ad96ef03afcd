//! In-place move execution.
//!
//! Callers hand in moves that move generation already accepted; nothing here
//! re-checks legality.

use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::{MoveKind, PawnMove};

/// Apply a generated move to `state`.
pub fn apply_move(state: &mut PawnState, mv: PawnMove) {
    let mover = Pawn::new(mv.side, mv.from);
    let enemy = mv.side.opposite();

    // Remove moved pawn from origin.
    let moved = state.remove_pawn(mover);
    debug_assert!(moved, "no {} pawn at {}", mv.side.lowercase_name(), mv.from);

    // Handle captures.
    match mv.kind {
        MoveKind::Capture => {
            state.remove_pawn(Pawn::new(enemy, mv.to));
        }
        MoveKind::EnPassant { captured } => {
            state.remove_pawn(Pawn::new(enemy, captured));
        }
        MoveKind::Advance | MoveKind::DoubleStep => {}
    }

    let arrived = Pawn::new(mv.side, mv.to);
    state.insert_pawn(arrived);

    // Eligibility lasts for exactly one opposing ply.
    state.clear_en_passant_targets();
    if mv.kind == MoveKind::DoubleStep {
        state.mark_en_passant_target(arrived);
    }
}

/// Work out what kind of move `pawn -> to` is, then apply it.
///
/// `to` must be one of the pawn's legal destinations.
pub fn execute_move(state: &mut PawnState, pawn: Pawn, to: Position) -> PawnMove {
    let mv = PawnMove::new(pawn, to, classify_move(state, pawn, to));
    apply_move(state, mv);
    mv
}

fn classify_move(state: &PawnState, pawn: Pawn, to: Position) -> MoveKind {
    let enemy = pawn.side.opposite();
    let diagonal = to.column() != pawn.position.column();

    if state.occupant(to) == Some(enemy) {
        return MoveKind::Capture;
    }

    if diagonal {
        if let Some(beside) = Position::new(to.column(), pawn.position.row()) {
            if state.is_en_passant_target(Pawn::new(enemy, beside)) {
                return MoveKind::EnPassant { captured: beside };
            }
        }
    }

    if to.row().abs_diff(pawn.position.row()) == 2 {
        MoveKind::DoubleStep
    } else {
        MoveKind::Advance
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_move, execute_move};
    use crate::game_state::chess_types::{Pawn, PawnState, Position, Side};
    use crate::move_generation::move_generator::{find_legal_move, MoveKind};
    use crate::utils::algebraic::parse_square;
    use crate::utils::fen_parser::parse_layout;

    fn square(name: &str) -> Position {
        parse_square(name).expect("test square should parse")
    }

    #[test]
    fn double_step_becomes_the_only_en_passant_target() {
        let mut state = PawnState::new_game();
        let e2 = state.pawn_at(square("e2")).expect("white pawn on e2");
        let mv = execute_move(&mut state, e2, square("e4"));

        assert_eq!(mv.kind, MoveKind::DoubleStep);
        assert_eq!(state.pawn_at(square("e4")), Some(Pawn::new(Side::White, square("e4"))));
        assert!(state.pawn_at(square("e2")).is_none());
        assert_eq!(
            state.en_passant_targets().collect::<Vec<_>>(),
            vec![Pawn::new(Side::White, square("e4"))]
        );

        let d7 = state.pawn_at(square("d7")).expect("black pawn on d7");
        execute_move(&mut state, d7, square("d6"));
        assert_eq!(state.en_passant_targets().count(), 0);
    }

    #[test]
    fn black_double_step_replaces_the_previous_target() {
        let mut parsed = parse_layout("8/3p4/8/8/4P3/8/8/8 b e4").expect("layout should parse");
        let d7 = parsed.state.pawn_at(square("d7")).expect("black pawn on d7");
        let mv = find_legal_move(&parsed.state, d7, square("d5")).expect("d7d5 should be legal");
        apply_move(&mut parsed.state, mv);

        assert_eq!(
            parsed.state.en_passant_targets().collect::<Vec<_>>(),
            vec![Pawn::new(Side::Black, square("d5"))]
        );
    }

    #[test]
    fn ordinary_capture_removes_the_destination_pawn() {
        let mut parsed = parse_layout("8/8/8/3p4/4P3/8/8/8 w -").expect("layout should parse");
        let e4 = parsed.state.pawn_at(square("e4")).expect("white pawn on e4");
        let mv = execute_move(&mut parsed.state, e4, square("d5"));

        assert_eq!(mv.kind, MoveKind::Capture);
        assert_eq!(parsed.state.pawn_count(Side::Black), 0);
        assert_eq!(parsed.state.occupant(square("d5")), Some(Side::White));
    }

    #[test]
    fn en_passant_removes_the_adjacent_pawn() {
        let mut parsed = parse_layout("8/8/8/8/3Pp3/8/8/8 b d4").expect("layout should parse");
        let e4 = parsed.state.pawn_at(square("e4")).expect("black pawn on e4");
        let mv = execute_move(&mut parsed.state, e4, square("d3"));

        assert_eq!(
            mv.kind,
            MoveKind::EnPassant {
                captured: square("d4")
            }
        );
        assert!(parsed.state.is_vacant(square("d4")));
        assert!(parsed.state.is_vacant(square("e4")));
        assert_eq!(parsed.state.occupant(square("d3")), Some(Side::Black));
        assert_eq!(parsed.state.pawn_count(Side::White), 0);
    }

    #[test]
    fn classification_matches_generation() {
        let parsed = parse_layout("8/8/8/2pPp3/8/8/8/8 w c5").expect("layout should parse");
        let d5 = parsed.state.pawn_at(square("d5")).expect("white pawn on d5");
        for to in ["d6", "c6"] {
            let generated = find_legal_move(&parsed.state, d5, square(to))
                .expect("destination should be legal");
            let mut scratch = parsed.state.clone();
            let executed = execute_move(&mut scratch, d5, square(to));
            assert_eq!(generated, executed);

            let mut replayed = parsed.state.clone();
            apply_move(&mut replayed, generated);
            assert_eq!(replayed, scratch);
        }
    }
}
