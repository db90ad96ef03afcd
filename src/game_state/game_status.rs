//! Terminal-condition classification, evaluated after every completed move.

use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::has_any_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Won(Side),
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Ongoing
    }
}

/// Classify `state` right after `mover` completed a move. Win takes
/// precedence over stalemate.
pub fn evaluate_status(state: &PawnState, mover: Side) -> GameStatus {
    if is_won(state) {
        GameStatus::Won(mover)
    } else if is_stalemate(state) {
        GameStatus::Stalemate
    } else {
        GameStatus::Ongoing
    }
}

/// Classify a position nobody has moved into yet, such as a custom starting
/// layout. A decided position is credited to the side that reached its far
/// row or still has pawns, checking the side that moved last first.
pub fn evaluate_initial_status(state: &PawnState, side_to_move: Side) -> GameStatus {
    let last_mover = side_to_move.opposite();
    if is_won(state) {
        let winner = [last_mover, side_to_move]
            .into_iter()
            .find(|&side| has_won(state, side))
            .unwrap_or(last_mover);
        GameStatus::Won(winner)
    } else if is_stalemate(state) {
        GameStatus::Stalemate
    } else {
        GameStatus::Ongoing
    }
}

fn has_won(state: &PawnState, side: Side) -> bool {
    state
        .pawns(side)
        .any(|pawn| pawn.position.row() == side.far_row())
        || (state.pawn_count(side) > 0 && state.pawn_count(side.opposite()) == 0)
}

/// A side was eliminated or a pawn reached its far row.
pub fn is_won(state: &PawnState) -> bool {
    Side::ALL.into_iter().any(|side| {
        state.pawn_count(side) == 0
            || state
                .pawns(side)
                .any(|pawn| pawn.position.row() == side.far_row())
    })
}

/// Either side, regardless of who moves next, has no legal move left.
// NOTE: checks both sides, not only the side to move.
pub fn is_stalemate(state: &PawnState) -> bool {
    Side::ALL
        .into_iter()
        .any(|side| !has_any_move(state, side))
}
