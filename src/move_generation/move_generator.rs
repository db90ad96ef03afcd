//! Move records and side-wide generation entry points.
//!
//! Generation is a pure function of a pawn and the current `PawnState`; the
//! per-pawn rules live in `legal_moves_pawn`.

use std::collections::BTreeSet;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Advance,
    DoubleStep,
    Capture,
    /// Diagonal step onto an empty square, removing the pawn beside the mover.
    EnPassant { captured: Position },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PawnMove {
    pub side: Side,
    pub from: Position,
    pub to: Position,
    pub kind: MoveKind,
}

impl PawnMove {
    #[inline]
    pub const fn new(pawn: Pawn, to: Position, kind: MoveKind) -> Self {
        Self {
            side: pawn.side,
            from: pawn.position,
            to,
            kind,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        matches!(self.kind, MoveKind::Capture | MoveKind::EnPassant { .. })
    }
}

/// Destinations the pawn may legally move to. Order carries no meaning.
pub fn legal_destinations(state: &PawnState, pawn: Pawn) -> BTreeSet<Position> {
    let mut moves = Vec::with_capacity(4);
    generate_pawn_moves(state, pawn, &mut moves);
    moves.into_iter().map(|mv| mv.to).collect()
}

pub fn generate_side_moves(state: &PawnState, side: Side) -> Vec<PawnMove> {
    let mut out = Vec::with_capacity(state.pawn_count(side) * 2);
    for pawn in state.pawns(side) {
        generate_pawn_moves(state, pawn, &mut out);
    }
    out
}

pub fn has_any_move(state: &PawnState, side: Side) -> bool {
    let mut scratch = Vec::with_capacity(4);
    state.pawns(side).any(|pawn| {
        scratch.clear();
        generate_pawn_moves(state, pawn, &mut scratch);
        !scratch.is_empty()
    })
}

/// The generated move of `pawn` that lands on `to`, if any.
pub fn find_legal_move(state: &PawnState, pawn: Pawn, to: Position) -> Option<PawnMove> {
    let mut moves = Vec::with_capacity(4);
    generate_pawn_moves(state, pawn, &mut moves);
    moves.into_iter().find(|mv| mv.to == to)
}
