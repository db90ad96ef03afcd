//! Authoritative set of living pawns.
//!
//! `PawnState` stores the occupied squares of each side and the pawns that
//! may be captured en passant on the current ply. It is mutated in place by
//! `move_generation::legal_move_apply` and read by move generation, status
//! evaluation and the renderers.

use std::collections::BTreeSet;

use crate::game_state::chess_rules::{FIRST_COLUMN, LAST_COLUMN};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PawnState {
    // [side] -> occupied squares
    pawns: [BTreeSet<Position>; 2],

    // Pawns that double-stepped on the previous ply.
    en_passant_targets: BTreeSet<Pawn>,
}

impl PawnState {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Eight white pawns on row 2, eight black pawns on row 7.
    pub fn new_game() -> Self {
        let mut state = Self::empty();
        for side in Side::ALL {
            for column in FIRST_COLUMN..=LAST_COLUMN {
                if let Some(position) = Position::new(column, side.starting_row()) {
                    state.insert_pawn(Pawn::new(side, position));
                }
            }
        }
        state
    }

    pub fn occupant(&self, position: Position) -> Option<Side> {
        Side::ALL
            .into_iter()
            .find(|side| self.pawns[side.index()].contains(&position))
    }

    #[inline]
    pub fn pawn_at(&self, position: Position) -> Option<Pawn> {
        self.occupant(position).map(|side| Pawn::new(side, position))
    }

    #[inline]
    pub fn is_vacant(&self, position: Position) -> bool {
        self.occupant(position).is_none()
    }

    pub fn pawns(&self, side: Side) -> impl Iterator<Item = Pawn> + '_ {
        self.pawns[side.index()]
            .iter()
            .map(move |&position| Pawn::new(side, position))
    }

    #[inline]
    pub fn pawn_count(&self, side: Side) -> usize {
        self.pawns[side.index()].len()
    }

    pub fn en_passant_targets(&self) -> impl Iterator<Item = Pawn> + '_ {
        self.en_passant_targets.iter().copied()
    }

    #[inline]
    pub fn is_en_passant_target(&self, pawn: Pawn) -> bool {
        self.en_passant_targets.contains(&pawn)
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut snapshot = BoardSnapshot::default();
        for side in Side::ALL {
            for pawn in self.pawns(side) {
                snapshot.set(pawn.position, side);
            }
        }
        snapshot
    }

    /// Add a pawn to an empty square. Used when building custom layouts.
    pub fn place_pawn(&mut self, pawn: Pawn) -> Result<(), String> {
        if let Some(side) = self.occupant(pawn.position) {
            return Err(format!(
                "Square {} is already occupied by a {} pawn",
                pawn.position,
                side.lowercase_name()
            ));
        }
        self.insert_pawn(pawn);
        Ok(())
    }

    /// Flag a living pawn as capturable en passant on the next ply.
    pub fn set_en_passant_target(&mut self, pawn: Pawn) -> Result<(), String> {
        if self.pawn_at(pawn.position) != Some(pawn) {
            return Err(format!(
                "No {} pawn at {} to mark as en-passant target",
                pawn.side.lowercase_name(),
                pawn.position
            ));
        }
        self.mark_en_passant_target(pawn);
        Ok(())
    }

    pub(crate) fn insert_pawn(&mut self, pawn: Pawn) {
        self.pawns[pawn.side.index()].insert(pawn.position);
    }

    /// Unchecked: `pawn` must be on the board.
    pub(crate) fn mark_en_passant_target(&mut self, pawn: Pawn) {
        debug_assert!(self.pawn_at(pawn.position) == Some(pawn));
        self.en_passant_targets.insert(pawn);
    }

    /// Returns `false` when no such pawn was on the board.
    pub(crate) fn remove_pawn(&mut self, pawn: Pawn) -> bool {
        self.en_passant_targets.remove(&pawn);
        self.pawns[pawn.side.index()].remove(&pawn.position)
    }

    pub(crate) fn clear_en_passant_targets(&mut self) {
        self.en_passant_targets.clear();
    }
}
