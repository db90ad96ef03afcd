//! Move-path enumeration for generator verification and benchmarking.
//!
//! Unlike a live game, perft explores every branch, so it clones the state
//! for each child. Positions where the game is decided are leaves.

use crate::game_state::chess_types::*;
use crate::game_state::game_status::{evaluate_status, GameStatus};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::move_generator::{generate_side_moves, MoveKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub double_steps: usize,
    /// Leaf moves that ended the game.
    pub terminal: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.double_steps += rhs.double_steps;
        self.terminal += rhs.terminal;
    }
}

pub fn perft(state: &PawnState, side: Side, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();

    for mv in generate_side_moves(state, side) {
        let mut next = state.clone();
        apply_move(&mut next, mv);
        let status = evaluate_status(&next, side);

        if depth == 1 {
            total.nodes += 1;
            if mv.is_capture() {
                total.captures += 1;
            }
            match mv.kind {
                MoveKind::EnPassant { .. } => total.en_passant += 1,
                MoveKind::DoubleStep => total.double_steps += 1,
                MoveKind::Advance | MoveKind::Capture => {}
            }
            if status.is_terminal() {
                total.terminal += 1;
            }
        } else if status == GameStatus::Ongoing {
            total.merge(perft(&next, side.opposite(), depth - 1));
        }
    }

    total
}
