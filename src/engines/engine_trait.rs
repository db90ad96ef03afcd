//! Engine abstraction for computer-controlled sides.
//!
//! The console and the match harness only talk to this trait, so different
//! move-selection strategies can be swapped in at runtime.

use crate::game_state::chess_types::{PawnState, Side};
use crate::move_generation::move_generator::PawnMove;

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Pick a move for `side`; `Ok(None)` when the side has no legal move.
    fn choose_move(&mut self, state: &PawnState, side: Side) -> Result<Option<PawnMove>, String>;
}
