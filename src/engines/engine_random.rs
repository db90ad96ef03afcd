//! Random-move engine.
//!
//! Selects uniformly from legal moves. Used as the computer opponent in the
//! console and for self-play in tests.

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, SeedableRng};
use tracing::debug;

use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::{PawnState, Side};
use crate::move_generation::move_generator::{generate_side_moves, PawnMove};

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Deterministic move choice for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random Pawn"
    }

    fn choose_move(&mut self, state: &PawnState, side: Side) -> Result<Option<PawnMove>, String> {
        let legal_moves = generate_side_moves(state, side);
        debug!("[ENGINE] random_engine legal_moves {}", legal_moves.len());

        if legal_moves.is_empty() {
            return Ok(None);
        }

        let picked = legal_moves
            .as_slice()
            .choose(&mut self.rng)
            .ok_or("failed to choose a random move")?;

        Ok(Some(*picked))
    }
}
