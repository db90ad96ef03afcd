//! Head-to-head engine match harness.
//!
//! Plays two `Engine` implementations against each other through a
//! `GameController`, without any console I/O.

use std::time::Instant;

use tracing::debug;

use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::{PawnState, Side};
use crate::game_state::game_controller::{GameController, GamePhase};
use crate::utils::fen_parser::parse_layout;
use crate::utils::long_algebraic::move_to_long_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWin,
    BlackWin,
    Stalemate,
    /// An engine returned no move while the game was still running.
    Forfeit(Side),
    MaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    /// Custom starting layout; the standard setup when `None`.
    pub layout: Option<String>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            layout: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: PawnState,
    pub played_moves_lan: Vec<String>,
    pub total_time_ns: u128,
}

pub fn play_engine_match(
    white: &mut dyn Engine,
    black: &mut dyn Engine,
    config: &MatchConfig,
) -> Result<MatchResult, String> {
    let mut controller = match &config.layout {
        Some(layout) => GameController::from_layout(parse_layout(layout)?),
        None => GameController::new(),
    };
    white.new_game();
    black.new_game();

    let started = Instant::now();
    let mut played_moves_lan = Vec::new();

    let outcome = loop {
        let Some(side) = controller.side_to_move() else {
            break match controller.phase() {
                GamePhase::Won(Side::White) => MatchOutcome::WhiteWin,
                GamePhase::Won(Side::Black) => MatchOutcome::BlackWin,
                _ => MatchOutcome::Stalemate,
            };
        };

        if played_moves_lan.len() >= usize::from(config.max_plies) {
            break MatchOutcome::MaxPlies;
        }

        let choice = match side {
            Side::White => white.choose_move(controller.state(), side)?,
            Side::Black => black.choose_move(controller.state(), side)?,
        };
        let Some(mv) = choice else {
            break MatchOutcome::Forfeit(side);
        };

        if let Err(err) = controller.apply_move(mv.from, mv.to) {
            let name = match side {
                Side::White => white.name(),
                Side::Black => black.name(),
            };
            return Err(format!("{name} proposed {}: {err}", move_to_long_algebraic(&mv)));
        }
        played_moves_lan.push(move_to_long_algebraic(&mv));
    };

    debug!(
        "[MATCH] {:?} after {} plies: {}",
        outcome,
        played_moves_lan.len(),
        played_moves_lan.join(" ")
    );

    Ok(MatchResult {
        outcome,
        final_state: controller.state().clone(),
        played_moves_lan,
        total_time_ns: started.elapsed().as_nanos(),
    })
}
