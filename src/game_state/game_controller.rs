//! Turn state machine for one game.
//!
//! `GameController` exclusively owns the `PawnState` of a session. Each move
//! request is validated (origin belongs to the side to move, destination is in
//! the pawn's legal set), executed, and then classified by `game_status`. A
//! rejected request leaves the board and the turn untouched.

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::errors::{MoveError, MoveResult};
use crate::game_state::chess_types::*;
use crate::game_state::game_status::{evaluate_initial_status, evaluate_status, GameStatus};
use crate::move_generation::legal_move_apply::execute_move;
use crate::move_generation::move_generator::{legal_destinations, PawnMove};
use crate::utils::fen_generator::generate_layout;
use crate::utils::fen_parser::Layout;
use crate::utils::long_algebraic::{move_to_long_algebraic, MoveCommand};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    AwaitingMove(Side),
    Won(Side),
    Stalemate,
    Exited,
}

impl GamePhase {
    #[inline]
    pub fn side_to_move(self) -> Option<Side> {
        match self {
            GamePhase::AwaitingMove(side) => Some(side),
            _ => None,
        }
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        self.side_to_move().is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied { mv: PawnMove, status: GameStatus },
    Exited,
}

#[derive(Debug, Clone)]
pub struct GameController {
    state: PawnState,
    phase: GamePhase,
    initial_layout: String,
    history: Vec<PawnMove>,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl GameController {
    pub fn new() -> Self {
        Self::from_state(PawnState::new_game(), Side::White)
    }

    pub fn from_layout(layout: Layout) -> Self {
        Self::from_state(layout.state, layout.side_to_move)
    }

    /// A layout that is already decided starts in its terminal phase.
    pub fn from_state(state: PawnState, side_to_move: Side) -> Self {
        let initial_layout = generate_layout(&state, side_to_move);
        let phase = match evaluate_initial_status(&state, side_to_move) {
            GameStatus::Ongoing => GamePhase::AwaitingMove(side_to_move),
            GameStatus::Won(winner) => {
                info!("[GAME] Starting layout {initial_layout} is already won by {winner}");
                GamePhase::Won(winner)
            }
            GameStatus::Stalemate => {
                info!("[GAME] Starting layout {initial_layout} is already stalemate");
                GamePhase::Stalemate
            }
        };
        Self {
            state,
            phase,
            initial_layout,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn state(&self) -> &PawnState {
        &self.state
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[inline]
    pub fn side_to_move(&self) -> Option<Side> {
        self.phase.side_to_move()
    }

    pub fn history(&self) -> &[PawnMove] {
        &self.history
    }

    /// Layout the game started from.
    pub fn initial_layout(&self) -> &str {
        &self.initial_layout
    }

    #[inline]
    pub fn snapshot(&self) -> BoardSnapshot {
        self.state.snapshot()
    }

    /// Legal destinations of the pawn on `origin`; empty when the square is vacant.
    pub fn legal_destinations(&self, origin: Position) -> BTreeSet<Position> {
        self.state
            .pawn_at(origin)
            .map(|pawn| legal_destinations(&self.state, pawn))
            .unwrap_or_default()
    }

    pub fn apply_move(&mut self, origin: Position, destination: Position) -> MoveResult<GameStatus> {
        self.play(origin, destination).map(|(_, status)| status)
    }

    fn play(&mut self, origin: Position, destination: Position) -> MoveResult<(PawnMove, GameStatus)> {
        let side = self.phase.side_to_move().ok_or(MoveError::GameFinished)?;

        let pawn = self
            .state
            .pawn_at(origin)
            .filter(|pawn| pawn.side == side)
            .ok_or(MoveError::NoSuchPawn { side, at: origin })?;

        if !legal_destinations(&self.state, pawn).contains(&destination) {
            debug!("[GAME] Rejected {origin}{destination} for {side}: not a legal destination");
            return Err(MoveError::IllegalDestination {
                from: origin,
                to: destination,
            });
        }

        let mv = execute_move(&mut self.state, pawn, destination);
        self.history.push(mv);

        let status = evaluate_status(&self.state, side);
        debug!(
            "[GAME] {side} played {} ({:?}) -> {:?}",
            move_to_long_algebraic(&mv),
            mv.kind,
            status
        );

        self.phase = match status {
            GameStatus::Ongoing => GamePhase::AwaitingMove(side.opposite()),
            GameStatus::Won(winner) => {
                info!("[GAME] {winner} wins after {} plies", self.history.len());
                GamePhase::Won(winner)
            }
            GameStatus::Stalemate => {
                info!("[GAME] Stalemate after {} plies", self.history.len());
                GamePhase::Stalemate
            }
        };

        Ok((mv, status))
    }

    pub fn exit(&mut self) {
        debug!("[GAME] Session exited in phase {:?}", self.phase);
        self.phase = GamePhase::Exited;
    }

    pub fn handle_command(&mut self, command: MoveCommand) -> MoveResult<CommandOutcome> {
        match command {
            MoveCommand::Exit => {
                self.exit();
                Ok(CommandOutcome::Exited)
            }
            MoveCommand::Move { from, to } => {
                let (mv, status) = self.play(from, to)?;
                Ok(CommandOutcome::Applied { mv, status })
            }
        }
    }
}
