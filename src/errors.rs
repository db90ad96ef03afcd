use crate::game_state::chess_types::{Position, Side};

/// Reasons a move request is turned down. None of them change the board or
/// pass the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// Origin square is empty or holds an opposing pawn.
    #[error("No {} pawn at {}", .side.lowercase_name(), .at)]
    NoSuchPawn { side: Side, at: Position },

    /// Destination is not in the selected pawn's legal set.
    #[error("Pawn at {from} cannot move to {to}")]
    IllegalDestination { from: Position, to: Position },

    #[error("The game is already over")]
    GameFinished,
}

pub type MoveResult<T> = Result<T, MoveError>;
