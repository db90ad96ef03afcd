use crate::game_state::chess_types::Position;
use crate::move_generation::move_generator::PawnMove;
use crate::utils::algebraic::parse_square;

pub const EXIT_COMMAND: &str = "exit";

/// One line of player input after tokenizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveCommand {
    Move { from: Position, to: Position },
    Exit,
}

/// Parse `[a-h][1-8][a-h][1-8]` or `exit`.
pub fn parse_move_command(input: &str) -> Result<MoveCommand, String> {
    let trimmed = input.trim();
    if trimmed == EXIT_COMMAND {
        return Ok(MoveCommand::Exit);
    }

    if trimmed.len() != 4 || !trimmed.is_ascii() {
        return Err(format!("Invalid move command: {trimmed}"));
    }

    let from = parse_square(&trimmed[0..2])?;
    let to = parse_square(&trimmed[2..4])?;
    Ok(MoveCommand::Move { from, to })
}

pub fn move_to_long_algebraic(mv: &PawnMove) -> String {
    format!("{}{}", mv.from, mv.to)
}

#[cfg(test)]
mod tests {
    use super::{move_to_long_algebraic, parse_move_command, MoveCommand};
    use crate::game_state::chess_types::{Pawn, Side};
    use crate::move_generation::move_generator::{MoveKind, PawnMove};
    use crate::utils::algebraic::parse_square;

    #[test]
    fn parses_moves_and_exit() {
        let parsed = parse_move_command("e2e4\n").expect("e2e4 should parse");
        assert_eq!(
            parsed,
            MoveCommand::Move {
                from: parse_square("e2").expect("e2"),
                to: parse_square("e4").expect("e4"),
            }
        );
        assert_eq!(
            parse_move_command("  exit ").expect("exit should parse"),
            MoveCommand::Exit
        );
    }

    #[test]
    fn rejects_anything_else() {
        for bad in ["", "e2", "e2e", "e2e4e5", "e2-e4", "i2i4", "e0e4", "EXIT", "quit", "é2e4"] {
            assert!(parse_move_command(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn formats_as_four_characters() {
        let pawn = Pawn::new(Side::Black, parse_square("d7").expect("d7"));
        let mv = PawnMove::new(pawn, parse_square("d5").expect("d5"), MoveKind::DoubleStep);
        assert_eq!(move_to_long_algebraic(&mv), "d7d5");
    }
}
