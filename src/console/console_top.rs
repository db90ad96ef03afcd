//! Text console front-end and input loop.
//!
//! Reads player names, prompts for moves, prints the board after each move
//! and reports the result. All I/O goes through generic `BufRead`/`Write`
//! handles so complete sessions can be scripted in tests.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::console::session_config::SessionConfig;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::errors::MoveError;
use crate::game_state::chess_types::Side;
use crate::game_state::game_controller::{CommandOutcome, GameController, GamePhase};
use crate::utils::fen_parser::parse_layout;
use crate::utils::long_algebraic::{move_to_long_algebraic, parse_move_command, MoveCommand};
use crate::utils::pgn::{write_pgn, GameRecord};
use crate::utils::render_game_state::render_game_state;

const GAME_TITLE: &str = " Pawns-Only Chess";
const INVALID_INPUT: &str = "Invalid Input";
const FAREWELL: &str = "Bye!";

pub fn run_stdio_session(config: &SessionConfig) -> io::Result<GamePhase> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(&mut stdin.lock(), &mut stdout, config)
}

/// Play one session. End of input counts as `exit`.
pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    config: &SessionConfig,
) -> io::Result<GamePhase> {
    let mut controller = match &config.layout {
        Some(layout) => GameController::from_layout(
            parse_layout(layout).map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?,
        ),
        None => GameController::new(),
    };

    let mut engine: Option<Box<dyn Engine>> = config.vs_random.then(|| {
        let engine = match config.seed {
            Some(seed) => RandomEngine::with_seed(seed),
            None => RandomEngine::new(),
        };
        Box::new(engine) as Box<dyn Engine>
    });

    writeln!(out, "{GAME_TITLE}")?;

    let Some(first_player) = prompt(input, out, "First Player's name:")? else {
        return say_goodbye(out, &mut controller);
    };
    let second_player = match &engine {
        Some(engine) => engine.name().to_owned(),
        None => match prompt(input, out, "Second Player's name:")? {
            Some(name) => name,
            None => return say_goodbye(out, &mut controller),
        },
    };

    write!(out, "{}", render_game_state(&controller.snapshot()))?;
    announce_result(out, controller.phase())?;

    while let Some(side) = controller.side_to_move() {
        let player = match side {
            Side::White => &first_player,
            Side::Black => &second_player,
        };
        writeln!(out, "{player}'s turn:")?;

        let command = match (side, engine.as_mut()) {
            (Side::Black, Some(engine)) => {
                match engine
                    .choose_move(controller.state(), side)
                    .map_err(io::Error::other)?
                {
                    Some(mv) => {
                        writeln!(out, "{}", move_to_long_algebraic(&mv))?;
                        MoveCommand::Move {
                            from: mv.from,
                            to: mv.to,
                        }
                    }
                    None => MoveCommand::Exit,
                }
            }
            _ => match read_line(input)? {
                None => MoveCommand::Exit,
                Some(line) => match parse_move_command(&line) {
                    Ok(command) => command,
                    Err(err) => {
                        debug!("[CONSOLE] {err}");
                        writeln!(out, "{INVALID_INPUT}")?;
                        continue;
                    }
                },
            },
        };

        match controller.handle_command(command) {
            Ok(CommandOutcome::Exited) => writeln!(out, "{FAREWELL}")?,
            Ok(CommandOutcome::Applied { .. }) => {
                write!(out, "{}", render_game_state(&controller.snapshot()))?;
                announce_result(out, controller.phase())?;
            }
            Err(err @ MoveError::NoSuchPawn { .. }) => writeln!(out, "{err}")?,
            Err(err) => {
                debug!("[CONSOLE] {err}");
                writeln!(out, "{INVALID_INPUT}")?;
            }
        }
    }

    if config.record {
        let record = GameRecord::from_controller(&controller, &first_player, &second_player);
        writeln!(out)?;
        write!(out, "{}", write_pgn(&record))?;
    }

    out.flush()?;
    Ok(controller.phase())
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> io::Result<Option<String>> {
    writeln!(out, "{message}")?;
    out.flush()?;
    read_line(input)
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_owned()))
}

/// Print the closing lines of a finished game; nothing while it is running.
fn announce_result<W: Write>(out: &mut W, phase: GamePhase) -> io::Result<()> {
    match phase {
        GamePhase::Won(winner) => {
            writeln!(out, "{} Wins!", winner.name())?;
            writeln!(out, "{FAREWELL}")?;
            writeln!(out)
        }
        GamePhase::Stalemate => {
            writeln!(out, "Stalemate!")?;
            writeln!(out, "{FAREWELL}")
        }
        GamePhase::AwaitingMove(_) | GamePhase::Exited => Ok(()),
    }
}

fn say_goodbye<W: Write>(out: &mut W, controller: &mut GameController) -> io::Result<GamePhase> {
    controller.exit();
    writeln!(out, "{FAREWELL}")?;
    out.flush()?;
    Ok(controller.phase())
}
