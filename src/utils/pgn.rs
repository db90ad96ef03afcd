//! PGN-style game record.
//!
//! Formats the moves of a finished (or abandoned) session as bracketed
//! headers followed by numbered movetext. Records are printed, never stored.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};

use crate::game_state::chess_rules::STARTING_LAYOUT;
use crate::game_state::game_controller::{GameController, GamePhase};
use crate::game_state::chess_types::Side;
use crate::move_generation::move_generator::PawnMove;
use crate::utils::long_algebraic::move_to_long_algebraic;

#[derive(Debug, Clone)]
pub struct GameRecord {
    pub white_name: String,
    pub black_name: String,
    pub initial_layout: String,
    pub first_mover: Side,
    pub moves: Vec<PawnMove>,
    pub phase: GamePhase,
}

impl GameRecord {
    pub fn from_controller(controller: &GameController, white_name: &str, black_name: &str) -> Self {
        let first_mover = controller
            .history()
            .first()
            .map(|mv| mv.side)
            .or_else(|| controller.side_to_move())
            .unwrap_or(Side::White);

        Self {
            white_name: white_name.to_owned(),
            black_name: black_name.to_owned(),
            initial_layout: controller.initial_layout().to_owned(),
            first_mover,
            moves: controller.history().to_vec(),
            phase: controller.phase(),
        }
    }
}

pub fn result_token(phase: GamePhase) -> &'static str {
    match phase {
        GamePhase::Won(Side::White) => "1-0",
        GamePhase::Won(Side::Black) => "0-1",
        GamePhase::Stalemate => "1/2-1/2",
        GamePhase::AwaitingMove(_) | GamePhase::Exited => "*",
    }
}

pub fn write_pgn(record: &GameRecord) -> String {
    write_pgn_dated(record, Local::now().date_naive())
}

pub fn write_pgn_dated(record: &GameRecord, date: NaiveDate) -> String {
    let result = result_token(record.phase);

    let mut headers = BTreeMap::<&str, String>::new();
    headers.insert("Event", "Pawns-Only Chess".to_owned());
    headers.insert("Site", "Local".to_owned());
    headers.insert("Date", date.format("%Y.%m.%d").to_string());
    headers.insert("White", record.white_name.clone());
    headers.insert("Black", record.black_name.clone());
    headers.insert("Result", result.to_owned());
    if record.initial_layout != STARTING_LAYOUT {
        headers.insert("SetUp", "1".to_owned());
        headers.insert("Layout", record.initial_layout.clone());
    }

    let mut out = String::new();
    for (key, value) in &headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let mut movetext_parts = Vec::<String>::with_capacity(record.moves.len() + 2);
    let offset = usize::from(record.first_mover == Side::Black);
    for (ply, mv) in record.moves.iter().enumerate() {
        let lan = move_to_long_algebraic(mv);
        let slot = ply + offset;
        if slot % 2 == 0 {
            movetext_parts.push(format!("{}. {}", (slot / 2) + 1, lan));
        } else if ply == 0 {
            movetext_parts.push(format!("1... {}", lan));
        } else {
            movetext_parts.push(lan);
        }
    }
    movetext_parts.push(result.to_owned());

    out.push_str(&movetext_parts.join(" "));
    out.push('\n');
    out
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{write_pgn_dated, GameRecord};
    use crate::game_state::game_controller::GameController;
    use crate::utils::algebraic::parse_square;
    use crate::utils::fen_parser::parse_layout;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).expect("fixed date should be valid")
    }

    fn play(controller: &mut GameController, lan: &str) {
        let from = parse_square(&lan[0..2]).expect("origin should parse");
        let to = parse_square(&lan[2..4]).expect("destination should parse");
        controller.apply_move(from, to).expect("move should be legal");
    }

    #[test]
    fn record_lists_headers_and_numbered_moves() {
        let mut controller = GameController::new();
        for lan in ["e2e4", "d7d5", "e4d5"] {
            play(&mut controller, lan);
        }

        let record = GameRecord::from_controller(&controller, "Ann \"A\"", "Bob");
        let pgn = write_pgn_dated(&record, date());

        assert!(pgn.contains("[Date \"2024.03.09\"]\n"));
        assert!(pgn.contains("[White \"Ann \\\"A\\\"\"]\n"));
        assert!(pgn.contains("[Result \"*\"]\n"));
        assert!(!pgn.contains("SetUp"));
        assert!(pgn.ends_with("\n1. e2e4 d7d5 2. e4d5 *\n"));
    }

    #[test]
    fn custom_layout_and_result_are_recorded() {
        let layout = parse_layout("8/8/8/8/P7/8/6p1/8 b -").expect("layout should parse");
        let mut controller = GameController::from_layout(layout);
        play(&mut controller, "g2g1");

        let record = GameRecord::from_controller(&controller, "White", "Black");
        let pgn = write_pgn_dated(&record, date());

        assert!(pgn.contains("[SetUp \"1\"]\n"));
        assert!(pgn.contains("[Layout \"8/8/8/8/P7/8/6p1/8 b -\"]\n"));
        assert!(pgn.contains("[Result \"0-1\"]\n"));
        assert!(pgn.ends_with("\n1... g2g1 0-1\n"));
    }
}
