//! Layout-string to `PawnState` parser.
//!
//! The layout notation is a pawn-only cut of FEN with three fields:
//!
//! `<ranks> <side to move> <en-passant target>`
//!
//! Ranks run from 8 down to 1, separated by `/`; `P` is a white pawn, `p` a
//! black pawn and digits count empty squares. The last field names the square
//! of the pawn that just double-stepped (not the square it passed over), or
//! `-`.

use crate::game_state::chess_types::*;
use crate::utils::algebraic::parse_square;

/// A parsed layout: board plus the side whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub state: PawnState,
    pub side_to_move: Side,
}

pub fn parse_layout(layout: &str) -> Result<Layout, String> {
    let mut parts = layout.split_whitespace();

    let board_part = parts.next().ok_or("Missing board layout")?;
    let side_part = parts.next().ok_or("Missing side-to-move")?;
    let en_passant_part = parts.next().ok_or("Missing en-passant target")?;

    if parts.next().is_some() {
        return Err("Layout has extra trailing fields".to_owned());
    }

    let mut state = PawnState::empty();
    parse_board(board_part, &mut state)?;
    let side_to_move = parse_side_to_move(side_part)?;
    parse_en_passant_target(en_passant_part, side_to_move, &mut state)?;

    Ok(Layout {
        state,
        side_to_move,
    })
}

fn parse_board(board_part: &str, state: &mut PawnState) -> Result<(), String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err("Board layout must contain 8 ranks".to_owned());
    }

    for (layout_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7usize.saturating_sub(layout_rank_idx);
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                let step = usize::try_from(empty_count).map_err(|_| "Digit conversion failed")?;
                if !(1..=8).contains(&step) {
                    return Err(format!("Invalid empty-square count '{ch}'"));
                }
                file += step;
                continue;
            }

            let side = side_from_layout_char(ch)
                .ok_or_else(|| format!("Invalid piece character '{ch}' in board layout"))?;

            let position = Position::from_indices(file, board_rank)
                .ok_or("Board rank has too many files")?;

            // Pawns never move backwards, so nothing can stand behind its starting row.
            if position.row() == side.opposite().far_row() {
                return Err(format!(
                    "A {} pawn cannot stand on {}",
                    side.lowercase_name(),
                    position
                ));
            }

            state.place_pawn(Pawn::new(side, position))?;
            file += 1;
        }

        if file != 8 {
            return Err("Board rank does not sum to 8 files".to_owned());
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Side, String> {
    match side_part {
        "w" => Ok(Side::White),
        "b" => Ok(Side::Black),
        _ => Err(format!("Invalid side-to-move field: {side_part}")),
    }
}

fn parse_en_passant_target(
    en_passant_part: &str,
    side_to_move: Side,
    state: &mut PawnState,
) -> Result<(), String> {
    if en_passant_part == "-" {
        return Ok(());
    }

    let position = parse_square(en_passant_part)?;
    let last_mover = side_to_move.opposite();

    let double_step_row = i16::from(last_mover.starting_row()) + 2 * i16::from(last_mover.forward());
    if i16::from(position.row()) != double_step_row {
        return Err(format!(
            "En-passant target {position} is not on the {} double-step row",
            last_mover.lowercase_name()
        ));
    }

    // The double step passed over these squares, so both are empty now.
    let target = Pawn::new(last_mover, position);
    for behind in [target.ahead(-1), target.ahead(-2)].into_iter().flatten() {
        if !state.is_vacant(behind) {
            return Err(format!(
                "En-passant target {position} cannot have double-stepped past {behind}"
            ));
        }
    }

    state.set_en_passant_target(target)
}

fn side_from_layout_char(ch: char) -> Option<Side> {
    match ch {
        'P' => Some(Side::White),
        'p' => Some(Side::Black),
        _ => None,
    }
}
