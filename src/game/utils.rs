use chess::{BitBoard, Board, Piece, EMPTY};

use crate::models::{GameOverPayload, GameOverReason, Side, Termination};

/// Convert a side to the lowercase name used in log lines
pub fn side_to_string(side: Side) -> String {
    side.name().to_lowercase()
}

/// Human readable line for the check notice.
pub fn check_message(side: Side) -> String {
    format!("{} is in check!", side)
}

/// Build the game over broadcast for a finished game.
pub fn game_over_payload(termination: Termination) -> GameOverPayload {
    match termination {
        Termination::Checkmate { winner } => GameOverPayload {
            reason: GameOverReason::Checkmate,
            winner: Some(winner),
            draw: None,
            message: format!("{} wins by checkmate!", winner),
            celebration: true,
        },
        Termination::Stalemate => GameOverPayload {
            reason: GameOverReason::Stalemate,
            winner: None,
            draw: None,
            message: "Game ends in stalemate!".to_string(),
            celebration: false,
        },
        Termination::Draw(kind) => GameOverPayload {
            reason: GameOverReason::Draw,
            winner: None,
            draw: Some(kind),
            message: format!("Game ends in a draw by {}!", kind.describe()),
            celebration: false,
        },
    }
}

/// Check if the board has insufficient material for checkmate.
///
/// Covers bare kings, a single minor piece, and any number of bishops that
/// all stand on squares of one colour.
pub fn has_insufficient_material(board: &Board) -> bool {
    let heavy =
        *board.pieces(Piece::Pawn) | *board.pieces(Piece::Rook) | *board.pieces(Piece::Queen);
    if heavy != EMPTY {
        return false;
    }

    let knights = board.pieces(Piece::Knight).popcnt();
    let bishops = *board.pieces(Piece::Bishop);
    if knights + bishops.popcnt() <= 1 {
        return true;
    }
    if knights > 0 {
        return false;
    }

    bishops_share_square_colour(bishops)
}

fn bishops_share_square_colour(bishops: BitBoard) -> bool {
    let mut light = false;
    let mut dark = false;
    for square in bishops {
        if (square.get_rank().to_index() + square.get_file().to_index()) % 2 == 0 {
            dark = true;
        } else {
            light = true;
        }
    }
    !(light && dark)
}
