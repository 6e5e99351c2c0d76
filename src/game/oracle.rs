use chess::{Board, BoardStatus, ChessMove, Game, Piece, Rank, Square};
use log::debug;
use std::str::FromStr;

use crate::error::MoveError;
use crate::game::utils::has_insufficient_material;
use crate::models::{DrawKind, MoveRequest, PositionStatus, Side};

/// Rules engine seen from the table: it owns the one canonical position and
/// is the only thing allowed to judge or apply a move.
pub trait PositionOracle {
    fn side_to_move(&self) -> Side;

    /// Apply `request` if it is legal in the current position. On error the
    /// position must be exactly what it was before the call.
    fn apply_if_legal(&mut self, request: &MoveRequest) -> Result<(), MoveError>;

    fn status(&self) -> PositionStatus;

    /// Lossless FEN of the current position, move counters included.
    fn fen(&self) -> String;

    /// Back to the standard starting position.
    fn reset(&mut self);
}

/// `PositionOracle` backed by the `chess` crate.
///
/// The crate's own FEN writer always prints `0 1` for the counters, so the
/// halfmove clock and fullmove number are tracked here.
#[derive(Debug, Clone)]
pub struct ChessOracle {
    game: Game,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for ChessOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessOracle {
    pub fn new() -> Self {
        ChessOracle {
            game: Game::new(),
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Start from an arbitrary position. Counters are read from the last two
    /// FEN fields when present.
    pub fn from_fen(fen: &str) -> Result<Self, MoveError> {
        let board = Board::from_str(fen)
            .map_err(|e| MoveError::Malformed(format!("bad FEN {:?}: {:?}", fen, e)))?;
        let fields: Vec<&str> = fen.split_whitespace().collect();
        let halfmove_clock = fields.get(4).and_then(|f| f.parse().ok()).unwrap_or(0);
        let fullmove_number = fields.get(5).and_then(|f| f.parse().ok()).unwrap_or(1);

        Ok(ChessOracle {
            game: Game::new_with_board(board),
            halfmove_clock,
            fullmove_number,
        })
    }

    pub fn board(&self) -> Board {
        self.game.current_position()
    }

    /// Turn the wire request into a move on the current board. Pawn moves to
    /// the last rank without a choice promote to a queen. A promotion letter
    /// on any other move must still be valid but is otherwise ignored.
    fn parse_move(&self, request: &MoveRequest) -> Result<ChessMove, MoveError> {
        let from = parse_square(&request.from)?;
        let to = parse_square(&request.to)?;
        let board = self.board();

        let requested = request.promotion.as_deref().map(parse_promotion).transpose()?;
        let promotion = if is_promotion_square(&board, from, to) {
            Some(requested.unwrap_or(Piece::Queen))
        } else {
            None
        };

        Ok(ChessMove::new(from, to, promotion))
    }

    fn advance_counters(&mut self, board: &Board, chess_move: ChessMove) {
        let is_pawn_move = board.piece_on(chess_move.get_source()) == Some(Piece::Pawn);
        let is_capture = board.piece_on(chess_move.get_dest()).is_some();
        if is_pawn_move || is_capture {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if board.side_to_move() == chess::Color::Black {
            self.fullmove_number += 1;
        }
    }
}

impl PositionOracle for ChessOracle {
    fn side_to_move(&self) -> Side {
        self.game.side_to_move().into()
    }

    fn apply_if_legal(&mut self, request: &MoveRequest) -> Result<(), MoveError> {
        let chess_move = self.parse_move(request)?;
        let before = self.board();

        if !before.legal(chess_move) {
            return Err(MoveError::Illegal {
                from: request.from.clone(),
                to: request.to.clone(),
            });
        }

        if !self.game.make_move(chess_move) {
            return Err(MoveError::Oracle(format!(
                "legal move {} refused by the game record",
                chess_move
            )));
        }

        self.advance_counters(&before, chess_move);
        debug!("Applied {}, position now {}", chess_move, self.fen());
        Ok(())
    }

    fn status(&self) -> PositionStatus {
        let board = self.board();
        match board.status() {
            BoardStatus::Checkmate => return PositionStatus::Checkmate,
            BoardStatus::Stalemate => return PositionStatus::Stalemate,
            BoardStatus::Ongoing => {}
        }

        if has_insufficient_material(&board) {
            PositionStatus::Draw(DrawKind::InsufficientMaterial)
        } else if self.halfmove_clock >= 100 {
            PositionStatus::Draw(DrawKind::FiftyMoveRule)
        } else if self.game.can_declare_draw() {
            PositionStatus::Draw(DrawKind::Repetition)
        } else if board.checkers().popcnt() > 0 {
            PositionStatus::Check
        } else {
            PositionStatus::Ongoing
        }
    }

    fn fen(&self) -> String {
        let placement = self.board().to_string();
        let fields: Vec<&str> = placement.split_whitespace().take(4).collect();
        format!(
            "{} {} {}",
            fields.join(" "),
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    fn reset(&mut self) {
        *self = ChessOracle::new();
    }
}

/// `Square::from_str` only looks at the first two characters, so the parsed
/// square has to print back as the whole input.
fn parse_square(text: &str) -> Result<Square, MoveError> {
    let normalized = text.trim().to_lowercase();
    Square::from_str(&normalized)
        .ok()
        .filter(|square| square.to_string() == normalized)
        .ok_or_else(|| MoveError::Malformed(format!("invalid square {:?}", text)))
}

fn parse_promotion(letter: &str) -> Result<Piece, MoveError> {
    match letter.trim().to_lowercase().as_str() {
        "q" => Ok(Piece::Queen),
        "r" => Ok(Piece::Rook),
        "b" => Ok(Piece::Bishop),
        "n" => Ok(Piece::Knight),
        _ => Err(MoveError::Malformed(format!(
            "invalid promotion piece {:?}",
            letter
        ))),
    }
}

fn is_promotion_square(board: &Board, from: Square, to: Square) -> bool {
    board.piece_on(from) == Some(Piece::Pawn)
        && matches!(to.get_rank(), Rank::First | Rank::Eighth)
}
