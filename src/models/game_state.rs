use serde::Serialize;

use crate::models::seat::Side;

/// Why a drawn game ended without stalemate.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DrawKind {
    InsufficientMaterial,
    FiftyMoveRule,
    Repetition,
}

impl DrawKind {
    pub fn describe(self) -> &'static str {
        match self {
            DrawKind::InsufficientMaterial => "insufficient material",
            DrawKind::FiftyMoveRule => "the fifty-move rule",
            DrawKind::Repetition => "threefold repetition",
        }
    }
}

/// What the rules engine says about the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionStatus {
    Ongoing,
    /// Not terminal; the side to move is in check.
    Check,
    /// The side to move has been mated.
    Checkmate,
    Stalemate,
    Draw(DrawKind),
}

impl PositionStatus {
    pub fn is_game_over(self) -> bool {
        matches!(
            self,
            PositionStatus::Checkmate | PositionStatus::Stalemate | PositionStatus::Draw(_)
        )
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Checkmate { winner: Side },
    Stalemate,
    Draw(DrawKind),
}

impl Termination {
    pub fn winner(self) -> Option<Side> {
        match self {
            Termination::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }
}

/// Lifecycle of the single game table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Ongoing,
    Terminated(Termination),
}

impl TableStatus {
    pub fn label(self) -> &'static str {
        match self {
            TableStatus::Ongoing => "ongoing",
            TableStatus::Terminated(Termination::Checkmate { .. }) => "checkmate",
            TableStatus::Terminated(Termination::Stalemate) => "stalemate",
            TableStatus::Terminated(Termination::Draw(_)) => "draw",
        }
    }
}

/// Read-only view of the table served by `/status`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TableSnapshot {
    pub white_seated: bool,
    pub black_seated: bool,
    pub observers: usize,
    pub fen: String,
    pub turn: Side,
    pub status: &'static str,
    pub winner: Option<Side>,
}
