use thiserror::Error;

use crate::models::{Role, Side};

/// Why a move request was turned away. None of these are fatal: the
/// requester gets a private rejection and the table is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("the game is already over")]
    GameOver,

    #[error("{role:?} may not move while {turn} is to move")]
    Unauthorized { role: Role, turn: Side },

    #[error("malformed move: {0}")]
    Malformed(String),

    #[error("illegal move {from}-{to}")]
    Illegal { from: String, to: String },

    #[error("rules engine fault: {0}")]
    Oracle(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResetError {
    #[error("only seated players may start a new game")]
    NotSeated,
}
