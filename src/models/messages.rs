use actix::Message;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::game_state::DrawKind;
use crate::models::seat::{Role, Side};

/// A move as the client sends it: algebraic squares plus an optional
/// promotion letter. Missing squares deserialize as empty strings, and
/// fields of the wrong JSON type are kept as their JSON text, so the request
/// still reaches the rules check and can be echoed back when it is rejected.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub from: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub to: String,
    #[serde(
        default,
        deserialize_with = "lenient_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub promotion: Option<String>,
}

fn value_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(value_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_optional_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(value_text(Value::deserialize(deserializer)?))
}

impl MoveRequest {
    pub fn new(from: &str, to: &str) -> Self {
        MoveRequest {
            from: from.to_string(),
            to: to.to_string(),
            promotion: None,
        }
    }

    pub fn with_promotion(mut self, piece: &str) -> Self {
        self.promotion = Some(piece.to_string());
        self
    }
}

/// Message sent from client to server
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientMessage {
    Move(MoveRequest),
    NewGame,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GameOverReason {
    Checkmate,
    Stalemate,
    Draw,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GameOverPayload {
    pub reason: GameOverReason,
    pub winner: Option<Side>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draw: Option<DrawKind>,
    pub message: String,
    pub celebration: bool,
}

/// Message sent from server to client
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerMessage {
    /// Private, once per connection: the assigned role and the live board.
    Role { role: Role, fen: String, turn: Side },
    /// The move that was just applied, exactly as requested.
    Move(MoveRequest),
    BoardState { fen: String },
    Turn { side: Side },
    Check { side: Side, message: String },
    GameOver(GameOverPayload),
    InvalidMove(MoveRequest),
    NewGame,
    SeatVacated { side: Side },
    Error { message: String },
}

impl ServerMessage {
    pub fn error(message: impl Into<String>) -> Self {
        ServerMessage::Error {
            message: message.into(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Serialized frame pushed to a websocket actor.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct ChessWebSocketMessage(pub String);
