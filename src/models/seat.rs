use chess::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity of one live socket. Fresh for every connection, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    pub fn new() -> Self {
        ConnectionId(Uuid::new_v4())
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// One of the two sides of the board. Also names the seat that plays it:
/// White is the first seat, Black the second.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    #[serde(rename = "w")]
    White,
    #[serde(rename = "b")]
    Black,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::White => "White",
            Side::Black => "Black",
        }
    }
}

impl From<Color> for Side {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Side::White,
            Color::Black => Side::Black,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a connection is allowed to do at the table.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "w")]
    White,
    #[serde(rename = "b")]
    Black,
    #[serde(rename = "observer")]
    Observer,
}

impl Role {
    /// The side this role plays, or `None` for observers.
    pub fn seat(self) -> Option<Side> {
        match self {
            Role::White => Some(Side::White),
            Role::Black => Some(Side::Black),
            Role::Observer => None,
        }
    }

    pub fn is_seated(self) -> bool {
        self.seat().is_some()
    }
}

impl From<Side> for Role {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Role::White,
            Side::Black => Role::Black,
        }
    }
}
