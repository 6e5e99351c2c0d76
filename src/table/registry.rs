use std::collections::HashSet;

use crate::models::{ConnectionId, Role, Side};

/// Who sits where. At most one connection per seat, and a connection holds
/// at most one seat; everyone else is an observer.
#[derive(Debug, Default)]
pub struct SeatRegistry {
    white: Option<ConnectionId>,
    black: Option<ConnectionId>,
    observers: HashSet<ConnectionId>,
}

impl SeatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat a new connection, White before Black, or record it as an
    /// observer when both seats are taken. Re-assigning a known connection
    /// returns its current role.
    pub fn assign(&mut self, id: ConnectionId) -> Role {
        let current = self.seat_of(id);
        if current.is_seated() || self.observers.contains(&id) {
            return current;
        }

        if self.white.is_none() {
            self.white = Some(id);
            Role::White
        } else if self.black.is_none() {
            self.black = Some(id);
            Role::Black
        } else {
            self.observers.insert(id);
            Role::Observer
        }
    }

    /// Forget a connection. Returns the seat it vacated, if it held one.
    pub fn release(&mut self, id: ConnectionId) -> Option<Side> {
        if self.white == Some(id) {
            self.white = None;
            Some(Side::White)
        } else if self.black == Some(id) {
            self.black = None;
            Some(Side::Black)
        } else {
            self.observers.remove(&id);
            None
        }
    }

    pub fn seat_of(&self, id: ConnectionId) -> Role {
        if self.white == Some(id) {
            Role::White
        } else if self.black == Some(id) {
            Role::Black
        } else {
            Role::Observer
        }
    }

    pub fn occupant(&self, side: Side) -> Option<ConnectionId> {
        match side {
            Side::White => self.white,
            Side::Black => self.black,
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}
