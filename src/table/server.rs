use actix::prelude::*;
use log::{debug, info, warn};
use std::collections::HashMap;

use crate::config::TableConfig;
use crate::models::{ChessWebSocketMessage, ClientMessage, ConnectionId, ServerMessage, TableSnapshot};
use crate::table::coordinator::{Outgoing, Table};

/// Actor that owns the table. Its mailbox is the one queue every connect,
/// disconnect and command goes through, so they never interleave.
pub struct TableServer {
    table: Table,
    sessions: HashMap<ConnectionId, Recipient<ChessWebSocketMessage>>,
}

impl TableServer {
    pub fn new(config: TableConfig) -> Self {
        TableServer {
            table: Table::with_config(config),
            sessions: HashMap::new(),
        }
    }

    fn deliver(&self, outgoing: Vec<Outgoing>) {
        for item in outgoing {
            match item {
                Outgoing::Private(id, message) => {
                    if let Some(frame) = encode(&message) {
                        self.send_to(id, frame);
                    }
                }
                Outgoing::Broadcast(message) => {
                    if let Some(frame) = encode(&message) {
                        self.broadcast(frame);
                    }
                }
            }
        }
    }

    fn send_to(&self, id: ConnectionId, frame: String) {
        match self.sessions.get(&id) {
            Some(recipient) if recipient.connected() => {
                recipient.do_send(ChessWebSocketMessage(frame));
            }
            _ => warn!("Connection {} is gone, dropping frame", id),
        }
    }

    /// Push a frame into every session's mailbox. Sends never wait on the
    /// recipient, so one stalled socket cannot hold up the rest.
    fn broadcast(&self, frame: String) {
        debug!("Broadcasting to {} connections: {}", self.sessions.len(), frame);
        for (id, recipient) in &self.sessions {
            if recipient.connected() {
                recipient.do_send(ChessWebSocketMessage(frame.clone()));
            } else {
                debug!("Skipping closed connection {}", id);
            }
        }
    }
}

fn encode(message: &ServerMessage) -> Option<String> {
    match message.to_json() {
        Ok(frame) => Some(frame),
        Err(e) => {
            warn!("Error serializing message {:?}: {}", message, e);
            None
        }
    }
}

impl Actor for TableServer {
    type Context = Context<Self>;

    fn started(&mut self, _: &mut Self::Context) {
        info!("Game table open");
    }
}

/// A socket opened. `addr` receives every frame meant for it.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Connect {
    pub id: ConnectionId,
    pub addr: Recipient<ChessWebSocketMessage>,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct Disconnect {
    pub id: ConnectionId,
}

/// A parsed client frame.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Command {
    pub id: ConnectionId,
    pub command: ClientMessage,
}

#[derive(Message)]
#[rtype(result = "TableSnapshot")]
pub struct Snapshot;

impl Handler<Connect> for TableServer {
    type Result = ();

    fn handle(&mut self, msg: Connect, _: &mut Self::Context) {
        self.sessions.insert(msg.id, msg.addr);
        info!("Total active sessions: {}", self.sessions.len());
        let outgoing = self.table.handle_connect(msg.id);
        self.deliver(outgoing);
    }
}

impl Handler<Disconnect> for TableServer {
    type Result = ();

    fn handle(&mut self, msg: Disconnect, _: &mut Self::Context) {
        self.sessions.remove(&msg.id);
        info!("Total active sessions: {}", self.sessions.len());
        let outgoing = self.table.handle_disconnect(msg.id);
        self.deliver(outgoing);
    }
}

impl Handler<Command> for TableServer {
    type Result = ();

    fn handle(&mut self, msg: Command, _: &mut Self::Context) {
        let outgoing = self.table.handle_command(msg.id, msg.command);
        self.deliver(outgoing);
    }
}

impl Handler<Snapshot> for TableServer {
    type Result = MessageResult<Snapshot>;

    fn handle(&mut self, _: Snapshot, _: &mut Self::Context) -> Self::Result {
        MessageResult(self.table.snapshot())
    }
}
