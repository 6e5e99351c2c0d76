use actix::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use log::{info, warn};

use crate::models::{AppState, ChessWebSocketMessage, ClientMessage, ConnectionId, ServerMessage};
use crate::table::{Command, Connect, Disconnect, TableServer};

/// WebSocket actor for one connected party, seated or not.
///
/// It holds no game state of its own: inbound frames are parsed and handed
/// to the table actor, and whatever the table sends back is written to the
/// socket.
pub struct ChessWebSocket {
    pub id: ConnectionId,
    pub table: Addr<TableServer>,
}

impl ChessWebSocket {
    pub fn new(table: Addr<TableServer>) -> Self {
        ChessWebSocket {
            id: ConnectionId::new(),
            table,
        }
    }

    fn reply_error(&self, message: impl Into<String>, ctx: &mut ws::WebsocketContext<Self>) {
        match ServerMessage::error(message).to_json() {
            Ok(frame) => ctx.text(frame),
            Err(e) => warn!("Failed to serialize error for {}: {}", self.id, e),
        }
    }

    fn handle_text(&mut self, text: &str, ctx: &mut ws::WebsocketContext<Self>) {
        match serde_json::from_str::<ClientMessage>(text) {
            Ok(command) => {
                info!("Command from {}: {:?}", self.id, command);
                self.table.do_send(Command {
                    id: self.id,
                    command,
                });
            }
            Err(e) => {
                warn!("Error parsing client message from {}: {}", self.id, e);
                self.reply_error(format!("Invalid message format: {}", e), ctx);
            }
        }
    }
}

impl Actor for ChessWebSocket {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!("WebSocket connection started: {}", self.id);
        self.table.do_send(Connect {
            id: self.id,
            addr: ctx.address().recipient(),
        });
    }

    fn stopping(&mut self, _: &mut Self::Context) -> Running {
        info!("WebSocket connection closed: {}", self.id);
        self.table.do_send(Disconnect { id: self.id });
        Running::Stop
    }
}

impl Handler<ChessWebSocketMessage> for ChessWebSocket {
    type Result = ();

    fn handle(&mut self, msg: ChessWebSocketMessage, ctx: &mut Self::Context) {
        ctx.text(msg.0);
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for ChessWebSocket {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(msg)) => {
                ctx.pong(&msg);
            }
            Ok(ws::Message::Pong(_)) => {}
            Ok(ws::Message::Text(text)) => {
                self.handle_text(text.as_ref(), ctx);
            }
            Ok(ws::Message::Binary(_)) => {
                warn!("Binary messages are not supported");
                self.reply_error("Binary messages are not supported", ctx);
            }
            Ok(ws::Message::Close(reason)) => {
                info!("Connection {} closed: {:?}", self.id, reason);
                ctx.close(reason);
                ctx.stop();
            }
            Ok(ws::Message::Continuation(_)) | Ok(ws::Message::Nop) => {}
            Err(e) => {
                warn!("Protocol error on {}: {}", self.id, e);
                ctx.stop();
            }
        }
    }
}

/// WebSocket connection handler
pub async fn ws_index(
    req: HttpRequest,
    stream: web::Payload,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let socket = ChessWebSocket::new(app_state.table.clone());
    info!("New WebSocket connection: {}", socket.id);
    ws::start(socket, &req, stream)
}
