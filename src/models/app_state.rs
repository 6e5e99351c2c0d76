use actix::Addr;

use crate::table::TableServer;

/// Application state shared between HTTP handlers and websocket actors.
///
/// The table itself lives inside its actor; handlers only hold its address.
#[derive(Clone)]
pub struct AppState {
    pub table: Addr<TableServer>,
}
