use clap::{Args, Parser};
use std::path::PathBuf;

/// Command line configuration for the chess table server.
#[derive(Parser, Debug, Clone)]
#[command(name = "chess_table")]
#[command(about = "Two seats, any number of observers, one shared chess board")]
pub struct Config {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    /// Directory of static client files served at `/`
    #[arg(long)]
    pub static_dir: Option<PathBuf>,

    #[command(flatten)]
    pub table: TableConfig,
}

impl Config {
    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

/// Policy switches for the game table.
#[derive(Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableConfig {
    /// Only seated players may start a new game
    #[arg(long)]
    pub seated_reset_only: bool,

    /// Tell everyone when a player leaves their seat
    #[arg(long)]
    pub announce_vacated_seats: bool,
}
