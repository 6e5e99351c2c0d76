pub mod oracle;
pub mod utils;

pub use oracle::{ChessOracle, PositionOracle};
