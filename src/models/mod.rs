pub mod app_state;
pub mod game_state;
pub mod messages;
pub mod seat;

// Re-export important types
pub use app_state::*;
pub use game_state::*;
pub use messages::*;
pub use seat::*;
