pub mod coordinator;
pub mod registry;
pub mod server;

pub use coordinator::{Outgoing, Table};
pub use registry::SeatRegistry;
pub use server::{Command, Connect, Disconnect, Snapshot, TableServer};
