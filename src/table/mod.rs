// Public API - what other modules can use
pub use handlers::{deal_table, get_table, health};
pub use service::{TableService, PLAYERS_KEY};
pub use types::{SeatView, SuitGroupView, TableResponse};

// Internal modules
mod handlers;
mod service;
mod types;
