// Library crate for the Preferans table dealer
// This file exposes the public API for integration tests

pub mod config;
pub mod game;
pub mod shared;
pub mod store;
pub mod table;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

// Re-export commonly used types for easier access in tests
pub use config::Config;
pub use game::{Card, Deck, Player, Position, Rank, Suit, SuitGroup};
pub use shared::{AppError, AppState};
pub use store::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore};
pub use table::{TableResponse, TableService};

/// Builds the HTTP router over the given application state
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(table::health))
        .route("/table", get(table::get_table))
        .route("/deal", post(table::deal_table))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
