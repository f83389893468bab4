use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{service::TableService, types::TableResponse};
use crate::shared::{AppError, AppState};

/// HTTP handler for reading the current table
///
/// GET /table
/// Returns every seat with its hand grouped by suit
#[instrument(name = "get_table", skip(state))]
pub async fn get_table(State(state): State<AppState>) -> Result<Json<TableResponse>, AppError> {
    // Use injected store from app state
    let service = TableService::new(Arc::clone(&state.store), state.images.clone());
    let table = service.table().await?;

    info!(seat_count = table.players.len(), "Table rendered");

    Ok(Json(table))
}

/// HTTP handler for shuffling and dealing a new table
///
/// POST /deal
/// Replaces the stored seats and returns the new table
#[instrument(name = "deal_table", skip(state))]
pub async fn deal_table(State(state): State<AppState>) -> Result<Json<TableResponse>, AppError> {
    info!("Redealing table");

    let service = TableService::new(Arc::clone(&state.store), state.images.clone());
    let players = service.deal().await?;

    Ok(Json(TableResponse::from_players(&players)))
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}
