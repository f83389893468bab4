use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::game::{CardImages, DealError};
use crate::store::KeyValueStore;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn KeyValueStore + Send + Sync>,
    pub images: CardImages,
}

impl AppState {
    pub fn new(store: Arc<dyn KeyValueStore + Send + Sync>, images: CardImages) -> Self {
        Self { store, images }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Stored table is corrupt: {0}")]
    CorruptState(String),

    #[error("Deal failed: {0}")]
    Deal(#[from] DealError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Storage(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Storage error: {}", msg),
            ),
            AppError::CorruptState(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Stored table is corrupt: {}", msg),
            ),
            AppError::Deal(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            AppError::Config(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}
