use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::game::{CardImages, DEFAULT_IMAGE_BASE};
use crate::shared::AppError;
use crate::store::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Runtime configuration read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// Directory for the file store; `None` keeps the table in memory
    pub store_dir: Option<PathBuf>,
    pub card_image_base: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr =
            lookup("PRIKUP_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse()
            .map_err(|_| AppError::Config(format!("Invalid PRIKUP_BIND_ADDR: {raw_addr}")))?;

        let store_dir = lookup("PRIKUP_STORE_DIR")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let card_image_base = lookup("PRIKUP_CARD_IMAGE_BASE")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_IMAGE_BASE.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            bind_addr,
            store_dir,
            card_image_base,
        })
    }

    pub fn card_images(&self) -> CardImages {
        CardImages::new(self.card_image_base.clone())
    }

    pub fn build_store(&self) -> Arc<dyn KeyValueStore + Send + Sync> {
        match &self.store_dir {
            Some(dir) => {
                info!(dir = %dir.display(), "Using file store");
                Arc::new(FileKeyValueStore::new(dir.clone()))
            }
            None => {
                info!("Using in-memory store");
                Arc::new(InMemoryKeyValueStore::new())
            }
        }
    }
}
