use rand::Rng;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::types::TableResponse;
use crate::game::{self, CardImages, Deck, Player};
use crate::shared::AppError;
use crate::store::KeyValueStore;

/// Key under which the dealt seats are stored
pub const PLAYERS_KEY: &str = "players";

/// Service for dealing the table and reading back the persisted seats
pub struct TableService {
    store: Arc<dyn KeyValueStore + Send + Sync>,
    images: CardImages,
}

impl TableService {
    pub fn new(store: Arc<dyn KeyValueStore + Send + Sync>, images: CardImages) -> Self {
        Self { store, images }
    }

    /// Reads the persisted seats; an unset key is an empty table.
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<Vec<Player>, AppError> {
        let Some(raw) = self.store.get(PLAYERS_KEY).await? else {
            debug!("No table stored yet");
            return Ok(Vec::new());
        };

        let players: Vec<Player> = serde_json::from_str(&raw).map_err(|e| {
            warn!(error = %e, "Failed to decode stored table");
            AppError::CorruptState(e.to_string())
        })?;

        if !players.is_empty() {
            game::check_table(&players).map_err(|e| {
                warn!(error = %e, "Stored table is not a complete deal");
                AppError::CorruptState(e.to_string())
            })?;
        }

        debug!(seat_count = players.len(), "Loaded stored table");
        Ok(players)
    }

    /// Builds, shuffles and splits a fresh deck without touching storage.
    pub fn fresh_deal<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Player>, AppError> {
        let deck = Deck::shuffled(&self.images, rng);
        Ok(game::deal(deck)?.into())
    }

    /// Deals a new table with the thread RNG and replaces the stored seats.
    #[instrument(skip(self))]
    pub async fn deal(&self) -> Result<Vec<Player>, AppError> {
        let players = {
            let mut rng = rand::rng();
            self.fresh_deal(&mut rng)?
        };
        self.save(&players).await?;
        Ok(players)
    }

    /// Same as [`TableService::deal`] with a caller-supplied random source.
    #[instrument(skip(self, rng))]
    pub async fn deal_with_rng<R: Rng + Send + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<Player>, AppError> {
        let players = self.fresh_deal(rng)?;
        self.save(&players).await?;
        Ok(players)
    }

    /// Deals once if nothing is stored; otherwise returns the stored seats.
    #[instrument(skip(self))]
    pub async fn ensure_dealt(&self) -> Result<Vec<Player>, AppError> {
        let players = self.load().await?;
        if players.is_empty() {
            info!("Table is empty, dealing initial hands");
            return self.deal().await;
        }

        debug!("Reusing stored table");
        Ok(players)
    }

    /// Startup variant of [`TableService::ensure_dealt`]. A corrupt stored table
    /// is left untouched and reported as `None` so the server can still start;
    /// `POST /deal` replaces it. Storage failures are still returned.
    #[instrument(skip(self))]
    pub async fn startup(&self) -> Result<Option<Vec<Player>>, AppError> {
        match self.ensure_dealt().await {
            Ok(players) => Ok(Some(players)),
            Err(AppError::CorruptState(reason)) => {
                warn!(reason = %reason, "Stored table is corrupt, waiting for a redeal");
                Ok(None)
            }
            Err(error) => Err(error),
        }
    }

    /// Loads the stored seats and groups each hand for display.
    #[instrument(skip(self))]
    pub async fn table(&self) -> Result<TableResponse, AppError> {
        let players = self.load().await?;
        Ok(TableResponse::from_players(&players))
    }

    async fn save(&self, players: &[Player]) -> Result<(), AppError> {
        let raw = serde_json::to_string(players).map_err(|e| {
            warn!(error = %e, "Failed to encode table");
            AppError::Internal
        })?;

        match self.store.set(PLAYERS_KEY, raw).await {
            Ok(()) => {
                let widow: Vec<String> = players
                    .iter()
                    .filter(|p| p.is_widow())
                    .flat_map(|p| p.cards.iter().map(|c| c.to_string()))
                    .collect();
                info!(
                    seat_count = players.len(),
                    widow = %widow.join(" "),
                    "Dealt and stored new table"
                );
                Ok(())
            }
            Err(error) => {
                warn!("Storing new table failed: {:?}", error);
                Err(error)
            }
        }
    }
}
