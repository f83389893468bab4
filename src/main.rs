use prikup::{router, AppError, AppState, Config, TableService};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prikup=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Preferans table dealer");

    let config = Config::from_env().inspect_err(|e| error!(error = %e, "Bad configuration"))?;

    // Composition root: the store handle is created once and injected everywhere
    let store = config.build_store();
    let images = config.card_images();

    // First start deals a table; later starts keep the stored one
    match TableService::new(store.clone(), images.clone())
        .startup()
        .await?
    {
        Some(players) => info!(seat_count = players.len(), "Table ready"),
        None => warn!("Serving without a table until POST /deal replaces the stored one"),
    }

    let app = router(AppState::new(store, images));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .map_err(|e| AppError::Config(format!("Cannot bind {}: {}", config.bind_addr, e)))?;
    info!("Server running on http://{}", config.bind_addr);
    axum::serve(listener, app).await.map_err(|e| {
        error!(error = %e, "Server stopped");
        AppError::Internal
    })?;

    Ok(())
}
