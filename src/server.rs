//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, size configuration and the Axum
//! server lifecycle.

use crate::application::services::{
    AdRenderer, AdSelector, AdService, AuthService, CounterService, DeliveryService,
    ImageService, LocationService, SettingsService,
};
use crate::config::Config;
use crate::infrastructure::media::MediaUrls;
use crate::infrastructure::persistence::{
    PgAdRepository, PgImageRepository, PgLocationRepository, PgSettingsRepository,
    PgTokenRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Enabled ad sizes (read once; later changes need a restart)
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.pool.max_connections)
        .acquire_timeout(config.pool.connect_timeout)
        .idle_timeout(config.pool.idle_timeout)
        .max_lifetime(config.pool.max_lifetime)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let state = build_state(pool, &config).await?;
    tracing::info!(
        sizes = ?state.catalog.enabled_sizes(),
        "Enabled ad sizes loaded"
    );

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Wires repositories and services into the shared state.
pub async fn build_state(pool: PgPool, config: &Config) -> Result<AppState> {
    let pool = Arc::new(pool);

    let ad_repo = Arc::new(PgAdRepository::new(pool.clone()));
    let location_repo = Arc::new(PgLocationRepository::new(pool.clone()));
    let image_repo = Arc::new(PgImageRepository::new(pool.clone()));
    let settings_repo = Arc::new(PgSettingsRepository::new(pool.clone()));
    let token_repo = Arc::new(PgTokenRepository::new(pool));

    let catalog = Arc::new(
        SettingsService::new(settings_repo)
            .load_catalog()
            .await
            .context("Failed to load ad sizes")?,
    );

    let media = MediaUrls::new(config.media_base_url.clone());
    let location_service = Arc::new(LocationService::new(location_repo));
    let counter_service = Arc::new(CounterService::new(ad_repo.clone()));
    let delivery_service = Arc::new(DeliveryService::new(
        location_service.clone(),
        AdSelector::new(ad_repo.clone()),
        AdRenderer::new(image_repo.clone(), media.clone(), catalog.clone()),
        counter_service.clone(),
    ));

    Ok(AppState {
        delivery_service,
        counter_service,
        ad_service: Arc::new(AdService::new(ad_repo)),
        location_service,
        image_service: Arc::new(ImageService::new(image_repo, media, catalog.clone())),
        auth_service: Arc::new(AuthService::new(
            token_repo,
            config.token_signing_secret.clone(),
        )),
        catalog,
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
