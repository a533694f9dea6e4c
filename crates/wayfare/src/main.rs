//! wayfare daemon
//!
//! Travel listing platform server: axum HTTP API backed by Postgres, with
//! OpenAPI documentation and session/basic authentication.

use std::sync::Arc;

use color_eyre::Result;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wayfare::config::Config;
use wayfare::router::create_router;
use wayfare::state::AppState;
use wayfare_store::ListingStore;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,wayfare=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load_default()?;

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!("database connected");

    wayfare_store::MIGRATOR.run(&pool).await?;
    tracing::info!("migrations complete");

    if config.auth.users.is_empty() {
        tracing::warn!("no API users configured; every /api/v1 request will be rejected");
    }

    let bind = config.server.bind.clone();
    let state = Arc::new(AppState::new(ListingStore::new(pool), config));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!(%bind, "listening");
    tracing::info!("API docs: http://{bind}/api/docs");
    axum::serve(listener, app).await?;

    Ok(())
}
