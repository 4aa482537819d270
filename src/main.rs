use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;
use anyhow::Result;

mod calendar;
mod config;
mod error;
mod guidance;
mod guides;
mod models;
mod phase;
mod routes;
mod stats;
mod store;

use config::Config;
use routes::{AppState, Clock};
use store::UserDataStore;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let store = UserDataStore::connect(&config.database_url).await?;
    tracing::info!("🗄️ Storage ready at {}", config.database_url);

    let app = routes::app(AppState {
        store,
        scheme: config.phase_scheme,
        clock: Clock::System,
    });

    tracing::info!("🌙 Server running at {} ({:?} phases)", config.bind_addr, config.phase_scheme);

    axum::serve(
        tokio::net::TcpListener::bind(config.bind_addr).await?,
        app.into_make_service(),
    )
    .await?;

    Ok(())
}
