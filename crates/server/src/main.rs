mod config;
mod doc;
mod dtos;
mod error;
mod routes;
mod state;
mod utils;

use crate::{config::Config, state::AppState, utils::shutdown::shutdown_signal};
use anyhow::Context;
use database::{db::connect, services::RequisiteService};
use log::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = Config::from_env()?;

    let db = connect(&config.database_url)
        .await
        .context("Failed to connect to the database")?;
    let catalog = RequisiteService::load_catalog(&db, config.tolerate_malformed).await?;

    let stored_edges = RequisiteService::count_edges(&db).await?;
    if stored_edges != catalog.edge_count() as u64 {
        warn!(
            "Stored edge table has {} edges but the expressions imply {}; rerun the load",
            stored_edges,
            catalog.edge_count()
        );
    }
    db.close().await?;

    let app = routes::router(AppState::new(catalog, config.request_timeout));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("Running axum on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
