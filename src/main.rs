use anyhow::Context;

mod app;
mod config;
mod db;
mod error;
mod state;
mod users;

use crate::config::AppConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().context("Error loading .env file")?;

    let config = AppConfig::from_env();

    if config.json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(config.log_filter.as_str())
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(config.log_filter.as_str())
            .init();
    }

    tracing::debug!(db = ?config.db, "configuration loaded");

    let app_state = AppState::init(&config);
    let app = app::build_app(app_state);
    app::serve(app, &config).await
}
