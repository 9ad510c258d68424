//! BizTime server: loads config from the environment, prepares the database, serves the API.

use axum::{extract::Request, ServiceExt};
use biztime::{app, ensure_database_exists, ensure_schema, AppConfig, AppState, PgStore};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    ensure_database_exists(&config.database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await?;
    if config.init_schema {
        ensure_schema(&pool).await?;
    }

    let state = AppState::new(PgStore::new(pool));
    let router = app(state, config.body_limit_bytes);

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, ServiceExt::<Request>::into_make_service(router)).await?;
    Ok(())
}
