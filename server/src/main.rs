//! devlog server: reads configuration, connects the pool, serves the API.
//!
//! Run from repo root: `cargo run -p devlog-server`

use devlog_api::{app, from_env, AppState};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("devlog_api=info,devlog_server=info,tower_http=info")
            }),
        )
        .init();

    let config = from_env()?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_with(config.database.connect_options()?)
        .await?;
    let state = AppState::new(pool);

    let router = app(state, config.server.body_limit);
    let listener = TcpListener::bind(config.server.bind_addr()).await?;
    tracing::info!("Server running on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
