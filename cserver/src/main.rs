use std::env;
use std::path::Path;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod channel;
mod command;
mod config;
mod db;
mod router;

use config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Configuration comes from an optional TOML file passed as the first argument
    let config = match env::args().nth(1) {
        Some(path) => ServerConfig::from_path(Path::new(&path))?,
        None => ServerConfig::default(),
    };

    // Setup database
    let db = db::setup_database(&config.database).await?;

    // Run migrations
    sqlx::migrate!("./migrations").run(&db).await?;

    // Build our application with routes
    let app = router::create_router(db);

    // Run it
    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
