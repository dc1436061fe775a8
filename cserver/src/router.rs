use axum::{routing::get, Router};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::channel::handler as channel;
use crate::command::handler as command;
use crate::db::AppState;

pub fn create_router(db: SqlitePool) -> Router {
    let state = Arc::new(AppState { db });

    Router::new()
        .route("/api/v1/ping", get(ping))
        // Channel index
        .route("/api/v1/channels", get(channel::list))
        // Command routes; the bare and `.json` spellings serve the same
        // handlers, so development and deployed clients hit one code path
        .route(
            "/api/v1/channel/:channel/commands",
            get(command::list).post(command::create),
        )
        .route(
            "/api/v1/channel/:channel/commands.json",
            get(command::list).post(command::create),
        )
        .route(
            "/api/v1/channel/:channel/command/:name",
            get(command::get).delete(command::remove),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn ping() -> &'static str {
    "pong"
}
