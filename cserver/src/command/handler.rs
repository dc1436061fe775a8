use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use super::{
    model::{Commands, NewCommand},
    service::CommandService,
};
use crate::db::AppState;

/// Stored channel identifiers carry the IRC-style `#` prefix; route
/// parameters arrive bare.
fn stored_channel(channel: &str) -> String {
    format!("#{channel}")
}

pub async fn list(
    State(state): State<Arc<AppState>>,
    Path(channel): Path<String>,
) -> impl IntoResponse {
    let service = CommandService::new(state.db.clone());
    match service.list_for_channel(&stored_channel(&channel)).await {
        Ok(commands) => (StatusCode::OK, Json(Commands { commands })),
        Err(e) => {
            tracing::error!("Database error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Commands { commands: vec![] }),
            )
        }
    }
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    Path(channel): Path<String>,
    Json(cmd): Json<NewCommand>,
) -> impl IntoResponse {
    let service = CommandService::new(state.db.clone());
    match service.upsert(&stored_channel(&channel), cmd).await {
        Ok(command) => (StatusCode::OK, Json(command)).into_response(),
        Err(e) => {
            tracing::error!("Database error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Path((channel, name)): Path<(String, String)>,
) -> impl IntoResponse {
    let service = CommandService::new(state.db.clone());
    match service.get(&stored_channel(&channel), &name).await {
        Ok(Some(command)) => (StatusCode::OK, Json(command)).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            tracing::error!("Database error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn remove(
    State(state): State<Arc<AppState>>,
    Path((channel, name)): Path<(String, String)>,
) -> impl IntoResponse {
    let service = CommandService::new(state.db.clone());
    match service.remove(&stored_channel(&channel), &name).await {
        Ok(true) => (StatusCode::OK, "OK\n").into_response(),
        Ok(false) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            tracing::error!("Database error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
