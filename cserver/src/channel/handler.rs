use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

use super::{model::Channels, service::ChannelService};
use crate::db::AppState;

pub async fn list(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let service = ChannelService::new(state.db.clone());
    match service.list().await {
        Ok(channels) => (StatusCode::OK, Json(Channels { channels })),
        Err(e) => {
            tracing::error!("Database error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Channels { channels: vec![] }),
            )
        }
    }
}
