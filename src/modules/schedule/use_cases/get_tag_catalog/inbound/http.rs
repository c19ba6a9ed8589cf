use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.tag_catalog_handler.handle().await {
        Ok(catalog) => Json(catalog).into_response(),
        Err(error) => {
            tracing::warn!(%error, "tag catalog fetch failed");
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}
