use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    state.reload_handler.handle().await;
    StatusCode::NO_CONTENT
}
