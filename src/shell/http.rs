use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::schedule::adapters::inbound::mock_api_http;
use crate::modules::schedule::adapters::outbound::schedule_api::ScheduleApi;
use crate::modules::schedule::use_cases::get_tag_catalog::inbound::http as tags_http;
use crate::modules::schedule::use_cases::get_weekly_plan::inbound::http as weekly_plan_http;
use crate::modules::schedule::use_cases::list_available_weeks::inbound::http as weeks_http;
use crate::modules::schedule::use_cases::reload_metadata::inbound::http as reload_http;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

/// Schedule routes and GraphQL. `mock_api`, when given, is also served under /api/v1.
pub fn router(state: AppState, mock_api: Option<Arc<dyn ScheduleApi>>) -> Router {
    let schema = build_schema(state.clone());

    let mut app = Router::new()
        .route("/schedule/weeks", get(weeks_http::handle))
        .route("/schedule/weeks/{year}/{week}", get(weekly_plan_http::handle))
        .route("/schedule/tags", get(tags_http::handle))
        .route("/schedule/reload", post(reload_http::handle))
        .with_state(state)
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema));

    if let Some(api) = mock_api {
        app = app.merge(mock_api_http::router(api));
    }

    app.layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
