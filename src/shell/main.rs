use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use live_schedule::modules::schedule::adapters::outbound::schedule_api::ScheduleApi;
use live_schedule::modules::schedule::adapters::outbound::schedule_api_http::HttpScheduleApi;
use live_schedule::modules::schedule::adapters::outbound::schedule_api_in_memory::InMemoryScheduleApi;
use live_schedule::shell::config::{ApiBackend, AppConfig};
use live_schedule::shell::http::router;
use live_schedule::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // a missing .env file is fine
    let _ = dotenvy::dotenv();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    let (api, mock_api): (Arc<dyn ScheduleApi>, Option<Arc<dyn ScheduleApi>>) =
        match &config.backend {
            ApiBackend::Mock => {
                let api: Arc<dyn ScheduleApi> =
                    Arc::new(InMemoryScheduleApi::bundled(chrono::Local)?);
                tracing::info!("serving the bundled mock schedule");
                (api.clone(), Some(api))
            }
            ApiBackend::Http { base_url } => {
                tracing::info!(base_url = %base_url, "using remote schedule api");
                (Arc::new(HttpScheduleApi::new(base_url.as_str())?), None)
            }
        };

    let app = router(AppState::new(api, config.extra_weeks.clone()), mock_api);

    tracing::info!("GraphQL endpoint: http://{}/gql", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
