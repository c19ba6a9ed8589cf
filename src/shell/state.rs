use crate::modules::schedule::adapters::outbound::metadata_store::MetadataStore;
use crate::modules::schedule::adapters::outbound::schedule_api::ScheduleApi;
use crate::modules::schedule::use_cases::get_tag_catalog::handler::GetTagCatalogHandler;
use crate::modules::schedule::use_cases::get_weekly_plan::handler::GetWeeklyPlanHandler;
use crate::modules::schedule::use_cases::list_available_weeks::handler::ListAvailableWeeksHandler;
use crate::modules::schedule::use_cases::reload_metadata::handler::ReloadMetadataHandler;
use crate::shared::core::iso_week::IsoWeek;
use chrono::Local;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub list_weeks_handler: Arc<ListAvailableWeeksHandler<Local>>,
    pub weekly_plan_handler: Arc<GetWeeklyPlanHandler<Local>>,
    pub tag_catalog_handler: Arc<GetTagCatalogHandler>,
    pub reload_handler: Arc<ReloadMetadataHandler>,
}

impl AppState {
    /// Wires every handler to one API and one shared set of metadata caches.
    pub fn new(api: Arc<dyn ScheduleApi>, extra_weeks: Vec<IsoWeek>) -> Self {
        let metadata = Arc::new(MetadataStore::new(api.clone()));
        Self {
            list_weeks_handler: Arc::new(ListAvailableWeeksHandler::new(
                api.clone(),
                extra_weeks,
                Local,
            )),
            weekly_plan_handler: Arc::new(GetWeeklyPlanHandler::new(
                api,
                metadata.clone(),
                Local,
            )),
            tag_catalog_handler: Arc::new(GetTagCatalogHandler::new(metadata.clone())),
            reload_handler: Arc::new(ReloadMetadataHandler::new(metadata)),
        }
    }
}
