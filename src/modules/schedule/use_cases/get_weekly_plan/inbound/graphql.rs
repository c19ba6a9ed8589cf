use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::schedule::core::grouping::{WeeklyGrouping, day_name};
use crate::modules::schedule::core::projector::ScheduleEvent;
use crate::modules::schedule::use_cases::list_available_weeks::inbound::graphql::{
    GqlIsoWeek, GqlLocale,
};
use crate::shared::core::iso_week::{IsoWeek, Locale};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlScheduleEvent {
    pub id: u64,
    pub time_label: String,
    pub title: String,
    pub tag_keys: Vec<String>,
    pub performer_id: u64,
    pub guest_ids: Vec<u64>,
    pub type_id: u32,
    pub host: String,
    pub guests: Vec<String>,
    pub type_label: String,
    pub start_time: String,
    pub end_time: Option<String>,
    pub status: u8,
}

impl From<ScheduleEvent> for GqlScheduleEvent {
    fn from(e: ScheduleEvent) -> Self {
        Self {
            id: e.id,
            time_label: e.time_label,
            title: e.title,
            tag_keys: e.tag_keys.iter().map(ToString::to_string).collect(),
            performer_id: e.performer_id,
            guest_ids: e.guest_ids,
            type_id: e.type_id,
            host: e.host,
            guests: e.guests,
            type_label: e.type_label,
            start_time: e.start_time,
            end_time: e.end_time,
            status: u8::from(e.status),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlDayPlan {
    pub day: String,
    pub events: Vec<GqlScheduleEvent>,
}

#[derive(SimpleObject, Clone)]
pub struct GqlWeeklyPlan {
    pub week: GqlIsoWeek,
    pub days: Vec<GqlDayPlan>,
}

impl GqlWeeklyPlan {
    fn new(week: IsoWeek, plan: &WeeklyGrouping, locale: Locale) -> Self {
        Self {
            week: GqlIsoWeek::new(week, locale),
            days: plan
                .iter()
                .map(|(day, events)| GqlDayPlan {
                    day: day_name(day).to_string(),
                    events: events.iter().cloned().map(Into::into).collect(),
                })
                .collect(),
        }
    }
}

#[derive(Default)]
pub struct WeeklyPlanQuery;

#[Object]
impl WeeklyPlanQuery {
    async fn weekly_plan(
        &self,
        context: &Context<'_>,
        year: i32,
        week: u32,
        locale: Option<GqlLocale>,
    ) -> GqlResult<GqlWeeklyPlan> {
        let state = context.data_unchecked::<AppState>();
        let iso_week =
            IsoWeek::new(year, week).map_err(|e| async_graphql::Error::new(e.to_string()))?;
        let plan = state
            .weekly_plan_handler
            .handle(iso_week)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(GqlWeeklyPlan::new(
            iso_week,
            &plan,
            Locale::from(locale.unwrap_or_default()),
        ))
    }
}
