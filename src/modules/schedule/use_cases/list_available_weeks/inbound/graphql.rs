use async_graphql::{Context, Enum, Object, Result as GqlResult, SimpleObject};

use crate::shared::core::iso_week::{IsoWeek, Locale};
use crate::shell::state::AppState;

#[derive(Enum, Copy, Clone, Default, Eq, PartialEq)]
pub enum GqlLocale {
    #[default]
    En,
    Zh,
}

impl From<GqlLocale> for Locale {
    fn from(locale: GqlLocale) -> Self {
        match locale {
            GqlLocale::En => Locale::En,
            GqlLocale::Zh => Locale::Zh,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlIsoWeek {
    pub year: i32,
    pub week: u32,
    pub key: String,
    pub label: String,
    pub range_label: String,
}

impl GqlIsoWeek {
    pub fn new(week: IsoWeek, locale: Locale) -> Self {
        Self {
            year: week.year(),
            week: week.week(),
            key: week.key(),
            label: week.format(locale),
            range_label: week.range_label(locale),
        }
    }
}

#[derive(Default)]
pub struct AvailableWeeksQuery;

#[Object]
impl AvailableWeeksQuery {
    async fn available_weeks(
        &self,
        context: &Context<'_>,
        locale: Option<GqlLocale>,
    ) -> GqlResult<Vec<GqlIsoWeek>> {
        let state = context.data_unchecked::<AppState>();
        let locale = Locale::from(locale.unwrap_or_default());
        let weeks = state
            .list_weeks_handler
            .handle()
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(weeks
            .into_iter()
            .map(|week| GqlIsoWeek::new(week, locale))
            .collect())
    }

    async fn current_week(&self, context: &Context<'_>, locale: Option<GqlLocale>) -> GqlIsoWeek {
        let state = context.data_unchecked::<AppState>();
        GqlIsoWeek::new(
            state.list_weeks_handler.current_week(),
            Locale::from(locale.unwrap_or_default()),
        )
    }
}
