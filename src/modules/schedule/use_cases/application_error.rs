use crate::modules::schedule::adapters::outbound::schedule_api::ApiError;
use crate::shared::core::iso_week::IsoWeekError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    InvalidWeek(#[from] IsoWeekError),
}
