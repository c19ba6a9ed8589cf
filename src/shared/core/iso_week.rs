// ISO-8601 week identifiers.
//
// Purpose
// - Name a calendar week as (iso year, week number) and convert between that name and dates.
//
// Responsibilities
// - Weeks start on Monday, week 1 is the week holding the year's first Thursday.
// - The ISO year of a date can differ from its calendar year in the last days of
//   December and the first days of January.
// - Provide the canonical "{year}-{week:02}" key used for maps and merging.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IsoWeekError {
    #[error("week {week} is out of range for {year} (1..={max})")]
    WeekOutOfRange {
        year: i32,
        week: u32,
        max: u32,
    },

    #[error("year {0} is outside the supported calendar range")]
    YearOutOfRange(i32),

    #[error("malformed week key: {0:?}")]
    MalformedKey(String),
}

/// Display language for week labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

/// An ISO-8601 week. Field order gives the lexicographic `(year, week)` ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawIsoWeek")]
pub struct IsoWeek {
    year: i32,
    week: u32,
}

#[derive(Deserialize)]
struct RawIsoWeek {
    year: i32,
    week: u32,
}

impl TryFrom<RawIsoWeek> for IsoWeek {
    type Error = IsoWeekError;

    fn try_from(raw: RawIsoWeek) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.week)
    }
}

impl IsoWeek {
    /// Rejects week numbers the year does not have, and weeks whose Monday or Sunday
    /// falls outside chrono's calendar.
    pub fn new(year: i32, week: u32) -> Result<Self, IsoWeekError> {
        let max = weeks_in_year(year).ok_or(IsoWeekError::YearOutOfRange(year))?;
        if week == 0 || week > max {
            return Err(IsoWeekError::WeekOutOfRange { year, week, max });
        }
        checked_week_start(year, week)
            .and_then(|monday| monday.checked_add_days(Days::new(6)))
            .ok_or(IsoWeekError::YearOutOfRange(year))?;
        Ok(Self { year, week })
    }

    /// The week a calendar date belongs to.
    ///
    /// The date is moved to the Thursday of its week; that Thursday's calendar year is
    /// the ISO year. Week 1's Thursday always falls within the first seven days of the
    /// year, so the distance between the two Thursdays reduces to the target Thursday's
    /// ordinal.
    ///
    /// Dates within a week of `NaiveDate::MIN` or `NaiveDate::MAX` are not supported.
    pub fn of(date: NaiveDate) -> Self {
        let from_monday = u64::from(date.weekday().num_days_from_monday());
        let thursday = date - Days::new(from_monday) + Days::new(3);
        let week = 1 + (thursday.ordinal() - 1) / 7;
        Self {
            year: thursday.year(),
            week,
        }
    }

    fn checked_of(date: NaiveDate) -> Option<Self> {
        let from_monday = u64::from(date.weekday().num_days_from_monday());
        let thursday = date
            .checked_sub_days(Days::new(from_monday))?
            .checked_add_days(Days::new(3))?;
        Some(Self {
            year: thursday.year(),
            week: 1 + (thursday.ordinal() - 1) / 7,
        })
    }

    /// The week of an instant, read on the instant's own local calendar.
    pub fn of_instant<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        Self::of(instant.date_naive())
    }

    /// The week containing `now`, read on `tz`'s calendar.
    pub fn current<Tz: TimeZone>(now: DateTime<chrono::Utc>, tz: &Tz) -> Self {
        Self::of_instant(&now.with_timezone(tz))
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn week(self) -> u32 {
        self.week
    }

    /// Monday of this week.
    pub fn week_start_date(self) -> NaiveDate {
        // new() only admits weeks whose Monday and Sunday are representable
        checked_week_start(self.year, self.week).unwrap_or_default()
    }

    /// Monday of this week at local midnight. `None` when midnight does not exist in `tz`.
    pub fn start_in<Tz: TimeZone>(self, tz: &Tz) -> Option<DateTime<Tz>> {
        tz.from_local_datetime(&self.week_start_date().and_time(NaiveTime::MIN))
            .earliest()
    }

    /// Sunday of this week.
    pub fn week_end_date(self) -> NaiveDate {
        self.week_start_date() + Days::new(6)
    }

    /// `None` at the edge of chrono's calendar.
    pub fn previous(self) -> Option<Self> {
        Self::checked_of(self.week_start_date().checked_sub_days(Days::new(7))?)
    }

    pub fn next(self) -> Option<Self> {
        Self::checked_of(self.week_start_date().checked_add_days(Days::new(7))?)
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        Self::of(date) == self
    }

    pub fn compare(a: &Self, b: &Self) -> std::cmp::Ordering {
        a.cmp(b)
    }

    /// Canonical map key, e.g. `2026-04`.
    pub fn key(self) -> String {
        format!("{}-{:02}", self.year, self.week)
    }

    pub fn format(self, locale: Locale) -> String {
        match locale {
            Locale::En => format!("Week {}, {}", self.week, self.year),
            Locale::Zh => format!("{}年第{}周", self.year, self.week),
        }
    }

    /// Monday to Sunday label, e.g. `Jan 19 - Jan 25, 2026`.
    pub fn range_label(self, locale: Locale) -> String {
        let start = self.week_start_date();
        let end = self.week_end_date();
        match locale {
            Locale::En => format!(
                "{} - {}",
                start.format("%b %-d"),
                end.format("%b %-d, %Y")
            ),
            Locale::Zh => format!(
                "{}月{}日 - {}年{}月{}日",
                start.month(),
                start.day(),
                end.year(),
                end.month(),
                end.day()
            ),
        }
    }
}

/// 52 or 53. `None` for years chrono cannot represent.
pub fn weeks_in_year(year: i32) -> Option<u32> {
    NaiveDate::from_ymd_opt(year, 12, 28)
        .and_then(IsoWeek::checked_of)
        .map(|dec28| dec28.week)
}

/// Monday of week 1 is the Monday on or before the 4th of January.
fn checked_week_start(year: i32, week: u32) -> Option<NaiveDate> {
    let jan4 = NaiveDate::from_ymd_opt(year, 1, 4)?;
    let from_monday = u64::from(jan4.weekday().num_days_from_monday());
    jan4
        .checked_sub_days(Days::new(from_monday))?
        .checked_add_days(Days::new(u64::from(week.saturating_sub(1)) * 7))
}

impl fmt::Display for IsoWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.week)
    }
}

impl FromStr for IsoWeek {
    type Err = IsoWeekError;

    /// Accepts `2026-04` and `2026-W04`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let malformed = || IsoWeekError::MalformedKey(raw.to_string());
        let trimmed = raw.trim();
        let (year, week) = trimmed.rsplit_once('-').ok_or_else(malformed)?;
        let week = week.strip_prefix(['W', 'w']).unwrap_or(week);
        let year = year.parse::<i32>().map_err(|_| malformed())?;
        let week = week.parse::<u32>().map_err(|_| malformed())?;
        Self::new(year, week)
    }
}
