// Weekly grouping of schedule records.
//
// Purpose
// - Turn a flat list of records into the seven day columns of one ISO week.
//
// Responsibilities
// - Drop records whose start time does not parse, silently.
// - Always produce all seven days, Monday first, even for an empty week.
// - Order each day by zero padded time label; equal labels keep input order.
// - Enumerate the weeks that have data, plus the current week and configured extras.

use crate::modules::schedule::core::projector::{EventProjector, ScheduleEvent};
use crate::modules::schedule::core::records::LiveRecord;
use crate::shared::core::iso_week::IsoWeek;
use crate::shared::core::timestamp::parse_instant;
use chrono::{DateTime, Datelike, TimeZone, Utc, Weekday};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeSet;

pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Seven day buckets, Monday first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyGrouping {
    days: [Vec<ScheduleEvent>; 7],
}

impl WeeklyGrouping {
    pub fn day(&self, day: Weekday) -> &[ScheduleEvent] {
        &self.days[day.num_days_from_monday() as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[ScheduleEvent])> {
        WEEKDAYS.iter().map(|&day| (day, self.day(day)))
    }

    pub fn len(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(Vec::is_empty)
    }

    fn push(&mut self, day: Weekday, event: ScheduleEvent) {
        self.days[day.num_days_from_monday() as usize].push(event);
    }

    fn sort(&mut self) {
        for events in &mut self.days {
            // stable: equal labels keep arrival order
            events.sort_by(|a, b| a.time_label.cmp(&b.time_label));
        }
    }
}

impl Serialize for WeeklyGrouping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(WEEKDAYS.len()))?;
        for (day, events) in self.iter() {
            map.serialize_entry(day_name(day), events)?;
        }
        map.end()
    }
}

pub fn group_by_day<'r, Tz, I>(records: I, projector: &EventProjector<'_, Tz>) -> WeeklyGrouping
where
    Tz: TimeZone,
    I: IntoIterator<Item = &'r LiveRecord>,
{
    let mut grouping = WeeklyGrouping::default();
    for record in records {
        let Some(start) = projector.start_of(record) else {
            tracing::debug!(
                record_id = record.id,
                start_time = %record.start_time,
                "skipping record with unparsable start time"
            );
            continue;
        };
        grouping.push(start.weekday(), projector.project_at(record, &start));
    }
    grouping.sort();
    grouping
}

pub fn filter_by_week<'r, Tz: TimeZone>(
    records: &'r [LiveRecord],
    week: IsoWeek,
    tz: &Tz,
) -> Vec<&'r LiveRecord> {
    records
        .iter()
        .filter(|record| {
            parse_instant(&record.start_time, tz)
                .is_some_and(|start| IsoWeek::of_instant(&start) == week)
        })
        .collect()
}

pub fn weekly_plan<Tz: TimeZone>(
    records: &[LiveRecord],
    week: IsoWeek,
    projector: &EventProjector<'_, Tz>,
) -> WeeklyGrouping {
    group_by_day(filter_by_week(records, week, projector.timezone()), projector)
}

/// Weeks with data, the current week and any extras: deduplicated, ascending.
pub fn available_weeks<Tz: TimeZone>(
    records: &[LiveRecord],
    extra_weeks: &[IsoWeek],
    now: DateTime<Utc>,
    tz: &Tz,
) -> Vec<IsoWeek> {
    let record_weeks = records
        .iter()
        .filter_map(|record| parse_instant(&record.start_time, tz))
        .map(|start| IsoWeek::of_instant(&start));

    merge_weeks(
        std::iter::once(IsoWeek::current(now, tz))
            .chain(record_weeks)
            .chain(extra_weeks.iter().copied()),
    )
}

/// Deduplicates by key and sorts ascending.
pub fn merge_weeks(weeks: impl IntoIterator<Item = IsoWeek>) -> Vec<IsoWeek> {
    weeks
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
