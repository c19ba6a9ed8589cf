// Project a wire record into a display-ready schedule event.
//
// Responsibilities
// - Resolve performer and live type ids to labels, with fallbacks for unknown ids.
// - Build the ordered tag key list: host, guests, then the live type.
// - Drop records whose start time does not parse. Never fail.

use crate::modules::schedule::core::records::{LiveRecord, LiveStatus, LiveTag, Vup};
use crate::modules::schedule::core::tag_key::{LiveTypeId, MemberId, TagKey};
use crate::shared::core::timestamp::{parse_instant, time_label};
use chrono::{DateTime, TimeZone};
use serde::Serialize;
use std::collections::HashMap;

/// Performer id to display name.
#[derive(Debug, Clone, Default)]
pub struct MemberIndex {
    by_mid: HashMap<MemberId, String>,
}

impl MemberIndex {
    pub fn from_vups(vups: &[Vup]) -> Self {
        Self {
            by_mid: vups.iter().map(|v| (v.mid, v.name.clone())).collect(),
        }
    }

    pub fn name(&self, mid: MemberId) -> String {
        self.by_mid
            .get(&mid)
            .cloned()
            .unwrap_or_else(|| format!("MID:{mid}"))
    }
}

/// Live type id to display name.
#[derive(Debug, Clone, Default)]
pub struct TypeIndex {
    by_id: HashMap<LiveTypeId, String>,
}

impl TypeIndex {
    pub fn from_tags(tags: &[LiveTag]) -> Self {
        Self {
            by_id: tags.iter().map(|t| (t.tag_id, t.name.clone())).collect(),
        }
    }

    pub fn name(&self, type_id: LiveTypeId) -> String {
        self.by_id
            .get(&type_id)
            .cloned()
            .unwrap_or_else(|| format!("Type {type_id}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEvent {
    pub id: u64,
    pub time_label: String,
    pub title: String,
    pub tag_keys: Vec<TagKey>,
    pub performer_id: MemberId,
    pub guest_ids: Vec<MemberId>,
    pub type_id: LiveTypeId,
    pub host: String,
    pub guests: Vec<String>,
    pub type_label: String,
    pub start_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(serialize_with = "serialize_status")]
    pub status: LiveStatus,
}

fn serialize_status<S: serde::Serializer>(status: &LiveStatus, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u8(u8::from(*status))
}

/// Projects records on the calendar of `tz`.
pub struct EventProjector<'a, Tz: TimeZone> {
    members: &'a MemberIndex,
    types: &'a TypeIndex,
    tz: Tz,
}

impl<'a, Tz: TimeZone> EventProjector<'a, Tz> {
    pub fn new(members: &'a MemberIndex, types: &'a TypeIndex, tz: Tz) -> Self {
        Self { members, types, tz }
    }

    pub fn timezone(&self) -> &Tz {
        &self.tz
    }

    pub fn start_of(&self, record: &LiveRecord) -> Option<DateTime<Tz>> {
        parse_instant(&record.start_time, &self.tz)
    }

    pub fn project(&self, record: &LiveRecord) -> Option<ScheduleEvent> {
        let start = self.start_of(record)?;
        Some(self.project_at(record, &start))
    }

    /// Projection for a record whose start has already been parsed.
    pub fn project_at(&self, record: &LiveRecord, start: &DateTime<Tz>) -> ScheduleEvent {
        let guest_ids = distinct_guests(record.mid, &record.guest_mids);

        let mut tag_keys = Vec::with_capacity(guest_ids.len() + 2);
        tag_keys.push(TagKey::Member(record.mid));
        tag_keys.extend(guest_ids.iter().copied().map(TagKey::Member));
        tag_keys.push(TagKey::Type(record.live_type));

        ScheduleEvent {
            id: record.id,
            time_label: time_label(start),
            title: record.title.clone(),
            tag_keys,
            performer_id: record.mid,
            guests: guest_ids.iter().map(|&mid| self.members.name(mid)).collect(),
            guest_ids,
            type_id: record.live_type,
            host: self.members.name(record.mid),
            type_label: self.types.name(record.live_type),
            start_time: record.start_time.clone(),
            end_time: record.end_time.clone(),
            status: record.status,
        }
    }
}

/// Guests in first-seen order, without the host and without repeats.
fn distinct_guests(host: MemberId, guests: &[MemberId]) -> Vec<MemberId> {
    let mut seen = vec![host];
    let mut distinct = Vec::with_capacity(guests.len());
    for &guest in guests {
        if !seen.contains(&guest) {
            seen.push(guest);
            distinct.push(guest);
        }
    }
    distinct
}

#[cfg(test)]
mod event_projector_tests {
    use super::*;
    use crate::tests::fixtures::records::{LiveRecordBuilder, make_live_tags, make_vups};
    use chrono::Utc;
    use rstest::{fixture, rstest};

    #[fixture]
    fn indexes() -> (MemberIndex, TypeIndex) {
        (
            MemberIndex::from_vups(&make_vups()),
            TypeIndex::from_tags(&make_live_tags()),
        )
    }

    #[rstest]
    fn it_should_project_a_record(indexes: (MemberIndex, TypeIndex)) {
        let (members, types) = indexes;
        let projector = EventProjector::new(&members, &types, Utc);
        let record = LiveRecordBuilder::new()
            .mid(1)
            .guests(&[2])
            .live_type(2)
            .start("2026-01-31T20:00")
            .title("羞死了")
            .build();

        let event = projector.project(&record).expect("expected an event");

        assert_eq!(event.time_label, "20:00");
        assert_eq!(event.title, "羞死了");
        assert_eq!(
            event.tag_keys,
            vec![TagKey::Member(1), TagKey::Member(2), TagKey::Type(2)]
        );
        assert_eq!(event.host, "思诺");
        assert_eq!(event.guests, vec!["心宜".to_string()]);
        assert_eq!(event.type_label, "节目");
    }

    #[rstest]
    fn it_should_list_the_host_once_when_also_a_guest(indexes: (MemberIndex, TypeIndex)) {
        let (members, types) = indexes;
        let projector = EventProjector::new(&members, &types, Utc);
        let record = LiveRecordBuilder::new()
            .mid(3)
            .guests(&[3, 4, 4, 3, 5])
            .live_type(1)
            .build();

        let event = projector.project(&record).unwrap();

        assert_eq!(
            event.tag_keys,
            vec![
                TagKey::Member(3),
                TagKey::Member(4),
                TagKey::Member(5),
                TagKey::Type(1)
            ]
        );
        assert_eq!(event.guest_ids, vec![4, 5]);
        let host_count = event
            .tag_keys
            .iter()
            .filter(|k| **k == TagKey::Member(3))
            .count();
        assert_eq!(host_count, 1);
    }

    #[rstest]
    fn it_should_fall_back_for_unknown_ids(indexes: (MemberIndex, TypeIndex)) {
        let (members, types) = indexes;
        let projector = EventProjector::new(&members, &types, Utc);
        let record = LiveRecordBuilder::new().mid(999).guests(&[998]).live_type(42).build();

        let event = projector.project(&record).unwrap();

        assert_eq!(event.host, "MID:999");
        assert_eq!(event.guests, vec!["MID:998".to_string()]);
        assert_eq!(event.type_label, "Type 42");
        assert_eq!(event.tag_keys.last(), Some(&TagKey::Type(42)));
    }

    #[rstest]
    fn it_should_skip_unparsable_start_times(indexes: (MemberIndex, TypeIndex)) {
        let (members, types) = indexes;
        let projector = EventProjector::new(&members, &types, Utc);
        let record = LiveRecordBuilder::new().start("26-01-28 ??").build();
        assert_eq!(projector.project(&record), None);
    }
}
