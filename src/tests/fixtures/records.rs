// Shared fixtures for schedule records and metadata lists.

use crate::modules::schedule::core::records::{
    LiveRecord, LiveStatus, LiveTag, LiveTagMeta, Vup, VupMeta,
};
use crate::modules::schedule::core::tag_key::{LiveTypeId, MemberId};

pub fn make_vups() -> Vec<Vup> {
    [(1, "思诺"), (2, "心宜"), (3, "贝拉"), (4, "乃琳"), (5, "嘉然"), (6, "A-SOUL")]
        .into_iter()
        .map(|(mid, name)| Vup {
            mid,
            name: name.to_string(),
            face_url_bili: None,
        })
        .collect()
}

pub fn make_vup_meta() -> Vec<VupMeta> {
    vec![VupMeta {
        mid: 5,
        color: Some("#E799B0".to_string()),
    }]
}

pub fn make_live_tags() -> Vec<LiveTag> {
    [(0, "其它"), (1, "2D"), (2, "节目"), (3, "日常")]
        .into_iter()
        .map(|(tag_id, name)| LiveTag {
            tag_id,
            name: name.to_string(),
            sort_order: None,
            is_active: None,
        })
        .collect()
}

pub fn make_live_tag_meta() -> Vec<LiveTagMeta> {
    vec![LiveTagMeta {
        tag_id: 3,
        color: None,
        icon: Some("☕".to_string()),
    }]
}

pub struct LiveRecordBuilder {
    inner: LiveRecord,
}

impl Default for LiveRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl LiveRecordBuilder {
    pub fn new() -> Self {
        Self {
            inner: LiveRecord {
                id: 1,
                mid: 1,
                guest_mids: Vec::new(),
                live_type: 3,
                title: "华语金曲连唱4.0".to_string(),
                start_time: "2026-01-28T19:30".to_string(),
                end_time: Some("2026-01-28T21:30".to_string()),
                status: LiveStatus::Ended,
            },
        }
    }

    pub fn id(mut self, v: u64) -> Self {
        self.inner.id = v;
        self
    }

    pub fn mid(mut self, v: MemberId) -> Self {
        self.inner.mid = v;
        self
    }

    pub fn guests(mut self, v: &[MemberId]) -> Self {
        self.inner.guest_mids = v.to_vec();
        self
    }

    pub fn live_type(mut self, v: LiveTypeId) -> Self {
        self.inner.live_type = v;
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn start(mut self, v: impl Into<String>) -> Self {
        self.inner.start_time = v.into();
        self
    }

    pub fn end(mut self, v: Option<&str>) -> Self {
        self.inner.end_time = v.map(str::to_string);
        self
    }

    pub fn status(mut self, v: LiveStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn build(self) -> LiveRecord {
        self.inner
    }
}
