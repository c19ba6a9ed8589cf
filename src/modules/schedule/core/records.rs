// Wire records served by the schedule API.
//
// Purpose
// - Mirror the JSON bodies of the performer, tag and live record endpoints.
//
// Responsibilities
// - Keep optional fields optional; missing values fall back instead of failing a batch.
// - Identify performers and live types by numeric id only.

use crate::modules::schedule::core::tag_key::{LiveTypeId, MemberId};
use serde::{Deserialize, Serialize};

/// A performer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vup {
    pub mid: MemberId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub face_url_bili: Option<String>,
}

/// Styling overrides for a performer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VupMeta {
    pub mid: MemberId,
    #[serde(default)]
    pub color: Option<String>,
}

/// A live type, e.g. "日常" or "2D".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveTag {
    pub tag_id: LiveTypeId,
    pub name: String,
    #[serde(default)]
    pub sort_order: Option<i32>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl LiveTag {
    pub fn is_active(&self) -> bool {
        self.is_active != Some(false)
    }
}

/// Styling overrides for a live type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveTagMeta {
    pub tag_id: LiveTypeId,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum LiveStatus {
    #[default]
    Scheduled,
    Ended,
    Live,
    Tentative,
    Unknown(u8),
}

impl From<u8> for LiveStatus {
    fn from(raw: u8) -> Self {
        match raw {
            0 => Self::Scheduled,
            1 => Self::Ended,
            2 => Self::Live,
            3 => Self::Tentative,
            other => Self::Unknown(other),
        }
    }
}

impl From<LiveStatus> for u8 {
    fn from(status: LiveStatus) -> Self {
        match status {
            LiveStatus::Scheduled => 0,
            LiveStatus::Ended => 1,
            LiveStatus::Live => 2,
            LiveStatus::Tentative => 3,
            LiveStatus::Unknown(other) => other,
        }
    }
}

/// One scheduled stream. `start_time` decides the week and day it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveRecord {
    pub id: u64,
    pub mid: MemberId,
    #[serde(default)]
    pub guest_mids: Vec<MemberId>,
    pub live_type: LiveTypeId,
    #[serde(default)]
    pub title: String,
    pub start_time: String,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub status: LiveStatus,
}
