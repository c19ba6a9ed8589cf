use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub type MemberId = u64;
pub type LiveTypeId = u32;

const MEMBER_PREFIX: &str = "member:";
const TYPE_PREFIX: &str = "type:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    Member,
    Type,
}

/// Identifies a performer or a live type. Display data is resolved through the tag catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TagKey {
    Member(MemberId),
    Type(LiveTypeId),
}

impl TagKey {
    pub fn kind(self) -> TagKind {
        match self {
            Self::Member(_) => TagKind::Member,
            Self::Type(_) => TagKind::Type,
        }
    }

    pub fn id(self) -> u64 {
        match self {
            Self::Member(mid) => mid,
            Self::Type(type_id) => u64::from(type_id),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("malformed tag key: {0:?}")]
pub struct TagKeyError(String);

impl fmt::Display for TagKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Member(mid) => write!(f, "{MEMBER_PREFIX}{mid}"),
            Self::Type(type_id) => write!(f, "{TYPE_PREFIX}{type_id}"),
        }
    }
}

impl FromStr for TagKey {
    type Err = TagKeyError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let malformed = || TagKeyError(raw.to_string());
        if let Some(mid) = raw.strip_prefix(MEMBER_PREFIX) {
            return mid.parse().map(Self::Member).map_err(|_| malformed());
        }
        if let Some(type_id) = raw.strip_prefix(TYPE_PREFIX) {
            return type_id.parse().map(Self::Type).map_err(|_| malformed());
        }
        Err(malformed())
    }
}

// String form so tag keys can be JSON object keys.
impl Serialize for TagKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TagKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
