// Presentation metadata for tags.
//
// Responsibilities
// - Order members by mid and active live types by (sort_order, tag_id).
// - Give each entry a color and tint: a configured hex color blended toward white,
//   or the palette entry at its position.
// - Resolve unknown keys to a neutral fallback.

use crate::modules::schedule::core::records::{LiveTag, LiveTagMeta, Vup, VupMeta};
use crate::modules::schedule::core::tag_key::{TagKey, TagKind};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub color: &'static str,
    pub tint: &'static str,
}

const fn entry(color: &'static str, tint: &'static str) -> PaletteEntry {
    PaletteEntry { color, tint }
}

pub const MEMBER_PALETTE: [PaletteEntry; 8] = [
    entry("#ff6b6b", "#ffe5e5"),
    entry("#4d96ff", "#e2eeff"),
    entry("#06d6a0", "#dffaf0"),
    entry("#ffd166", "#fff2b3"),
    entry("#ff4fa3", "#ffe0f0"),
    entry("#9ee65c", "#effbe3"),
    entry("#845ef7", "#eee6ff"),
    entry("#f59e0b", "#ffedd5"),
];

pub const TYPE_PALETTE: [PaletteEntry; 6] = [
    entry("#ff8a5b", "#ffe5d8"),
    entry("#4cc9f0", "#e0f7ff"),
    entry("#f15bb5", "#ffe0f0"),
    entry("#43aa8b", "#dcf5ee"),
    entry("#f9c74f", "#fff3cf"),
    entry("#9b5de5", "#efe4ff"),
];

const FALLBACK_COLOR: &str = "#5a4d43";
const FALLBACK_TINT: &str = "#f0e9e2";
const TINT_MIX: f64 = 0.82;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagMeta {
    pub id: u64,
    pub kind: TagKind,
    pub label: String,
    pub color: String,
    pub tint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl TagMeta {
    pub fn fallback(key: TagKey) -> Self {
        Self {
            id: key.id(),
            kind: key.kind(),
            label: key.to_string(),
            color: FALLBACK_COLOR.to_string(),
            tint: FALLBACK_TINT.to_string(),
            avatar: None,
            icon: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagCatalog {
    pub member_tags: Vec<TagKey>,
    pub type_tags: Vec<TagKey>,
    pub meta: BTreeMap<TagKey, TagMeta>,
}

impl TagCatalog {
    pub fn build(
        vups: &[Vup],
        vup_meta: &[VupMeta],
        live_tags: &[LiveTag],
        live_tag_meta: &[LiveTagMeta],
    ) -> Self {
        let mut catalog = Self::default();

        let color_by_mid: HashMap<_, _> = vup_meta
            .iter()
            .map(|meta| (meta.mid, meta.color.as_deref()))
            .collect();
        let mut members: Vec<&Vup> = vups.iter().collect();
        members.sort_by_key(|vup| vup.mid);

        for (index, vup) in members.into_iter().enumerate() {
            let key = TagKey::Member(vup.mid);
            let configured = color_by_mid.get(&vup.mid).copied().flatten();
            let (color, tint) = colors(configured, palette_entry(&MEMBER_PALETTE, index));
            catalog.member_tags.push(key);
            catalog.meta.insert(
                key,
                TagMeta {
                    id: vup.mid,
                    kind: TagKind::Member,
                    label: vup.name.clone(),
                    color,
                    tint,
                    avatar: vup.face_url_bili.clone().filter(|url| !url.is_empty()),
                    icon: None,
                },
            );
        }

        let meta_by_id: HashMap<_, _> = live_tag_meta
            .iter()
            .map(|meta| (meta.tag_id, meta))
            .collect();
        let mut types: Vec<&LiveTag> = live_tags.iter().filter(|tag| tag.is_active()).collect();
        types.sort_by_key(|tag| (tag.sort_order.unwrap_or(0), tag.tag_id));

        for (index, tag) in types.into_iter().enumerate() {
            let key = TagKey::Type(tag.tag_id);
            let meta = meta_by_id.get(&tag.tag_id);
            let configured = meta.and_then(|m| m.color.as_deref());
            let (color, tint) = colors(configured, palette_entry(&TYPE_PALETTE, index));
            catalog.type_tags.push(key);
            catalog.meta.insert(
                key,
                TagMeta {
                    id: u64::from(tag.tag_id),
                    kind: TagKind::Type,
                    label: tag.name.clone(),
                    color,
                    tint,
                    avatar: None,
                    icon: meta.and_then(|m| m.icon.clone()),
                },
            );
        }

        catalog
    }

    /// Metadata for `key`, or the neutral fallback when the key is unknown.
    pub fn resolve(&self, key: TagKey) -> TagMeta {
        self.meta
            .get(&key)
            .cloned()
            .unwrap_or_else(|| TagMeta::fallback(key))
    }
}

pub fn palette_entry(palette: &[PaletteEntry], index: usize) -> PaletteEntry {
    palette
        .get(index % palette.len().max(1))
        .copied()
        .unwrap_or(entry(FALLBACK_COLOR, FALLBACK_TINT))
}

fn colors(configured: Option<&str>, palette: PaletteEntry) -> (String, String) {
    match configured.and_then(normalize_hex) {
        Some(color) => {
            let tint = make_tint(&color).unwrap_or_else(|| palette.tint.to_string());
            (color, tint)
        }
        None => (palette.color.to_string(), palette.tint.to_string()),
    }
}

/// `#abc` or `#aabbcc`, trimmed and lowercased. Anything else is rejected.
pub fn normalize_hex(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('#')?;
    let valid = matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit());
    valid.then(|| trimmed.to_ascii_lowercase())
}

fn hex_to_rgb(hex: &str) -> Option<[u8; 3]> {
    let normalized = normalize_hex(hex)?;
    let digits = &normalized[1..];
    let expanded: String = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };
    let channel = |at: usize| u8::from_str_radix(expanded.get(at..at + 2)?, 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

/// Blends each channel toward white by the fixed mix ratio.
pub fn make_tint(color: &str) -> Option<String> {
    let mix = |value: u8| {
        let value = f64::from(value);
        (value + (255.0 - value) * TINT_MIX).round() as u8
    };
    hex_to_rgb(color).map(|[r, g, b]| format!("#{:02x}{:02x}{:02x}", mix(r), mix(g), mix(b)))
}
