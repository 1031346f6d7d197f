//! Release group extraction
//!
//! Group labels are opaque identity keys for the season aggregator; they are
//! never parsed further.

use crate::services::patterns::{CODEC_IDENTIFIERS, PATTERNS};

/// Label used when no group can be found
pub const UNKNOWN_GROUP: &str = "Unknown";

/// Extract a best-effort release group label from a filename.
///
/// Tried in order: `[GROUP]`, a trailing `-GROUP` that is not a codec name,
/// then a trailing dotted label such as `PHIM.MEDIA`.
pub fn extract_group(filename: &str) -> String {
    let (stem, _) = PATTERNS.split_extension(filename);
    let stem = stem.trim();

    if let Some(group) = PATTERNS.group_bracket.captures(stem).and_then(|c| c.get(1)) {
        return group.as_str().to_string();
    }

    if let Some(group) = PATTERNS.group_suffix.captures(stem).and_then(|c| c.get(1)) {
        let label = group.as_str();
        if !is_codec(label) {
            return label.to_string();
        }
    }

    if let Some(group) = PATTERNS.group_dotted.captures(stem).and_then(|c| c.get(1)) {
        return group.as_str().to_string();
    }

    UNKNOWN_GROUP.to_string()
}

fn is_codec(label: &str) -> bool {
    CODEC_IDENTIFIERS
        .iter()
        .any(|codec| codec.eq_ignore_ascii_case(label))
}
