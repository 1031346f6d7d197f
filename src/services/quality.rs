//! Coarse resolution tiers for candidate files
//!
//! The season aggregator only compares tags for equality, so the tiers are
//! deliberately coarse.

use once_cell::sync::Lazy;
use regex::Regex;

/// Tag for names without a recognisable resolution
pub const UNKNOWN_RESOLUTION: &str = "unknown";

static RESOLUTION_TIERS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"(?i)\b(?:2160p|4k|uhd)\b", "2160p"),
        (r"(?i)\b1440p\b", "1440p"),
        (r"(?i)\b(?:1080[pi]|fullhd|fhd)\b", "1080p"),
        (r"(?i)\b720p\b", "720p"),
        (r"(?i)\b(?:576p|480p|sd)\b", "480p"),
    ]
    .into_iter()
    .map(|(pattern, tag)| (Regex::new(pattern).expect("Invalid resolution regex"), tag))
    .collect()
});

/// Parse the resolution tier from a release name
pub fn resolution_tag(name: &str) -> &'static str {
    // `_` is a word character; treat it as a separator like `.`
    let name = name.replace('_', " ");
    RESOLUTION_TIERS
        .iter()
        .find(|(re, _)| re.is_match(&name))
        .map(|(_, tag)| *tag)
        .unwrap_or(UNKNOWN_RESOLUTION)
}
