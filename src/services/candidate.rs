//! Search hits and per-episode candidate files
//!
//! Collaborators hand these over as loose JSON. Numbers arrive as numbers,
//! numeric strings, `null` or garbage; anything unreadable becomes zero so one
//! bad record cannot block selection over the rest of the pool.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;
use tracing::warn;

use crate::error::CandidateError;
use crate::services::filename_parser;
use crate::services::quality::resolution_tag;
use crate::services::release_group::extract_group;

/// A raw search result before relevance scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub name: String,
    pub url: String,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub size_bytes: u64,
}

impl SearchHit {
    pub fn new(name: impl Into<String>, url: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            size_bytes,
        }
    }
}

/// One file offered for one episode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateFile {
    pub name: String,
    pub url: String,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub size_bytes: u64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub relevance_score: f64,
    #[serde(default)]
    pub resolution_tag: String,
    /// Explicit episode number; parsed from `name` when absent
    #[serde(default, deserialize_with = "lenient_episode")]
    pub episode_number: Option<u32>,
}

impl CandidateFile {
    /// Create a candidate with the resolution tag parsed from the name
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            resolution_tag: resolution_tag(&name).to_string(),
            name,
            url: url.into(),
            size_bytes: 0,
            relevance_score: 0.0,
            episode_number: None,
        }
    }

    pub fn with_size(mut self, size_bytes: u64) -> Self {
        self.size_bytes = size_bytes;
        self
    }

    pub fn with_score(mut self, relevance_score: f64) -> Self {
        self.relevance_score = finite_or_zero(relevance_score);
        self
    }

    pub fn with_resolution(mut self, tag: impl Into<String>) -> Self {
        self.resolution_tag = tag.into();
        self
    }

    pub fn with_episode(mut self, episode: u32) -> Self {
        self.episode_number = Some(episode);
        self
    }

    /// Release group derived from the file name
    pub fn release_group(&self) -> String {
        extract_group(&self.name)
    }

    /// The explicit episode number, or the one carried by the name
    pub fn resolve_episode(&self) -> Option<u32> {
        self.episode_number
            .or_else(|| filename_parser::episode_number(&self.name))
    }

    /// Decode a candidate from a loose JSON record.
    ///
    /// `name` and `url` are required. Unreadable numbers become zero, a
    /// missing resolution tag is parsed from the name.
    pub fn from_json(value: &JsonValue) -> Result<Self, CandidateError> {
        let object = value.as_object().ok_or(CandidateError::NotAnObject)?;

        let name = required_string(object.get("name"), "name")?;
        let url = required_string(object.get("url"), "url")?;

        let resolution = object
            .get("resolution_tag")
            .and_then(JsonValue::as_str)
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| resolution_tag(&name).to_string());

        Ok(Self {
            size_bytes: object.get("size_bytes").map(u64_or_zero).unwrap_or(0),
            relevance_score: object.get("relevance_score").map(f64_or_zero).unwrap_or(0.0),
            episode_number: object.get("episode_number").and_then(episode_or_none),
            resolution_tag: resolution,
            name,
            url,
        })
    }
}

/// Decode a batch of loose candidate records, skipping the ones that are
/// structurally unusable
pub fn candidates_from_json(values: &[JsonValue]) -> Vec<CandidateFile> {
    values
        .iter()
        .enumerate()
        .filter_map(|(index, value)| match CandidateFile::from_json(value) {
            Ok(candidate) => Some(candidate),
            Err(e) => {
                warn!(index = index, error = %e, "Skipping candidate record");
                None
            }
        })
        .collect()
}

fn required_string(
    value: Option<&JsonValue>,
    field: &'static str,
) -> Result<String, CandidateError> {
    let value = value
        .filter(|v| !v.is_null())
        .ok_or(CandidateError::MissingField(field))?;
    let text = match value {
        JsonValue::String(s) => s.trim().to_string(),
        JsonValue::Number(n) => n.to_string(),
        _ => return Err(CandidateError::MissingField(field)),
    };
    if text.is_empty() {
        return Err(CandidateError::BlankField(field));
    }
    Ok(text)
}

fn f64_or_zero(value: &JsonValue) -> f64 {
    let number = match value {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.map(finite_or_zero).unwrap_or(0.0)
}

/// NaN and infinities count as zero
pub(crate) fn finite_or_zero(n: f64) -> f64 {
    if n.is_finite() { n } else { 0.0 }
}

fn u64_or_zero(value: &JsonValue) -> u64 {
    match value {
        JsonValue::Number(n) => n
            .as_u64()
            .unwrap_or_else(|| clamp_to_u64(n.as_f64().unwrap_or(0.0))),
        JsonValue::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .unwrap_or_else(|_| clamp_to_u64(s.parse::<f64>().unwrap_or(0.0)))
        }
        _ => 0,
    }
}

fn clamp_to_u64(n: f64) -> u64 {
    if n.is_finite() && n > 0.0 {
        n as u64
    } else {
        0
    }
}

fn episode_or_none(value: &JsonValue) -> Option<u32> {
    match value {
        JsonValue::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn lenient_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    Ok(u64_or_zero(&JsonValue::deserialize(deserializer)?))
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(f64_or_zero(&JsonValue::deserialize(deserializer)?))
}

fn lenient_episode<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    Ok(episode_or_none(&JsonValue::deserialize(deserializer)?))
}
