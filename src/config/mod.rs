//! Scoring configuration
//!
//! Every numeric constant used by the relevance scorer and the season
//! aggregator. The defaults are the tuned values the selection behaviour
//! depends on; override them only deliberately.

use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Points awarded by the relevance scorer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelevanceWeights {
    /// Per query token found in the candidate name
    pub token_match: i64,
    /// A year in the name that also appears in the query
    pub year_match: i64,
    /// `1080p`, `2160p` or `4k` in the name
    pub high_resolution: i64,
    /// Vietnamese subtitle/dub marker in the name
    pub vietnamese_marker: i64,
}

impl Default for RelevanceWeights {
    fn default() -> Self {
        Self {
            token_match: 10,
            year_match: 20,
            high_resolution: 10,
            vietnamese_marker: 15,
        }
    }
}

/// Weights of the per-group total score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupWeights {
    pub completeness: f64,
    pub quality: f64,
    pub consistency: f64,
    /// Consistency points lost per unit of score standard deviation
    pub std_penalty: f64,
}

impl Default for GroupWeights {
    fn default() -> Self {
        Self {
            completeness: 0.5,
            quality: 0.3,
            consistency: 0.2,
            std_penalty: 2.0,
        }
    }
}

/// Points used to pick a gap-filling episode from another group
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FillWeights {
    /// Same resolution tag as the primary group
    pub resolution_match: f64,
    /// Scaled by `relevance_score / 100`
    pub relevance: f64,
    /// Scaled by size similarity to the primary group's average
    pub size: f64,
}

impl Default for FillWeights {
    fn default() -> Self {
        Self {
            resolution_match: 40.0,
            relevance: 30.0,
            size: 30.0,
        }
    }
}

/// Complete scoring configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub relevance: RelevanceWeights,
    pub group: GroupWeights,
    pub fill: FillWeights,
}

impl Config {
    /// Load configuration, overriding defaults from `FSHARE_GRAB_*` environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            relevance: RelevanceWeights {
                token_match: env_or(
                    "FSHARE_GRAB_TOKEN_MATCH_POINTS",
                    defaults.relevance.token_match,
                )?,
                year_match: env_or(
                    "FSHARE_GRAB_YEAR_MATCH_POINTS",
                    defaults.relevance.year_match,
                )?,
                high_resolution: env_or(
                    "FSHARE_GRAB_HIGH_RESOLUTION_POINTS",
                    defaults.relevance.high_resolution,
                )?,
                vietnamese_marker: env_or(
                    "FSHARE_GRAB_VIETNAMESE_MARKER_POINTS",
                    defaults.relevance.vietnamese_marker,
                )?,
            },

            group: GroupWeights {
                completeness: env_or(
                    "FSHARE_GRAB_COMPLETENESS_WEIGHT",
                    defaults.group.completeness,
                )?,
                quality: env_or("FSHARE_GRAB_QUALITY_WEIGHT", defaults.group.quality)?,
                consistency: env_or(
                    "FSHARE_GRAB_CONSISTENCY_WEIGHT",
                    defaults.group.consistency,
                )?,
                std_penalty: env_or("FSHARE_GRAB_STD_PENALTY", defaults.group.std_penalty)?,
            },

            fill: FillWeights {
                resolution_match: env_or(
                    "FSHARE_GRAB_FILL_RESOLUTION_POINTS",
                    defaults.fill.resolution_match,
                )?,
                relevance: env_or("FSHARE_GRAB_FILL_RELEVANCE_POINTS", defaults.fill.relevance)?,
                size: env_or("FSHARE_GRAB_FILL_SIZE_POINTS", defaults.fill.size)?,
            },
        })
    }
}

/// Parse `key` if set, otherwise fall back to `default`
fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("Invalid {}: {:?}", key, value)),
        Err(_) => Ok(default),
    }
}
