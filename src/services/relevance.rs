//! Relevance scoring for search hits
//!
//! Additive, unbounded score of how well a hit name answers a query. The same
//! number later serves as the per-episode quality signal of the season
//! aggregator.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::RelevanceWeights;
use crate::services::candidate::{CandidateFile, SearchHit};
use crate::services::filename_parser;
use crate::services::patterns::{HIGH_RESOLUTION_MARKERS, PATTERNS, VIETNAMESE_CONTENT_MARKERS};
use crate::services::quality::resolution_tag;
use crate::services::text_utils::query_tokens;

/// An item annotated with its relevance score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scored<T> {
    pub item: T,
    pub score: i64,
}

/// Scores hit names against a query
#[derive(Debug, Clone, Copy, Default)]
pub struct RelevanceScorer {
    weights: RelevanceWeights,
}

impl RelevanceScorer {
    pub fn new(weights: RelevanceWeights) -> Self {
        Self { weights }
    }

    /// Score one candidate name against a query
    pub fn score(&self, candidate_name: &str, query: &str) -> i64 {
        let tokens = query_tokens(query);
        let name_lower = candidate_name.to_lowercase();
        let mut score = 0;

        // Every query token present in the name
        for token in &tokens {
            if name_lower.contains(token.as_str()) {
                score += self.weights.token_match;
            }
        }

        // Year present in both the name and the query; read from the raw
        // query so "(2019)" counts like "2019"
        let query_years: Vec<&str> = PATTERNS
            .relevance_year
            .find_iter(query)
            .map(|m| m.as_str())
            .collect();
        let year_matches = PATTERNS
            .relevance_year
            .find_iter(candidate_name)
            .any(|m| query_years.contains(&m.as_str()));
        if year_matches {
            score += self.weights.year_match;
        }

        if HIGH_RESOLUTION_MARKERS
            .iter()
            .any(|marker| name_lower.contains(marker))
        {
            score += self.weights.high_resolution;
        }

        // Markers are checked on the raw name and with separators as spaces,
        // so "Thuyet.Minh" counts like "Thuyet Minh"
        let spaced = name_lower.replace(['.', '_'], " ");
        if VIETNAMESE_CONTENT_MARKERS
            .iter()
            .any(|marker| name_lower.contains(marker) || spaced.contains(marker))
        {
            score += self.weights.vietnamese_marker;
        }

        score
    }

    /// Score every item and sort descending; equal scores keep input order
    pub fn rank<T, F>(
        &self,
        items: impl IntoIterator<Item = T>,
        query: &str,
        name_of: F,
    ) -> Vec<Scored<T>>
    where
        F: Fn(&T) -> &str,
    {
        let mut scored: Vec<Scored<T>> = items
            .into_iter()
            .map(|item| {
                let score = self.score(name_of(&item), query);
                Scored { item, score }
            })
            .collect();

        // sort_by is stable
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored
    }

    /// Rank raw search hits and turn them into season candidates
    pub fn rank_hits(&self, hits: Vec<SearchHit>, query: &str) -> Vec<CandidateFile> {
        let ranked = self.rank(hits, query, |hit| hit.name.as_str());

        debug!(
            query = query,
            hits = ranked.len(),
            top_score = ranked.first().map(|s| s.score),
            "Ranked search hits"
        );

        ranked
            .into_iter()
            .map(|Scored { item, score }| CandidateFile {
                resolution_tag: resolution_tag(&item.name).to_string(),
                episode_number: filename_parser::episode_number(&item.name),
                relevance_score: score as f64,
                size_bytes: item.size_bytes,
                name: item.name,
                url: item.url,
            })
            .collect()
    }
}

/// Score one candidate name with the default weights
pub fn score(candidate_name: &str, query: &str) -> i64 {
    RelevanceScorer::default().score(candidate_name, query)
}

/// Rank items by name with the default weights
pub fn rank<T, F>(items: impl IntoIterator<Item = T>, query: &str, name_of: F) -> Vec<Scored<T>>
where
    F: Fn(&T) -> &str,
{
    RelevanceScorer::default().rank(items, query, name_of)
}
