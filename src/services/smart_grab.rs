//! Season smart-grab
//!
//! Builds one season pack out of per-episode files offered by several
//! competing release groups:
//!
//! 1. Resolve each candidate's episode number and bucket it by release group,
//!    keeping the best-scoring file per group/episode.
//! 2. Score every group on completeness, average relevance and consistency,
//!    and take the best one as the primary source.
//! 3. Fill the primary group's missing episodes from the other groups,
//!    preferring files that look like the primary's (same resolution tier,
//!    similar size).
//!
//! The selection is total over noisy input: structural problems produce an
//! empty [`SeasonSelection`] with an [`EmptyReason`], never an error.

use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::{Config, FillWeights, GroupWeights};
use crate::services::candidate::{CandidateFile, finite_or_zero};
use crate::services::filename_parser;

/// Why a selection came back empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyReason {
    /// No candidate carried a usable episode number
    NoResolvableEpisodes,
    /// Candidates could not be grouped
    NoReleaseGroups,
    /// Every candidate was dropped by the season restriction
    NoGroupsAfterFiltering,
}

impl std::fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmptyReason::NoResolvableEpisodes => write!(f, "no resolvable episodes"),
            EmptyReason::NoReleaseGroups => write!(f, "no release groups"),
            EmptyReason::NoGroupsAfterFiltering => write!(f, "no groups after filtering"),
        }
    }
}

/// One release group's best file per episode, in first-seen order
#[derive(Debug, Clone)]
pub struct GroupBucket {
    pub group_name: String,
    episodes: IndexMap<u32, CandidateFile>,
}

impl GroupBucket {
    pub fn new(group_name: impl Into<String>) -> Self {
        Self {
            group_name: group_name.into(),
            episodes: IndexMap::new(),
        }
    }

    /// Insert the candidate if the episode is absent, or replace the current
    /// file if the candidate scores strictly higher. Returns whether the
    /// candidate was kept.
    pub fn offer(&mut self, episode: u32, candidate: CandidateFile) -> bool {
        match self.episodes.get_mut(&episode) {
            Some(current) if candidate.relevance_score > current.relevance_score => {
                *current = candidate;
                true
            }
            Some(_) => false,
            None => {
                self.episodes.insert(episode, candidate);
                true
            }
        }
    }

    pub fn get(&self, episode: u32) -> Option<&CandidateFile> {
        self.episodes.get(&episode)
    }

    pub fn episodes(&self) -> impl Iterator<Item = (u32, &CandidateFile)> {
        self.episodes.iter().map(|(episode, file)| (*episode, file))
    }

    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    fn average_size(&self) -> f64 {
        if self.episodes.is_empty() {
            return 0.0;
        }
        let total: f64 = self.episodes.values().map(|f| f.size_bytes as f64).sum();
        total / self.episodes.len() as f64
    }

    /// Most frequent resolution tag; the first one seen wins ties
    fn dominant_resolution(&self) -> Option<&str> {
        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for file in self.episodes.values() {
            *counts.entry(file.resolution_tag.as_str()).or_insert(0) += 1;
        }

        let mut best: Option<(&str, usize)> = None;
        for (tag, count) in counts {
            if best.is_none_or(|(_, best_count)| count > best_count) {
                best = Some((tag, count));
            }
        }
        best.map(|(tag, _)| tag)
    }
}

/// How good a release group is as the primary source of a season
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupScore {
    pub group_name: String,
    /// `found_episodes / total_episodes`
    pub completeness: f64,
    pub found_episodes: usize,
    pub quality_avg: f64,
    /// Sample standard deviation; 0 with fewer than two files
    pub quality_std: f64,
    pub consistency_score: f64,
    /// Every file shares one resolution tag
    pub resolution_consistency: bool,
    pub total_score: f64,
}

impl GroupScore {
    pub fn compute(bucket: &GroupBucket, total_episodes: u32, weights: &GroupWeights) -> Self {
        let scores: Vec<f64> = bucket.episodes.values().map(|f| f.relevance_score).collect();
        let found_episodes = scores.len();

        let completeness = if total_episodes == 0 {
            0.0
        } else {
            (found_episodes as f64 / total_episodes as f64).min(1.0)
        };
        let quality_avg = mean(&scores);
        let quality_std = sample_std_dev(&scores, quality_avg);
        let consistency_score = (100.0 - quality_std * weights.std_penalty).max(0.0);

        let mut tags = bucket.episodes.values().map(|f| f.resolution_tag.as_str());
        let resolution_consistency = match tags.next() {
            Some(first) => tags.all(|tag| tag == first),
            None => true,
        };

        let total_score = weights.completeness * (completeness * 100.0)
            + weights.quality * quality_avg
            + weights.consistency * consistency_score;

        Self {
            group_name: bucket.group_name.clone(),
            completeness,
            found_episodes,
            quality_avg,
            quality_std,
            consistency_score,
            resolution_consistency,
            total_score,
        }
    }
}

/// One episode of the final season pack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedEpisode {
    pub episode: u32,
    pub url: String,
    pub name: String,
    pub release_group: String,
    /// Taken from a non-primary group to fill a gap
    pub filled: bool,
}

/// The chosen season pack plus how it was assembled
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonSelection {
    /// Ascending by episode, one file per episode
    pub episodes: Vec<SelectedEpisode>,
    pub total_episodes: u32,
    pub found_episodes: usize,
    pub primary_group: Option<String>,
    pub mixed_sources: bool,
    pub filled_from_others: usize,
    /// Number of selected files contributed by each group
    pub quality_breakdown: BTreeMap<String, usize>,
    pub primary_completeness: f64,
    /// Rounded to one decimal
    pub primary_quality_avg: f64,
    /// Every group's score, best first
    pub group_scores: Vec<GroupScore>,
    /// Set when the selection is empty for a structural reason
    pub reason: Option<EmptyReason>,
}

impl SeasonSelection {
    pub fn empty(reason: EmptyReason) -> Self {
        Self {
            reason: Some(reason),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    /// `(episode, url)` pairs in episode order
    pub fn pairs(&self) -> Vec<(u32, &str)> {
        self.episodes
            .iter()
            .map(|e| (e.episode, e.url.as_str()))
            .collect()
    }

    /// URLs in episode order, ready for a batch download
    pub fn urls(&self) -> Vec<&str> {
        self.episodes.iter().map(|e| e.url.as_str()).collect()
    }

    /// Episodes between 1 and `total_episodes` nobody offered
    pub fn missing_episodes(&self) -> Vec<u32> {
        (1..=self.total_episodes)
            .filter(|ep| !self.episodes.iter().any(|e| e.episode == *ep))
            .collect()
    }
}

/// Season pack selector
#[derive(Debug, Clone, Copy, Default)]
pub struct SmartGrab {
    group_weights: GroupWeights,
    fill_weights: FillWeights,
    season: Option<u32>,
}

impl SmartGrab {
    pub fn new(config: &Config) -> Self {
        Self {
            group_weights: config.group,
            fill_weights: config.fill,
            season: None,
        }
    }

    /// Only consider files whose name marks them as part of `season`.
    /// Files without a season marker are kept.
    pub fn for_season(mut self, season: u32) -> Self {
        self.season = Some(season);
        self
    }

    pub fn select(&self, candidates: &[CandidateFile]) -> SeasonSelection {
        // Episode 0 (specials) is not part of a season pack
        let resolved: Vec<(u32, &CandidateFile)> = candidates
            .iter()
            .filter_map(|c| c.resolve_episode().filter(|ep| *ep >= 1).map(|ep| (ep, c)))
            .collect();
        if resolved.is_empty() {
            warn!(candidates = candidates.len(), "Smart grab: no resolvable episodes");
            return SeasonSelection::empty(EmptyReason::NoResolvableEpisodes);
        }

        let resolved: Vec<(u32, &CandidateFile)> = match self.season {
            Some(season) => resolved
                .into_iter()
                .filter(|(_, c)| {
                    filename_parser::season_number(&c.name).is_none_or(|s| s == season)
                })
                .collect(),
            None => resolved,
        };
        if resolved.is_empty() {
            warn!(season = ?self.season, "Smart grab: no groups after filtering");
            return SeasonSelection::empty(EmptyReason::NoGroupsAfterFiltering);
        }

        let total_episodes = resolved.iter().map(|(ep, _)| *ep).max().unwrap_or(0);

        let buckets = bucket_by_group(&resolved);
        if buckets.is_empty() {
            warn!("Smart grab: no release groups");
            return SeasonSelection::empty(EmptyReason::NoReleaseGroups);
        }

        let mut ranked: Vec<(GroupScore, &GroupBucket)> = buckets
            .values()
            .map(|bucket| {
                let score = GroupScore::compute(bucket, total_episodes, &self.group_weights);
                debug!(
                    group = %score.group_name,
                    completeness = score.completeness,
                    quality_avg = score.quality_avg,
                    quality_std = score.quality_std,
                    total_score = score.total_score,
                    "Scored release group"
                );
                (score, bucket)
            })
            .collect();
        // sort_by is stable: equal totals keep first-seen order
        ranked.sort_by(|a, b| b.0.total_score.total_cmp(&a.0.total_score));

        let (primary_score, primary) = (&ranked[0].0, ranked[0].1);

        let mut selection: BTreeMap<u32, SelectedEpisode> = primary
            .episodes()
            .map(|(episode, file)| (episode, selected(episode, file, &primary.group_name, false)))
            .collect();

        let primary_avg_size = primary.average_size();
        let primary_tag = primary.dominant_resolution();

        let mut filled_from_others = 0;
        for episode in 1..=total_episodes {
            if selection.contains_key(&episode) {
                continue;
            }

            let mut best: Option<(f64, &GroupBucket, &CandidateFile)> = None;
            for bucket in buckets.values() {
                if bucket.group_name == primary.group_name {
                    continue;
                }
                let Some(file) = bucket.get(episode) else {
                    continue;
                };
                let score = self.fill_score(file, primary_tag, primary_avg_size);
                if best.is_none_or(|(best_score, _, _)| score > best_score) {
                    best = Some((score, bucket, file));
                }
            }

            if let Some((score, bucket, file)) = best {
                debug!(
                    episode = episode,
                    group = %bucket.group_name,
                    fill_score = score,
                    "Filled missing episode"
                );
                selection.insert(episode, selected(episode, file, &bucket.group_name, true));
                filled_from_others += 1;
            }
        }

        let mut quality_breakdown: BTreeMap<String, usize> = BTreeMap::new();
        for entry in selection.values() {
            *quality_breakdown.entry(entry.release_group.clone()).or_insert(0) += 1;
        }

        let result = SeasonSelection {
            found_episodes: selection.len(),
            episodes: selection.into_values().collect(),
            total_episodes,
            primary_group: Some(primary.group_name.clone()),
            mixed_sources: filled_from_others > 0,
            filled_from_others,
            quality_breakdown,
            primary_completeness: primary_score.completeness,
            primary_quality_avg: round_one_decimal(primary_score.quality_avg),
            group_scores: ranked.iter().map(|(score, _)| score.clone()).collect(),
            reason: None,
        };

        info!(
            primary = %primary.group_name,
            found = result.found_episodes,
            total = result.total_episodes,
            filled = result.filled_from_others,
            groups = result.group_scores.len(),
            "Smart grab selected season"
        );

        result
    }

    /// Score an alternative file for a gap in the primary group
    fn fill_score(
        &self,
        file: &CandidateFile,
        primary_tag: Option<&str>,
        primary_avg_size: f64,
    ) -> f64 {
        let weights = &self.fill_weights;
        let mut score = 0.0;

        if primary_tag == Some(file.resolution_tag.as_str()) {
            score += weights.resolution_match;
        }

        score += (file.relevance_score / 100.0) * weights.relevance;

        if primary_avg_size > 0.0 {
            let size = file.size_bytes as f64;
            let similarity = size.min(primary_avg_size) / size.max(primary_avg_size);
            score += similarity * weights.size;
        }

        score
    }
}

/// Select a season pack with the default weights
pub fn select_season(candidates: &[CandidateFile]) -> SeasonSelection {
    SmartGrab::default().select(candidates)
}

fn bucket_by_group(resolved: &[(u32, &CandidateFile)]) -> IndexMap<String, GroupBucket> {
    let mut buckets: IndexMap<String, GroupBucket> = IndexMap::new();
    // Group extraction runs regexes; do it once per distinct name
    let mut groups: HashMap<&str, String> = HashMap::new();

    for (episode, candidate) in resolved {
        let group = groups
            .entry(candidate.name.as_str())
            .or_insert_with(|| candidate.release_group())
            .clone();

        let mut file = (*candidate).clone();
        file.episode_number = Some(*episode);
        // A NaN would sort above every real group total
        file.relevance_score = finite_or_zero(file.relevance_score);

        buckets
            .entry(group.clone())
            .or_insert_with(|| GroupBucket::new(group))
            .offer(*episode, file);
    }

    buckets
}

fn selected(episode: u32, file: &CandidateFile, group: &str, filled: bool) -> SelectedEpisode {
    SelectedEpisode {
        episode,
        url: file.url.clone(),
        name: file.name.clone(),
        release_group: group.to_string(),
        filled,
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn sample_std_dev(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(
        group: &str,
        episode: u32,
        score: f64,
        resolution: &str,
        size: u64,
    ) -> CandidateFile {
        CandidateFile::new(
            format!("Show.S01E{:02}.{}.WEB-DL-{}.mkv", episode, resolution, group),
            format!("https://fshare.vn/file/{}{:02}", group, episode),
        )
        .with_score(score)
        .with_size(size)
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_complete_group_beats_higher_quality() {
        let mut candidates: Vec<CandidateFile> =
            (1..=8).map(|ep| candidate("GRPA", ep, 80.0, "1080p", 1000)).collect();
        candidates.extend((1..=10).map(|ep| candidate("GRPB", ep, 60.0, "720p", 800)));

        let selection = select_season(&candidates);
        assert_eq!(selection.total_episodes, 10);
        assert_eq!(selection.primary_group.as_deref(), Some("GRPB"));
        assert_eq!(selection.found_episodes, 10);
        assert!(!selection.mixed_sources);
        assert_eq!(selection.filled_from_others, 0);
        assert!(approx(selection.primary_completeness, 1.0));
        assert!(approx(selection.primary_quality_avg, 60.0));
        assert!(approx(selection.group_scores[0].total_score, 88.0));
        assert!(approx(selection.group_scores[1].total_score, 84.0));
        assert_eq!(selection.quality_breakdown.get("GRPB"), Some(&10));
    }

    #[test]
    fn test_gap_prefers_matching_resolution() {
        let candidates = vec![
            candidate("GRPA", 1, 80.0, "1080p", 1000),
            candidate("GRPA", 2, 80.0, "1080p", 1000),
            candidate("GRPA", 3, 80.0, "1080p", 1000),
            candidate("GRPB", 4, 50.0, "720p", 1000),
            candidate("GRPC", 4, 40.0, "1080p", 500),
        ];

        let selection = select_season(&candidates);
        assert_eq!(selection.primary_group.as_deref(), Some("GRPA"));
        assert_eq!(selection.found_episodes, 4);
        assert!(selection.mixed_sources);
        assert_eq!(selection.filled_from_others, 1);

        let fourth = &selection.episodes[3];
        assert_eq!(fourth.episode, 4);
        assert_eq!(fourth.release_group, "GRPC");
        assert!(fourth.filled);
        assert_eq!(selection.quality_breakdown.get("GRPA"), Some(&3));
        assert_eq!(selection.quality_breakdown.get("GRPC"), Some(&1));
    }

    #[test]
    fn test_fill_tie_first_seen_wins() {
        let candidates = vec![
            candidate("GRPA", 1, 80.0, "720p", 100),
            candidate("GRPA", 2, 80.0, "720p", 100),
            candidate("GRPB", 3, 80.0, "720p", 100),
            candidate("GRPC", 3, 80.0, "720p", 100),
        ];
        let selection = select_season(&candidates);
        assert_eq!(selection.episodes[2].release_group, "GRPB");
    }

    #[test]
    fn test_primary_tag_tie_uses_first_seen() {
        let candidates = vec![
            candidate("GRPA", 1, 80.0, "720p", 100),
            candidate("GRPA", 2, 80.0, "1080p", 100),
            candidate("GRPB", 3, 80.0, "1080p", 100),
            candidate("GRPC", 3, 80.0, "720p", 100),
        ];
        let selection = select_season(&candidates);
        assert_eq!(selection.primary_group.as_deref(), Some("GRPA"));
        assert!(!selection.group_scores[0].resolution_consistency);
        assert_eq!(selection.episodes[2].release_group, "GRPC");
    }

    #[test]
    fn test_unowned_episode_stays_missing() {
        let candidates = vec![
            candidate("GRPA", 1, 70.0, "1080p", 100),
            candidate("GRPA", 2, 70.0, "1080p", 100),
            candidate("GRPA", 4, 70.0, "1080p", 100),
        ];
        let selection = select_season(&candidates);
        assert_eq!(selection.total_episodes, 4);
        assert_eq!(selection.found_episodes, 3);
        assert_eq!(selection.missing_episodes(), vec![3]);
        assert!(!selection.mixed_sources);
        assert!(approx(selection.primary_completeness, 0.75));
    }

    #[test]
    fn test_bucket_keeps_highest_score() {
        let mut bucket = GroupBucket::new("GRPA");
        assert!(bucket.offer(1, candidate("GRPA", 1, 50.0, "1080p", 1).with_episode(1)));
        let better = CandidateFile::new("better", "u2").with_score(70.0);
        assert!(bucket.offer(1, better));
        let equal = CandidateFile::new("equal", "u3").with_score(70.0);
        assert!(!bucket.offer(1, equal));
        assert_eq!(bucket.len(), 1);
        assert_eq!(bucket.get(1).map(|f| f.url.as_str()), Some("u2"));
    }

    #[test]
    fn test_duplicate_episode_uses_best_file() {
        let candidates = vec![
            candidate("GRPA", 1, 50.0, "1080p", 100),
            CandidateFile::new("Show.S01E01.1080p.Vietsub-GRPA.mkv", "best").with_score(90.0),
            candidate("GRPA", 2, 50.0, "1080p", 100),
        ];
        let selection = select_season(&candidates);
        assert_eq!(selection.pairs(), vec![(1, "best"), (2, "https://fshare.vn/file/GRPA02")]);
        assert!(approx(selection.primary_quality_avg, 70.0));
    }

    #[test]
    fn test_group_score_sample_std() {
        let mut bucket = GroupBucket::new("GRPA");
        bucket.offer(1, candidate("GRPA", 1, 60.0, "1080p", 1));
        bucket.offer(2, candidate("GRPA", 2, 80.0, "1080p", 1));

        let score = GroupScore::compute(&bucket, 4, &GroupWeights::default());
        assert!(approx(score.completeness, 0.5));
        assert!(approx(score.quality_avg, 70.0));
        assert!(approx(score.quality_std, 200f64.sqrt()));
        assert!(approx(score.consistency_score, 100.0 - 2.0 * 200f64.sqrt()));
        assert!(score.resolution_consistency);
    }

    #[test]
    fn test_single_episode_std_is_zero() {
        let mut bucket = GroupBucket::new("GRPA");
        bucket.offer(1, candidate("GRPA", 1, 60.0, "1080p", 1));
        let score = GroupScore::compute(&bucket, 1, &GroupWeights::default());
        assert_eq!(score.quality_std, 0.0);
        assert_eq!(score.consistency_score, 100.0);
    }

    #[test]
    fn test_consistency_floor() {
        let mut bucket = GroupBucket::new("GRPA");
        bucket.offer(1, candidate("GRPA", 1, 0.0, "1080p", 1));
        bucket.offer(2, candidate("GRPA", 2, 200.0, "1080p", 1));
        let score = GroupScore::compute(&bucket, 2, &GroupWeights::default());
        assert_eq!(score.consistency_score, 0.0);
    }

    #[test]
    fn test_no_resolvable_episodes() {
        let candidates = vec![
            CandidateFile::new("Movie.2019.1080p.mkv", "u1"),
            CandidateFile::new("Special.S01E00.mkv", "u2"),
        ];
        let selection = select_season(&candidates);
        assert!(selection.is_empty());
        assert_eq!(selection.reason, Some(EmptyReason::NoResolvableEpisodes));
        assert_eq!(
            selection.reason.map(|r| r.to_string()).as_deref(),
            Some("no resolvable episodes")
        );
    }

    #[test]
    fn test_empty_input() {
        let selection = select_season(&[]);
        assert_eq!(selection.reason, Some(EmptyReason::NoResolvableEpisodes));
        assert_eq!(selection.primary_group, None);
    }

    #[test]
    fn test_season_filter() {
        let candidates = vec![
            candidate("GRPA", 1, 70.0, "1080p", 100),
            CandidateFile::new("Show.S02E05.1080p-GRPA.mkv", "s2").with_score(70.0),
        ];

        let season_one = SmartGrab::default().for_season(1).select(&candidates);
        assert_eq!(season_one.total_episodes, 1);
        assert_eq!(season_one.urls(), vec!["https://fshare.vn/file/GRPA01"]);

        let season_three = SmartGrab::default().for_season(3).select(&candidates);
        assert_eq!(season_three.reason, Some(EmptyReason::NoGroupsAfterFiltering));
    }

    #[test]
    fn test_zero_primary_size_skips_similarity() {
        let candidates = vec![
            candidate("GRPA", 1, 80.0, "1080p", 0),
            candidate("GRPA", 2, 80.0, "1080p", 0),
            candidate("GRPB", 3, 30.0, "1080p", 5000),
            candidate("GRPC", 3, 40.0, "720p", 0),
        ];
        // GRPB: 40 + 9 = 49, GRPC: 0 + 12 = 12
        let selection = select_season(&candidates);
        assert_eq!(selection.episodes[2].release_group, "GRPB");
    }

    #[test]
    fn test_non_finite_score_cannot_win_primary() {
        let mut candidates: Vec<CandidateFile> =
            (1..=10).map(|ep| candidate("GOOD", ep, 80.0, "1080p", 100)).collect();
        let mut nan = CandidateFile::new("Show.S01E01.1080p-BAD.mkv", "bad1");
        nan.relevance_score = f64::NAN;
        let mut inf = CandidateFile::new("Show.S01E02.1080p-BAD.mkv", "bad2");
        inf.relevance_score = f64::INFINITY;
        candidates.push(nan);
        candidates.push(inf);

        let selection = select_season(&candidates);
        assert_eq!(selection.primary_group.as_deref(), Some("GOOD"));
        assert!(selection.group_scores.iter().all(|s| s.total_score.is_finite()));
        // GOOD: 50 + 24 + 20, BAD: 10 + 0 + 20
        assert!(approx(selection.group_scores[0].total_score, 94.0));
        assert!(approx(selection.group_scores[1].total_score, 30.0));
    }

    #[test]
    fn test_custom_config() {
        let mut config = Config::default();
        config.group.completeness = 0.0;
        let candidates = vec![
            candidate("GRPA", 1, 90.0, "1080p", 100),
            candidate("GRPB", 1, 10.0, "1080p", 100),
            candidate("GRPB", 2, 10.0, "1080p", 100),
        ];
        let selection = SmartGrab::new(&config).select(&candidates);
        assert_eq!(selection.primary_group.as_deref(), Some("GRPA"));
        assert_eq!(selection.episodes[1].release_group, "GRPB");
    }
}
