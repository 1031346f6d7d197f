//! Filename parser for Vietnamese file-hosting release names
//!
//! Parses filenames like:
//! - "Ling Cage 2019 4K HDR 10Bit S1E14 SP TVP TMPĐ_kimngonx5 (2019) 2160p.mkv"
//! - "The.Mandalorian.S02E08.1080p.WEB-DL.x264-RARBG.mkv"
//! - "Avengers Endgame (2019) 2160p BluRay x265 10bit HDR-RARBG"
//!
//! Uploaders on these hosts often put quality tags *before* the episode
//! marker, which makes downstream title extraction swallow them. The parser
//! rebuilds the name as `title SxxEyy year markers rest.ext` so the title is
//! always the text in front of the episode tag.

use regex::{Captures, Match};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::services::patterns::{PATTERNS, Patterns};
use crate::services::text_utils::{collapse_whitespace, separators_to_spaces, trim_title_debris};

/// Structured metadata extracted from one release filename
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub original_name: String,
    /// Reassembled name with quality markers moved behind the episode tag.
    /// Equal to `original_name` for non-series items.
    pub normalized_name: String,
    pub title: String,
    pub season: Option<u32>,
    pub episode: Option<u32>,
    pub year: Option<u32>,
    /// Everything after the episode tag: year, relocated markers, trailing text
    pub quality: Option<String>,
    pub is_series: bool,
    /// Container extension exactly as it appeared, without the dot
    pub extension: Option<String>,
}

/// Parse and normalize a release filename
pub fn parse(filename: &str) -> NormalizedRecord {
    let patterns = &*PATTERNS;
    let (stem, extension) = patterns.split_extension(filename);

    let record = match find_season_episode(patterns, stem) {
        Some((marker, season, episode)) => {
            parse_series(patterns, filename, stem, extension, marker, season, episode)
        }
        None => parse_non_series(patterns, filename, stem, extension),
    };

    debug!(
        filename = filename,
        title = %record.title,
        season = ?record.season,
        episode = ?record.episode,
        year = ?record.year,
        normalized = %record.normalized_name,
        "Parsed filename"
    );

    record
}

/// Episode number of a filename, if it carries a season/episode marker
pub fn episode_number(filename: &str) -> Option<u32> {
    let (stem, _) = PATTERNS.split_extension(filename);
    find_season_episode(&PATTERNS, stem).map(|(_, _, episode)| episode)
}

/// Season number of a filename, if it carries a season/episode marker
pub fn season_number(filename: &str) -> Option<u32> {
    let (stem, _) = PATTERNS.split_extension(filename);
    find_season_episode(&PATTERNS, stem).map(|(_, season, _)| season)
}

/// Try each season/episode alternative in priority order.
/// Returns the matched span and the parsed numbers.
fn find_season_episode<'a>(patterns: &Patterns, stem: &'a str) -> Option<(Match<'a>, u32, u32)> {
    patterns.season_episode.iter().find_map(|re| {
        let caps = re.captures(stem)?;
        let season = caps.get(1)?.as_str().parse().ok()?;
        let episode = caps.get(2)?.as_str().parse().ok()?;
        Some((caps.get(0)?, season, episode))
    })
}

fn parse_series(
    patterns: &Patterns,
    filename: &str,
    stem: &str,
    extension: Option<&str>,
    marker: Match<'_>,
    season: u32,
    episode: u32,
) -> NormalizedRecord {
    // Underscores are word characters to the regex engine; swap them for
    // spaces (same byte length) so `\b` sees them as separators.
    let before = stem[..marker.start()].trim().replace('_', " ");
    let after = stem[marker.end()..].trim().to_string();
    let tag = format!("S{:02}E{:02}", season, episode);

    let markers: Vec<&str> = patterns
        .quality_marker
        .find_iter(&before)
        .map(|m| m.as_str())
        .collect();
    let mut title = patterns.quality_marker.replace_all(&before, " ").into_owned();
    let mut after = after;

    // The title is the primary place for a year; fall back to the text behind
    // the tag so an already-normalized name keeps its year on a second pass.
    let year = first_year(patterns, &title).or_else(|| first_year(patterns, &after));
    if let Some(year) = year {
        title = remove_year(patterns, &title, year);
        after = remove_year(patterns, &after, year);
    }

    // Further years in the title move behind the tag with the primary one
    let mut extra_years: Vec<u32> = Vec::new();
    while let Some(extra) = first_year(patterns, &title) {
        title = remove_year(patterns, &title, extra);
        extra_years.push(extra);
    }

    let title = tidy_title(patterns, &separators_to_spaces(&title));
    let after = clean_keeping_markers(patterns, &after);

    let mut trailing: Vec<String> = Vec::new();
    trailing.extend(year.iter().chain(&extra_years).map(u32::to_string));
    trailing.extend(markers.iter().map(|m| m.to_string()));
    if !after.is_empty() {
        trailing.push(after);
    }
    let quality = collapse_whitespace(&trailing.join(" "));

    let mut normalized = collapse_whitespace(&format!("{} {} {}", title, tag, quality));
    if let Some(ext) = extension {
        normalized.push('.');
        normalized.push_str(ext);
    }

    NormalizedRecord {
        original_name: filename.to_string(),
        normalized_name: normalized,
        title,
        season: Some(season),
        episode: Some(episode),
        year,
        quality: (!quality.is_empty()).then_some(quality),
        is_series: true,
        extension: extension.map(str::to_string),
    }
}

fn parse_non_series(
    patterns: &Patterns,
    filename: &str,
    stem: &str,
    extension: Option<&str>,
) -> NormalizedRecord {
    let cleaned = separators_to_spaces(stem);

    let year = first_year(patterns, &cleaned);
    let without_year = match year {
        Some(year) => remove_year(patterns, &cleaned, year),
        None => cleaned,
    };

    let markers: Vec<&str> = patterns
        .quality_marker
        .find_iter(&without_year)
        .map(|m| m.as_str())
        .collect();
    let title = patterns.quality_marker.replace_all(&without_year, " ");
    let title = tidy_title(patterns, &collapse_whitespace(&title));

    let mut trailing: Vec<String> = Vec::new();
    if let Some(year) = year {
        trailing.push(year.to_string());
    }
    trailing.extend(markers.iter().map(|m| m.to_string()));
    let quality = trailing.join(" ");

    NormalizedRecord {
        original_name: filename.to_string(),
        normalized_name: filename.to_string(),
        title,
        season: None,
        episode: None,
        year,
        quality: (!quality.is_empty()).then_some(quality),
        is_series: false,
        extension: extension.map(str::to_string),
    }
}

fn first_year(patterns: &Patterns, text: &str) -> Option<u32> {
    patterns
        .year
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Remove every occurrence of `year`, together with parentheses wrapping it
fn remove_year(patterns: &Patterns, text: &str, year: u32) -> String {
    let year = year.to_string();
    patterns
        .year_in_parens
        .replace_all(text, |caps: &Captures| {
            let whole = &caps[0];
            if &caps[1] != year.as_str() {
                return whole.to_string();
            }
            // Keep an unbalanced parenthesis that belongs to surrounding text
            let open = whole.starts_with('(');
            let close = whole.ends_with(')');
            match (open, close) {
                (true, false) => "(".to_string(),
                (false, true) => ")".to_string(),
                _ => " ".to_string(),
            }
        })
        .into_owned()
}

/// Turn separators into spaces everywhere except inside quality markers, so
/// `DDP5.1.H.264-GRP` keeps its codec tokens intact
fn clean_keeping_markers(patterns: &Patterns, text: &str) -> String {
    let text = text.replace('_', " ");
    let mut cleaned = String::with_capacity(text.len());
    let mut last = 0;
    for m in patterns.quality_marker.find_iter(&text) {
        cleaned.push_str(&text[last..m.start()].replace('.', " "));
        cleaned.push_str(m.as_str());
        last = m.end();
    }
    cleaned.push_str(&text[last..].replace('.', " "));
    collapse_whitespace(&cleaned)
}

/// Drop empty brackets and separator debris left behind by token removal
fn tidy_title(patterns: &Patterns, title: &str) -> String {
    let title = patterns.empty_brackets.replace_all(title, " ");
    let title = patterns.dangling_group.replace(&title, " ");
    trim_title_debris(&collapse_whitespace(&title)).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_relocates_leading_markers() {
        let result = parse("Ling Cage 2019 4K HDR 10Bit S1E14 SP TVP TMPĐ_kimngonx5 (2019) 2160p");
        assert_eq!(result.title, "Ling Cage");
        assert_eq!(result.season, Some(1));
        assert_eq!(result.episode, Some(14));
        assert_eq!(result.year, Some(2019));
        assert!(result.is_series);
        assert_eq!(
            result.normalized_name,
            "Ling Cage S01E14 2019 4K HDR 10Bit SP TVP TMPĐ kimngonx5 2160p"
        );
        assert_eq!(
            result.quality.as_deref(),
            Some("2019 4K HDR 10Bit SP TVP TMPĐ kimngonx5 2160p")
        );
    }

    #[test]
    fn test_parse_scene_style() {
        let result = parse("The.Mandalorian.S02E08.1080p.WEB-DL.x264-RARBG.mkv");
        assert_eq!(result.title, "The Mandalorian");
        assert_eq!(result.season, Some(2));
        assert_eq!(result.episode, Some(8));
        assert_eq!(result.year, None);
        assert_eq!(result.extension.as_deref(), Some("mkv"));
        assert_eq!(
            result.normalized_name,
            "The Mandalorian S02E08 1080p WEB-DL x264-RARBG.mkv"
        );
    }

    #[test]
    fn test_parse_ep_variant() {
        let result = parse("Tieu Ngao Giang Ho S01 EP05 Thuyet Minh.mp4");
        assert_eq!(result.title, "Tieu Ngao Giang Ho");
        assert_eq!(result.season, Some(1));
        assert_eq!(result.episode, Some(5));
        assert_eq!(result.normalized_name, "Tieu Ngao Giang Ho S01E05 Thuyet Minh.mp4");
    }

    #[test]
    fn test_dotted_markers_kept_verbatim() {
        let result = parse("Show.DDP5.1.H.264.S01E01.mkv");
        assert_eq!(result.title, "Show");
        assert_eq!(result.normalized_name, "Show S01E01 DDP5.1 H.264.mkv");
        assert_eq!(parse(&result.normalized_name).normalized_name, result.normalized_name);

        let trailing = parse("Show.S01E01.1080p.DDP5.1.H.264-GRP.mkv");
        assert_eq!(trailing.quality.as_deref(), Some("1080p DDP5.1 H.264-GRP"));
    }

    #[test]
    fn test_second_title_year_moves_behind_tag() {
        let result = parse("Show.2019.2020.S01E01.mkv");
        assert_eq!(result.title, "Show");
        assert_eq!(result.year, Some(2019));
        assert_eq!(result.normalized_name, "Show S01E01 2019 2020.mkv");

        let again = parse(&result.normalized_name);
        assert_eq!(again.title, "Show");
        assert_eq!(again.year, Some(2019));
        assert_eq!(again.normalized_name, result.normalized_name);
    }

    #[test]
    fn test_extension_kept_verbatim() {
        let result = parse("Show.1080p.S03E01.MKV");
        assert_eq!(result.normalized_name, "Show S03E01 1080p.MKV");
        assert_eq!(result.extension.as_deref(), Some("MKV"));
    }

    #[test]
    fn test_unknown_extension_not_stripped() {
        let result = parse("Show.S01E01.srt");
        assert_eq!(result.extension, None);
        assert_eq!(result.normalized_name, "Show S01E01 srt");
    }

    #[test]
    fn test_parse_movie() {
        let result = parse("Avengers Endgame (2019) 2160p BluRay x265 10bit HDR-RARBG");
        assert!(!result.is_series);
        assert_eq!(result.title, "Avengers Endgame");
        assert_eq!(result.year, Some(2019));
        assert_eq!(result.season, None);
        assert_eq!(result.episode, None);
        assert_eq!(
            result.normalized_name,
            "Avengers Endgame (2019) 2160p BluRay x265 10bit HDR-RARBG"
        );
    }

    #[test]
    fn test_parse_movie_dotted() {
        let result = parse("Bo.Gia.2021.1080p.WEB-DL.Vietsub.mkv");
        assert!(!result.is_series);
        assert_eq!(result.title, "Bo Gia");
        assert_eq!(result.year, Some(2021));
        assert_eq!(result.quality.as_deref(), Some("2021 1080p WEB-DL Vietsub"));
        assert_eq!(result.normalized_name, "Bo.Gia.2021.1080p.WEB-DL.Vietsub.mkv");
    }

    #[test]
    fn test_parse_plain_title() {
        let result = parse("Home Video");
        assert!(!result.is_series);
        assert_eq!(result.title, "Home Video");
        assert_eq!(result.quality, None);
        assert_eq!(result.year, None);
    }

    #[test]
    fn test_empty_input() {
        let result = parse("");
        assert!(!result.is_series);
        assert_eq!(result.title, "");
        assert_eq!(result.normalized_name, "");
    }

    #[test]
    fn test_year_only_after_tag() {
        let result = parse("Ling Cage S01E14 2019 4K HDR 10Bit 2160p.mkv");
        assert_eq!(result.title, "Ling Cage");
        assert_eq!(result.year, Some(2019));
        assert_eq!(result.normalized_name, "Ling Cage S01E14 2019 4K HDR 10Bit 2160p.mkv");
    }

    #[test]
    fn test_dash_separated_title() {
        let result = parse("Phim Bo - 720p - S02E03.mp4");
        assert_eq!(result.title, "Phim Bo");
        assert_eq!(result.normalized_name, "Phim Bo S02E03 720p.mp4");
    }

    #[test]
    fn test_wide_season_numbers() {
        let result = parse("Daily Show S2024E105 1080p");
        assert_eq!(result.season, Some(2024));
        assert_eq!(result.episode, Some(105));
        assert!(result.normalized_name.starts_with("Daily Show S2024E105"));
    }

    #[test]
    fn test_episode_and_season_helpers() {
        assert_eq!(episode_number("Show.S01E09.1080p.mkv"), Some(9));
        assert_eq!(season_number("Show.S04E09.1080p.mkv"), Some(4));
        assert_eq!(episode_number("Movie.2019.1080p.mkv"), None);
    }
}
