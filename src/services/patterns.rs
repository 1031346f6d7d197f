//! Pattern registry for release filenames
//!
//! Every keyword list and regex used by the parser, the release-group
//! extractor and the relevance scorer lives here. The registry is compiled
//! once on first use and shared read-only afterwards.

use once_cell::sync::Lazy;
use regex::Regex;

/// Container extensions recognised (case-insensitively) at the end of a name
pub const VIDEO_EXTENSIONS: &[&str] = &[
    "mkv", "mp4", "avi", "m2ts", "ts", "wmv", "mov", "flv", "m4v", "mpg", "mpeg", "webm", "rmvb",
    "iso",
];

/// Technical keywords as regex fragments: resolution tiers, HDR variants,
/// bit depth, sources, video and audio codecs.
pub const QUALITY_KEYWORDS: &[&str] = &[
    // Resolution
    "2160p",
    "1440p",
    "1080p",
    "1080i",
    "720p",
    "576p",
    "480p",
    "4K",
    "8K",
    "UHD",
    "FHD",
    "FullHD",
    // HDR
    r"HDR10\+",
    "HDR10Plus",
    "HDR10",
    "HDR",
    r"Dolby[ .]?Vision",
    "DoVi",
    "DV",
    "HLG",
    "SDR",
    // Bit depth
    r"1[02][- ]?bit",
    r"8[- ]?bit",
    // Source
    r"Blu[- ]?Ray",
    "BDRemux",
    "BDRip",
    "BRRip",
    "Remux",
    r"WEB[-. ]?DL",
    r"WEB[-. ]?Rip",
    "WEB",
    "HDTV",
    "HDRip",
    "DVDRip",
    "AMZN",
    "DSNP",
    "HMAX",
    "ATVP",
    "NF",
    // Video codecs
    r"[xh]\.?26[45]",
    "HEVC",
    "AVC",
    "AV1",
    "VP9",
    "XviD",
    // Audio codecs
    r"DTS[- ]?HD(?:[ .]?MA)?",
    r"DTS[- ]?X",
    "DTS",
    "TrueHD",
    "Atmos",
    r"DDP?5\.1",
    "DDP",
    r"DD\+",
    "E?AC3",
    "AAC",
    "FLAC",
    "LPCM",
];

/// Vietnamese release markers as regex fragments: subtitle/dub labels and
/// broadcaster abbreviations.
pub const VIETNAMESE_MARKERS: &[&str] = &[
    r"Viet[ .]?Sub",
    r"Sub[ .]?Vi[eệ]t",
    r"Thuy[eế]t[ .]?Minh",
    r"L[oồ]ng[ .]?Ti[eế]ng",
    r"Ph[uụ][ .]?[Đđ]ề",
    r"Phu[ .]?De",
    "TMPĐ",
    "TMPD",
    "TVP",
    "TM",
    "LT",
    r"VTV\d{0,2}",
    r"HTV\d{0,2}",
    r"THVL\d?",
    "VieON",
];

/// Lower-cased Vietnamese-content markers used by the relevance scorer,
/// listed with and without diacritics.
pub const VIETNAMESE_CONTENT_MARKERS: &[&str] = &[
    "vietsub",
    "viet sub",
    "sub việt",
    "sub viet",
    "thuyết minh",
    "thuyet minh",
    "lồng tiếng",
    "long tieng",
    "phụ đề",
    "phu de",
    "tmpđ",
    "tmpd",
];

/// Codec identifiers that must never be mistaken for a trailing `-GROUP`
pub const CODEC_IDENTIFIERS: &[&str] = &["x264", "x265", "h264", "h265", "hevc", "avc"];

/// Markers that earn the high-resolution relevance bonus
pub const HIGH_RESOLUTION_MARKERS: &[&str] = &["1080p", "2160p", "4k"];

/// Pre-compiled regex patterns shared by every parse call
#[derive(Debug)]
pub struct Patterns {
    /// Known container extension at the very end of a name
    pub extension: Regex,

    /// Season/episode alternatives in priority order
    pub season_episode: Vec<Regex>,

    /// Combined technical keyword + Vietnamese marker alternation
    pub quality_marker: Regex,

    /// Bare 4-digit year, 1900-2099
    pub year: Regex,
    /// Year token with optional surrounding parentheses, for removal
    pub year_in_parens: Regex,
    /// Year token range considered by the relevance scorer, 1950-2029
    pub relevance_year: Regex,

    /// `[GROUP]`
    pub group_bracket: Regex,
    /// Trailing `-GROUP`
    pub group_suffix: Regex,
    /// Trailing `NAME.MEDIA` style label
    pub group_dotted: Regex,

    /// `()` or `[]` left empty after tokens were cut out
    pub empty_brackets: Regex,
    /// A `-GROUP` fragment left dangling at the end of a cleaned title
    pub dangling_group: Regex,
}

impl Patterns {
    pub fn new() -> Self {
        Self {
            extension: Regex::new(&format!(r"(?i)\.({})$", VIDEO_EXTENSIONS.join("|")))
                .expect("Invalid extension regex"),

            season_episode: vec![
                Regex::new(r"(?i)S(\d{1,4})E(\d{1,3})").expect("Invalid SxxEyy regex"),
                Regex::new(r"(?i)S(\d{1,4})\s?EP?(\d{1,3})").expect("Invalid SxxEPyy regex"),
            ],

            quality_marker: Regex::new(&keyword_alternation(
                QUALITY_KEYWORDS.iter().chain(VIETNAMESE_MARKERS),
            ))
            .expect("Invalid quality marker regex"),

            year: Regex::new(r"\b((?:19|20)\d{2})\b").expect("Invalid year regex"),
            year_in_parens: Regex::new(r"\(?\b((?:19|20)\d{2})\b\)?")
                .expect("Invalid year_in_parens regex"),
            relevance_year: Regex::new(r"\b(19[5-9]\d|20[0-2]\d)\b")
                .expect("Invalid relevance year regex"),

            group_bracket: Regex::new(r"\[([^\[\]]+)\]").expect("Invalid group bracket regex"),
            group_suffix: Regex::new(r"-([A-Za-z0-9]+)$").expect("Invalid group suffix regex"),
            group_dotted: Regex::new(r"\.([A-Z][A-Z0-9]*\.[A-Z][A-Z0-9]*)$")
                .expect("Invalid dotted group regex"),

            empty_brackets: Regex::new(r"\(\s*\)|\[\s*\]").expect("Invalid empty brackets regex"),
            dangling_group: Regex::new(r"(?:^|\s)-[A-Za-z0-9]+\s*$")
                .expect("Invalid dangling group regex"),
        }
    }

    /// Match a known container extension, returning `(stem, extension)`.
    /// The extension is returned verbatim, without the dot.
    pub fn split_extension<'a>(&self, filename: &'a str) -> (&'a str, Option<&'a str>) {
        match self.extension.captures(filename) {
            Some(caps) => {
                let whole = caps.get(0).map(|m| m.start()).unwrap_or(filename.len());
                let ext = caps.get(1).map(|m| m.as_str());
                (&filename[..whole], ext)
            }
            None => (filename, None),
        }
    }
}

impl Default for Patterns {
    fn default() -> Self {
        Self::new()
    }
}

/// The shared registry
pub static PATTERNS: Lazy<Patterns> = Lazy::new(Patterns::new);

/// Build one case-insensitive, word-bounded alternation from keyword
/// fragments. Longer fragments are tried first so `WEB-DL` wins over `WEB`.
fn keyword_alternation<'a>(fragments: impl Iterator<Item = &'a &'a str>) -> String {
    let mut fragments: Vec<&str> = fragments.copied().collect();
    fragments.sort_by_key(|f| std::cmp::Reverse(f.len()));

    let alternatives: Vec<String> = fragments
        .iter()
        .map(|f| {
            // A trailing `+` is not a word character, so `\b` after it would never match
            let tail = if f.ends_with(r"\+") { "" } else { r"\b" };
            format!(r"\b{}{}", f, tail)
        })
        .collect();

    format!("(?i)(?:{})", alternatives.join("|"))
}
