//! Release name processing and season selection

pub mod candidate;
pub mod filename_parser;
pub mod patterns;
pub mod quality;
pub mod release_group;
pub mod relevance;
pub mod smart_grab;
pub mod text_utils;

pub use candidate::{CandidateFile, SearchHit, candidates_from_json};
pub use filename_parser::{NormalizedRecord, parse};
pub use quality::resolution_tag;
pub use release_group::{UNKNOWN_GROUP, extract_group};
pub use relevance::{RelevanceScorer, Scored};
pub use smart_grab::{
    EmptyReason, GroupBucket, GroupScore, SeasonSelection, SelectedEpisode, SmartGrab,
    select_season,
};
