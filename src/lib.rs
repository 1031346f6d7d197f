//! Release filename normalization and season smart-grab for Vietnamese
//! file-hosting media.
//!
//! Two pure engines:
//! - [`parse`] turns a noisy release filename into a [`NormalizedRecord`],
//!   moving quality markers that precede the episode tag behind it.
//! - [`select_season`] picks one file per episode out of candidates offered by
//!   competing release groups, filling the primary group's gaps from the
//!   others.
//!
//! Nothing here performs I/O; the registry of patterns is compiled once and
//! shared across threads.

pub mod config;
pub mod error;
pub mod services;

pub use config::Config;
pub use error::CandidateError;
pub use services::{
    CandidateFile, EmptyReason, NormalizedRecord, RelevanceScorer, SearchHit, SeasonSelection,
    SmartGrab, extract_group, parse, select_season,
};
pub use services::relevance::{rank, score};
