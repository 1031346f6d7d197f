//! Error types

/// A candidate record that cannot be turned into a [`CandidateFile`] at all.
///
/// Malformed numbers never produce this error; they default to zero.
///
/// [`CandidateFile`]: crate::services::candidate::CandidateFile
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CandidateError {
    #[error("candidate record is not a JSON object")]
    NotAnObject,

    #[error("candidate record is missing field `{0}`")]
    MissingField(&'static str),

    #[error("candidate field `{0}` is blank")]
    BlankField(&'static str),
}
