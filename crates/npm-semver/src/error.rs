//! Error type shared by every parser and operation

use thiserror::Error;

use crate::grammar::MAX_LENGTH;

/// Errors raised while parsing or operating on versions, comparators and ranges
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemverError {
    #[error("version is longer than {max} characters")]
    TooLong { max: usize },
    #[error("Invalid Version: {0}")]
    InvalidVersion(String),
    #[error("Invalid {0} version")]
    InvalidComponent(&'static str),
    #[error("Invalid comparator: {0}")]
    InvalidComparator(String),
    #[error("Invalid SemVer Range: {0}")]
    InvalidRange(String),
    #[error("Invalid SemVer Range: {range} (invalid comparator \"{comparator}\")")]
    InvalidRangeComparator { range: String, comparator: String },
    #[error("Invalid operator: {0}")]
    InvalidOperator(String),
    #[error("invalid increment argument: {0}")]
    InvalidReleaseType(String),
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),
    #[error("version {0} is not a prerelease")]
    NotPrerelease(String),
    #[error("Must provide a hilo val of \"<\" or \">\", got \"{0}\"")]
    InvalidDirection(String),
}

impl SemverError {
    pub(crate) fn too_long() -> Self {
        SemverError::TooLong { max: MAX_LENGTH }
    }
}
