//! Semantic versioning library compatible with npm's node-semver
//!
//! This crate provides version parsing, precedence ordering, increments, and
//! range matching with the range grammar used by npm (`^1.2.3`, `~1.2`,
//! `1.x || >=2.5.0 <3`, `1.0.0 - 2.0.0`).

pub mod compare;
pub mod constraint;
mod error;
mod grammar;
mod options;
pub mod query;
mod semver;
mod version;

pub use constraint::{Comparator, Operator, Range};
pub use error::SemverError;
pub use grammar::{MAX_LENGTH, MAX_SAFE_INTEGER};
pub use options::Options;
pub use query::Direction;
pub use semver::Semver;
pub use version::{Identifier, ReleaseType, Version};
