//! Error types for space construction and encoding.

use thiserror::Error;

/// Errors arising from space construction or value encoding.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SpaceError {
    /// Attempted to construct an enumeration with no members.
    #[error("enumeration must have at least one member")]
    EmptyVocabulary,
    /// The declared default is not a member of the enumeration.
    #[error("default '{token}' is not a member of the enumeration")]
    DefaultNotMember {
        /// The offending default.
        token: String,
    },
    /// A value handed to an enumeration is not a member.
    #[error("'{token}' is not a member of the enumeration")]
    UnknownToken {
        /// The offending value.
        token: String,
    },
    /// `low > high`.
    #[error("empty range: low {low} > high {high}")]
    InvertedRange {
        /// Lower bound.
        low: i64,
        /// Upper bound.
        high: i64,
    },
    /// An integer lies outside `[low, high]`.
    #[error("{value} is outside [{low}, {high}]")]
    OutOfRange {
        /// The offending value.
        value: i64,
        /// Lower bound.
        low: i64,
        /// Upper bound.
        high: i64,
    },
}
