//! Error types for the Quarry translation framework.
//!
//! Two subsystems can fail: decoding (only for slot paths the snapshot
//! source cannot resolve) and construction (vocabulary, merge, and
//! grouping contract violations). Recoverable data absence is never an
//! error; see [`Outcome`](crate::Outcome).

use std::fmt;

use thiserror::Error;

use crate::id::SlotPath;

/// Fatal signal raised by a decode call.
///
/// Data absence and out-of-vocabulary values are reported through
/// [`Outcome::Fallback`](crate::Outcome::Fallback) instead. A
/// `TranslateError` means the handler tree was built for a slot
/// combination the translation layer cannot resolve, and must surface
/// rather than degrade into silent defaults.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// The snapshot decode path has no slot-resolution rule for this path.
    #[error("{handler} is not implemented for slot path {slot_path} on the snapshot source")]
    UnsupportedSlot {
        /// Name of the handler that was asked to decode.
        handler: String,
        /// The slot path the handler was built for.
        slot_path: SlotPath,
    },
}

/// Which sentinel token a [`BuildError`] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenRole {
    /// "No item equipped / data unavailable".
    Default,
    /// "Item outside the tracked vocabulary".
    Other,
}

impl fmt::Display for TokenRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Errors detected while constructing or merging handlers and groups.
///
/// All of these are configuration-time failures: they are raised before
/// any decode call is made against the affected tree.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A sentinel token is absent from the vocabulary it must belong to.
    #[error("{role} token '{token}' is not in the vocabulary")]
    MissingToken {
        /// Which sentinel is missing.
        role: TokenRole,
        /// The token value that was expected.
        token: String,
    },
    /// The two operands of a merge disagree on a sentinel token.
    #[error("cannot merge: {role} tokens differ ('{left}' vs '{right}')")]
    TokenMismatch {
        /// Which sentinel differs.
        role: TokenRole,
        /// Token on the left operand.
        left: String,
        /// Token on the right operand.
        right: String,
    },
    /// The two operands of a merge are different handler variants.
    #[error("cannot merge {left} with {right}")]
    IncompatibleMerge {
        /// Variant name of the left operand.
        left: &'static str,
        /// Variant name of the right operand.
        right: &'static str,
    },
    /// The two operands of a merge observe different data.
    #[error("cannot merge handlers targeting different data: {reason}")]
    MismatchedTarget {
        /// Description of the difference.
        reason: String,
    },
    /// Two children of one group share a name.
    #[error("group '{group}' already has a child named '{child}'")]
    DuplicateChild {
        /// Name of the group.
        group: String,
        /// The colliding child name.
        child: String,
    },
    /// A space descriptor rejected its parameters.
    #[error("invalid space: {reason}")]
    InvalidSpace {
        /// Description of the descriptor failure.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_slot_names_the_path() {
        let err = TranslateError::UnsupportedSlot {
            handler: "type".into(),
            slot_path: SlotPath::new(["offhand"]),
        };
        assert_eq!(
            err.to_string(),
            "type is not implemented for slot path [offhand] on the snapshot source"
        );
    }

    #[test]
    fn missing_token_names_the_role() {
        let err = BuildError::MissingToken {
            role: TokenRole::Other,
            token: "other".into(),
        };
        assert_eq!(err.to_string(), "other token 'other' is not in the vocabulary");
    }
}
