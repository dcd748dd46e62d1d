//! Decode outcomes.
//!
//! A decode call yields either the value read from the source or a
//! substituted fallback with its cause. The fatal case travels
//! separately as `Err(TranslateError)` so `?` propagates it and a match
//! on [`Outcome`] can never swallow it.

use std::fmt;

/// Why a decode call substituted a fallback value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FallbackCause {
    /// A key, path segment, or field was absent or had the wrong shape.
    Missing,
    /// The raw value was not in the handler's vocabulary.
    OutOfVocabulary,
    /// The resolved slot holds the empty item.
    EmptySlot,
    /// The raw numeric value lay outside the handler's bounds.
    OutOfRange,
}

impl fmt::Display for FallbackCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "missing"),
            Self::OutOfVocabulary => write!(f, "out of vocabulary"),
            Self::EmptySlot => write!(f, "empty slot"),
            Self::OutOfRange => write!(f, "out of range"),
        }
    }
}

/// Non-fatal result of one decode call.
///
/// # Examples
///
/// ```
/// use quarry_core::{FallbackCause, Outcome};
///
/// let read = Outcome::Value(7);
/// let substituted = Outcome::Fallback { value: 0, cause: FallbackCause::Missing };
///
/// assert_eq!(read.into_value(), 7);
/// assert!(substituted.is_fallback());
/// assert_eq!(substituted.cause(), Some(FallbackCause::Missing));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Value decoded from the source.
    Value(T),
    /// Substituted value, with the reason for the substitution.
    Fallback {
        /// The substituted value.
        value: T,
        /// Why the source value could not be used.
        cause: FallbackCause,
    },
}

impl<T> Outcome<T> {
    /// Shorthand for a fallback outcome.
    pub fn fallback(value: T, cause: FallbackCause) -> Self {
        Self::Fallback { value, cause }
    }

    /// The carried value, read or substituted.
    pub fn value(&self) -> &T {
        match self {
            Self::Value(v) | Self::Fallback { value: v, .. } => v,
        }
    }

    /// Consume the outcome, returning the carried value.
    pub fn into_value(self) -> T {
        match self {
            Self::Value(v) | Self::Fallback { value: v, .. } => v,
        }
    }

    /// Returns `true` if the value was substituted.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    /// Fallback cause, if any.
    pub fn cause(&self) -> Option<FallbackCause> {
        match self {
            Self::Value(_) => None,
            Self::Fallback { cause, .. } => Some(*cause),
        }
    }

    /// Transform the carried value, keeping the cause.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Self::Value(v) => Outcome::Value(f(v)),
            Self::Fallback { value, cause } => Outcome::Fallback {
                value: f(value),
                cause,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_keeps_cause() {
        let o = Outcome::fallback(1, FallbackCause::OutOfRange).map(|v| v * 10);
        assert_eq!(o.value(), &10);
        assert_eq!(o.cause(), Some(FallbackCause::OutOfRange));
    }

    #[test]
    fn value_has_no_cause() {
        let o = Outcome::Value("diamond_sword");
        assert!(!o.is_fallback());
        assert_eq!(o.cause(), None);
    }
}
