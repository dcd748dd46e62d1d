//! Item vocabularies with guaranteed sentinel tokens.

use quarry_core::{BuildError, TokenRole};
use quarry_space::EnumSpace;

/// Ordered, duplicate-free set of item identifiers that always contains
/// its default and other tokens.
///
/// Declaration order is kept for display; encoding goes through
/// [`space`](Self::space), which sorts.
///
/// # Examples
///
/// ```
/// use quarry_obs::Vocabulary;
///
/// let v = Vocabulary::normalized(["diamond_sword", "stick", "stick"], "none", "other");
/// assert_eq!(v.items(), ["diamond_sword", "stick", "other", "none"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vocabulary {
    items: Vec<String>,
    default: String,
    other: String,
}

impl Vocabulary {
    /// Deduplicate `items`, then append `other` and `default` if absent.
    pub fn normalized<I, S>(items: I, default: &str, other: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for item in items {
            let item = item.into();
            if !out.contains(&item) {
                out.push(item);
            }
        }
        for token in [other, default] {
            if !out.iter().any(|i| i == token) {
                out.push(token.to_string());
            }
        }
        Self {
            items: out,
            default: default.to_string(),
            other: other.to_string(),
        }
    }

    /// Items in declaration order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Sentinel meaning "nothing equipped / data unavailable".
    pub fn default_token(&self) -> &str {
        &self.default
    }

    /// Sentinel meaning "an untracked item is equipped".
    pub fn other_token(&self) -> &str {
        &self.other
    }

    /// Returns `true` if `item` is in the vocabulary.
    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    /// Number of items, sentinels included.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always returns `false`: both sentinels are always present.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Set-union with `other`, keeping `self`'s order first.
    ///
    /// Both operands must use the same sentinel tokens.
    pub fn union(&self, other: &Self) -> Result<Self, BuildError> {
        check_tokens(
            (self.default.as_str(), self.other.as_str()),
            (other.default.as_str(), other.other.as_str()),
        )?;
        Ok(Self::normalized(
            self.items.iter().chain(other.items.iter()).cloned(),
            &self.default,
            &self.other,
        ))
    }

    /// Sorted enumeration space over the vocabulary.
    pub fn space(&self) -> Result<EnumSpace, BuildError> {
        EnumSpace::new(self.items.iter().cloned(), &self.default).map_err(|e| {
            BuildError::InvalidSpace {
                reason: e.to_string(),
            }
        })
    }
}

/// Reject a merge whose operands disagree on `(default, other)`.
pub(crate) fn check_tokens(left: (&str, &str), right: (&str, &str)) -> Result<(), BuildError> {
    if left.0 != right.0 {
        return Err(BuildError::TokenMismatch {
            role: TokenRole::Default,
            left: left.0.to_string(),
            right: right.0.to_string(),
        });
    }
    if left.1 != right.1 {
        return Err(BuildError::TokenMismatch {
            role: TokenRole::Other,
            left: left.1.to_string(),
            right: right.1.to_string(),
        });
    }
    Ok(())
}
