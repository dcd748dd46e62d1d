//! Enumeration space over a closed vocabulary.

use indexmap::IndexSet;
use quarry_core::ObsValue;

use crate::error::SpaceError;

/// One token out of a closed vocabulary.
///
/// Members are sorted on construction so token indices are the same
/// across runs regardless of the order the vocabulary was declared in.
///
/// # Examples
///
/// ```
/// use quarry_space::EnumSpace;
///
/// let space = EnumSpace::new(["other", "diamond_sword", "none"], "none").unwrap();
/// assert_eq!(space.tokens().collect::<Vec<_>>(), ["diamond_sword", "none", "other"]);
/// assert_eq!(space.default_index(), 1);
/// assert_eq!(space.index_of("other"), Some(2));
/// assert!(space.encode("iron_pickaxe").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumSpace {
    members: IndexSet<String>,
    default: usize,
}

impl EnumSpace {
    /// Build a space from `tokens` with `default` as its default member.
    ///
    /// Duplicates are collapsed. Returns `Err(SpaceError::EmptyVocabulary)`
    /// for an empty vocabulary and `Err(SpaceError::DefaultNotMember)` if
    /// `default` is absent.
    pub fn new<I, S>(tokens: I, default: &str) -> Result<Self, SpaceError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut sorted: Vec<String> = tokens.into_iter().map(Into::into).collect();
        sorted.sort();
        sorted.dedup();
        if sorted.is_empty() {
            return Err(SpaceError::EmptyVocabulary);
        }
        let members: IndexSet<String> = sorted.into_iter().collect();
        let default = members
            .get_index_of(default)
            .ok_or_else(|| SpaceError::DefaultNotMember {
                token: default.to_string(),
            })?;
        Ok(Self { members, default })
    }

    /// Members in index order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(String::as_str)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always returns `false`: construction rejects empty vocabularies.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns `true` if `token` is a member.
    pub fn contains(&self, token: &str) -> bool {
        self.members.contains(token)
    }

    /// Index of `token`, if it is a member.
    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.members.get_index_of(token)
    }

    /// Member at `index`.
    pub fn token(&self, index: usize) -> Option<&str> {
        self.members.get_index(index).map(String::as_str)
    }

    /// Index of the default member.
    pub fn default_index(&self) -> usize {
        self.default
    }

    /// The default member.
    pub fn default_token(&self) -> &str {
        &self.members[self.default]
    }

    /// Encode a member as an [`ObsValue::Enum`].
    ///
    /// Non-members are rejected, never coerced.
    pub fn encode(&self, token: &str) -> Result<ObsValue, SpaceError> {
        let index = self
            .index_of(token)
            .ok_or_else(|| SpaceError::UnknownToken {
                token: token.to_string(),
            })?;
        Ok(ObsValue::Enum {
            token: self.members[index].clone(),
            index,
        })
    }

    /// The default member as an [`ObsValue::Enum`].
    pub fn default_value(&self) -> ObsValue {
        ObsValue::Enum {
            token: self.default_token().to_string(),
            index: self.default,
        }
    }

    /// Space over the union of both vocabularies, keeping `self`'s default.
    pub fn union(&self, other: &Self) -> Self {
        let tokens = self.members.iter().chain(other.members.iter()).cloned();
        let mut sorted: Vec<String> = tokens.collect();
        sorted.sort();
        sorted.dedup();
        let members: IndexSet<String> = sorted.into_iter().collect();
        // `self`'s default survives the union, so the lookup cannot miss.
        let default = members
            .get_index_of(self.default_token())
            .unwrap_or_default();
        Self { members, default }
    }
}
