//! Item-type handler: which item occupies an equipment slot.

use quarry_core::raw::str_field;
use quarry_core::{BuildError, FallbackCause, ObsValue, Outcome, SlotPath, TokenRole, TranslateError};
use quarry_space::{EnumSpace, SpaceDescriptor};
use serde_json::Value;

use crate::handler::{fallback, TranslationHandler};
use crate::slot::{mainhand_entry, primary_node, strip_namespace, EMPTY_ITEM};
use crate::vocabulary::{check_tokens, Vocabulary};

/// Decodes the item in one slot as a member of a closed vocabulary.
///
/// Absent data decodes to the default token; an item outside the
/// vocabulary decodes to the other token.
///
/// # Examples
///
/// ```
/// use quarry_core::SlotPath;
/// use quarry_obs::{ItemTypeHandler, TranslationHandler};
/// use serde_json::json;
///
/// let h = ItemTypeHandler::new(
///     SlotPath::mainhand(),
///     ["diamond_sword", "none", "other"],
///     "none",
///     "other",
///     false,
/// )
/// .unwrap();
///
/// let feed = json!({"equipped_items": {"mainhand": {"type": "modded:unknown_sword"}}});
/// let out = h.decode_primary(&feed).unwrap();
/// assert_eq!(out.value().as_token(), Some("other"));
///
/// let out = h.decode_primary(&json!({})).unwrap();
/// assert_eq!(out.value().as_token(), Some("none"));
/// ```
#[derive(Clone, Debug)]
pub struct ItemTypeHandler {
    slot_path: SlotPath,
    space: EnumSpace,
    other: String,
    use_variants: bool,
}

impl ItemTypeHandler {
    /// Name of every item-type handler in its parent group.
    pub const NAME: &'static str = "type";

    /// Create a handler over `items`.
    ///
    /// Both `default` and `other` must already be members of `items`;
    /// otherwise returns `Err(BuildError::MissingToken)`. With
    /// `use_variants`, the primary feed is keyed on `type + variant`.
    pub fn new<I, S>(
        slot_path: SlotPath,
        items: I,
        default: &str,
        other: &str,
        use_variants: bool,
    ) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        for (role, token) in [(TokenRole::Default, default), (TokenRole::Other, other)] {
            if !items.iter().any(|i| i == token) {
                return Err(BuildError::MissingToken {
                    role,
                    token: token.to_string(),
                });
            }
        }
        let space = EnumSpace::new(items, default).map_err(|e| BuildError::InvalidSpace {
            reason: e.to_string(),
        })?;
        Ok(Self {
            slot_path,
            space,
            other: other.to_string(),
            use_variants,
        })
    }

    /// Create a handler over a normalized vocabulary.
    pub fn from_vocabulary(
        slot_path: SlotPath,
        vocabulary: &Vocabulary,
        use_variants: bool,
    ) -> Result<Self, BuildError> {
        Self::new(
            slot_path,
            vocabulary.items().iter().cloned(),
            vocabulary.default_token(),
            vocabulary.other_token(),
            use_variants,
        )
    }

    /// The slot this handler reads.
    pub fn slot_path(&self) -> &SlotPath {
        &self.slot_path
    }

    /// The sorted vocabulary.
    pub fn enum_space(&self) -> &EnumSpace {
        &self.space
    }

    /// The default token.
    pub fn default_token(&self) -> &str {
        self.space.default_token()
    }

    /// The other token.
    pub fn other_token(&self) -> &str {
        &self.other
    }

    /// Whether the primary feed is keyed on `type + variant`.
    pub fn use_variants(&self) -> bool {
        self.use_variants
    }

    /// Handler over the union of both vocabularies.
    ///
    /// Operands must share slot path, sentinel tokens, and variant keying.
    pub fn merge(&self, other: &Self) -> Result<Self, BuildError> {
        if self.slot_path != other.slot_path {
            return Err(BuildError::MismatchedTarget {
                reason: format!("slot paths {} and {}", self.slot_path, other.slot_path),
            });
        }
        check_tokens(
            (self.default_token(), self.other_token()),
            (other.default_token(), other.other_token()),
        )?;
        if self.use_variants != other.use_variants {
            return Err(BuildError::MismatchedTarget {
                reason: format!("variant keying differs on {}", self.slot_path),
            });
        }
        Ok(Self {
            slot_path: self.slot_path.clone(),
            space: self.space.union(&other.space),
            other: self.other.clone(),
            use_variants: self.use_variants,
        })
    }

    fn substitute(&self, token: &str, cause: FallbackCause) -> Outcome<ObsValue> {
        let value = self
            .space
            .encode(token)
            .unwrap_or_else(|_| self.space.default_value());
        fallback(Self::NAME, &self.slot_path, value, cause)
    }

    fn missing(&self) -> Outcome<ObsValue> {
        self.space_default(FallbackCause::Missing)
    }

    fn space_default(&self, cause: FallbackCause) -> Outcome<ObsValue> {
        fallback(Self::NAME, &self.slot_path, self.space.default_value(), cause)
    }

    /// Member token, or the other token for anything unrecognised.
    fn classify(&self, key: &str) -> Outcome<ObsValue> {
        match self.space.encode(key) {
            Ok(value) => Outcome::Value(value),
            Err(_) => self.substitute(&self.other, FallbackCause::OutOfVocabulary),
        }
    }

    fn primary_key(&self, node: &Value) -> Option<String> {
        let item_type = str_field(node, "type")?;
        if !self.use_variants {
            return Some(item_type.to_string());
        }
        match node.as_object()?.get("variant")? {
            Value::String(v) => Some(format!("{item_type}{v}")),
            Value::Number(n) => Some(format!("{item_type}{n}")),
            _ => None,
        }
    }
}

impl TranslationHandler for ItemTypeHandler {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn space(&self) -> SpaceDescriptor {
        SpaceDescriptor::Enum(self.space.clone())
    }

    fn decode_primary(&self, raw: &Value) -> Result<Outcome<ObsValue>, TranslateError> {
        let key = primary_node(raw, &self.slot_path).and_then(|node| self.primary_key(node));
        Ok(match key {
            Some(key) => self.classify(&key),
            None => self.missing(),
        })
    }

    fn decode_secondary(&self, raw: &Value) -> Result<Outcome<ObsValue>, TranslateError> {
        if !self.slot_path.is_mainhand() {
            return Err(TranslateError::UnsupportedSlot {
                handler: Self::NAME.to_string(),
                slot_path: self.slot_path.clone(),
            });
        }
        let Some(name) = mainhand_entry(raw).and_then(|entry| str_field(entry, "name")) else {
            return Ok(self.missing());
        };
        let name = strip_namespace(name);
        if name == EMPTY_ITEM {
            return Ok(self.space_default(FallbackCause::EmptySlot));
        }
        Ok(self.classify(name))
    }
}

impl PartialEq for ItemTypeHandler {
    fn eq(&self, other: &Self) -> bool {
        self.slot_path == other.slot_path && self.space == other.space
    }
}
