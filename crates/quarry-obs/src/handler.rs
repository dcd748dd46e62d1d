//! The translation handler contract and its tagged dispatch.
//!
//! Every handler owns one [`SpaceDescriptor`] and implements two decode
//! paths: one for the live primary feed and one for the full snapshot.
//! Both paths are total over data absence (see [`Outcome`]); the only
//! error they return is [`TranslateError`].

use quarry_core::{BuildError, FallbackCause, ObsValue, Outcome, SlotPath, TranslateError};
use quarry_space::SpaceDescriptor;
use serde_json::Value;

use crate::damage::DamageHandler;
use crate::equipped::EquippedItemObservation;
use crate::group::HandlerGroup;
use crate::item_type::ItemTypeHandler;

/// Decode contract shared by all handlers and groups.
///
/// Implementations hold no per-call state, so a built tree can be
/// decoded from several threads at once.
pub trait TranslationHandler {
    /// Key under which this handler's value appears in its parent's output.
    fn name(&self) -> &str;

    /// Shape of the values this handler produces.
    fn space(&self) -> SpaceDescriptor;

    /// Decode from the live per-tick feed.
    ///
    /// Never fails: every gap in the feed falls back to the default.
    fn decode_primary(&self, raw: &Value) -> Result<Outcome<ObsValue>, TranslateError>;

    /// Decode from the full snapshot.
    ///
    /// Fails only with [`TranslateError::UnsupportedSlot`].
    fn decode_secondary(&self, raw: &Value) -> Result<Outcome<ObsValue>, TranslateError>;
}

/// Any node of a handler tree.
///
/// Merges dispatch on the variant pair; merging across variants is a
/// [`BuildError::IncompatibleMerge`].
#[derive(Clone, Debug, PartialEq)]
pub enum Handler {
    /// Item identity in one equipment slot.
    ItemType(ItemTypeHandler),
    /// One numeric field of the item in one equipment slot.
    Damage(DamageHandler),
    /// Named collection of child handlers.
    Group(HandlerGroup),
    /// Equipped-item observation root.
    EquippedItems(Box<EquippedItemObservation>),
}

impl Handler {
    /// Variant name, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ItemType(_) => "item_type",
            Self::Damage(_) => "damage",
            Self::Group(_) => "group",
            Self::EquippedItems(_) => "equipped_items",
        }
    }

    /// Combine two handlers of the same variant into a new one.
    pub fn merge(&self, other: &Handler) -> Result<Handler, BuildError> {
        match (self, other) {
            (Self::ItemType(a), Self::ItemType(b)) => a.merge(b).map(Self::ItemType),
            (Self::Damage(a), Self::Damage(b)) => a.merge(b).map(Self::Damage),
            (Self::Group(a), Self::Group(b)) => a.merge(b).map(Self::Group),
            (Self::EquippedItems(a), Self::EquippedItems(b)) => {
                a.union(b).map(|o| Self::EquippedItems(Box::new(o)))
            }
            _ => Err(BuildError::IncompatibleMerge {
                left: self.kind(),
                right: other.kind(),
            }),
        }
    }

    fn inner(&self) -> &dyn TranslationHandler {
        match self {
            Self::ItemType(h) => h,
            Self::Damage(h) => h,
            Self::Group(h) => h,
            Self::EquippedItems(h) => h.as_ref(),
        }
    }
}

impl TranslationHandler for Handler {
    fn name(&self) -> &str {
        self.inner().name()
    }

    fn space(&self) -> SpaceDescriptor {
        self.inner().space()
    }

    fn decode_primary(&self, raw: &Value) -> Result<Outcome<ObsValue>, TranslateError> {
        self.inner().decode_primary(raw)
    }

    fn decode_secondary(&self, raw: &Value) -> Result<Outcome<ObsValue>, TranslateError> {
        self.inner().decode_secondary(raw)
    }
}

impl From<ItemTypeHandler> for Handler {
    fn from(h: ItemTypeHandler) -> Self {
        Self::ItemType(h)
    }
}

impl From<DamageHandler> for Handler {
    fn from(h: DamageHandler) -> Self {
        Self::Damage(h)
    }
}

impl From<HandlerGroup> for Handler {
    fn from(h: HandlerGroup) -> Self {
        Self::Group(h)
    }
}

impl From<EquippedItemObservation> for Handler {
    fn from(h: EquippedItemObservation) -> Self {
        Self::EquippedItems(Box::new(h))
    }
}

/// Log and build a fallback outcome.
pub(crate) fn fallback(
    handler: &str,
    slot: &SlotPath,
    value: ObsValue,
    cause: FallbackCause,
) -> Outcome<ObsValue> {
    tracing::trace!(handler, %slot, %cause, "substituting fallback value");
    Outcome::fallback(value, cause)
}
