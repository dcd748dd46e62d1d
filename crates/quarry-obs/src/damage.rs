//! Damage handler: one numeric field of the item in a slot.

use quarry_core::raw::int_field;
use quarry_core::{BuildError, FallbackCause, ObsValue, Outcome, SlotPath, TranslateError};
use quarry_space::{BoundedInt, SpaceDescriptor};
use serde_json::Value;

use crate::handler::{fallback, TranslationHandler};
use crate::slot::{mainhand_entry, primary_node};

/// Lowest damage value reported by the simulator.
pub const DAMAGE_LOW: i64 = -1;

/// Highest damage value reported by the simulator (diamond tool durability).
pub const DAMAGE_HIGH: i64 = 1562;

/// Decodes a tracked numeric field (`damage`, `maxDamage`) of one slot.
///
/// Missing or out-of-range values decode to the space default (0).
#[derive(Clone, Debug)]
pub struct DamageHandler {
    slot_path: SlotPath,
    field: String,
    space: BoundedInt,
}

impl DamageHandler {
    /// Field holding the current damage of an item.
    pub const DAMAGE: &'static str = "damage";

    /// Field holding the maximum damage of an item.
    pub const MAX_DAMAGE: &'static str = "maxDamage";

    /// Track `field` over `[-1, 1562]`, defaulting to 0.
    pub fn new(slot_path: SlotPath, field: impl Into<String>) -> Self {
        Self {
            slot_path,
            field: field.into(),
            space: BoundedInt::new(DAMAGE_LOW, DAMAGE_HIGH, 0)
                .expect("damage bounds must be a valid range containing 0"),
        }
    }

    /// Track `field` over custom bounds.
    pub fn with_bounds(slot_path: SlotPath, field: impl Into<String>, space: BoundedInt) -> Self {
        Self {
            slot_path,
            field: field.into(),
            space,
        }
    }

    /// The slot this handler reads.
    pub fn slot_path(&self) -> &SlotPath {
        &self.slot_path
    }

    /// The tracked field.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The value bounds.
    pub fn bounds(&self) -> &BoundedInt {
        &self.space
    }

    /// Damage handlers carry no vocabulary; merging requires equality.
    pub fn merge(&self, other: &Self) -> Result<Self, BuildError> {
        if self != other {
            return Err(BuildError::MismatchedTarget {
                reason: format!(
                    "{} on {} vs {} on {}",
                    self.field, self.slot_path, other.field, other.slot_path
                ),
            });
        }
        Ok(self.clone())
    }

    /// Collapse a raw integer into the space before hand-off.
    fn bounded(&self, raw: Option<i64>) -> Outcome<ObsValue> {
        match raw {
            Some(v) => match self.space.encode(v) {
                Ok(value) => Outcome::Value(value),
                Err(_) => fallback(
                    &self.field,
                    &self.slot_path,
                    self.space.default_value(),
                    FallbackCause::OutOfRange,
                ),
            },
            None => fallback(
                &self.field,
                &self.slot_path,
                self.space.default_value(),
                FallbackCause::Missing,
            ),
        }
    }
}

impl TranslationHandler for DamageHandler {
    fn name(&self) -> &str {
        &self.field
    }

    fn space(&self) -> SpaceDescriptor {
        SpaceDescriptor::BoundedInt(self.space)
    }

    fn decode_primary(&self, raw: &Value) -> Result<Outcome<ObsValue>, TranslateError> {
        let value = primary_node(raw, &self.slot_path).and_then(|node| int_field(node, &self.field));
        Ok(self.bounded(value))
    }

    fn decode_secondary(&self, raw: &Value) -> Result<Outcome<ObsValue>, TranslateError> {
        if !self.slot_path.is_mainhand() {
            return Err(TranslateError::UnsupportedSlot {
                handler: self.field.clone(),
                slot_path: self.slot_path.clone(),
            });
        }
        let value = mainhand_entry(raw).and_then(|entry| int_field(entry, &self.field));
        Ok(self.bounded(value))
    }
}

impl PartialEq for DamageHandler {
    fn eq(&self, other: &Self) -> bool {
        self.slot_path == other.slot_path && self.field == other.field
    }
}
