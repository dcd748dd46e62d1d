//! Equipped-item observation: the per-slot handler tree factory.
//!
//! Builds one sub-group per covered slot, each holding an item-type
//! handler and `damage` / `maxDamage` handlers:
//!
//! ```text
//! equipped_items
//! ├── mainhand { type, damage, maxDamage }
//! ├── offhand  { type, damage, maxDamage }
//! └── head, chest, legs, feet (armor)
//! ```

use quarry_core::id::{MAINHAND, OFFHAND};
use quarry_core::{BuildError, EquipmentSlots, ObsValue, Outcome, SlotPath, TranslateError};
use quarry_space::SpaceDescriptor;
use serde_json::Value;
use tracing::debug;

use crate::config::EquippedItemConfig;
use crate::damage::DamageHandler;
use crate::group::HandlerGroup;
use crate::handler::{Handler, TranslationHandler};
use crate::item_type::ItemTypeHandler;
use crate::vocabulary::Vocabulary;

/// Which slots an [`EquippedItemObservation`] covers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Coverage {
    /// Observe the main hand.
    pub mainhand: bool,
    /// Observe the off hand.
    pub offhand: bool,
    /// Observe every slot in the table other than the two hands.
    pub armor: bool,
}

impl Coverage {
    /// Slot-wise logical OR.
    pub fn union(self, other: Self) -> Self {
        Self {
            mainhand: self.mainhand || other.mainhand,
            offhand: self.offhand || other.offhand,
            armor: self.armor || other.armor,
        }
    }
}

/// Observation of the items equipped in the hands and armor slots.
///
/// # Examples
///
/// ```
/// use quarry_core::EquipmentSlots;
/// use quarry_obs::{EquippedItemConfig, EquippedItemObservation, TranslationHandler};
/// use serde_json::json;
///
/// let config = EquippedItemConfig {
///     items: vec!["diamond_sword".into(), "stick".into()],
///     ..Default::default()
/// };
/// let obs = EquippedItemObservation::new(&config, &EquipmentSlots::minecraft()).unwrap();
///
/// let feed = json!({"equipped_items": {"mainhand": {"type": "stick", "damage": 0, "maxDamage": 0}}});
/// let out = obs.decode_primary(&feed).unwrap().into_value();
/// assert_eq!(out.lookup(["mainhand", "type"]).and_then(|v| v.as_token()), Some("stick"));
/// ```
#[derive(Clone, Debug)]
pub struct EquippedItemObservation {
    vocabulary: Vocabulary,
    coverage: Coverage,
    use_variants: bool,
    slots: EquipmentSlots,
    root: HandlerGroup,
}

impl EquippedItemObservation {
    /// Name of the observation in its environment.
    pub const NAME: &'static str = "equipped_items";

    /// Build the handler tree described by `config` over the slot table.
    pub fn new(config: &EquippedItemConfig, slots: &EquipmentSlots) -> Result<Self, BuildError> {
        let vocabulary = Vocabulary::normalized(
            config.items.iter().cloned(),
            &config.default_token,
            &config.other_token,
        );
        Self::from_parts(vocabulary, config.coverage(), config.use_variants, slots.clone())
    }

    fn from_parts(
        vocabulary: Vocabulary,
        coverage: Coverage,
        use_variants: bool,
        slots: EquipmentSlots,
    ) -> Result<Self, BuildError> {
        let mut paths: Vec<SlotPath> = Vec::new();
        if coverage.mainhand {
            paths.push(SlotPath::new([MAINHAND]));
        }
        if coverage.offhand {
            paths.push(SlotPath::new([OFFHAND]));
        }
        if coverage.armor {
            paths.extend(slots.armor().map(|slot| SlotPath::new([slot])));
        }

        let children = paths
            .into_iter()
            .map(|path| slot_group(path, &vocabulary, use_variants).map(Handler::Group))
            .collect::<Result<Vec<_>, _>>()?;
        let root = HandlerGroup::new(Self::NAME, children)?;

        debug!(
            slots = root.len(),
            vocabulary = vocabulary.len(),
            use_variants,
            "built equipped-item observation"
        );
        Ok(Self {
            vocabulary,
            coverage,
            use_variants,
            slots,
            root,
        })
    }

    /// The normalized vocabulary.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Covered slots.
    pub fn coverage(&self) -> Coverage {
        self.coverage
    }

    /// Whether item types are keyed on `type + variant`.
    pub fn use_variants(&self) -> bool {
        self.use_variants
    }

    /// The slot table armor coverage iterates over.
    pub fn slots(&self) -> &EquipmentSlots {
        &self.slots
    }

    /// The root group of the handler tree.
    pub fn root(&self) -> &HandlerGroup {
        &self.root
    }

    /// Observation over the union of both vocabularies and coverages.
    ///
    /// Sentinel tokens, variant keying, and the slot table come from
    /// `self`; the first two must agree with `other`.
    pub fn union(&self, other: &Self) -> Result<Self, BuildError> {
        let vocabulary = self.vocabulary.union(&other.vocabulary)?;
        if self.use_variants != other.use_variants {
            return Err(BuildError::MismatchedTarget {
                reason: "variant keying differs".into(),
            });
        }
        let merged = Self::from_parts(
            vocabulary,
            self.coverage.union(other.coverage),
            self.use_variants,
            self.slots.clone(),
        )?;
        debug!(
            left = self.vocabulary.len(),
            right = other.vocabulary.len(),
            merged = merged.vocabulary.len(),
            "unioned equipped-item observations"
        );
        Ok(merged)
    }
}

/// `{ type, damage, maxDamage }` for one slot, named after the slot path.
fn slot_group(
    path: SlotPath,
    vocabulary: &Vocabulary,
    use_variants: bool,
) -> Result<HandlerGroup, BuildError> {
    HandlerGroup::new(
        path.joined("_"),
        vec![
            ItemTypeHandler::from_vocabulary(path.clone(), vocabulary, use_variants)?.into(),
            DamageHandler::new(path.clone(), DamageHandler::DAMAGE).into(),
            DamageHandler::new(path, DamageHandler::MAX_DAMAGE).into(),
        ],
    )
}

impl TranslationHandler for EquippedItemObservation {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn space(&self) -> SpaceDescriptor {
        self.root.space()
    }

    fn decode_primary(&self, raw: &Value) -> Result<Outcome<ObsValue>, TranslateError> {
        self.root.decode_primary(raw)
    }

    fn decode_secondary(&self, raw: &Value) -> Result<Outcome<ObsValue>, TranslateError> {
        self.root.decode_secondary(raw)
    }
}

impl PartialEq for EquippedItemObservation {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root && self.coverage == other.coverage
    }
}
