//! JSON configuration for equipped-item observations.

use quarry_core::EquipmentSlots;
use serde::Deserialize;

use crate::equipped::{Coverage, EquippedItemObservation};
use crate::error::ConfigError;

/// Builder input for [`EquippedItemObservation`].
///
/// Every field has a default, so `{}` is a valid configuration
/// observing only the main hand with an empty item list.
///
/// # Examples
///
/// ```
/// use quarry_obs::EquippedItemConfig;
///
/// let config = EquippedItemConfig::from_json_str(
///     r#"{"items": ["diamond_pickaxe", "stone"], "armor": true}"#,
/// )
/// .unwrap();
/// assert!(config.mainhand);
/// assert!(config.armor);
/// assert_eq!(config.default_token, "none");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EquippedItemConfig {
    /// Tracked item identifiers, without namespace.
    pub items: Vec<String>,
    /// Observe the main hand. Default: true.
    pub mainhand: bool,
    /// Observe the off hand. Default: false.
    pub offhand: bool,
    /// Observe every armor slot. Default: false.
    pub armor: bool,
    /// Token for "nothing equipped". Default: `"none"`.
    #[serde(alias = "default")]
    pub default_token: String,
    /// Token for "untracked item". Default: `"other"`.
    #[serde(alias = "other")]
    pub other_token: String,
    /// Key item types on `type + variant`. Default: false.
    pub use_variants: bool,
}

impl Default for EquippedItemConfig {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            mainhand: true,
            offhand: false,
            armor: false,
            default_token: "none".to_string(),
            other_token: "other".to_string(),
            use_variants: false,
        }
    }
}

impl EquippedItemConfig {
    /// Parse a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The three coverage flags.
    pub fn coverage(&self) -> Coverage {
        Coverage {
            mainhand: self.mainhand,
            offhand: self.offhand,
            armor: self.armor,
        }
    }

    /// Build the observation over `slots`.
    pub fn build(&self, slots: &EquipmentSlots) -> Result<EquippedItemObservation, ConfigError> {
        Ok(EquippedItemObservation::new(self, slots)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(
            EquippedItemConfig::from_json_str("{}").unwrap(),
            EquippedItemConfig::default()
        );
    }

    #[test]
    fn short_token_aliases() {
        let c = EquippedItemConfig::from_json_str(r#"{"default": "empty", "other": "misc"}"#)
            .unwrap();
        assert_eq!(c.default_token, "empty");
        assert_eq!(c.other_token, "misc");
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = EquippedItemConfig::from_json_str(r#"{"items": "stick"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn build_uses_slot_table() {
        let c = EquippedItemConfig {
            mainhand: false,
            armor: true,
            ..Default::default()
        };
        let obs = c.build(&EquipmentSlots::new(["mainhand", "helmet"])).unwrap();
        assert_eq!(obs.root().len(), 1);
        assert!(obs.root().child("helmet").is_some());
    }
}
