//! Quarry: two-source observation translation for Minecraft RL environments.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Quarry sub-crates. For most users, adding `quarry` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use quarry::prelude::*;
//! use serde_json::json;
//!
//! let config = EquippedItemConfig::from_json_str(
//!     r#"{"items": ["diamond_sword", "stick"], "offhand": true}"#,
//! )
//! .unwrap();
//! let obs = config.build(&EquipmentSlots::minecraft()).unwrap();
//!
//! // Live feed: the main hand holds an untracked item, the off hand is absent.
//! let feed = json!({
//!     "equipped_items": {
//!         "mainhand": {"type": "golden_apple", "damage": 0, "maxDamage": 0}
//!     }
//! });
//! let out = obs.decode_primary(&feed).unwrap().into_value();
//! assert_eq!(
//!     out.to_json(),
//!     json!({
//!         "mainhand": {"type": "other", "damage": 0, "maxDamage": 0},
//!         "offhand": {"type": "none", "damage": 0, "maxDamage": 0}
//!     })
//! );
//!
//! // The snapshot source only resolves the main hand.
//! let snapshot = json!({"hotbar": 0, "slots": {"gui": {"type": "x", "slots": []}}});
//! assert!(matches!(
//!     obs.decode_secondary(&snapshot),
//!     Err(TranslateError::UnsupportedSlot { .. })
//! ));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `quarry-core` | Decoded values, outcomes, slot paths, errors |
//! | [`space`] | `quarry-space` | Enumeration, bounded-integer, and dict spaces |
//! | [`obs`] | `quarry-obs` | Handlers, groups, equipped-item factory, wrapper |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, outcomes, and errors (`quarry-core`).
///
/// Contains [`types::ObsValue`], [`types::Outcome`], [`types::SlotPath`],
/// [`types::EquipmentSlots`], and the error taxonomy.
pub use quarry_core as types;

/// Space descriptors (`quarry-space`).
///
/// [`space::EnumSpace`], [`space::BoundedInt`], [`space::DictSpace`], and
/// the tagged [`space::SpaceDescriptor`].
pub use quarry_space as space;

/// Translation handlers and observations (`quarry-obs`).
///
/// Build an [`obs::EquippedItemObservation`] from an
/// [`obs::EquippedItemConfig`] and decode raw dictionaries through the
/// [`obs::TranslationHandler`] trait.
pub use quarry_obs as obs;

/// Common imports for typical Quarry usage.
///
/// ```rust
/// use quarry::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use quarry_core::{
        EquipmentSlots, FallbackCause, ObsValue, Outcome, SlotPath,
    };

    // Errors
    pub use quarry_core::{BuildError, TranslateError};
    pub use quarry_obs::ConfigError;

    // Spaces
    pub use quarry_space::SpaceDescriptor;

    // Handlers
    pub use quarry_obs::{
        DamageHandler, EquippedItemConfig, EquippedItemObservation, Handler, HandlerGroup,
        ItemTypeHandler, TranslationHandler, Vocabulary,
    };
}
