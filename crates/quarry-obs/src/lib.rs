//! Translation handlers and equipped-item observations for Quarry.
//!
//! Converts the two raw state dictionaries a Minecraft environment
//! produces (the live per-tick feed and the full snapshot) into one
//! typed, fixed-shape observation. Handlers are built once at
//! environment-definition time and decoded once per tick.
//!
//! - [`ItemTypeHandler`], [`DamageHandler`]: per-slot leaf handlers
//! - [`HandlerGroup`]: named, nestable collection of handlers
//! - [`EquippedItemObservation`]: factory for the per-slot handler tree
//! - [`ReplaceObservation`]: environment decorator swapping one observable

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod damage;
pub mod equipped;
pub mod error;
pub mod group;
pub mod handler;
pub mod item_type;
pub mod slot;
pub mod vocabulary;
pub mod wrapper;

pub use config::EquippedItemConfig;
pub use damage::DamageHandler;
pub use equipped::{Coverage, EquippedItemObservation};
pub use error::ConfigError;
pub use group::HandlerGroup;
pub use handler::{Handler, TranslationHandler};
pub use item_type::ItemTypeHandler;
pub use vocabulary::Vocabulary;
pub use wrapper::{EnvSpec, ReplaceObservation};
