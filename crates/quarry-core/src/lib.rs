//! Core types for the Quarry observation translation framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the decoded value type, the per-call decode outcome, slot paths,
//! the equipment slot table, and the error taxonomy shared by every
//! translation handler.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod outcome;
pub mod raw;
pub mod value;

pub use error::{BuildError, TokenRole, TranslateError};
pub use id::{EquipmentSlots, SlotPath};
pub use outcome::{FallbackCause, Outcome};
pub use value::ObsValue;
