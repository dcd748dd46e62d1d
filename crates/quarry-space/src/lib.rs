//! Space descriptors for Quarry observations.
//!
//! A space describes the shape, type, and bounds of one decoded value.
//! Handlers own a descriptor and guarantee every value they produce is
//! a member of it; descriptors never coerce values themselves.
//!
//! # Variants
//!
//! - [`EnumSpace`]: one token out of a closed, sorted vocabulary
//! - [`BoundedInt`]: an integer in a closed interval `[low, high]`
//! - [`DictSpace`]: named sub-spaces, mirroring a handler group
//!
//! [`SpaceDescriptor`] wraps the three for tagged dispatch.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounded;
pub mod descriptor;
pub mod dict;
pub mod enumeration;
pub mod error;

pub use bounded::BoundedInt;
pub use descriptor::SpaceDescriptor;
pub use dict::DictSpace;
pub use enumeration::EnumSpace;
pub use error::SpaceError;
