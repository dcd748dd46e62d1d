//! Tagged space descriptor.

use quarry_core::ObsValue;

use crate::bounded::BoundedInt;
use crate::dict::DictSpace;
use crate::enumeration::EnumSpace;

/// Shape, type, and bounds of one decoded value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceDescriptor {
    /// One token out of a closed vocabulary.
    Enum(EnumSpace),
    /// An integer in a closed range.
    BoundedInt(BoundedInt),
    /// Named sub-spaces.
    Dict(DictSpace),
}

impl SpaceDescriptor {
    /// Short variant name, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Enum(_) => "enum",
            Self::BoundedInt(_) => "bounded_int",
            Self::Dict(_) => "dict",
        }
    }

    /// The descriptor's default value.
    pub fn default_value(&self) -> ObsValue {
        match self {
            Self::Enum(s) => s.default_value(),
            Self::BoundedInt(s) => s.default_value(),
            Self::Dict(s) => s.default_value(),
        }
    }

    /// Returns `true` if `value` is a member of this space.
    ///
    /// An enumeration value must carry both a member token and that
    /// token's index.
    pub fn contains(&self, value: &ObsValue) -> bool {
        match (self, value) {
            (Self::Enum(s), ObsValue::Enum { token, index }) => {
                s.index_of(token) == Some(*index)
            }
            (Self::BoundedInt(s), ObsValue::Int(v)) => s.contains(*v),
            (Self::Dict(s), ObsValue::Map(m)) => s.contains(m),
            _ => false,
        }
    }
}

impl From<EnumSpace> for SpaceDescriptor {
    fn from(s: EnumSpace) -> Self {
        Self::Enum(s)
    }
}

impl From<BoundedInt> for SpaceDescriptor {
    fn from(s: BoundedInt) -> Self {
        Self::BoundedInt(s)
    }
}

impl From<DictSpace> for SpaceDescriptor {
    fn from(s: DictSpace) -> Self {
        Self::Dict(s)
    }
}
