//! Named collection of sub-spaces.

use indexmap::IndexMap;
use quarry_core::ObsValue;

use crate::descriptor::SpaceDescriptor;

/// Child name to child space, in insertion order.
///
/// The shape of a handler group: one entry per child handler.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DictSpace {
    entries: IndexMap<String, SpaceDescriptor>,
}

impl DictSpace {
    /// An empty dictionary space.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the sub-space `name`.
    pub fn insert(&mut self, name: impl Into<String>, space: SpaceDescriptor) {
        self.entries.insert(name.into(), space);
    }

    /// Sub-space `name`.
    pub fn get(&self, name: &str) -> Option<&SpaceDescriptor> {
        self.entries.get(name)
    }

    /// Entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SpaceDescriptor)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of sub-spaces.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no sub-spaces.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A map value holding every sub-space's default.
    pub fn default_value(&self) -> ObsValue {
        ObsValue::Map(
            self.entries
                .iter()
                .map(|(k, v)| (k.clone(), v.default_value()))
                .collect(),
        )
    }

    /// Returns `true` if `entries` has exactly this space's keys, in
    /// order, each a member of its sub-space.
    pub fn contains(&self, entries: &IndexMap<String, ObsValue>) -> bool {
        entries.len() == self.entries.len()
            && self
                .entries
                .iter()
                .zip(entries.iter())
                .all(|((ks, space), (kv, value))| ks == kv && space.contains(value))
    }
}

impl FromIterator<(String, SpaceDescriptor)> for DictSpace {
    fn from_iter<I: IntoIterator<Item = (String, SpaceDescriptor)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
