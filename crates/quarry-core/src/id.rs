//! Slot paths and the equipment slot table.

use smallvec::SmallVec;
use std::fmt;

/// Slot identifier of the main hand.
pub const MAINHAND: &str = "mainhand";

/// Slot identifier of the off hand.
pub const OFFHAND: &str = "offhand";

/// Ordered key sequence locating one equipment slot inside a raw dictionary.
///
/// Every slot in use today is a single segment (`["mainhand"]`,
/// `["head"]`). Longer paths are representable so handlers can be
/// declared for nested slot layouts; the snapshot decode path rejects them.
///
/// # Examples
///
/// ```
/// use quarry_core::SlotPath;
///
/// let path = SlotPath::new(["mainhand"]);
/// assert!(path.is_mainhand());
/// assert_eq!(path.joined("_"), "mainhand");
///
/// let nested = SlotPath::new(["armor", "head"]);
/// assert!(!nested.is_mainhand());
/// assert_eq!(nested.to_string(), "[armor, head]");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotPath(SmallVec<[String; 2]>);

impl SlotPath {
    /// Build a path from its segments.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// The single-segment main-hand path.
    pub fn mainhand() -> Self {
        Self::new([MAINHAND])
    }

    /// Path segments in order.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` for exactly `["mainhand"]`.
    pub fn is_mainhand(&self) -> bool {
        self.0.len() == 1 && self.0[0] == MAINHAND
    }

    /// Segments joined by `sep`. Used to name per-slot groups.
    pub fn joined(&self, sep: &str) -> String {
        self.0.join(sep)
    }
}

impl fmt::Display for SlotPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

/// Immutable table of equipment slot identifiers.
///
/// Passed explicitly to the observation factory so the slot coverage
/// of a handler tree depends only on its inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EquipmentSlots {
    slots: Vec<String>,
}

impl EquipmentSlots {
    /// Build a table from slot identifiers. Duplicates are dropped,
    /// keeping the first occurrence.
    pub fn new<I, S>(slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for slot in slots {
            let slot = slot.into();
            if !out.contains(&slot) {
                out.push(slot);
            }
        }
        Self { slots: out }
    }

    /// The Minecraft player equipment slots.
    pub fn minecraft() -> Self {
        Self::new([MAINHAND, OFFHAND, "head", "chest", "legs", "feet"])
    }

    /// All slot identifiers in table order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(String::as_str)
    }

    /// Slot identifiers other than the two hands, in table order.
    pub fn armor(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|s| *s != MAINHAND && *s != OFFHAND)
    }

    /// Number of slots in the table.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the table has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for EquipmentSlots {
    fn default() -> Self {
        Self::minecraft()
    }
}
