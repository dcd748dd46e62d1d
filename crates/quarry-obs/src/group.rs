//! Named, ordered groups of handlers.

use indexmap::IndexMap;
use quarry_core::{BuildError, ObsValue, Outcome, TranslateError};
use quarry_space::{DictSpace, SpaceDescriptor};
use serde_json::Value;

use crate::handler::{Handler, TranslationHandler};

/// An ordered collection of handlers decoded into one keyed mapping.
///
/// Child names are unique within a group, so each child owns one key of
/// the output. Groups nest: a child may itself be a group.
///
/// # Examples
///
/// ```
/// use quarry_core::SlotPath;
/// use quarry_obs::{DamageHandler, HandlerGroup, TranslationHandler};
/// use serde_json::json;
///
/// let group = HandlerGroup::new(
///     "mainhand",
///     vec![
///         DamageHandler::new(SlotPath::mainhand(), "damage").into(),
///         DamageHandler::new(SlotPath::mainhand(), "maxDamage").into(),
///     ],
/// )
/// .unwrap();
///
/// let feed = json!({"equipped_items": {"mainhand": {"damage": 3, "maxDamage": 59}}});
/// let out = group.decode_primary(&feed).unwrap().into_value();
/// assert_eq!(out.to_json(), json!({"damage": 3, "maxDamage": 59}));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HandlerGroup {
    name: String,
    children: Vec<Handler>,
}

impl HandlerGroup {
    /// Create a group.
    ///
    /// Returns `Err(BuildError::DuplicateChild)` if two children share a name.
    pub fn new(name: impl Into<String>, children: Vec<Handler>) -> Result<Self, BuildError> {
        let name = name.into();
        for (i, child) in children.iter().enumerate() {
            if children[..i].iter().any(|c| c.name() == child.name()) {
                return Err(BuildError::DuplicateChild {
                    group: name,
                    child: child.name().to_string(),
                });
            }
        }
        Ok(Self { name, children })
    }

    /// Children in order.
    pub fn children(&self) -> &[Handler] {
        &self.children
    }

    /// Child named `name`.
    pub fn child(&self, name: &str) -> Option<&Handler> {
        self.children.iter().find(|c| c.name() == name)
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if the group has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Union of two groups with the same name.
    ///
    /// Children present on both sides merge; children only on the right
    /// are appended after the left's children.
    pub fn merge(&self, other: &Self) -> Result<Self, BuildError> {
        if self.name != other.name {
            return Err(BuildError::MismatchedTarget {
                reason: format!("groups '{}' and '{}'", self.name, other.name),
            });
        }
        let mut children = Vec::with_capacity(self.children.len().max(other.children.len()));
        for child in &self.children {
            match other.child(child.name()) {
                Some(theirs) => children.push(child.merge(theirs)?),
                None => children.push(child.clone()),
            }
        }
        for theirs in &other.children {
            if self.child(theirs.name()).is_none() {
                children.push(theirs.clone());
            }
        }
        Self::new(self.name.clone(), children)
    }

    fn decode_with<F>(&self, decode: F) -> Result<Outcome<ObsValue>, TranslateError>
    where
        F: Fn(&Handler) -> Result<Outcome<ObsValue>, TranslateError>,
    {
        let mut out = IndexMap::with_capacity(self.children.len());
        for child in &self.children {
            out.insert(child.name().to_string(), decode(child)?.into_value());
        }
        Ok(Outcome::Value(ObsValue::Map(out)))
    }
}

impl TranslationHandler for HandlerGroup {
    fn name(&self) -> &str {
        &self.name
    }

    fn space(&self) -> SpaceDescriptor {
        SpaceDescriptor::Dict(
            self.children
                .iter()
                .map(|c| (c.name().to_string(), c.space()))
                .collect::<DictSpace>(),
        )
    }

    /// Decode every child from the primary feed.
    ///
    /// Per-child fallbacks are folded into the map; a group's own
    /// outcome is always a `Value`.
    fn decode_primary(&self, raw: &Value) -> Result<Outcome<ObsValue>, TranslateError> {
        self.decode_with(|c| c.decode_primary(raw))
    }

    fn decode_secondary(&self, raw: &Value) -> Result<Outcome<ObsValue>, TranslateError> {
        self.decode_with(|c| c.decode_secondary(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::damage::DamageHandler;
    use crate::item_type::ItemTypeHandler;
    use quarry_core::SlotPath;
    use quarry_test_utils::primary_feed;

    fn slot_group(slot: &str, items: &[&str]) -> HandlerGroup {
        let path = SlotPath::new([slot]);
        HandlerGroup::new(
            slot,
            vec![
                ItemTypeHandler::new(path.clone(), items.iter().copied(), "none", "other", false)
                    .unwrap()
                    .into(),
                DamageHandler::new(path.clone(), "damage").into(),
                DamageHandler::new(path, "maxDamage").into(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn duplicate_children_rejected() {
        let err = HandlerGroup::new(
            "mainhand",
            vec![
                DamageHandler::new(SlotPath::mainhand(), "damage").into(),
                DamageHandler::new(SlotPath::mainhand(), "damage").into(),
            ],
        )
        .unwrap_err();
        assert_eq!(
            err,
            BuildError::DuplicateChild {
                group: "mainhand".into(),
                child: "damage".into()
            }
        );
    }

    #[test]
    fn decode_keeps_child_order() {
        let g = slot_group("mainhand", &["stick", "none", "other"]);
        let out = g
            .decode_primary(&primary_feed("mainhand", "stick", 0, 59))
            .unwrap()
            .into_value();
        let keys: Vec<&str> = out.as_map().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["type", "damage", "maxDamage"]);
        assert_eq!(out.get("maxDamage"), Some(&ObsValue::Int(59)));
    }

    #[test]
    fn space_mirrors_children() {
        let g = slot_group("mainhand", &["stick", "none", "other"]);
        let space = g.space();
        let default = space.default_value();
        assert!(space.contains(&default));
        assert_eq!(default.get("type").and_then(ObsValue::as_token), Some("none"));
    }

    #[test]
    fn nested_groups_decode_nested_maps() {
        let root = HandlerGroup::new(
            "equipped_items",
            vec![slot_group("mainhand", &["stick", "none", "other"]).into()],
        )
        .unwrap();
        let out = root
            .decode_primary(&primary_feed("mainhand", "stick", 1, 59))
            .unwrap()
            .into_value();
        assert_eq!(
            out.lookup(["mainhand", "type"]).and_then(ObsValue::as_token),
            Some("stick")
        );
    }

    #[test]
    fn merge_unions_children() {
        let a = HandlerGroup::new(
            "root",
            vec![slot_group("mainhand", &["stick", "none", "other"]).into()],
        )
        .unwrap();
        let b = HandlerGroup::new(
            "root",
            vec![
                slot_group("mainhand", &["apple", "none", "other"]).into(),
                slot_group("head", &["iron_helmet", "none", "other"]).into(),
            ],
        )
        .unwrap();
        let m = a.merge(&b).unwrap();
        assert_eq!(m.len(), 2);
        let names: Vec<&str> = m.children().iter().map(|c| c.name()).collect();
        assert_eq!(names, ["mainhand", "head"]);

        let Some(Handler::Group(mainhand)) = m.child("mainhand") else {
            panic!("mainhand should be a group");
        };
        let Some(Handler::ItemType(item)) = mainhand.child("type") else {
            panic!("type should be an item-type handler");
        };
        assert!(item.enum_space().contains("stick"));
        assert!(item.enum_space().contains("apple"));
    }

    #[test]
    fn merge_rejects_different_names() {
        let a = slot_group("mainhand", &["none", "other"]);
        let b = slot_group("offhand", &["none", "other"]);
        assert!(matches!(
            a.merge(&b),
            Err(BuildError::MismatchedTarget { .. })
        ));
    }

    #[test]
    fn equality_is_structural_and_ordered() {
        let a = slot_group("mainhand", &["stick", "none", "other"]);
        assert_eq!(a, slot_group("mainhand", &["other", "stick", "none"]));
        let reordered = HandlerGroup::new(
            "mainhand",
            a.children().iter().rev().cloned().collect(),
        )
        .unwrap();
        assert_ne!(a, reordered);
    }
}
