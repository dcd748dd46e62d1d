//! Data-format constants and slot resolution for both raw sources.
//!
//! The primary feed nests equipment under [`PRIMARY_SECTION`] and then
//! the slot path. The snapshot has no per-slot section: the main-hand
//! item is found in the flat GUI slot listing by the hotbar offset rule.

use quarry_core::raw::{int_field, str_field, walk};
use quarry_core::SlotPath;
use serde_json::Value;

/// Top-level key of the primary feed holding equipment data.
pub const PRIMARY_SECTION: &str = "equipped_items";

/// Base offset from the end of the GUI slot listing to hotbar slot 0.
pub const HOTBAR_OFFSET: i64 = -9;

/// GUI container type that inserts one extra slot before the hotbar.
pub const PLAYER_CONTAINER: &str = "class net.minecraft.inventory.ContainerPlayer";

/// Item name of an empty slot, after namespace stripping.
pub const EMPTY_ITEM: &str = "air";

/// Terminal node of `path` in a primary-feed dictionary.
pub fn primary_node<'a>(raw: &'a Value, path: &SlotPath) -> Option<&'a Value> {
    let section = raw.as_object()?.get(PRIMARY_SECTION)?;
    walk(section, path.segments())
}

/// Position of the main-hand entry in a GUI listing of `len` slots.
///
/// Returns `None` when the computed position falls outside the listing.
///
/// ```
/// use quarry_obs::slot::{hotbar_index, PLAYER_CONTAINER};
///
/// assert_eq!(hotbar_index(46, 3, "class some.Container"), Some(46 - 9 + 3));
/// assert_eq!(hotbar_index(46, 3, PLAYER_CONTAINER), Some(46 - 10 + 3));
/// assert_eq!(hotbar_index(5, 0, PLAYER_CONTAINER), None);
/// ```
pub fn hotbar_index(len: usize, hotbar: i64, container: &str) -> Option<usize> {
    let mut offset = HOTBAR_OFFSET;
    if container == PLAYER_CONTAINER {
        offset -= 1;
    }
    let len = i64::try_from(len).ok()?;
    let index = len.checked_add(offset)?.checked_add(hotbar)?;
    if (0..len).contains(&index) {
        usize::try_from(index).ok()
    } else {
        None
    }
}

/// Slot entry currently held in the main hand, read from a snapshot.
///
/// Requires `hotbar`, `slots.gui.type`, and `slots.gui.slots`; any
/// absence yields `None`.
pub fn mainhand_entry(raw: &Value) -> Option<&Value> {
    let hotbar = int_field(raw, "hotbar")?;
    let gui = walk(raw, ["slots", "gui"])?;
    let container = str_field(gui, "type")?;
    let slots = gui.as_object()?.get("slots")?.as_array()?;
    let index = hotbar_index(slots.len(), hotbar, container)?;
    slots.get(index)
}

/// Drop a `namespace:` prefix from an item name.
///
/// ```
/// use quarry_obs::slot::strip_namespace;
///
/// assert_eq!(strip_namespace("minecraft:diamond_sword"), "diamond_sword");
/// assert_eq!(strip_namespace("stick"), "stick");
/// ```
pub fn strip_namespace(name: &str) -> &str {
    name.rsplit(':').next().unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn primary_node_requires_section() {
        let raw = json!({"mainhand": {"type": "stick"}});
        assert!(primary_node(&raw, &SlotPath::mainhand()).is_none());

        let raw = json!({"equipped_items": {"mainhand": {"type": "stick"}}});
        assert_eq!(
            primary_node(&raw, &SlotPath::mainhand()),
            Some(&json!({"type": "stick"}))
        );
    }

    #[test]
    fn hotbar_index_player_container_shift() {
        assert_eq!(hotbar_index(46, 0, PLAYER_CONTAINER), Some(36));
        assert_eq!(hotbar_index(46, 8, PLAYER_CONTAINER), Some(44));
        assert_eq!(hotbar_index(45, 8, "other"), Some(44));
    }

    #[test]
    fn hotbar_index_out_of_listing() {
        assert_eq!(hotbar_index(10, 9, "other"), None);
        assert_eq!(hotbar_index(0, 0, "other"), None);
    }

    #[test]
    fn mainhand_entry_reads_listing() {
        let slots: Vec<_> = (0..46).map(|i| json!({"name": format!("item{i}")})).collect();
        let raw = json!({
            "hotbar": 2,
            "slots": {"gui": {"type": PLAYER_CONTAINER, "slots": slots}}
        });
        assert_eq!(mainhand_entry(&raw), Some(&json!({"name": "item38"})));
    }

    #[test]
    fn mainhand_entry_missing_container_type() {
        let raw = json!({"hotbar": 0, "slots": {"gui": {"slots": [{"name": "air"}]}}});
        assert!(mainhand_entry(&raw).is_none());
    }

    #[test]
    fn strip_namespace_custom_namespace() {
        assert_eq!(strip_namespace("modded:unknown_sword"), "unknown_sword");
    }
}
