//! Raw-dictionary fixtures for both data sources.
//!
//! Slot positions are computed here from first principles rather than
//! through `quarry_obs::slot`, so tests catch regressions in the offset
//! rule instead of reproducing them.

use serde_json::{json, Value};

/// GUI container type of the player inventory screen.
pub const PLAYER_CONTAINER: &str = "class net.minecraft.inventory.ContainerPlayer";

/// GUI container type of any other screen.
pub const OTHER_CONTAINER: &str = "class net.minecraft.inventory.ContainerWorkbench";

/// Primary feed with one populated slot.
pub fn primary_feed(slot: &str, item_type: &str, damage: i64, max_damage: i64) -> Value {
    json!({
        "equipped_items": {
            slot: {"type": item_type, "damage": damage, "maxDamage": max_damage}
        }
    })
}

/// Position of the held item: `len - 9 + hotbar`, one lower for the
/// player inventory.
pub fn held_index(container: &str, hotbar: usize, len: usize) -> usize {
    let shift = if container == PLAYER_CONTAINER { 10 } else { 9 };
    len - shift + hotbar
}

/// Snapshot of `len` GUI slots whose held slot holds `entry`.
///
/// Every other slot holds a distinct `minecraft:filler_<i>` item, so a
/// mis-resolved index decodes to an unrecognised item.
pub fn snapshot_with(container: &str, hotbar: usize, len: usize, entry: Value) -> Value {
    let held = held_index(container, hotbar, len);
    let slots: Vec<Value> = (0..len)
        .map(|i| {
            if i == held {
                entry.clone()
            } else {
                json!({"name": format!("minecraft:filler_{i}"), "damage": 0, "maxDamage": 0})
            }
        })
        .collect();
    json!({
        "hotbar": hotbar,
        "slots": {"gui": {"type": container, "slots": slots}}
    })
}

/// Snapshot whose held slot holds the item `name` with zero damage.
pub fn snapshot(container: &str, hotbar: usize, len: usize, name: &str) -> Value {
    snapshot_with(
        container,
        hotbar,
        len,
        json!({"name": name, "damage": 0, "maxDamage": 0}),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_index_matches_offset_rule() {
        assert_eq!(held_index(OTHER_CONTAINER, 3, 45), 39);
        assert_eq!(held_index(PLAYER_CONTAINER, 3, 46), 39);
    }

    #[test]
    fn snapshot_places_entry() {
        let raw = snapshot(PLAYER_CONTAINER, 0, 46, "minecraft:stick");
        assert_eq!(raw["slots"]["gui"]["slots"][36]["name"], "minecraft:stick");
        assert_eq!(raw["slots"]["gui"]["slots"][35]["name"], "minecraft:filler_35");
    }
}
