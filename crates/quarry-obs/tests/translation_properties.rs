//! End-to-end decode and union properties of equipped-item observations.
//!
//! Each test builds a handler tree from configuration, feeds it raw
//! dictionaries from both sources, and checks the decoded mapping.

use proptest::prelude::*;
use quarry_core::{EquipmentSlots, FallbackCause, ObsValue, SlotPath, TranslateError};
use quarry_obs::{
    DamageHandler, EquippedItemConfig, EquippedItemObservation, ItemTypeHandler,
    TranslationHandler,
};
use quarry_test_utils::{primary_feed, snapshot, OTHER_CONTAINER, PLAYER_CONTAINER};
use serde_json::json;

// ── Helpers ─────────────────────────────────────────────────────

/// Route fallback trace events to the test writer (`RUST_LOG=trace`).
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn observation(items: &[&str], mainhand: bool, offhand: bool, armor: bool) -> EquippedItemObservation {
    EquippedItemConfig {
        items: items.iter().map(|s| s.to_string()).collect(),
        mainhand,
        offhand,
        armor,
        ..Default::default()
    }
    .build(&EquipmentSlots::minecraft())
    .unwrap()
}

fn sword_handler() -> ItemTypeHandler {
    ItemTypeHandler::new(
        SlotPath::mainhand(),
        ["diamond_sword", "none", "other"],
        "none",
        "other",
        false,
    )
    .unwrap()
}

fn token_at<'a>(out: &'a ObsValue, slot: &str) -> &'a str {
    out.lookup([slot, "type"])
        .and_then(ObsValue::as_token)
        .unwrap()
}

// ── Primary source ──────────────────────────────────────────────

#[test]
fn empty_primary_is_default_token() {
    init_tracing();
    let out = sword_handler().decode_primary(&json!({})).unwrap();
    assert_eq!(out.value().as_token(), Some("none"));
}

#[test]
fn unknown_primary_type_is_other_token() {
    let out = sword_handler()
        .decode_primary(&primary_feed("mainhand", "modded:unknown_sword", 0, 0))
        .unwrap();
    assert_eq!(out.value().as_token(), Some("other"));
}

#[test]
fn damage_missing_field_is_zero() {
    let h = DamageHandler::new(SlotPath::mainhand(), "damage");
    let out = h
        .decode_primary(&json!({"equipped_items": {"mainhand": {"type": "diamond_sword"}}}))
        .unwrap();
    assert_eq!(out.value(), &ObsValue::Int(0));
    assert_eq!(out.cause(), Some(FallbackCause::Missing));
}

#[test]
fn full_tree_decodes_every_slot() {
    let obs = observation(&["diamond_sword", "shield", "iron_helmet"], true, true, true);
    let feed = json!({
        "equipped_items": {
            "mainhand": {"type": "diamond_sword", "damage": 40, "maxDamage": 1561},
            "offhand": {"type": "shield", "damage": 2, "maxDamage": 336},
            "head": {"type": "iron_helmet", "damage": 1, "maxDamage": 165},
            "feet": {"type": "leather_boots", "damage": 0, "maxDamage": 65}
        }
    });
    let out = obs.decode_primary(&feed).unwrap().into_value();
    assert_eq!(token_at(&out, "mainhand"), "diamond_sword");
    assert_eq!(token_at(&out, "offhand"), "shield");
    assert_eq!(token_at(&out, "head"), "iron_helmet");
    assert_eq!(token_at(&out, "chest"), "none");
    assert_eq!(token_at(&out, "feet"), "other");
    assert_eq!(
        out.lookup(["feet", "maxDamage"]).and_then(ObsValue::as_int),
        Some(65)
    );
    assert!(obs.space().contains(&out));
}

// ── Secondary source ────────────────────────────────────────────

#[test]
fn hotbar_offset_other_container() {
    let h = sword_handler();
    let raw = snapshot(OTHER_CONTAINER, 3, 45, "minecraft:diamond_sword");
    assert_eq!(raw["slots"]["gui"]["slots"][45 - 9 + 3]["name"], "minecraft:diamond_sword");
    let out = h.decode_secondary(&raw).unwrap();
    assert_eq!(out.value().as_token(), Some("diamond_sword"));
    assert!(!out.is_fallback());
}

#[test]
fn hotbar_offset_player_container() {
    let h = sword_handler();
    let raw = snapshot(PLAYER_CONTAINER, 3, 46, "minecraft:diamond_sword");
    assert_eq!(raw["slots"]["gui"]["slots"][46 - 10 + 3]["name"], "minecraft:diamond_sword");
    assert_eq!(
        h.decode_secondary(&raw).unwrap().value().as_token(),
        Some("diamond_sword")
    );
}

#[test]
fn air_is_default_and_unknown_is_other() {
    init_tracing();
    let h = sword_handler();
    let air = h
        .decode_secondary(&snapshot(PLAYER_CONTAINER, 1, 46, "minecraft:air"))
        .unwrap();
    assert_eq!(air.value().as_token(), Some("none"));
    assert_eq!(air.cause(), Some(FallbackCause::EmptySlot));

    let dirt = h
        .decode_secondary(&snapshot(PLAYER_CONTAINER, 1, 46, "minecraft:dirt"))
        .unwrap();
    assert_eq!(dirt.value().as_token(), Some("other"));
    assert_eq!(dirt.cause(), Some(FallbackCause::OutOfVocabulary));
}

#[test]
fn secondary_on_multi_segment_path_is_unsupported() {
    let h = ItemTypeHandler::new(
        SlotPath::new(["mainhand", "nested"]),
        ["none", "other"],
        "none",
        "other",
        false,
    )
    .unwrap();
    let raw = snapshot(PLAYER_CONTAINER, 0, 46, "minecraft:stick");
    assert!(matches!(
        h.decode_secondary(&raw),
        Err(TranslateError::UnsupportedSlot { .. })
    ));
}

#[test]
fn secondary_unsupported_propagates_through_question_mark() {
    fn decode_all(obs: &EquippedItemObservation) -> Result<ObsValue, TranslateError> {
        Ok(obs
            .decode_secondary(&snapshot(PLAYER_CONTAINER, 0, 46, "minecraft:stick"))?
            .into_value())
    }
    assert!(decode_all(&observation(&["stick"], true, false, false)).is_ok());
    assert!(decode_all(&observation(&["stick"], true, false, true)).is_err());
}

// ── Union ───────────────────────────────────────────────────────

#[test]
fn handler_union_recognises_both_vocabularies() {
    let a = sword_handler();
    let b = ItemTypeHandler::new(
        SlotPath::mainhand(),
        ["wooden_pickaxe", "none", "other"],
        "none",
        "other",
        false,
    )
    .unwrap();
    let u = a.merge(&b).unwrap();
    let mut expected: Vec<&str> = a.enum_space().tokens().chain(b.enum_space().tokens()).collect();
    expected.sort();
    expected.dedup();
    assert_eq!(u.enum_space().tokens().collect::<Vec<_>>(), expected);

    for item in ["diamond_sword", "wooden_pickaxe"] {
        let out = u
            .decode_primary(&primary_feed("mainhand", item, 0, 0))
            .unwrap();
        assert_eq!(out.value().as_token(), Some(item));
    }
}

fn arb_items() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,6}(_[a-z]{1,6})?", 0..10)
}

proptest! {
    #[test]
    fn observation_union_preserves_flags_and_vocabulary(
        a_items in arb_items(),
        b_items in arb_items(),
        a_flags in any::<(bool, bool, bool)>(),
        b_flags in any::<(bool, bool, bool)>(),
    ) {
        let build = |items: &[String], (m, o, r): (bool, bool, bool)| {
            EquippedItemConfig {
                items: items.to_vec(),
                mainhand: m,
                offhand: o,
                armor: r,
                ..Default::default()
            }
            .build(&EquipmentSlots::minecraft())
            .unwrap()
        };
        let a = build(&a_items, a_flags);
        let b = build(&b_items, b_flags);
        let u = a.union(&b).unwrap();

        prop_assert_eq!(u.coverage().mainhand, a_flags.0 || b_flags.0);
        prop_assert_eq!(u.coverage().offhand, a_flags.1 || b_flags.1);
        prop_assert_eq!(u.coverage().armor, a_flags.2 || b_flags.2);
        for item in a.vocabulary().items().iter().chain(b.vocabulary().items()) {
            prop_assert!(u.vocabulary().contains(item));
        }
    }

    #[test]
    fn any_primary_type_decodes_into_space(item in "[a-z:_]{0,12}", damage in -5i64..2000) {
        let obs = observation(&["stick", "diamond_sword"], true, false, false);
        let out = obs
            .decode_primary(&primary_feed("mainhand", &item, damage, 0))
            .unwrap()
            .into_value();
        prop_assert!(obs.space().contains(&out));
    }
}
