//! Manifest engine round-trip tests
//!
//! The compiler and loader are driven by the same schema registry; these
//! tests pin the serialize/deserialize symmetry and the documented lossy
//! edges of the format.

use pretty_assertions::assert_eq;
use serde_json::Value;

use gxmod::{build_manifest, seed_fields, seed_meta, FieldValues, ModMeta};

fn meta() -> ModMeta {
    ModMeta {
        name: "Neon".to_string(),
        developer: "Ada".to_string(),
        description: "A neon skin".to_string(),
    }
}

// =============================================================================
// Round-trip: compile -> seed -> recompile
// =============================================================================

mod roundtrip {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_document_round_trips() {
        let mut fields = FieldValues::new();
        fields.set("background_music", "tracks", "a.mp3, b.mp3");
        fields.set("stickers", "images", "one.png, two.png");
        fields.set("stickers", "preview", "preview.png");
        fields.set("shaders", "path", "crt.txt");
        fields.set("page_styles", "css", "style.css");
        fields.set("page_styles", "matches", "*://*/*");
        fields.set("fonts", "header.name", "Orbitron");
        fields.set("fonts", "variants.path", "orbitron.ttf");
        // both theme sides touched so the document is fully expressible
        fields.set("theme", "dark.gx_accent.h", "120");
        fields.set("theme", "light.gx_secondary_base.l", "90");

        let first = build_manifest(&meta(), &fields).unwrap().manifest;
        let seeded = seed_fields(&first);
        let second = build_manifest(&seed_meta(&first), &seeded).unwrap().manifest;

        assert_eq!(first, second);
    }

    #[test]
    fn test_persisted_json_round_trips_through_serde() {
        let mut fields = FieldValues::new();
        fields.set("wallpaper", "dark.image", "missing-on-disk.png");
        let doc = build_manifest(&meta(), &fields).unwrap().manifest;

        let json = serde_json::to_string_pretty(&doc).unwrap();
        let back: gxmod::Manifest = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, back);
    }

    #[test]
    fn test_loader_never_mutates_the_document() {
        let mut fields = FieldValues::new();
        fields.set("shaders", "path", "crt.txt");
        let doc = build_manifest(&meta(), &fields).unwrap().manifest;
        let snapshot = doc.clone();

        let _ = seed_fields(&doc);
        assert_eq!(doc, snapshot);
    }
}

// =============================================================================
// Idempotence: saving twice with unchanged fields
// =============================================================================

mod idempotence {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_recompiling_unchanged_fields_is_byte_identical() {
        let mut fields = FieldValues::new();
        fields.set("browser_sounds", "sounds.CLICK", "click.wav");
        fields.set("theme", "dark.gx_accent.h", "1");

        let first = build_manifest(&meta(), &fields).unwrap().manifest;
        let second = build_manifest(&meta(), &fields).unwrap().manifest;
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}

// =============================================================================
// Defaulting and emission rules
// =============================================================================

mod defaulting {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_untouched_theme_emits_no_item() {
        let doc = build_manifest(&meta(), &FieldValues::new()).unwrap().manifest;
        assert!(doc.payload_items("theme").unwrap().is_empty());
    }

    #[test]
    fn test_single_channel_pulls_defaults_for_the_rest_of_its_side() {
        let mut fields = FieldValues::new();
        fields.set("theme", "dark.gx_secondary_base.s", "40");
        let doc = build_manifest(&meta(), &fields).unwrap().manifest;

        let item = &doc.payload_items("theme").unwrap()[0];
        assert_eq!(item["dark"]["gx_accent"]["h"], 211);
        assert_eq!(item["dark"]["gx_accent"]["s"], 100);
        assert_eq!(item["dark"]["gx_accent"]["l"], 54);
        assert_eq!(item["dark"]["gx_secondary_base"]["h"], 234);
        assert_eq!(item["dark"]["gx_secondary_base"]["s"], 40);
        assert_eq!(item["dark"]["gx_secondary_base"]["l"], 16);
        assert!(item.get("light").is_none());
    }

    #[test]
    fn test_seeded_defaults_recompile_to_the_documented_triples() {
        let mut fields = FieldValues::new();
        fields.set("theme", "dark.gx_accent.h", "120");
        let first = build_manifest(&meta(), &fields).unwrap().manifest;

        // loading seeds the absent light side with defaults; recompiling
        // therefore materializes it
        let seeded = seed_fields(&first);
        let second = build_manifest(&meta(), &seeded).unwrap().manifest;
        let item = &second.payload_items("theme").unwrap()[0];
        assert_eq!(item["light"]["gx_accent"]["h"], 224);
        assert_eq!(item["light"]["gx_accent"]["s"], 100);
        assert_eq!(item["light"]["gx_accent"]["l"], 66);
        assert_eq!(item["light"]["gx_secondary_base"]["h"], 210);
        assert_eq!(item["light"]["gx_secondary_base"]["s"], 47);
        assert_eq!(item["light"]["gx_secondary_base"]["l"], 88);
    }

    #[test]
    fn test_blank_singleton_emits_empty_array_not_placeholder() {
        let doc = build_manifest(&meta(), &FieldValues::new()).unwrap().manifest;
        for key in ["app_icon", "wallpaper", "background_music", "splash_screen", "stickers"] {
            assert_eq!(doc.payload_items(key).unwrap().len(), 0, "{key}");
        }
    }

    #[test]
    fn test_every_category_key_present_even_when_empty() {
        let doc = build_manifest(&meta(), &FieldValues::new()).unwrap().manifest;
        assert_eq!(doc.mod_section.payload.len(), gxmod::schema::CATEGORIES.len());
        for (_, items) in doc.mod_section.payload.iter() {
            assert!(matches!(items, Value::Array(_)));
        }
    }
}

// =============================================================================
// Documented lossy edges
// =============================================================================

mod lossy_edges {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_excess_shader_entries_do_not_survive_reload() {
        let mut fields = FieldValues::new();
        fields.set("shaders", "path", "first.txt");
        let mut doc = build_manifest(&meta(), &fields).unwrap().manifest;

        let items = doc
            .mod_section
            .payload
            .get_mut("shaders")
            .and_then(Value::as_array_mut)
            .unwrap();
        items.push(serde_json::json!({"name": "Neon Shader", "path": "second.txt"}));
        items.push(serde_json::json!({"name": "Neon Shader", "path": "third.txt"}));

        let seeded = seed_fields(&doc);
        let recompiled = build_manifest(&meta(), &seeded).unwrap().manifest;
        assert_eq!(recompiled.payload_items("shaders").unwrap().len(), 1);
    }

    #[test]
    fn test_sparse_per_field_population_shifts_on_reload() {
        // populating a late slot stores one object, which reloads into the
        // first slot's position check and comes back empty
        let mut fields = FieldValues::new();
        fields.set("browser_sounds", "sounds.TAB_CLOSE", "close.wav");
        let doc = build_manifest(&meta(), &fields).unwrap().manifest;

        let seeded = seed_fields(&doc);
        assert!(!seeded.is_populated("browser_sounds", "sounds.TAB_CLOSE"));
    }
}

// =============================================================================
// CSV handling
// =============================================================================

mod csv {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_and_join_are_inverse_for_canonical_text() {
        let mut fields = FieldValues::new();
        fields.set("background_music", "tracks", "a.mp3, b.mp3, c.mp3");
        let doc = build_manifest(&meta(), &fields).unwrap().manifest;

        let item = &doc.payload_items("background_music").unwrap()[0];
        assert_eq!(
            item["tracks"],
            serde_json::json!(["a.mp3", "b.mp3", "c.mp3"])
        );

        let seeded = seed_fields(&doc);
        assert_eq!(seeded.get("background_music", "tracks"), "a.mp3, b.mp3, c.mp3");
    }

    #[test]
    fn test_ragged_csv_normalizes_on_compile() {
        let mut fields = FieldValues::new();
        fields.set("stickers", "images", " one.png ,,two.png,  ");
        let doc = build_manifest(&meta(), &fields).unwrap().manifest;

        let item = &doc.payload_items("stickers").unwrap()[0];
        assert_eq!(item["images"], serde_json::json!(["one.png", "two.png"]));
    }
}
