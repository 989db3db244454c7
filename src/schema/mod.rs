//! @acp:module "Payload Schema Registry"
//! @acp:summary "Static table of payload categories, field layouts and file-picker filters"
//! @acp:domain cli
//! @acp:layer model
//!
//! Single source of truth consumed by both the manifest compiler and the
//! manifest loader, which is what guarantees serialize/deserialize symmetry:
//! both sides walk the same ordered field lists and dispatch on the same
//! cardinality variant.
//!
//! The table is fixed at compile time. There is no mutation contract.

/// Leaf type of a field slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Literal text (or an asset path, classified at save time)
    Text,
    /// Comma-separated list, stored as a JSON array
    CsvList,
    /// Integer with a documented default applied to blank entries
    Integer { default: i64 },
}

/// One dotted field slot within a category
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Dotted path as it appears in manifest item objects ("dark.image")
    pub path: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    const fn text(path: &'static str) -> Self {
        Self {
            path,
            kind: FieldKind::Text,
        }
    }

    const fn csv(path: &'static str) -> Self {
        Self {
            path,
            kind: FieldKind::CsvList,
        }
    }

    const fn int(path: &'static str, default: i64) -> Self {
        Self {
            path,
            kind: FieldKind::Integer { default },
        }
    }

    /// Default for Integer slots, None otherwise
    pub fn integer_default(&self) -> Option<i64> {
        match self.kind {
            FieldKind::Integer { default } => Some(default),
            _ => None,
        }
    }

    /// Last dotted segment ("dark.image" -> "image")
    pub fn sub_category(&self) -> &'static str {
        self.path.rsplit('.').next().unwrap_or(self.path)
    }

    /// Whether this slot may hold an asset path that should be ingested.
    /// A slot qualifies by name only; whether a concrete value is treated as
    /// an asset is decided at save time by checking that the file exists.
    pub fn is_asset_slot(&self) -> bool {
        self.path == "path" || self.path.ends_with("image")
    }
}

/// Serialization shape of a category. Dispatch is exhaustive: a new category
/// must pick a variant, it cannot fall into a default branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// One item object carrying many fields (app_icon, wallpaper, ...)
    Singleton,
    /// Many items, one scalar field each (shaders)
    List,
    /// One single-field object appended per populated field (sounds, fonts,
    /// overrides, page styles)
    PerField,
    /// Exactly one nested multi-field structure with defaults (theme)
    FixedStruct,
}

/// Schema entry for one payload category
#[derive(Debug, Clone, Copy)]
pub struct PayloadCategory {
    /// Unique manifest key
    pub key: &'static str,
    /// Human-readable label for CLI listings
    pub label: &'static str,
    pub cardinality: Cardinality,
    /// Ordered field slots; order is load-bearing for List and PerField
    pub fields: &'static [FieldSpec],
}

/// The full registry, in manifest payload order
pub const CATEGORIES: &[PayloadCategory] = &[
    PayloadCategory {
        key: "app_icon",
        label: "App Icon",
        cardinality: Cardinality::Singleton,
        fields: &[
            FieldSpec::text("id"),
            FieldSpec::text("name"),
            FieldSpec::text("path"),
        ],
    },
    PayloadCategory {
        key: "wallpaper",
        label: "Wallpaper",
        cardinality: Cardinality::Singleton,
        fields: &[
            FieldSpec::text("id"),
            FieldSpec::text("name"),
            FieldSpec::text("dark.image"),
            FieldSpec::text("light.image"),
        ],
    },
    PayloadCategory {
        key: "background_music",
        label: "Background Music",
        cardinality: Cardinality::Singleton,
        fields: &[FieldSpec::csv("tracks")],
    },
    PayloadCategory {
        key: "browser_sounds",
        label: "Browser Sounds",
        cardinality: Cardinality::PerField,
        fields: &[
            FieldSpec::text("sounds.CLICK"),
            FieldSpec::text("sounds.FEATURE_SWITCH_OFF"),
            FieldSpec::text("sounds.FEATURE_SWITCH_ON"),
            FieldSpec::text("sounds.HOVER"),
            FieldSpec::text("sounds.HOVER_UP"),
            FieldSpec::text("sounds.IMPORTANT_CLICK"),
            FieldSpec::text("sounds.LEVEL_UPGRADE"),
            FieldSpec::text("sounds.LIMITER_OFF"),
            FieldSpec::text("sounds.LIMITER_ON"),
            FieldSpec::text("sounds.SWITCH_TOGGLE"),
            FieldSpec::text("sounds.TAB_CLOSE"),
            FieldSpec::text("sounds.TAB_INSERT"),
            FieldSpec::text("sounds.TAB_SLASH"),
        ],
    },
    PayloadCategory {
        key: "keyboard_sounds",
        label: "Keyboard Sounds",
        cardinality: Cardinality::PerField,
        fields: &[
            FieldSpec::text("sounds.TYPING_BACKSPACE"),
            FieldSpec::text("sounds.TYPING_ENTER"),
            FieldSpec::text("sounds.TYPING_LETTER"),
            FieldSpec::text("sounds.TYPING_SPACE"),
        ],
    },
    PayloadCategory {
        key: "fonts",
        label: "Fonts",
        cardinality: Cardinality::PerField,
        fields: &[
            FieldSpec::text("header.name"),
            FieldSpec::text("variants.path"),
        ],
    },
    PayloadCategory {
        key: "image_overrides",
        label: "Image Overrides",
        cardinality: Cardinality::PerField,
        fields: &[
            FieldSpec::text("images.sidebar_bookmarks_button"),
            FieldSpec::text("images.sidebar_gx_booster_button"),
            FieldSpec::text("images.sidebar_limiters_button"),
            FieldSpec::text("images.sidebar_mods_button"),
            FieldSpec::text("images.sidebar_settings_button"),
            FieldSpec::text("images.sidebar_shaders_button"),
        ],
    },
    PayloadCategory {
        key: "mobile_image_overrides",
        label: "Mobile Image Overrides",
        cardinality: Cardinality::PerField,
        fields: &[FieldSpec::text("images.start_page_logo")],
    },
    PayloadCategory {
        key: "page_styles",
        label: "Page Styles",
        cardinality: Cardinality::PerField,
        fields: &[FieldSpec::text("css"), FieldSpec::text("matches")],
    },
    PayloadCategory {
        key: "shaders",
        label: "Shaders",
        cardinality: Cardinality::List,
        fields: &[FieldSpec::text("path")],
    },
    PayloadCategory {
        key: "splash_screen",
        label: "Splash Screen",
        cardinality: Cardinality::Singleton,
        fields: &[FieldSpec::text("path")],
    },
    PayloadCategory {
        key: "stickers",
        label: "Stickers",
        cardinality: Cardinality::Singleton,
        fields: &[FieldSpec::csv("images"), FieldSpec::text("preview")],
    },
    PayloadCategory {
        key: "theme",
        label: "Theme",
        cardinality: Cardinality::FixedStruct,
        fields: &[
            FieldSpec::int("dark.gx_accent.h", 211),
            FieldSpec::int("dark.gx_accent.s", 100),
            FieldSpec::int("dark.gx_accent.l", 54),
            FieldSpec::int("dark.gx_secondary_base.h", 234),
            FieldSpec::int("dark.gx_secondary_base.s", 35),
            FieldSpec::int("dark.gx_secondary_base.l", 16),
            FieldSpec::int("light.gx_accent.h", 224),
            FieldSpec::int("light.gx_accent.s", 100),
            FieldSpec::int("light.gx_accent.l", 66),
            FieldSpec::int("light.gx_secondary_base.h", 210),
            FieldSpec::int("light.gx_secondary_base.s", 47),
            FieldSpec::int("light.gx_secondary_base.l", 88),
        ],
    },
];

/// Look up a category by manifest key
pub fn category(key: &str) -> Option<&'static PayloadCategory> {
    CATEGORIES.iter().find(|c| c.key == key)
}

/// All category keys in payload order
pub fn category_keys() -> impl Iterator<Item = &'static str> {
    CATEGORIES.iter().map(|c| c.key)
}

/// File-picker extension patterns per category, for the presentation layer.
/// Theme has no file-backed fields and gets an empty set.
pub fn file_filters(key: &str) -> &'static [&'static str] {
    match key {
        "app_icon" | "wallpaper" | "image_overrides" | "mobile_image_overrides"
        | "splash_screen" | "stickers" => &["*.jpg", "*.png", "*.webp"],
        "background_music" | "browser_sounds" | "keyboard_sounds" => &["*.mp3", "*.wav"],
        "shaders" => &["*.txt"],
        "fonts" => &["*.ttf"],
        "page_styles" => &["*.css"],
        _ => &[],
    }
}
