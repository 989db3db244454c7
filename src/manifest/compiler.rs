//! @acp:module "Manifest Compiler"
//! @acp:summary "Builds a complete manifest document from field values and the payload schema"
//! @acp:domain cli
//! @acp:layer service
//!
//! Compilation is pure: it produces the document plus the list of asset
//! descriptors to ingest, and performs no I/O itself. A parse failure (a
//! non-numeric theme channel) therefore rejects the save before anything
//! touches disk. The session runs ingestion and the manifest write afterwards.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{ModError, Result};
use crate::manifest::types::Manifest;
use crate::schema::{self, Cardinality, FieldKind, PayloadCategory};
use crate::session::fields::FieldValues;

/// Manifest name used when the name field is blank at save time
pub const DEFAULT_NAME: &str = "My GX Mod";

/// Developer attribution used when the field is blank
pub const DEFAULT_DEVELOPER: &str = "Anonymous";

/// Description used when the field is blank
pub const DEFAULT_DESCRIPTION: &str = "A custom Opera GX mod.";

/// Top-level metadata fed into compilation alongside the field values
#[derive(Debug, Clone, Default)]
pub struct ModMeta {
    pub name: String,
    pub developer: String,
    pub description: String,
}

impl ModMeta {
    /// Trimmed name with the save-time default applied
    pub fn resolved_name(&self) -> &str {
        default_if_blank(&self.name, DEFAULT_NAME)
    }

    pub fn resolved_developer(&self) -> &str {
        default_if_blank(&self.developer, DEFAULT_DEVELOPER)
    }

    pub fn resolved_description(&self) -> &str {
        default_if_blank(&self.description, DEFAULT_DESCRIPTION)
    }
}

fn default_if_blank<'a>(value: &'a str, default: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default
    } else {
        trimmed
    }
}

/// One asset to route through the ingestion pipeline. Recomputed from field
/// values on every save, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDescriptor {
    /// Source file as the user entered it (known to exist at build time)
    pub source: PathBuf,
    /// Destination category directory under the project root
    pub category: &'static str,
    /// Last dotted segment of the originating field ("image", "path")
    pub sub_category: &'static str,
}

/// Result of a compilation pass
#[derive(Debug, Clone)]
pub struct CompiledManifest {
    pub manifest: Manifest,
    /// Assets referenced by populated fields, in registry order
    pub assets: Vec<AssetDescriptor>,
}

/// @acp:summary "Compile field values into a full manifest document"
///
/// Every registry category ends up in the payload, empty when unset. The
/// serialization shape per category is decided by its cardinality variant.
pub fn build_manifest(meta: &ModMeta, fields: &FieldValues) -> Result<CompiledManifest> {
    let name = meta.resolved_name();
    let mut doc = Manifest::skeleton(name, meta.resolved_developer(), meta.resolved_description());
    let mut assets = Vec::new();

    for cat in schema::CATEGORIES {
        let items = match cat.cardinality {
            Cardinality::Singleton => build_singleton(cat, name, fields, &mut assets),
            Cardinality::List => build_list(cat, name, fields),
            Cardinality::PerField => build_per_field(cat, fields),
            Cardinality::FixedStruct => build_fixed_struct(cat, name, fields)?,
        };
        tracing::debug!(category = cat.key, items = items.len(), "compiled payload category");
        doc.mod_section
            .payload
            .insert(cat.key.to_string(), Value::Array(items));
    }

    Ok(CompiledManifest {
        manifest: doc,
        assets,
    })
}

/// One item object carrying all populated fields. Emitted only when at least
/// one field was populated, so an untouched category stays an empty array.
fn build_singleton(
    cat: &'static PayloadCategory,
    mod_name: &str,
    fields: &FieldValues,
    assets: &mut Vec<AssetDescriptor>,
) -> Vec<Value> {
    let mut item = Map::new();
    item.insert("id".to_string(), Value::String("0".to_string()));
    item.insert(
        "name".to_string(),
        Value::String(format!("{} {}", mod_name, capitalize_key(cat.key))),
    );

    let mut populated = 0usize;
    for spec in cat.fields {
        let value = fields.get(cat.key, spec.path);
        if value.is_empty() {
            continue;
        }
        populated += 1;

        let stored = if spec.is_asset_slot() {
            // Path-like only if it resolves to a real file right now;
            // otherwise the text is kept literally.
            let source = Path::new(value);
            if source.is_file() {
                assets.push(AssetDescriptor {
                    source: source.to_path_buf(),
                    category: cat.key,
                    sub_category: spec.sub_category(),
                });
                Value::String(basename_of(source, value))
            } else {
                Value::String(value.to_string())
            }
        } else {
            match spec.kind {
                FieldKind::CsvList => Value::Array(split_csv(value)),
                _ => Value::String(value.to_string()),
            }
        };
        item.insert(spec.path.to_string(), stored);
    }

    if populated > 0 {
        vec![Value::Object(item)]
    } else {
        Vec::new()
    }
}

/// One `{name, path}` entry per populated field, in registry field order
fn build_list(
    cat: &'static PayloadCategory,
    mod_name: &str,
    fields: &FieldValues,
) -> Vec<Value> {
    let mut items = Vec::new();
    for spec in cat.fields {
        let value = fields.get(cat.key, spec.path);
        if value.is_empty() {
            continue;
        }
        let mut entry = Map::new();
        entry.insert(
            "name".to_string(),
            Value::String(format!("{} Shader", mod_name)),
        );
        entry.insert("path".to_string(), Value::String(value.to_string()));
        items.push(Value::Object(entry));
    }
    items
}

/// One single-field object per populated field, each independent of the rest
fn build_per_field(cat: &'static PayloadCategory, fields: &FieldValues) -> Vec<Value> {
    let mut items = Vec::new();
    for spec in cat.fields {
        let value = fields.get(cat.key, spec.path);
        if value.is_empty() {
            continue;
        }
        let mut entry = Map::new();
        entry.insert(spec.path.to_string(), Value::String(value.to_string()));
        items.push(Value::Object(entry));
    }
    items
}

/// The nested theme structure: a `dark`/`light` sub-object is included only
/// when at least one of its six raw source fields is non-blank; blanks then
/// take their registry defaults. Non-numeric input rejects the whole save.
fn build_fixed_struct(
    cat: &'static PayloadCategory,
    mod_name: &str,
    fields: &FieldValues,
) -> Result<Vec<Value>> {
    let mut item = Map::new();
    item.insert("id".to_string(), Value::String("0".to_string()));
    item.insert(
        "name".to_string(),
        Value::String(format!("{} Theme", mod_name)),
    );

    let mut any_side = false;
    for side in ["dark", "light"] {
        let prefix = format!("{}.", side);
        let touched = cat
            .fields
            .iter()
            .filter(|f| f.path.starts_with(&prefix))
            .any(|f| fields.is_populated(cat.key, f.path));
        if !touched {
            continue;
        }
        any_side = true;

        let mut side_obj = Map::new();
        for group in ["gx_accent", "gx_secondary_base"] {
            let group_prefix = format!("{}.{}.", side, group);
            let mut triple = Map::new();
            for spec in cat.fields.iter().filter(|f| f.path.starts_with(&group_prefix)) {
                triple.insert(
                    spec.sub_category().to_string(),
                    Value::from(parse_channel(cat.key, spec.path, spec.integer_default(), fields)?),
                );
            }
            side_obj.insert(group.to_string(), Value::Object(triple));
        }
        item.insert(side.to_string(), Value::Object(side_obj));
    }

    if any_side {
        Ok(vec![Value::Object(item)])
    } else {
        Ok(Vec::new())
    }
}

fn parse_channel(
    category: &str,
    field: &str,
    default: Option<i64>,
    fields: &FieldValues,
) -> Result<i64> {
    let raw = fields.get(category, field);
    if raw.is_empty() {
        return Ok(default.unwrap_or(0));
    }
    raw.parse::<i64>().map_err(|_| ModError::Parse {
        field: field.to_string(),
        value: raw.to_string(),
    })
}

/// Split comma-separated text into a trimmed, non-empty JSON array
fn split_csv(value: &str) -> Vec<Value> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| Value::String(part.to_string()))
        .collect()
}

/// First character uppercased, rest lowercased, underscores kept
/// ("app_icon" -> "App_icon"), the capitalization installed mods carry
fn capitalize_key(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

fn basename_of(source: &Path, fallback: &str) -> String {
    source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| fallback.to_string())
}
