//! @acp:module "Manifest Loader"
//! @acp:summary "Seeds editable field values from a persisted manifest document"
//! @acp:domain cli
//! @acp:layer service
//!
//! Precise inverse of the compiler's population rules, driven by the same
//! schema registry. Loading never mutates the document; it only produces a
//! fresh [`FieldValues`] for subsequent edits.

use serde_json::Value;

use crate::manifest::compiler::ModMeta;
use crate::manifest::types::Manifest;
use crate::schema::{self, Cardinality, PayloadCategory};
use crate::session::fields::FieldValues;

/// Top-level metadata read back from a document
pub fn seed_meta(doc: &Manifest) -> ModMeta {
    ModMeta {
        name: doc.name.clone(),
        developer: doc.developer.name.clone(),
        description: doc.description.clone(),
    }
}

/// @acp:summary "Populate field values from a persisted document"
pub fn seed_fields(doc: &Manifest) -> FieldValues {
    let mut fields = FieldValues::new();

    for cat in schema::CATEGORIES {
        let Some(items) = doc.payload_items(cat.key) else {
            continue;
        };
        if items.is_empty() {
            continue;
        }
        match cat.cardinality {
            Cardinality::Singleton => seed_singleton(cat, &items[0], &mut fields),
            Cardinality::List => seed_list(cat, items, &mut fields),
            Cardinality::PerField => seed_per_field(cat, items, &mut fields),
            Cardinality::FixedStruct => seed_fixed_struct(cat, &items[0], &mut fields),
        }
    }

    fields
}

/// Field values come from the first (and only expected) item; stored arrays
/// join back into comma-separated text
fn seed_singleton(cat: &'static PayloadCategory, item: &Value, fields: &mut FieldValues) {
    for spec in cat.fields {
        if let Some(value) = item.get(spec.path) {
            fields.set(cat.key, spec.path, display_text(value));
        }
    }
}

/// The i-th stored entry's `path` maps onto the i-th field slot in registry
/// order. Entries beyond the declared field count cannot be represented and
/// are dropped; this is the documented lossy edge of the format.
fn seed_list(cat: &'static PayloadCategory, items: &[Value], fields: &mut FieldValues) {
    if items.len() > cat.fields.len() {
        tracing::warn!(
            category = cat.key,
            dropped = items.len() - cat.fields.len(),
            "stored entries exceed declared field slots; extras dropped"
        );
    }
    for (spec, item) in cat.fields.iter().zip(items) {
        if let Some(path) = item.get("path") {
            fields.set(cat.key, spec.path, display_text(path));
        }
    }
}

/// Positional mapping: the i-th stored object's matching key seeds the i-th
/// field slot. Sparse population therefore shifts on reload, exactly as the
/// documents in the wild behave.
fn seed_per_field(cat: &'static PayloadCategory, items: &[Value], fields: &mut FieldValues) {
    for (i, spec) in cat.fields.iter().enumerate() {
        let value = items
            .get(i)
            .and_then(|item| item.get(spec.path))
            .map(display_text)
            .unwrap_or_default();
        fields.set(cat.key, spec.path, value);
    }
}

/// Nested theme channels, falling back to the registry defaults whenever a
/// sub-object or leaf is absent, using the same defaults the compiler applies
fn seed_fixed_struct(cat: &'static PayloadCategory, item: &Value, fields: &mut FieldValues) {
    for spec in cat.fields {
        let stored = lookup_dotted(item, spec.path).and_then(Value::as_i64);
        let value = stored
            .or_else(|| spec.integer_default())
            .unwrap_or_default();
        fields.set(cat.key, spec.path, value.to_string());
    }
}

/// Walk a dotted path through nested objects
fn lookup_dotted<'a>(item: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = item;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    Some(current)
}

/// Stored value back to editable text; arrays rejoin with ", "
fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(parts) => parts
            .iter()
            .map(|p| match p {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}
