//! @acp:module "Field Values"
//! @acp:summary "Raw text entered for each (category, field) slot during an editing session"
//! @acp:domain cli
//! @acp:layer model

use std::collections::HashMap;

/// Transient mapping from `(category key, field path)` to the raw text the
/// user entered. This is the source of truth when no manifest exists yet;
/// after a load it is seeded from the persisted document and edited from
/// there.
#[derive(Debug, Clone, Default)]
pub struct FieldValues {
    values: HashMap<(String, String), String>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw text for a slot. Storing an empty value clears the slot.
    pub fn set(&mut self, category: &str, field: &str, value: impl Into<String>) {
        let value = value.into();
        let key = (category.to_string(), field.to_string());
        if value.trim().is_empty() {
            self.values.remove(&key);
        } else {
            self.values.insert(key, value);
        }
    }

    /// Trimmed value for a slot; empty string when unset
    pub fn get(&self, category: &str, field: &str) -> &str {
        self.values
            .get(&(category.to_string(), field.to_string()))
            .map(|v| v.trim())
            .unwrap_or("")
    }

    /// Whether a slot holds any non-blank text
    pub fn is_populated(&self, category: &str, field: &str) -> bool {
        !self.get(category, field).is_empty()
    }

    /// Number of populated slots across all categories
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_trims_whitespace() {
        let mut fields = FieldValues::new();
        fields.set("shaders", "path", "  crt.txt  ");
        assert_eq!(fields.get("shaders", "path"), "crt.txt");
    }

    #[test]
    fn test_blank_set_clears_slot() {
        let mut fields = FieldValues::new();
        fields.set("shaders", "path", "crt.txt");
        assert!(fields.is_populated("shaders", "path"));
        fields.set("shaders", "path", "   ");
        assert!(!fields.is_populated("shaders", "path"));
        assert!(fields.is_empty());
    }

    #[test]
    fn test_unset_slot_reads_empty() {
        let fields = FieldValues::new();
        assert_eq!(fields.get("theme", "dark.gx_accent.h"), "");
    }
}
