//! @acp:module "Manifest Types"
//! @acp:summary "Data structures matching the manifest.json document shape"
//! @acp:domain cli
//! @acp:layer model
//!
//! These types serialize directly to/from a project's `manifest.json`.
//! The document is never mutated in place: the compiler always produces a
//! fresh one and it replaces the previous file wholesale.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ModError, Result};
use crate::schema;

/// Manifest file name inside a project root
pub const MANIFEST_FILE: &str = "manifest.json";

/// Fixed `manifest_version` field
pub const MANIFEST_VERSION: u32 = 3;

/// Fixed `version` field
pub const MOD_VERSION: &str = "1.0";

/// Fixed `mod.schema_version` field
pub const SCHEMA_VERSION: u32 = 2;

/// Fixed flavor hash pair
pub const FLAVOR_HASH: &str = "74be16979710d4c4e7c6647856088456";
pub const FLAVOR_PARENT_HASH: &str = "d41d8cd98f00b204e9800998ecf8427e";

/// Fixed icon reference and license filename
pub const ICON_512: &str = "icon_512.png";
pub const LICENSE_FILE: &str = "license.txt";

/// Persisted but never dereferenced by this tool
pub const UPDATE_URL: &str = "https://api.gx.me/store/mods/update";

/// @acp:summary "Complete manifest.json document (schema-compliant)"
/// @acp:lock normal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Always 3
    pub manifest_version: u32,
    /// User-facing mod name
    pub name: String,
    /// Always "1.0"
    pub version: String,
    /// User-facing description
    pub description: String,
    pub developer: Developer,
    /// `{"512": "icon_512.png"}`
    pub icons: Map<String, Value>,
    #[serde(rename = "mod")]
    pub mod_section: ModSection,
    /// Static store endpoint; never dereferenced here
    pub update_url: String,
}

/// Developer attribution block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Developer {
    pub name: String,
}

/// The `mod` sub-document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModSection {
    /// Always 2
    pub schema_version: u32,
    pub flavor: Flavor,
    /// Always "license.txt"
    pub license: String,
    /// Category key -> item array, one entry per registry category.
    /// Keys keep registry order (serde_json preserve_order).
    pub payload: Map<String, Value>,
}

/// Fixed flavor block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flavor {
    pub features: Vec<String>,
    pub hash: String,
    pub parent_hash: String,
}

impl Manifest {
    /// @acp:summary "Create a document with metadata and an empty payload for every category"
    pub fn skeleton(name: &str, developer: &str, description: &str) -> Self {
        let mut icons = Map::new();
        icons.insert("512".to_string(), Value::String(ICON_512.to_string()));

        let mut payload = Map::new();
        for key in schema::category_keys() {
            payload.insert(key.to_string(), Value::Array(Vec::new()));
        }

        Self {
            manifest_version: MANIFEST_VERSION,
            name: name.to_string(),
            version: MOD_VERSION.to_string(),
            description: description.to_string(),
            developer: Developer {
                name: developer.to_string(),
            },
            icons,
            mod_section: ModSection {
                schema_version: SCHEMA_VERSION,
                flavor: Flavor {
                    features: Vec::new(),
                    hash: FLAVOR_HASH.to_string(),
                    parent_hash: FLAVOR_PARENT_HASH.to_string(),
                },
                license: LICENSE_FILE.to_string(),
                payload,
            },
            update_url: UPDATE_URL.to_string(),
        }
    }

    /// @acp:summary "Load a manifest from a project root"
    ///
    /// Returns [`ModError::MissingManifest`] when the project has no
    /// `manifest.json` yet; callers treat that as "start from defaults".
    pub fn from_project<P: AsRef<Path>>(project_root: P) -> Result<Self> {
        let path = project_root.as_ref().join(MANIFEST_FILE);
        if !path.exists() {
            return Err(ModError::MissingManifest(path));
        }
        let file = File::open(&path).map_err(|e| ModError::fs("open", &path, e))?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    /// @acp:summary "Write the manifest into a project root (2-space indent JSON)"
    pub fn write_to_project<P: AsRef<Path>>(&self, project_root: P) -> Result<()> {
        let path = project_root.as_ref().join(MANIFEST_FILE);
        let file = File::create(&path).map_err(|e| ModError::fs("write", &path, e))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Item array for a category key, if present
    pub fn payload_items(&self, key: &str) -> Option<&Vec<Value>> {
        self.mod_section.payload.get(key).and_then(Value::as_array)
    }
}
