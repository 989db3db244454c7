//! @acp:module "Manifest Engine"
//! @acp:summary "Manifest document types, compiler and loader"
//! @acp:domain cli
//! @acp:layer service
//!
//! The compiler ([`build_manifest`]) and loader ([`seed_fields`]) are driven
//! by the same schema registry, which is what keeps them symmetric: a
//! document produced from field values seeds the same field values back.

pub mod compiler;
pub mod loader;
pub mod types;

pub use compiler::{
    build_manifest, AssetDescriptor, CompiledManifest, ModMeta, DEFAULT_DESCRIPTION,
    DEFAULT_DEVELOPER, DEFAULT_NAME,
};
pub use loader::{seed_fields, seed_meta};
pub use types::{Developer, Flavor, Manifest, ModSection, MANIFEST_FILE};
