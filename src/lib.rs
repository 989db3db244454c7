#![forbid(unsafe_code)]

//! @acp:module "GX Mod Maker Library"
//! @acp:summary "Manifest compilation engine and project lifecycle manager for Opera GX mods"
//! @acp:domain cli
//! @acp:layer api
//! @acp:stability stable
//!
//! # gxmod
//!
//! Compose browser-skin mod packages from structured fields: metadata, theme
//! colors and asset paths compile into a `manifest.json` plus a normalized
//! asset bundle, ready to archive.
//!
//! ## Features
//!
//! - **Schema-driven**: one static registry drives both the manifest
//!   compiler and its inverse loader, so documents round-trip
//! - **Consistent on disk**: every field change recompiles and rewrites the
//!   manifest; renames move the whole project folder
//! - **Asset normalization**: icons resample to 256x256 PNG, wallpapers and
//!   splash screens upscale to 1920x1080
//!
//! ## Example
//!
//! ```rust,no_run
//! use gxmod::EditSession;
//! use std::path::Path;
//!
//! fn main() -> gxmod::Result<()> {
//!     let mut session = EditSession::new(Path::new("projects"), "Neon", "Ada", "A neon skin");
//!     session.set_field("theme", "dark.gx_accent.h", "120")?;
//!     session.save()?;
//!     let archive = session.package()?;
//!     println!("packaged: {}", archive.display());
//!     Ok(())
//! }
//! ```

pub mod archive;
pub mod assets;
pub mod commands;
pub mod config;
pub mod error;
pub mod manifest;
pub mod project;
pub mod schema;
pub mod session;

// Re-exports
pub use archive::pack_project;
pub use config::Config;
pub use error::{ModError, Result};
pub use manifest::{
    build_manifest, seed_fields, seed_meta, AssetDescriptor, CompiledManifest, Manifest, ModMeta,
};
pub use project::{sanitize_mod_name, IdentityChange, ProjectIdentity};
pub use schema::{Cardinality, FieldKind, FieldSpec, PayloadCategory};
pub use session::{EditSession, FieldValues, SaveOutcome};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
