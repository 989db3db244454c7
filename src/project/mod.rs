//! @acp:module "Project Lifecycle"
//! @acp:summary "Project folder identity: derivation, creation, rename-with-move, skeleton upkeep"
//! @acp:domain cli
//! @acp:layer service
//!
//! A project's identity is its folder under the projects root, derived
//! deterministically from the mod name. The transition table in
//! [`resolve_identity`] is the single authority for identity changes and must
//! be consulted before every save; a failed move leaves the prior identity
//! authoritative and the tree untouched (the move is whole-subtree, so there
//! is no half-renamed state to clean up).

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ModError, Result};
use crate::manifest::{Manifest, MANIFEST_FILE};

/// Folder-name fallback when the mod name is blank
const FALLBACK_BASE: &str = "My_GX_Mod";

/// The fixed asset subdirectories ensured under every project root on save
pub const SKELETON_DIRS: &[&str] = &[
    "app_icon",
    "css",
    "font",
    "icons",
    "mobile_logo",
    "music",
    "shaders",
    "sounds",
    "splash",
    "stickers",
    "wallpaper",
];

/// Trimmed mod name with the folder fallback applied (spaces untouched)
pub fn display_base(mod_name: &str) -> &str {
    let trimmed = mod_name.trim();
    if trimmed.is_empty() {
        FALLBACK_BASE
    } else {
        trimmed
    }
}

/// Derive a folder name from a mod name: trim (blank falls back to
/// `My_GX_Mod`), spaces to underscores, `_Mod` suffix
pub fn sanitize_mod_name(mod_name: &str) -> String {
    format!("{}_Mod", display_base(mod_name).replace(' ', "_"))
}

/// The on-disk identity of one mod project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectIdentity {
    projects_root: PathBuf,
    folder: String,
}

impl ProjectIdentity {
    /// Derive the identity a mod name maps onto
    pub fn derive(projects_root: &Path, mod_name: &str) -> Self {
        Self {
            projects_root: projects_root.to_path_buf(),
            folder: sanitize_mod_name(mod_name),
        }
    }

    /// Identity for an existing folder name (as listed by [`scan_projects`])
    pub fn existing(projects_root: &Path, folder: &str) -> Self {
        Self {
            projects_root: projects_root.to_path_buf(),
            folder: folder.to_string(),
        }
    }

    pub fn folder_name(&self) -> &str {
        &self.folder
    }

    /// Absolute project root path
    pub fn path(&self) -> PathBuf {
        self.projects_root.join(&self.folder)
    }
}

/// What [`resolve_identity`] did to arrive at the returned identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityChange {
    /// Brand-new project: directory created, identity adopted
    Created,
    /// Name still maps to the current identity
    Unchanged,
    /// Existing folder relocated to the new identity
    Moved,
    /// Identity changed but the old folder never existed; new one adopted
    Adopted,
}

/// @acp:summary "Transition table translating a mod name onto a folder identity"
///
/// `(has identity, identity changed)` dispatch per the lifecycle contract.
/// On a successful move the stored manifest's `name` is rewritten in place;
/// the caller then re-runs a full save so payload and theme defaults stay
/// consistent.
pub fn resolve_identity(
    current: Option<&ProjectIdentity>,
    projects_root: &Path,
    mod_name: &str,
) -> Result<(ProjectIdentity, IdentityChange)> {
    let target = ProjectIdentity::derive(projects_root, mod_name);

    let Some(current) = current else {
        create_root(&target)?;
        return Ok((target, IdentityChange::Created));
    };

    if current.folder == target.folder && current.projects_root == target.projects_root {
        // Re-create if the folder vanished underneath us; saves expect it
        create_root(&target)?;
        return Ok((target, IdentityChange::Unchanged));
    }

    let old_path = current.path();
    if !old_path.exists() {
        create_root(&target)?;
        return Ok((target, IdentityChange::Adopted));
    }

    let new_path = target.path();
    if new_path.exists() {
        return Err(ModError::fs(
            "move",
            &new_path,
            std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                "destination already occupied",
            ),
        ));
    }
    fs::rename(&old_path, &new_path).map_err(|e| ModError::fs("move", &old_path, e))?;
    tracing::debug!(from = %old_path.display(), to = %new_path.display(), "project relocated");

    // Keep the persisted name in step with the move even if the follow-up
    // save never happens
    match Manifest::from_project(&new_path) {
        Ok(mut doc) => {
            doc.name = display_base(mod_name).to_string();
            doc.write_to_project(&new_path)?;
        }
        Err(ModError::MissingManifest(_)) => {}
        Err(e) => return Err(e),
    }

    Ok((target, IdentityChange::Moved))
}

/// Ensure the project root and its fixed subdirectories exist. Runs on every
/// save so the on-disk skeleton stays stable across repeated saves.
pub fn ensure_skeleton(project_root: &Path) -> Result<()> {
    create_dir(project_root)?;
    for sub in SKELETON_DIRS {
        create_dir(&project_root.join(sub))?;
    }
    Ok(())
}

/// Project folders under the root holding a manifest, sorted by name
pub fn scan_projects(projects_root: &Path) -> Result<Vec<String>> {
    if !projects_root.exists() {
        return Ok(Vec::new());
    }
    let entries =
        fs::read_dir(projects_root).map_err(|e| ModError::fs("read", projects_root, e))?;

    let mut found = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ModError::fs("read", projects_root, e))?;
        let path = entry.path();
        if path.is_dir() && path.join(MANIFEST_FILE).is_file() {
            found.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    found.sort();
    Ok(found)
}

fn create_root(identity: &ProjectIdentity) -> Result<()> {
    create_dir(&identity.path())
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| ModError::fs("create", path, e))
}
