//! @acp:module "Edit Session"
//! @acp:summary "Owns field values and project identity; orchestrates save, load, rename, package"
//! @acp:domain cli
//! @acp:layer service
//!
//! One session edits one project. The session is the only writer of the
//! current identity; the compiler, pipeline and packager read it fresh at the
//! start of every operation. Every mutating call runs the full save path
//! (compile, identity transition, skeleton upkeep, ingestion, manifest write)
//! so the on-disk state is always consistent with the last accepted edit.

pub mod fields;

use std::path::{Path, PathBuf};

use crate::archive;
use crate::assets;
use crate::error::{ModError, Result};
use crate::manifest::{self, Manifest, ModMeta};
use crate::project::{self, IdentityChange, ProjectIdentity};
use crate::schema;

pub use fields::FieldValues;

/// What a completed save did, including per-asset warnings that did not
/// abort it
#[derive(Debug)]
pub struct SaveOutcome {
    pub identity_change: IdentityChange,
    /// Path of the manifest that was written
    pub manifest_path: PathBuf,
    /// Assets materialized under the project tree
    pub assets_written: Vec<PathBuf>,
    /// Non-fatal per-file ingestion failures
    pub warnings: Vec<ModError>,
}

/// An interactive editing session over one mod project
#[derive(Debug)]
pub struct EditSession {
    projects_root: PathBuf,
    meta: ModMeta,
    fields: FieldValues,
    identity: Option<ProjectIdentity>,
}

impl EditSession {
    /// Session for a brand-new project. Nothing touches disk until the
    /// first save.
    pub fn new(projects_root: &Path, name: &str, developer: &str, description: &str) -> Self {
        Self {
            projects_root: projects_root.to_path_buf(),
            meta: ModMeta {
                name: name.to_string(),
                developer: developer.to_string(),
                description: description.to_string(),
            },
            fields: FieldValues::new(),
            identity: None,
        }
    }

    /// @acp:summary "Open an existing project, seeding fields from its manifest"
    pub fn open(projects_root: &Path, folder: &str) -> Result<Self> {
        let identity = ProjectIdentity::existing(projects_root, folder);
        let doc = Manifest::from_project(identity.path())?;
        Ok(Self {
            projects_root: projects_root.to_path_buf(),
            meta: manifest::seed_meta(&doc),
            fields: manifest::seed_fields(&doc),
            identity: Some(identity),
        })
    }

    /// Open an existing folder, treating a missing manifest as "start from
    /// field defaults" rather than an error
    pub fn open_or_seed(projects_root: &Path, folder: &str) -> Result<Self> {
        match Self::open(projects_root, folder) {
            Err(ModError::MissingManifest(path)) => {
                tracing::debug!(manifest = %path.display(), "no manifest yet; starting from defaults");
                Ok(Self {
                    projects_root: projects_root.to_path_buf(),
                    meta: ModMeta::default(),
                    fields: FieldValues::new(),
                    identity: Some(ProjectIdentity::existing(projects_root, folder)),
                })
            }
            other => other,
        }
    }

    pub fn meta(&self) -> &ModMeta {
        &self.meta
    }

    pub fn fields(&self) -> &FieldValues {
        &self.fields
    }

    pub fn identity(&self) -> Option<&ProjectIdentity> {
        self.identity.as_ref()
    }

    /// @acp:summary "Field-change event: record the value and re-save if a project exists"
    ///
    /// The slot must be declared by the registry; unknown slots would be
    /// silently unrepresentable in the manifest, so they are rejected here.
    pub fn set_field(
        &mut self,
        category: &str,
        field: &str,
        value: &str,
    ) -> Result<Option<SaveOutcome>> {
        let cat = schema::category(category)
            .ok_or_else(|| ModError::Other(format!("unknown category '{category}'")))?;
        if !cat.fields.iter().any(|f| f.path == field) {
            return Err(ModError::Other(format!(
                "category '{category}' has no field '{field}'"
            )));
        }
        self.fields.set(category, field, value);
        self.autosave()
    }

    /// Name-change event. Delegates the folder transition to the lifecycle
    /// table inside the save path; with no project yet, the name is only
    /// recorded.
    pub fn set_name(&mut self, value: &str) -> Result<Option<SaveOutcome>> {
        self.meta.name = value.to_string();
        self.autosave()
    }

    pub fn set_developer(&mut self, value: &str) -> Result<Option<SaveOutcome>> {
        self.meta.developer = value.to_string();
        self.autosave()
    }

    pub fn set_description(&mut self, value: &str) -> Result<Option<SaveOutcome>> {
        self.meta.description = value.to_string();
        self.autosave()
    }

    fn autosave(&mut self) -> Result<Option<SaveOutcome>> {
        if self.identity.is_none() {
            return Ok(None);
        }
        self.save().map(Some)
    }

    /// @acp:summary "Full save: compile, transition identity, ensure skeleton, ingest, write"
    ///
    /// Compilation runs first so a rejected save (non-numeric theme channel)
    /// leaves both the identity and the previous manifest untouched.
    pub fn save(&mut self) -> Result<SaveOutcome> {
        let compiled = manifest::build_manifest(&self.meta, &self.fields)?;

        let (identity, identity_change) = project::resolve_identity(
            self.identity.as_ref(),
            &self.projects_root,
            &self.meta.name,
        )?;
        let root = identity.path();

        project::ensure_skeleton(&root)?;
        let report = assets::ingest_all(&root, &compiled.assets);
        compiled.manifest.write_to_project(&root)?;
        self.identity = Some(identity);

        tracing::debug!(
            project = self.identity.as_ref().map(|i| i.folder_name()).unwrap_or_default(),
            assets = report.written.len(),
            warnings = report.failures.len(),
            "saved"
        );
        Ok(SaveOutcome {
            identity_change,
            manifest_path: root.join(manifest::MANIFEST_FILE),
            assets_written: report.written,
            warnings: report.failures,
        })
    }

    /// @acp:summary "Package the materialized project tree into its zip archive"
    pub fn package(&self) -> Result<PathBuf> {
        let identity = self
            .identity
            .as_ref()
            .ok_or_else(|| ModError::Other("project has not been saved yet".to_string()))?;
        archive::pack_project(&identity.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::MANIFEST_FILE;

    fn session(root: &Path) -> EditSession {
        EditSession::new(root, "Neon", "Dev", "desc")
    }

    #[test]
    fn test_set_field_without_project_records_only() {
        let root = tempfile::tempdir().unwrap();
        let mut s = session(root.path());
        let outcome = s.set_field("shaders", "path", "crt.txt").unwrap();
        assert!(outcome.is_none());
        assert_eq!(s.fields().get("shaders", "path"), "crt.txt");
        assert!(std::fs::read_dir(root.path()).unwrap().next().is_none());
    }

    #[test]
    fn test_set_field_rejects_undeclared_slots() {
        let root = tempfile::tempdir().unwrap();
        let mut s = session(root.path());
        assert!(s.set_field("nope", "path", "x").is_err());
        assert!(s.set_field("shaders", "nope", "x").is_err());
    }

    #[test]
    fn test_first_save_creates_project_and_manifest() {
        let root = tempfile::tempdir().unwrap();
        let mut s = session(root.path());
        let outcome = s.save().unwrap();
        assert_eq!(outcome.identity_change, IdentityChange::Created);
        assert!(outcome.manifest_path.is_file());
        assert_eq!(s.identity().unwrap().folder_name(), "Neon_Mod");
        for sub in project::SKELETON_DIRS {
            assert!(root.path().join("Neon_Mod").join(sub).is_dir());
        }
    }

    #[test]
    fn test_field_change_after_save_autosaves() {
        let root = tempfile::tempdir().unwrap();
        let mut s = session(root.path());
        s.save().unwrap();

        let outcome = s.set_field("shaders", "path", "crt.txt").unwrap().unwrap();
        assert_eq!(outcome.identity_change, IdentityChange::Unchanged);

        let doc = Manifest::from_project(root.path().join("Neon_Mod")).unwrap();
        assert_eq!(doc.payload_items("shaders").unwrap().len(), 1);
    }

    #[test]
    fn test_rename_relocates_and_rewrites_name() {
        let root = tempfile::tempdir().unwrap();
        let mut s = session(root.path());
        s.save().unwrap();

        let outcome = s.set_name("Bar Baz").unwrap().unwrap();
        assert_eq!(outcome.identity_change, IdentityChange::Moved);
        assert!(!root.path().join("Neon_Mod").exists());

        let doc = Manifest::from_project(root.path().join("Bar_Baz_Mod")).unwrap();
        assert_eq!(doc.name, "Bar Baz");
    }

    #[test]
    fn test_rejected_save_leaves_previous_manifest_untouched() {
        let root = tempfile::tempdir().unwrap();
        let mut s = session(root.path());
        s.save().unwrap();
        let before = std::fs::read(root.path().join("Neon_Mod").join(MANIFEST_FILE)).unwrap();

        let err = s.set_field("theme", "dark.gx_accent.h", "blue").unwrap_err();
        assert!(matches!(err, ModError::Parse { .. }));

        let after = std::fs::read(root.path().join("Neon_Mod").join(MANIFEST_FILE)).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_open_seeds_fields_from_manifest() {
        let root = tempfile::tempdir().unwrap();
        let mut s = session(root.path());
        s.set_field("page_styles", "css", "style.css").unwrap();
        s.save().unwrap();

        let reopened = EditSession::open(root.path(), "Neon_Mod").unwrap();
        assert_eq!(reopened.meta().name, "Neon");
        assert_eq!(reopened.fields().get("page_styles", "css"), "style.css");
    }

    #[test]
    fn test_open_missing_manifest_is_an_error_but_seed_variant_defaults() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(root.path().join("Bare_Mod")).unwrap();

        assert!(matches!(
            EditSession::open(root.path(), "Bare_Mod").unwrap_err(),
            ModError::MissingManifest(_)
        ));
        let seeded = EditSession::open_or_seed(root.path(), "Bare_Mod").unwrap();
        assert!(seeded.fields().is_empty());
        assert!(seeded.identity().is_some());
    }

    #[test]
    fn test_package_requires_a_saved_project() {
        let root = tempfile::tempdir().unwrap();
        let s = session(root.path());
        assert!(s.package().is_err());
    }

    #[test]
    fn test_saving_twice_is_idempotent() {
        let root = tempfile::tempdir().unwrap();
        let mut s = session(root.path());
        s.set_field("background_music", "tracks", "a.mp3, b.mp3").unwrap();
        s.save().unwrap();
        let first = std::fs::read(root.path().join("Neon_Mod").join(MANIFEST_FILE)).unwrap();
        s.save().unwrap();
        let second = std::fs::read(root.path().join("Neon_Mod").join(MANIFEST_FILE)).unwrap();
        assert_eq!(first, second);
    }
}
