//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Validate the app name
//! 2. Expand the fixed layout into a plan
//! 3. Write the plan to the filesystem
//!
//! It implements the driving port (incoming) and uses the driven
//! filesystem port (outgoing).

use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{AppStructure, DomainValidator as validator, FsEntry, Layout},
    error::{StrataError, StrataResult},
};

/// Completion signal returned by [`ScaffoldService::setup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldSummary {
    pub app_name: String,
    pub root: PathBuf,
    pub directories: usize,
    pub files: usize,
}

/// Information about one layer for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LayerInfo {
    pub name: &'static str,
    pub files: Vec<&'static str>,
    pub folders: Vec<FolderInfo>,
}

/// Nested folder entry inside a [`LayerInfo`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FolderInfo {
    pub name: &'static str,
    pub files: Vec<&'static str>,
}

/// Describe the fixed layout for the CLI `layers` command.
pub fn layer_catalog() -> Vec<LayerInfo> {
    Layout::builtin()
        .layers()
        .iter()
        .map(|spec| LayerInfo {
            name: spec.layer.as_str(),
            files: spec.files.iter().map(|f| f.name).collect(),
            folders: spec
                .folders
                .iter()
                .map(|folder| FolderInfo {
                    name: folder.name,
                    files: folder.files.iter().map(|f| f.name).collect(),
                })
                .collect(),
        })
        .collect()
}

/// Main scaffolding service.
///
/// Orchestrates layout expansion and the write workflow.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Materialize the layered layout for one app.
    ///
    /// This is the main use case. The target root is created if absent
    /// and reused if present; existing files are overwritten with the
    /// fixed template content. Any filesystem failure surfaces
    /// immediately — no retry, no rollback of already-written entries.
    #[instrument(
        skip_all,
        fields(
            app = %app_name.as_ref(),
            root = %root.as_ref().display()
        )
    )]
    pub fn setup(
        &self,
        app_name: impl AsRef<str>,
        root: impl AsRef<Path>,
    ) -> StrataResult<ScaffoldSummary> {
        let app_name = app_name.as_ref();
        let root = root.as_ref();

        info!("Scaffolding layered structure for '{app_name}'");

        // 1. Validate app name
        validator::validate_app_name(app_name).map_err(StrataError::Domain)?;

        // 2. Expand and sanity-check the plan
        let structure = AppStructure::from_layout(root, Layout::builtin());
        structure.validate().map_err(StrataError::Domain)?;

        // 3. Write to filesystem
        self.write_structure(&structure)?;

        let summary = ScaffoldSummary {
            app_name: app_name.to_string(),
            root: root.to_path_buf(),
            directories: structure.directories().count(),
            files: structure.files().count(),
        };

        info!(
            directories = summary.directories,
            files = summary.files,
            "Scaffold completed successfully"
        );
        Ok(summary)
    }

    /// Expand the layout without touching the filesystem (dry runs).
    pub fn plan(&self, app_name: impl AsRef<str>, root: impl AsRef<Path>) -> StrataResult<AppStructure> {
        validator::validate_app_name(app_name.as_ref()).map_err(StrataError::Domain)?;
        let structure = AppStructure::from_layout(root.as_ref(), Layout::builtin());
        structure.validate().map_err(StrataError::Domain)?;
        Ok(structure)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Write every entry in the plan, in order, stopping at the first failure.
    fn write_structure(&self, structure: &AppStructure) -> StrataResult<()> {
        // Create root
        self.filesystem.create_dir_all(structure.root())?;

        // Write entries
        for entry in structure.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    let path = structure.root().join(&dir.path);
                    self.filesystem.create_dir_all(&path)?;
                }
                FsEntry::File(file) => {
                    let path = structure.root().join(&file.path);

                    // Ensure parent exists
                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }

                    self.filesystem.write_file(&path, &file.content)?;
                }
            }
        }

        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::MockFilesystem};

    fn failing_write(path: &Path) -> StrataError {
        ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: "disk full".into(),
        }
        .into()
    }

    #[test]
    fn setup_writes_every_entry() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        // 16 files: 4 empty layer markers + 11 boilerplate files + .env
        fs.expect_write_file().times(16).returning(|_, _| Ok(()));

        let service = ScaffoldService::new(Box::new(fs));
        let summary = service.setup("blog", "blog").unwrap();

        assert_eq!(summary.app_name, "blog");
        assert_eq!(summary.directories, 7);
        assert_eq!(summary.files, 16);
    }

    #[test]
    fn write_failure_stops_at_point_of_failure() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        // First write fails; times(1) proves no later writes are attempted.
        fs.expect_write_file()
            .times(1)
            .returning(|path, _| Err(failing_write(path)));

        let service = ScaffoldService::new(Box::new(fs));
        let err = service.setup("blog", "blog").unwrap_err();

        assert!(matches!(
            err,
            StrataError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    #[test]
    fn invalid_app_name_never_touches_filesystem() {
        // No expectations: any filesystem call would panic the mock.
        let fs = MockFilesystem::new();
        let service = ScaffoldService::new(Box::new(fs));

        let err = service.setup("a/b", "a/b").unwrap_err();
        assert!(matches!(err, StrataError::Domain(_)));
    }

    #[test]
    fn plan_is_pure() {
        let fs = MockFilesystem::new();
        let service = ScaffoldService::new(Box::new(fs));

        let structure = service.plan("blog", "blog").unwrap();
        assert_eq!(structure.entry_count(), 23);
    }

    #[test]
    fn layer_catalog_names_all_layers() {
        let catalog = layer_catalog();
        let names: Vec<&str> = catalog.iter().map(|l| l.name).collect();
        assert_eq!(
            names,
            ["presentation", "application", "domain", "infrastructure"]
        );
    }

    #[test]
    fn layer_catalog_domain_folders() {
        let catalog = layer_catalog();
        let domain = catalog.iter().find(|l| l.name == "domain").unwrap();
        assert!(domain.files.is_empty());
        let folder_names: Vec<&str> = domain.folders.iter().map(|f| f.name).collect();
        assert_eq!(folder_names, ["validators", "selectors", "utilities"]);
    }
}
