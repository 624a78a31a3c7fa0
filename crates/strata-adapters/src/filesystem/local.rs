//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tracing::debug;

use strata_core::{application::ports::Filesystem, error::StrataResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> StrataResult<()> {
        debug!(path = %path.display(), "create_dir_all");
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> StrataResult<()> {
        debug!(path = %path.display(), bytes = content.len(), "write_file");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> strata_core::error::StrataError {
    use strata_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_and_read_back() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();

        let dir = tmp.path().join("a/b");
        fs.create_dir_all(&dir).unwrap();
        let file = dir.join("greeting");
        fs.write_file(&file, "hello\n").unwrap();

        assert_eq!(std::fs::read_to_string(&file).unwrap(), "hello\n");
    }

    #[test]
    fn overwrite_replaces_content() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let file = tmp.path().join("f");

        fs.write_file(&file, "old").unwrap();
        fs.write_file(&file, "new").unwrap();
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "new");
    }

    #[test]
    fn write_into_missing_parent_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let file = tmp.path().join("missing/f");

        let err = fs.write_file(&file, "x").unwrap_err();
        assert!(err.to_string().contains("write file"));
    }

    #[test]
    #[cfg(unix)]
    fn readonly_dir_surfaces_filesystem_error() {
        use std::os::unix::fs::PermissionsExt;
        use strata_core::application::ApplicationError;
        use strata_core::error::StrataError;

        let tmp = tempfile::tempdir().unwrap();
        std::fs::set_permissions(tmp.path(), std::fs::Permissions::from_mode(0o555)).unwrap();

        // Root ignores mode bits; nothing to assert in that case.
        if std::fs::write(tmp.path().join("probe"), "x").is_ok() {
            return;
        }

        let fs = LocalFilesystem::new();
        let err = fs.write_file(&tmp.path().join("f"), "x").unwrap_err();
        assert!(matches!(
            err,
            StrataError::Application(ApplicationError::FilesystemError { .. })
        ));

        // restore so the tempdir can be cleaned up
        std::fs::set_permissions(tmp.path(), std::fs::Permissions::from_mode(0o755)).unwrap();
    }
}
