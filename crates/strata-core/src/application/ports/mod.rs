//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `strata-adapters` crate provides implementations.

use crate::error::StrataResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `strata_adapters::filesystem::LocalFilesystem` (production)
/// - `strata_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Two methods only: scaffolding is directory creation plus whole-file
///   writes, each scoped (open, write, close) with no handle held across
///   operations.
/// - No existence queries and no removal: the scaffolder neither detects
///   conflicts nor rolls back.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> StrataResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> StrataResult<()>;
}
