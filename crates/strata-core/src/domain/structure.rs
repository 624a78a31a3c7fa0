use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{
    error::DomainError,
    layout::{ENV_FILE_NAME, ENV_TEMPLATE, Layout, MARKER_FILE},
};

/// Materialization plan for one app.
///
/// This is the output of expanding the fixed [`Layout`] against an app
/// name. It contains no business logic, only data: every directory to
/// create and every file to write, relative to `root`, in write order.
#[derive(Debug, Clone)]
pub struct AppStructure {
    pub(crate) root: PathBuf,
    pub(crate) entries: Vec<FsEntry>,
}

impl AppStructure {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
    }

    /// Expand the layout into a full plan rooted at `root`.
    ///
    /// Order mirrors the layout: per layer — directory, empty marker,
    /// flat files, nested folders with their file tables — then the
    /// env file at the app root.
    pub fn from_layout(root: impl Into<PathBuf>, layout: Layout) -> Self {
        let mut structure = Self::new(root);

        for spec in layout.layers() {
            let layer_dir = PathBuf::from(spec.layer.as_str());
            structure.add_directory(&layer_dir);
            structure.add_file(layer_dir.join(MARKER_FILE), String::new());

            for file in spec.files {
                structure.add_file(layer_dir.join(file.name), file.content.to_string());
            }

            for folder in spec.folders {
                let folder_dir = layer_dir.join(folder.name);
                structure.add_directory(&folder_dir);
                for file in folder.files {
                    structure.add_file(folder_dir.join(file.name), file.content.to_string());
                }
            }
        }

        structure.add_file(ENV_FILE_NAME, ENV_TEMPLATE.to_string());
        structure
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: String) {
        self.entries.push(FsEntry::File(FileToWrite {
            path: path.into(),
            content,
        }));
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(FsEntry::Directory(DirectoryToCreate {
            path: path.into(),
        }));
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::EmptyLayout);
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path = entry.path();

            let path_str = path.display().to_string();
            if !seen.insert(path_str.clone()) {
                return Err(DomainError::DuplicatePath { path: path_str });
            }

            if path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed { path: path_str });
            }
        }

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[FsEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryToCreate> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone)]
pub enum FsEntry {
    File(FileToWrite),
    Directory(DirectoryToCreate),
}

impl FsEntry {
    pub fn path(&self) -> &Path {
        match self {
            Self::File(f) => &f.path,
            Self::Directory(d) => &d.path,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub content: String,
}

impl FileToWrite {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

#[derive(Debug, Clone)]
pub struct DirectoryToCreate {
    pub path: PathBuf,
}

// ── tests ─────────────────────────────────────────────────────────────────────
