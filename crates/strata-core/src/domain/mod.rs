//! Core domain layer for Strata.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O concerns are handled via ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror
//! - **Immutable data**: The layout is `&'static`; plans are Clone

// Public API - what the world sees
pub mod error;
pub mod layout;
pub mod structure;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use error::{DomainError, ErrorCategory};
pub use layout::{
    ENV_FILE_NAME, ENV_TEMPLATE, FolderSpec, Layer, LayerSpec, Layout, MARKER_FILE, TemplateFile,
};
pub use structure::{AppStructure, DirectoryToCreate, FileToWrite, FsEntry};
pub use validation::DomainValidator;
