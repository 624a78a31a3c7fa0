//! Strata Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Strata
//! scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           strata-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Service             │
//! │           (ScaffoldService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │           (Driven: Filesystem)          │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     strata-adapters (Infrastructure)    │
//! │    (LocalFilesystem, MemoryFilesystem)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │      (Layer, Layout, AppStructure)      │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use strata_core::application::{Filesystem, ScaffoldService};
//! use strata_core::error::StrataResult;
//!
//! // Inject a Filesystem adapter, then materialize the layout.
//! fn run(filesystem: Box<dyn Filesystem>) -> StrataResult<()> {
//!     let service = ScaffoldService::new(filesystem);
//!     let summary = service.setup("blog", "blog")?;
//!     println!("wrote {} files", summary.files);
//!     Ok(())
//! }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        LayerInfo, ScaffoldService, ScaffoldSummary, ports::Filesystem,
    };
    pub use crate::domain::{
        AppStructure, DirectoryToCreate, FileToWrite, FsEntry, Layer, Layout,
    };
    pub use crate::error::{StrataError, StrataResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
