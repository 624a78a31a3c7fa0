//! Application services (use case orchestration).

pub mod scaffold_service;

pub use scaffold_service::{FolderInfo, LayerInfo, ScaffoldService, ScaffoldSummary, layer_catalog};
