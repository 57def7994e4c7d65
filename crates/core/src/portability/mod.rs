//! Portability module - the export/import document model.

mod portability_model;

pub use portability_model::{ExportedData, EXPORT_VERSION};
