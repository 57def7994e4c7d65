//! Export/import document model.
//!
//! A backup is a single JSON document carrying the four active
//! collections plus an export date and schema version tag. Import is a
//! wipe-then-restore: parsing happens strictly before the wipe, so a
//! malformed document leaves existing data untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::achievements::Achievement;
use crate::categories::Category;
use crate::errors::{Error, Result};
use crate::goals::Goal;
use crate::milestones::Milestone;

/// Schema version written into every export document.
pub const EXPORT_VERSION: &str = "1.0";

/// A full snapshot of the four active collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedData {
    pub categories: Vec<Category>,
    pub goals: Vec<Goal>,
    pub milestones: Vec<Milestone>,
    pub achievements: Vec<Achievement>,
    pub export_date: DateTime<Utc>,
    pub version: String,
}

impl ExportedData {
    /// Builds an export document stamped with the current time.
    pub fn new(
        categories: Vec<Category>,
        goals: Vec<Goal>,
        milestones: Vec<Milestone>,
        achievements: Vec<Achievement>,
    ) -> Self {
        ExportedData {
            categories,
            goals,
            milestones,
            achievements,
            export_date: Utc::now(),
            version: EXPORT_VERSION.to_string(),
        }
    }

    /// Parses a backup document, rejecting documents that are missing
    /// required top-level keys or records with malformed fields.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::Import(e.to_string()))
    }

    /// Serializes the document to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Unexpected(e.to_string()))
    }
}
