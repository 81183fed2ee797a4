/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the catalog file and the UI layer.

use serde::{Deserialize, Serialize};

/// Shown when a poster has no recorded designer
pub const UNKNOWN_DESIGNER: &str = "Unknown";
/// Shown when a poster has no recorded year
pub const UNKNOWN_YEAR: &str = "N/A";

/// Represents a single poster in the catalog
///
/// Optional fields stay optional here; their display defaults are applied by
/// the accessors so every screen agrees on them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ArtifactRecord {
    /// Catalog ID (not guaranteed unique)
    pub id: i64,
    /// Poster title
    pub title: String,
    /// Path to the poster image, relative to the assets directory or absolute
    pub image_path: String,
    /// Analysis text shown on the detail screen
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
}

impl ArtifactRecord {
    pub fn designer(&self) -> &str {
        self.designer.as_deref().unwrap_or(UNKNOWN_DESIGNER)
    }

    pub fn year_label(&self) -> String {
        self.year
            .map(|year| year.to_string())
            .unwrap_or_else(|| UNKNOWN_YEAR.to_string())
    }

    /// "Designer, Year" line used under gallery titles
    pub fn byline(&self) -> String {
        format!("{}, {}", self.designer(), self.year_label())
    }

    /// Image reference, or `None` when the record has none
    pub fn image(&self) -> Option<&str> {
        let path = self.image_path.trim();
        (!path.is_empty()).then_some(path)
    }
}
