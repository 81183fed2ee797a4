use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::data::ArtifactRecord;
use crate::error::CatalogError;

/// Year stamped on generated records
pub const GENERATED_YEAR: i64 = 2023;

/// The Catalog holds the read-only list of posters, in file order.
///
/// It is loaded once at startup and never changed afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<ArtifactRecord>,
}

impl Catalog {
    pub fn new(records: Vec<ArtifactRecord>) -> Self {
        Self { records }
    }

    /// Load the catalog from a JSON file.
    ///
    /// A missing or malformed file gives an empty catalog; the reason is
    /// logged and the app keeps running.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(catalog) => {
                tracing::info!(
                    "📁 Loaded {} posters from {}",
                    catalog.len(),
                    path.display()
                );
                catalog
            }
            Err(e) => {
                tracing::warn!("⚠️  {e}; using an empty catalog");
                Self::default()
            }
        }
    }

    /// Fallible half of [`Catalog::load`]
    pub fn try_load(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&text)
    }

    /// Parse catalog JSON. Any bad record rejects the whole document.
    pub fn parse(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<ArtifactRecord> = serde_json::from_str(json)?;
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ArtifactRecord> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[ArtifactRecord] {
        &self.records
    }

    /// The first `limit` records, fewer if the catalog is shorter
    pub fn page(&self, limit: usize) -> &[ArtifactRecord] {
        &self.records[..limit.min(self.records.len())]
    }

    /// Build a starter catalog from the `.jpg` files directly inside
    /// `folder`, sorted by file name, with ids counting from 1.
    ///
    /// Image paths are stored the way the viewer resolves them: relative to
    /// `assets_dir` when the file lives under it, absolute otherwise.
    pub fn from_image_folder(folder: &Path, assets_dir: &Path) -> Self {
        let files: Vec<_> = WalkDir::new(folder)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                e.path()
                    .extension()
                    .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case("jpg"))
                    .unwrap_or(false)
            })
            .map(|e| e.into_path())
            .collect();

        let records = files
            .into_iter()
            .zip(1..)
            .map(|(path, id)| {
                let stem = path
                    .file_stem()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .replace('_', " ");

                ArtifactRecord {
                    id,
                    title: title_case(&stem),
                    image_path: asset_reference(&path, assets_dir)
                        .to_string_lossy()
                        .to_string(),
                    explanation: format!("Detailed analysis of {stem}"),
                    designer: Some(super::data::UNKNOWN_DESIGNER.to_string()),
                    year: Some(GENERATED_YEAR),
                }
            })
            .collect();

        Self { records }
    }

    /// Write the catalog as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), CatalogError> {
        let json = serde_json::to_string_pretty(&self.records)?;
        std::fs::write(path, json).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Express `path` as an asset reference for a viewer rooted at `assets_dir`
fn asset_reference(path: &Path, assets_dir: &Path) -> PathBuf {
    if let Ok(relative) = path.strip_prefix(assets_dir) {
        return relative.to_path_buf();
    }

    // Mixed relative/absolute forms only line up once both are canonical
    if let (Ok(path), Ok(assets_dir)) = (path.canonicalize(), assets_dir.canonicalize()) {
        if let Ok(relative) = path.strip_prefix(&assets_dir) {
            return relative.to_path_buf();
        }
        return path;
    }

    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Capitalise the first letter of every word and lowercase the rest
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if prev_alpha {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_alpha = c.is_alphabetic();
    }
    out
}
