/// Viewer configuration
///
/// Everything has a sensible default so the app runs with no config file at
/// all. The file is looked up at:
/// - `$POSTER_VIEWER_CONFIG` if set
/// - Linux: ~/.config/cold-war-posters/config.toml
/// - macOS: ~/Library/Application Support/cold-war-posters/config.toml
/// - Windows: %APPDATA%\cold-war-posters\config.toml

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Environment variable that points at an explicit config file
pub const CONFIG_ENV: &str = "POSTER_VIEWER_CONFIG";

/// A width/height box an image gets fitted into
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageBox {
    pub width: u32,
    pub height: u32,
}

impl ImageBox {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Root that relative asset paths resolve against
    pub assets_dir: PathBuf,
    /// Catalog JSON, relative to `assets_dir` unless absolute
    pub catalog: PathBuf,
    /// Folder with the featured/essay posters, relative to `assets_dir`
    pub posters_dir: PathBuf,
    /// Folder with the welcome screen decorations, relative to `assets_dir`
    pub images_dir: PathBuf,

    /// Gallery grid cell
    pub thumbnail: ImageBox,
    /// Share of the window the detail image may take in each direction
    pub detail_fraction: f32,
    /// Figures next to the essay
    pub essay_figure: ImageBox,
    /// Poster on the welcome screen
    pub featured: ImageBox,
    /// Flags either side of the welcome screen
    pub decoration: ImageBox,

    /// Initial window size
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            catalog: PathBuf::from("data/posters.json"),
            posters_dir: PathBuf::from("posters"),
            images_dir: PathBuf::from("images"),
            thumbnail: ImageBox::new(150, 100),
            detail_fraction: 0.6,
            essay_figure: ImageBox::new(350, 250),
            featured: ImageBox::new(600, 400),
            decoration: ImageBox::new(400, 400),
            window_width: 1600.0,
            window_height: 1000.0,
        }
    }
}

impl Config {
    /// Load the config from its usual location, falling back to defaults.
    ///
    /// A missing file is normal. A malformed one is reported and ignored.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::from_file(&path) {
            Ok(config) => {
                tracing::info!("⚙️  Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("⚠️  {e}; using defaults");
                Self::default()
            }
        }
    }

    /// Parse a config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Where the config file is expected to live
    fn config_path() -> Option<PathBuf> {
        if let Some(explicit) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(explicit));
        }

        let mut path = dirs::config_dir()?;
        path.push("cold-war-posters");
        path.push("config.toml");
        Some(path)
    }

    /// Resolve an asset reference: absolute paths are kept, relative ones
    /// are joined onto `assets_dir`.
    pub fn resolve_asset(&self, reference: impl AsRef<Path>) -> PathBuf {
        let reference = reference.as_ref();
        if reference.is_absolute() {
            reference.to_path_buf()
        } else {
            self.assets_dir.join(reference)
        }
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.resolve_asset(&self.catalog)
    }

    pub fn poster_file(&self, name: &str) -> PathBuf {
        self.resolve_asset(self.posters_dir.join(name))
    }

    pub fn image_file(&self, name: &str) -> PathBuf {
        self.resolve_asset(self.images_dir.join(name))
    }

    /// Box for the detail image given the current window size
    pub fn detail_box(&self, window_width: f32, window_height: f32) -> ImageBox {
        let fraction = self.detail_fraction.clamp(0.05, 1.0);
        ImageBox::new(
            (window_width * fraction).max(1.0) as u32,
            (window_height * fraction).max(1.0) as u32,
        )
    }
}
