/// Poster image loading
///
/// Decodes a poster from disk and resizes it into a display box. Failures
/// never leave this module: the caller always gets pixels, either the real
/// image or a grey placeholder of exactly the requested box.

use image::{imageops::FilterType, Rgba, RgbaImage};
use std::path::Path;

use super::fit::Scaling;
use crate::config::ImageBox;
use crate::error::AssetError;

/// Colour of the stand-in for a missing or broken poster
const PLACEHOLDER_COLOR: Rgba<u8> = Rgba([128, 128, 128, 255]);

/// Decoded RGBA pixels sized for one display slot
#[derive(Debug, Clone, PartialEq)]
pub struct FittedImage {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA8
    pub pixels: Vec<u8>,
    /// True when this is the stand-in, not the poster
    pub placeholder: bool,
}

impl FittedImage {
    fn from_rgba(image: RgbaImage, placeholder: bool) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            pixels: image.into_raw(),
            placeholder,
        }
    }
}

/// Load `path` and scale it to fit `bounds`.
///
/// `None` means the record has no image at all. Any failure is logged and
/// replaced by a placeholder of exactly `bounds`.
pub fn load_fitted(path: Option<&Path>, bounds: ImageBox) -> FittedImage {
    load_scaled(path, bounds, Scaling::Fit)
}

/// [`load_fitted`] with a choice of whether small images may grow
pub fn load_scaled(path: Option<&Path>, bounds: ImageBox, scaling: Scaling) -> FittedImage {
    match try_load_scaled(path, bounds, scaling) {
        Ok(image) => image,
        Err(AssetError::NoPath) => {
            tracing::debug!("no image for slot, using placeholder");
            placeholder(bounds)
        }
        Err(e) => {
            tracing::warn!("⚠️  {e}; using placeholder");
            placeholder(bounds)
        }
    }
}

/// Fallible half of [`load_fitted`]
pub fn try_load_fitted(path: Option<&Path>, bounds: ImageBox) -> Result<FittedImage, AssetError> {
    try_load_scaled(path, bounds, Scaling::Fit)
}

/// Fallible half of [`load_scaled`]
pub fn try_load_scaled(
    path: Option<&Path>,
    bounds: ImageBox,
    scaling: Scaling,
) -> Result<FittedImage, AssetError> {
    let path = path.ok_or(AssetError::NoPath)?;

    if !path.is_file() {
        return Err(AssetError::Missing {
            path: path.to_path_buf(),
        });
    }

    let img = image::open(path).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let (width, height) = scaling.size(img.width(), img.height(), bounds.width, bounds.height);
    let resized = img.resize_exact(width, height, FilterType::Lanczos3);

    tracing::trace!(
        "🖼️  {} {}x{} -> {}x{}",
        path.display(),
        img.width(),
        img.height(),
        width,
        height
    );

    Ok(FittedImage::from_rgba(resized.to_rgba8(), false))
}

/// Solid grey image of exactly `bounds`
pub fn placeholder(bounds: ImageBox) -> FittedImage {
    let image = RgbaImage::from_pixel(bounds.width, bounds.height, PLACEHOLDER_COLOR);
    FittedImage::from_rgba(image, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> std::path::PathBuf {
        let path = dir.join(name);
        RgbaImage::from_pixel(width, height, Rgba([200, 30, 30, 255]))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn test_loads_and_fits() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "poster.png", 300, 200);

        let image = load_fitted(Some(&path), ImageBox::new(150, 150));

        assert!(!image.placeholder);
        assert_eq!((image.width, image.height), (150, 100));
        assert_eq!(image.pixels.len(), 150 * 100 * 4);
    }

    #[test]
    fn test_shrink_only_leaves_small_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "small.png", 120, 80);

        let image = load_scaled(Some(&path), ImageBox::new(600, 400), Scaling::ShrinkOnly);

        assert!(!image.placeholder);
        assert_eq!((image.width, image.height), (120, 80));
    }

    #[test]
    fn test_missing_file_gives_exact_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.jpg");

        let image = load_fitted(Some(&path), ImageBox::new(150, 100));

        assert!(image.placeholder);
        assert_eq!((image.width, image.height), (150, 100));
        assert_eq!(&image.pixels[..4], &[128, 128, 128, 255]);
    }

    #[test]
    fn test_corrupt_file_gives_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.jpg");
        std::fs::write(&path, b"\xff\xd8\xff not really a jpeg").unwrap();

        assert!(matches!(
            try_load_fitted(Some(&path), ImageBox::new(10, 10)),
            Err(AssetError::Decode { .. })
        ));

        let image = load_fitted(Some(&path), ImageBox::new(64, 48));
        assert!(image.placeholder);
        assert_eq!((image.width, image.height), (64, 48));
    }

    #[test]
    fn test_no_path_gives_placeholder() {
        let image = load_fitted(None, ImageBox::new(20, 30));

        assert!(image.placeholder);
        assert_eq!((image.width, image.height), (20, 30));
    }
}
