//! Aspect-ratio preserving size computation
//!
//! `fit` answers "how big can this image be inside that box without being
//! stretched". The result touches the box on at least one side.

/// Compute the largest size with the source's aspect ratio that fits in the
/// `max_width` x `max_height` box.
///
/// A zero-sized source has no aspect ratio, so the box itself is returned.
/// A side is never rounded down to zero unless the box side is zero.
pub fn fit(
    source_width: u32,
    source_height: u32,
    max_width: u32,
    max_height: u32,
) -> (u32, u32) {
    if source_width == 0 || source_height == 0 {
        return (max_width, max_height);
    }

    let scale = f64::min(
        max_width as f64 / source_width as f64,
        max_height as f64 / source_height as f64,
    );

    let width = scale_side(source_width, scale, max_width);
    let height = scale_side(source_height, scale, max_height);

    (width, height)
}

/// Like [`fit`], but a source that already fits the box keeps its own size.
pub fn shrink_to_fit(
    source_width: u32,
    source_height: u32,
    max_width: u32,
    max_height: u32,
) -> (u32, u32) {
    let fits = source_width <= max_width && source_height <= max_height;
    if fits && source_width > 0 && source_height > 0 {
        (source_width, source_height)
    } else {
        fit(source_width, source_height, max_width, max_height)
    }
}

/// How an image is sized into its box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scaling {
    /// Grow or shrink until it touches the box
    #[default]
    Fit,
    /// Only ever shrink
    ShrinkOnly,
}

impl Scaling {
    pub fn size(self, width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
        match self {
            Scaling::Fit => fit(width, height, max_width, max_height),
            Scaling::ShrinkOnly => shrink_to_fit(width, height, max_width, max_height),
        }
    }
}

fn scale_side(side: u32, scale: f64, max: u32) -> u32 {
    let scaled = (side as f64 * scale).round() as u32;
    if max == 0 {
        0
    } else {
        scaled.clamp(1, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_landscape_into_thumbnail() {
        // 3:2 source into a 150x100 cell fills it exactly
        assert_eq!(fit(3000, 2000, 150, 100), (150, 100));
    }

    #[test]
    fn test_portrait_is_height_bound() {
        assert_eq!(fit(1000, 2000, 150, 100), (50, 100));
    }

    #[test]
    fn test_small_source_is_scaled_up() {
        assert_eq!(fit(30, 20, 300, 300), (300, 200));
    }

    #[test]
    fn test_degenerate_source_returns_box() {
        assert_eq!(fit(0, 500, 150, 100), (150, 100));
        assert_eq!(fit(500, 0, 150, 100), (150, 100));
    }

    #[test]
    fn test_extreme_ratio_keeps_one_pixel() {
        assert_eq!(fit(10_000, 1, 100, 100), (100, 1));
    }

    #[test]
    fn test_shrink_only_keeps_small_source() {
        assert_eq!(shrink_to_fit(300, 200, 600, 400), (300, 200));
        assert_eq!(Scaling::ShrinkOnly.size(300, 200, 600, 400), (300, 200));
        assert_eq!(Scaling::Fit.size(300, 200, 600, 400), (600, 400));
    }

    #[test]
    fn test_shrink_only_still_shrinks_large_source() {
        assert_eq!(shrink_to_fit(1200, 1200, 600, 400), (400, 400));
        assert_eq!(shrink_to_fit(0, 10, 600, 400), (600, 400));
    }

    #[test]
    fn test_zero_box() {
        assert_eq!(fit(640, 480, 0, 0), (0, 0));
    }

    proptest! {
        #[test]
        fn fit_is_contained_maximal_and_keeps_ratio(
            w in 1u32..5000,
            h in 1u32..5000,
            max_w in 1u32..3000,
            max_h in 1u32..3000,
        ) {
            let (fw, fh) = fit(w, h, max_w, max_h);

            prop_assert!(fw <= max_w);
            prop_assert!(fh <= max_h);
            prop_assert!(fw == max_w || fh == max_h);

            // Cross-multiplied ratio error is bounded by the rounding of each side
            let skew = (fw as i64 * h as i64 - fh as i64 * w as i64).abs();
            prop_assert!(skew <= (w as i64 + h as i64));
        }
    }
}
