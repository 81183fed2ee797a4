/// Image handling module
///
/// This module handles:
/// - Computing aspect-preserving sizes (fit.rs)
/// - Decoding and resizing poster files, with placeholders on failure (loader.rs)

pub mod fit;
pub mod loader;

pub use fit::{fit, shrink_to_fit, Scaling};
pub use loader::{load_fitted, load_scaled, placeholder, FittedImage};
