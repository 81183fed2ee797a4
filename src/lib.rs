//! Cold War poster viewer
//!
//! A desktop browser for a fixed catalog of propaganda posters: a gallery,
//! a detail screen with analysis text, and a historical-context essay.

pub mod app;
pub mod config;
pub mod error;
pub mod imaging;
pub mod state;
pub mod ui;

pub use app::{Message, PosterViewer};
pub use config::Config;
pub use state::catalog::Catalog;
pub use state::data::ArtifactRecord;
pub use state::navigation::{Intent, Navigator, Transition, View};
