/// State management module
///
/// This module handles all application state, including:
/// - The poster record type (data.rs)
/// - Loading the read-only catalog (catalog.rs)
/// - Which screen is showing and which poster is selected (navigation.rs)
/// - Images held by the active screen (cache.rs)

pub mod cache;
pub mod catalog;
pub mod data;
pub mod navigation;
