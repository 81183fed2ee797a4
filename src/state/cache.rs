/// Per-view image cache
///
/// Every view gets a fresh `ViewImages` when it is entered, holding decoded
/// handles for exactly the images that view shows. Replacing it (or dropping
/// it) releases them, so handles never outlive their view and the cache
/// can't grow across navigation.

use iced::widget::image::Handle;
use std::collections::HashMap;
use std::path::PathBuf;

use super::navigation::{Navigator, View};
use crate::config::{Config, ImageBox};
use crate::imaging::{load_scaled, FittedImage, Scaling};

/// Featured poster on the welcome screen
pub const FEATURED_POSTER: &str = "poster.jpg";
/// Essay figures, in display order
pub const ESSAY_FIGURES: [&str; 2] = ["poster1.jpg", "poster3.jpg"];
/// Welcome screen decorations
pub const LEFT_DECORATION: &str = "sovietunion.PNG";
pub const RIGHT_DECORATION: &str = "Flag_of_the_United_States.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// A named place for one image inside a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Gallery cell for the poster at this catalog index
    Thumbnail(usize),
    /// Detail image for the poster at this catalog index
    Full(usize),
    Featured,
    Decoration(Side),
    EssayFigure(usize),
}

/// One image to load: where it goes, where it comes from, how big it may be
struct Request {
    slot: Slot,
    path: Option<PathBuf>,
    bounds: ImageBox,
    scaling: Scaling,
}

impl Request {
    fn fit(slot: Slot, path: Option<PathBuf>, bounds: ImageBox) -> Self {
        Self {
            slot,
            path,
            bounds,
            scaling: Scaling::Fit,
        }
    }
}

/// One resolved image, ready for the `image` widget
#[derive(Debug, Clone)]
pub struct SlotImage {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
    pub placeholder: bool,
}

impl From<FittedImage> for SlotImage {
    fn from(image: FittedImage) -> Self {
        Self {
            width: image.width,
            height: image.height,
            placeholder: image.placeholder,
            handle: Handle::from_rgba(image.width, image.height, image.pixels),
        }
    }
}

/// Images owned by the active view
#[derive(Debug)]
pub struct ViewImages {
    view: View,
    slots: HashMap<Slot, SlotImage>,
}

impl ViewImages {
    /// Nothing loaded yet
    pub fn empty(view: View) -> Self {
        Self {
            view,
            slots: HashMap::new(),
        }
    }

    /// Load every image the navigator's current view shows.
    ///
    /// `window` is the current window size; the detail image is sized
    /// relative to it.
    pub fn acquire(navigator: &Navigator, config: &Config, window: (f32, f32)) -> Self {
        let view = navigator.view();
        let mut requests: Vec<Request> = Vec::new();

        match view {
            View::Welcome => {
                // The featured poster is never blown up past its own size
                requests.push(Request {
                    slot: Slot::Featured,
                    path: Some(config.poster_file(FEATURED_POSTER)),
                    bounds: config.featured,
                    scaling: Scaling::ShrinkOnly,
                });
                requests.push(Request::fit(
                    Slot::Decoration(Side::Left),
                    Some(config.image_file(LEFT_DECORATION)),
                    config.decoration,
                ));
                requests.push(Request::fit(
                    Slot::Decoration(Side::Right),
                    Some(config.image_file(RIGHT_DECORATION)),
                    config.decoration,
                ));
            }
            View::Essay => {
                for (n, name) in ESSAY_FIGURES.iter().enumerate() {
                    requests.push(Request::fit(
                        Slot::EssayFigure(n),
                        Some(config.poster_file(name)),
                        config.essay_figure,
                    ));
                }
            }
            View::Gallery => {
                for (index, record) in navigator.gallery().iter().enumerate() {
                    requests.push(Request::fit(
                        Slot::Thumbnail(index),
                        record.image().map(|path| config.resolve_asset(path)),
                        config.thumbnail,
                    ));
                }
            }
            View::Detail(index) => {
                if let Some(record) = navigator.catalog().get(index) {
                    requests.push(Request::fit(
                        Slot::Full(index),
                        record.image().map(|path| config.resolve_asset(path)),
                        config.detail_box(window.0, window.1),
                    ));
                }
            }
        }

        let slots: HashMap<Slot, SlotImage> = requests
            .into_iter()
            .map(|request| {
                let image = load_scaled(request.path.as_deref(), request.bounds, request.scaling);
                (request.slot, SlotImage::from(image))
            })
            .collect();

        tracing::debug!("📥 Acquired {} images for {:?}", slots.len(), view);

        Self { view, slots }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn get(&self, slot: Slot) -> Option<&SlotImage> {
        self.slots.get(&slot)
    }

    pub fn handle(&self, slot: Slot) -> Option<&Handle> {
        self.slots.get(&slot).map(|image| &image.handle)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.slots.keys()
    }
}

impl Drop for ViewImages {
    fn drop(&mut self) {
        if !self.slots.is_empty() {
            tracing::debug!("📤 Released {} images for {:?}", self.slots.len(), self.view);
        }
    }
}
