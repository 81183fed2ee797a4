use iced::keyboard::{self, key, Key, Modifiers};
use iced::widget::{button, column, container, row, Space};
use iced::{window, Element, Length, Size, Subscription, Task, Theme};
use std::path::Path;

use crate::config::Config;
use crate::state::cache::{ViewImages, LEFT_DECORATION};
use crate::state::catalog::Catalog;
use crate::state::navigation::{Intent, Navigator, View};
use crate::ui;

/// Window title
pub const TITLE: &str = "Cold War Poster Analysis Tool";

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// The user asked to go somewhere
    Navigate(Intent),
    /// The window changed size
    WindowResized(Size),
}

/// Main application state
pub struct PosterViewer {
    config: Config,
    /// Catalog plus the current screen
    navigator: Navigator,
    /// Images for the current screen only
    images: ViewImages,
    /// Last known window size
    window: Size,
}

impl PosterViewer {
    /// Create a new instance of the application
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let catalog = Catalog::load(&config.catalog_path());
        let window = Size::new(config.window_width, config.window_height);

        tracing::info!("🎨 Poster viewer initialized with {} posters", catalog.len());

        let navigator = Navigator::new(catalog);
        let images = ViewImages::acquire(&navigator, &config, (window.width, window.height));

        (
            PosterViewer {
                config,
                navigator,
                images,
                window,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(intent) => {
                if self.navigator.apply(intent).is_changed() {
                    self.reload_images();
                }
            }
            Message::WindowResized(size) => {
                let before = self.detail_box();
                self.window = size;

                // Only the detail image depends on the window size
                let in_detail = matches!(self.navigator.view(), View::Detail(_));
                if in_detail && self.detail_box() != before {
                    self.reload_images();
                }
            }
        }

        Task::none()
    }

    /// Build the user interface
    pub fn view(&self) -> Element<'_, Message> {
        let content = match self.navigator.view() {
            View::Welcome => ui::welcome::view(&self.images, !self.navigator.catalog().is_empty()),
            View::Essay => ui::essay::view(&self.images),
            View::Gallery => ui::gallery::view(self.navigator.gallery(), &self.images),
            View::Detail(index) => match self.navigator.current() {
                Some(record) => {
                    ui::detail::view(index, self.navigator.catalog().len(), record, &self.images)
                }
                None => Space::new(Length::Fill, Length::Fill).into(),
            },
        };

        let left: Element<'_, Message> = if self.navigator.view() == View::Welcome {
            button("Historical Context")
                .on_press(Message::Navigate(Intent::ShowEssay))
                .padding([5, 15])
                .into()
        } else {
            Space::with_width(Length::Shrink).into()
        };

        let top_bar = row![
            left,
            Space::with_width(Length::Fill),
            button("Main Menu")
                .on_press(Message::Navigate(Intent::Menu))
                .style(button::secondary)
                .padding([5, 10]),
        ]
        .padding(10);

        let page = column![top_bar, content];

        match self.navigator.view() {
            View::Welcome => container(page)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(ui::welcome_background)
                .into(),
            _ => page.into(),
        }
    }

    /// Keyboard shortcuts and window size tracking
    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            keyboard::on_key_press(key_to_message),
            window::resize_events().map(|(_id, size)| Message::WindowResized(size)),
        ])
    }

    /// Set the application theme
    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn images(&self) -> &ViewImages {
        &self.images
    }

    /// Swap in the images for the current view, releasing the old ones first
    fn reload_images(&mut self) {
        self.images = ViewImages::empty(self.navigator.view());
        self.images = ViewImages::acquire(
            &self.navigator,
            &self.config,
            (self.window.width, self.window.height),
        );
    }

    fn detail_box(&self) -> crate::config::ImageBox {
        self.config.detail_box(self.window.width, self.window.height)
    }
}

/// Window icon, from the same Soviet emblem as the left decoration.
///
/// A missing or unreadable icon is logged and the platform default is used.
pub fn window_icon(config: &Config) -> Option<window::Icon> {
    load_icon(&config.image_file(LEFT_DECORATION))
}

fn load_icon(path: &Path) -> Option<window::Icon> {
    let rgba = match image::open(path) {
        Ok(img) => img.to_rgba8(),
        Err(e) => {
            tracing::warn!("⚠️  Error loading window icon {}: {e}", path.display());
            return None;
        }
    };

    let (width, height) = rgba.dimensions();
    match window::icon::from_rgba(rgba.into_raw(), width, height) {
        Ok(icon) => Some(icon),
        Err(e) => {
            tracing::warn!("⚠️  Window icon {} rejected: {e}", path.display());
            None
        }
    }
}

/// Map a key press to an intent. The navigator ignores keys that don't
/// apply to the current view.
pub fn key_to_message(key: Key, _modifiers: Modifiers) -> Option<Message> {
    let intent = match key.as_ref() {
        Key::Named(key::Named::Enter) => Intent::Enter,
        Key::Named(key::Named::ArrowLeft) => Intent::Prev,
        Key::Named(key::Named::ArrowRight) => Intent::Next,
        Key::Named(key::Named::Escape) => Intent::Menu,
        _ => return None,
    };

    Some(Message::Navigate(intent))
}
