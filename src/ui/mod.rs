/// UI module
///
/// One file per screen. Each `view` function only reads state and the
/// images resolved for it; all changes go back out as messages.

use iced::widget::image::Image;
use iced::widget::{container, Space};
use iced::{font, Border, Color, Element, Font, Length, Theme};

use crate::app::Message;
use crate::state::cache::{Slot, ViewImages};

pub mod detail;
pub mod essay;
pub mod gallery;
pub mod welcome;

/// Welcome screen background (#85321A)
pub const MAROON: Color = Color {
    r: 0.522,
    g: 0.196,
    b: 0.102,
    a: 1.0,
};

/// Welcome screen text (#F2D19F)
pub const PARCHMENT: Color = Color {
    r: 0.949,
    g: 0.820,
    b: 0.624,
    a: 1.0,
};

pub const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// The image resolved for `slot`, at its fitted size
pub fn slot_image(images: &ViewImages, slot: Slot) -> Element<'_, Message> {
    match images.get(slot) {
        Some(resolved) => Image::new(resolved.handle.clone())
            .width(Length::Fixed(resolved.width as f32))
            .height(Length::Fixed(resolved.height as f32))
            .into(),
        None => Space::new(Length::Shrink, Length::Shrink).into(),
    }
}

pub fn welcome_background(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(MAROON.into()),
        text_color: Some(PARCHMENT),
        ..container::Style::default()
    }
}

/// White card with a ridge-like border
pub fn panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color::WHITE.into()),
        border: Border {
            color: Color::from_rgb(0.6, 0.6, 0.6),
            width: 2.0,
            radius: 2.0.into(),
        },
        ..container::Style::default()
    }
}
