use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};

use super::{panel, slot_image, BOLD};
use crate::app::Message;
use crate::state::cache::{Slot, ViewImages};
use crate::state::data::ArtifactRecord;
use crate::state::navigation::Intent;

/// Analysis on the left, the poster and navigation on the right
pub fn view<'a>(
    index: usize,
    total: usize,
    poster: &'a ArtifactRecord,
    images: &'a ViewImages,
) -> Element<'a, Message> {
    let analysis = column![
        text("Analysis").size(16).font(BOLD),
        text(format!("Designer: {}", poster.designer())).size(12),
        text(format!("Year: {}", poster.year_label())).size(12),
        scrollable(text(&poster.explanation).size(25)).height(Length::Fill),
    ]
    .spacing(10)
    .padding(10)
    .align_x(Alignment::Start);

    let analysis = container(analysis)
        .width(Length::Fixed(400.0))
        .height(Length::Fill)
        .style(panel);

    let nav = row![
        button("← Previous")
            .on_press_maybe((index > 0).then_some(Message::Navigate(Intent::Prev)))
            .padding([5, 10]),
        button("Back to Gallery")
            .on_press(Message::Navigate(Intent::Back))
            .padding([5, 10]),
        button("Next →")
            .on_press_maybe((index + 1 < total).then_some(Message::Navigate(Intent::Next)))
            .padding([5, 10]),
    ]
    .spacing(20);

    let poster_panel = column![
        text(&poster.title).size(30).font(BOLD),
        slot_image(images, Slot::Full(index)),
        nav,
    ]
    .spacing(20)
    .padding(20)
    .align_x(Alignment::Center);

    let poster_panel = container(poster_panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .style(panel);

    row![analysis, poster_panel].spacing(10).padding(10).into()
}
