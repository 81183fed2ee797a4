use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use super::{slot_image, BOLD, PARCHMENT};
use crate::app::Message;
use crate::state::cache::{Side, Slot, ViewImages};
use crate::state::navigation::Intent;

/// Title screen with the featured poster and the two flags
pub fn view(images: &ViewImages, can_enter: bool) -> Element<'_, Message> {
    let title = column![
        text("Cold War Poster").size(100).font(BOLD).color(PARCHMENT),
        text("Analysis Tool").size(60).font(BOLD).color(PARCHMENT),
    ]
    .align_x(Alignment::Center);

    let enter = button("View Gallery")
        .on_press_maybe(can_enter.then_some(Message::Navigate(Intent::Enter)))
        .padding([8, 20]);

    let center = column![
        title,
        slot_image(images, Slot::Featured),
        text("Press Enter to view the poster gallery")
            .size(30)
            .color(PARCHMENT),
        enter,
        text(
            "Includes an in-depth historical analysis, propaganda techniques, \
             and results of propaganda"
        )
        .size(20)
        .color(PARCHMENT)
        .width(Length::Fixed(800.0))
        .align_x(Alignment::Center),
    ]
    .spacing(20)
    .align_x(Alignment::Center);

    let content = row![
        slot_image(images, Slot::Decoration(Side::Left)),
        container(center).center_x(Length::Fill),
        slot_image(images, Slot::Decoration(Side::Right)),
    ]
    .spacing(20)
    .padding(20)
    .align_y(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
