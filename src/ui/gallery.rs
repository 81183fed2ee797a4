use iced::widget::{column, container, mouse_area, text, Row, Space};
use iced::{Alignment, Element, Length};

use super::{panel, slot_image, BOLD};
use crate::app::Message;
use crate::state::cache::{Slot, ViewImages};
use crate::state::data::ArtifactRecord;
use crate::state::navigation::{Intent, GALLERY_COLUMNS};

/// Grid of the first page of posters; clicking a cell opens its detail
pub fn view<'a>(posters: &'a [ArtifactRecord], images: &'a ViewImages) -> Element<'a, Message> {
    if posters.is_empty() {
        return container(text("No posters in the catalog").size(20))
            .center(Length::Fill)
            .into();
    }

    let mut grid = column![].spacing(10).padding(10);

    for (row_index, chunk) in posters.chunks(GALLERY_COLUMNS).enumerate() {
        let mut cells = Row::new().spacing(10).height(Length::Fill);

        for (offset, poster) in chunk.iter().enumerate() {
            let index = row_index * GALLERY_COLUMNS + offset;
            cells = cells.push(cell(index, poster, images));
        }

        // Keep a short last row on the same column widths
        for _ in chunk.len()..GALLERY_COLUMNS {
            cells = cells.push(Space::with_width(Length::FillPortion(1)));
        }

        grid = grid.push(cells);
    }

    grid.into()
}

fn cell<'a>(
    index: usize,
    poster: &'a ArtifactRecord,
    images: &'a ViewImages,
) -> Element<'a, Message> {
    let body = column![
        text(&poster.title).size(14).font(BOLD),
        text(poster.byline()).size(11),
        slot_image(images, Slot::Thumbnail(index)),
    ]
    .spacing(5)
    .align_x(Alignment::Center);

    let card = container(body)
        .padding(5)
        .height(Length::Fill)
        .center_x(Length::FillPortion(1))
        .style(panel);

    mouse_area(card)
        .on_press(Message::Navigate(Intent::Select(index)))
        .into()
}
