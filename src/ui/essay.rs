use iced::widget::{button, column, container, row, scrollable, text, Column, Text};
use iced::{Alignment, Element, Length};

use super::{panel, slot_image, BOLD};
use crate::app::Message;
use crate::state::cache::{Slot, ViewImages};
use crate::state::navigation::Intent;

pub const TITLE: &str = "Historical Context of Cold War Propaganda";

const INTRODUCTION: &str = "The Cold War (1947-1991) was a period of great tension between the \
Soviet Union and the US and their respective allies. Propaganda posters played a \
crucial role in shaping public opinion on both sides.";

const THEMES_HEADING: &str = "Key Themes in Cold War Propaganda:";

const THEMES: [&str; 5] = [
    "1. Ideological Conflict: Posters emphasized the superiority of capitalism/democracy or \
     communism, portraying the opposing system as oppressive or immoral.",
    "2. Nuclear Threat: Many posters addressed the fear of nuclear war, either by promoting \
     disarmament or by portraying the enemy as an aggressor.",
    "3. Economic Competition: Posters often contrasted the prosperity of one system with the \
     supposed failures of the other.",
    "4. Patriotism and Defense: Many posters encouraged military service or civil defense \
     preparedness.",
    "5. Use of stereotypes: Posters would use popular figures that were fictional or real, such \
     as Uncle Sam.",
];

const THEMES_CLOSING: &str = "The posters reveal how each side wanted to define itself in \
opposition to the other, using powerful imagery and easy to understand messages to appeal to \
emotions rather than rational argument.";

pub const RESULTS_HEADING: &str = "RESULTS OF PROPAGANDA:";

const RESULTS: [&str; 6] = [
    "1. Changed Public Opinion: Propaganda deepened the divide between capitalist and communist \
     ideologies, making compromise more difficult.",
    "2. Increased Military Spending: posters contributed to the arms race and increased defense \
     budgets in both side.",
    "3. Cultural Stereotypes: Propaganda created lasting stereotypes about both sides that are \
     still present even today.",
    "4. Political Mobilization: Posters were effective at getting citizens to get behind \
     government policies and military actions.",
    "5. Distrust in Media: The extremist propaganda led many to become skeptical of all \
     government messaging, a legacy that continues in modern politics.",
    "6. Artistic Legacy: While serving political purposes, these posters also represent \
     significant works of graphic design and political art.",
];

const SOURCE: &str = "According to http://large.stanford.edu/courses/2017/ph241/le2/, \
Exploring the Impact of Propaganda during the Cold War by Professor Adrien Ivan, sentiment \
towards the other side became much more prominent, as American were becoming increasingly \
radical towards soviet ideas, and vice versa. Propaganda also puposely justified the arms race.";

/// Figure captions, matching the essay figure slots
pub const CAPTIONS: [&str; 2] = [
    "Example of Soviet propaganda poster",
    "Example of American propaganda poster",
];

fn paragraph(content: &'static str) -> Text<'static> {
    text(content).size(14)
}

/// Essay text in reading order, the bold heading included
pub fn paragraphs() -> impl Iterator<Item = &'static str> {
    [INTRODUCTION, THEMES_HEADING]
        .into_iter()
        .chain(THEMES)
        .chain([THEMES_CLOSING, RESULTS_HEADING])
        .chain(RESULTS)
        .chain([SOURCE])
}

/// The essay text, one widget per paragraph
fn body() -> Column<'static, Message> {
    let title = column![text(TITLE).size(24).font(BOLD)]
        .spacing(14)
        .padding([20, 20]);

    paragraphs().fold(title, |body, content| {
        if content == RESULTS_HEADING {
            body.push(paragraph(content).font(BOLD))
        } else {
            body.push(paragraph(content))
        }
    })
}

/// Static essay with two example posters on the side
pub fn view(images: &ViewImages) -> Element<'_, Message> {
    let text_panel = container(scrollable(body()).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(panel);

    let mut figures = column![].spacing(10).align_x(Alignment::Center).padding(10);
    for (n, caption) in CAPTIONS.iter().enumerate() {
        figures = figures
            .push(slot_image(images, Slot::EssayFigure(n)))
            .push(text(*caption).size(10));
    }

    let figures = figures.push(
        button("Back to Main Menu")
            .on_press(Message::Navigate(Intent::Back))
            .padding([5, 10]),
    );

    let image_panel = container(figures)
        .width(Length::Fixed(400.0))
        .height(Length::Fill)
        .style(panel);

    row![text_panel, image_panel]
        .spacing(10)
        .padding(10)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_essay_keeps_authored_wording() {
        let essay: Vec<&str> = paragraphs().collect();

        assert_eq!(essay.len(), 16);
        assert!(essay[0].contains("the Soviet Union and the US and their respective allies"));
        assert!(essay.iter().any(|p| p.ends_with("defense budgets in both side.")));
        assert!(essay
            .last()
            .unwrap()
            .ends_with("Propaganda also puposely justified the arms race."));
        assert_eq!(essay[8], RESULTS_HEADING);
    }
}
