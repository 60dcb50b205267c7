use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length};

use folio_core::Catalog;

use crate::app::message::Message;
use crate::app::theme::Palette;

use super::styles::{card_style, chip_style, ghost_button_style, section_header};

pub(super) fn section(
    catalog: &'static Catalog,
    active: usize,
    palette: Palette,
) -> Element<'static, Message> {
    let highlights = &catalog.highlights;
    let highlight = &highlights[active];

    let focus = container(text(&highlight.focus).size(12))
        .padding([4, 10])
        .style(move |_| chip_style(palette));

    let mut outcomes = column![].spacing(6);
    for outcome in &highlight.outcomes {
        outcomes = outcomes.push(
            row![
                text("▸").size(14).color(palette.accent),
                text(outcome).size(14).color(palette.text_primary),
            ]
            .spacing(10),
        );
    }

    let card = container(
        column![
            focus,
            text(&highlight.title).size(24).color(palette.heading),
            text(&highlight.description)
                .size(15)
                .color(palette.text_secondary),
            outcomes,
        ]
        .spacing(12),
    )
    .width(Length::Fill)
    .padding(24)
    .style(move |_| card_style(palette));

    let previous = button(text("‹").size(20).color(palette.heading))
        .padding([2, 12])
        .on_press(Message::PreviousHighlight)
        .style(move |_, status| ghost_button_style(palette, status));

    let next = button(text("›").size(20).color(palette.heading))
        .padding([2, 12])
        .on_press(Message::NextHighlight)
        .style(move |_, status| ghost_button_style(palette, status));

    let mut dots = row![].spacing(6).align_y(Alignment::Center);
    for index in 0..highlights.len() {
        let (glyph, color) = if index == active {
            ("●", palette.accent)
        } else {
            ("○", palette.text_muted)
        };
        dots = dots.push(
            button(text(glyph).size(12).color(color))
                .padding(4)
                .on_press(Message::HighlightRequested(index))
                .style(move |_, status| ghost_button_style(palette, status)),
        );
    }

    let controls = row![
        previous,
        dots,
        next,
        Space::new().width(Length::Fill),
        text(format!("{:02} / {:02}", active + 1, highlights.len()))
            .size(13)
            .color(palette.text_muted),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    column![section_header("Projects", palette), card, controls]
        .spacing(18)
        .into()
}
