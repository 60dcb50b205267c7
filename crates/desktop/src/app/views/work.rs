use iced::widget::{column, container, row, text, Space};
use iced::{Alignment, Element, Length};

use folio_core::Catalog;

use crate::app::message::Message;
use crate::app::theme::Palette;

use super::styles::{card_style, chip_style, section_header};

pub(super) fn section(catalog: &'static Catalog, palette: Palette) -> Element<'static, Message> {
    let profile = &catalog.profile;

    let mut approach = column![].spacing(8);
    for line in &profile.approach {
        approach = approach.push(
            row![
                text("▸").size(14).color(palette.accent),
                text(line).size(14).color(palette.text_primary),
            ]
            .spacing(10),
        );
    }

    let mut focus = row![].spacing(8);
    for area in &profile.focus_areas {
        focus = focus.push(
            container(text(area).size(13))
                .padding([5, 12])
                .style(move |_| chip_style(palette)),
        );
    }

    let mut timeline = column![].spacing(14);
    for entry in &profile.timeline {
        let header = row![
            text(&entry.role).size(15).color(palette.heading),
            text(&entry.org).size(14).color(palette.text_secondary),
            Space::new().width(Length::Fill),
            text(&entry.period).size(13).color(palette.text_muted),
        ]
        .spacing(10)
        .align_y(Alignment::Center);

        let mut notes = column![].spacing(4);
        for note in &entry.notes {
            notes = notes.push(
                row![
                    text("‣").size(13).color(palette.accent),
                    text(note).size(13).color(palette.text_secondary),
                ]
                .spacing(8),
            );
        }

        timeline = timeline.push(
            container(column![header, notes].spacing(8))
                .width(Length::Fill)
                .padding(16)
                .style(move |_| card_style(palette)),
        );
    }

    column![
        section_header("Work", palette),
        text("How I work").size(15).color(palette.heading),
        approach,
        text("Right now").size(15).color(palette.heading),
        focus,
        timeline,
    ]
    .spacing(16)
    .into()
}
