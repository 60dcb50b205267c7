use iced::widget::{button, column, row, text};
use iced::{Alignment, Element, Length};

use folio_core::Catalog;

use crate::app::message::Message;
use crate::app::theme::Palette;

use super::styles::{primary_button_style, section_header};

pub(super) fn section(catalog: &'static Catalog, palette: Palette) -> Element<'static, Message> {
    let profile = &catalog.profile;

    let education = column![
        text(&profile.education.degree).size(15).color(palette.heading),
        text(&profile.education.school)
            .size(14)
            .color(palette.text_secondary),
        text(&profile.education.detail)
            .size(13)
            .color(palette.text_muted),
    ]
    .spacing(4);

    let label = |name: &'static str| {
        text(name)
            .size(13)
            .color(palette.text_muted)
            .width(Length::Fixed(110.0))
    };

    let details = column![
        row![
            label("Email"),
            text(&profile.contact.email).size(14).color(palette.accent),
        ]
        .spacing(12),
        row![
            label("Location"),
            text(&profile.contact.location)
                .size(14)
                .color(palette.text_primary),
        ]
        .spacing(12),
        row![
            label("Availability"),
            text(&profile.contact.availability)
                .size(14)
                .color(palette.text_primary),
        ]
        .spacing(12),
    ]
    .spacing(8);

    let resume_row = row![
        text("Need a copy for later?")
            .size(14)
            .color(palette.text_primary),
        button(text("Download resume").size(14).color(palette.on_accent))
            .padding([8, 16])
            .on_press(Message::ResumeRequested)
            .style(move |_, status| primary_button_style(palette, status)),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    let footer = text(profile.footer_line())
        .size(12)
        .color(palette.text_muted);

    column![
        section_header("Contact", palette),
        education,
        details,
        resume_row,
        footer,
    ]
    .spacing(20)
    .into()
}
