use iced::widget::{column, container, row, text};
use iced::{Element, Length};

use folio_core::Catalog;

use crate::app::message::Message;
use crate::app::theme::Palette;

use super::styles::{card_style, section_header};

pub(super) fn section(catalog: &'static Catalog, palette: Palette) -> Element<'static, Message> {
    let mut groups = row![].spacing(16);
    for group in &catalog.skills {
        let mut items = column![].spacing(6);
        for item in &group.items {
            items = items.push(
                row![
                    text("·").size(14).color(palette.accent),
                    text(item).size(13).color(palette.text_primary),
                ]
                .spacing(8),
            );
        }

        groups = groups.push(
            container(
                column![text(&group.title).size(14).color(palette.heading), items].spacing(10),
            )
            .width(Length::FillPortion(1))
            .padding(16)
            .style(move |_| card_style(palette)),
        );
    }

    column![section_header("Skills", palette), groups]
        .spacing(18)
        .into()
}
