use iced::widget::{column, container, row, text};
use iced::{Element, Length};

use folio_core::Catalog;

use crate::app::message::Message;
use crate::app::theme::Palette;

use super::styles::card_style;

pub(super) fn section(catalog: &'static Catalog, palette: Palette) -> Element<'static, Message> {
    let profile = &catalog.profile;

    let intro = column![
        text(profile.eyebrow.to_uppercase())
            .size(13)
            .color(palette.accent),
        text(&profile.name).size(46).color(palette.heading),
        text(&profile.headline).size(22).color(palette.text_primary),
        text(&profile.lede).size(16).color(palette.text_secondary),
    ]
    .spacing(10);

    let mut stats = row![].spacing(40);
    for stat in &profile.stats {
        stats = stats.push(
            column![
                text(&stat.value).size(28).color(palette.accent),
                text(&stat.label).size(13).color(palette.text_muted),
            ]
            .spacing(4),
        );
    }

    let mut tiles = row![].spacing(16);
    for tile in &profile.tiles {
        tiles = tiles.push(
            container(
                column![
                    text(&tile.heading).size(14).color(palette.heading),
                    text(&tile.body).size(13).color(palette.text_secondary),
                ]
                .spacing(6),
            )
            .width(Length::FillPortion(1))
            .padding(16)
            .style(move |_| card_style(palette)),
        );
    }

    column![intro, stats, tiles].spacing(28).into()
}
