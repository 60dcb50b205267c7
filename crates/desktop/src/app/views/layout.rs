use iced::alignment::Horizontal;
use iced::border::Border;
use iced::widget::{column, container, lazy, scrollable, stack};
use iced::{Background, Element, Length, Padding, Shadow};

use crate::app::message::Message;
use crate::app::theme::Palette;

use super::super::desktop::FolioDesktop;
use super::{contact, hero, projects, skills, work};

pub(crate) fn compose(app: &FolioDesktop) -> Element<'_, Message> {
    let palette = app.palette;

    let page = scrollable(app.page())
        .id(app.page_id.clone())
        .on_scroll(Message::PageScrolled)
        .width(Length::Fill)
        .height(Length::Fill);

    let body = column![app.topbar(), page]
        .spacing(0)
        .width(Length::Fill)
        .height(Length::Fill);

    let base = container(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| app_background_style(palette));

    let mut layers = stack![base];

    layers = layers.push(app.theme_fab());

    if app.stage.theme_menu_open() {
        layers = layers.push(app.theme_menu_backdrop());
        layers = layers.push(app.theme_menu());
    }

    if let Some(toast) = app.status_toast() {
        layers = layers.push(toast);
    }

    if app.pointer_seen {
        layers = layers.push(app.pointer_trail());
    }

    layers.into()
}

impl FolioDesktop {
    fn page(&self) -> Element<'_, Message> {
        let palette = self.palette;
        let catalog = self.stage.catalog();
        let highlight_index = self.stage.active_highlight_index();
        let dependency = (self.stage.active_theme().id.as_str(), highlight_index);

        // Sections only change with the theme or the carousel position, so
        // frame ticks and scrolling never rebuild them.
        let sections = lazy(dependency, move |_| {
            column![
                hero::section(catalog, palette),
                work::section(catalog, palette),
                projects::section(catalog, highlight_index, palette),
                skills::section(catalog, palette),
                contact::section(catalog, palette),
            ]
            .spacing(72)
            .max_width(960)
            .width(Length::Fill)
        });

        container(sections)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .padding(Padding {
                top: 36.0,
                right: 28.0,
                bottom: 96.0,
                left: 28.0,
            })
            .into()
    }
}

fn app_background_style(palette: Palette) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette.background)),
        border: Border::default(),
        shadow: Shadow::default(),
        ..container::Style::default()
    }
}
