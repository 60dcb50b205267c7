use iced::alignment::{Horizontal, Vertical};
use iced::border::{Border, Radius};
use iced::widget::{button, column, container, mouse_area, row, text, Space};
use iced::{Alignment, Background, Color, Element, Length, Padding, Shadow, Vector};

use crate::app::message::Message;
use crate::app::theme::Palette;

use super::styles::with_alpha;

use super::super::desktop::FolioDesktop;

impl FolioDesktop {
    /// Floating theme button pinned to the bottom-right corner.
    pub(crate) fn theme_fab(&self) -> Element<'_, Message> {
        let palette = self.palette;
        let open = self.stage.theme_menu_open();
        let active = self.stage.active_theme();

        let label = row![
            text("◐").size(16).color(palette.accent),
            text(&active.name).size(14).color(palette.heading),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let fab = button(label)
            .padding([10, 16])
            .on_press(Message::ThemeMenuToggled)
            .style(move |_, status| fab_style(palette, open, status));

        container(fab)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Bottom)
            .padding(24)
            .into()
    }

    /// Click-catcher behind the open menu; any press on it dismisses.
    pub(crate) fn theme_menu_backdrop(&self) -> Element<'_, Message> {
        mouse_area(
            container(Space::new().width(Length::Fill).height(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(|_| backdrop_style()),
        )
        .on_press(Message::ThemeMenuDismissed)
        .into()
    }

    pub(crate) fn theme_menu(&self) -> Element<'_, Message> {
        let palette = self.palette;
        let active_index = self.stage.active_theme_index();

        let mut entries = column![text("Appearance").size(12).color(palette.text_muted)].spacing(6);
        for (index, theme) in self.stage.themes().iter().enumerate() {
            let is_active = index == active_index;
            let swatch = text("●").size(14).color(Palette::for_theme(&theme.id).accent);
            let body = column![
                text(&theme.name).size(14).color(palette.heading),
                text(&theme.tagline).size(12).color(palette.text_secondary),
            ]
            .spacing(2);

            entries = entries.push(
                button(row![swatch, body].spacing(10).align_y(Alignment::Center))
                    .width(Length::Fill)
                    .padding([8, 10])
                    .on_press(Message::ThemeSelected(theme.id.as_str()))
                    .style(move |_, status| entry_style(palette, is_active, status)),
            );
        }

        let panel = container(entries.width(Length::Fixed(260.0)))
            .padding(12)
            .style(move |_| panel_style(palette));

        container(panel)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Bottom)
            .padding(Padding {
                top: 0.0,
                right: 24.0,
                bottom: 86.0,
                left: 0.0,
            })
            .into()
    }
}

fn fab_style(palette: Palette, open: bool, status: button::Status) -> button::Style {
    let mut style = button::Style {
        background: Some(Background::Color(palette.surface_raised)),
        border: Border {
            color: if open {
                palette.accent
            } else {
                palette.border
            },
            width: 1.0,
            radius: Radius::from(999.0),
        },
        text_color: palette.heading,
        shadow: Shadow {
            color: with_alpha(Color::BLACK, 0.30),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 16.0,
        },
        ..button::Style::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => {
            style.border.color = palette.accent;
        }
        button::Status::Disabled => {
            style.text_color = with_alpha(palette.heading, 0.6);
        }
        button::Status::Active => {}
    }

    style
}

fn backdrop_style() -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.32))),
        border: Border::default(),
        shadow: Shadow::default(),
        ..container::Style::default()
    }
}

fn panel_style(palette: Palette) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette.surface_raised)),
        border: Border {
            color: palette.border,
            width: 1.0,
            radius: Radius::from(14.0),
        },
        shadow: Shadow {
            color: with_alpha(Color::BLACK, 0.35),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..container::Style::default()
    }
}

fn entry_style(palette: Palette, active: bool, status: button::Status) -> button::Style {
    let mut style = button::Style {
        background: if active {
            Some(Background::Color(palette.accent_soft))
        } else {
            None
        },
        border: Border {
            color: if active {
                with_alpha(palette.accent, 0.4)
            } else {
                Color::TRANSPARENT
            },
            width: 1.0,
            radius: Radius::from(10.0),
        },
        text_color: palette.heading,
        shadow: Shadow::default(),
        ..button::Style::default()
    };

    if let button::Status::Hovered | button::Status::Pressed = status {
        style.background = Some(Background::Color(with_alpha(palette.accent, 0.20)));
    }

    style
}
