use iced::border::{Border, Radius};
use iced::widget::{button, container, row, rule, text};
use iced::{Alignment, Background, Color, Element, Length, Shadow, Vector};

use crate::app::message::Message;
use crate::app::theme::Palette;

pub(super) fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

pub(super) fn darken(color: Color, factor: f32) -> Color {
    let clamp = |value: f32| value.clamp(0.0, 1.0);
    Color {
        r: clamp(color.r * factor),
        g: clamp(color.g * factor),
        b: clamp(color.b * factor),
        ..color
    }
}

/// Uppercase accent label with a hairline rule, opening every page section.
pub(super) fn section_header(title: &'static str, palette: Palette) -> Element<'static, Message> {
    row![
        text(title.to_uppercase()).size(13).color(palette.accent),
        rule::horizontal(1).style(move |_| hairline_style(palette)),
    ]
    .spacing(16)
    .align_y(Alignment::Center)
    .width(Length::Fill)
    .into()
}

pub(super) fn hairline_style(palette: Palette) -> rule::Style {
    rule::Style {
        color: with_alpha(palette.accent, 0.30),
        radius: Radius::from(0.0),
        fill_mode: rule::FillMode::Full,
        snap: true,
    }
}

pub(super) fn card_style(palette: Palette) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette.surface_raised)),
        border: Border {
            color: palette.border,
            width: 1.0,
            radius: Radius::from(12.0),
        },
        shadow: Shadow::default(),
        ..container::Style::default()
    }
}

pub(super) fn chip_style(palette: Palette) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette.accent_soft)),
        border: Border {
            color: with_alpha(palette.accent, 0.35),
            width: 1.0,
            radius: Radius::from(999.0),
        },
        text_color: Some(palette.accent),
        shadow: Shadow::default(),
        ..container::Style::default()
    }
}

pub(super) fn primary_button_style(palette: Palette, status: button::Status) -> button::Style {
    let base = darken(palette.accent, 0.92);
    let mut style = button::Style {
        background: Some(Background::Color(base)),
        border: Border {
            color: base,
            width: 0.0,
            radius: Radius::from(8.0),
        },
        text_color: palette.on_accent,
        shadow: Shadow {
            offset: Vector::new(0.0, 1.0),
            ..Shadow::default()
        },
        ..button::Style::default()
    };

    match status {
        button::Status::Hovered => {
            style.background = Some(Background::Color(palette.accent));
            style.border.color = palette.accent;
        }
        button::Status::Pressed => {
            let pressed = darken(palette.accent, 0.75);
            style.background = Some(Background::Color(pressed));
            style.border.color = pressed;
            style.shadow.offset = Vector::new(0.0, 0.0);
        }
        button::Status::Disabled => {
            let disabled_base = with_alpha(base, 0.5);
            style.background = Some(Background::Color(disabled_base));
            style.border.color = disabled_base;
            style.text_color = with_alpha(palette.on_accent, 0.6);
            style.shadow.offset = Vector::new(0.0, 0.0);
        }
        button::Status::Active => {}
    }

    style
}

pub(super) fn ghost_button_style(palette: Palette, status: button::Status) -> button::Style {
    let mut style = button::Style {
        background: None,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: Radius::from(8.0),
        },
        text_color: palette.text_secondary,
        shadow: Shadow::default(),
        ..button::Style::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => {
            style.background = Some(Background::Color(palette.accent_soft));
            style.text_color = palette.heading;
        }
        button::Status::Disabled => {
            style.text_color = with_alpha(palette.text_secondary, 0.6);
        }
        button::Status::Active => {}
    }

    style
}
