//! Palette definitions so the desktop shell mirrors the portfolio theme catalog.

use iced::Color;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Palette {
    pub(crate) background: Color,
    pub(crate) surface: Color,
    pub(crate) surface_raised: Color,
    pub(crate) accent: Color,
    pub(crate) accent_soft: Color,
    pub(crate) on_accent: Color,
    pub(crate) heading: Color,
    pub(crate) text_primary: Color,
    pub(crate) text_secondary: Color,
    pub(crate) text_muted: Color,
    pub(crate) border: Color,
    pub(crate) danger: Color,
}

impl Palette {
    /// Resolve the palette for a catalog theme id. Unknown ids fall back to
    /// the boot look rather than failing, matching the stage's behavior.
    pub(crate) fn for_theme(id: &str) -> Self {
        match id {
            "ember" => Self {
                background: Color::from_rgb(0.09, 0.05, 0.04),
                surface: Color::from_rgb(0.13, 0.08, 0.06),
                surface_raised: Color::from_rgb(0.18, 0.11, 0.08),
                accent: Color::from_rgb(0.98, 0.57, 0.24),
                accent_soft: Color::from_rgba(0.98, 0.57, 0.24, 0.14),
                on_accent: Color::from_rgb(0.12, 0.05, 0.02),
                heading: Color::from_rgb(1.0, 0.95, 0.90),
                text_primary: Color::from_rgb(0.92, 0.85, 0.78),
                text_secondary: Color::from_rgb(0.72, 0.62, 0.55),
                text_muted: Color::from_rgb(0.52, 0.42, 0.36),
                border: Color::from_rgba(0.98, 0.57, 0.24, 0.25),
                danger: Color::from_rgb(0.94, 0.42, 0.38),
            },
            "coastal" => Self {
                background: Color::from_rgb(0.94, 0.96, 0.97),
                surface: Color::from_rgb(1.0, 1.0, 1.0),
                surface_raised: Color::from_rgb(1.0, 1.0, 1.0),
                accent: Color::from_rgb(0.01, 0.52, 0.78),
                accent_soft: Color::from_rgba(0.01, 0.52, 0.78, 0.10),
                on_accent: Color::from_rgb(1.0, 1.0, 1.0),
                heading: Color::from_rgb(0.07, 0.15, 0.23),
                text_primary: Color::from_rgb(0.16, 0.24, 0.32),
                text_secondary: Color::from_rgb(0.35, 0.45, 0.53),
                text_muted: Color::from_rgb(0.55, 0.63, 0.70),
                border: Color::from_rgba(0.01, 0.52, 0.78, 0.22),
                danger: Color::from_rgb(0.80, 0.21, 0.25),
            },
            "noir" => Self {
                background: Color::from_rgb(0.03, 0.03, 0.03),
                surface: Color::from_rgb(0.06, 0.06, 0.06),
                surface_raised: Color::from_rgb(0.10, 0.10, 0.10),
                accent: Color::from_rgb(0.96, 0.96, 0.96),
                accent_soft: Color::from_rgba(0.96, 0.96, 0.96, 0.10),
                on_accent: Color::from_rgb(0.05, 0.05, 0.05),
                heading: Color::from_rgb(0.98, 0.98, 0.98),
                text_primary: Color::from_rgb(0.85, 0.85, 0.85),
                text_secondary: Color::from_rgb(0.62, 0.62, 0.62),
                text_muted: Color::from_rgb(0.40, 0.40, 0.40),
                border: Color::from_rgba(0.96, 0.96, 0.96, 0.20),
                danger: Color::from_rgb(0.90, 0.40, 0.40),
            },
            _ => Self {
                background: Color::from_rgb(0.04, 0.05, 0.10),
                surface: Color::from_rgb(0.06, 0.08, 0.14),
                surface_raised: Color::from_rgb(0.09, 0.11, 0.19),
                accent: Color::from_rgb(0.37, 0.92, 0.83),
                accent_soft: Color::from_rgba(0.37, 0.92, 0.83, 0.12),
                on_accent: Color::from_rgb(0.02, 0.08, 0.10),
                heading: Color::from_rgb(0.93, 0.96, 1.0),
                text_primary: Color::from_rgb(0.82, 0.87, 0.94),
                text_secondary: Color::from_rgb(0.62, 0.68, 0.78),
                text_muted: Color::from_rgb(0.42, 0.47, 0.58),
                border: Color::from_rgba(0.37, 0.92, 0.83, 0.25),
                danger: Color::from_rgb(0.94, 0.45, 0.45),
            },
        }
    }

    /// Base widget theme backing the palette; coastal is the one light look.
    pub(crate) fn base_theme(id: &str) -> iced::Theme {
        match id {
            "coastal" => iced::Theme::Light,
            _ => iced::Theme::Dark,
        }
    }
}
