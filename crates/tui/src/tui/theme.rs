use ratatui::style::Color;

/// Terminal rendition of one catalog theme. The desktop surface gets real
/// gradients; here each theme boils down to a handful of 24-bit colors.
#[derive(Debug, Clone, Copy)]
pub struct TerminalPalette {
    pub base: Color,
    pub panel: Color,
    pub raised: Color,
    pub accent: Color,
    pub heading: Color,
    pub body: Color,
    pub muted: Color,
}

pub fn palette_for(theme_id: &str) -> TerminalPalette {
    match theme_id {
        "ember" => EMBER,
        "coastal" => COASTAL,
        "noir" => NOIR,
        _ => AURORA,
    }
}

const AURORA: TerminalPalette = TerminalPalette {
    base: Color::Rgb(10, 14, 26),
    panel: Color::Rgb(17, 23, 38),
    raised: Color::Rgb(26, 33, 51),
    accent: Color::Rgb(94, 234, 212),
    heading: Color::Rgb(226, 232, 240),
    body: Color::Rgb(182, 192, 209),
    muted: Color::Rgb(108, 118, 137),
};

const EMBER: TerminalPalette = TerminalPalette {
    base: Color::Rgb(20, 13, 11),
    panel: Color::Rgb(31, 21, 17),
    raised: Color::Rgb(44, 29, 23),
    accent: Color::Rgb(251, 146, 60),
    heading: Color::Rgb(247, 237, 226),
    body: Color::Rgb(209, 190, 176),
    muted: Color::Rgb(141, 122, 110),
};

// Coastal is the one light theme in the catalog.
const COASTAL: TerminalPalette = TerminalPalette {
    base: Color::Rgb(240, 245, 248),
    panel: Color::Rgb(226, 235, 241),
    raised: Color::Rgb(213, 226, 235),
    accent: Color::Rgb(2, 132, 199),
    heading: Color::Rgb(15, 35, 52),
    body: Color::Rgb(51, 70, 88),
    muted: Color::Rgb(122, 140, 156),
};

const NOIR: TerminalPalette = TerminalPalette {
    base: Color::Rgb(8, 8, 8),
    panel: Color::Rgb(17, 17, 17),
    raised: Color::Rgb(28, 28, 28),
    accent: Color::Rgb(245, 245, 245),
    heading: Color::Rgb(250, 250, 250),
    body: Color::Rgb(201, 201, 201),
    muted: Color::Rgb(122, 122, 122),
};
