use std::cmp::min;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::theme::TerminalPalette;

pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = min(width, area.width);
    let h = min(height, area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}

/// Anchor a rect of the given size to the bottom-right corner of `area`,
/// `margin` cells in from each edge.
pub fn anchored_bottom_right(width: u16, height: u16, area: Rect, margin: u16) -> Rect {
    let w = min(width, area.width);
    let h = min(height, area.height);
    Rect {
        x: area.x + area.width.saturating_sub(w).saturating_sub(margin),
        y: area.y + area.height.saturating_sub(h).saturating_sub(margin),
        width: w,
        height: h,
    }
}

pub fn contains_point(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

/// Greedy word wrap against a fixed column width. Wrapping happens before
/// the paragraph is built so section start rows stay exact; words longer
/// than the width are split hard.
pub fn wrap_plain(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }

    let mut words: Vec<String> = Vec::new();
    for word in text.split_whitespace() {
        if word.chars().count() <= width {
            words.push(word.to_string());
        } else {
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(width) {
                words.push(chunk.iter().collect());
            }
        }
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;
    for word in words {
        let word_len = word.chars().count();
        if current_len == 0 {
            current = word;
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(&word);
            current_len += 1 + word_len;
        } else {
            lines.push(current);
            current = word;
            current_len = word_len;
        }
    }
    if current_len > 0 {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// A section divider: "── TITLE ────────" across the full content width.
pub fn section_rule(title: &str, width: usize, palette: &TerminalPalette) -> Line<'static> {
    let label = format!("── {} ", title);
    let fill = width.saturating_sub(label.chars().count());
    Line::from(vec![
        Span::styled(
            label,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("─".repeat(fill), Style::default().fg(palette.muted)),
    ])
}

pub fn build_help_lines() -> Vec<(&'static str, &'static str)> {
    vec![
        ("j / k or ↓ / ↑", "Scroll the page"),
        ("PgDn / PgUp / Space", "Scroll a viewport at a time"),
        ("g / G", "Jump to top / bottom"),
        ("Tab / Shift+Tab", "Jump between sections"),
        ("h / l or ← / →", "Previous / next project highlight"),
        ("1-3", "Jump straight to a project highlight"),
        ("t", "Open the theme picker"),
        ("d", "Save the resume to disk"),
        ("?", "Toggle this help overlay"),
        ("Esc", "Close overlays or clear the status line"),
        ("q or Ctrl+C", "Quit"),
        ("Mouse", "Wheel scrolls, clicks pick themes, moving paints the trail"),
    ]
}
