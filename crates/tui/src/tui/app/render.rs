use std::cmp::min;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use folio_core::content::Catalog;

use crate::tui::constants::APP_VERSION;
use crate::tui::helpers::{
    anchored_bottom_right, build_help_lines, centered_rect, section_rule, wrap_plain,
};
use crate::tui::theme::{palette_for, TerminalPalette};

use super::{App, Section};

impl App {
    pub(crate) fn draw(&mut self, f: &mut Frame<'_>) {
        let area = f.size();
        let palette = palette_for(&self.stage.active_theme().id);

        f.render_widget(Clear, area);
        f.render_widget(
            Block::default().style(Style::default().bg(palette.base).fg(palette.body)),
            area,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(5),
                Constraint::Length(2),
            ])
            .split(area);

        // The page composes first so the header can read fresh section rows.
        self.draw_page(f, chunks[1], &palette);
        self.draw_header(f, chunks[0], &palette);
        self.draw_footer(f, chunks[2], &palette);
        self.draw_theme_fab(f, chunks[1], &palette);

        if self.stage.theme_menu_open() {
            self.draw_theme_menu(f, chunks[1], &palette);
        } else {
            self.menu_area = None;
        }

        if self.help_open {
            self.draw_help_overlay(f, area, &palette);
        }

        self.draw_pointer_trail(f, area, &palette);
    }

    fn draw_page(&mut self, f: &mut Frame<'_>, area: Rect, palette: &TerminalPalette) {
        self.viewport_rows = area.height;

        let content = Rect {
            x: area.x + 2,
            y: area.y,
            width: area.width.saturating_sub(4),
            height: area.height,
        };
        let width = (content.width as usize).clamp(20, 96);

        let (lines, sections) = compose_page(
            self.stage.catalog(),
            self.stage.active_highlight_index(),
            width,
            palette,
        );

        self.section_rows = sections;
        self.max_scroll = (lines.len() as u16).saturating_sub(area.height);
        if self.scroll_row > self.max_scroll {
            self.scroll_row = self.max_scroll;
        }

        let page = Paragraph::new(lines)
            .style(Style::default().bg(palette.base))
            .scroll((self.scroll_row, 0));
        f.render_widget(page, content);
    }

    fn draw_header(&self, f: &mut Frame<'_>, area: Rect, palette: &TerminalPalette) {
        // The bar tints once the page has moved past the scroll threshold.
        let scrolled = self.stage.scrolled();
        let background = if scrolled { palette.panel } else { palette.base };
        let style = Style::default().bg(background);

        let profile = &self.stage.catalog().profile;
        let section = self
            .section_rows
            .get(self.current_section_index())
            .map(|(section, _)| section.title())
            .unwrap_or("Top");

        let mut left = vec![
            Span::styled(
                format!(" {} ", profile.name),
                Style::default()
                    .fg(palette.heading)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("· ", Style::default().fg(palette.muted)),
            Span::styled(section, Style::default().fg(palette.accent)),
        ];
        if scrolled {
            left.push(Span::styled(
                "  ▲ g for top",
                Style::default().fg(palette.muted),
            ));
        }

        let right = format!("{} · v{} ", self.stage.active_theme().name, APP_VERSION);
        let right_width = right.chars().count() as u16;

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(right_width)])
            .split(area);

        f.render_widget(Paragraph::new(Line::from(left)).style(style), columns[0]);
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                right,
                Style::default().fg(palette.muted),
            )))
            .style(style)
            .alignment(Alignment::Right),
            columns[1],
        );
    }

    fn draw_footer(&self, f: &mut Frame<'_>, area: Rect, palette: &TerminalPalette) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        let status_line = match &self.status {
            Some(status) => Line::from(Span::styled(format!(" {}", status.text), status.style())),
            None => Line::from(Span::styled(
                format!(" {}", self.stage.catalog().profile.footer_line()),
                Style::default().fg(palette.muted),
            )),
        };
        f.render_widget(
            Paragraph::new(status_line).style(Style::default().bg(palette.base)),
            rows[0],
        );

        let hints = if self.help_open {
            " Enter/Esc close help"
        } else if self.stage.theme_menu_open() {
            " ↑/↓ choose · Enter apply · 1-4 quick pick · Esc close"
        } else {
            " j/k scroll · Tab sections · h/l projects · t theme 🎨 · d resume 📄 · ? help · q quit"
        };
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                hints,
                Style::default().fg(palette.muted),
            )))
            .style(Style::default().bg(palette.panel)),
            rows[1],
        );
    }

    fn draw_theme_fab(&mut self, f: &mut Frame<'_>, area: Rect, palette: &TerminalPalette) {
        let label = format!("◐ {}", self.stage.active_theme().name);
        let width = label.chars().count() as u16 + 4;
        let rect = anchored_bottom_right(width, 3, area, 1);
        self.fab_area = Some(rect);

        let open = self.stage.theme_menu_open();
        let border = if open { palette.accent } else { palette.muted };

        f.render_widget(Clear, rect);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(palette.raised));
        let inner = block.inner(rect);
        f.render_widget(block, rect);
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                label,
                Style::default()
                    .fg(palette.heading)
                    .add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center),
            inner,
        );
    }

    fn draw_theme_menu(&mut self, f: &mut Frame<'_>, area: Rect, palette: &TerminalPalette) {
        let themes = self.stage.themes();
        let longest_tagline = themes
            .iter()
            .map(|theme| theme.tagline.chars().count())
            .max()
            .unwrap_or(0);
        // Borders, cursor, swatch, and a padded name column ahead of the tagline.
        let width = min((14 + longest_tagline) as u16, area.width);
        let height = min(themes.len() as u16 + 2, area.height);

        let fab = self
            .fab_area
            .unwrap_or_else(|| anchored_bottom_right(1, 3, area, 1));
        let rect = Rect {
            x: area.x + area.width.saturating_sub(width + 1),
            y: fab.y.saturating_sub(height).max(area.y),
            width,
            height,
        };
        self.menu_area = Some(rect);

        f.render_widget(Clear, rect);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent))
            .style(Style::default().bg(palette.raised))
            .title(Span::styled(
                " Themes ",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let mut rows: Vec<Line> = Vec::new();
        for (index, theme) in themes.iter().enumerate() {
            let swatch = palette_for(&theme.id).accent;
            let selected = index == self.menu_cursor;
            let active = index == self.stage.active_theme_index();
            let background = if selected { palette.panel } else { palette.raised };
            let cursor = if selected { "▶" } else { " " };
            let marker = if active { "●" } else { "○" };
            let mut name_style = Style::default().fg(palette.heading).bg(background);
            if selected {
                name_style = name_style.add_modifier(Modifier::BOLD);
            }
            rows.push(Line::from(vec![
                Span::styled(
                    format!("{} ", cursor),
                    Style::default().fg(palette.accent).bg(background),
                ),
                Span::styled(
                    format!("{} ", marker),
                    Style::default().fg(swatch).bg(background),
                ),
                Span::styled(format!("{:<8}", theme.name), name_style),
                Span::styled(
                    theme.tagline.clone(),
                    Style::default().fg(palette.muted).bg(background),
                ),
            ]));
        }
        f.render_widget(Paragraph::new(rows), inner);
    }

    fn draw_help_overlay(&self, f: &mut Frame<'_>, area: Rect, palette: &TerminalPalette) {
        let overlay = centered_rect(64, 19, area);
        f.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent))
            .style(Style::default().bg(palette.panel))
            .title(Span::styled(
                " ⌨️  Keyboard Reference ",
                Style::default()
                    .fg(palette.heading)
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(overlay);
        f.render_widget(block, overlay);

        let mut lines = vec![Line::default()];
        for (keys, description) in build_help_lines() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<22}", keys),
                    Style::default().fg(palette.accent),
                ),
                Span::styled(description, Style::default().fg(palette.body)),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "  Enter or Esc to close",
            Style::default().fg(palette.muted),
        )));
        f.render_widget(Paragraph::new(lines), inner);
    }

    fn draw_pointer_trail(&self, f: &mut Frame<'_>, area: Rect, palette: &TerminalPalette) {
        if !self.pointer_seen {
            return;
        }

        let attrs = self.stage.attrs();
        if let Some(rect) = cell_of(attrs.cursor.x, attrs.cursor.y, area) {
            f.render_widget(
                Paragraph::new("·").style(Style::default().fg(palette.muted)),
                rect,
            );
        }
        // The ring renders after the dot so it wins the cell once it settles.
        if let Some(rect) = cell_of(attrs.follower.x, attrs.follower.y, area) {
            f.render_widget(
                Paragraph::new("◌").style(Style::default().fg(palette.accent)),
                rect,
            );
        }
    }
}

fn cell_of(x: f32, y: f32, area: Rect) -> Option<Rect> {
    if !x.is_finite() || !y.is_finite() || x < 0.0 || y < 0.0 {
        return None;
    }
    let column = x.round() as u16;
    let row = y.round() as u16;
    if column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
    {
        Some(Rect {
            x: column,
            y: row,
            width: 1,
            height: 1,
        })
    } else {
        None
    }
}

/// Builds the whole page as pre-wrapped lines. Returns the lines plus the
/// start row of every section, which is what keeps Tab jumps and the header
/// breadcrumb honest.
fn compose_page(
    catalog: &Catalog,
    active_highlight: usize,
    width: usize,
    palette: &TerminalPalette,
) -> (Vec<Line<'static>>, Vec<(Section, u16)>) {
    let profile = &catalog.profile;

    let heading = Style::default()
        .fg(palette.heading)
        .add_modifier(Modifier::BOLD);
    let body = Style::default().fg(palette.body);
    let muted = Style::default().fg(palette.muted);
    let accent = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut sections: Vec<(Section, u16)> = Vec::new();

    let push_wrapped = |lines: &mut Vec<Line<'static>>, text: &str, style: Style| {
        for row in wrap_plain(text, width) {
            lines.push(Line::from(Span::styled(row, style)));
        }
    };
    let push_bullet = |lines: &mut Vec<Line<'static>>, text: &str, glyph: &str, style: Style| {
        let rows = wrap_plain(text, width.saturating_sub(2).max(1));
        for (i, row) in rows.into_iter().enumerate() {
            let lead = if i == 0 {
                format!("{} ", glyph)
            } else {
                "  ".to_string()
            };
            lines.push(Line::from(vec![
                Span::styled(lead, Style::default().fg(palette.accent)),
                Span::styled(row, style),
            ]));
        }
    };

    // Hero
    sections.push((Section::Hero, lines.len() as u16));
    lines.push(Line::from(Span::styled(
        profile.eyebrow.to_uppercase(),
        Style::default().fg(palette.accent),
    )));
    lines.push(Line::from(Span::styled(profile.name.clone(), accent)));
    push_wrapped(&mut lines, &profile.headline, heading);
    lines.push(Line::default());
    push_wrapped(&mut lines, &profile.lede, body);
    lines.push(Line::default());
    for stat in &profile.stats {
        lines.push(Line::from(vec![
            Span::styled(format!("{:>4}  ", stat.value), accent),
            Span::styled(stat.label.clone(), muted),
        ]));
    }
    lines.push(Line::default());
    for tile in &profile.tiles {
        lines.push(Line::from(vec![
            Span::styled("▎", Style::default().fg(palette.accent)),
            Span::styled(tile.heading.clone(), heading),
        ]));
        push_wrapped(&mut lines, &tile.body, muted);
    }
    lines.push(Line::default());

    // Work
    sections.push((Section::Work, lines.len() as u16));
    lines.push(section_rule("WORK", width, palette));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("How I work", heading)));
    for item in &profile.approach {
        push_bullet(&mut lines, item, "•", body);
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Right now", heading)));
    for item in &profile.focus_areas {
        push_bullet(&mut lines, item, "•", body);
    }
    lines.push(Line::default());
    for entry in &profile.timeline {
        lines.push(Line::from(vec![
            Span::styled(entry.role.clone(), heading),
            Span::styled(" · ", muted),
            Span::styled(entry.org.clone(), Style::default().fg(palette.accent)),
            Span::styled(format!("  {}", entry.period), muted),
        ]));
        for note in &entry.notes {
            push_bullet(&mut lines, note, "‣", body);
        }
        lines.push(Line::default());
    }

    // Projects
    sections.push((Section::Projects, lines.len() as u16));
    lines.push(section_rule("PROJECTS", width, palette));
    lines.push(Line::default());
    let index = active_highlight.min(catalog.highlights.len().saturating_sub(1));
    let highlight = &catalog.highlights[index];
    lines.push(Line::from(vec![
        Span::styled(highlight.title.clone(), heading),
        Span::styled(format!("  {}", highlight.focus), muted),
    ]));
    push_wrapped(&mut lines, &highlight.description, body);
    for outcome in &highlight.outcomes {
        push_bullet(&mut lines, outcome, "▸", body);
    }
    lines.push(Line::default());
    let mut dots: Vec<Span> = Vec::new();
    for i in 0..catalog.highlights.len() {
        if i == index {
            dots.push(Span::styled("● ", Style::default().fg(palette.accent)));
        } else {
            dots.push(Span::styled("○ ", muted));
        }
    }
    dots.push(Span::styled("  ‹ h · l ›", muted));
    lines.push(Line::from(dots));
    lines.push(Line::default());

    // Skills
    sections.push((Section::Skills, lines.len() as u16));
    lines.push(section_rule("SKILLS", width, palette));
    lines.push(Line::default());
    for group in &catalog.skills {
        lines.push(Line::from(Span::styled(group.title.clone(), heading)));
        push_wrapped(&mut lines, &group.items.join(" · "), body);
        lines.push(Line::default());
    }

    // Contact
    sections.push((Section::Contact, lines.len() as u16));
    lines.push(section_rule("CONTACT", width, palette));
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(profile.education.degree.clone(), heading),
        Span::styled(" · ", muted),
        Span::styled(profile.education.school.clone(), body),
    ]));
    push_wrapped(&mut lines, &profile.education.detail, muted);
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        profile.contact.email.clone(),
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::UNDERLINED),
    )));
    push_wrapped(&mut lines, &profile.contact.location, body);
    push_wrapped(&mut lines, &profile.contact.availability, body);
    lines.push(Line::default());
    push_wrapped(
        &mut lines,
        "Press d to save a copy of the resume to your downloads folder.",
        muted,
    );
    lines.push(Line::default());
    push_wrapped(&mut lines, &profile.footer_line(), muted);

    (lines, sections)
}
