use std::time::Instant;

use anyhow::Result;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

use folio_core::carousel::ROTATION_PERIOD;
use folio_core::content;
use folio_core::resume;
use folio_core::stage::Stage;

use super::constants::*;

mod input;
mod render;
#[cfg(test)]
mod tests;

/// Page sections in document order. Start rows are captured while the page
/// is composed, so section jumps stay correct across resizes and rewraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Hero,
    Work,
    Projects,
    Skills,
    Contact,
}

impl Section {
    fn title(self) -> &'static str {
        match self {
            Section::Hero => "Top",
            Section::Work => "Work",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone)]
struct StatusMessage {
    text: String,
    kind: StatusKind,
    created_at: Instant,
}

impl StatusMessage {
    fn new<T: Into<String>>(text: T, kind: StatusKind) -> Self {
        Self {
            text: text.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    fn style(&self) -> Style {
        match self.kind {
            StatusKind::Info => Style::default().fg(Color::Cyan),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum StatusKind {
    Info,
    Error,
}

pub(crate) struct App {
    stage: Stage,
    /// First page row visible at the top of the viewport.
    scroll_row: u16,
    max_scroll: u16,
    viewport_rows: u16,
    /// (section, start row) pairs captured during the last compose.
    section_rows: Vec<(Section, u16)>,
    menu_cursor: usize,
    /// Screen rects captured during the last draw, used for click hit tests.
    menu_area: Option<Rect>,
    fab_area: Option<Rect>,
    /// The trail glyphs render only after the mouse has reported a position.
    pointer_seen: bool,
    help_open: bool,
    status: Option<StatusMessage>,
    last_rotation: Instant,
    should_quit: bool,
}

impl App {
    pub(crate) fn new() -> Result<Self> {
        let catalog = content::catalog()?;
        let mut stage = Stage::new(catalog);
        // Seed the scroll flag for the boot viewport, same as after a jump.
        stage.observe_scroll(0.0);
        Ok(Self {
            stage,
            scroll_row: 0,
            max_scroll: 0,
            viewport_rows: 0,
            section_rows: Vec::new(),
            menu_cursor: 0,
            menu_area: None,
            fab_area: None,
            pointer_seen: false,
            help_open: false,
            status: None,
            last_rotation: Instant::now(),
            should_quit: false,
        })
    }

    pub(crate) fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn quit(&mut self) {
        self.stage.retire();
        self.should_quit = true;
    }

    /// Runs once per frame: advances the highlight rotation when its period
    /// has elapsed, steps the pointer trail, and prunes stale status text.
    pub(crate) fn on_tick(&mut self) {
        if self.last_rotation.elapsed() >= ROTATION_PERIOD {
            self.stage.rotation_tick();
            self.last_rotation += ROTATION_PERIOD;
        }

        self.stage.animation_step();

        if let Some(status) = &self.status {
            if status.created_at.elapsed() > STATUS_PRUNE_AFTER {
                self.status = None;
            }
        }
    }

    fn scroll_to(&mut self, row: u16) {
        self.scroll_row = row.min(self.max_scroll);
        self.stage.observe_scroll(self.scroll_row as f32);
    }

    fn scroll_by(&mut self, delta: i32) {
        let target = if delta < 0 {
            self.scroll_row.saturating_sub(delta.unsigned_abs() as u16)
        } else {
            self.scroll_row.saturating_add(delta as u16)
        };
        self.scroll_to(target);
    }

    fn page_down(&mut self) {
        self.scroll_by(self.viewport_rows.saturating_sub(2) as i32);
    }

    fn page_up(&mut self) {
        self.scroll_by(-(self.viewport_rows.saturating_sub(2) as i32));
    }

    /// Index of the section the top of the viewport currently sits in.
    fn current_section_index(&self) -> usize {
        let mut index = 0;
        for (i, (_, row)) in self.section_rows.iter().enumerate() {
            if *row <= self.scroll_row {
                index = i;
            }
        }
        index
    }

    fn jump_to_section(&mut self, index: usize) {
        if let Some((_, row)) = self.section_rows.get(index).copied() {
            self.scroll_to(row);
        }
    }

    fn next_section(&mut self) {
        if self.section_rows.is_empty() {
            return;
        }
        let next = (self.current_section_index() + 1) % self.section_rows.len();
        self.jump_to_section(next);
    }

    fn previous_section(&mut self) {
        if self.section_rows.is_empty() {
            return;
        }
        let count = self.section_rows.len();
        let previous = (self.current_section_index() + count - 1) % count;
        self.jump_to_section(previous);
    }

    fn toggle_theme_menu(&mut self) {
        self.stage.toggle_theme_menu();
        if self.stage.theme_menu_open() {
            self.menu_cursor = self.stage.active_theme_index();
            self.set_status_info(STATUS_THEME_MENU);
        } else {
            self.menu_area = None;
            self.status = None;
        }
    }

    fn dismiss_theme_menu(&mut self) {
        self.stage.dismiss_theme_menu();
        self.menu_area = None;
        self.status = None;
    }

    fn menu_cursor_down(&mut self) {
        let count = self.stage.themes().len();
        if count > 0 {
            self.menu_cursor = (self.menu_cursor + 1) % count;
        }
    }

    fn menu_cursor_up(&mut self) {
        let count = self.stage.themes().len();
        if count > 0 {
            self.menu_cursor = (self.menu_cursor + count - 1) % count;
        }
    }

    /// Applies the theme under the menu cursor and reports the change.
    fn select_menu_theme(&mut self) {
        let Some(theme) = self.stage.themes().get(self.menu_cursor) else {
            return;
        };
        self.stage.select_theme(&theme.id);
        self.menu_area = None;
        self.set_status_info(format!("Theme: {} · {}", theme.name, theme.tagline));
    }

    fn save_resume(&mut self) {
        match resume::export(None) {
            Ok(path) => {
                self.set_status_info(format!("Saved resume to {} 📄", path.display()));
            }
            Err(err) => {
                self.set_status_error(format!("Resume export failed: {:#}", err));
            }
        }
    }

    fn show_help_overlay(&mut self) {
        self.help_open = true;
        self.set_status_info(STATUS_HELP);
    }

    fn close_help_overlay(&mut self) {
        self.help_open = false;
        self.status = None;
    }

    pub(crate) fn set_status_info<T: Into<String>>(&mut self, message: T) {
        let mut text = String::from("ℹ️  ");
        text.push_str(&message.into());
        self.status = Some(StatusMessage::new(text, StatusKind::Info));
    }

    pub(crate) fn set_status_error<T: Into<String>>(&mut self, message: T) {
        let mut text = String::from("⚠️  ");
        text.push_str(&message.into());
        self.status = Some(StatusMessage::new(text, StatusKind::Error));
    }
}
