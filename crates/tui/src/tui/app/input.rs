use anyhow::Result;
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::tui::helpers::contains_point;

use super::App;

/// Everything a key press can mean while no overlay is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BrowseAction {
    Quit,
    ToggleThemeMenu,
    SaveResume,
    ShowHelp,
    NextHighlight,
    PreviousHighlight,
    JumpHighlight(usize),
    ScrollDown,
    ScrollUp,
    PageDown,
    PageUp,
    JumpTop,
    JumpBottom,
    NextSection,
    PreviousSection,
    ClearStatus,
}

impl BrowseAction {
    fn from_event(key: &KeyEvent) -> Option<Self> {
        if matches!(key.code, KeyCode::Char('c')) && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Self::Quit);
        }

        match key.code {
            KeyCode::Char('q') => Some(Self::Quit),
            KeyCode::Char('t') => Some(Self::ToggleThemeMenu),
            KeyCode::Char('d') => Some(Self::SaveResume),
            KeyCode::Char('?') => Some(Self::ShowHelp),
            KeyCode::Char('l') | KeyCode::Right => Some(Self::NextHighlight),
            KeyCode::Char('h') | KeyCode::Left => Some(Self::PreviousHighlight),
            KeyCode::Char(digit @ '1'..='9') => {
                Some(Self::JumpHighlight(digit as usize - '1' as usize))
            }
            KeyCode::Char('j') | KeyCode::Down => Some(Self::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Self::ScrollUp),
            KeyCode::PageDown | KeyCode::Char(' ') => Some(Self::PageDown),
            KeyCode::PageUp => Some(Self::PageUp),
            KeyCode::Char('g') | KeyCode::Home => Some(Self::JumpTop),
            KeyCode::Char('G') | KeyCode::End => Some(Self::JumpBottom),
            KeyCode::Tab => Some(Self::NextSection),
            KeyCode::BackTab => Some(Self::PreviousSection),
            KeyCode::Esc => Some(Self::ClearStatus),
            _ => None,
        }
    }
}

impl App {
    pub(crate) fn on_key(&mut self, key: KeyEvent) -> Result<()> {
        // Ctrl+C quits regardless of which overlay is up.
        if matches!(key.code, KeyCode::Char('c')) && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return Ok(());
        }

        if self.help_open {
            self.handle_help_key(key);
        } else if self.stage.theme_menu_open() {
            self.handle_theme_menu_key(key);
        } else {
            self.handle_browse_key(key);
        }
        Ok(())
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        let Some(action) = BrowseAction::from_event(&key) else {
            return;
        };

        match action {
            BrowseAction::Quit => self.quit(),
            BrowseAction::ToggleThemeMenu => self.toggle_theme_menu(),
            BrowseAction::SaveResume => self.save_resume(),
            BrowseAction::ShowHelp => self.show_help_overlay(),
            BrowseAction::NextHighlight => self.stage.next_highlight(),
            BrowseAction::PreviousHighlight => self.stage.previous_highlight(),
            BrowseAction::JumpHighlight(index) => self.stage.show_highlight(index),
            BrowseAction::ScrollDown => self.scroll_by(1),
            BrowseAction::ScrollUp => self.scroll_by(-1),
            BrowseAction::PageDown => self.page_down(),
            BrowseAction::PageUp => self.page_up(),
            BrowseAction::JumpTop => self.scroll_to(0),
            BrowseAction::JumpBottom => self.scroll_to(self.max_scroll),
            BrowseAction::NextSection => self.next_section(),
            BrowseAction::PreviousSection => self.previous_section(),
            BrowseAction::ClearStatus => self.status = None,
        }
    }

    fn handle_theme_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('t') => self.dismiss_theme_menu(),
            KeyCode::Down | KeyCode::Char('j') => self.menu_cursor_down(),
            KeyCode::Up | KeyCode::Char('k') => self.menu_cursor_up(),
            KeyCode::Enter => self.select_menu_theme(),
            KeyCode::Char(digit @ '1'..='9') => {
                let index = digit as usize - '1' as usize;
                if index < self.stage.themes().len() {
                    self.menu_cursor = index;
                    self.select_menu_theme();
                }
            }
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q') => {
                self.close_help_overlay();
            }
            _ => {}
        }
    }

    pub(crate) fn on_mouse(&mut self, event: MouseEvent) -> Result<()> {
        match event.kind {
            // Terminals report drags separately from plain motion; both
            // feed the trail.
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.pointer_seen = true;
                self.stage
                    .pointer_moved(f32::from(event.column), f32::from(event.row));
            }
            MouseEventKind::ScrollDown => self.scroll_by(3),
            MouseEventKind::ScrollUp => self.scroll_by(-3),
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_left_click(event.column, event.row);
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_left_click(&mut self, column: u16, row: u16) {
        if self.help_open {
            self.close_help_overlay();
            return;
        }

        if self.stage.theme_menu_open() {
            if let Some(menu) = self.menu_area {
                if contains_point(menu, column, row) {
                    // Row zero inside the border is the first theme.
                    let index = row.saturating_sub(menu.y + 1) as usize;
                    if index < self.stage.themes().len() {
                        self.menu_cursor = index;
                        self.select_menu_theme();
                    }
                    return;
                }
            }
            // A press anywhere else dismisses without applying.
            self.dismiss_theme_menu();
            return;
        }

        if let Some(fab) = self.fab_area {
            if contains_point(fab, column, row) {
                self.toggle_theme_menu();
            }
        }
    }
}
