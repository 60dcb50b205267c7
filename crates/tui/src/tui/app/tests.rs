use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use pretty_assertions::assert_eq;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use rstest::rstest;

use folio_core::carousel::ROTATION_PERIOD;

use crate::tui::helpers::{anchored_bottom_right, centered_rect, contains_point, wrap_plain};

use super::App;

fn app() -> App {
    App::new().expect("embedded content pack")
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn centered_rect_keeps_within_bounds() {
    let area = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };
    let rect = centered_rect(40, 10, area);
    assert!(rect.x >= area.x);
    assert!(rect.y >= area.y);
    assert!(rect.width <= area.width);
    assert!(rect.height <= area.height);
    assert_eq!(rect.width, 40);
    assert_eq!(rect.height, 10);
}

#[test]
fn anchored_rect_hugs_the_bottom_right_corner() {
    let area = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };
    let rect = anchored_bottom_right(12, 3, area, 1);
    assert_eq!(rect.x + rect.width + 1, area.width);
    assert_eq!(rect.y + rect.height + 1, area.height);
    assert!(contains_point(rect, rect.x, rect.y));
    assert!(!contains_point(rect, rect.x + rect.width, rect.y));
}

#[test]
fn wrap_plain_respects_the_column_width() {
    let rows = wrap_plain("calm software for loud environments", 12);
    assert!(rows.iter().all(|row| row.chars().count() <= 12));
    assert_eq!(rows.join(" "), "calm software for loud environments");
}

#[test]
fn wrap_plain_splits_oversized_words() {
    let rows = wrap_plain("incomprehensibilities", 8);
    assert!(rows.len() > 1);
    assert!(rows.iter().all(|row| row.chars().count() <= 8));
}

#[test]
fn wrap_plain_keeps_a_blank_row_for_empty_text() {
    assert_eq!(wrap_plain("", 20), vec![String::new()]);
}

#[test]
fn key_t_opens_and_escape_dismisses_the_theme_menu() {
    let mut app = app();
    app.on_key(key(KeyCode::Char('t'))).unwrap();
    assert!(app.stage.theme_menu_open());

    app.on_key(key(KeyCode::Esc)).unwrap();
    assert!(!app.stage.theme_menu_open());
    assert_eq!(app.stage.active_theme().id, "aurora");
}

#[test]
fn menu_digit_applies_a_theme_and_closes() {
    let mut app = app();
    app.on_key(key(KeyCode::Char('t'))).unwrap();
    app.on_key(key(KeyCode::Char('4'))).unwrap();
    assert!(!app.stage.theme_menu_open());
    assert_eq!(app.stage.active_theme().id, "noir");
}

#[test]
fn menu_cursor_wraps_and_enter_applies() {
    let mut app = app();
    app.on_key(key(KeyCode::Char('t'))).unwrap();
    // The cursor starts on the active theme, so Up wraps to the last entry.
    app.on_key(key(KeyCode::Up)).unwrap();
    app.on_key(key(KeyCode::Enter)).unwrap();
    assert_eq!(app.stage.active_theme().id, "noir");
}

#[test]
fn out_of_range_menu_digit_changes_nothing() {
    let mut app = app();
    app.on_key(key(KeyCode::Char('t'))).unwrap();
    app.on_key(key(KeyCode::Char('9'))).unwrap();
    assert!(app.stage.theme_menu_open());
    assert_eq!(app.stage.active_theme().id, "aurora");
}

#[rstest]
#[case(KeyCode::Char('l'), 1)]
#[case(KeyCode::Right, 1)]
#[case(KeyCode::Char('h'), 2)]
#[case(KeyCode::Left, 2)]
fn highlight_keys_step_with_wraparound(#[case] code: KeyCode, #[case] expected: usize) {
    let mut app = app();
    app.on_key(key(code)).unwrap();
    assert_eq!(app.stage.active_highlight_index(), expected);
}

#[test]
fn rotation_waits_for_its_period_after_manual_navigation() {
    let mut app = app();
    app.on_key(key(KeyCode::Char('l'))).unwrap();
    assert_eq!(app.stage.active_highlight_index(), 1);

    // Nowhere near the rotation deadline yet, so a tick must not advance.
    app.on_tick();
    assert_eq!(app.stage.active_highlight_index(), 1);

    app.last_rotation -= ROTATION_PERIOD;
    app.on_tick();
    assert_eq!(app.stage.active_highlight_index(), 2);
}

#[test]
fn scroll_sequence_drives_the_header_flag() {
    let mut app = app();
    app.max_scroll = 500;
    let mut flags = Vec::new();
    for offset in [0u16, 5, 11, 9, 100] {
        app.scroll_to(offset);
        flags.push(app.stage.scrolled());
    }
    assert_eq!(flags, vec![false, false, true, false, true]);
}

#[test]
fn wheel_scrolling_moves_three_rows() {
    let mut app = app();
    app.max_scroll = 500;
    app.on_mouse(MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    })
    .unwrap();
    assert_eq!(app.scroll_row, 3);

    app.on_mouse(MouseEvent {
        kind: MouseEventKind::ScrollUp,
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    })
    .unwrap();
    assert_eq!(app.scroll_row, 0);
}

#[test]
fn drawing_captures_hit_areas_and_clicks_select_a_theme() {
    let mut app = app();
    let backend = TestBackend::new(100, 30);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.draw(f)).unwrap();

    let fab = app.fab_area.expect("fab rect captured during draw");
    app.on_mouse(left_click(fab.x + 1, fab.y + 1)).unwrap();
    assert!(app.stage.theme_menu_open());

    terminal.draw(|f| app.draw(f)).unwrap();
    let menu = app.menu_area.expect("menu rect captured during draw");

    // Second row inside the border is the second theme.
    app.on_mouse(left_click(menu.x + 2, menu.y + 2)).unwrap();
    assert!(!app.stage.theme_menu_open());
    assert_eq!(app.stage.active_theme_index(), 1);
}

#[test]
fn clicking_outside_the_open_menu_dismisses_it() {
    let mut app = app();
    let backend = TestBackend::new(100, 30);
    let mut terminal = Terminal::new(backend).unwrap();
    app.on_key(key(KeyCode::Char('t'))).unwrap();
    terminal.draw(|f| app.draw(f)).unwrap();
    assert!(app.menu_area.is_some());

    app.on_mouse(left_click(0, 0)).unwrap();
    assert!(!app.stage.theme_menu_open());
    assert_eq!(app.stage.active_theme().id, "aurora");
}

#[test]
fn help_overlay_swallows_browse_keys() {
    let mut app = app();
    app.max_scroll = 500;
    app.on_key(key(KeyCode::Char('?'))).unwrap();
    assert!(app.help_open);

    app.on_key(key(KeyCode::Char('j'))).unwrap();
    assert_eq!(app.scroll_row, 0);

    app.on_key(key(KeyCode::Esc)).unwrap();
    assert!(!app.help_open);
}

#[test]
fn quit_retires_the_stage() {
    let mut app = app();
    app.on_key(key(KeyCode::Char('q'))).unwrap();
    assert!(app.should_quit());

    let before = *app.stage.attrs();
    app.on_mouse(MouseEvent {
        kind: MouseEventKind::Moved,
        column: 40,
        row: 12,
        modifiers: KeyModifiers::NONE,
    })
    .unwrap();
    app.on_tick();
    assert_eq!(*app.stage.attrs(), before);
}
