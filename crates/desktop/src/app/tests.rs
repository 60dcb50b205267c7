//! Exercised flows keep the desktop shell aligned with the page behaviors it fronts.

use std::time::{Duration, Instant};

use iced::keyboard::{key::Named, Key, Modifiers};
use iced::Point;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use super::desktop::FolioDesktop;
use super::message::Message;
use super::options::{DesktopFlags, DesktopOptions};
use super::state::{Section, ToastKind};
use super::theme::Palette;

fn boot() -> FolioDesktop {
    boot_with(DesktopOptions::default())
}

fn boot_with(options: DesktopOptions) -> FolioDesktop {
    let catalog = folio_core::content::catalog().expect("embedded catalog parses");
    let (app, _) = FolioDesktop::bootstrap(catalog, DesktopFlags::from(options));
    app
}

#[test]
fn bootstrap_lands_on_the_first_catalog_theme() {
    let app = boot();
    assert_eq!(app.stage.active_theme_index(), 0);
    assert!(!app.stage.theme_menu_open());
    assert!(!app.stage.animating());
}

#[test]
fn initial_theme_flag_applies_before_the_first_frame() {
    let app = boot_with(DesktopOptions {
        initial_theme: Some("noir".into()),
        ..DesktopOptions::default()
    });
    assert_eq!(app.stage.active_theme().id, "noir");
    assert_eq!(app.palette.accent, Palette::for_theme("noir").accent);
}

#[test]
fn unknown_initial_theme_keeps_the_boot_look() {
    let app = boot_with(DesktopOptions {
        initial_theme: Some("solarized".into()),
        ..DesktopOptions::default()
    });
    assert_eq!(app.stage.active_theme_index(), 0);
}

#[test]
fn selecting_a_theme_closes_the_menu_and_recolors() {
    let mut app = boot();
    let _ = app.react(Message::ThemeMenuToggled);
    assert!(app.stage.theme_menu_open());

    let _ = app.react(Message::ThemeSelected("ember"));
    assert!(!app.stage.theme_menu_open());
    assert_eq!(app.stage.active_theme().id, "ember");
    assert_eq!(app.palette.accent, Palette::for_theme("ember").accent);
}

#[test]
fn unknown_theme_selection_changes_nothing_and_keeps_the_menu() {
    let mut app = boot();
    let _ = app.react(Message::ThemeMenuToggled);
    let _ = app.react(Message::ThemeSelected("velvet"));
    assert!(app.stage.theme_menu_open());
    assert_eq!(app.stage.active_theme_index(), 0);
}

#[test]
fn escape_dismisses_the_open_theme_menu() {
    let mut app = boot();
    let _ = app.react(Message::ThemeMenuToggled);

    let _ = app.on_key_pressed(Key::Named(Named::Escape), Modifiers::default());
    assert!(!app.stage.theme_menu_open());
}

#[test]
fn menu_digits_pick_a_theme_and_out_of_range_is_ignored() {
    let mut app = boot();
    let _ = app.react(Message::ThemeMenuToggled);

    let _ = app.on_key_pressed(Key::Character("9".into()), Modifiers::default());
    assert!(app.stage.theme_menu_open());
    assert_eq!(app.stage.active_theme_index(), 0);

    let _ = app.on_key_pressed(Key::Character("4".into()), Modifiers::default());
    assert!(!app.stage.theme_menu_open());
    assert_eq!(app.stage.active_theme().id, "noir");
}

#[test]
fn arrow_keys_walk_the_carousel_both_ways() {
    let mut app = boot();
    let _ = app.on_key_pressed(Key::Named(Named::ArrowRight), Modifiers::default());
    assert_eq!(app.stage.active_highlight_index(), 1);

    let _ = app.on_key_pressed(Key::Named(Named::ArrowLeft), Modifiers::default());
    assert_eq!(app.stage.active_highlight_index(), 0);
}

#[test]
fn rotation_ticks_wrap_around_the_catalog() {
    let mut app = boot();
    let count = app.stage.highlights().len();
    for _ in 0..count {
        let _ = app.react(Message::RotationTick);
    }
    assert_eq!(app.stage.active_highlight_index(), 0);
}

#[test]
fn out_of_range_highlight_requests_are_ignored() {
    let mut app = boot();
    let _ = app.react(Message::HighlightRequested(1));
    let _ = app.react(Message::HighlightRequested(100));
    assert_eq!(app.stage.active_highlight_index(), 1);
}

#[test]
fn pointer_motion_arms_frames_until_the_follower_settles() {
    let mut app = boot();
    assert!(!app.pointer_seen);

    let _ = app.react(Message::PointerMoved(Point::new(420.0, 260.0)));
    assert!(app.pointer_seen);
    assert!(app.stage.animating());

    let mut steps = 0;
    while app.stage.animating() && steps < 1_000 {
        let _ = app.react(Message::FrameTick);
        steps += 1;
    }
    assert!(!app.stage.animating());
    assert!(steps > 1);
}

#[test]
fn export_flow_guards_reentry_and_reports_completion() {
    let mut app = boot();
    let _ = app.react(Message::ResumeRequested);
    assert!(app.exporting);

    let _ = app.react(Message::ResumeRequested);
    assert!(app.exporting);

    let dir = TempDir::new().expect("temp dir");
    let saved = folio_core::resume::export(Some(dir.path().to_path_buf())).expect("export resume");
    let _ = app.react(Message::ResumeSaved(Ok(saved.clone())));
    assert!(!app.exporting);
    let toast = app.status.as_ref().expect("completion toast");
    assert!(matches!(toast.kind, ToastKind::Info));
    assert!(toast.message.contains(&saved.display().to_string()));
}

#[test]
fn export_failure_surfaces_an_error_toast() {
    let mut app = boot();
    let _ = app.react(Message::ResumeRequested);
    let _ = app.react(Message::ResumeSaved(Err("disk full".into())));
    assert!(!app.exporting);
    let toast = app.status.as_ref().expect("failure toast");
    assert!(matches!(toast.kind, ToastKind::Error));
    assert!(toast.message.contains("disk full"));
}

#[test]
fn stale_toasts_prune_on_the_next_message() {
    let mut app = boot();
    let _ = app.react(Message::ResumeRequested);
    let _ = app.react(Message::ResumeSaved(Err("disk full".into())));
    assert!(app.status.is_some());

    if let Some(toast) = app.status.as_mut() {
        toast.created_at = Instant::now() - Duration::from_secs(7);
    }
    let _ = app.react(Message::FrameTick);
    assert!(app.status.is_none());
}

#[test]
fn cmd_s_requests_an_export() {
    let mut app = boot();
    let _ = app.on_key_pressed(Key::Character("s".into()), Modifiers::COMMAND);
    assert!(app.exporting);
}

#[test]
fn section_anchors_scan_the_page_top_to_bottom() {
    let anchors: Vec<f32> = Section::ALL
        .iter()
        .map(|section| section.anchor())
        .collect();
    assert_eq!(anchors.first(), Some(&0.0));
    assert_eq!(anchors.last(), Some(&1.0));
    assert!(anchors.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn telemetry_accumulates_interaction_events() {
    let mut app = boot();
    if !app.telemetry.is_enabled() {
        return;
    }
    let baseline = app.telemetry.events_len();
    let _ = app.react(Message::NextHighlight);
    let _ = app.react(Message::ThemeSelected("coastal"));
    assert!(app.telemetry.events_len() >= baseline + 2);
}
