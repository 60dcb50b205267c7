//! Core update loop translating user interactions into stage transitions.

use std::path::PathBuf;
use std::time::Instant;

use iced::keyboard::{key::Named, Event as KeyboardEvent, Key, Modifiers};
use iced::widget::operation;
use iced::widget::scrollable::{RelativeOffset, Viewport};
use iced::Point;

use crate::app::commands::export_resume_command;
use crate::app::message::{Effect, Message};
use crate::app::state::{Section, StatusToast, ToastKind};
use crate::app::theme::Palette;
use crate::telemetry::Event as TelemetryEvent;

use super::desktop::FolioDesktop;

impl FolioDesktop {
    pub(super) fn react(&mut self, message: Message) -> Effect {
        self.prune_toast();
        match message {
            Message::ThemeMenuToggled => {
                self.stage.toggle_theme_menu();
                Effect::none()
            }
            Message::ThemeMenuDismissed => {
                self.stage.dismiss_theme_menu();
                Effect::none()
            }
            Message::ThemeSelected(id) => self.select_theme(id),
            Message::PreviousHighlight => {
                self.stage.previous_highlight();
                self.record_highlight_choice();
                Effect::none()
            }
            Message::NextHighlight => {
                self.stage.next_highlight();
                self.record_highlight_choice();
                Effect::none()
            }
            Message::HighlightRequested(index) => {
                self.stage.show_highlight(index);
                self.record_highlight_choice();
                Effect::none()
            }
            Message::RotationTick => {
                self.stage.rotation_tick();
                self.telemetry.record(TelemetryEvent::HighlightRotated {
                    index: self.stage.active_highlight_index(),
                });
                Effect::none()
            }
            Message::FrameTick => {
                self.stage.animation_step();
                Effect::none()
            }
            Message::PointerMoved(position) => self.on_pointer_moved(position),
            Message::PageScrolled(viewport) => self.on_page_scrolled(viewport),
            Message::SectionRequested(section) => self.jump_to_section(section),
            Message::ResumeRequested => self.request_resume_export(),
            Message::ResumeSaved(result) => self.finish_resume_export(result),
            Message::Keyboard(event) => self.handle_keyboard(event),
        }
    }

    pub(super) fn select_theme(&mut self, id: &str) -> Effect {
        self.stage.select_theme(id);
        let active = self.stage.active_theme();
        if active.id == id {
            self.palette = Palette::for_theme(&active.id);
            self.telemetry
                .record(TelemetryEvent::ThemeChanged(active.id.clone()));
            self.status = Some(StatusToast {
                message: format!("{} · {}", active.name, active.tagline),
                kind: ToastKind::Info,
                created_at: Instant::now(),
            });
        }
        Effect::none()
    }

    pub(super) fn on_pointer_moved(&mut self, position: Point) -> Effect {
        self.pointer_seen = true;
        self.stage.pointer_moved(position.x, position.y);
        Effect::none()
    }

    pub(super) fn on_page_scrolled(&mut self, viewport: Viewport) -> Effect {
        self.stage.observe_scroll(viewport.absolute_offset().y);
        Effect::none()
    }

    pub(super) fn jump_to_section(&mut self, section: Section) -> Effect {
        self.telemetry
            .record(TelemetryEvent::SectionJumped(section.title().into()));
        operation::snap_to(
            self.page_id.clone(),
            RelativeOffset {
                x: 0.0,
                y: section.anchor(),
            },
        )
    }

    pub(super) fn request_resume_export(&mut self) -> Effect {
        if self.exporting {
            return Effect::none();
        }
        self.exporting = true;
        self.telemetry.record(TelemetryEvent::ExportRequested);
        export_resume_command(None)
    }

    pub(super) fn finish_resume_export(&mut self, result: Result<PathBuf, String>) -> Effect {
        self.exporting = false;
        match result {
            Ok(path) => {
                let display = path.display().to_string();
                self.telemetry
                    .record(TelemetryEvent::ExportCompleted(display.clone()));
                self.status = Some(StatusToast {
                    message: format!("Saved resume to {display}"),
                    kind: ToastKind::Info,
                    created_at: Instant::now(),
                });
            }
            Err(err) => {
                self.telemetry
                    .record(TelemetryEvent::ExportFailed { error: err.clone() });
                self.status = Some(StatusToast {
                    message: format!("Resume export failed: {err}"),
                    kind: ToastKind::Error,
                    created_at: Instant::now(),
                });
            }
        }
        Effect::none()
    }

    pub(super) fn handle_keyboard(&mut self, event: KeyboardEvent) -> Effect {
        match event {
            KeyboardEvent::KeyPressed { key, modifiers, .. } => {
                self.on_key_pressed(key, modifiers)
            }
            _ => Effect::none(),
        }
    }

    pub(super) fn on_key_pressed(&mut self, key: Key, modifiers: Modifiers) -> Effect {
        if modifiers.command() {
            if let Key::Character(value) = key.as_ref() {
                if value.eq_ignore_ascii_case("s") {
                    return self.request_resume_export();
                }
            }
            return Effect::none();
        }

        if self.stage.theme_menu_open() {
            match key.as_ref() {
                Key::Named(Named::Escape) => {
                    self.stage.dismiss_theme_menu();
                }
                Key::Character(value) => {
                    if value.eq_ignore_ascii_case("t") {
                        self.stage.dismiss_theme_menu();
                    } else if let Some(choice) =
                        value.parse::<usize>().ok().and_then(|n| n.checked_sub(1))
                    {
                        if let Some(theme) = self.stage.themes().get(choice) {
                            return self.select_theme(theme.id.as_str());
                        }
                    }
                }
                _ => {}
            }
            return Effect::none();
        }

        match key.as_ref() {
            Key::Named(Named::ArrowLeft) => {
                self.stage.previous_highlight();
                self.record_highlight_choice();
                Effect::none()
            }
            Key::Named(Named::ArrowRight) => {
                self.stage.next_highlight();
                self.record_highlight_choice();
                Effect::none()
            }
            Key::Character(value) => match value.to_ascii_lowercase().as_str() {
                "t" => {
                    self.stage.toggle_theme_menu();
                    Effect::none()
                }
                "d" => self.request_resume_export(),
                _ => Effect::none(),
            },
            _ => Effect::none(),
        }
    }

    fn record_highlight_choice(&mut self) {
        self.telemetry.record(TelemetryEvent::HighlightChosen {
            index: self.stage.active_highlight_index(),
        });
    }
}
