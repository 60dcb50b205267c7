//! Iced application wiring powering the folio desktop shell lifecycle.

use std::io::Cursor;
use std::time::Duration;

use anyhow::Result;
use folio_core::{Catalog, Stage, ROTATION_PERIOD};
use iced::event::{self, Event};
use iced::time;
use iced::widget::Id;
use iced::{mouse, window, Size, Subscription, Theme};

use crate::app::message::{Effect, Message};
use crate::app::options::{DesktopFlags, DesktopOptions};
use crate::app::state::StatusToast;
use crate::app::theme::Palette;
use crate::app::views;
use crate::telemetry::{self, Event as TelemetryEvent};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub fn run(options: DesktopOptions) -> Result<()> {
    let _ = tracing_subscriber::fmt::try_init();

    // Resolve the embedded catalog up front so a malformed content pack
    // fails before a window ever opens.
    let catalog = folio_core::content::catalog()?;

    let boot_flags = DesktopFlags::from(options);
    let window_settings = window::Settings {
        size: Size::new(1180.0, 800.0),
        min_size: Some(Size::new(900.0, 620.0)),
        maximized: boot_flags.start_maximized,
        icon: load_window_icon(),
        ..window::Settings::default()
    };

    iced::application(
        move || FolioDesktop::bootstrap(catalog, boot_flags.clone()),
        FolioDesktop::react,
        views::compose_root,
    )
    .window(window_settings)
    .title(app_title)
    .theme(app_theme)
    .subscription(app_subscription)
    .run()?;

    Ok(())
}

fn app_title(state: &FolioDesktop) -> String {
    format!(
        "{} · folio v{}",
        state.stage.catalog().profile.name,
        env!("CARGO_PKG_VERSION")
    )
}

fn app_theme(state: &FolioDesktop) -> Option<Theme> {
    Some(Palette::base_theme(&state.stage.active_theme().id))
}

fn app_subscription(state: &FolioDesktop) -> Subscription<Message> {
    state.subscription()
}

fn load_window_icon() -> Option<window::Icon> {
    const ICON_BYTES: &[u8] = include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../../icons/icon_256x256.png"
    ));

    let decoder = png::Decoder::new(Cursor::new(ICON_BYTES));
    let mut reader = decoder.read_info().ok()?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buf).ok()?;
    let bytes = &buf[..frame.buffer_size()];

    window::icon::from_rgba(bytes.to_vec(), frame.width, frame.height).ok()
}

pub(crate) struct FolioDesktop {
    pub(crate) stage: Stage,
    pub(crate) palette: Palette,
    pub(crate) page_id: Id,
    pub(crate) status: Option<StatusToast>,
    pub(crate) exporting: bool,
    pub(crate) pointer_seen: bool,
    pub(crate) telemetry: telemetry::Handle,
}

impl FolioDesktop {
    pub(super) fn bootstrap(catalog: &'static Catalog, flags: DesktopFlags) -> (Self, Effect) {
        let mut stage = Stage::new(catalog);
        if let Some(requested) = flags.initial_theme.as_deref() {
            stage.select_theme(requested);
            if stage.active_theme().id != requested {
                tracing::warn!(theme = requested, "requested boot theme is not in the catalog");
            }
        }

        let palette = Palette::for_theme(&stage.active_theme().id);
        let telemetry = telemetry::Handle::new();
        telemetry.record(TelemetryEvent::AppStarted);

        (
            Self {
                stage,
                palette,
                page_id: Id::new("portfolio_page"),
                status: None,
                exporting: false,
                pointer_seen: false,
                telemetry,
            },
            Effect::none(),
        )
    }
}

impl FolioDesktop {
    pub(crate) fn subscription(&self) -> Subscription<Message> {
        // The carousel interval runs for the lifetime of the window; manual
        // navigation never resets it.
        let rotation = time::every(ROTATION_PERIOD).map(|_| Message::RotationTick);

        // Frame ticks exist only while the follower is gliding, so an idle
        // page schedules no animation work at all.
        let frames = if self.stage.animating() {
            time::every(FRAME_INTERVAL).map(|_| Message::FrameTick)
        } else {
            Subscription::none()
        };

        let events = event::listen_with(|event, _, _| match event {
            Event::Keyboard(key_event) => Some(Message::Keyboard(key_event)),
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                Some(Message::PointerMoved(position))
            }
            _ => None,
        });

        Subscription::batch(vec![rotation, frames, events])
    }

    pub(super) fn prune_toast(&mut self) {
        if let Some(toast) = &self.status {
            if toast.created_at.elapsed() > Duration::from_secs(6) {
                self.status = None;
            }
        }
    }
}
