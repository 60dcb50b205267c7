use std::time::Duration;

pub(crate) const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// One tick per frame of the follower animation; scroll, rotation, and status
// pruning ride the same cadence.
pub(crate) const TICK_RATE: Duration = Duration::from_millis(16);

pub(crate) const STATUS_PRUNE_AFTER: Duration = Duration::from_secs(5);

pub(crate) const STATUS_THEME_MENU: &str =
    "Theme picker: ↑/↓ choose • Enter or 1-4 apply • Esc or a click elsewhere closes";
pub(crate) const STATUS_HELP: &str = "Keyboard reference: Enter/Esc to close";
