//! Desktop application wiring that composes views, state, and the stage into the folio experience.

pub use self::desktop::run;
pub use self::options::DesktopOptions;

mod commands;
mod desktop;
mod message;
mod options;
mod state;
mod theme;
mod update;
mod views;

#[cfg(test)]
mod tests;
