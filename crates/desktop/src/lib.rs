//! Desktop crate facade exposing the iced-based folio experience to the wider workspace.

mod app;
mod telemetry;

pub use app::{run, DesktopOptions};
