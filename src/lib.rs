pub use folio_tui::cli;
pub use folio_tui::commands;
pub use folio_tui::tui;

pub use folio_core as core;
pub use folio_core::content;
pub use folio_core::resume;
pub use folio_core::Stage;

pub use folio_desktop as desktop;
pub use folio_desktop::DesktopOptions;
