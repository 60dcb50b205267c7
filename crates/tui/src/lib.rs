pub mod cli;
pub mod commands;
pub mod tui;

pub use folio_core as core;
pub use folio_core::content;
pub use folio_core::resume;

pub use folio_core::Stage;
