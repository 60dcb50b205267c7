use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "folio",
    version,
    about = "A personal portfolio that renders in your terminal instead of your browser.",
    author = "Noor Haddad",
    after_help = "Examples:\n  folio                Browse the portfolio in the terminal (same as `folio tui`)\n  folio desktop        Open the windowed shell\n  folio resume         Save the resume to your downloads directory\n  folio resume --out ~/Desktop"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CliCommand {
    /// Browse the portfolio in the keyboard-first terminal UI (default command)
    Tui,
    /// Open the iced-based desktop shell
    Desktop(DesktopArgs),
    /// Write the resume to disk and print where it landed
    Resume(ResumeArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct DesktopArgs {
    /// Start in a regular window instead of maximized
    #[arg(long)]
    pub windowed: bool,

    /// Theme to open with, by id (unknown ids fall back to the first theme)
    #[arg(long, value_name = "ID")]
    pub theme: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ResumeArgs {
    /// Destination directory (defaults to the platform downloads directory,
    /// or FOLIO_RESUME_DIR when set)
    #[arg(long = "out", value_name = "DIR")]
    pub out: Option<PathBuf>,
}
