use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = folio::cli::Cli::parse();

    match cli.command {
        Some(folio::cli::CliCommand::Desktop(args)) => {
            let options = folio::DesktopOptions {
                start_maximized: !args.windowed,
                initial_theme: args.theme,
            };
            folio::desktop::run(options)?;
        }
        Some(folio::cli::CliCommand::Tui) | None => {
            folio::tui::run()?;
        }
        Some(command) => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            folio::commands::execute(command, &mut handle)?;
        }
    }

    Ok(())
}
