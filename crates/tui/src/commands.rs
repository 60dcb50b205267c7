use std::io::Write;

use anyhow::{anyhow, Result};

use crate::cli::{CliCommand, ResumeArgs};
use folio_core::resume;

pub fn execute<W: Write>(command: CliCommand, mut writer: W) -> Result<()> {
    match command {
        CliCommand::Resume(args) => handle_resume(&args, &mut writer),
        CliCommand::Tui | CliCommand::Desktop(_) => {
            Err(anyhow!("launch interactive surfaces directly"))
        }
    }
}

fn handle_resume<W: Write>(args: &ResumeArgs, mut writer: W) -> Result<()> {
    let path = resume::export(args.out.clone())?;
    writeln!(writer, "Saved resume to {}", path.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn resume_command_writes_the_file_and_reports_the_path() {
        let dir = TempDir::new().expect("temp dir");
        let args = ResumeArgs {
            out: Some(dir.path().to_path_buf()),
        };

        let mut output = Vec::new();
        execute(CliCommand::Resume(args), &mut output).expect("execute resume");
        let output = String::from_utf8(output).expect("utf8");

        assert!(output.starts_with("Saved resume to "));
        let written = dir.path().join(
            folio_core::content::catalog()
                .expect("content pack")
                .profile
                .resume_file
                .as_str(),
        );
        assert!(written.exists());
        assert!(output.contains(&written.display().to_string()));
    }

    #[test]
    fn interactive_commands_are_refused() {
        let mut output = Vec::new();
        let err = execute(CliCommand::Tui, &mut output).unwrap_err();
        assert!(err.to_string().contains("launch interactive surfaces"));
        assert!(output.is_empty());
    }
}
