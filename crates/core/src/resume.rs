use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::UserDirs;

use crate::content;

static ENV_EXPORT_DIR: &str = "FOLIO_RESUME_DIR";

/// Write the embedded resume to `dest`, or to the resolved default export
/// directory when none is given. Returns the path written.
pub fn export(dest: Option<PathBuf>) -> Result<PathBuf> {
    let catalog = content::catalog()?;
    let dir = resolve_export_dir(dest)?;
    if !dir.exists() {
        fs::create_dir_all(&dir).with_context(|| {
            format!("Failed to create export directory at {}", dir.display())
        })?;
    }

    let path = dir.join(&catalog.profile.resume_file);
    fs::write(&path, content::RESUME_MARKDOWN)
        .with_context(|| format!("Failed to write resume to {}", path.display()))?;
    Ok(path)
}

fn resolve_export_dir(dest: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = dest {
        return Ok(dir);
    }

    if let Ok(env_dir) = env::var(ENV_EXPORT_DIR) {
        return Ok(PathBuf::from(env_dir));
    }

    if let Some(user) = UserDirs::new() {
        if let Some(downloads) = user.download_dir() {
            return Ok(downloads.to_path_buf());
        }
        return Ok(user.home_dir().to_path_buf());
    }

    Ok(env::current_dir()?)
}
