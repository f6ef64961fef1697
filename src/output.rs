use crate::error::Result;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const STRUCTURE_FILE: &str = "themes-site-structure.json";
pub const SCREENSHOT_FILE: &str = "themes-site-screenshot.png";
pub const THEMES_FILE: &str = "themes-with-github.json";

/// Creates the output directory and any missing parents
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Writes `value` as indented JSON to `dir/file_name`, returning the path written
pub fn write_json<T: Serialize>(dir: &Path, file_name: &str, value: &T) -> Result<PathBuf> {
    ensure_dir(dir)?;
    let path = dir.join(file_name);
    let json = serde_json::to_string_pretty(value)?;
    fs::write(&path, json)?;
    ::log::debug!("Wrote {}", path.display());
    Ok(path)
}

pub fn write_bytes(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
    ensure_dir(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, bytes)?;
    ::log::debug!("Wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(path)
}
