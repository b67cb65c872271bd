// src/export/fs_utils.rs

use crate::errors::AppResult;
use crate::ui::messages::warning;
use std::fs;
use std::path::Path;

/// Write `contents` to `path`, deleting any existing file first.
pub(crate) fn replace_file(path: &Path, contents: &str) -> AppResult<()> {
    if path.exists() {
        warning(format!("Overwriting existing file '{}'", path.display()));
        fs::remove_file(path)?;
    }
    fs::write(path, contents)?;
    Ok(())
}
