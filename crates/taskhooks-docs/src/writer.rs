//! Output of the rendered reference page.

use std::fs;
use std::path::Path;

use tracing::info;

use taskhooks_core::error::{AppError, ErrorKind};
use taskhooks_core::result::AppResult;

/// Writes `content` to `path`, creating missing parent directories.
///
/// An existing file is overwritten.
pub fn write_docs(path: &Path, content: &str) -> AppResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create directory '{}': {e}", parent.display()),
                e,
            )
        })?;
    }

    fs::write(path, content).map_err(|e| {
        AppError::with_source(
            ErrorKind::Storage,
            format!("Failed to write '{}': {e}", path.display()),
            e,
        )
    })?;

    info!(path = %path.display(), bytes = content.len(), "Hook docs written");
    Ok(())
}
