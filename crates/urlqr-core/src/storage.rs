//! Disk I/O for generated images.
//!
//! Bytes go to a short `.urlqr-<pid>.part` file in the destination directory,
//! are synced, then renamed over the final name, so a crash never leaves a
//! truncated PNG under the real name. The temp name has a fixed length, so any
//! final name the filesystem accepts can be written. One writer per process;
//! existing files with the final name are replaced.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before the rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Temp file for `final_path`: `.urlqr-<pid>.part` in the same directory.
pub fn temp_path(final_path: &Path) -> PathBuf {
    let name = format!(".urlqr-{}{}", std::process::id(), TEMP_SUFFIX);
    match final_path.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}

/// Create `dir` and every missing parent. Succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create directory {}", dir.display()))
}

/// Write `data` to `final_path`, creating parent directories as needed.
pub fn write_file(final_path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = final_path.parent() {
        ensure_dir(parent)?;
    }

    let tp = temp_path(final_path);
    let mut file = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&tp)
        .with_context(|| format!("failed to create temp file: {}", tp.display()))?;
    let written = file
        .write_all(data)
        .and_then(|_| file.sync_all())
        .with_context(|| format!("failed to write {}", tp.display()));
    drop(file);
    if let Err(e) = written {
        let _ = fs::remove_file(&tp);
        return Err(e);
    }

    fs::rename(&tp, final_path).with_context(|| {
        format!(
            "failed to rename {} to {}",
            tp.display(),
            final_path.display()
        )
    })?;
    tracing::debug!(path = %final_path.display(), bytes = data.len(), "file written");
    Ok(())
}
