//! QR generation: encode a URL, render it, and save it as a PNG in an output directory.

mod encode;
mod error;
mod render;

pub use encode::encode;
pub use error::GenerateError;
pub use render::{render, to_png};

use anyhow::Result;
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

use crate::config::QrConfig;
use crate::filename;
use crate::storage;

/// Encode and render `url` to PNG bytes.
pub fn build_png(url: &str, cfg: &QrConfig) -> Result<Vec<u8>, GenerateError> {
    let code = encode(url.as_bytes(), cfg)?;
    let img = render(&code, cfg)?;
    Ok(to_png(&img)?)
}

/// Generate the QR code for `url` and save it under `output_dir`, named with the current time.
/// Returns the path of the written file.
pub fn generate_qr_code(url: &str, output_dir: &Path, cfg: &QrConfig) -> Result<PathBuf> {
    generate_qr_code_at(url, output_dir, cfg, filename::now())
}

/// Like [`generate_qr_code`] with an explicit timestamp for the filename.
pub fn generate_qr_code_at(
    url: &str,
    output_dir: &Path,
    cfg: &QrConfig,
    timestamp: NaiveDateTime,
) -> Result<PathBuf> {
    let png = build_png(url, cfg)?;
    let path = output_dir.join(filename::build_filename(url, timestamp));
    storage::write_file(&path, &png)?;
    tracing::info!(url, path = %path.display(), "QR code generated");
    Ok(path)
}
