//! Output filename derivation.
//!
//! Names have the form `qrcode_<sanitized-url>_<YYYYMMDDHHMMSS>.png`. The
//! timestamp has second resolution, so two codes for the same URL generated
//! within one second share a name (the later write wins). No length limit is
//! applied.

mod sanitize;

pub use sanitize::sanitize_url;

use chrono::{Local, NaiveDateTime};

pub const FILENAME_PREFIX: &str = "qrcode_";
pub const FILENAME_EXTENSION: &str = "png";

/// `strftime` pattern of the timestamp suffix.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Builds the PNG filename for `url` generated at `timestamp`. Deterministic.
///
/// # Examples
///
/// - `https://example.com` at 2024-03-01 12:30:05 → `qrcode_https_example_com_20240301123005.png`
pub fn build_filename(url: &str, timestamp: NaiveDateTime) -> String {
    format!(
        "{}{}_{}.{}",
        FILENAME_PREFIX,
        sanitize_url(url),
        timestamp.format(TIMESTAMP_FORMAT),
        FILENAME_EXTENSION
    )
}

/// Current local wall-clock time, as used for filenames.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
