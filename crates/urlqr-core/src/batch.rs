//! CSV batch generation and dispatch of classified input.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::QrConfig;
use crate::csv_rows::CsvUrls;
use crate::input::InputKind;
use crate::qr;

/// What to do when generating one URL of a batch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchPolicy {
    /// Abort the remaining batch on the first failure.
    #[default]
    FailFast,
    /// Record the failure and move on to the next row.
    KeepGoing,
}

impl BatchPolicy {
    pub fn from_keep_going(keep_going: bool) -> Self {
        if keep_going {
            BatchPolicy::KeepGoing
        } else {
            BatchPolicy::FailFast
        }
    }
}

/// Per-URL outcome, reported as soon as it happens.
#[derive(Debug)]
pub enum BatchEvent<'a> {
    Generated { url: &'a str, path: &'a Path },
    Failed { url: &'a str, error: &'a anyhow::Error },
}

/// Summary of a run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub generated: Vec<PathBuf>,
    /// `(url, error chain)` for rows that failed under [`BatchPolicy::KeepGoing`].
    pub failed: Vec<(String, String)>,
    /// CSV rows without a usable `url` value.
    pub skipped: usize,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Generate a QR code for every non-blank `url` row of `csv_path`, in file order.
///
/// CSV read/parse errors are fatal under both policies. Rows processed before
/// a fatal error keep their files.
pub fn generate_from_csv(
    csv_path: &Path,
    output_dir: &Path,
    cfg: &QrConfig,
    policy: BatchPolicy,
    mut on_event: impl FnMut(&BatchEvent<'_>),
) -> Result<BatchReport> {
    let mut rows = CsvUrls::open(csv_path)?;
    let mut report = BatchReport::default();

    for url in rows.by_ref() {
        let url = url?;
        match qr::generate_qr_code(&url, output_dir, cfg) {
            Ok(path) => {
                on_event(&BatchEvent::Generated { url: &url, path: &path });
                report.generated.push(path);
            }
            Err(error) if policy == BatchPolicy::KeepGoing => {
                tracing::warn!(url = %url, "generation failed, continuing: {:#}", error);
                on_event(&BatchEvent::Failed { url: &url, error: &error });
                report.failed.push((url, format!("{:#}", error)));
            }
            Err(error) => {
                return Err(error.context(format!("failed to generate QR code for {}", url)));
            }
        }
    }

    report.skipped = rows.skipped();
    tracing::info!(
        csv = %csv_path.display(),
        generated = report.generated.len(),
        failed = report.failed.len(),
        skipped = report.skipped,
        "batch finished"
    );
    Ok(report)
}

/// Run the generator for an already classified input.
///
/// `Invalid` input is a no-op returning an empty report; reporting it is the caller's job.
pub fn process_input(
    input: &InputKind,
    output_dir: &Path,
    cfg: &QrConfig,
    policy: BatchPolicy,
    mut on_event: impl FnMut(&BatchEvent<'_>),
) -> Result<BatchReport> {
    match input {
        InputKind::Url(url) => {
            let path = qr::generate_qr_code(url, output_dir, cfg)?;
            on_event(&BatchEvent::Generated { url, path: &path });
            Ok(BatchReport {
                generated: vec![path],
                ..BatchReport::default()
            })
        }
        InputKind::Csv(path) => generate_from_csv(path, output_dir, cfg, policy, on_event),
        InputKind::Invalid(raw) => {
            tracing::debug!(input = %raw, "ignoring invalid input");
            Ok(BatchReport::default())
        }
    }
}
