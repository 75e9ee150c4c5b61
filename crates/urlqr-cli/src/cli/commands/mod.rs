//! CLI command handlers.

mod generate;
mod interactive;

pub use generate::run_generate;
pub use interactive::run_interactive;
#[cfg(test)]
pub use interactive::{INPUT_PROMPT, OUTPUT_DIR_PROMPT_PREFIX};

use anyhow::{bail, Result};
use std::path::Path;
use urlqr_core::batch::{self, BatchEvent, BatchPolicy};
use urlqr_core::config::UrlqrConfig;
use urlqr_core::input::InputKind;

/// Generate for a classified input and print one line per URL.
/// Fails if any row of a `--keep-going` batch failed, after the whole batch ran.
fn process(
    cfg: &UrlqrConfig,
    kind: &InputKind,
    output_dir: &Path,
    keep_going: bool,
) -> Result<()> {
    let policy = BatchPolicy::from_keep_going(keep_going || cfg.continue_on_error);
    let report = batch::process_input(kind, output_dir, &cfg.qr, policy, print_event)?;
    if !report.is_clean() {
        bail!(
            "{} of {} URL(s) failed",
            report.failed.len(),
            report.failed.len() + report.generated.len()
        );
    }
    Ok(())
}

fn print_event(event: &BatchEvent<'_>) {
    match event {
        BatchEvent::Generated { url, path } => {
            println!("QR code for {} generated and saved to {}", url, path.display())
        }
        BatchEvent::Failed { url, error } => {
            eprintln!("Failed to generate QR code for {}: {:#}", url, error)
        }
    }
}
