//! `urlqr` / `urlqr interactive` – prompt for input and output directory.

use anyhow::Result;
use std::path::PathBuf;
use urlqr_core::config::UrlqrConfig;
use urlqr_core::input::{self, InputKind, INVALID_INPUT_MESSAGE};

use crate::cli::prompt::Prompter;

pub const INPUT_PROMPT: &str = "Enter a URL or the location of a CSV file";
pub const OUTPUT_DIR_PROMPT_PREFIX: &str = "Enter the output directory for QR code images";

/// The output directory question is only asked once the first answer classified as valid.
pub fn run_interactive(
    cfg: &UrlqrConfig,
    keep_going: bool,
    prompter: &mut impl Prompter,
) -> Result<()> {
    let raw = prompter.ask(INPUT_PROMPT)?;
    let kind = input::classify(&raw);
    if let InputKind::Invalid(_) = kind {
        println!("{}", INVALID_INPUT_MESSAGE);
        return Ok(());
    }

    let question = format!(
        "{} (default: {})",
        OUTPUT_DIR_PROMPT_PREFIX,
        cfg.default_output_dir.display()
    );
    let answer = prompter.ask(&question)?;
    let output_dir = resolve_output_dir(&answer, cfg);
    tracing::debug!(input = %raw, output_dir = %output_dir.display(), "interactive input resolved");

    super::process(cfg, &kind, &output_dir, keep_going)
}

/// Empty answer → configured default. Anything else is used verbatim.
fn resolve_output_dir(answer: &str, cfg: &UrlqrConfig) -> PathBuf {
    if answer.is_empty() {
        cfg.default_output_dir.clone()
    } else {
        PathBuf::from(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_answer_uses_default() {
        let cfg = UrlqrConfig::default();
        assert_eq!(resolve_output_dir("", &cfg), PathBuf::from("qrcodes"));
        assert_eq!(resolve_output_dir("out/x", &cfg), PathBuf::from("out/x"));
    }
}
