//! `urlqr generate <input>` – generate without prompting.

use anyhow::Result;
use std::path::Path;
use urlqr_core::config::UrlqrConfig;
use urlqr_core::input::{self, InputKind, INVALID_INPUT_MESSAGE};

pub fn run_generate(
    cfg: &UrlqrConfig,
    input: &str,
    output_dir: Option<&Path>,
    keep_going: bool,
) -> Result<()> {
    let kind = input::classify(input);
    if let InputKind::Invalid(_) = kind {
        println!("{}", INVALID_INPUT_MESSAGE);
        return Ok(());
    }
    let output_dir = output_dir.unwrap_or(cfg.default_output_dir.as_path());
    super::process(cfg, &kind, output_dir, keep_going)
}
