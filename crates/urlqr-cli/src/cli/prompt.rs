//! Line prompts for the interactive flow.

use anyhow::{bail, Context, Result};
use std::io::{self, BufRead, IsTerminal, Write};

/// Source of answers to interactive questions.
pub trait Prompter {
    /// Show `prompt` and return the answer without its line ending. May be empty.
    fn ask(&mut self, prompt: &str) -> Result<String>;
}

/// dialoguer draws on stderr and reads keys from the tty, so it is only usable
/// when both ends are terminals. Piped stdin always gets line reads.
pub fn use_terminal_input(stdin_is_tty: bool, stderr_is_tty: bool) -> bool {
    stdin_is_tty && stderr_is_tty
}

/// Uses dialoguer on an attended terminal, plain stdin lines otherwise (pipes, scripts).
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        if use_terminal_input(io::stdin().is_terminal(), console::user_attended_stderr()) {
            let answer = dialoguer::Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
                .context("failed to read answer from terminal")?;
            return Ok(answer);
        }

        let mut stdout = io::stdout().lock();
        write!(stdout, "{}: ", prompt)?;
        stdout.flush()?;
        drop(stdout);

        let mut line = String::new();
        let n = io::stdin()
            .lock()
            .read_line(&mut line)
            .context("failed to read answer from stdin")?;
        if n == 0 {
            bail!("stdin closed while waiting for: {}", prompt);
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }
}
