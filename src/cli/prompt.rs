use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Input};
use std::io::{self, BufRead};

/// Source of customer answers.
pub trait Prompter {
    /// Returns the next answer, or `None` once input is closed.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Interactive prompts on an attended terminal.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact_text();

        match answer {
            Ok(text) => Ok(Some(text)),
            Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e).context("Failed to read answer from terminal"),
        }
    }
}

/// Reads one answer per line, for piped input.
pub struct LinePrompter<R> {
    reader: R,
}

impl<R: BufRead> LinePrompter<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Prompter for LinePrompter<R> {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .with_context(|| format!("Failed to read {}", prompt.to_lowercase()))?;

        if read == 0 {
            tracing::debug!("Input closed while asking for {}", prompt);
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
