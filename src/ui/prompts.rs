//! ui::prompts
//!
//! Confirmation prompts.
//!
//! Answers are read line by line. `y` and `yes` (any case) confirm; anything
//! else, including end of input, declines.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use thiserror::Error;

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("operation canceled")]
    Cancelled,

    #[error("IO error: {0}")]
    IoError(String),
}

/// Source of answers to prompts.
pub trait Prompter {
    /// Show `message` and return the trimmed answer.
    fn prompt(&mut self, message: &str) -> Result<String, PromptError>;
}

/// Prompts on stderr and reads answers from stdin.
#[derive(Debug, Default)]
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn prompt(&mut self, message: &str) -> Result<String, PromptError> {
        let mut stderr = io::stderr();
        write!(stderr, "{} ", message).map_err(|e| PromptError::IoError(e.to_string()))?;
        stderr
            .flush()
            .map_err(|e| PromptError::IoError(e.to_string()))?;

        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| PromptError::IoError(e.to_string()))?;
        Ok(line.trim().to_string())
    }
}

/// Replays fixed answers, for tests.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Messages shown so far.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt(&mut self, message: &str) -> Result<String, PromptError> {
        self.asked.push(message.to_string());
        // Running out of answers behaves like end of input.
        Ok(self.answers.pop_front().unwrap_or_default().trim().to_string())
    }
}

/// Whether `answer` confirms.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Ask `message` followed by `[y/n]`.
///
/// Returns `Err(PromptError::Cancelled)` unless the answer confirms.
pub fn confirm(prompter: &mut dyn Prompter, message: &str) -> Result<(), PromptError> {
    let answer = prompter.prompt(&format!("{} [y/n]", message))?;
    if is_yes(&answer) {
        Ok(())
    } else {
        Err(PromptError::Cancelled)
    }
}
