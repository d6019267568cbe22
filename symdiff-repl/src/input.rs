use rustyline::{error::ReadlineError, DefaultEditor};
use std::io::{self, BufRead, Lines, StdinLock};

/// A source of input lines.
pub trait Input {
    /// Reads one line, showing the given prompt if the source is interactive. The end of the input
    /// is reported as [`ReadlineError::Eof`].
    fn read_line(&mut self, prompt: &str) -> Result<String, ReadlineError>;
}

/// Reads lines from a terminal with line editing and history.
pub struct Interactive {
    editor: DefaultEditor,
}

impl Interactive {
    pub fn new() -> Result<Self, ReadlineError> {
        Ok(Self { editor: DefaultEditor::new()? })
    }
}

impl Input for Interactive {
    fn read_line(&mut self, prompt: &str) -> Result<String, ReadlineError> {
        let line = self.editor.readline(prompt)?;
        if !line.trim().is_empty() {
            self.editor.add_history_entry(&line)?;
        }
        Ok(line)
    }
}

/// Reads lines from piped stdin. Prompts are not shown.
pub struct Piped {
    lines: Lines<StdinLock<'static>>,
}

impl Piped {
    pub fn new() -> Self {
        Self { lines: io::stdin().lock().lines() }
    }
}

impl Input for Piped {
    fn read_line(&mut self, _: &str) -> Result<String, ReadlineError> {
        match self.lines.next() {
            Some(line) => Ok(line?),
            None => Err(ReadlineError::Eof),
        }
    }
}
