use rustyline::error::ReadlineError;
use std::io;
use symdiff_error::Error as ExprError;

/// Utility enum to package errors that can occur while running the driver.
#[derive(Debug)]
pub enum Error {
    /// The expression could not be parsed.
    Parse(ExprError),

    /// Reading a line of input failed, or the input ended early.
    Input(ReadlineError),

    /// Writing the results failed.
    Output(io::Error),
}

impl Error {
    /// Report this error to stderr, highlighting the given input where the error has spans into
    /// it.
    pub fn report_to_stderr(&self, input: &str) {
        match self {
            Self::Parse(err) => err.report_to_stderr("input", input),
            Self::Input(ReadlineError::Eof | ReadlineError::Interrupted) => (),
            Self::Input(err) => eprintln!("{}", err),
            Self::Output(err) => eprintln!("{}", err),
        }
    }
}

impl From<ExprError> for Error {
    fn from(err: ExprError) -> Self {
        Self::Parse(err)
    }
}

impl From<ReadlineError> for Error {
    fn from(err: ReadlineError) -> Self {
        Self::Input(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Output(err)
    }
}
