//! Error handling for the scaffold application.
//! Defines the error types and result alias used throughout the crate.

use std::io;
use thiserror::Error;

/// All errors that can occur while splitting, rendering, materializing
/// or scanning templates.
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem failures (permissions, read/write errors).
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Failures reported by the template engine while rendering the body.
    #[error("Template error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    /// The JSON input record could not be decoded.
    #[error("Invalid input record: {0}")]
    DecodeError(#[from] serde_json::Error),

    /// The JSON input record decoded to something other than an object.
    #[error("Invalid input record: expected a JSON object, got {kind}")]
    RecordNotObject { kind: &'static str },

    /// The template text has no blank line separating head from body.
    #[error("Template has no blank line separating head from body")]
    SplitError,

    /// A file context was opened while another file context was still open.
    #[error("Syntax error in line {line}: embedding file within file is not allowed ('{name}' inside '{open}')")]
    FileInFile { line: usize, name: String, open: String },

    /// A folder context was opened while a file context was still open.
    #[error("Syntax error in line {line}: embedding folder within file is not allowed ('{name}' inside '{open}')")]
    FolderInFile { line: usize, name: String, open: String },

    /// A folder close marker named a folder other than the innermost open one.
    #[error("Syntax error in line {line}: closing folder '{actual}' but should close folder '{expected}'")]
    FolderCloseMismatch { line: usize, expected: String, actual: String },

    /// A file close marker named a file other than the currently open one.
    #[error("Syntax error in line {line}: closing file '{actual}' but should close file '{expected}'")]
    FileCloseMismatch { line: usize, expected: String, actual: String },

    /// A close marker was seen while no context of that kind was open.
    #[error("Syntax error in line {line}: closing '{name}' but no matching context is open")]
    CloseWithoutOpen { line: usize, name: String },

    /// The input ended while a folder or file context was still open.
    #[error("Unclosed context '{name}' at end of template")]
    UnclosedContext { name: String },

    /// A parent path needed for a file write exists but is not a directory.
    #[error("Not a directory: '{path}'")]
    NotADirectory { path: String },

    /// The template file could not be found in any search path directory.
    #[error("Could not find template file '{name}'")]
    TemplateNotFound { name: String },

    /// The scanner skip pattern is not a valid regular expression.
    #[error("Invalid skip pattern: {0}")]
    SkipPatternError(#[from] regex::Error),
}

/// Convenience type alias for Results with scaffold's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("ERROR: {}", err);
    std::process::exit(1);
}
