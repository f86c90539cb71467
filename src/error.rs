//! Error handling for the datagen application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for datagen operations.
///
/// Context, validation, placeholder and template errors are all detected
/// before anything is written. I/O and JSON errors surface while writing.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur while serializing a document
    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),

    /// The working directory does not have the shape the category expects
    #[error("Context error: {0}.")]
    ContextError(String),

    /// Represents validation failures in user input or compact encoded values
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// A template skeleton is malformed or a hole pointer does not exist
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// A resolved document still contains a placeholder
    #[error("Template '{template}' has an unresolved placeholder at '{pointer}'.")]
    UnresolvedPlaceholder { template: String, pointer: String },

    /// Represents errors that occur during user interaction
    #[error("Prompt error: {0}.")]
    PromptError(String),
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
