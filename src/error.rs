//! Error handling for gobake.
//! Defines the error type and result alias used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for gobake operations.
///
/// User input errors, filesystem errors and version-control errors are kept
/// apart so the caller can decide which ones are fatal.
#[derive(Error, Debug)]
pub enum Error {
    /// The project name does not match the allowed pattern.
    #[error("Invalid project name '{name}': must start with a letter or digit and contain only letters, digits, '-' or '_'.")]
    InvalidProjectName { name: String },

    /// The template selector is not one of the known variants.
    #[error("Invalid template '{template}': expected one of minimal, full, graphql.")]
    InvalidTemplate { template: String },

    /// The project name was neither given on the command line nor prompted for.
    #[error("Missing project name.")]
    MissingProjectName,

    #[error("Output directory '{output_dir}' already exists.")]
    OutputDirectoryExistsError { output_dir: String },

    #[error("Failed to create directory '{}': {source}.", .path.display())]
    CreateDirError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write file '{}': {source}.", .path.display())]
    WriteFileError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to copy '{}' to '{}': {source}.", .from.display(), .to.display())]
    CopyFileError {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    #[error("Template rendering error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents failures while talking to the user interactively
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// A git command exited with a non-zero status.
    #[error("git {command} failed: {message}")]
    GitError { command: String, message: String },
}

impl Error {
    /// Whether the error was caused by bad user input, in which case the
    /// usage line is worth showing.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidProjectName { .. }
                | Error::InvalidTemplate { .. }
                | Error::MissingProjectName
        )
    }
}

/// Convenience type alias for Results with gobake's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Usage errors are followed by the usage line. Always exits with status 1.
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("Error: {err}");
    if err.is_usage_error() {
        eprintln!();
        eprintln!("{}", crate::cli::usage());
    }
    std::process::exit(1);
}
