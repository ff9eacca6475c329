//! Error handling for the pyinit application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for pyinit operations.
///
/// Every variant is fatal to the current invocation. Errors are propagated
/// unchanged up to `main`, where [`default_error_handler`] reports them.
#[derive(Error, Debug)]
pub enum Error {
    /// The target directory exists and is not empty (or is not a directory at all)
    #[error("Directory '{path}' already exists and is not empty.")]
    DirectoryExists { path: String },

    /// A directory or file could not be created inside the target directory
    #[error("Cannot write to '{path}': {source}.")]
    DirectoryNotWritable {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The template store has no template with the requested id
    #[error("Template '{template}' not found.")]
    TemplateNotFound { template: String },

    /// A template references a placeholder absent from the context
    #[error("Template '{template}' references undefined variable '{variable}'.")]
    MissingVariable { template: String, variable: String },

    /// An external program failed to start or exited unsuccessfully
    #[error("External tool '{tool}' failed ({}): {stderr}", describe_exit(.exit_code))]
    ExternalToolError {
        tool: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    /// The project name cannot be used as a directory and package name
    #[error("Invalid project name '{name}': {reason}.")]
    InvalidProjectName { name: String, reason: String },

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents errors raised by the interactive prompts
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// Errors raised by the template engine itself
    #[error("Template engine error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),
}

fn describe_exit(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("exit code {code}"),
        None => "could not be started".to_string(),
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("Error: {err}");
    std::process::exit(1);
}
