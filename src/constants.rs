//! Common constants used throughout the pyinit application.

/// Supported configuration file names, looked up in the working directory
pub const CONFIG_FILES: [&str; 3] = ["pyinit.json", "pyinit.yml", "pyinit.yaml"];

pub const DEFAULT_DESCRIPTION: &str = "A new Python project.";
pub const DEFAULT_AUTHOR: &str = "Your Name";
pub const DEFAULT_EMAIL: &str = "you@example.com";

pub const DEFAULT_PYTHON: &str = "python3";
pub const DEFAULT_GIT: &str = "git";

/// Directory name of the virtual environment inside the project
pub const VENV_DIR: &str = "venv";

pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";
