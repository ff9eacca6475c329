//! pyinit scaffolds new Python projects.
//! It renders a fixed set of built-in templates into a standard layout and can
//! optionally create a virtual environment and an initial git commit.

/// Command-line interface module for the pyinit application
pub mod cli;

/// Defaults file handling
/// Supports JSON and YAML formats (pyinit.json, pyinit.yml, pyinit.yaml)
pub mod config;

pub mod constants;

/// Error types and handling for the pyinit application
pub mod error;

pub mod logger;

/// Project metadata and the template context derived from it
pub mod project;

/// Interactive prompts
pub mod prompt;

/// Template rendering
pub mod renderer;

/// Run orchestration
pub mod runner;

/// Project tree generation
pub mod scaffold;

/// Built-in templates and the fixed project layout
pub mod templates;

/// External program execution
pub mod tools;

/// Git repository initialization
pub mod vcs;

/// Virtual environment creation
pub mod venv;
