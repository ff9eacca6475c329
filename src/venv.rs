//! Virtual environment creation for the generated project.

use crate::constants::VENV_DIR;
use crate::error::{Error, Result};
use crate::tools::{CommandRunner, ToolCommand};
use log::debug;
use std::path::{Path, PathBuf};

/// Path of the pip executable inside a virtual environment.
pub fn pip_path<P: AsRef<Path>>(venv_dir: P) -> PathBuf {
    if cfg!(windows) {
        venv_dir.as_ref().join("Scripts").join("pip.exe")
    } else {
        venv_dir.as_ref().join("bin").join("pip")
    }
}

/// Commands that create the environment and install the requirements into it,
/// in order. They run with `project_dir` as working directory, which must be
/// absolute so the pip path does not depend on how the child resolves it.
pub fn venv_commands<P: AsRef<Path>>(python: &str, project_dir: P) -> Vec<ToolCommand> {
    let pip = pip_path(project_dir.as_ref().join(VENV_DIR)).display().to_string();
    vec![
        ToolCommand::new(python).args(["-m", "venv", VENV_DIR]),
        ToolCommand::new(&pip).args(["install", "--upgrade", "pip"]),
        ToolCommand::new(&pip).args(["install", "-r", "requirements.txt"]),
    ]
}

/// Creates `venv/` inside `project_dir` and installs `requirements.txt` into it.
///
/// Stops at the first failing command.
///
/// # Errors
/// * `Error::ExternalToolError` naming the failing program
pub fn create_venv<P: AsRef<Path>>(
    runner: &dyn CommandRunner,
    python: &str,
    project_dir: P,
) -> Result<()> {
    let project_dir = project_dir.as_ref().canonicalize().map_err(Error::IoError)?;
    for command in venv_commands(python, &project_dir) {
        debug!("venv step: {command}");
        runner.run(&command, &project_dir)?;
    }
    println!("Created virtual environment at '{}'", project_dir.join(VENV_DIR).display());
    Ok(())
}
