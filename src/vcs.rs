//! Git repository initialization for the generated project.

use crate::constants::INITIAL_COMMIT_MESSAGE;
use crate::error::Result;
use crate::tools::{CommandRunner, ToolCommand};
use std::path::Path;

/// `init`, `add` and `commit` invocations, in order.
pub fn git_commands(git: &str) -> Vec<ToolCommand> {
    vec![
        ToolCommand::new(git).arg("init"),
        ToolCommand::new(git).args(["add", "."]),
        ToolCommand::new(git).args(["commit", "-m", INITIAL_COMMIT_MESSAGE]),
    ]
}

/// Initializes a local repository in `project_dir` and commits every generated file.
///
/// Nothing is pushed. The first failing step aborts the rest.
///
/// # Errors
/// * `Error::ExternalToolError` naming the git executable
pub fn init_repository<P: AsRef<Path>>(
    runner: &dyn CommandRunner,
    git: &str,
    project_dir: P,
) -> Result<()> {
    let project_dir = project_dir.as_ref();
    for command in git_commands(git) {
        runner.run(&command, project_dir)?;
    }
    println!("Initialized Git repository and made the initial commit.");
    Ok(())
}
