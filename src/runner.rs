//! Orchestration of a pyinit run: resolve the project, scaffold it, then run
//! the optional environment and git steps in that order.

use crate::cli::Args;
use crate::config::{get_config, Config, Tools};
use crate::constants::{DEFAULT_AUTHOR, DEFAULT_DESCRIPTION, DEFAULT_EMAIL};
use crate::error::Result;
use crate::project::{validate_project_name, ProjectSpec};
use crate::prompt::{prompt_project, DialoguerPrompter};
use crate::renderer::{MiniJinjaRenderer, TemplateRenderer};
use crate::scaffold::{scaffold, ProjectDirectory};
use crate::tools::{CommandRunner, SystemCommandRunner};
use crate::vcs::init_repository;
use crate::venv::create_venv;
use chrono::Datelike;
use log::debug;
use std::path::Path;

/// Builds the `ProjectSpec` from arguments, falling back to the configuration
/// file and then to built-in defaults for anything not given on the command line.
///
/// # Errors
/// * `Error::InvalidProjectName` if the name is not identifier-safe
pub fn resolve_project(args: &Args, config: &Config, year: i32) -> Result<ProjectSpec> {
    validate_project_name(&args.project_name)?;

    let defaults = &config.defaults;
    let pick = |flag: &Option<String>, configured: &Option<String>, fallback: &str| {
        flag.clone().or_else(|| configured.clone()).unwrap_or_else(|| fallback.to_string())
    };

    Ok(ProjectSpec {
        name: args.project_name.clone(),
        description: pick(&args.description, &defaults.description, DEFAULT_DESCRIPTION),
        author: pick(&args.author, &defaults.author, DEFAULT_AUTHOR),
        email: pick(&args.email, &defaults.email, DEFAULT_EMAIL),
        license: args.license.or(defaults.license).unwrap_or_default(),
        year,
        create_venv: args.venv,
        init_git: args.git,
        setup_ci: args.ci,
        interactive: args.interactive,
    })
}

/// Generates the project in `target_dir` and runs the optional steps.
///
/// Each step runs only after the previous one succeeded; the first error is
/// returned as is and files generated so far stay on disk.
pub fn create_project<P: AsRef<Path>>(
    renderer: &dyn TemplateRenderer,
    commands: &dyn CommandRunner,
    tools: &Tools,
    target_dir: P,
    project: &ProjectSpec,
) -> Result<ProjectDirectory> {
    let directory = scaffold(renderer, target_dir, project)?;

    if project.setup_ci {
        println!("CI/CD configuration written to .github/");
    }

    if project.create_venv {
        println!("Creating virtual environment...");
        create_venv(commands, &tools.python, directory.root())?;
    }

    if project.init_git {
        println!("Initializing Git repository...");
        init_repository(commands, &tools.git, directory.root())?;
    }

    Ok(directory)
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the defaults file
/// 2. Resolves the `ProjectSpec` from flags, configuration and defaults
/// 3. Prompts for changes when `--interactive` is set
/// 4. Scaffolds, then creates the environment and repository if requested
pub fn run(args: Args) -> Result<()> {
    let config = get_config(args.config.as_deref(), std::env::current_dir()?)?;
    let year = chrono::Local::now().year();

    let mut project = resolve_project(&args, &config, year)?;
    if project.interactive {
        let prompt = DialoguerPrompter::new();
        project = prompt_project(&prompt, &project)?;
    }
    debug!("Resolved project: {project:?}");

    let engine = MiniJinjaRenderer::new();
    let commands = SystemCommandRunner::new();
    let target_dir = args.output_dir.join(&project.name);

    create_project(&engine, &commands, &config.tools, &target_dir, &project)?;

    println!("\nProject '{}' has been successfully initialized!", project.name);
    Ok(())
}
