//! Command-line interface implementation for pyinit.
//! Provides argument parsing and help text formatting using clap.

use crate::project::License;
use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for pyinit.
#[derive(Parser, Debug)]
#[command(author, version, about = "pyinit: initialize a new Python project", long_about = None)]
pub struct Args {
    /// Name of the project; also the directory and package name
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: String,

    /// Project description [default: "A new Python project."]
    #[arg(long)]
    pub description: Option<String>,

    /// Author name [default: "Your Name"]
    #[arg(long)]
    pub author: Option<String>,

    /// Author email [default: "you@example.com"]
    #[arg(long)]
    pub email: Option<String>,

    /// License type [default: MIT]
    #[arg(long, value_enum, ignore_case = true)]
    pub license: Option<License>,

    /// Create a virtual environment and install requirements into it
    #[arg(long)]
    pub venv: bool,

    /// Initialize a Git repository and make the initial commit
    #[arg(long)]
    pub git: bool,

    /// Set up a GitHub Actions workflow and Dependabot configuration
    #[arg(long)]
    pub ci: bool,

    /// Confirm or change the project settings through prompts
    #[arg(short, long)]
    pub interactive: bool,

    /// Directory in which the project directory is created
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Defaults file (JSON or YAML); pyinit.json, pyinit.yml or pyinit.yaml
    /// in the current directory are used when omitted
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the help text if the project name is missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
