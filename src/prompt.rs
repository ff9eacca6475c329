//! User input and interaction handling.
//! Used by `--interactive` to confirm or override the resolved project metadata.

use crate::error::{Error, Result};
use crate::project::{License, ProjectSpec};
use dialoguer::{Confirm, Input, Select};

/// Source of answers for the interactive prompt sequence.
pub trait Prompter {
    /// Asks for free text, pre-filled with `default`.
    fn input(&self, prompt: &str, default: &str) -> Result<String>;

    /// Asks to pick one of `items`; returns the selected index.
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize>;

    /// Asks a yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// Terminal prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, prompt: &str, default: &str) -> Result<String> {
        Input::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .default(default)
            .items(items)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}

/// Walks the user through the project metadata, using `project` as defaults.
///
/// The project name is never asked for; it fixes the target path.
///
/// # Returns
/// * `Result<ProjectSpec>` - The project with the answers applied
///
/// # Errors
/// * `Error::PromptError` if the terminal interaction fails
pub fn prompt_project(prompter: &dyn Prompter, project: &ProjectSpec) -> Result<ProjectSpec> {
    let description = prompter.input("Project description", &project.description)?;
    let author = prompter.input("Author name", &project.author)?;
    let email = prompter.input("Author email", &project.email)?;

    let names: Vec<&str> = License::ALL.iter().map(|license| license.as_str()).collect();
    let current = License::ALL.iter().position(|l| *l == project.license).unwrap_or(0);
    let selection = prompter.select("License", &names, current)?;
    let license = License::ALL
        .get(selection)
        .copied()
        .ok_or_else(|| Error::PromptError(format!("invalid license selection {selection}")))?;

    let create_venv = prompter.confirm("Create a virtual environment?", project.create_venv)?;
    let init_git = prompter.confirm("Initialize a Git repository?", project.init_git)?;
    let setup_ci =
        prompter.confirm("Set up GitHub Actions and Dependabot?", project.setup_ci)?;

    Ok(ProjectSpec {
        name: project.name.clone(),
        description,
        author,
        email,
        license,
        year: project.year,
        create_venv,
        init_git,
        setup_ci,
        interactive: project.interactive,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Answers prompts from a queue; an empty answer keeps the default.
    struct ScriptedPrompter {
        answers: RefCell<VecDeque<&'static str>>,
    }

    impl ScriptedPrompter {
        fn new(answers: &[&'static str]) -> Self {
            Self {
                answers: RefCell::new(answers.iter().copied().collect()),
            }
        }

        fn next(&self) -> &'static str {
            self.answers.borrow_mut().pop_front().unwrap_or("")
        }
    }

    impl Prompter for ScriptedPrompter {
        fn input(&self, _prompt: &str, default: &str) -> Result<String> {
            let answer = self.next();
            Ok(if answer.is_empty() { default.to_string() } else { answer.to_string() })
        }

        fn select(&self, _prompt: &str, _items: &[&str], default: usize) -> Result<usize> {
            Ok(self.next().parse().unwrap_or(default))
        }

        fn confirm(&self, _prompt: &str, default: bool) -> Result<bool> {
            Ok(match self.next() {
                "y" => true,
                "n" => false,
                _ => default,
            })
        }
    }

    fn project() -> ProjectSpec {
        ProjectSpec {
            name: "demo".to_string(),
            description: "A new Python project.".to_string(),
            author: "Your Name".to_string(),
            email: "you@example.com".to_string(),
            license: License::Mit,
            year: 2024,
            create_venv: false,
            init_git: true,
            setup_ci: false,
            interactive: true,
        }
    }

    #[test]
    fn test_prompt_project_overrides() {
        let prompter = ScriptedPrompter::new(&["Demo tool", "Jane Doe", "", "1", "", "n", "y"]);
        let answered = prompt_project(&prompter, &project()).unwrap();

        assert_eq!(answered.name, "demo");
        assert_eq!(answered.description, "Demo tool");
        assert_eq!(answered.author, "Jane Doe");
        assert_eq!(answered.email, "you@example.com");
        assert_eq!(answered.license, License::Apache2);
        assert!(!answered.create_venv);
        assert!(!answered.init_git);
        assert!(answered.setup_ci);
    }

    #[test]
    fn test_prompt_project_keeps_defaults() {
        let prompter = ScriptedPrompter::new(&[]);
        assert_eq!(prompt_project(&prompter, &project()).unwrap(), project());
    }

    #[test]
    fn test_out_of_range_selection() {
        let prompter = ScriptedPrompter::new(&["", "", "", "7"]);
        assert!(matches!(
            prompt_project(&prompter, &project()),
            Err(Error::PromptError(_))
        ));
    }
}
