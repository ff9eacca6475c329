//! Project metadata resolved from the command line.
//! [`ProjectSpec`] is built once per invocation and never mutated afterwards;
//! [`TemplateContext`] is the placeholder mapping derived from it.

use crate::error::{Error, Result};
use clap::ValueEnum;
use cruet::Inflector;
use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Project names double as directory and Python package names.
static PROJECT_NAME_RE: OnceLock<Regex> = OnceLock::new();

/// Reserved words that cannot name a Python package.
const PYTHON_KEYWORDS: [&str; 35] = [
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

/// Licenses a project can be generated with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
pub enum License {
    #[default]
    #[value(name = "MIT")]
    #[serde(rename = "MIT")]
    Mit,
    #[value(name = "Apache-2.0")]
    #[serde(rename = "Apache-2.0")]
    Apache2,
    #[value(name = "GPL-3.0")]
    #[serde(rename = "GPL-3.0")]
    Gpl3,
}

impl License {
    pub const ALL: [License; 3] = [License::Mit, License::Apache2, License::Gpl3];

    /// SPDX identifier, as written into LICENSE, README and pyproject.toml.
    pub fn as_str(self) -> &'static str {
        match self {
            License::Mit => "MIT",
            License::Apache2 => "Apache-2.0",
            License::Gpl3 => "GPL-3.0",
        }
    }
}

impl std::fmt::Display for License {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully resolved description of the project to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    pub name: String,
    pub description: String,
    pub author: String,
    pub email: String,
    pub license: License,
    /// Copyright year written into the license.
    pub year: i32,
    pub create_venv: bool,
    pub init_git: bool,
    pub setup_ci: bool,
    pub interactive: bool,
}

/// Checks that `name` is usable as both a directory name and a package name.
///
/// # Errors
/// * `Error::InvalidProjectName` if the name is empty, contains anything
///   other than ASCII letters, digits and underscores, starts with a digit,
///   or is a Python keyword
pub fn validate_project_name(name: &str) -> Result<()> {
    let invalid = |reason: &str| Error::InvalidProjectName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("name must not be empty"));
    }
    let re = PROJECT_NAME_RE
        .get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid regex"));
    if !re.is_match(name) {
        return Err(invalid(
            "use only letters, digits and underscores, and do not start with a digit",
        ));
    }
    if PYTHON_KEYWORDS.contains(&name) {
        return Err(invalid("name is a reserved Python keyword"));
    }
    Ok(())
}

/// Placeholder name to value mapping handed to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TemplateContext(IndexMap<String, String>);

impl TemplateContext {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Derives the context from a project. The result depends on nothing but
    /// `project`, so rendering the same project twice yields identical text.
    pub fn from_project(project: &ProjectSpec) -> Self {
        let mut context = Self::new();
        context.insert("project_name", &project.name);
        context.insert("project_title", project.name.to_title_case());
        context.insert("description", &project.description);
        context.insert("author", &project.author);
        context.insert("email", &project.email);
        context.insert("license", project.license.as_str());
        context.insert("year", project.year.to_string());
        context
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.shift_remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }
}
