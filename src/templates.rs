//! Built-in template store and the fixed project layout.
//! Templates are embedded at compile time; the layout tables below are the
//! only place output paths come from.

use crate::project::{License, ProjectSpec};
use std::path::{Path, PathBuf};

pub const README: &str = "README.md";
pub const GITIGNORE: &str = "gitignore";
pub const MAKEFILE: &str = "Makefile";
pub const REQUIREMENTS: &str = "requirements.txt";
pub const PYPROJECT: &str = "pyproject.toml";
pub const SOURCE_INIT: &str = "src/__init__.py";
pub const TEST_MODULE: &str = "tests/test_module.py";
pub const CI_WORKFLOW: &str = "github/ci.yml";
pub const DEPENDABOT: &str = "github/dependabot.yml";
pub const LICENSE_MIT: &str = "licenses/MIT";
pub const LICENSE_APACHE: &str = "licenses/Apache-2.0";
pub const LICENSE_GPL: &str = "licenses/GPL-3.0";

/// Every template known to the store, by id.
pub const TEMPLATES: [(&str, &str); 12] = [
    (README, include_str!("../templates/README.md.j2")),
    (GITIGNORE, include_str!("../templates/gitignore.j2")),
    (MAKEFILE, include_str!("../templates/Makefile.j2")),
    (REQUIREMENTS, include_str!("../templates/requirements.txt.j2")),
    (PYPROJECT, include_str!("../templates/pyproject.toml.j2")),
    (SOURCE_INIT, include_str!("../templates/init.py.j2")),
    (TEST_MODULE, include_str!("../templates/test_module.py.j2")),
    (CI_WORKFLOW, include_str!("../templates/github/ci.yml.j2")),
    (DEPENDABOT, include_str!("../templates/github/dependabot.yml.j2")),
    (LICENSE_MIT, include_str!("../templates/licenses/MIT.j2")),
    (LICENSE_APACHE, include_str!("../templates/licenses/Apache-2.0.j2")),
    (LICENSE_GPL, include_str!("../templates/licenses/GPL-3.0.j2")),
];

/// Returns the `(id, source)` entry registered under `id`.
pub fn find_template(id: &str) -> Option<(&'static str, &'static str)> {
    TEMPLATES.iter().find(|(name, _)| *name == id).copied()
}

/// Returns the source of the template registered under `id`.
pub fn get_template(id: &str) -> Option<&'static str> {
    find_template(id).map(|(_, source)| source)
}

/// License template for each supported license.
pub fn license_template(license: License) -> &'static str {
    match license {
        License::Mit => LICENSE_MIT,
        License::Apache2 => LICENSE_APACHE,
        License::Gpl3 => LICENSE_GPL,
    }
}

/// One output file of the fixed layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSlot {
    /// Template id in the store
    pub template: &'static str,
    /// Destination relative to the project root
    pub path: PathBuf,
}

impl FileSlot {
    fn new<P: AsRef<Path>>(template: &'static str, path: P) -> Self {
        Self {
            template,
            path: path.as_ref().to_path_buf(),
        }
    }
}

/// Files added when CI is requested.
const CI_FILES: [(&str, &str); 2] = [
    (CI_WORKFLOW, ".github/workflows/ci.yml"),
    (DEPENDABOT, ".github/dependabot.yml"),
];

/// Directories of the layout, relative to the project root, parents first.
pub fn project_dirs(project: &ProjectSpec) -> Vec<PathBuf> {
    let mut dirs = vec![Path::new("src").join(&project.name), PathBuf::from("tests")];
    if project.setup_ci {
        dirs.push(PathBuf::from(".github/workflows"));
    }
    dirs
}

/// File slots of the layout, in write order.
///
/// Only the project name is interpolated into paths, and it has been
/// validated as an identifier by the time a `ProjectSpec` exists.
pub fn file_slots(project: &ProjectSpec) -> Vec<FileSlot> {
    let name = &project.name;
    let mut slots = vec![
        FileSlot::new(README, "README.md"),
        FileSlot::new(GITIGNORE, ".gitignore"),
        FileSlot::new(MAKEFILE, "Makefile"),
        FileSlot::new(license_template(project.license), "LICENSE"),
        FileSlot::new(REQUIREMENTS, "requirements.txt"),
        FileSlot::new(PYPROJECT, "pyproject.toml"),
        FileSlot::new(SOURCE_INIT, Path::new("src").join(name).join("__init__.py")),
        FileSlot::new(TEST_MODULE, Path::new("tests").join(format!("test_{name}.py"))),
    ];
    if project.setup_ci {
        slots.extend(CI_FILES.iter().map(|&(template, path)| FileSlot::new(template, path)));
    }
    slots
}
