//! Project tree generation.
//! Validates the target directory, renders every file of the fixed layout and
//! writes the result to disk. A failure part-way through leaves whatever was
//! already written in place.

use crate::error::{Error, Result};
use crate::project::{ProjectSpec, TemplateContext};
use crate::renderer::TemplateRenderer;
use crate::templates::{file_slots, project_dirs};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// A rendered file waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Destination relative to the project root
    pub relative_path: PathBuf,
    pub content: String,
}

/// The generated project on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDirectory {
    root: PathBuf,
    files: Vec<PathBuf>,
}

impl ProjectDirectory {
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Relative paths of the written files, in write order.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}

/// Ensures the target directory is absent or empty.
///
/// # Arguments
/// * `target_dir` - Directory the project will be generated into
///
/// # Errors
/// * `Error::DirectoryExists` if the path exists and is a non-empty
///   directory, or exists and is not a directory
pub fn ensure_target_dir<P: AsRef<Path>>(target_dir: P) -> Result<()> {
    let target_dir = target_dir.as_ref();
    if !target_dir.exists() {
        return Ok(());
    }

    let exists = || Error::DirectoryExists {
        path: target_dir.display().to_string(),
    };
    if !target_dir.is_dir() {
        return Err(exists());
    }
    let mut entries = fs::read_dir(target_dir).map_err(Error::IoError)?;
    if entries.next().is_some() {
        return Err(exists());
    }

    debug!("Reusing empty directory '{}'", target_dir.display());
    Ok(())
}

/// Renders every file of the layout for `project`.
///
/// Performs no filesystem access.
pub fn render_files(
    renderer: &dyn TemplateRenderer,
    project: &ProjectSpec,
) -> Result<Vec<GeneratedFile>> {
    let context = TemplateContext::from_project(project);
    file_slots(project)
        .into_iter()
        .map(|slot| {
            let content = renderer.render(slot.template, &context)?;
            Ok(GeneratedFile {
                relative_path: slot.path,
                content,
            })
        })
        .collect()
}

fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| Error::DirectoryNotWritable {
        path: path.display().to_string(),
        source,
    })
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| Error::DirectoryNotWritable {
        path: path.display().to_string(),
        source,
    })
}

/// Generates the project tree for `project` inside `target_dir`.
///
/// # Flow
/// 1. Rejects a populated target before touching the filesystem
/// 2. Renders all files, so render failures write nothing
/// 3. Creates the directory skeleton
/// 4. Writes the rendered files
///
/// # Errors
/// * `Error::DirectoryExists` - target exists and is not empty
/// * `Error::TemplateNotFound` / `Error::MissingVariable` - rendering failed
/// * `Error::DirectoryNotWritable` - a directory or file could not be created
pub fn scaffold<P: AsRef<Path>>(
    renderer: &dyn TemplateRenderer,
    target_dir: P,
    project: &ProjectSpec,
) -> Result<ProjectDirectory> {
    let root = target_dir.as_ref();
    ensure_target_dir(root)?;

    let generated = render_files(renderer, project)?;

    create_dir_all(root)?;
    println!("Created project directory: {}", root.display());
    for dir in project_dirs(project) {
        let path = root.join(dir);
        create_dir_all(&path)?;
        println!("Created directory: {}", path.display());
    }

    let mut files = Vec::with_capacity(generated.len());
    for file in generated {
        let path = root.join(&file.relative_path);
        debug!("Writing {} bytes to {}", file.content.len(), path.display());
        write_file(&path, &file.content)?;
        println!("Created file: {}", path.display());
        files.push(file.relative_path);
    }

    Ok(ProjectDirectory {
        root: root.to_path_buf(),
        files,
    })
}
