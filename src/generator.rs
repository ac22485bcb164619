//! Project materialization: render the catalog, create the directory tree
//! and write every file.

use crate::catalog;
use crate::config::Config;
use crate::constants::{ENV_EXAMPLE_FILE, ENV_FILE};
use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;
use crate::template::ProjectTemplate;
use crate::validate::ProjectName;
use cruet::Inflector;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// A catalog entry after rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Path relative to the project root
    pub path: PathBuf,
    pub content: String,
}

/// Result of [`copy_env_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvCopy {
    Copied,
    /// `.env` was already present and left untouched
    AlreadyExists,
    /// The project has no `.env.example`
    NoExample,
}

/// Builds the context every catalog template is rendered with.
///
/// User variables from the configuration are added first so built-in keys
/// always win.
pub fn build_context(
    name: &ProjectName,
    template: ProjectTemplate,
    config: &Config,
) -> serde_json::Value {
    let mut context = serde_json::Map::new();
    for (key, value) in &config.variables {
        context.insert(key.clone(), value.clone());
    }

    let name = name.as_str();
    let builtins = serde_json::json!({
        "project_name": name,
        "module_path": config.module_path(name),
        "binary_name": name,
        "project_snake": name.to_snake_case(),
        "project_title": name.to_title_case(),
        "go_version": config.go_version,
        "template": template.as_str(),
        "auth": template.has_auth(),
        "database": template.has_database(),
        "graphql": template.has_graphql(),
    });
    if let serde_json::Value::Object(builtins) = builtins {
        context.extend(builtins);
    }

    serde_json::Value::Object(context)
}

/// Ensures the project directory does not exist yet.
///
/// # Errors
/// * `Error::OutputDirectoryExistsError` if anything exists at `output_dir`,
///   including a dangling symlink
pub fn ensure_output_dir<P: AsRef<Path>>(output_dir: P) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if fs::symlink_metadata(output_dir).is_ok() {
        return Err(Error::OutputDirectoryExistsError {
            output_dir: output_dir.display().to_string(),
        });
    }
    Ok(output_dir.to_path_buf())
}

fn create_dir(path: &Path) -> Result<()> {
    debug!("Creating directory: {}", path.display());
    fs::create_dir_all(path).map_err(|source| Error::CreateDirError { path: path.to_path_buf(), source })
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    debug!("Writing file: {}", path.display());
    fs::write(path, content).map_err(|source| Error::WriteFileError { path: path.to_path_buf(), source })
}

/// Copies `.env.example` to `.env` inside `root` unless `.env` already exists.
pub fn copy_env_file<P: AsRef<Path>>(root: P) -> Result<EnvCopy> {
    let root = root.as_ref();
    let example = root.join(ENV_EXAMPLE_FILE);
    let target = root.join(ENV_FILE);

    if !example.is_file() {
        debug!("No {} in {}", ENV_EXAMPLE_FILE, root.display());
        return Ok(EnvCopy::NoExample);
    }
    if fs::symlink_metadata(&target).is_ok() {
        debug!("{} already exists, leaving it untouched", target.display());
        return Ok(EnvCopy::AlreadyExists);
    }

    fs::copy(&example, &target).map_err(|source| Error::CopyFileError {
        from: example.clone(),
        to: target.clone(),
        source,
    })?;
    Ok(EnvCopy::Copied)
}

/// Materializes one project template under a root directory.
pub struct Generator<'a> {
    renderer: &'a dyn TemplateRenderer,
    root: PathBuf,
    template: ProjectTemplate,
    context: serde_json::Value,
}

impl<'a> Generator<'a> {
    pub fn new<P: AsRef<Path>>(
        renderer: &'a dyn TemplateRenderer,
        root: P,
        template: ProjectTemplate,
        context: serde_json::Value,
    ) -> Self {
        Self { renderer, root: root.as_ref().to_path_buf(), template, context }
    }

    /// Renders every catalog file of the template, in catalog order.
    pub fn render(&self) -> Result<Vec<RenderedFile>> {
        catalog::files(self.template)
            .into_iter()
            .map(|spec| {
                let content = self.renderer.render(spec.source, &self.context)?;
                Ok(RenderedFile { path: PathBuf::from(spec.path), content })
            })
            .collect()
    }

    /// Creates the project root and the template's directory tree.
    pub fn create_structure(&self) -> Result<()> {
        create_dir(&self.root)?;
        for dir in catalog::directories(self.template) {
            create_dir(&self.root.join(dir))?;
        }
        Ok(())
    }

    /// Writes rendered files below the root and returns their full paths.
    ///
    /// Stops at the first failure; files already written stay on disk.
    pub fn write_files(&self, files: &[RenderedFile]) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(files.len());
        for file in files {
            let target = self.root.join(&file.path);
            write_file(&target, &file.content)?;
            written.push(target);
        }
        Ok(written)
    }

    /// Renders, then creates the tree and writes the files.
    ///
    /// Nothing touches the disk until every template has rendered.
    pub fn generate(&self) -> Result<Vec<PathBuf>> {
        debug!("Generating '{}' project in {}", self.template, self.root.display());
        let files = self.render()?;
        self.create_structure()?;
        self.write_files(&files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_project_name;

    #[test]
    fn context_derives_names() {
        let name = validate_project_name("my-app").unwrap();
        let context = build_context(&name, ProjectTemplate::Full, &Config::default());
        assert_eq!(context["project_name"], "my-app");
        assert_eq!(context["module_path"], "my-app");
        assert_eq!(context["project_snake"], "my_app");
        assert_eq!(context["project_title"], "My App");
        assert_eq!(context["auth"], true);
        assert_eq!(context["graphql"], false);
    }

    #[test]
    fn builtins_override_user_variables() {
        let name = validate_project_name("svc").unwrap();
        let mut config = Config::default();
        config.variables.insert("project_name".into(), "other".into());
        config.variables.insert("owner".into(), "acme".into());
        let context = build_context(&name, ProjectTemplate::Minimal, &config);
        assert_eq!(context["project_name"], "svc");
        assert_eq!(context["owner"], "acme");
    }
}
