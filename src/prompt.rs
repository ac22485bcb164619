//! Interactive prompts used by `--interactive`.

use crate::error::{Error, Result};
use crate::template::ProjectTemplate;
use crate::validate::{is_valid_project_name, validate_project_name, ProjectName};
use dialoguer::{Input, Select};

/// Source of answers for interactive mode.
pub trait Prompter {
    /// Asks for a project name until a valid one is entered.
    fn project_name(&self) -> Result<ProjectName>;

    /// Lets the user pick a template, with `default` preselected.
    fn template(&self, default: ProjectTemplate) -> Result<ProjectTemplate>;
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
    fn project_name(&self) -> Result<ProjectName> {
        let name: String = Input::new()
            .with_prompt("Project name")
            .validate_with(|input: &String| -> std::result::Result<(), &str> {
                if is_valid_project_name(input) {
                    Ok(())
                } else {
                    Err("use letters, digits, '-' or '_', starting with a letter or digit")
                }
            })
            .interact_text()
            .map_err(|e| Error::PromptError(e.to_string()))?;

        validate_project_name(name)
    }

    fn template(&self, default: ProjectTemplate) -> Result<ProjectTemplate> {
        let items: Vec<&str> = ProjectTemplate::ALL.iter().map(|t| t.description()).collect();
        let default_index =
            ProjectTemplate::ALL.iter().position(|t| *t == default).unwrap_or_default();

        let selection = Select::new()
            .with_prompt("Template")
            .default(default_index)
            .items(&items)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))?;

        Ok(ProjectTemplate::ALL[selection])
    }
}

/// Resolves the project name and template from the command line, falling
/// back to prompts in interactive mode and to `default_template` otherwise.
///
/// Command-line values are validated, never prompted for again.
///
/// # Errors
/// * `Error::MissingProjectName` without a name outside interactive mode
/// * `Error::InvalidProjectName` / `Error::InvalidTemplate` for bad values
pub fn resolve_inputs(
    prompter: &dyn Prompter,
    project_name: Option<&str>,
    template: Option<&str>,
    interactive: bool,
    default_template: ProjectTemplate,
) -> Result<(ProjectName, ProjectTemplate)> {
    let name = match project_name {
        Some(name) => validate_project_name(name)?,
        None if interactive => prompter.project_name()?,
        None => return Err(Error::MissingProjectName),
    };

    let template = match template {
        Some(template) => template.parse::<ProjectTemplate>()?,
        None if interactive => prompter.template(default_template)?,
        None => default_template,
    };

    Ok((name, template))
}
