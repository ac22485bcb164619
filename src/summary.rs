//! Console output printed after a successful run.

use crate::template::ProjectTemplate;
use crate::vcs::VcsOutcome;
use std::fmt::Write;

/// What happened to version control during the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitStatus {
    Initialized,
    Skipped,
    Unavailable,
    Failed(String),
}

impl From<VcsOutcome> for GitStatus {
    fn from(outcome: VcsOutcome) -> Self {
        match outcome {
            VcsOutcome::Initialized => GitStatus::Initialized,
            VcsOutcome::Unavailable => GitStatus::Unavailable,
        }
    }
}

/// Builds the "next steps" instructions for a generated project.
pub fn next_steps(project_name: &str, template: ProjectTemplate, git: &GitStatus) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Project '{project_name}' created with the {template} template.");

    match git {
        GitStatus::Initialized => {
            let _ = writeln!(out, "Initialized a git repository with an initial commit.");
        }
        GitStatus::Skipped => {}
        GitStatus::Unavailable => {
            let _ = writeln!(out, "git was not found; the project is not under version control.");
        }
        GitStatus::Failed(reason) => {
            let _ = writeln!(out, "git setup did not complete ({reason}).");
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Next steps:");
    let mut steps = vec![format!("cd {project_name}"), "go mod tidy".to_string()];
    if template.has_graphql() {
        steps.push("go run github.com/99designs/gqlgen generate".to_string());
    }
    if template.has_auth() {
        steps.push("set JWT_SECRET in .env".to_string());
    }
    steps.push("make run".to_string());
    for step in steps {
        let _ = writeln!(out, "  {step}");
    }
    out
}
