//! Validation of user-supplied project names.

use crate::constants::PROJECT_NAME_PATTERN;
use crate::error::{Error, Result};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static PROJECT_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(PROJECT_NAME_PATTERN).expect("project name pattern is a valid regex")
});

/// A project name that has passed validation.
///
/// The only way to obtain one is [`validate_project_name`], so holding a
/// `ProjectName` means the value is safe to use as a directory name and as a
/// Go module path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns true when `name` matches the project name pattern.
pub fn is_valid_project_name(name: &str) -> bool {
    PROJECT_NAME_RE.is_match(name)
}

/// Validates a raw project name.
///
/// # Errors
/// * `Error::InvalidProjectName` if the name does not match
///   `^[a-zA-Z0-9][a-zA-Z0-9_-]*$`
pub fn validate_project_name<S: AsRef<str>>(name: S) -> Result<ProjectName> {
    let name = name.as_ref();
    if is_valid_project_name(name) {
        Ok(ProjectName(name.to_string()))
    } else {
        Err(Error::InvalidProjectName { name: name.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_simple_names() {
        for name in ["my-app", "app", "App_2", "9lives", "a-b_c-1"] {
            assert!(validate_project_name(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn rejects_bad_names() {
        for name in ["", "-app", "_app", "my/app", "my app", "me@app", "app.", "ünï"] {
            assert!(validate_project_name(name).is_err(), "{name:?} should be invalid");
        }
    }

    #[test]
    fn rejects_trailing_newline() {
        assert!(validate_project_name("app\n").is_err());
    }
}
