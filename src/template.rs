//! Project template variants.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// The project archetypes gobake can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectTemplate {
    /// HTTP server with config, health check and router only
    Minimal,
    /// Minimal plus database, user repository and JWT authentication
    #[default]
    Full,
    /// Minimal plus a gqlgen GraphQL API backed by the user repository
    Graphql,
}

impl ProjectTemplate {
    pub const ALL: [ProjectTemplate; 3] =
        [ProjectTemplate::Minimal, ProjectTemplate::Full, ProjectTemplate::Graphql];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectTemplate::Minimal => "minimal",
            ProjectTemplate::Full => "full",
            ProjectTemplate::Graphql => "graphql",
        }
    }

    /// Whether generated projects include JWT authentication.
    pub fn has_auth(&self) -> bool {
        matches!(self, ProjectTemplate::Full)
    }

    /// Whether generated projects talk to a database through GORM.
    pub fn has_database(&self) -> bool {
        matches!(self, ProjectTemplate::Full | ProjectTemplate::Graphql)
    }

    pub fn has_graphql(&self) -> bool {
        matches!(self, ProjectTemplate::Graphql)
    }

    /// Short description shown in the interactive template picker.
    pub fn description(&self) -> &'static str {
        match self {
            ProjectTemplate::Minimal => "minimal - HTTP server, config and health check",
            ProjectTemplate::Full => "full    - REST API with GORM and JWT authentication",
            ProjectTemplate::Graphql => "graphql - gqlgen GraphQL API with GORM",
        }
    }
}

impl fmt::Display for ProjectTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectTemplate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ProjectTemplate::ALL
            .into_iter()
            .find(|template| template.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidTemplate { template: s.to_string() })
    }
}
