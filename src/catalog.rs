//! The built-in template catalog.
//!
//! Each project template maps to an ordered list of directories and an ordered
//! list of files. File sources are minijinja templates embedded from the
//! `templates/` directory; shared sources branch on the `auth`, `database` and
//! `graphql` context flags instead of being duplicated per variant.

use crate::template::ProjectTemplate;

/// A single catalog entry: where the file lands and what it is rendered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSpec {
    /// Path relative to the project root
    pub path: &'static str,
    /// Minijinja template source
    pub source: &'static str,
}

macro_rules! file_spec {
    ($path:literal, $source:literal) => {
        FileSpec {
            path: $path,
            source: include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/", $source)),
        }
    };
}

const BASE_DIRS: &[&str] =
    &["cmd/server", "internal/config", "internal/handlers", "internal/router"];

const DATABASE_DIRS: &[&str] = &["internal/database", "internal/models", "internal/repository"];

const AUTH_DIRS: &[&str] = &["internal/auth", "internal/middleware"];

const GRAPHQL_DIRS: &[&str] = &["graph", "graph/model"];

const BASE_FILES: &[FileSpec] = &[
    file_spec!("go.mod", "go.mod.j2"),
    file_spec!("Makefile", "Makefile.j2"),
    file_spec!("README.md", "README.md.j2"),
    file_spec!(".gitignore", "gitignore.j2"),
    file_spec!(".env.example", "env.example.j2"),
    file_spec!("Dockerfile", "Dockerfile.j2"),
    file_spec!("cmd/server/main.go", "cmd/server/main.go.j2"),
    file_spec!("internal/config/config.go", "internal/config/config.go.j2"),
    file_spec!("internal/handlers/health.go", "internal/handlers/health.go.j2"),
    file_spec!("internal/router/router.go", "internal/router/router.go.j2"),
];

const DATABASE_FILES: &[FileSpec] = &[
    file_spec!("internal/database/database.go", "internal/database/database.go.j2"),
    file_spec!("internal/models/user.go", "internal/models/user.go.j2"),
    file_spec!(
        "internal/repository/user_repository.go",
        "internal/repository/user_repository.go.j2"
    ),
];

const AUTH_FILES: &[FileSpec] = &[
    file_spec!("internal/auth/jwt.go", "internal/auth/jwt.go.j2"),
    file_spec!("internal/middleware/auth.go", "internal/middleware/auth.go.j2"),
    file_spec!("internal/handlers/auth.go", "internal/handlers/auth.go.j2"),
    file_spec!("internal/handlers/user.go", "internal/handlers/user.go.j2"),
];

const GRAPHQL_FILES: &[FileSpec] = &[
    file_spec!("gqlgen.yml", "gqlgen.yml.j2"),
    file_spec!("graph/schema.graphqls", "graph/schema.graphqls.j2"),
    file_spec!("graph/resolver.go", "graph/resolver.go.j2"),
    file_spec!("graph/schema.resolvers.go", "graph/schema.resolvers.go.j2"),
    file_spec!("graph/model/models.go", "graph/model/models.go.j2"),
];

/// Feature groups making up each template, in generation order.
fn groups(template: ProjectTemplate) -> &'static [(&'static [&'static str], &'static [FileSpec])] {
    match template {
        ProjectTemplate::Minimal => &[(BASE_DIRS, BASE_FILES)],
        ProjectTemplate::Full => &[
            (BASE_DIRS, BASE_FILES),
            (DATABASE_DIRS, DATABASE_FILES),
            (AUTH_DIRS, AUTH_FILES),
        ],
        ProjectTemplate::Graphql => &[
            (BASE_DIRS, BASE_FILES),
            (GRAPHQL_DIRS, GRAPHQL_FILES),
            (DATABASE_DIRS, DATABASE_FILES),
        ],
    }
}

/// Directories to create for `template`, relative to the project root.
pub fn directories(template: ProjectTemplate) -> Vec<&'static str> {
    groups(template).iter().flat_map(|(dirs, _)| dirs.iter().copied()).collect()
}

/// Files to render for `template`, in the order they are written.
pub fn files(template: ProjectTemplate) -> Vec<FileSpec> {
    groups(template).iter().flat_map(|(_, files)| files.iter().copied()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::path::Path;

    fn paths(template: ProjectTemplate) -> Vec<&'static str> {
        files(template).into_iter().map(|spec| spec.path).collect()
    }

    #[test]
    fn minimal_has_no_auth_or_database_files() {
        let minimal = paths(ProjectTemplate::Minimal);
        assert_eq!(minimal.len(), BASE_FILES.len());
        assert!(!minimal.iter().any(|p| p.contains("auth") || p.contains("repository")));
    }

    #[test]
    fn full_includes_auth_files() {
        let full = paths(ProjectTemplate::Full);
        for expected in [
            "internal/auth/jwt.go",
            "internal/middleware/auth.go",
            "internal/handlers/auth.go",
            "internal/repository/user_repository.go",
        ] {
            assert!(full.contains(&expected), "full template misses {expected}");
        }
        assert!(!full.iter().any(|p| p.starts_with("graph")));
    }

    #[test]
    fn graphql_has_schema_but_no_jwt() {
        let graphql = paths(ProjectTemplate::Graphql);
        assert!(graphql.contains(&"graph/schema.graphqls"));
        assert!(graphql.contains(&"gqlgen.yml"));
        assert!(!graphql.iter().any(|p| p.starts_with("internal/auth")));
    }

    #[test]
    fn paths_are_unique_per_template() {
        for template in ProjectTemplate::ALL {
            let all = paths(template);
            let unique: HashSet<_> = all.iter().collect();
            assert_eq!(all.len(), unique.len(), "duplicate path in {template}");
        }
    }

    #[test]
    fn every_parent_directory_is_listed() {
        for template in ProjectTemplate::ALL {
            let dirs = directories(template);
            for spec in files(template) {
                let parent = Path::new(spec.path).parent().and_then(|p| p.to_str()).unwrap();
                assert!(
                    parent.is_empty() || dirs.contains(&parent),
                    "{template}: parent of {} is not created",
                    spec.path
                );
            }
        }
    }

    #[test]
    fn sources_are_embedded() {
        for template in ProjectTemplate::ALL {
            assert!(files(template).iter().all(|spec| !spec.source.trim().is_empty()));
        }
    }
}
