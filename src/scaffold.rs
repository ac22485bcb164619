//! End-to-end project creation: directory check, generation, `.env` copy and
//! git bootstrap.

use crate::config::Config;
use crate::error::Result;
use crate::generator::{build_context, copy_env_file, ensure_output_dir, EnvCopy, Generator};
use crate::renderer::TemplateRenderer;
use crate::summary::GitStatus;
use crate::template::ProjectTemplate;
use crate::validate::ProjectName;
use crate::vcs::GitBootstrapper;
use log::warn;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Switches for the optional steps of a run.
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    pub copy_env: bool,
    pub init_git: bool,
    /// Executable used for version control; `git` from `PATH` if unset
    pub git_binary: Option<OsString>,
}

impl ScaffoldOptions {
    pub fn from_config(config: &Config) -> Self {
        Self { copy_env: config.copy_env, init_git: !config.skip_git, git_binary: None }
    }
}

/// What a run produced.
#[derive(Debug)]
pub struct Scaffold {
    pub root: PathBuf,
    /// Files written, in catalog order
    pub files: Vec<PathBuf>,
    /// `None` when copying was disabled
    pub env: Option<EnvCopy>,
    pub git: GitStatus,
}

/// Creates project `name` under `parent`.
///
/// Fails before touching the disk if `parent/name` already exists.
/// Filesystem errors abort the run without cleanup; git problems are logged
/// and reported through [`Scaffold::git`] instead.
pub fn scaffold<P: AsRef<Path>>(
    renderer: &dyn TemplateRenderer,
    parent: P,
    name: &ProjectName,
    template: ProjectTemplate,
    config: &Config,
    options: &ScaffoldOptions,
) -> Result<Scaffold> {
    let root = ensure_output_dir(parent.as_ref().join(name.as_str()))?;
    let context = build_context(name, template, config);

    let generator = Generator::new(renderer, &root, template, context);
    let files = generator.generate()?;

    let env = if options.copy_env { Some(copy_env_file(&root)?) } else { None };

    let git = if options.init_git {
        let mut bootstrapper = GitBootstrapper::new(&root);
        if let Some(binary) = &options.git_binary {
            bootstrapper = bootstrapper.with_binary(binary.clone());
        }
        match bootstrapper.bootstrap() {
            Ok(outcome) => outcome.into(),
            Err(e) => {
                warn!("{e}");
                GitStatus::Failed(e.to_string())
            }
        }
    } else {
        GitStatus::Skipped
    };

    Ok(Scaffold { root, files, env, git })
}
