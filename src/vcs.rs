//! Git bootstrapping for freshly generated projects.
//! Runs the external `git` binary; a missing binary is not an error.

use crate::constants::INITIAL_COMMIT_MESSAGE;
use crate::error::{Error, Result};
use log::debug;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Outcome of [`GitBootstrapper::bootstrap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VcsOutcome {
    /// Repository created with one commit
    Initialized,
    /// The git binary could not be started
    Unavailable,
}

/// Initializes a git repository and records the initial commit.
pub struct GitBootstrapper {
    dir: PathBuf,
    binary: OsString,
    envs: Vec<(OsString, OsString)>,
}

impl GitBootstrapper {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self { dir: dir.as_ref().to_path_buf(), binary: OsString::from("git"), envs: Vec::new() }
    }

    /// Uses another executable instead of `git` from `PATH`.
    pub fn with_binary<S: Into<OsString>>(mut self, binary: S) -> Self {
        self.binary = binary.into();
        self
    }

    /// Sets an environment variable for every git command this bootstrapper runs.
    pub fn with_env<K: Into<OsString>, V: Into<OsString>>(mut self, key: K, value: V) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    /// Returns true if `git --version` can be run.
    pub fn is_available(&self) -> bool {
        Command::new(&self.binary)
            .arg("--version")
            .envs(self.envs.iter().map(|(key, value)| (key, value)))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    /// Runs `git init`, `git add -A` and `git commit` in order.
    ///
    /// # Returns
    /// * `VcsOutcome::Unavailable` if the binary cannot be spawned
    ///
    /// # Errors
    /// * `Error::GitError` if any command exits unsuccessfully
    pub fn bootstrap(&self) -> Result<VcsOutcome> {
        let steps: [&[&str]; 3] =
            [&["init"], &["add", "-A"], &["commit", "-m", INITIAL_COMMIT_MESSAGE]];

        for args in steps {
            match self.run(args) {
                Ok(output) if output.status.success() => {}
                Ok(output) => {
                    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
                    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
                    return Err(Error::GitError {
                        command: args[0].to_string(),
                        message: if stderr.is_empty() { stdout } else { stderr },
                    });
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    debug!("{:?} not found: {}", self.binary, e);
                    return Ok(VcsOutcome::Unavailable);
                }
                Err(e) => {
                    return Err(Error::GitError {
                        command: args[0].to_string(),
                        message: e.to_string(),
                    })
                }
            }
        }

        Ok(VcsOutcome::Initialized)
    }

    fn run(&self, args: &[&str]) -> io::Result<Output> {
        debug!("Running {:?} {} in {}", self.binary, args.join(" "), self.dir.display());
        Command::new(&self.binary)
            .args(args)
            .envs(self.envs.iter().map(|(key, value)| (key, value)))
            .current_dir(&self.dir)
            .stdin(Stdio::null())
            .output()
    }
}
