//! Command-line interface implementation for gobake.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

/// Command-line arguments structure for gobake.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "gobake: scaffold a Go web service from a built-in template",
    long_about = None
)]
pub struct Args {
    /// Name of the project; also used as the directory and Go module name
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: Option<String>,

    /// Project template: minimal, full or graphql [default: full]
    #[arg(short, long, value_name = "TEMPLATE")]
    pub template: Option<String>,

    /// Directory in which the project directory is created
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Path to a gobake.json / gobake.yml configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Do not initialize a git repository
    #[arg(long)]
    pub skip_git: bool,

    /// Do not copy .env.example to .env
    #[arg(long)]
    pub no_env: bool,

    /// Prompt for the project name and template
    #[arg(short, long)]
    pub interactive: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Rewrites Go-style single-dash long flags (`-template`, `-template=full`,
/// `-help`) into their double-dash form so clap can parse them.
///
/// Short flags and clusters (`-t`, `-vi`) are left untouched, as is anything
/// after a bare `--`.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let command = Args::command();
    let mut long_names: Vec<String> = command
        .get_arguments()
        .filter_map(|arg| arg.get_long().map(str::to_string))
        .collect();
    long_names.extend(["help".to_string(), "version".to_string()]);

    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(index, arg)| {
            if index == 0 || passthrough {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                passthrough = true;
                return arg;
            }
            match text.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') => {
                    let name = rest.split('=').next().unwrap_or_default();
                    if name.len() > 1 && long_names.iter().any(|long| long == name) {
                        OsString::from(format!("-{text}"))
                    } else {
                        arg
                    }
                }
                _ => arg,
            }
        })
        .collect()
}

/// One-line usage string, printed after user input errors.
pub fn usage() -> String {
    let mut command = Args::command();
    command.render_usage().to_string()
}

/// Parses the given argument list, accepting single-dash long flags.
pub fn parse_from<I, T>(args: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    Args::try_parse_from(normalize_args(args))
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 0 after printing `--help` or `--version`
/// * With status code 1 on any other argument error
pub fn get_args() -> Args {
    match parse_from(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                std::process::exit(1);
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: Vec<OsString>) -> Vec<String> {
        args.into_iter().map(|a| a.into_string().unwrap()).collect()
    }

    #[test]
    fn rewrites_single_dash_long_flags() {
        let args = normalize_args(["gobake", "-template", "minimal", "-template=full", "app"]);
        assert_eq!(
            strings(args),
            vec!["gobake", "--template", "minimal", "--template=full", "app"]
        );
    }

    #[test]
    fn leaves_short_flags_and_positionals_alone() {
        let args = normalize_args(["gobake", "-t", "full", "-vi", "-h", "my-app"]);
        assert_eq!(strings(args), vec!["gobake", "-t", "full", "-vi", "-h", "my-app"]);
    }

    #[test]
    fn stops_after_double_dash() {
        let args = normalize_args(["gobake", "--", "-help"]);
        assert_eq!(strings(args), vec!["gobake", "--", "-help"]);
    }

    #[test]
    fn usage_mentions_binary() {
        assert!(usage().contains("PROJECT_NAME"));
    }
}
