use std::fs;

use gobake::config::{parse_config, Config};
use gobake::error::Error;
use gobake::generator::EnvCopy;
use gobake::renderer::MiniJinjaRenderer;
use gobake::scaffold::{scaffold, ScaffoldOptions};
use gobake::summary::GitStatus;
use gobake::template::ProjectTemplate;
use gobake::validate::validate_project_name;
use tempfile::TempDir;

fn no_git_options() -> ScaffoldOptions {
    ScaffoldOptions {
        copy_env: true,
        init_git: true,
        git_binary: Some("gobake-test-missing-git".into()),
    }
}

#[test_log::test]
fn test_scaffold_without_git_binary_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let renderer = MiniJinjaRenderer::new();
    let name = validate_project_name("my-app").unwrap();

    let result = scaffold(
        &renderer,
        temp_dir.path(),
        &name,
        ProjectTemplate::Full,
        &Config::default(),
        &no_git_options(),
    )
    .unwrap();

    assert_eq!(result.root, temp_dir.path().join("my-app"));
    assert_eq!(result.git, GitStatus::Unavailable);
    assert_eq!(result.env, Some(EnvCopy::Copied));
    assert_eq!(
        fs::read_to_string(result.root.join(".env")).unwrap(),
        fs::read_to_string(result.root.join(".env.example")).unwrap()
    );
    assert!(result.files.iter().all(|path| path.starts_with(&result.root)));
    assert!(!result.root.join(".git").exists());
}

#[test]
fn test_scaffold_skips_optional_steps() {
    let temp_dir = TempDir::new().unwrap();
    let renderer = MiniJinjaRenderer::new();
    let name = validate_project_name("quiet").unwrap();
    let options = ScaffoldOptions { copy_env: false, init_git: false, git_binary: None };

    let result = scaffold(
        &renderer,
        temp_dir.path(),
        &name,
        ProjectTemplate::Minimal,
        &Config::default(),
        &options,
    )
    .unwrap();

    assert_eq!(result.git, GitStatus::Skipped);
    assert_eq!(result.env, None);
    assert!(!result.root.join(".env").exists());
}

#[test]
fn test_scaffold_refuses_existing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("exists");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("keep.txt"), "mine").unwrap();

    let renderer = MiniJinjaRenderer::new();
    let name = validate_project_name("exists").unwrap();
    let err = scaffold(
        &renderer,
        temp_dir.path(),
        &name,
        ProjectTemplate::Full,
        &Config::default(),
        &no_git_options(),
    )
    .unwrap_err();

    assert!(matches!(err, Error::OutputDirectoryExistsError { .. }));
    let entries: Vec<_> = fs::read_dir(&target).unwrap().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(fs::read_to_string(target.join("keep.txt")).unwrap(), "mine");
}

#[test]
fn test_scaffold_uses_config_values() {
    let temp_dir = TempDir::new().unwrap();
    let renderer = MiniJinjaRenderer::new();
    let name = validate_project_name("svc").unwrap();
    let config =
        parse_config("module_prefix: github.com/acme\ngo_version: \"1.23\"\ncopy_env: false\n")
            .unwrap();
    let mut options = ScaffoldOptions::from_config(&config);
    options.init_git = false;

    let result =
        scaffold(&renderer, temp_dir.path(), &name, ProjectTemplate::Graphql, &config, &options)
            .unwrap();

    let go_mod = fs::read_to_string(result.root.join("go.mod")).unwrap();
    assert!(go_mod.starts_with("module github.com/acme/svc\n"));
    assert!(go_mod.contains("go 1.23"));
    let main_go = fs::read_to_string(result.root.join("cmd/server/main.go")).unwrap();
    assert!(main_go.contains("\"github.com/acme/svc/internal/router\""));
    assert_eq!(result.env, None);
}
