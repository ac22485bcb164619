//! gobake's main application entry point and orchestration logic.
//! Handles command-line argument parsing, configuration and the
//! generation flow.

use gobake::{
    cli::{get_args, Args},
    config::load_config,
    error::{default_error_handler, Result},
    generator::EnvCopy,
    prompt::{resolve_inputs, DialoguerPrompter},
    renderer::MiniJinjaRenderer,
    scaffold::{scaffold, ScaffoldOptions},
    summary::next_steps,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Warn
        })
        .format_timestamp(None)
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the optional configuration file
/// 2. Resolves and validates the project name and template
/// 3. Generates the project tree
/// 4. Copies .env.example and initializes git unless disabled
/// 5. Prints the created files and the next steps
fn run(args: Args) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = load_config(args.config.as_deref(), &cwd)?;
    let (name, template) = resolve_inputs(
        &DialoguerPrompter::new(),
        args.project_name.as_deref(),
        args.template.as_deref(),
        args.interactive,
        config.template,
    )?;

    let mut options = ScaffoldOptions::from_config(&config);
    options.copy_env &= !args.no_env;
    options.init_git &= !args.skip_git;

    let parent = args.output_dir.unwrap_or(cwd);
    let renderer = MiniJinjaRenderer::new();
    let result = scaffold(&renderer, &parent, &name, template, &config, &options)?;

    for file in &result.files {
        println!("created: '{}'", file.display());
    }
    if result.env == Some(EnvCopy::Copied) {
        println!("copied: '.env.example' -> '.env'");
    }

    println!();
    print!("{}", next_steps(name.as_str(), template, &result.git));
    Ok(())
}
