//! gobake scaffolds Go web services from a built-in template catalog.
//! It validates the project name, writes the files of the chosen template,
//! copies the example environment file and records an initial git commit.

/// Static table of directories and file templates per project template
pub mod catalog;

/// Command-line interface module for the gobake application
pub mod cli;

/// Optional user configuration (gobake.json, gobake.yml, gobake.yaml)
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling for the gobake application
pub mod error;

/// Rendering and writing of project files
pub mod generator;

/// Interactive prompts
pub mod prompt;

/// Template rendering engine
pub mod renderer;

/// End-to-end project creation
pub mod scaffold;

/// Console output after a successful run
pub mod summary;

/// Project template variants
pub mod template;

/// Project name validation
pub mod validate;

/// Git repository bootstrapping
pub mod vcs;
