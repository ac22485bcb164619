//! Common constants used throughout gobake.

/// Supported configuration file names, searched in the working directory
pub const CONFIG_FILES: [&str; 3] = ["gobake.json", "gobake.yml", "gobake.yaml"];

/// Pattern every project name must match
pub const PROJECT_NAME_PATTERN: &str = r"^[a-zA-Z0-9][a-zA-Z0-9_-]*$";

/// Example environment file written by every template
pub const ENV_EXAMPLE_FILE: &str = ".env.example";

/// Environment file the example is copied to
pub const ENV_FILE: &str = ".env";

/// Go toolchain version written to go.mod and the Dockerfile
pub const DEFAULT_GO_VERSION: &str = "1.22";

/// Message used for the initial commit of a generated project
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";
