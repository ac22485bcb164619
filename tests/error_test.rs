use std::io;
use std::path::PathBuf;

use gobake::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config.");

    let err = Error::OutputDirectoryExistsError { output_dir: "my-app".to_string() };
    assert_eq!(err.to_string(), "Output directory 'my-app' already exists.");

    let err = Error::WriteFileError {
        path: PathBuf::from("my-app/go.mod"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(err.to_string(), "Failed to write file 'my-app/go.mod': denied.");
}

#[test]
fn test_usage_errors() {
    assert!(Error::InvalidProjectName { name: "-x".into() }.is_usage_error());
    assert!(Error::InvalidTemplate { template: "rest".into() }.is_usage_error());
    assert!(Error::MissingProjectName.is_usage_error());
    assert!(!Error::ConfigError("x".into()).is_usage_error());
}
