//! Error types and handling for obsctl
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Every fallible function in the crate returns [`ObsctlError`] up to `main`,
//! which is the single place user-facing error messages are printed. Each
//! variant maps to a process exit code via [`ObsctlError::exit_code`]:
//! configuration problems exit 2, a missing remote project exits 1.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for obsctl operations
#[derive(Error, Diagnostic, Debug)]
pub enum ObsctlError {
    // Credential errors
    #[error("OBS_USERNAME/OBS_PASSWORD missing")]
    #[diagnostic(
        code(obsctl::credentials::missing),
        help("Set OBS_USERNAME and OBS_PASSWORD as environment variables")
    )]
    CredentialsMissing,

    // Manifest path errors
    #[error("Manifest file doesn't exist: {path}")]
    #[diagnostic(
        code(obsctl::manifest::not_found),
        help("Pass the manifest location with --manifest <path>")
    )]
    ManifestNotFound { path: String },

    #[error("Manifest path '{path}' is outside the current working directory")]
    #[diagnostic(
        code(obsctl::manifest::outside_cwd),
        help("Run obsctl from a directory that contains the manifest")
    )]
    ManifestPathOutsideCwd { path: String },

    // Manifest content errors
    #[error("Failed to read manifest file: {path}")]
    #[diagnostic(code(obsctl::manifest::read_failed))]
    ManifestReadFailed { path: String, reason: String },

    #[error("Failed to parse manifest file: {path}")]
    #[diagnostic(
        code(obsctl::manifest::parse_failed),
        help("The manifest must be YAML with a top-level 'projects' list")
    )]
    ManifestParseFailed { path: String, reason: String },

    #[error("Manifest entry #{index} has no project name")]
    #[diagnostic(
        code(obsctl::manifest::unnamed_project),
        help("Every entry under 'projects' needs a non-empty 'name'")
    )]
    UnnamedProject { index: usize },

    // Remote client errors
    #[error("Failed to construct OBS client: {reason}")]
    #[diagnostic(code(obsctl::client::build_failed))]
    ClientBuildFailed { reason: String },

    #[error("OBS request for project '{project}' failed: {reason}")]
    #[diagnostic(
        code(obsctl::remote::request_failed),
        help("Check network connectivity and that OBS_USERNAME/OBS_PASSWORD are valid")
    )]
    RemoteRequestFailed { project: String, reason: String },

    #[error("Failed to parse project meta for '{project}': {reason}")]
    #[diagnostic(code(obsctl::remote::meta_parse_failed))]
    MetaParseFailed { project: String, reason: String },

    // Reconciliation outcome
    #[error("Project {name} doesn't exist!")]
    #[diagnostic(
        code(obsctl::project::missing),
        help("Create the project in OBS or remove it from the manifest")
    )]
    ProjectMissing { name: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(obsctl::fs::io_error))]
    IoError { message: String },
}

impl ObsctlError {
    /// Process exit code for this error.
    ///
    /// A missing project is the one non-configuration outcome and gets its
    /// own code so scripts can tell "project absent" from "bad setup".
    pub fn exit_code(&self) -> i32 {
        match self {
            ObsctlError::ProjectMissing { .. } => 1,
            _ => 2,
        }
    }
}

impl From<std::io::Error> for ObsctlError {
    fn from(err: std::io::Error) -> Self {
        ObsctlError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ObsctlError {
    fn from(err: serde_yaml::Error) -> Self {
        ObsctlError::ManifestParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ObsctlError>;
