//! Error types and handling for yuicat
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Configuration and layout file errors
//! - [`layout`]: Logical/physical path translation errors
//! - [`patch`]: HTML include scanning errors
//! - [`minifier`]: External compressor errors
//! - [`fs`]: File system errors

pub mod config;
pub mod fs;
pub mod layout;
pub mod minifier;
pub mod patch;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for yuicat operations
#[derive(Error, Diagnostic, Debug)]
pub enum YuicatError {
    // Configuration errors
    #[error("Invalid type: {name}")]
    #[diagnostic(
        code(yuicat::config::invalid_type),
        help("Valid types are css and js")
    )]
    InvalidAssetType { name: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(yuicat::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Failed to parse layout file: {path}: {reason}")]
    #[diagnostic(
        code(yuicat::config::parse_failed),
        help("A layout file needs css and js sections with physical and logical keys, and an html key")
    )]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to read layout file: {path}: {reason}")]
    #[diagnostic(code(yuicat::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // Layout errors
    #[error("Not a logically rooted file: {path} (expected below {root})")]
    #[diagnostic(
        code(yuicat::layout::not_logical),
        help("Only files below a logical directory of the layout can be bundled")
    )]
    NotLogicallyRooted { path: String, root: String },

    #[error("Not a physically rooted file: {path} (expected below {root})")]
    #[diagnostic(code(yuicat::layout::not_physical))]
    NotPhysicallyRooted { path: String, root: String },

    // Patch errors
    #[error("File and type already processed by yuicat: {path} ({asset_type})")]
    #[diagnostic(
        code(yuicat::patch::already_processed),
        help("Restore the document from its backup before running yuicat again")
    )]
    AlreadyProcessed { path: String, asset_type: String },

    #[error("{path}:{line}: script found after non-script content; cannot concatenate")]
    #[diagnostic(
        code(yuicat::patch::ordering),
        help("Script includes must form one contiguous block")
    )]
    ScriptAfterContent { path: String, line: usize },

    #[error("{path}:{line}: {file} included more than once")]
    #[diagnostic(code(yuicat::patch::duplicate_include))]
    DuplicateInclude {
        path: String,
        line: usize,
        file: String,
    },

    // Minifier errors
    #[error("Minifier failed with exit status {status}")]
    #[diagnostic(code(yuicat::minifier::failed))]
    MinifierFailed { status: String },

    #[error("Failed to run minifier '{program}': {reason}")]
    #[diagnostic(
        code(yuicat::minifier::spawn_failed),
        help("Check the --yuijar and --java options")
    )]
    MinifierSpawnFailed { program: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(yuicat::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(yuicat::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(yuicat::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for YuicatError {
    fn from(err: std::io::Error) -> Self {
        YuicatError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for YuicatError {
    fn from(err: serde_yaml::Error) -> Self {
        YuicatError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for YuicatError {
    fn from(err: serde_json::Error) -> Self {
        YuicatError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, YuicatError>;
