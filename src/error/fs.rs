//! File system errors

use std::path::Path;

use super::YuicatError;

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> YuicatError {
    YuicatError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> YuicatError {
    YuicatError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

pub fn read_error(path: &Path, e: &std::io::Error) -> YuicatError {
    read_failed(path.display().to_string(), e.to_string())
}

pub fn write_error(path: &Path, e: &std::io::Error) -> YuicatError {
    write_failed(path.display().to_string(), e.to_string())
}
