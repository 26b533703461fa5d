//! Minifier errors

use super::YuicatError;

/// Creates an error for a minifier that exited unsuccessfully
pub fn failed(status: impl Into<String>) -> YuicatError {
    YuicatError::MinifierFailed {
        status: status.into(),
    }
}

/// Creates an error for a minifier that could not be started or fed
pub fn spawn_failed(program: impl Into<String>, reason: impl Into<String>) -> YuicatError {
    YuicatError::MinifierSpawnFailed {
        program: program.into(),
        reason: reason.into(),
    }
}
