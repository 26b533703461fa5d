//! HTML patching errors

use super::YuicatError;

pub fn already_processed(path: impl Into<String>, asset_type: impl Into<String>) -> YuicatError {
    YuicatError::AlreadyProcessed {
        path: path.into(),
        asset_type: asset_type.into(),
    }
}

/// Creates an error for a script include that follows non-script content
pub fn script_after_content(path: impl Into<String>, line: usize) -> YuicatError {
    YuicatError::ScriptAfterContent {
        path: path.into(),
        line,
    }
}

pub fn duplicate_include(
    path: impl Into<String>,
    line: usize,
    file: impl Into<String>,
) -> YuicatError {
    YuicatError::DuplicateInclude {
        path: path.into(),
        line,
        file: file.into(),
    }
}
