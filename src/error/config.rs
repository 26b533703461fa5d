//! Configuration errors

use super::YuicatError;

/// Creates an invalid asset type error
pub fn invalid_asset_type(name: impl Into<String>) -> YuicatError {
    YuicatError::InvalidAssetType { name: name.into() }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> YuicatError {
    YuicatError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates a layout parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> YuicatError {
    YuicatError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a layout read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> YuicatError {
    YuicatError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
