//! Layout errors

use super::YuicatError;

/// Creates an error for a path outside the logical directory
pub fn not_logical(path: impl Into<String>, root: impl Into<String>) -> YuicatError {
    YuicatError::NotLogicallyRooted {
        path: path.into(),
        root: root.into(),
    }
}

/// Creates an error for a path outside the physical directory
pub fn not_physical(path: impl Into<String>, root: impl Into<String>) -> YuicatError {
    YuicatError::NotPhysicallyRooted {
        path: path.into(),
        root: root.into(),
    }
}
