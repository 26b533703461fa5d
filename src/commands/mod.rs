//! Command implementations for the yuicat CLI

pub mod bundle;
pub mod completions;
