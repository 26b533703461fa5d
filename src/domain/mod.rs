//! Domain models for yuicat
//!
//! Pure types shared by the layout resolver, the patcher and the manifest.

pub mod asset;

pub use asset::AssetType;
