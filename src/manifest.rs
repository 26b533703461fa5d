//! Record of which files were bundled into which document
//!
//! Serialized as `{type: {document: [files...]}}`. Every processed document
//! is listed, with an empty list when nothing was bundled for it. The output
//! file is always overwritten.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::common::fs::ensure_parent_dir;
use crate::domain::AssetType;
use crate::error::{Result, fs as fs_error};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: BTreeMap<AssetType, BTreeMap<String, Vec<String>>>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the files bundled for `document`, replacing any earlier entry
    pub fn record(&mut self, asset_type: AssetType, document: &Path, files: &[PathBuf]) {
        self.entries.entry(asset_type).or_default().insert(
            path_key(document),
            files.iter().map(|f| path_key(f)).collect(),
        );
    }

    #[cfg(test)]
    pub fn files(&self, asset_type: AssetType, document: &str) -> Option<&[String]> {
        self.entries
            .get(&asset_type)
            .and_then(|docs| docs.get(document))
            .map(Vec::as_slice)
    }

    /// Number of bundles written, i.e. entries with at least one file
    pub fn bundle_count(&self) -> usize {
        self.entries
            .values()
            .flat_map(BTreeMap::values)
            .filter(|files| !files.is_empty())
            .count()
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)? + "\n")
    }

    /// Write the manifest, as JSON when `path` ends in `.json` and YAML otherwise
    pub fn write(&self, path: &Path) -> Result<()> {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let content = if is_json {
            self.to_json()?
        } else {
            self.to_yaml()?
        };

        ensure_parent_dir(path)?;
        std::fs::write(path, content).map_err(|e| fs_error::write_error(path, &e))
    }
}

fn path_key(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
