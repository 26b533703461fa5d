//! Project layout configuration
//!
//! A layout tells yuicat where HTML documents live and, per asset type,
//! which filesystem directory ("physical") backs which web directory
//! ("logical"). Physical directories are relative to the workspace root.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::AssetType;
use crate::error::{Result, config};

/// Physical and logical directory of one asset type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDirs {
    /// Directory on disk, relative to the workspace root
    pub physical: PathBuf,

    /// Directory as referenced from HTML, e.g. `/js`
    pub logical: String,
}

impl AssetDirs {
    /// Logical directory without a trailing slash (`/` stays `/`)
    pub fn logical_root(&self) -> &str {
        let trimmed = self.logical.trim_end_matches('/');
        if trimmed.is_empty() { "/" } else { trimmed }
    }
}

/// Directory layout of a web project (layout YAML file)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub css: AssetDirs,
    pub js: AssetDirs,

    /// Directory holding the HTML documents to patch
    pub html: PathBuf,
}

/// Layout used when no `--layout` file is given
impl Default for Layout {
    fn default() -> Self {
        Self {
            css: AssetDirs {
                physical: PathBuf::from("static/stylesheets"),
                logical: "/stylesheets".to_string(),
            },
            js: AssetDirs {
                physical: PathBuf::from("static/js"),
                logical: "/js".to_string(),
            },
            html: PathBuf::from("templates"),
        }
    }
}

impl Layout {
    /// Parse and validate a layout from YAML; `source` names it in errors
    pub fn from_yaml(yaml: &str, source: &str) -> Result<Self> {
        let layout: Self = serde_yaml::from_str(yaml)
            .map_err(|e| config::parse_failed(source, e.to_string()))?;
        layout.validate()?;
        Ok(layout)
    }

    /// Load a layout file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| config::read_failed(path.display().to_string(), e.to_string()))?;
        Self::from_yaml(&content, &path.display().to_string())
    }

    /// Load the given layout file, or fall back to the default layout
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Directories for an asset type
    pub fn dirs(&self, asset_type: AssetType) -> &AssetDirs {
        match asset_type {
            AssetType::Css => &self.css,
            AssetType::Js => &self.js,
        }
    }

    fn validate(&self) -> Result<()> {
        for asset_type in AssetType::ALL {
            let dirs = self.dirs(asset_type);
            if !dirs.logical.starts_with('/') {
                return Err(config::invalid(format!(
                    "{asset_type}: logical directory '{}' must start with '/'",
                    dirs.logical
                )));
            }
            if dirs.physical.as_os_str().is_empty() {
                return Err(config::invalid(format!(
                    "{asset_type}: physical directory must not be empty"
                )));
            }
            if dirs.physical == Path::new(&dirs.logical) {
                return Err(config::invalid(format!(
                    "{asset_type}: physical and logical directories are both '{}'",
                    dirs.logical
                )));
            }
        }
        Ok(())
    }
}
