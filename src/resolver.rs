//! Translation between logical (web) and physical (on-disk) asset paths
//!
//! A logical path such as `/js/lib/menu.js` is rooted under the logical
//! directory of its asset type; the part below that directory is kept as-is
//! and re-rooted under the physical directory (`static/js/lib/menu.js`).

use std::path::{Component, Path, PathBuf};

use crate::config::Layout;
use crate::domain::AssetType;
use crate::error::{Result, layout};

/// Resolves include paths against a [`Layout`]
#[derive(Debug, Clone, Copy)]
pub struct LayoutResolver<'a> {
    layout: &'a Layout,
}

impl<'a> LayoutResolver<'a> {
    pub fn new(layout: &'a Layout) -> Self {
        Self { layout }
    }

    /// Return the physical location of a logically rooted file
    pub fn logical_to_physical(&self, path: &str, asset_type: AssetType) -> Result<PathBuf> {
        let dirs = self.layout.dirs(asset_type);
        let root = dirs.logical_root();
        let not_rooted = || layout::not_logical(path, root);

        let relative = strip_logical_root(path, root).ok_or_else(not_rooted)?;
        let segments: Vec<&str> = relative.split('/').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() || relative.ends_with('/') {
            return Err(not_rooted());
        }

        let mut physical = dirs.physical.clone();
        for segment in segments {
            if segment == "." || segment == ".." {
                return Err(not_rooted());
            }
            physical.push(segment);
        }
        Ok(physical)
    }

    /// Return the logical location of a physically rooted file
    pub fn physical_to_logical(&self, path: &Path, asset_type: AssetType) -> Result<String> {
        let dirs = self.layout.dirs(asset_type);
        let not_rooted =
            || layout::not_physical(path.display().to_string(), dirs.physical.display().to_string());

        let relative = path.strip_prefix(&dirs.physical).map_err(|_| not_rooted())?;

        let mut segments = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(name) => segments.push(name.to_string_lossy()),
                Component::CurDir => {}
                _ => return Err(not_rooted()),
            }
        }
        if segments.is_empty() {
            return Err(not_rooted());
        }

        let root = dirs.logical_root();
        let separator = if root.ends_with('/') { "" } else { "/" };
        Ok(format!("{root}{separator}{}", segments.join("/")))
    }
}

/// Strip the logical root from `path`, requiring a directory boundary
fn strip_logical_root<'p>(path: &'p str, root: &str) -> Option<&'p str> {
    if root == "/" {
        return path.strip_prefix('/');
    }
    path.strip_prefix(root)?.strip_prefix('/')
}
