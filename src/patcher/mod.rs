//! HTML patcher
//!
//! Replaces the CSS or JavaScript includes of one HTML document with a
//! single include of a freshly built bundle. The document is only written
//! once scanning and bundling have both succeeded, and it keeps its original
//! access and modification times.

pub mod plan;

use std::path::{Path, PathBuf};

use crate::common::fs::{Timestamps, copy_file, write_preserving_times};
use crate::config::{Layout, RunConfig};
use crate::domain::AssetType;
use crate::error::{Result, fs as fs_error};
use crate::minifier::Compressor;
use crate::resolver::LayoutResolver;

/// Patches HTML documents of one workspace
pub struct Patcher<'a> {
    workspace: &'a Path,
    layout: &'a Layout,
    compressor: &'a dyn Compressor,
    prefix: &'a str,
    backup: bool,
}

impl<'a> Patcher<'a> {
    pub fn new(config: &'a RunConfig, compressor: &'a dyn Compressor) -> Self {
        Self {
            workspace: &config.workspace,
            layout: &config.layout,
            compressor,
            prefix: &config.prefix,
            backup: config.backup,
        }
    }

    /// Bundle file for a document, relative to the workspace
    ///
    /// `<physical dir>/<prefix>_<document stem>.<type>`
    pub fn bundle_path(&self, asset_type: AssetType, document: &Path) -> PathBuf {
        let stem = document
            .file_stem()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default();
        self.layout
            .dirs(asset_type)
            .physical
            .join(format!("{}_{stem}.{asset_type}", self.prefix))
    }

    /// Backup location of a document before it is patched for `asset_type`
    pub fn backup_path(document: &Path, asset_type: AssetType) -> PathBuf {
        let mut name = document.as_os_str().to_owned();
        name.push(format!(".{asset_type}.bak"));
        PathBuf::from(name)
    }

    /// Merge all includes of `asset_type` within `document`
    ///
    /// Returns the bundled files (relative to the workspace) in include
    /// order. An empty list means the document had no such includes and was
    /// left untouched.
    pub fn patch(&self, asset_type: AssetType, document: &Path) -> Result<Vec<PathBuf>> {
        let times = Timestamps::of(document)?;
        let result = self.patch_document(asset_type, document, times);
        // Reading may have bumped the access time of an untouched document
        times.restore_if_changed(document);
        result
    }

    fn patch_document(
        &self,
        asset_type: AssetType,
        document: &Path,
        times: Timestamps,
    ) -> Result<Vec<PathBuf>> {
        let content = std::fs::read(document).map_err(|e| fs_error::read_error(document, &e))?;
        let lines = plan::lines(&content);

        let resolver = LayoutResolver::new(self.layout);
        let bundle = self.bundle_path(asset_type, document);
        let bundle_tag = asset_type.include_tag(&resolver.physical_to_logical(&bundle, asset_type)?);

        let display_path = document.strip_prefix(self.workspace).unwrap_or(document);
        let plan = plan::scan(&lines, asset_type, &bundle_tag, &resolver, display_path)?;
        if plan.is_empty() {
            log::debug!("{}: no {asset_type} includes", display_path.display());
            return Ok(Vec::new());
        }

        let files = plan.files();
        let sources: Vec<PathBuf> = files.iter().map(|f| self.workspace.join(f)).collect();
        self.compressor
            .compress(&sources, &self.workspace.join(&bundle), asset_type)?;

        let patched = plan.apply(&lines, &bundle_tag);
        if self.backup {
            let backup = Self::backup_path(document, asset_type);
            log::debug!("backing up {} to {}", document.display(), backup.display());
            copy_file(document, &backup)?;
        }
        write_preserving_times(document, &patched, times)?;

        log::info!(
            "{}: bundled {} {asset_type} file(s) into {}",
            display_path.display(),
            files.len(),
            bundle.display()
        );
        Ok(files)
    }
}
