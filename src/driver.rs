//! Bundling run over every HTML document of a project
//!
//! Asset types are processed in the requested order and, within a type,
//! documents in file name order. A document's css pass therefore finishes
//! before its js pass reads it. The first error aborts the run; documents
//! patched before it stay patched.

use std::path::PathBuf;

use crate::common::fs::files_with_extension;
use crate::config::RunConfig;
use crate::domain::AssetType;
use crate::error::Result;
use crate::manifest::Manifest;
use crate::minifier::Compressor;
use crate::patcher::Patcher;

/// One bundle written during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundled {
    pub asset_type: AssetType,
    /// Document, relative to the workspace
    pub document: PathBuf,
    /// Bundle file, relative to the workspace
    pub bundle: PathBuf,
    pub files: usize,
}

/// Result of a run
#[derive(Debug)]
pub struct Report {
    pub manifest: Manifest,
    pub bundles: Vec<Bundled>,
    pub documents: usize,
}

/// Patch every HTML document for every requested asset type
pub fn run(config: &RunConfig, compressor: &dyn Compressor) -> Result<Report> {
    let html_dir = config.workspace.join(&config.layout.html);
    let documents = files_with_extension(&html_dir, "html")?;
    if documents.is_empty() {
        log::warn!("no HTML documents found in {}", html_dir.display());
    }

    let patcher = Patcher::new(config, compressor);
    let mut report = Report {
        manifest: Manifest::new(),
        bundles: Vec::new(),
        documents: documents.len(),
    };

    for &asset_type in &config.asset_types {
        for document in &documents {
            let files = patcher.patch(asset_type, document)?;
            let relative = document
                .strip_prefix(&config.workspace)
                .unwrap_or(document)
                .to_path_buf();

            if !files.is_empty() {
                report.bundles.push(Bundled {
                    asset_type,
                    bundle: patcher.bundle_path(asset_type, &relative),
                    document: relative.clone(),
                    files: files.len(),
                });
            }
            report.manifest.record(asset_type, &relative, &files);
        }
    }

    if let Some(outfile) = &config.outfile {
        log::debug!("writing manifest to {}", outfile.display());
        report.manifest.write(outfile)?;
    }

    Ok(report)
}
