//! Configuration handling for yuicat
//!
//! This module contains:
//! - [`layout`]: the layout YAML file mapping logical to physical directories
//! - [`RunConfig`]: everything one run needs, resolved once from the CLI

pub mod layout;

use std::path::PathBuf;

pub use layout::Layout;

use crate::cli::Cli;
use crate::domain::AssetType;
use crate::error::{Result, config};
use crate::minifier::YuiCompressor;

/// Settings for one bundling run, passed by reference to the driver and patcher
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Root that layout directories are relative to
    pub workspace: PathBuf,

    /// Asset types to process, in order
    pub asset_types: Vec<AssetType>,

    /// Prefix of generated bundle file names
    pub prefix: String,

    /// Where to write the manifest, if anywhere
    pub outfile: Option<PathBuf>,

    /// Whether to copy each document before modifying it
    pub backup: bool,

    pub layout: Layout,

    pub minifier: YuiCompressor,
}

impl RunConfig {
    /// Resolve CLI arguments into a run configuration
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let asset_types = AssetType::parse_list(&cli.asset_types)?;
        if asset_types.is_empty() {
            return Err(config::invalid("no asset types requested"));
        }
        validate_prefix(&cli.prefix)?;

        let workspace = match &cli.workspace {
            Some(path) => path.clone(),
            None => std::env::current_dir()?,
        };
        let layout = Layout::load_or_default(cli.layout.as_deref())?;

        Ok(Self {
            workspace,
            asset_types,
            prefix: cli.prefix.clone(),
            outfile: cli.outfile.clone(),
            backup: !cli.no_backup,
            layout,
            minifier: YuiCompressor::new(cli.java.clone(), cli.yuijar.clone()),
        })
    }
}

fn validate_prefix(prefix: &str) -> Result<()> {
    if prefix.is_empty() {
        return Err(config::invalid("bundle prefix must not be empty"));
    }
    if prefix.contains(['/', '\\']) {
        return Err(config::invalid(format!(
            "bundle prefix '{prefix}' must not contain path separators"
        )));
    }
    Ok(())
}
