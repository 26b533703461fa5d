//! Bundle command implementation
//!
//! Resolves the CLI into a [`RunConfig`], runs the driver with the configured
//! minifier and prints a summary of the bundles written.

use console::Style;

use crate::cli::Cli;
use crate::config::RunConfig;
use crate::driver::{self, Report};
use crate::error::Result;

/// Run a bundling pass over the workspace
pub fn run(cli: &Cli) -> Result<()> {
    let config = RunConfig::from_cli(cli)?;
    log::debug!(
        "bundling {:?} in {}",
        config.asset_types,
        config.workspace.display()
    );

    let report = driver::run(&config, &config.minifier)?;
    print_summary(&report, &config);
    Ok(())
}

fn print_summary(report: &Report, config: &RunConfig) {
    for bundled in &report.bundles {
        println!(
            "  {} {} {} {} {}",
            Style::new().green().apply_to(bundled.asset_type),
            bundled.document.display(),
            Style::new().dim().apply_to("->"),
            Style::new().cyan().apply_to(bundled.bundle.display()),
            Style::new().dim().apply_to(format!("({} files)", bundled.files)),
        );
    }

    println!(
        "{} {} bundle(s) from {} HTML file(s)",
        Style::new().bold().green().apply_to("Bundled"),
        report.manifest.bundle_count(),
        report.documents
    );

    if let Some(outfile) = &config.outfile {
        println!(
            "{} {}",
            Style::new().bold().apply_to("Manifest:"),
            outfile.display()
        );
    }
}
