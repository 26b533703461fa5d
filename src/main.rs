//! yuicat - concatenate and compress the CSS and JavaScript of HTML documents
//!
//! Every local stylesheet or script included by an HTML document is merged
//! into one minified bundle per document, and the includes are replaced by a
//! single include of that bundle.

use clap::Parser;

mod cli;
mod commands;
mod common;
mod config;
mod domain;
mod driver;
mod error;
mod manifest;
mod minifier;
mod patcher;
mod resolver;

use cli::Cli;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.completions {
        Some(shell) => commands::completions::run(shell),
        None => commands::bundle::run(&cli),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        if let Some(help) = miette::Diagnostic::help(&e) {
            eprintln!("Help: {help}");
        }
        std::process::exit(1);
    }
}
