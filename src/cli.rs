//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

/// yuicat - concatenate and compress the CSS and JavaScript of HTML documents
#[derive(Parser, Debug)]
#[command(
    name = "yuicat",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Concatenate and compress the CSS and JavaScript used by HTML files",
    long_about = "Prepares HTML files for release by concatenating and compressing local \
                  JavaScript or CSS files used by individual HTML files. NOTE: This tool \
                  modifies the underlying HTML files. Most users will want to run this tool \
                  on a copy of the website.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  yuicat\n    \
                  yuicat --type js --prefix bundle\n    \
                  yuicat --layout layout.yaml --outfile manifest.yaml\n    \
                  yuicat --no-backup --yuijar /opt/yuicompressor-2.4.2.jar"
)]
pub struct Cli {
    /// Comma separated list of file types to concatenate and compress (css, js)
    #[arg(long = "type", short = 't', value_name = "TYPE", default_value = "css,js")]
    pub asset_types: String,

    /// Prefix to prepend to generated files
    #[arg(long, short = 'p', default_value = "yuicat")]
    pub prefix: String,

    /// Record in FILE the files concatenated and compressed from each HTML file
    #[arg(long, short = 'o', value_name = "FILE")]
    pub outfile: Option<PathBuf>,

    /// Disable backing up of the HTML files before modifying them
    #[arg(long, short = 'n')]
    pub no_backup: bool,

    /// File specifying physical and logical directory layout
    #[arg(long, short = 'l', value_name = "FILE")]
    pub layout: Option<PathBuf>,

    /// Path to yuicompressor (a .jar, or an executable taking the same arguments)
    #[arg(long, value_name = "JAR", default_value = "yuicompressor-2.4.2.jar")]
    pub yuijar: PathBuf,

    /// Java launcher used to run a .jar minifier
    #[arg(long, value_name = "PATH", env = "YUICAT_JAVA", default_value = "java")]
    pub java: PathBuf,

    /// Project directory the layout is relative to (defaults to current directory)
    #[arg(long, short = 'w')]
    pub workspace: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}
