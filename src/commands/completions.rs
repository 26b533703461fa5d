//! Shell completions

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::Cli;
use crate::error::Result;

/// Write completions for `shell` to stdout
pub fn run(shell: Shell) -> Result<()> {
    generate(shell, &mut std::io::stdout().lock());
    Ok(())
}

fn generate(shell: Shell, out: &mut dyn std::io::Write) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "yuicat", out);
}
