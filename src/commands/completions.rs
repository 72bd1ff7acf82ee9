//! Shell completion and man page generation

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::Cli;
use crate::error::{Result, TreePrinterError};

/// Write completions for `shell` to stdout
pub fn run(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

/// Write the roff man page to `out`
pub fn write_man<W: Write>(out: &mut W) -> Result<()> {
    clap_mangen::Man::new(Cli::command())
        .render(out)
        .map_err(TreePrinterError::Output)
}

/// Write the roff man page to stdout
pub fn run_man() -> Result<()> {
    write_man(&mut io::stdout().lock())
}
