mod app;
mod cli;
mod domain;
mod infra;
#[cfg(test)]
mod test_support;
mod transport;
mod ui;
mod usecases;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    infra::panic_hook::install_terminal_restore_hook();

    let cli = cli::Cli::parse();
    app::run(cli)
}
