//! Binary crate for the `nimbus` terminal screen.
//!
//! This crate focuses on:
//! - Wiring the fixed endpoint constants into the core controller
//! - Rendering current conditions on the terminal
//! - The manual refresh prompt and the two error notices

use clap::Parser;
use env_logger::Env;

mod cli;
mod view;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(Env::default().filter_or("NIMBUS_LOG", "info"));

    let cmd = cli::Cli::parse();
    cmd.run().await
}
