//! # sfm — Stackform CLI
//!
//! Composes the deployment blueprint into a resolved group tree and
//! renders the provisioning document for the external engine.

mod commands;
mod output;

use clap::Parser;

use crate::commands::Cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    commands::execute(cli)
}
