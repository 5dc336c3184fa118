#![deny(clippy::pedantic, clippy::all, clippy::nursery)]
#![allow(clippy::must_use_candidate)]

use clap::Parser;
use formpost::{cli::Cli, controller::Formpost};
use formpost_common::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init();

    let config = cli.load_config()?;
    Formpost::new(config).run().await
}
