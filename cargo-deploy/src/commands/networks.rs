// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::{common_args::ConfigArgs, error::CargoDeployResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Include disabled networks
    #[arg(long)]
    all: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

pub fn exec(args: Args) -> CargoDeployResult {
    let config = args.config.load()?;
    if args.all {
        for profile in config.registry.profiles() {
            let status = if profile.enabled { "" } else { " (disabled)" };
            println!("{}{status}", profile.identifier);
        }
    } else {
        for identifier in config.registry.identifiers() {
            println!("{identifier}");
        }
    }
    Ok(())
}
