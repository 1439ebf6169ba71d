// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use log::info;

use crate::{common_args::ConfigArgs, error::CargoDeployResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    config: ConfigArgs,
}

pub fn exec(args: Args) -> CargoDeployResult {
    let config = args.config.load()?;
    let Some(step) = &config.build else {
        info!("no external build step configured");
        return Ok(());
    };
    for artifact in step.run(&config.root)? {
        println!("{}", artifact.display());
    }
    Ok(())
}
