// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::{
    common_args::{ConfigArgs, NetworkArgs},
    error::CargoDeployResult,
    utils::{print_field, print_heading, print_optional},
};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    network: NetworkArgs,
    #[command(flatten)]
    config: ConfigArgs,
}

pub async fn exec(args: Args) -> CargoDeployResult {
    let config = args.config.load()?;
    let profile = config.resolve(&args.network.network)?;
    let connection = profile.provider_factory().connect()?;
    let chain_id = connection.check_network().await?;

    print_heading(connection.network());
    print_field("chain id", chain_id);
    print_optional("sender", connection.sender());
    Ok(())
}
