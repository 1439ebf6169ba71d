// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::{utils::format_units, U256};
use deploy_tools::TxPolicy;

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

pub fn exec(args: Args) -> CargoDeployResult {
    let config = args.config.load()?;
    let profile = config.resolve(&args.network.network)?;
    let factory = profile.provider_factory();
    let endpoint = factory.endpoint();

    print_heading(&profile.identifier);
    print_field("endpoint", endpoint);
    print_field("network id", profile.network_id());
    print_optional("signing key", endpoint.secret_name());
    print_policy(profile.policy())?;
    Ok(())
}

fn print_policy(policy: &TxPolicy) -> eyre::Result<()> {
    let gas_price = policy
        .gas_price_wei
        .map(|wei| format_units(U256::from(wei), "gwei").map(|gwei| format!("{gwei} gwei")))
        .transpose()?;
    print_optional("gas limit", policy.gas_limit);
    print_optional("gas price", gas_price);
    print_optional("confirmations", policy.confirmations);
    print_optional("timeout blocks", policy.timeout_blocks);
    print_field("skip dry run", policy.skip_dry_run);
    print_optional(
        "polling interval",
        policy.polling_interval.map(|d| format!("{}ms", d.as_millis())),
    );
    print_optional(
        "network check timeout",
        policy.network_check_timeout.map(|d| format!("{}ms", d.as_millis())),
    );
    Ok(())
}
