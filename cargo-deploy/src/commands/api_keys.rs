// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::{
    common_args::ConfigArgs,
    error::CargoDeployResult,
    utils::{print_field, print_heading},
};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    config: ConfigArgs,
}

/// Lists services and whether their key resolved. Key values are never printed.
pub fn exec(args: Args) -> CargoDeployResult {
    let config = args.config.load()?;
    let verification = &config.verification;

    if !verification.plugins.is_empty() {
        print_heading("plugins");
        for plugin in &verification.plugins {
            println!("  {plugin}");
        }
    }
    print_heading("api keys");
    for service in verification.api_keys.services() {
        let status = match verification.api_keys.get(service) {
            Ok(_) => "set".to_string(),
            Err(err) => err.to_string(),
        };
        print_field(service, status);
    }
    Ok(())
}
