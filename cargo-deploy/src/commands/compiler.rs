// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::{
    common_args::ConfigArgs,
    error::CargoDeployResult,
    utils::{print_field, print_heading, print_optional},
};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    config: ConfigArgs,
}

pub fn exec(args: Args) -> CargoDeployResult {
    let config = args.config.load()?;
    let compiler = &config.compiler;

    print_heading("solc");
    print_field("version", &compiler.version);
    print_field("optimizer", compiler.optimizer.enabled);
    print_field("optimizer runs", compiler.optimizer.runs);
    print_optional("evm version", compiler.evm_version.as_deref());

    if let Some(step) = &config.build {
        print_heading("external");
        print_field("command", &step.command);
        for target in &step.targets {
            print_field("target", target.display());
        }
    }
    Ok(())
}
