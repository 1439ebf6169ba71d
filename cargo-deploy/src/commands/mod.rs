// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::CargoDeployResult;

mod api_keys;
mod build;
mod check;
mod compiler;
mod networks;
mod show;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// List the API keys configured for contract verification
    ApiKeys(api_keys::Args),
    /// Run the external build step
    #[clap(visible_alias = "b")]
    Build(build::Args),
    /// Connect to a network and check that it serves the expected chain
    #[clap(visible_alias = "c")]
    Check(check::Args),
    /// Print the compiler settings
    Compiler(compiler::Args),
    /// List the configured networks
    #[clap(visible_alias = "n")]
    Networks(networks::Args),
    /// Print the resolved settings of one network
    Show(show::Args),
}

pub async fn exec(cmd: Command) -> CargoDeployResult {
    match cmd {
        Command::ApiKeys(args) => api_keys::exec(args),
        Command::Build(args) => build::exec(args),
        Command::Check(args) => check::exec(args).await,
        Command::Compiler(args) => compiler::exec(args),
        Command::Networks(args) => networks::exec(args),
        Command::Show(args) => show::exec(args),
    }
}
