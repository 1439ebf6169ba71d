// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::core::{
    manifest::{TomlOptimizer, TomlSolc},
    network::ConfigError,
};

/// Optimizer runs used when the manifest enables the optimizer without a count.
pub const DEFAULT_OPTIMIZER_RUNS: u32 = 200;

/// Solidity compiler settings, read once by the compile step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompilerSettings {
    pub version: String,
    pub optimizer: OptimizerSettings,
    pub evm_version: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptimizerSettings {
    pub enabled: bool,
    pub runs: u32,
}

impl Default for OptimizerSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            runs: DEFAULT_OPTIMIZER_RUNS,
        }
    }
}

impl CompilerSettings {
    /// Validates the `[compilers.solc]` table. A missing table or version is an error.
    pub fn from_toml(solc: Option<&TomlSolc>) -> Result<Self, ConfigError> {
        let solc = solc.ok_or(ConfigError::MissingCompilerVersion)?;
        let version = solc
            .version
            .as_deref()
            .map(str::trim)
            .filter(|version| !version.is_empty())
            .ok_or(ConfigError::MissingCompilerVersion)?;

        let optimizer = match &solc.optimizer {
            Some(optimizer) => OptimizerSettings::from_toml(optimizer)?,
            None => OptimizerSettings::default(),
        };

        Ok(Self {
            version: version.to_string(),
            optimizer,
            evm_version: solc.evm_version.clone(),
        })
    }
}

impl OptimizerSettings {
    fn from_toml(optimizer: &TomlOptimizer) -> Result<Self, ConfigError> {
        let runs = match optimizer.runs {
            Some(runs) => u32::try_from(runs).map_err(|_| {
                ConfigError::invalid(
                    "compilers.solc.optimizer",
                    "runs",
                    format!("{runs} is not a non-negative 32-bit integer"),
                )
            })?,
            None => DEFAULT_OPTIMIZER_RUNS,
        };
        Ok(Self {
            enabled: optimizer.enabled,
            runs,
        })
    }
}
