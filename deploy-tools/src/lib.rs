// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deployment settings for smart-contract projects.
//!
//! A [`DeployConfig`] holds the registry of target networks, the compiler settings, an optional
//! external build step and the verification plugin credentials. Network profiles are resolved by
//! name, and only the selected profile ever builds a signing provider.

#[macro_use]
mod macros;

pub mod core;
pub(crate) mod error;
pub mod utils;

pub use crate::core::{
    build::{BuildStepError, ExternalBuildStep},
    compiler::{CompilerSettings, OptimizerSettings},
    config::DeployConfig,
    network::{ConfigError, NetworkId, NetworkProfile, Registry, TxPolicy},
    provider::{Connection, ConnectionError, Connector, Endpoint, HttpConnector, ProviderFactory},
    secrets::{Secret, SecretStore},
    verification::{ApiKeySet, Verification},
};
pub use error::{CommandFailure, Error, Result};
