// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{path::PathBuf, sync::Arc};

use deploy_tools::{DeployConfig, SecretStore};

use crate::constants::{DEFAULT_CONFIG, ENV_FILE};

#[derive(Debug, clap::Args)]
pub struct ConfigArgs {
    /// Path to the deployment manifest
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,
    /// Environment file to load secrets from. Defaults to the `.env` next to the manifest, or
    /// else the nearest one above the current directory
    #[arg(long)]
    pub env_file: Option<PathBuf>,
}

impl ConfigArgs {
    /// Snapshots the environment and loads the manifest. Called once per invocation.
    pub fn load(&self) -> eyre::Result<DeployConfig> {
        let env_file = self.env_file.clone().or_else(|| self.manifest_env_file());
        let secrets = SecretStore::load(env_file.as_deref())?;
        let config = DeployConfig::load(&self.config, Arc::new(secrets))?;
        Ok(config)
    }

    fn manifest_env_file(&self) -> Option<PathBuf> {
        let dir = self.config.parent().filter(|dir| !dir.as_os_str().is_empty())?;
        Some(dir.join(ENV_FILE)).filter(|path| path.is_file())
    }
}

#[derive(Debug, clap::Args)]
pub struct NetworkArgs {
    /// Name of the network to use
    pub network: String,
}
