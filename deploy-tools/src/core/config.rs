// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Loading and validation of the full deployment configuration.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use toml::Value;

use crate::{
    core::{
        build::ExternalBuildStep,
        compiler::CompilerSettings,
        manifest::{self, TomlManifest, TomlNetwork},
        network::{ConfigError, NetworkId, NetworkProfile, Registry, TxPolicy},
        provider::{Connector, Endpoint, HttpConnector, ProviderFactory},
        secrets::{SecretStore, PRIVATE_KEY_VAR},
        verification::Verification,
    },
    utils::units,
    Result,
};

/// Everything a deployment run reads from `Deploy.toml`.
///
/// Built once at start-up and immutable afterwards.
#[derive(Debug)]
pub struct DeployConfig {
    /// Directory the manifest was loaded from; the external build step runs here.
    pub root: PathBuf,
    pub registry: Registry,
    pub compiler: CompilerSettings,
    pub build: Option<ExternalBuildStep>,
    pub verification: Verification,
}

impl DeployConfig {
    /// Loads the manifest at `path`, connecting over HTTP.
    pub fn load(path: impl AsRef<Path>, secrets: Arc<SecretStore>) -> Result<Self> {
        Self::load_with(path, secrets, Arc::new(HttpConnector))
    }

    pub fn load_with(
        path: impl AsRef<Path>,
        secrets: Arc<SecretStore>,
        connector: Arc<dyn Connector>,
    ) -> Result<Self> {
        let path = path.as_ref();
        let manifest: TomlManifest = manifest::load(path)?;
        let root = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        debug!(@grey, "loaded {}", path.display());
        Ok(Self::from_manifest(&manifest, root, secrets, connector)?)
    }

    pub fn from_toml_str(
        contents: &str,
        root: impl Into<PathBuf>,
        secrets: Arc<SecretStore>,
    ) -> Result<Self> {
        let manifest: TomlManifest =
            toml::from_str(contents).map_err(manifest::ManifestError::from)?;
        Ok(Self::from_manifest(
            &manifest,
            root.into(),
            secrets,
            Arc::new(HttpConnector),
        )?)
    }

    /// Validates a parsed manifest. Compiler settings are checked first so that a missing
    /// version is reported before anything network related.
    pub fn from_manifest(
        manifest: &TomlManifest,
        root: PathBuf,
        secrets: Arc<SecretStore>,
        connector: Arc<dyn Connector>,
    ) -> Result<Self, ConfigError> {
        let compiler = CompilerSettings::from_toml(manifest.compilers.solc.as_ref())?;
        let build = manifest
            .compilers
            .external
            .as_ref()
            .map(ExternalBuildStep::from_toml);

        let profiles = manifest
            .networks
            .iter()
            .map(|(name, network)| network_profile(name, network, &secrets, &connector))
            .collect::<Result<Vec<_>, _>>()?;
        let registry = Registry::new(profiles)?;

        let verification = Verification::from_toml(&manifest.verify, &secrets);

        Ok(Self {
            root,
            registry,
            compiler,
            build,
            verification,
        })
    }

    /// Shorthand for [`Registry::resolve`].
    pub fn resolve(&self, network: &str) -> Result<&NetworkProfile, ConfigError> {
        self.registry.resolve(network)
    }
}

fn network_profile(
    name: &str,
    network: &TomlNetwork,
    secrets: &Arc<SecretStore>,
    connector: &Arc<dyn Connector>,
) -> Result<NetworkProfile, ConfigError> {
    let scope = format!("networks.{name}");
    let endpoint = endpoint(&scope, network)?;
    let network_id = network_id(&scope, network.network_id.as_ref())?;
    let policy = tx_policy(&scope, network)?;
    let factory = ProviderFactory::new(
        name,
        endpoint,
        network_id,
        policy,
        secrets.clone(),
        connector.clone(),
    );
    Ok(NetworkProfile::new(
        name,
        network.enabled.unwrap_or(true),
        factory,
    ))
}

fn endpoint(scope: &str, network: &TomlNetwork) -> Result<Endpoint, ConfigError> {
    match (&network.rpc_url, &network.host) {
        (Some(url), None) => {
            if network.port.is_some() {
                return Err(ConfigError::invalid(
                    scope,
                    "port",
                    "port is only used with host",
                ));
            }
            let secret = network.secret.as_deref().unwrap_or(PRIVATE_KEY_VAR);
            Endpoint::signing(url, secret).map_err(|err| ConfigError::invalid(scope, "rpc_url", err))
        }
        (None, Some(host)) => {
            if network.secret.is_some() {
                return Err(ConfigError::invalid(
                    scope,
                    "secret",
                    "local networks do not sign transactions",
                ));
            }
            let port = network
                .port
                .as_ref()
                .ok_or_else(|| ConfigError::invalid(scope, "port", "missing"))?;
            let port = integer(scope, "port", port)?;
            let port = u16::try_from(port)
                .map_err(|_| ConfigError::invalid(scope, "port", format!("{port} out of range")))?;
            Endpoint::local(host, port).map_err(|err| ConfigError::invalid(scope, "host", err))
        }
        (Some(_), Some(_)) => Err(ConfigError::invalid(
            scope,
            "provider",
            "set either rpc_url or host, not both",
        )),
        (None, None) => Err(ConfigError::invalid(
            scope,
            "provider",
            "one of rpc_url or host is required",
        )),
    }
}

fn network_id(scope: &str, id: Option<&Value>) -> Result<NetworkId, ConfigError> {
    match id {
        None => Ok(NetworkId::Any),
        Some(Value::String(wildcard)) if wildcard == "*" => Ok(NetworkId::Any),
        Some(Value::Integer(id)) => Ok(NetworkId::Id(non_negative(scope, "network_id", *id)?)),
        Some(other) => Err(ConfigError::invalid(
            scope,
            "network_id",
            format!("expected \"*\" or an integer, got {}", other.type_str()),
        )),
    }
}

fn tx_policy(scope: &str, network: &TomlNetwork) -> Result<TxPolicy, ConfigError> {
    let optional = |field: &'static str, value: &Option<Value>| {
        value
            .as_ref()
            .map(|value| non_negative(scope, field, integer(scope, field, value)?))
            .transpose()
    };
    let millis = |field: &'static str, value: &Option<Value>| {
        optional(field, value).map(|value| value.map(Duration::from_millis))
    };
    let gas_price_wei = match &network.gas_price {
        None => None,
        Some(Value::Integer(wei)) => Some(u128::from(non_negative(scope, "gas_price", *wei)?)),
        Some(Value::String(text)) => Some(
            units::parse_wei(text).map_err(|err| ConfigError::invalid(scope, "gas_price", err))?,
        ),
        Some(other) => {
            return Err(ConfigError::invalid(
                scope,
                "gas_price",
                format!(
                    "expected an integer or a string such as \"30 gwei\", got {}",
                    other.type_str()
                ),
            ))
        }
    };
    let skip_dry_run = match &network.skip_dry_run {
        None => false,
        Some(value) => value.as_bool().ok_or_else(|| {
            ConfigError::invalid(
                scope,
                "skip_dry_run",
                format!("expected a boolean, got {}", value.type_str()),
            )
        })?,
    };

    Ok(TxPolicy {
        gas_limit: optional("gas", &network.gas)?,
        gas_price_wei,
        confirmations: optional("confirmations", &network.confirmations)?,
        timeout_blocks: optional("timeout_blocks", &network.timeout_blocks)?,
        skip_dry_run,
        polling_interval: millis(
            "deployment_polling_interval",
            &network.deployment_polling_interval,
        )?,
        network_check_timeout: millis("network_check_timeout", &network.network_check_timeout)?,
    })
}

fn integer(scope: &str, field: &'static str, value: &Value) -> Result<i64, ConfigError> {
    value.as_integer().ok_or_else(|| {
        ConfigError::invalid(
            scope,
            field,
            format!("expected an integer, got {}", value.type_str()),
        )
    })
}

fn non_negative(scope: &str, field: &'static str, value: i64) -> Result<u64, ConfigError> {
    u64::try_from(value)
        .map_err(|_| ConfigError::invalid(scope, field, format!("{value} is negative")))
}
