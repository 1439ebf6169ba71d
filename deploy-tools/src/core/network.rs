// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Registry of named network profiles.
//!
//! Each [`NetworkProfile`] bundles the connection parameters and transaction policy for one
//! target network. Resolving a profile is pure: the [`ProviderFactory`] it carries is only run
//! when the caller actually asks for a connection.

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    time::Duration,
};

use crate::core::provider::ProviderFactory;

/// Errors raised while loading or resolving deployment configuration.
///
/// All of these are fatal for a deployment run.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown network: {0}")]
    UnknownNetwork(String),
    #[error("network {0} is disabled")]
    NetworkDisabled(String),
    #[error("network {0} is declared more than once")]
    DuplicateNetwork(String),
    #[error("missing credential {secret} for {scope}: {reason}")]
    MissingCredential {
        scope: String,
        secret: String,
        reason: String,
    },
    #[error("missing compiler version")]
    MissingCompilerVersion,
    #[error("invalid value for {scope}.{field}: {reason}")]
    InvalidPolicyValue {
        scope: String,
        field: &'static str,
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn missing_credential(
        scope: impl Into<String>,
        secret: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MissingCredential {
            scope: scope.into(),
            secret: secret.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid(
        scope: impl Into<String>,
        field: &'static str,
        reason: impl fmt::Display,
    ) -> Self {
        Self::InvalidPolicyValue {
            scope: scope.into(),
            field,
            reason: reason.to_string(),
        }
    }
}

/// The chain a network is expected to serve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NetworkId {
    /// Accept whatever chain the endpoint reports, as for local development nodes.
    #[default]
    Any,
    Id(u64),
}

impl NetworkId {
    pub fn chain_id(&self) -> Option<u64> {
        match self {
            NetworkId::Any => None,
            NetworkId::Id(id) => Some(*id),
        }
    }

    pub fn matches(&self, chain_id: u64) -> bool {
        self.chain_id().is_none_or(|id| id == chain_id)
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkId::Any => f.write_str("*"),
            NetworkId::Id(id) => write!(f, "{id}"),
        }
    }
}

/// Gas, confirmation and polling settings applied to transactions on a network.
///
/// These are passed through to the deployment runner unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TxPolicy {
    pub gas_limit: Option<u64>,
    pub gas_price_wei: Option<u128>,
    pub confirmations: Option<u64>,
    pub timeout_blocks: Option<u64>,
    pub skip_dry_run: bool,
    pub polling_interval: Option<Duration>,
    pub network_check_timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct NetworkProfile {
    pub identifier: String,
    pub enabled: bool,
    provider: ProviderFactory,
}

impl NetworkProfile {
    pub fn new(identifier: impl Into<String>, enabled: bool, provider: ProviderFactory) -> Self {
        Self {
            identifier: identifier.into(),
            enabled,
            provider,
        }
    }

    pub fn network_id(&self) -> NetworkId {
        self.provider.network_id()
    }

    pub fn chain_id(&self) -> Option<u64> {
        self.network_id().chain_id()
    }

    pub fn policy(&self) -> &TxPolicy {
        self.provider.policy()
    }

    /// Factory for this network's provider. Nothing is constructed until it is invoked.
    pub fn provider_factory(&self) -> &ProviderFactory {
        &self.provider
    }
}

/// Mapping of network identifier to profile.
#[derive(Debug, Default)]
pub struct Registry {
    profiles: BTreeMap<String, NetworkProfile>,
}

impl Registry {
    pub fn new(profiles: impl IntoIterator<Item = NetworkProfile>) -> Result<Self, ConfigError> {
        let mut registry = BTreeMap::new();
        for profile in profiles {
            if registry.contains_key(&profile.identifier) {
                return Err(ConfigError::DuplicateNetwork(profile.identifier));
            }
            registry.insert(profile.identifier.clone(), profile);
        }
        Ok(Self { profiles: registry })
    }

    /// Looks up an enabled profile by name without constructing its provider.
    pub fn resolve(&self, identifier: &str) -> Result<&NetworkProfile, ConfigError> {
        let profile = self
            .profiles
            .get(identifier)
            .ok_or_else(|| ConfigError::UnknownNetwork(identifier.to_string()))?;
        if !profile.enabled {
            return Err(ConfigError::NetworkDisabled(identifier.to_string()));
        }
        debug!(@grey, "resolved network {} (network id {})", identifier, profile.network_id());
        Ok(profile)
    }

    /// Identifiers of all enabled profiles.
    pub fn identifiers(&self) -> BTreeSet<&str> {
        self.profiles
            .values()
            .filter(|profile| profile.enabled)
            .map(|profile| profile.identifier.as_str())
            .collect()
    }

    /// All declared profiles, disabled ones included.
    pub fn profiles(&self) -> impl Iterator<Item = &NetworkProfile> {
        self.profiles.values()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::core::{
        provider::{testing::CountingConnector, Endpoint},
        secrets::SecretStore,
    };

    fn profile(name: &str, enabled: bool, connector: &Arc<CountingConnector>) -> NetworkProfile {
        let endpoint = Endpoint::local("127.0.0.1", 7545).unwrap();
        let factory = ProviderFactory::new(
            name,
            endpoint,
            NetworkId::Any,
            TxPolicy::default(),
            Arc::new(SecretStore::default()),
            connector.clone(),
        );
        NetworkProfile::new(name, enabled, factory)
    }

    #[test]
    fn resolve_returns_matching_profile_without_connecting() {
        let connector = Arc::new(CountingConnector::default());
        let registry = Registry::new([
            profile("development", true, &connector),
            profile("testnet", true, &connector),
        ])
        .unwrap();

        for id in registry.identifiers() {
            assert_eq!(registry.resolve(id).unwrap().identifier, id);
        }
        assert_eq!(connector.calls(), 0);
    }

    #[test]
    fn unknown_and_disabled_networks() {
        let connector = Arc::new(CountingConnector::default());
        let registry = Registry::new([
            profile("development", true, &connector),
            profile("mainnet", false, &connector),
        ])
        .unwrap();

        assert!(matches!(
            registry.resolve("nonexistent"),
            Err(ConfigError::UnknownNetwork(name)) if name == "nonexistent"
        ));
        assert!(matches!(
            registry.resolve("mainnet"),
            Err(ConfigError::NetworkDisabled(_))
        ));
        assert_eq!(registry.identifiers(), BTreeSet::from(["development"]));
        assert_eq!(registry.profiles().count(), 2);
        assert_eq!(connector.calls(), 0);
    }

    #[test]
    fn duplicate_identifiers_are_rejected() {
        let connector = Arc::new(CountingConnector::default());
        let result = Registry::new([
            profile("development", true, &connector),
            profile("development", true, &connector),
        ]);
        assert!(matches!(result, Err(ConfigError::DuplicateNetwork(_))));
    }

    #[test]
    fn network_id_matching() {
        assert!(NetworkId::Any.matches(1337));
        assert!(NetworkId::Id(5).matches(5));
        assert!(!NetworkId::Id(5).matches(97));
        assert_eq!(NetworkId::Any.to_string(), "*");
        assert_eq!(NetworkId::Id(250).chain_id(), Some(250));
    }
}
