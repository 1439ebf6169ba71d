// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Settings handed to contract verification plugins.

use std::collections::BTreeMap;

use crate::core::{
    manifest::{TomlApiKey, TomlVerify},
    network::ConfigError,
    secrets::{Secret, SecretStore},
};

/// Plugins to load and the API keys they are given.
#[derive(Debug, Default)]
pub struct Verification {
    pub plugins: Vec<String>,
    pub api_keys: ApiKeySet,
}

impl Verification {
    pub fn from_toml(verify: &TomlVerify, secrets: &SecretStore) -> Self {
        Self {
            plugins: verify.plugins.clone(),
            api_keys: ApiKeySet::from_toml(&verify.api_keys, secrets),
        }
    }
}

#[derive(Debug)]
enum ApiKey {
    Inline(Secret),
    Env { var: String, value: Option<Secret> },
}

/// API keys keyed by verification service name (`etherscan`, `bscscan`, ...).
#[derive(Debug, Default)]
pub struct ApiKeySet {
    keys: BTreeMap<String, ApiKey>,
}

impl ApiKeySet {
    pub fn from_toml(keys: &BTreeMap<String, TomlApiKey>, secrets: &SecretStore) -> Self {
        let keys = keys
            .iter()
            .map(|(service, key)| {
                let key = match key {
                    TomlApiKey::Inline(value) => {
                        warn!(@yellow, "api key for {} is stored in the config file, prefer an env reference", service);
                        ApiKey::Inline(Secret::new(value.clone()))
                    }
                    TomlApiKey::Env { env } => ApiKey::Env {
                        var: env.clone(),
                        value: secrets.get(&format!("api_keys.{service}"), env).ok().cloned(),
                    },
                };
                (service.clone(), key)
            })
            .collect();
        Self { keys }
    }

    /// Names of all configured services.
    pub fn services(&self) -> impl Iterator<Item = &str> {
        self.keys.keys().map(String::as_str)
    }

    /// The key for `service`, failing with [`ConfigError::MissingCredential`] if the service is
    /// not configured or its environment variable was not set.
    pub fn get(&self, service: &str) -> Result<&Secret, ConfigError> {
        let scope = format!("api_keys.{service}");
        match self.keys.get(service) {
            None => Err(ConfigError::missing_credential(scope, service, "not configured")),
            Some(ApiKey::Inline(secret)) => Ok(secret),
            Some(ApiKey::Env { value: Some(secret), .. }) => Ok(secret),
            Some(ApiKey::Env { var, value: None }) => {
                Err(ConfigError::missing_credential(scope, var, "not set"))
            }
        }
    }

    /// All keys that could be resolved, as handed to a verification plugin.
    pub fn resolved(&self) -> impl Iterator<Item = (&str, &Secret)> {
        self.keys
            .keys()
            .filter_map(|service| Some((service.as_str(), self.get(service).ok()?)))
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
