// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Read-only snapshot of process secrets.
//!
//! The environment is read exactly once, when the [`SecretStore`] is built at start-up. Nothing
//! else in this crate touches `std::env`; components that need a credential are handed the store.

use std::{
    collections::{HashMap, HashSet},
    env,
    ffi::OsString,
    fmt,
    path::Path,
};

use crate::core::network::ConfigError;

/// Conventional name of the deployer private key.
pub const PRIVATE_KEY_VAR: &str = "PRIVATE_KEY";

/// A sensitive value which is never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the underlying value. Callers must not log it.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

#[derive(Debug, Default)]
pub struct SecretStore {
    vars: HashMap<String, Secret>,
    /// Variables that are set but whose value is not valid UTF-8.
    unreadable: HashSet<String>,
}

impl SecretStore {
    /// Snapshots the current process environment.
    pub fn from_env() -> Self {
        Self::from_os_pairs(env::vars_os())
    }

    fn from_os_pairs(pairs: impl IntoIterator<Item = (OsString, OsString)>) -> Self {
        let mut store = Self::default();
        for (key, value) in pairs {
            let Ok(key) = key.into_string() else {
                continue;
            };
            match value.into_string() {
                Ok(value) => {
                    store.vars.insert(key, Secret(value));
                }
                Err(_) => {
                    store.unreadable.insert(key);
                }
            }
        }
        store
    }

    /// Loads a `.env` file into the environment, then snapshots it.
    ///
    /// With no explicit path, a `.env` in the current directory or one of its parents is used if
    /// present. An explicit path that cannot be read is an error.
    pub fn load(dotenv_path: Option<&Path>) -> crate::Result<Self> {
        match dotenv_path {
            Some(path) => {
                dotenv::from_path(path)?;
                debug!(@grey, "loaded environment from {}", path.display());
            }
            None => {
                if let Ok(path) = dotenv::dotenv() {
                    debug!(@grey, "loaded environment from {}", path.display());
                }
            }
        }
        Ok(Self::from_env())
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let vars = pairs
            .into_iter()
            .map(|(key, value)| (key.into(), Secret(value.into())))
            .collect();
        Self {
            vars,
            ..Default::default()
        }
    }

    /// Looks up a secret, failing with [`ConfigError::MissingCredential`] when it is absent or
    /// empty. `scope` names the configuration entry that needs it.
    pub fn get(&self, scope: &str, name: &str) -> Result<&Secret, ConfigError> {
        if self.unreadable.contains(name) {
            return Err(ConfigError::missing_credential(
                scope,
                name,
                "not valid UTF-8",
            ));
        }
        let secret = self
            .vars
            .get(name)
            .ok_or_else(|| ConfigError::missing_credential(scope, name, "not set"))?;
        if secret.is_empty() {
            return Err(ConfigError::missing_credential(scope, name, "empty"));
        }
        Ok(secret)
    }
}
