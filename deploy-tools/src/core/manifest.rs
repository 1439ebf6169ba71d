// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deploy.toml manifest definitions.
//!
//! These types mirror the file as written. Range and type checks on network settings happen in
//! [`crate::core::config`].

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Deserialize};
use toml::Value;

/// Default manifest filename.
pub const FILENAME: &str = "Deploy.toml";

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml read error: {0}")]
    TomlRead(#[from] toml::de::Error),

    #[error("missing {}", .0.display())]
    Missing(PathBuf),
}

pub fn load<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ManifestError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ManifestError::Missing(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;
    let manifest = toml::from_str(&contents)?;
    Ok(manifest)
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlManifest {
    #[serde(default)]
    pub networks: BTreeMap<String, TomlNetwork>,
    #[serde(default)]
    pub compilers: TomlCompilers,
    #[serde(default)]
    pub verify: TomlVerify,
}

/// One `[networks.<name>]` table.
///
/// Policy fields are kept as raw values and type checked during validation, so that a wrongly
/// typed entry is reported against its network and field.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlNetwork {
    pub enabled: Option<bool>,
    pub host: Option<String>,
    pub port: Option<Value>,
    pub rpc_url: Option<String>,
    /// Environment variable holding the private key.
    pub secret: Option<String>,
    /// Either `"*"` or a numeric network id. Absent means `"*"`.
    pub network_id: Option<Value>,
    pub gas: Option<Value>,
    /// A wei amount, or a string with a unit such as `"30 gwei"`.
    pub gas_price: Option<Value>,
    pub confirmations: Option<Value>,
    pub timeout_blocks: Option<Value>,
    pub skip_dry_run: Option<Value>,
    /// Milliseconds between polls for transaction receipts.
    pub deployment_polling_interval: Option<Value>,
    /// Milliseconds to wait for the initial network handshake.
    pub network_check_timeout: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlCompilers {
    pub solc: Option<TomlSolc>,
    pub external: Option<TomlExternal>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlSolc {
    pub version: Option<String>,
    pub optimizer: Option<TomlOptimizer>,
    pub evm_version: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlOptimizer {
    #[serde(default)]
    pub enabled: bool,
    pub runs: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlExternal {
    pub command: String,
    #[serde(default)]
    pub targets: Vec<TomlTarget>,
}

/// A build target, given either as a bare path or as `{ path = "..." }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TomlTarget {
    Path(PathBuf),
    Table { path: PathBuf },
}

impl TomlTarget {
    pub fn path(&self) -> &Path {
        match self {
            TomlTarget::Path(path) | TomlTarget::Table { path } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlVerify {
    #[serde(default)]
    pub plugins: Vec<String>,
    #[serde(default)]
    pub api_keys: BTreeMap<String, TomlApiKey>,
}

/// An API key, either inline or read from an environment variable.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TomlApiKey {
    Inline(String),
    Env { env: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let result = load::<TomlManifest>(dir.path().join(FILENAME));
        assert!(matches!(result, Err(ManifestError::Missing(_))));
    }

    #[test]
    fn rejects_unknown_fields() {
        let result = toml::from_str::<TomlManifest>(
            r#"
            [networks.development]
            host = "127.0.0.1"
            gas_limit = 1
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn build_targets_in_both_forms() {
        let external: TomlExternal = toml::from_str(
            r#"
            command = "node ./compileHasher.js"
            targets = [{ path = "./build/Hasher.json" }, "./build/Other.json"]
            "#,
        )
        .unwrap();
        let paths: Vec<_> = external.targets.iter().map(TomlTarget::path).collect();
        assert_eq!(
            paths,
            vec![Path::new("./build/Hasher.json"), Path::new("./build/Other.json")]
        );
    }

    #[test]
    fn policy_values_are_not_type_checked_while_parsing() {
        let network: TomlNetwork = toml::from_str(
            r#"
            network_id = "*"
            gas = "lots"
            confirmations = true
            gas_price = 1.5
            "#,
        )
        .unwrap();
        assert_eq!(network.network_id, Some(Value::String("*".to_string())));
        assert_eq!(network.gas, Some(Value::String("lots".to_string())));
        assert_eq!(network.confirmations, Some(Value::Boolean(true)));
        assert_eq!(network.gas_price, Some(Value::Float(1.5)));
        assert_eq!(network.timeout_blocks, None);
    }
}
