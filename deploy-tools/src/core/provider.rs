// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Lazy construction of network providers.
//!
//! A [`ProviderFactory`] is stored with every network profile. Running it reads the network's
//! private key (if any), derives a signer and hands both to a [`Connector`], which builds the
//! actual provider. No handshake happens until the returned [`Connection`] is used.

use std::{fmt, sync::Arc, time::Duration};

use alloy::{
    network::EthereumWallet,
    primitives::{Address, B256},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::{client::RpcClient, types::TransactionRequest},
    signers::{local::PrivateKeySigner, Signer},
    transports::{RpcError, TransportErrorKind},
};
use url::Url;

use crate::{
    core::{
        network::{ConfigError, NetworkId, TxPolicy},
        secrets::SecretStore,
    },
    utils::{color::DebugColor, decode0x},
};

/// Where and how a network is reached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// A local node with unlocked accounts; no credentials are needed.
    Local { url: Url },
    /// A remote endpoint; transactions are signed with the private key stored under `secret`.
    Signing { url: Url, secret: String },
}

impl Endpoint {
    pub fn local(host: &str, port: u16) -> Result<Self, url::ParseError> {
        let url = Url::parse(&format!("http://{host}:{port}"))?;
        Ok(Self::Local { url })
    }

    pub fn signing(url: &str, secret: impl Into<String>) -> Result<Self, url::ParseError> {
        Ok(Self::Signing {
            url: Url::parse(url)?,
            secret: secret.into(),
        })
    }

    pub fn url(&self) -> &Url {
        match self {
            Endpoint::Local { url } | Endpoint::Signing { url, .. } => url,
        }
    }

    /// Name of the secret this endpoint signs with.
    pub fn secret_name(&self) -> Option<&str> {
        match self {
            Endpoint::Local { .. } => None,
            Endpoint::Signing { secret, .. } => Some(secret),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Local { url } => write!(f, "{url} (local)"),
            Endpoint::Signing { url, secret } => write!(f, "{url} (signed with ${secret})"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    #[error("rpc error: {0}")]
    Rpc(#[from] RpcError<TransportErrorKind>),

    #[error("network {network} did not answer within {timeout:?}")]
    Timeout { network: String, timeout: Duration },
    #[error("network {network} serves chain {actual}, expected {expected}")]
    ChainIdMismatch {
        network: String,
        expected: u64,
        actual: u64,
    },
}

/// Builds a provider for an endpoint.
///
/// The default implementation is [`HttpConnector`]; alternative transports or test doubles plug in
/// here.
pub trait Connector: Send + Sync {
    fn construct(
        &self,
        url: &Url,
        signer: Option<PrivateKeySigner>,
        poll_interval: Option<Duration>,
    ) -> Result<DynProvider, ConnectionError>;
}

/// Connects over HTTP JSON-RPC using alloy.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpConnector;

impl Connector for HttpConnector {
    fn construct(
        &self,
        url: &Url,
        signer: Option<PrivateKeySigner>,
        poll_interval: Option<Duration>,
    ) -> Result<DynProvider, ConnectionError> {
        let mut client = RpcClient::new_http(url.clone());
        if let Some(interval) = poll_interval {
            client = client.with_poll_interval(interval);
        }
        let provider = match signer {
            Some(signer) => ProviderBuilder::new()
                .wallet(EthereumWallet::new(signer))
                .connect_client(client)
                .erased(),
            None => ProviderBuilder::new().connect_client(client).erased(),
        };
        Ok(provider)
    }
}

/// Deferred constructor for a network's provider.
///
/// Every call to [`ProviderFactory::connect`] builds a new, independent [`Connection`].
pub struct ProviderFactory {
    network: String,
    endpoint: Endpoint,
    network_id: NetworkId,
    policy: TxPolicy,
    secrets: Arc<SecretStore>,
    connector: Arc<dyn Connector>,
}

impl ProviderFactory {
    pub fn new(
        network: impl Into<String>,
        endpoint: Endpoint,
        network_id: NetworkId,
        policy: TxPolicy,
        secrets: Arc<SecretStore>,
        connector: Arc<dyn Connector>,
    ) -> Self {
        Self {
            network: network.into(),
            endpoint,
            network_id,
            policy,
            secrets,
            connector,
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn network_id(&self) -> NetworkId {
        self.network_id
    }

    pub fn policy(&self) -> &TxPolicy {
        &self.policy
    }

    /// Builds a provider for this network.
    ///
    /// Fails with [`ConfigError::MissingCredential`] if the endpoint signs transactions and its
    /// private key is absent or malformed.
    pub fn connect(&self) -> crate::Result<Connection> {
        let signer = match &self.endpoint {
            Endpoint::Local { .. } => None,
            Endpoint::Signing { secret, .. } => Some(self.signer(secret)?),
        };
        let sender = signer.as_ref().map(|signer| signer.address());
        let provider =
            self.connector
                .construct(self.endpoint.url(), signer, self.policy.polling_interval)?;
        info!(@grey, "connecting to network {} at {}", self.network, self.endpoint.url());
        if let Some(sender) = sender {
            debug!(@grey, "sender address: {}", sender.debug_lavender());
        }

        Ok(Connection {
            network: self.network.clone(),
            network_id: self.network_id,
            policy: self.policy.clone(),
            provider,
            sender,
        })
    }

    fn signer(&self, secret_name: &str) -> Result<PrivateKeySigner, ConfigError> {
        let scope = format!("networks.{}", self.network);
        let secret = self.secrets.get(&scope, secret_name)?;
        let malformed =
            |reason: String| ConfigError::missing_credential(&scope, secret_name, reason);

        let bytes = decode0x(secret.expose())
            .map_err(|_| malformed("private key is not valid hex".to_string()))?;
        let key = B256::try_from(bytes.as_slice()).map_err(|_| {
            malformed(format!(
                "private key must be 32 bytes, got {}",
                bytes.len()
            ))
        })?;
        let signer = PrivateKeySigner::from_bytes(&key)
            .map_err(|_| malformed("private key is not a valid secp256k1 scalar".to_string()))?;
        Ok(signer.with_chain_id(self.network_id.chain_id()))
    }
}

impl fmt::Debug for ProviderFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderFactory")
            .field("network", &self.network)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

/// A constructed provider together with the policy of its network.
///
/// Owned by the deployment runner for the duration of a run.
pub struct Connection {
    network: String,
    network_id: NetworkId,
    policy: TxPolicy,
    provider: DynProvider,
    sender: Option<Address>,
}

impl Connection {
    pub fn network(&self) -> &str {
        &self.network
    }

    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }

    /// Address of the signing key, or `None` for local endpoints.
    pub fn sender(&self) -> Option<Address> {
        self.sender
    }

    pub fn policy(&self) -> &TxPolicy {
        &self.policy
    }

    /// Fills in the sender, gas limit and gas price from the network policy where the request
    /// leaves them unset.
    pub fn prepare(&self, mut tx: TransactionRequest) -> TransactionRequest {
        if tx.from.is_none() {
            tx.from = self.sender;
        }
        if tx.gas.is_none() {
            tx.gas = self.policy.gas_limit;
        }
        if tx.gas_price.is_none() && tx.max_fee_per_gas.is_none() {
            tx.gas_price = self.policy.gas_price_wei;
        }
        tx
    }

    /// Fetches the chain id from the endpoint and checks it against the expected network id.
    ///
    /// Bounded by the policy's network check timeout, if one is set.
    pub async fn check_network(&self) -> Result<u64, ConnectionError> {
        let request = self.provider.get_chain_id();
        let chain_id = match self.policy.network_check_timeout {
            Some(timeout) => tokio::time::timeout(timeout, request)
                .await
                .map_err(|_| ConnectionError::Timeout {
                    network: self.network.clone(),
                    timeout,
                })??,
            None => request.await?,
        };

        if !self.network_id.matches(chain_id) {
            return Err(ConnectionError::ChainIdMismatch {
                network: self.network.clone(),
                expected: self.network_id.chain_id().unwrap_or_default(),
                actual: chain_id,
            });
        }
        debug!(@grey, "network {} serves chain {}", self.network, chain_id);
        Ok(chain_id)
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("network", &self.network)
            .field("network_id", &self.network_id)
            .field("sender", &self.sender)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use alloy::providers::mock::Asserter;

    use super::*;

    /// Wraps [`HttpConnector`] and counts constructions.
    #[derive(Debug, Default)]
    pub struct CountingConnector {
        calls: AtomicUsize,
    }

    impl CountingConnector {
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Connector for CountingConnector {
        fn construct(
            &self,
            url: &Url,
            signer: Option<PrivateKeySigner>,
            poll_interval: Option<Duration>,
        ) -> Result<DynProvider, ConnectionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            HttpConnector.construct(url, signer, poll_interval)
        }
    }

    /// Answers requests from a queue of canned responses instead of an endpoint.
    #[derive(Debug, Default)]
    pub struct MockConnector {
        pub asserter: Asserter,
    }

    impl Connector for MockConnector {
        fn construct(
            &self,
            _url: &Url,
            _signer: Option<PrivateKeySigner>,
            _poll_interval: Option<Duration>,
        ) -> Result<DynProvider, ConnectionError> {
            Ok(ProviderBuilder::new()
                .connect_mocked_client(self.asserter.clone())
                .erased())
        }
    }
}
