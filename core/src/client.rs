//! Top-level clients.
//!
//! # Design
//! `PetstoreClient` and `AsyncPetstoreClient` own a base client and hand out
//! borrowed resource clients mirroring the API tags:
//! `client.store().order().get(1, None)`. Resource clients are zero-cost
//! views; all state lives in the base client.

use std::sync::Arc;

use crate::base::{AsyncBaseClient, BaseClient};
use crate::config::ClientConfig;
use crate::resources::store::{AsyncStoreClient, StoreClient};
use crate::transport::{AsyncTransport, Transport};

/// Blocking pet-store client.
#[derive(Clone)]
pub struct PetstoreClient {
    base_client: BaseClient,
}

impl PetstoreClient {
    /// Client using the default ureq transport.
    #[cfg(feature = "blocking")]
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, Arc::new(crate::transport::UreqTransport::new()))
    }

    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_client: BaseClient::new(config, transport),
        }
    }

    pub fn base_client(&self) -> &BaseClient {
        &self.base_client
    }

    pub fn store(&self) -> StoreClient<'_> {
        StoreClient::new(&self.base_client)
    }
}

/// Non-blocking pet-store client.
#[derive(Clone)]
pub struct AsyncPetstoreClient {
    base_client: AsyncBaseClient,
}

impl AsyncPetstoreClient {
    /// Client using the default reqwest transport.
    #[cfg(feature = "async")]
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, Arc::new(crate::transport::ReqwestTransport::new()))
    }

    pub fn with_transport(config: ClientConfig, transport: Arc<dyn AsyncTransport>) -> Self {
        Self {
            base_client: AsyncBaseClient::new(config, transport),
        }
    }

    pub fn base_client(&self) -> &AsyncBaseClient {
        &self.base_client
    }

    pub fn store(&self) -> AsyncStoreClient<'_> {
        AsyncStoreClient::new(&self.base_client)
    }
}
