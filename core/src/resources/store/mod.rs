//! `store` tag: purchase orders.

pub mod order;

use crate::base::{AsyncBaseClient, BaseClient};

pub use order::{AsyncOrderClient, GetOrderResponse, OrderClient};

pub struct StoreClient<'a> {
    base_client: &'a BaseClient,
}

impl<'a> StoreClient<'a> {
    pub fn new(base_client: &'a BaseClient) -> Self {
        Self { base_client }
    }

    pub fn order(&self) -> OrderClient<'a> {
        OrderClient::new(self.base_client)
    }
}

pub struct AsyncStoreClient<'a> {
    base_client: &'a AsyncBaseClient,
}

impl<'a> AsyncStoreClient<'a> {
    pub fn new(base_client: &'a AsyncBaseClient) -> Self {
        Self { base_client }
    }

    pub fn order(&self) -> AsyncOrderClient<'a> {
        AsyncOrderClient::new(self.base_client)
    }
}
