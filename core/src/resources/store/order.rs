//! Store orders: `/store/order` and `/store/order/{orderId}`.
//!
//! # Design
//! Request shapes (`*_request`) and response parsing (`parse_*`) are free
//! functions; `OrderClient` and `AsyncOrderClient` only glue them to their
//! base client. That keeps the sync and async flavours mechanical duplicates
//! of each other.

use crate::auth::API_KEY_SCHEME;
use crate::base::{ApiRequest, AsyncBaseClient, BaseClient, RequestBody};
use crate::error::ApiError;
use crate::form::to_form_urlencoded;
use crate::http::{HttpMethod, HttpResponse};
use crate::options::RequestOptions;
use crate::params::CreateOrder;
use crate::types::{BinaryResponse, Order};

const AUTH_NAMES: &[&str] = &[API_KEY_SCHEME];

/// Result of `GET /store/order/{orderId}`: the order when the server
/// answers with JSON, the raw payload otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GetOrderResponse {
    Order(Order),
    Binary(BinaryResponse),
}

impl GetOrderResponse {
    pub fn into_order(self) -> Option<Order> {
        match self {
            GetOrderResponse::Order(order) => Some(order),
            GetOrderResponse::Binary(_) => None,
        }
    }
}

pub fn order_path(order_id: i64) -> String {
    format!("/store/order/{order_id}")
}

/// `DELETE /store/order/{orderId}`
pub fn delete_request(order_id: i64) -> ApiRequest {
    ApiRequest {
        method: HttpMethod::Delete,
        path: order_path(order_id),
        auth_names: AUTH_NAMES,
        body: None,
    }
}

/// `GET /store/order/{orderId}`
pub fn get_request(order_id: i64) -> ApiRequest {
    ApiRequest {
        method: HttpMethod::Get,
        path: order_path(order_id),
        auth_names: AUTH_NAMES,
        body: None,
    }
}

/// `POST /store/order` with the provided fields form-encoded.
pub fn create_request(params: &CreateOrder) -> Result<ApiRequest, ApiError> {
    Ok(ApiRequest {
        method: HttpMethod::Post,
        path: "/store/order".to_string(),
        auth_names: AUTH_NAMES,
        body: Some(RequestBody::Form(to_form_urlencoded(params)?)),
    })
}

pub fn parse_order(response: HttpResponse) -> Result<Order, ApiError> {
    serde_json::from_slice(&response.body).map_err(|source| ApiError::Deserialization {
        source,
        body: response.text(),
    })
}

pub fn parse_get_order(response: HttpResponse) -> Result<GetOrderResponse, ApiError> {
    if response.content_type().is_some_and(is_json) {
        return parse_order(response).map(GetOrderResponse::Order);
    }
    Ok(GetOrderResponse::Binary(BinaryResponse {
        content_type: response.content_type().map(str::to_string),
        content: response.body,
    }))
}

/// `application/json`, `application/problem+json`, with or without parameters.
fn is_json(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || mime.ends_with("+json")
}

pub struct OrderClient<'a> {
    base_client: &'a BaseClient,
}

impl<'a> OrderClient<'a> {
    pub fn new(base_client: &'a BaseClient) -> Self {
        Self { base_client }
    }

    /// Delete purchase order by identifier.
    ///
    /// `DELETE /store/order/{orderId}`. Returns the raw response.
    #[tracing::instrument(name = "store.order.delete", skip(self, request_options))]
    pub fn delete(&self, order_id: i64, request_options: Option<RequestOptions>) -> Result<HttpResponse, ApiError> {
        self.base_client.request(delete_request(order_id), request_options)
    }

    /// Find purchase order by ID.
    ///
    /// `GET /store/order/{orderId}`
    #[tracing::instrument(name = "store.order.get", skip(self, request_options))]
    pub fn get(&self, order_id: i64, request_options: Option<RequestOptions>) -> Result<GetOrderResponse, ApiError> {
        parse_get_order(self.base_client.request(get_request(order_id), request_options)?)
    }

    /// Place an order for a pet.
    ///
    /// `POST /store/order`
    #[cfg_attr(
        feature = "blocking",
        doc = r#"
```no_run
# use petstore::{ClientConfig, CreateOrder, OrderStatus, PetstoreClient};
# fn main() -> Result<(), petstore::ApiError> {
let client = PetstoreClient::new(ClientConfig::from_env()?);
let order = client.store().order().create(
    &CreateOrder::new().id(10).pet_id(198772).quantity(7).status(OrderStatus::Approved),
    None,
)?;
# Ok(())
# }
```"#
    )]
    #[tracing::instrument(name = "store.order.create", skip_all)]
    pub fn create(&self, params: &CreateOrder, request_options: Option<RequestOptions>) -> Result<Order, ApiError> {
        parse_order(self.base_client.request(create_request(params)?, request_options)?)
    }
}

pub struct AsyncOrderClient<'a> {
    base_client: &'a AsyncBaseClient,
}

impl<'a> AsyncOrderClient<'a> {
    pub fn new(base_client: &'a AsyncBaseClient) -> Self {
        Self { base_client }
    }

    /// Async variant of [`OrderClient::delete`].
    #[tracing::instrument(name = "store.order.delete", skip(self, request_options))]
    pub async fn delete(
        &self,
        order_id: i64,
        request_options: Option<RequestOptions>,
    ) -> Result<HttpResponse, ApiError> {
        self.base_client.request(delete_request(order_id), request_options).await
    }

    /// Async variant of [`OrderClient::get`].
    #[tracing::instrument(name = "store.order.get", skip(self, request_options))]
    pub async fn get(
        &self,
        order_id: i64,
        request_options: Option<RequestOptions>,
    ) -> Result<GetOrderResponse, ApiError> {
        parse_get_order(self.base_client.request(get_request(order_id), request_options).await?)
    }

    /// Async variant of [`OrderClient::create`].
    #[tracing::instrument(name = "store.order.create", skip_all)]
    pub async fn create(
        &self,
        params: &CreateOrder,
        request_options: Option<RequestOptions>,
    ) -> Result<Order, ApiError> {
        parse_order(self.base_client.request(create_request(params)?, request_options).await?)
    }
}
