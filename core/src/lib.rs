//! Typed client for the pet-store REST API.
//!
//! # Overview
//! Exposes the store order operations (`create`, `get`, `delete`) as typed
//! methods that marshal their arguments into HTTP requests (path
//! interpolation, form-urlencoded bodies) and unmarshal responses into
//! models. Blocking and async flavours share one request builder.
//!
//! # Design
//! - `PetstoreClient` / `AsyncPetstoreClient` own a base client; resource
//!   clients (`store().order()`) borrow it.
//! - Operations are described as `ApiRequest` data and resolved into
//!   `HttpRequest`s by `RequestBuilder`, so both flavours send identical
//!   requests.
//! - I/O happens behind the `Transport` / `AsyncTransport` traits
//!   (ureq and reqwest by default), which keeps everything above them
//!   testable without a network.
//! - Every non-2xx response surfaces as `ApiError::Api` with status and body.

pub mod auth;
pub mod base;
pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod http;
pub mod options;
pub mod params;
pub mod resources;
pub mod transport;
pub mod types;

pub use auth::ApiKey;
pub use base::{ApiRequest, AsyncBaseClient, BaseClient, RequestBody, RequestBuilder};
pub use client::{AsyncPetstoreClient, PetstoreClient};
pub use config::ClientConfig;
pub use error::{ApiError, Result};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use options::RequestOptions;
pub use params::CreateOrder;
pub use resources::store::{AsyncOrderClient, GetOrderResponse, OrderClient};
pub use transport::{AsyncTransport, Transport};
#[cfg(feature = "async")]
pub use transport::ReqwestTransport;
#[cfg(feature = "blocking")]
pub use transport::UreqTransport;
pub use types::{ApiResponse, BinaryResponse, Category, Order, OrderStatus, Pet, PetStatus, Tag};
