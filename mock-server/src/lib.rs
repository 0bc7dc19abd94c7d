use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicI64, Ordering},
        Arc,
    },
};

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

pub const DEFAULT_API_KEY: &str = "special-key";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Placed,
    Approved,
    Delivered,
}

impl OrderStatus {
    fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "placed",
            OrderStatus::Approved => "approved",
            OrderStatus::Delivered => "delivered",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complete: Option<bool>,
}

impl Order {
    fn to_xml(&self) -> String {
        let mut xml = String::from("<Order>");
        let mut field = |name: &str, value: Option<String>| {
            if let Some(value) = value {
                xml.push_str(&format!("<{name}>{}</{name}>", escape_xml(&value)));
            }
        };
        field("id", self.id.map(|v| v.to_string()));
        field("petId", self.pet_id.map(|v| v.to_string()));
        field("quantity", self.quantity.map(|v| v.to_string()));
        field("shipDate", self.ship_date.clone());
        field("status", self.status.map(|v| v.as_str().to_string()));
        field("complete", self.complete.map(|v| v.to_string()));
        xml.push_str("</Order>");
        xml
    }
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[derive(Clone)]
pub struct AppState {
    orders: Arc<RwLock<HashMap<i64, Order>>>,
    next_id: Arc<AtomicI64>,
    api_key: Arc<str>,
}

impl AppState {
    pub fn new(api_key: &str) -> Self {
        Self {
            orders: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
            api_key: Arc::from(api_key),
        }
    }
}

pub fn app() -> Router {
    app_with_key(DEFAULT_API_KEY)
}

pub fn app_with_key(api_key: &str) -> Router {
    Router::new()
        .route("/store/order", post(create_order))
        .route("/store/order/{orderId}", get(get_order).delete(delete_order))
        .with_state(AppState::new(api_key))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with_key(listener: TcpListener, api_key: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_key(api_key)).await
}

fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), StatusCode> {
    match headers.get("api_key").and_then(|v| v.to_str().ok()) {
        Some(key) if key == &*state.api_key => Ok(()),
        _ => {
            tracing::info!("rejected request without a valid api_key");
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}

fn wants_xml(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("application/xml") && !accept.contains("application/json"))
}

async fn create_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(mut order): Form<Order>,
) -> Result<Json<Order>, StatusCode> {
    authorize(&state, &headers)?;
    let id = match order.id {
        Some(id) => {
            state.next_id.fetch_max(id.saturating_add(1), Ordering::SeqCst);
            id
        }
        None => state.next_id.fetch_add(1, Ordering::SeqCst),
    };
    order.id = Some(id);
    state.orders.write().await.insert(id, order.clone());
    tracing::info!(id, "order placed");
    Ok(Json(order))
}

async fn get_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Response, StatusCode> {
    authorize(&state, &headers)?;
    let orders = state.orders.read().await;
    let order = orders.get(&id).cloned().ok_or(StatusCode::NOT_FOUND)?;
    if wants_xml(&headers) {
        return Ok(([(header::CONTENT_TYPE, "application/xml")], order.to_xml()).into_response());
    }
    Ok(Json(order).into_response())
}

async fn delete_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    authorize(&state, &headers)?;
    let mut orders = state.orders.write().await;
    orders.remove(&id).map(|_| StatusCode::NO_CONTENT).ok_or(StatusCode::NOT_FOUND)
}
