//! Request parameters for operations that send a body.
//!
//! A field is sent iff it is `Some`. Serialization goes through the form
//! encoder, so the serde attributes here define the wire names.

use serde::{Deserialize, Serialize};

use crate::types::OrderStatus;

/// Arguments of `store.order.create`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complete: Option<bool>,
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
}

impl CreateOrder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn complete(mut self, complete: bool) -> Self {
        self.complete = Some(complete);
        self
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn pet_id(mut self, pet_id: i64) -> Self {
        self.pet_id = Some(pet_id);
        self
    }

    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn ship_date(mut self, ship_date: impl Into<String>) -> Self {
        self.ship_date = Some(ship_date.into());
        self
    }

    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }
}
