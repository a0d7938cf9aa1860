// Order payloads exchanged with the storefront API
//
// Quantities and amounts travel as JSON numbers, so the decimal fields use
// the float serde adapter.

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{AppError, Result};
use crate::modules::cart::models::CartLine;
use crate::modules::catalog::models::UnitType;

/// Order lifecycle status as stored by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    /// `Beklemede`
    Pending,
    /// `Teslim Edildi`
    Delivered,
    Other(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "Beklemede",
            OrderStatus::Delivered => "Teslim Edildi",
            OrderStatus::Other(status) => status,
        }
    }
}

impl From<String> for OrderStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "Beklemede" => OrderStatus::Pending,
            "Teslim Edildi" => OrderStatus::Delivered,
            _ => OrderStatus::Other(status),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Other(status) => status,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ordered product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: String,
    pub product_name: String,
    #[serde(default)]
    pub product_image: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub quantity: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub unit_type: UnitType,
}

impl From<&CartLine> for OrderItem {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.id.clone(),
            product_name: line.name.clone(),
            product_image: line.image.clone(),
            quantity: line.quantity,
            price: line.price,
            unit_type: line.unit_type.clone(),
        }
    }
}

/// Contact and delivery details entered at checkout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub note: Option<String>,
}

impl CustomerInfo {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            address: address.into(),
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Name, phone and address are required
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("Customer name cannot be empty"));
        }
        if self.phone.trim().is_empty() {
            return Err(AppError::validation("Customer phone cannot be empty"));
        }
        if self.address.trim().is_empty() {
            return Err(AppError::validation("Delivery address cannot be empty"));
        }
        Ok(())
    }
}

/// Order submission payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub customer_name: String,
    pub customer_phone: String,
    pub delivery_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_note: Option<String>,
    pub items: Vec<OrderItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
}

impl CreateOrderRequest {
    /// Build the payload from the cart's current lines and total
    pub fn from_cart(lines: &[CartLine], total: Decimal, customer: &CustomerInfo) -> Result<Self> {
        if lines.is_empty() {
            return Err(AppError::validation("Cannot place an order with an empty cart"));
        }
        customer.validate()?;

        Ok(Self {
            customer_name: customer.name.trim().to_string(),
            customer_phone: customer.phone.trim().to_string(),
            delivery_address: customer.address.trim().to_string(),
            customer_note: customer
                .note
                .as_ref()
                .map(|note| note.trim().to_string())
                .filter(|note| !note.is_empty()),
            items: lines.iter().map(OrderItem::from).collect(),
            total_amount: total,
        })
    }
}

/// An order as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub delivery_address: String,
    #[serde(default)]
    pub customer_note: Option<String>,
    pub items: Vec<OrderItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub status: OrderStatus,
    /// Server time in UTC, sent without an offset
    pub created_at: NaiveDateTime,
}

impl Order {
    pub fn created_at_utc(&self) -> DateTime<Utc> {
        self.created_at.and_utc()
    }

    pub fn is_pending(&self) -> bool {
        self.status == OrderStatus::Pending
    }
}
