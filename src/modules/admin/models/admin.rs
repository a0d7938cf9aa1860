use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};
use crate::modules::catalog::models::{Product, UnitType};
use crate::modules::orders::models::OrderStatus;

#[derive(Debug, Clone, Serialize)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

/// Successful admin login
///
/// Only the username is kept when the session is stored on the device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSession {
    pub username: String,
    #[serde(default, skip_serializing)]
    pub message: Option<String>,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Dashboard figures; revenue counts delivered orders only
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AdminStats {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,
    pub total_orders: u64,
    pub pending_orders: u64,
    pub total_products: u64,
}

/// Product fields accepted by create and update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductInput {
    pub name: String,
    pub category_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub unit_type: UnitType,
    /// Whole units only
    #[serde(with = "rust_decimal::serde::float")]
    pub stock: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ProductInput {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("Product name cannot be empty"));
        }
        if self.category_id.trim().is_empty() {
            return Err(AppError::validation("Product category must be selected"));
        }
        if self.price < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Price must be non-negative, got: {}",
                self.price
            )));
        }
        if self.stock < Decimal::ZERO || !self.stock.fract().is_zero() {
            return Err(AppError::validation(format!(
                "Stock must be a non-negative whole number, got: {}",
                self.stock
            )));
        }
        Ok(())
    }
}

impl From<&Product> for ProductInput {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category_id: product.category_id.clone(),
            price: product.price,
            unit_type: product.unit_type.clone(),
            stock: product.stock.trunc(),
            image: product.image.clone(),
            description: product.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct OrderStatusUpdate {
    pub status: OrderStatus,
}
