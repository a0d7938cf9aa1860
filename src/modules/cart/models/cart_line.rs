use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::catalog::models::{Product, UnitType};

/// One product-and-quantity row within a cart
///
/// Carries the product fields the cart screen and checkout need, so a
/// persisted cart can be shown without refetching the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product identifier
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub category_id: String,

    /// Unit price at the time the product was first added
    pub price: Decimal,

    pub unit_type: UnitType,

    /// Stock at the time the product was first added
    #[serde(default)]
    pub stock: Decimal,

    #[serde(default)]
    pub image: Option<String>,

    /// Quantity in base units, always positive
    pub quantity: Decimal,
}

impl CartLine {
    pub fn from_product(product: &Product, quantity: Decimal) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            category_id: product.category_id.clone(),
            price: product.price,
            unit_type: product.unit_type.clone(),
            stock: product.stock,
            image: product.image.clone(),
            quantity,
        }
    }

    /// price × quantity
    pub fn line_total(&self) -> Decimal {
        self.price * self.quantity
    }
}
