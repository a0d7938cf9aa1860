use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::UnitType;

/// A product as returned by the storefront API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,

    pub name: String,

    pub category_id: String,

    /// Filled in by the API from the category lookup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,

    /// Price per base unit
    pub price: Decimal,

    pub unit_type: UnitType,

    /// Available stock, in the same unit as `unit_type`
    pub stock: Decimal,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.stock > Decimal::ZERO
    }

    /// Whether `quantity` base units can be served from current stock
    pub fn can_supply(&self, quantity: Decimal) -> bool {
        quantity <= self.stock
    }
}

/// Filters for product listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProductQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,

    /// Free-text search term
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ProductQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn in_category(category_id: impl Into<String>) -> Self {
        Self {
            category_id: Some(category_id.into()),
            search: None,
        }
    }

    /// Blank search terms are dropped so they do not filter everything out
    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = if term.trim().is_empty() {
            None
        } else {
            Some(term.trim().to_string())
        };
        self
    }
}
