use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::Currency;
use crate::modules::catalog::models::{Product, UnitType};

/// How a product is being bought on its detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseMode {
    /// Priced per base unit
    #[default]
    Unit,
    /// Bought in crates of a fixed number of base units
    Crate,
}

impl fmt::Display for PurchaseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PurchaseMode::Unit => write!(f, "unit"),
            PurchaseMode::Crate => write!(f, "crate"),
        }
    }
}

/// Direction of a +/- quantity button press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Increase,
    Decrease,
}

impl StepDirection {
    pub fn sign(&self) -> Decimal {
        match self {
            StepDirection::Increase => Decimal::ONE,
            StepDirection::Decrease => Decimal::NEGATIVE_ONE,
        }
    }
}

/// Quantity rejected against available stock
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuantityError {
    /// An in-progress change would exceed stock; the selection is unchanged
    #[error("Stock limit reached: requested {requested} {unit}, remaining stock {available} {unit}")]
    StockLimit {
        requested: Decimal,
        available: Decimal,
        unit: UnitType,
    },

    /// The final quantity exceeds stock; nothing is added to the cart
    #[error("Insufficient stock: requested {requested} {unit}, remaining stock {available} {unit}")]
    InsufficientStock {
        requested: Decimal,
        available: Decimal,
        unit: UnitType,
    },
}

impl QuantityError {
    /// Soft rejections are informational and never block a flow
    pub fn is_soft(&self) -> bool {
        matches!(self, QuantityError::StockLimit { .. })
    }
}

/// Outcome of free-form quantity entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextInput {
    /// Parsed, positive and within stock; quantity updated
    Accepted(Decimal),
    /// Not a positive number (yet); quantity retained
    Pending,
    /// Parsed but over stock; quantity retained
    OverStock(Decimal),
}

/// Transient quantity selection for a single product view
///
/// Never persisted; discarded once added to the cart or the view closes.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSelection {
    pub(crate) product: Product,
    pub(crate) mode: PurchaseMode,
    pub(crate) quantity: Decimal,
    pub(crate) raw_text: String,
}

impl PendingSelection {
    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn mode(&self) -> PurchaseMode {
        self.mode
    }

    /// Quantity in the current mode's unit (base units or crates)
    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// Text shown in the quantity field
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub(crate) fn set_quantity(&mut self, quantity: Decimal) {
        self.quantity = quantity;
        self.raw_text = display_quantity(quantity);
    }
}

/// A validated (product, quantity) pair ready for the cart
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLine {
    pub product: Product,
    pub mode: PurchaseMode,
    /// Crate count when bought in crate mode
    pub crates: Option<Decimal>,
    /// Quantity in base units
    pub quantity: Decimal,
    pub total_price: Decimal,
}

impl ResolvedLine {
    /// Confirmation text, e.g. `2 crates of Domates: 40 KG added (₺996.00)`
    pub fn summary(&self, currency: Currency) -> String {
        let unit = &self.product.unit_type;
        let price = currency.format_amount(self.total_price);
        match self.crates {
            Some(crates) => format!(
                "{} {} of {}: {} {} added ({})",
                display_quantity(crates),
                if crates == Decimal::ONE { "crate" } else { "crates" },
                self.product.name,
                display_quantity(self.quantity),
                unit,
                price
            ),
            None => format!(
                "{}: {} {} added ({})",
                self.product.name,
                display_quantity(self.quantity),
                unit,
                price
            ),
        }
    }
}

/// Render a quantity without trailing zeros (`2.0` → `2`, `2.50` → `2.5`)
pub fn display_quantity(quantity: Decimal) -> String {
    quantity.normalize().to_string()
}
