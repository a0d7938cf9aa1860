use rust_decimal::Decimal;
use std::str::FromStr;

use crate::modules::cart::models::{
    display_quantity, PendingSelection, PurchaseMode, QuantityError, ResolvedLine, StepDirection,
    TextInput,
};
use crate::modules::catalog::models::Product;

/// Base units per crate unless configured otherwise
pub const DEFAULT_CRATE_SIZE: u32 = 20;

/// Translates purchase mode and entered quantity into a stock-bounded line quantity and price
///
/// Every increase is checked against the product's stock in base units
/// (crates × crate size in crate mode). In-progress changes are rejected
/// softly; the final resolution is the hard gate before the cart.
#[derive(Debug, Clone)]
pub struct QuantityCalculator {
    crate_size: Decimal,
}

impl QuantityCalculator {
    pub fn new(crate_size: u32) -> Self {
        Self {
            crate_size: Decimal::from(crate_size.max(1)),
        }
    }

    pub fn crate_size(&self) -> Decimal {
        self.crate_size
    }

    /// Start a selection for `product` in unit mode
    pub fn select(&self, product: Product) -> PendingSelection {
        let quantity = Self::seed_quantity(&product, PurchaseMode::Unit);
        PendingSelection {
            product,
            mode: PurchaseMode::Unit,
            quantity,
            raw_text: display_quantity(quantity),
        }
    }

    /// Starting quantity: 0.5 for weight units in unit mode, otherwise 1 (unit or crate)
    pub fn seed_quantity(product: &Product, mode: PurchaseMode) -> Decimal {
        match mode {
            PurchaseMode::Unit => product.unit_type.increment(),
            PurchaseMode::Crate => Decimal::ONE,
        }
    }

    /// Switch purchase mode, resetting quantity and text to the mode's seed
    pub fn switch_mode(&self, selection: &mut PendingSelection, mode: PurchaseMode) {
        selection.mode = mode;
        selection.set_quantity(Self::seed_quantity(&selection.product, mode));
    }

    /// Step size in the selection's current mode
    pub fn increment(&self, selection: &PendingSelection) -> Decimal {
        match selection.mode {
            PurchaseMode::Unit => selection.product.unit_type.increment(),
            PurchaseMode::Crate => Decimal::ONE,
        }
    }

    /// Quantity in base units that `quantity` represents in the selection's mode
    ///
    /// `None` when the crate multiplication overflows; such a quantity can
    /// never be supplied.
    pub fn base_quantity(&self, selection: &PendingSelection, quantity: Decimal) -> Option<Decimal> {
        match selection.mode {
            PurchaseMode::Unit => Some(quantity),
            PurchaseMode::Crate => quantity.checked_mul(self.crate_size),
        }
    }

    /// Whether the product's stock covers `quantity` in the selection's mode
    fn fits_stock(&self, selection: &PendingSelection, quantity: Decimal) -> bool {
        self.base_quantity(selection, quantity)
            .is_some_and(|base| selection.product.can_supply(base))
    }

    /// Apply a +/- button press
    ///
    /// The result never drops below one increment. An increase past stock is
    /// rejected with [`QuantityError::StockLimit`] and leaves the selection as is.
    pub fn step(
        &self,
        selection: &mut PendingSelection,
        direction: StepDirection,
    ) -> Result<Decimal, QuantityError> {
        let increment = self.increment(selection);
        let next = selection
            .quantity
            .checked_add(direction.sign() * increment)
            .map(|q| q.max(increment).round_dp(2));

        let next = match next {
            Some(next) if direction == StepDirection::Decrease || self.fits_stock(selection, next) => {
                next
            }
            _ => {
                let requested = next
                    .and_then(|q| self.base_quantity(selection, q))
                    .unwrap_or(Decimal::MAX);
                tracing::debug!(
                    product_id = %selection.product.id,
                    requested = %requested,
                    stock = %selection.product.stock,
                    "Quantity step rejected by stock limit"
                );
                return Err(QuantityError::StockLimit {
                    requested,
                    available: selection.product.stock,
                    unit: selection.product.unit_type.clone(),
                });
            }
        };

        selection.set_quantity(next);
        Ok(next)
    }

    /// Apply free-form text from the quantity field
    ///
    /// The text is always echoed back for display. The numeric quantity only
    /// changes when the text starts with a positive number (`.` or `,` as
    /// decimal separator) whose base quantity fits in stock; trailing
    /// characters such as a unit suffix are ignored.
    pub fn set_from_text(&self, selection: &mut PendingSelection, raw: &str) -> TextInput {
        selection.raw_text = raw.to_string();

        let value = match parse_quantity(raw) {
            Some(value) if value > Decimal::ZERO => value,
            _ => return TextInput::Pending,
        };

        if !self.fits_stock(selection, value) {
            return TextInput::OverStock(value);
        }

        selection.quantity = value;
        TextInput::Accepted(value)
    }

    /// Price of the current selection; `None` if it overflows
    pub fn total_price(&self, selection: &PendingSelection) -> Option<Decimal> {
        self.base_quantity(selection, selection.quantity)
            .and_then(|base| selection.product.price.checked_mul(base))
    }

    /// Final stock check and conversion to base units for the cart
    pub fn resolve_for_cart(
        &self,
        selection: &PendingSelection,
    ) -> Result<ResolvedLine, QuantityError> {
        let insufficient = |requested: Decimal| QuantityError::InsufficientStock {
            requested,
            available: selection.product.stock,
            unit: selection.product.unit_type.clone(),
        };

        let quantity = self
            .base_quantity(selection, selection.quantity)
            .ok_or_else(|| insufficient(Decimal::MAX))?;
        if !selection.product.can_supply(quantity) {
            return Err(insufficient(quantity));
        }
        let total_price = self
            .total_price(selection)
            .ok_or_else(|| insufficient(quantity))?;

        Ok(ResolvedLine {
            product: selection.product.clone(),
            mode: selection.mode,
            crates: match selection.mode {
                PurchaseMode::Crate => Some(selection.quantity),
                PurchaseMode::Unit => None,
            },
            quantity,
            total_price,
        })
    }
}

impl Default for QuantityCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_CRATE_SIZE)
    }
}

/// Parse the leading number of a user-entered quantity
///
/// `,` counts as the decimal separator. Only the longest numeric prefix is
/// read, so `2kg` is 2 and `1.5.` is 1.5; text without leading digits is `None`.
fn parse_quantity(raw: &str) -> Option<Decimal> {
    let normalized = raw.trim().replace(',', ".");
    let (sign, rest) = match normalized.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", normalized.strip_prefix('+').unwrap_or(&normalized)),
    };

    let int_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    let frac_len = match rest[int_len..].strip_prefix('.') {
        Some(frac) => frac.bytes().take_while(u8::is_ascii_digit).count(),
        None => 0,
    };
    if int_len + frac_len == 0 {
        return None;
    }

    let integer = if int_len == 0 { "0" } else { &rest[..int_len] };
    let number = if frac_len == 0 {
        format!("{}{}", sign, integer)
    } else {
        let frac = &rest[int_len + 1..int_len + 1 + frac_len];
        format!("{}{}.{}", sign, integer, frac)
    };
    Decimal::from_str(&number).ok()
}
