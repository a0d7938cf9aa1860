use rust_decimal::Decimal;

use super::CartLine;
use crate::modules::catalog::models::Product;

/// Ordered collection of cart lines with at most one line per product id
///
/// The total is never stored; it is reduced from the lines on every read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from a persisted line list
    ///
    /// Duplicate ids are merged and non-positive quantities dropped, so a
    /// hand-edited or corrupted snapshot still yields a valid cart.
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        let mut cart = Self::new();
        for line in lines {
            if line.quantity <= Decimal::ZERO {
                continue;
            }
            match cart.line_mut(&line.id) {
                Some(existing) => existing.quantity += line.quantity,
                None => cart.lines.push(line),
            }
        }
        cart
    }

    /// Merge `amount` units of `product` into the cart
    ///
    /// Returns `false` and leaves the cart untouched when `amount` is not positive.
    pub fn add(&mut self, product: &Product, amount: Decimal) -> bool {
        if amount <= Decimal::ZERO {
            return false;
        }

        match self.line_mut(&product.id) {
            Some(line) => line.quantity += amount,
            None => self.lines.push(CartLine::from_product(product, amount)),
        }
        true
    }

    /// Remove the line for `product_id`; returns whether a line was removed
    pub fn remove(&mut self, product_id: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id != product_id);
        self.lines.len() != before
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn get(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == product_id)
    }

    fn line_mut(&mut self, product_id: &str) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.id == product_id)
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.get(product_id).is_some()
    }

    /// Quantity held for `product_id`, zero when absent
    pub fn quantity_of(&self, product_id: &str) -> Decimal {
        self.get(product_id)
            .map(|line| line.quantity)
            .unwrap_or(Decimal::ZERO)
    }

    /// Number of distinct products
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Σ price × quantity over the current lines
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}
