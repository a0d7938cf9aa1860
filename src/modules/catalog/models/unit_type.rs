use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit a product is priced and stocked in
///
/// The tag set is open: unknown tags from the API are kept verbatim and
/// treated as discrete units.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UnitType {
    /// Sold by weight (`KG`)
    Kilogram,
    /// Sold per piece (`ADET`)
    Piece,
    /// Sold per bunch (`DEMET`)
    Bunch,
    Other(String),
}

impl UnitType {
    pub fn as_str(&self) -> &str {
        match self {
            UnitType::Kilogram => "KG",
            UnitType::Piece => "ADET",
            UnitType::Bunch => "DEMET",
            UnitType::Other(tag) => tag,
        }
    }

    /// Weight units allow half-unit quantities
    pub fn is_weight(&self) -> bool {
        matches!(self, UnitType::Kilogram)
    }

    /// Smallest quantity change in unit purchase mode: 0.5 for weight, 1 otherwise
    pub fn increment(&self) -> Decimal {
        if self.is_weight() {
            Decimal::new(5, 1)
        } else {
            Decimal::ONE
        }
    }
}

impl From<String> for UnitType {
    fn from(tag: String) -> Self {
        match tag.trim().to_uppercase().as_str() {
            "KG" => UnitType::Kilogram,
            "ADET" => UnitType::Piece,
            "DEMET" => UnitType::Bunch,
            _ => UnitType::Other(tag),
        }
    }
}

impl From<&str> for UnitType {
    fn from(tag: &str) -> Self {
        UnitType::from(tag.to_string())
    }
}

impl From<UnitType> for String {
    fn from(unit: UnitType) -> Self {
        match unit {
            UnitType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
