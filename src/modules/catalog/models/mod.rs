mod category;
mod product;
mod unit_type;

pub use category::Category;
pub use product::{Product, ProductQuery};
pub use unit_type::UnitType;
