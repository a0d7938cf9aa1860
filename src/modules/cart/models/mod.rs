mod cart;
mod cart_line;
mod selection;

pub use cart::Cart;
pub use cart_line::CartLine;
pub use selection::{
    display_quantity, PendingSelection, PurchaseMode, QuantityError, ResolvedLine, StepDirection,
    TextInput,
};
