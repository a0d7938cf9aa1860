pub mod admin;
pub mod cart;
pub mod catalog;
pub mod favorites;
pub mod orders;
