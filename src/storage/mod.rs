//! Key-value store implementations backing on-device persistence
//!
//! `FileStore` is the production store; `MemoryStore` keeps everything in
//! process and is handy for previews and tests.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Storage key holding the serialized cart line list
pub const CART_KEY: &str = "@cart";

/// Storage key holding the serialized favorite product ids
pub const FAVORITES_KEY: &str = "@favorites";

/// Storage key holding the logged-in admin's username
pub const ADMIN_KEY: &str = "@taptaze_admin";
