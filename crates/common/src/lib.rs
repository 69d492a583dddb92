//! Shared identifier types used across the checkout domain crates.

pub mod types;

pub use types::{CustomerId, OrderId, ProductId};
