//! Order aggregate and related types.

mod aggregate;
mod value_objects;

pub use aggregate::Order;
pub use value_objects::{Money, OrderItem};

use thiserror::Error;

/// Errors that can occur constructing or mutating an order.
#[derive(Debug, Error)]
pub enum OrderError {
    /// An order must contain at least one item.
    #[error("Order must contain at least one item")]
    NoItems,

    /// Invalid quantity.
    #[error("Invalid quantity for item {item_id}: {quantity} (must be greater than 0)")]
    InvalidQuantity { item_id: String, quantity: u32 },

    /// Invalid price.
    #[error("Invalid price for item {item_id}: {price} (must be greater than 0)")]
    InvalidPrice { item_id: String, price: i64 },
}
