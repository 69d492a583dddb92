use common::OrderId;
use thiserror::Error;

/// Errors that can occur when persisting or loading orders.
#[derive(Debug, Error)]
pub enum OrderStoreError {
    /// No parent row matches the requested order id.
    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    /// A parent row with this id already exists.
    #[error("Order already exists: {0}")]
    OrderAlreadyExists(OrderId),

    /// Stored rows no longer satisfy the aggregate's invariants, e.g. a
    /// parent row with no child rows.
    #[error("Stored rows for order {order_id} violate domain invariants: {source}")]
    InvalidRow {
        order_id: String,
        #[source]
        source: domain::OrderError,
    },

    /// An item quantity does not fit the storage column type: above
    /// `i32::MAX` on write, or negative in a stored row on read.
    #[error("Quantity for item {item_id} is outside the storable range: {quantity}")]
    QuantityOutOfRange { item_id: String, quantity: i64 },

    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Result type for order store operations.
pub type Result<T> = std::result::Result<T, OrderStoreError>;
