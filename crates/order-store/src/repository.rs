use async_trait::async_trait;
use common::OrderId;
use domain::Order;

use crate::Result;

/// Core trait for order repository implementations.
///
/// A repository keeps the normalized two-table representation consistent
/// with the in-memory aggregate. All implementations must be thread-safe
/// (Send + Sync).
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persists a new order: one parent row plus one child row per item,
    /// written atomically.
    ///
    /// Fails with [`OrderStoreError::OrderAlreadyExists`] when a parent row
    /// with the same id exists.
    ///
    /// [`OrderStoreError::OrderAlreadyExists`]: crate::OrderStoreError::OrderAlreadyExists
    async fn create(&self, order: &Order) -> Result<()>;

    /// Reconciles storage with the aggregate's current state, atomically:
    /// the parent row's total is updated, every child row for the order is
    /// deleted, and one child row per current item is reinserted.
    ///
    /// This is a wholesale replace, not a diff; only the resulting row set
    /// matters. Fails with [`OrderStoreError::OrderNotFound`] when no parent
    /// row matches.
    ///
    /// [`OrderStoreError::OrderNotFound`]: crate::OrderStoreError::OrderNotFound
    async fn update(&self, order: &Order) -> Result<()>;

    /// Loads the order with the given id together with its items.
    ///
    /// An empty result is normalized to [`OrderStoreError::OrderNotFound`].
    /// Item order is storage-determined and need not match the order the
    /// items were written in.
    ///
    /// [`OrderStoreError::OrderNotFound`]: crate::OrderStoreError::OrderNotFound
    async fn find(&self, id: &OrderId) -> Result<Order>;

    /// Loads every stored order with its items, in storage-determined order.
    async fn find_all(&self) -> Result<Vec<Order>>;
}
