use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use common::OrderId;
use domain::Order;
use tokio::sync::RwLock;

use crate::error::{OrderStoreError, Result};
use crate::repository::OrderRepository;
use crate::row::{OrderItemRow, OrderRow, order_from_rows, order_to_rows};

/// In-memory order repository for testing.
///
/// Keeps the same normalized two-table shape as the PostgreSQL
/// implementation: a parent table keyed by order id and a flat child table
/// keyed back to it via `order_id`.
#[derive(Clone, Default)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<HashMap<String, OrderRow>>>,
    items: Arc<RwLock<Vec<OrderItemRow>>>,
}

impl InMemoryOrderRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored parent rows.
    pub async fn order_count(&self) -> usize {
        self.orders.read().await.len()
    }

    /// Returns the number of stored child rows.
    pub async fn item_row_count(&self) -> usize {
        self.items.read().await.len()
    }

    /// Clears both tables.
    pub async fn clear(&self) {
        self.orders.write().await.clear();
        self.items.write().await.clear();
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, order: &Order) -> Result<()> {
        let (order_row, item_rows) = order_to_rows(order)?;

        let mut orders = self.orders.write().await;
        if orders.contains_key(&order_row.id) {
            return Err(OrderStoreError::OrderAlreadyExists(order.id().clone()));
        }
        orders.insert(order_row.id.clone(), order_row);

        self.items.write().await.extend(item_rows);
        Ok(())
    }

    async fn update(&self, order: &Order) -> Result<()> {
        let (order_row, item_rows) = order_to_rows(order)?;

        let mut orders = self.orders.write().await;
        let Some(existing) = orders.get_mut(&order_row.id) else {
            return Err(OrderStoreError::OrderNotFound(order.id().clone()));
        };
        existing.total = order_row.total;

        // Wholesale replace of the child rows for this order.
        let mut items = self.items.write().await;
        items.retain(|row| row.order_id != order_row.id);
        items.extend(item_rows);
        Ok(())
    }

    async fn find(&self, id: &OrderId) -> Result<Order> {
        let orders = self.orders.read().await;
        let order_row = orders
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| OrderStoreError::OrderNotFound(id.clone()))?;

        let item_rows: Vec<_> = self
            .items
            .read()
            .await
            .iter()
            .filter(|row| row.order_id == order_row.id)
            .cloned()
            .collect();

        order_from_rows(order_row, item_rows)
    }

    async fn find_all(&self) -> Result<Vec<Order>> {
        let orders = self.orders.read().await;
        let items = self.items.read().await;

        orders
            .values()
            .map(|order_row| {
                let item_rows: Vec<_> = items
                    .iter()
                    .filter(|row| row.order_id == order_row.id)
                    .cloned()
                    .collect();
                order_from_rows(order_row.clone(), item_rows)
            })
            .collect()
    }
}
