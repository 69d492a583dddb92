//! Normalized row shapes and aggregate <-> row mapping.

use domain::{Money, Order, OrderItem};
use sqlx::FromRow;

use crate::error::{OrderStoreError, Result};

/// Parent row of the normalized order representation.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct OrderRow {
    pub id: String,
    pub customer_id: String,
    pub total: i64,
}

/// Child row, one per line item, keyed to its parent via `order_id`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct OrderItemRow {
    pub id: String,
    pub name: String,
    pub price: i64,
    pub quantity: i32,
    pub product_id: String,
    pub order_id: String,
}

/// Converts an aggregate to its row representation.
///
/// The parent row's `total` is computed from the aggregate at write time;
/// it is not recomputed later. A quantity above the child column's range
/// surfaces as [`OrderStoreError::QuantityOutOfRange`] rather than wrapping.
pub fn order_to_rows(order: &Order) -> Result<(OrderRow, Vec<OrderItemRow>)> {
    let order_row = OrderRow {
        id: order.id().as_str().to_string(),
        customer_id: order.customer_id().as_str().to_string(),
        total: order.total().cents(),
    };

    let item_rows = order
        .items()
        .iter()
        .map(|item| {
            let quantity = i32::try_from(item.quantity).map_err(|_| {
                OrderStoreError::QuantityOutOfRange {
                    item_id: item.id.clone(),
                    quantity: i64::from(item.quantity),
                }
            })?;
            Ok(OrderItemRow {
                id: item.id.clone(),
                name: item.name.clone(),
                price: item.price.cents(),
                quantity,
                product_id: item.product_id.as_str().to_string(),
                order_id: order.id().as_str().to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((order_row, item_rows))
}

/// Reconstructs an aggregate from its parent row and child rows.
///
/// Item order is whatever the storage layer returned. Rows that no longer
/// satisfy the aggregate's invariants surface as
/// [`OrderStoreError::InvalidRow`].
pub fn order_from_rows(order_row: OrderRow, item_rows: Vec<OrderItemRow>) -> Result<Order> {
    let items = item_rows
        .into_iter()
        .map(|row| {
            let quantity = u32::try_from(row.quantity).map_err(|_| {
                OrderStoreError::QuantityOutOfRange {
                    item_id: row.id.clone(),
                    quantity: i64::from(row.quantity),
                }
            })?;
            Ok(OrderItem::new(
                row.id,
                row.name,
                Money::from_cents(row.price),
                row.product_id,
                quantity,
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    let order_id = order_row.id.clone();
    Order::new(order_row.id, order_row.customer_id, items)
        .map_err(|source| OrderStoreError::InvalidRow { order_id, source })
}
