//! Order aggregate implementation.

use common::{CustomerId, OrderId};
use serde::{Deserialize, Serialize};

use super::{Money, OrderError, OrderItem};

/// Order aggregate root.
///
/// An order references a customer and owns an ordered, non-empty collection
/// of line items. The total is derived from the items on every call and is
/// never stored independently of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer_id: CustomerId,
    items: Vec<OrderItem>,
}

impl Order {
    /// Creates a new order.
    ///
    /// Fails if `items` is empty, or if any item has a zero quantity or a
    /// non-positive price.
    pub fn new(
        id: impl Into<OrderId>,
        customer_id: impl Into<CustomerId>,
        items: Vec<OrderItem>,
    ) -> Result<Self, OrderError> {
        Self::validate_items(&items)?;
        Ok(Self {
            id: id.into(),
            customer_id: customer_id.into(),
            items,
        })
    }

    /// Returns the order ID.
    pub fn id(&self) -> &OrderId {
        &self.id
    }

    /// Returns the customer this order references.
    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    /// Returns the line items in order.
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Mutable access to the line items.
    pub fn items_mut(&mut self) -> &mut [OrderItem] {
        &mut self.items
    }

    /// Returns the number of line items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Replaces the whole items collection.
    ///
    /// The same validation as construction applies; the derived total
    /// changes accordingly.
    pub fn update_items(&mut self, items: Vec<OrderItem>) -> Result<(), OrderError> {
        Self::validate_items(&items)?;
        self.items = items;
        Ok(())
    }

    /// Returns the order total, recomputed from the items on every call.
    pub fn total(&self) -> Money {
        self.items.iter().map(OrderItem::subtotal).sum()
    }

    fn validate_items(items: &[OrderItem]) -> Result<(), OrderError> {
        if items.is_empty() {
            return Err(OrderError::NoItems);
        }

        for item in items {
            if item.quantity == 0 {
                return Err(OrderError::InvalidQuantity {
                    item_id: item.id.clone(),
                    quantity: item.quantity,
                });
            }
            if !item.price.is_positive() {
                return Err(OrderError::InvalidPrice {
                    item_id: item.id.clone(),
                    price: item.price.cents(),
                });
            }
        }

        Ok(())
    }
}
