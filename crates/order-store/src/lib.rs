//! Persistence for the Order aggregate.
//!
//! An order is stored normalized across two tables: one parent row and one
//! child row per line item, related through `order_id`. The repository keeps
//! that representation consistent with the in-memory aggregate; updates
//! replace the child-row set wholesale inside a single transaction rather
//! than computing a diff.

pub mod error;
pub mod memory;
pub mod postgres;
pub mod repository;
pub mod row;

pub use error::{OrderStoreError, Result};
pub use memory::InMemoryOrderRepository;
pub use postgres::PostgresOrderRepository;
pub use repository::OrderRepository;
pub use row::{OrderItemRow, OrderRow, order_from_rows, order_to_rows};
