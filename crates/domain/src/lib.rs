//! Domain layer for the checkout system.
//!
//! This crate provides the Order aggregate and its value objects:
//! - `Order` — aggregate root owning an ordered, non-empty item collection
//! - `OrderItem` — line item, persisted as a child row but with no identity
//!   outside its parent order
//! - `Money` — cents-backed monetary value

pub mod order;

pub use order::{Money, Order, OrderError, OrderItem};
