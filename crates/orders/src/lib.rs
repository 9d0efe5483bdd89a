//! Order line items as the cart workflow sees them.
//!
//! Persistence is out of scope; `OrderItemService` is the lookup seam and
//! `InMemoryOrderItems` a HashMap-backed implementation.

pub mod item;
pub mod service;

pub use item::{BundleOrderItem, DiscreteOrderItem, OrderItem};
pub use service::{InMemoryOrderItems, OrderItemService};
