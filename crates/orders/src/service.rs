//! Order-item lookup seam.

use std::collections::HashMap;
use std::sync::Arc;

use storefront_core::{DomainError, DomainResult, OrderItemId};

use crate::item::OrderItem;

/// Read access to existing order lines.
pub trait OrderItemService: Send + Sync {
    /// Load an order item. Unknown ids yield `DomainError::NotFound`.
    fn read_order_item_by_id(&self, id: OrderItemId) -> DomainResult<OrderItem>;
}

impl<T> OrderItemService for Arc<T>
where
    T: OrderItemService + ?Sized,
{
    fn read_order_item_by_id(&self, id: OrderItemId) -> DomainResult<OrderItem> {
        (**self).read_order_item_by_id(id)
    }
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryOrderItems {
    items: HashMap<OrderItemId, OrderItem>,
}

impl InMemoryOrderItems {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an order item.
    pub fn insert(&mut self, item: impl Into<OrderItem>) {
        let item = item.into();
        tracing::trace!(order_item_id = %item.id_typed(), kind = item.kind(), "order item stored");
        self.items.insert(item.id_typed(), item);
    }

    pub fn with_item(mut self, item: impl Into<OrderItem>) -> Self {
        self.insert(item);
        self
    }
}

impl OrderItemService for InMemoryOrderItems {
    fn read_order_item_by_id(&self, id: OrderItemId) -> DomainResult<OrderItem> {
        self.items
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("order item", id))
    }
}
