use storefront_core::OrderId;

/// Hints passed along with every inventory question.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct InventoryContext {
    order_id: Option<OrderId>,
}

impl InventoryContext {
    /// Context with no originating order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for a question asked on behalf of `order_id`.
    ///
    /// Implementations may use it to ignore stock the order has already reserved.
    pub fn for_order(order_id: OrderId) -> Self {
        Self {
            order_id: Some(order_id),
        }
    }

    pub fn order_id(&self) -> Option<OrderId> {
        self.order_id
    }
}
