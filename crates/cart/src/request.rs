use serde::{Deserialize, Serialize};

use storefront_core::{OrderId, OrderItemId, SkuId};

/// What the shopper asked for.
///
/// An `order_item_id` means "update that line"; without one the request adds
/// `sku_id` to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemRequest {
    pub order_item_id: Option<OrderItemId>,
    pub sku_id: Option<SkuId>,
    pub quantity: i64,
}

impl OrderItemRequest {
    pub fn add(sku_id: SkuId, quantity: i64) -> Self {
        Self {
            order_item_id: None,
            sku_id: Some(sku_id),
            quantity,
        }
    }

    pub fn update(order_item_id: OrderItemId, quantity: i64) -> Self {
        Self {
            order_item_id: Some(order_item_id),
            sku_id: None,
            quantity,
        }
    }

    pub fn is_update(&self) -> bool {
        self.order_item_id.is_some()
    }
}

/// Seed data of the cart workflows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartOperationRequest {
    pub order_id: OrderId,
    pub item_request: OrderItemRequest,
}

impl CartOperationRequest {
    pub fn new(order_id: OrderId, item_request: OrderItemRequest) -> Self {
        Self {
            order_id,
            item_request,
        }
    }
}
