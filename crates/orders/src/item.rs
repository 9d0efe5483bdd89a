use serde::{Deserialize, Serialize};

use storefront_catalog::{ProductBundle, Sku};
use storefront_core::{Entity, OrderId, OrderItemId};

/// A line already present in an order.
///
/// New line shapes may be added; callers outside this crate must handle
/// variants they do not know about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum OrderItem {
    Discrete(DiscreteOrderItem),
    Bundle(BundleOrderItem),
}

impl OrderItem {
    pub fn id_typed(&self) -> OrderItemId {
        match self {
            OrderItem::Discrete(i) => i.id,
            OrderItem::Bundle(i) => i.id,
        }
    }

    pub fn order_id(&self) -> OrderId {
        match self {
            OrderItem::Discrete(i) => i.order_id,
            OrderItem::Bundle(i) => i.order_id,
        }
    }

    pub fn quantity(&self) -> i64 {
        match self {
            OrderItem::Discrete(i) => i.quantity,
            OrderItem::Bundle(i) => i.quantity,
        }
    }

    /// Short variant name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            OrderItem::Discrete(_) => "discrete",
            OrderItem::Bundle(_) => "bundle",
        }
    }
}

impl Entity for OrderItem {
    type Id = OrderItemId;

    fn id(&self) -> OrderItemId {
        self.id_typed()
    }
}

/// Line backed by a single sku.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscreteOrderItem {
    id: OrderItemId,
    order_id: OrderId,
    sku: Sku,
    quantity: i64,
}

impl DiscreteOrderItem {
    pub fn new(id: OrderItemId, order_id: OrderId, sku: Sku, quantity: i64) -> Self {
        Self {
            id,
            order_id,
            sku,
            quantity,
        }
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }
}

/// Line backed by a bundle's own sku plus the bundle definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleOrderItem {
    id: OrderItemId,
    order_id: OrderId,
    sku: Sku,
    product_bundle: ProductBundle,
    quantity: i64,
}

impl BundleOrderItem {
    pub fn new(
        id: OrderItemId,
        order_id: OrderId,
        sku: Sku,
        product_bundle: ProductBundle,
        quantity: i64,
    ) -> Self {
        Self {
            id,
            order_id,
            sku,
            product_bundle,
            quantity,
        }
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn product_bundle(&self) -> &ProductBundle {
        &self.product_bundle
    }
}

impl From<DiscreteOrderItem> for OrderItem {
    fn from(value: DiscreteOrderItem) -> Self {
        OrderItem::Discrete(value)
    }
}

impl From<BundleOrderItem> for OrderItem {
    fn from(value: BundleOrderItem) -> Self {
        OrderItem::Bundle(value)
    }
}
