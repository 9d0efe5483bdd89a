use serde::{Deserialize, Serialize};

use storefront_core::{Entity, SkuId};

use crate::product::{Product, ProductBundle};

/// How inventory is tracked for a sku.
///
/// A sku with no inventory type behaves like `AlwaysAvailable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InventoryType {
    /// Quantities are counted and must be checked against the inventory service.
    CheckQuantity,
    /// Never runs out.
    AlwaysAvailable,
}

/// Sku: the unit of inventory tracking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sku {
    id: SkuId,
    name: String,
    available: bool,
    inventory_type: Option<InventoryType>,
    default_product: Option<Product>,
}

impl Sku {
    /// An available, untyped sku with no default product.
    pub fn new(id: SkuId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            available: true,
            inventory_type: None,
            default_product: None,
        }
    }

    pub fn with_available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    pub fn with_inventory_type(mut self, inventory_type: InventoryType) -> Self {
        self.inventory_type = Some(inventory_type);
        self
    }

    pub fn with_default_product(mut self, product: Product) -> Self {
        self.default_product = Some(product);
        self
    }

    pub fn id_typed(&self) -> SkuId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Hard availability flag. An unavailable sku cannot be sold in any quantity.
    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn inventory_type(&self) -> Option<InventoryType> {
        self.inventory_type
    }

    /// True only for `CheckQuantity`; untyped and always-available skus are not counted.
    pub fn tracks_quantity(&self) -> bool {
        self.inventory_type == Some(InventoryType::CheckQuantity)
    }

    pub fn default_product(&self) -> Option<&Product> {
        self.default_product.as_ref()
    }

    /// The bundle this sku sells, if its default product is a bundle.
    pub fn bundle(&self) -> Option<&ProductBundle> {
        self.default_product.as_ref().and_then(Product::as_bundle)
    }
}

impl Entity for Sku {
    type Id = SkuId;

    fn id(&self) -> SkuId {
        self.id
    }
}
