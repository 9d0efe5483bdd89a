use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity, ProductId};

use crate::sku::Sku;

/// Catalog product: either a plain product or a bundle of other skus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Product {
    Standard(StandardProduct),
    Bundle(ProductBundle),
}

impl Product {
    pub fn id_typed(&self) -> ProductId {
        match self {
            Product::Standard(p) => p.id,
            Product::Bundle(b) => b.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Product::Standard(p) => &p.name,
            Product::Bundle(b) => &b.name,
        }
    }

    pub fn as_bundle(&self) -> Option<&ProductBundle> {
        match self {
            Product::Bundle(b) => Some(b),
            Product::Standard(_) => None,
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id_typed()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardProduct {
    id: ProductId,
    name: String,
}

impl StandardProduct {
    pub fn new(id: ProductId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// One line of a bundle's composition: `quantity` units of `sku` per bundle sold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkuBundleItem {
    sku: Sku,
    quantity: i64,
}

impl SkuBundleItem {
    pub fn new(sku: Sku, quantity: i64) -> DomainResult<Self> {
        if quantity <= 0 {
            return Err(DomainError::validation(
                "bundle item quantity must be positive",
            ));
        }
        Ok(Self { sku, quantity })
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }
}

/// A product sold as a fixed composition of other skus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductBundle {
    id: ProductId,
    name: String,
    /// `None` defers to the system-wide default.
    use_item_inventory: Option<bool>,
    sku_bundle_items: Vec<SkuBundleItem>,
}

impl ProductBundle {
    pub fn new(id: ProductId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            use_item_inventory: None,
            sku_bundle_items: Vec::new(),
        }
    }

    pub fn with_item(mut self, item: SkuBundleItem) -> Self {
        self.sku_bundle_items.push(item);
        self
    }

    pub fn with_use_item_inventory(mut self, use_item_inventory: bool) -> Self {
        self.use_item_inventory = Some(use_item_inventory);
        self
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn use_item_inventory(&self) -> Option<bool> {
        self.use_item_inventory
    }

    /// Components in catalog order.
    pub fn sku_bundle_items(&self) -> &[SkuBundleItem] {
        &self.sku_bundle_items
    }

    /// Whether component skus (rather than the bundle's own sku) carry the inventory.
    ///
    /// The bundle's own flag wins; `default` applies only when it is unset.
    pub fn checks_item_inventory(&self, default: bool) -> bool {
        self.use_item_inventory.unwrap_or(default)
    }
}
