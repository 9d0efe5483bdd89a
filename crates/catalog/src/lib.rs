//! Catalog read model.
//!
//! Skus, standard products and bundles as the order workflow consumes them,
//! plus the `CatalogService` lookup seam and an in-memory implementation.

pub mod product;
pub mod service;
pub mod sku;

pub use product::{Product, ProductBundle, SkuBundleItem, StandardProduct};
pub use service::{CatalogService, InMemoryCatalog};
pub use sku::{InventoryType, Sku};
