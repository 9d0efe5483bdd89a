//! Catalog lookup seam.

use std::collections::HashMap;
use std::sync::Arc;

use storefront_core::{DomainError, DomainResult, SkuId};

use crate::sku::Sku;

/// Read access to skus.
pub trait CatalogService: Send + Sync {
    /// Look up a sku. Unknown ids yield `DomainError::NotFound`.
    fn find_sku_by_id(&self, id: SkuId) -> DomainResult<Sku>;
}

impl<T> CatalogService for Arc<T>
where
    T: CatalogService + ?Sized,
{
    fn find_sku_by_id(&self, id: SkuId) -> DomainResult<Sku> {
        (**self).find_sku_by_id(id)
    }
}

/// HashMap-backed catalog for tests and single-process setups.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCatalog {
    skus: HashMap<SkuId, Sku>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a sku.
    pub fn insert_sku(&mut self, sku: Sku) {
        tracing::trace!(sku_id = %sku.id_typed(), "catalog sku stored");
        self.skus.insert(sku.id_typed(), sku);
    }

    pub fn with_sku(mut self, sku: Sku) -> Self {
        self.insert_sku(sku);
        self
    }

    pub fn len(&self) -> usize {
        self.skus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skus.is_empty()
    }
}

impl CatalogService for InMemoryCatalog {
    fn find_sku_by_id(&self, id: SkuId) -> DomainResult<Sku> {
        self.skus
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("sku", id))
    }
}
