use std::sync::Arc;

use storefront_catalog::Sku;
use storefront_core::DomainResult;

use crate::context::InventoryContext;

/// Inventory oracle consulted by the cart workflow.
///
/// Implementations own their concurrency story: a positive answer here is not a
/// reservation, and two callers may both see stock that only one can take.
pub trait ContextualInventoryService: Send + Sync {
    /// Quantity of `sku` that can still be sold in `context`.
    fn retrieve_quantity_available(
        &self,
        sku: &Sku,
        context: &InventoryContext,
    ) -> DomainResult<i64>;

    /// Whether `quantity` units of `sku` can be sold in `context`.
    ///
    /// Skus that are not quantity-tracked are always available.
    fn is_available(
        &self,
        sku: &Sku,
        quantity: i64,
        context: &InventoryContext,
    ) -> DomainResult<bool> {
        if !sku.tracks_quantity() {
            return Ok(true);
        }
        Ok(self.retrieve_quantity_available(sku, context)? >= quantity)
    }
}

impl<T> ContextualInventoryService for Arc<T>
where
    T: ContextualInventoryService + ?Sized,
{
    fn retrieve_quantity_available(
        &self,
        sku: &Sku,
        context: &InventoryContext,
    ) -> DomainResult<i64> {
        (**self).retrieve_quantity_available(sku, context)
    }

    fn is_available(
        &self,
        sku: &Sku,
        quantity: i64,
        context: &InventoryContext,
    ) -> DomainResult<bool> {
        (**self).is_available(sku, quantity, context)
    }
}
