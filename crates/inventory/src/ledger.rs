//! In-memory stock ledger with per-order reservations.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Utc};

use storefront_catalog::Sku;
use storefront_core::{DomainError, DomainResult, OrderId, SkuId};

use crate::context::InventoryContext;
use crate::service::ContextualInventoryService;

/// Stock held back for one order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub quantity: i64,
    pub reserved_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct StockLevel {
    on_hand: i64,
    reservations: HashMap<OrderId, Reservation>,
}

impl StockLevel {
    /// Free stock, ignoring whatever `exclude` has reserved itself.
    fn free_for(&self, exclude: Option<OrderId>) -> i64 {
        let reserved: i64 = self
            .reservations
            .iter()
            .filter(|(order_id, _)| Some(**order_id) != exclude)
            .map(|(_, r)| r.quantity)
            .sum();
        (self.on_hand - reserved).max(0)
    }
}

/// Lock-guarded inventory ledger.
///
/// Skus never stocked report zero available. Reads see on-hand stock minus
/// reservations held by *other* orders.
#[derive(Debug, Default)]
pub struct InMemoryInventory {
    levels: RwLock<HashMap<SkuId, StockLevel>>,
}

impl InMemoryInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the on-hand count for a sku.
    pub fn set_stock(&self, sku_id: SkuId, on_hand: i64) -> DomainResult<()> {
        if on_hand < 0 {
            return Err(DomainError::validation("stock cannot be negative"));
        }
        let mut levels = self.levels.write().unwrap_or_else(PoisonError::into_inner);
        levels.entry(sku_id).or_default().on_hand = on_hand;
        tracing::debug!(sku_id = %sku_id, on_hand, "stock set");
        Ok(())
    }

    /// Add `delta` (possibly negative) to the on-hand count.
    pub fn adjust_stock(&self, sku_id: SkuId, delta: i64) -> DomainResult<i64> {
        if delta == 0 {
            return Err(DomainError::validation("delta cannot be zero"));
        }
        let mut levels = self.levels.write().unwrap_or_else(PoisonError::into_inner);
        let level = levels.entry(sku_id).or_default();
        let new_stock = level
            .on_hand
            .checked_add(delta)
            .ok_or_else(|| DomainError::validation("stock overflow"))?;
        if new_stock < 0 {
            return Err(DomainError::invariant("stock cannot go negative"));
        }
        level.on_hand = new_stock;
        tracing::debug!(sku_id = %sku_id, delta, on_hand = new_stock, "stock adjusted");
        Ok(new_stock)
    }

    /// Hold `quantity` units of a sku for an order, replacing any earlier hold.
    ///
    /// Check and decrement happen under one write lock, so concurrent callers
    /// cannot both take the last unit.
    pub fn reserve(&self, order_id: OrderId, sku_id: SkuId, quantity: i64) -> DomainResult<()> {
        if quantity <= 0 {
            return Err(DomainError::validation("reservation quantity must be positive"));
        }
        let mut levels = self.levels.write().unwrap_or_else(PoisonError::into_inner);
        let level = levels
            .get_mut(&sku_id)
            .ok_or_else(|| DomainError::not_found("stock for sku", sku_id))?;

        let free = level.free_for(Some(order_id));
        if quantity > free {
            return Err(DomainError::conflict(format!(
                "cannot reserve {quantity} of sku {sku_id}: only {free} free"
            )));
        }
        level.reservations.insert(
            order_id,
            Reservation {
                quantity,
                reserved_at: Utc::now(),
            },
        );
        tracing::debug!(order_id = %order_id, sku_id = %sku_id, quantity, "stock reserved");
        Ok(())
    }

    /// Drop every reservation held by an order. Returns how many skus were released.
    pub fn release(&self, order_id: OrderId) -> usize {
        let mut levels = self.levels.write().unwrap_or_else(PoisonError::into_inner);
        let released = levels
            .values_mut()
            .filter_map(|level| level.reservations.remove(&order_id))
            .count();
        tracing::debug!(order_id = %order_id, released, "reservations released");
        released
    }

    pub fn reserved_for(&self, order_id: OrderId, sku_id: SkuId) -> Option<Reservation> {
        let levels = self.levels.read().unwrap_or_else(PoisonError::into_inner);
        levels
            .get(&sku_id)
            .and_then(|level| level.reservations.get(&order_id).copied())
    }

    pub fn on_hand(&self, sku_id: SkuId) -> i64 {
        let levels = self.levels.read().unwrap_or_else(PoisonError::into_inner);
        levels.get(&sku_id).map_or(0, |level| level.on_hand)
    }
}

impl ContextualInventoryService for InMemoryInventory {
    fn retrieve_quantity_available(
        &self,
        sku: &Sku,
        context: &InventoryContext,
    ) -> DomainResult<i64> {
        let levels = self.levels.read().unwrap_or_else(PoisonError::into_inner);
        Ok(levels
            .get(&sku.id_typed())
            .map_or(0, |level| level.free_for(context.order_id())))
    }
}
