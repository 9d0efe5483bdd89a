use serde::{Deserialize, Serialize};
use thiserror::Error;

use storefront_core::SkuId;

/// A sku cannot be supplied in the requested quantity.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum InventoryUnavailable {
    /// The sku's availability flag is off; `available` is always 0.
    #[error("sku {sku_id} is marked as unavailable (requested {requested})")]
    SkuUnavailable {
        sku_id: SkuId,
        requested: i64,
        available: i64,
    },

    /// The inventory service reported a shortfall.
    #[error("insufficient inventory for sku {sku_id}: requested {requested}, available {available}")]
    InsufficientQuantity {
        sku_id: SkuId,
        requested: i64,
        available: i64,
    },
}

impl InventoryUnavailable {
    pub fn sku_unavailable(sku_id: SkuId, requested: i64) -> Self {
        Self::SkuUnavailable {
            sku_id,
            requested,
            available: 0,
        }
    }

    pub fn insufficient(sku_id: SkuId, requested: i64, available: i64) -> Self {
        Self::InsufficientQuantity {
            sku_id,
            requested,
            available,
        }
    }

    pub fn sku_id(&self) -> SkuId {
        match self {
            Self::SkuUnavailable { sku_id, .. } | Self::InsufficientQuantity { sku_id, .. } => {
                *sku_id
            }
        }
    }

    pub fn requested(&self) -> i64 {
        match self {
            Self::SkuUnavailable { requested, .. }
            | Self::InsufficientQuantity { requested, .. } => *requested,
        }
    }

    pub fn available(&self) -> i64 {
        match self {
            Self::SkuUnavailable { available, .. }
            | Self::InsufficientQuantity { available, .. } => *available,
        }
    }
}
