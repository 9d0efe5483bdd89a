use thiserror::Error;

use storefront_core::DomainError;
use storefront_inventory::InventoryUnavailable;

/// Why a cart mutation was refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    /// The requested sku (or one of its bundle components) cannot be supplied.
    #[error(transparent)]
    Unavailable(#[from] InventoryUnavailable),

    /// Malformed request or a failing collaborator lookup.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl CartError {
    pub fn as_unavailable(&self) -> Option<&InventoryUnavailable> {
        match self {
            CartError::Unavailable(e) => Some(e),
            CartError::Domain(_) => None,
        }
    }
}
