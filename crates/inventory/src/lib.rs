//! Inventory oracle.
//!
//! `ContextualInventoryService` answers availability questions for a sku given
//! contextual hints (the order being evaluated). How counts are stored is up to
//! the implementation; `InMemoryInventory` is a lock-guarded reference ledger.

pub mod context;
pub mod error;
pub mod ledger;
pub mod service;

pub use context::InventoryContext;
pub use error::InventoryUnavailable;
pub use ledger::{InMemoryInventory, Reservation};
pub use service::ContextualInventoryService;
