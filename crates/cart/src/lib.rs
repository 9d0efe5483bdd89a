//! Cart mutation workflows.
//!
//! Add and update requests run through a `Workflow` of activities before the
//! order service touches the cart. The availability activity resolves which sku
//! (and, for bundles, which component skus) the request needs and asks the
//! inventory service whether that much can be sold.

pub mod availability;
pub mod config;
pub mod error;
pub mod request;
pub mod validate;
pub mod workflows;

pub use availability::{CheckAvailabilityActivity, RequiredQuantity, Target, build_checklist};
pub use config::AvailabilityConfig;
pub use error::CartError;
pub use request::{CartOperationRequest, OrderItemRequest};
pub use validate::{RequestKind, ValidateCartRequestActivity};
pub use workflows::{CartWorkflow, add_item_workflow, update_item_workflow};
