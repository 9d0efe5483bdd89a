//! Ready-made add and update workflows.

use storefront_catalog::CatalogService;
use storefront_inventory::ContextualInventoryService;
use storefront_orders::OrderItemService;
use storefront_workflow::Workflow;

use crate::availability::CheckAvailabilityActivity;
use crate::config::AvailabilityConfig;
use crate::error::CartError;
use crate::request::CartOperationRequest;
use crate::validate::{RequestKind, ValidateCartRequestActivity};

pub type CartWorkflow = Workflow<CartOperationRequest, CartError>;

/// Validate, then check availability, for requests adding a new line.
pub fn add_item_workflow<C, O, I>(
    catalog: C,
    order_items: O,
    inventory: I,
    config: AvailabilityConfig,
) -> CartWorkflow
where
    C: CatalogService + 'static,
    O: OrderItemService + 'static,
    I: ContextualInventoryService + 'static,
{
    Workflow::builder("add_item")
        .activity(ValidateCartRequestActivity::new(RequestKind::Add))
        .activity(CheckAvailabilityActivity::new(
            catalog,
            order_items,
            inventory,
            config,
        ))
        .build()
}

/// Validate, then check availability, for requests changing an existing line.
pub fn update_item_workflow<C, O, I>(
    catalog: C,
    order_items: O,
    inventory: I,
    config: AvailabilityConfig,
) -> CartWorkflow
where
    C: CatalogService + 'static,
    O: OrderItemService + 'static,
    I: ContextualInventoryService + 'static,
{
    Workflow::builder("update_item")
        .activity(ValidateCartRequestActivity::new(RequestKind::Update))
        .activity(CheckAvailabilityActivity::new(
            catalog,
            order_items,
            inventory,
            config,
        ))
        .build()
}
