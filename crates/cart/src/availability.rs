//! Availability check for cart adds and updates.
//!
//! The activity works in three steps:
//!
//! 1. **Resolve** the sku the request is about. Updates go through the
//!    existing order item; adds look the sku up in the catalog. A bundle
//!    (an item's bundle definition, or a sku whose default product is a
//!    bundle) brings its composition along.
//! 2. **Gate** on the sku's hard availability flag.
//! 3. **Check** every quantity-tracked entry of the checklist against the
//!    inventory service. For bundles the checklist holds either the component
//!    skus (quantity multiplied by composition) or the bundle's own sku.
//!
//! The activity never changes the context; it either lets it through or fails.

use tracing::{debug, warn};

use storefront_catalog::{CatalogService, ProductBundle, Sku};
use storefront_core::{DomainError, DomainResult};
use storefront_inventory::{ContextualInventoryService, InventoryContext, InventoryUnavailable};
use storefront_orders::{OrderItem, OrderItemService};
use storefront_workflow::{Activity, ProcessContext};

use crate::config::AvailabilityConfig;
use crate::error::CartError;
use crate::request::{CartOperationRequest, OrderItemRequest};

/// The sku a request resolves to, plus its bundle definition when it sells one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub sku: Sku,
    pub bundle: Option<ProductBundle>,
}

/// One line of the availability checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredQuantity {
    pub sku: Sku,
    pub quantity: i64,
}

/// Build the (sku, quantity) pairs that must be available for `requested`
/// units of `target`.
///
/// - plain sku: the sku itself, `requested` units;
/// - bundle checked per component: one entry per distinct component sku, in
///   first-appearance order, `requested × summed component quantity`;
/// - bundle checked as a whole: the bundle's own sku, `requested` units.
///
/// `default_check_item_inventory` applies only to bundles that leave
/// `use_item_inventory` unset.
pub fn build_checklist(
    target: &Target,
    requested: i64,
    default_check_item_inventory: bool,
) -> DomainResult<Vec<RequiredQuantity>> {
    let Some(bundle) = &target.bundle else {
        return Ok(vec![RequiredQuantity {
            sku: target.sku.clone(),
            quantity: requested,
        }]);
    };

    if !bundle.checks_item_inventory(default_check_item_inventory) {
        // The bundle sku stands in for the whole composition.
        return Ok(vec![RequiredQuantity {
            sku: target.sku.clone(),
            quantity: requested,
        }]);
    }

    let mut per_component: Vec<(Sku, i64)> = Vec::new();
    for item in bundle.sku_bundle_items() {
        let component = item.sku();
        match per_component
            .iter_mut()
            .find(|(sku, _)| sku.id_typed() == component.id_typed())
        {
            Some((_, total)) => {
                *total = total
                    .checked_add(item.quantity())
                    .ok_or_else(quantity_overflow)?;
            }
            None => per_component.push((component.clone(), item.quantity())),
        }
    }

    per_component
        .into_iter()
        .map(|(sku, composition)| -> DomainResult<RequiredQuantity> {
            let quantity = requested
                .checked_mul(composition)
                .ok_or_else(quantity_overflow)?;
            Ok(RequiredQuantity { sku, quantity })
        })
        .collect()
}

fn quantity_overflow() -> DomainError {
    DomainError::validation("required quantity overflows")
}

/// Workflow activity that refuses cart mutations the inventory cannot cover.
#[derive(Debug, Clone)]
pub struct CheckAvailabilityActivity<C, O, I> {
    catalog: C,
    order_items: O,
    inventory: I,
    config: AvailabilityConfig,
}

impl<C, O, I> CheckAvailabilityActivity<C, O, I>
where
    C: CatalogService,
    O: OrderItemService,
    I: ContextualInventoryService,
{
    pub const NAME: &'static str = "check_availability";

    pub fn new(catalog: C, order_items: O, inventory: I, config: AvailabilityConfig) -> Self {
        Self {
            catalog,
            order_items,
            inventory,
            config,
        }
    }

    pub fn config(&self) -> &AvailabilityConfig {
        &self.config
    }

    /// Find the sku (and bundle) a request is about.
    ///
    /// Returns `None` for order item shapes this activity does not know; such
    /// requests are let through unchecked.
    pub fn resolve_target(&self, request: &OrderItemRequest) -> DomainResult<Option<Target>> {
        if let Some(order_item_id) = request.order_item_id {
            let target = match self.order_items.read_order_item_by_id(order_item_id)? {
                OrderItem::Discrete(item) => Target {
                    sku: item.sku().clone(),
                    bundle: None,
                },
                OrderItem::Bundle(item) => Target {
                    sku: item.sku().clone(),
                    bundle: Some(item.product_bundle().clone()),
                },
                other => {
                    warn!(
                        order_item_id = %order_item_id,
                        kind = other.kind(),
                        "could not check availability; unrecognized order item"
                    );
                    return Ok(None);
                }
            };
            return Ok(Some(target));
        }

        let sku_id = request
            .sku_id
            .ok_or_else(|| DomainError::validation("add request requires a sku id"))?;
        let sku = self.catalog.find_sku_by_id(sku_id)?;
        let bundle = sku.bundle().cloned();
        Ok(Some(Target { sku, bundle }))
    }

    /// Run the full check for one request without going through a workflow.
    pub fn check(&self, request: &CartOperationRequest) -> Result<(), CartError> {
        let item_request = &request.item_request;
        let Some(target) = self.resolve_target(item_request)? else {
            return Ok(());
        };

        if !target.sku.is_available() {
            return Err(InventoryUnavailable::sku_unavailable(
                target.sku.id_typed(),
                item_request.quantity,
            )
            .into());
        }

        let checklist = build_checklist(
            &target,
            item_request.quantity,
            self.config.default_check_bundle_item_inventory,
        )?;

        let context = InventoryContext::for_order(request.order_id);
        // Untyped and always-available skus are never short.
        for required in checklist.iter().filter(|r| r.sku.tracks_quantity()) {
            if !self
                .inventory
                .is_available(&required.sku, required.quantity, &context)?
            {
                let available = self
                    .inventory
                    .retrieve_quantity_available(&required.sku, &context)?;
                debug!(
                    order_id = %request.order_id,
                    sku_id = %required.sku.id_typed(),
                    requested = required.quantity,
                    available,
                    "insufficient inventory"
                );
                return Err(InventoryUnavailable::insufficient(
                    required.sku.id_typed(),
                    required.quantity,
                    available,
                )
                .into());
            }
        }

        Ok(())
    }
}

impl<C, O, I> Activity<CartOperationRequest> for CheckAvailabilityActivity<C, O, I>
where
    C: CatalogService,
    O: OrderItemService,
    I: ContextualInventoryService,
{
    type Error = CartError;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn execute(
        &self,
        context: ProcessContext<CartOperationRequest>,
    ) -> Result<ProcessContext<CartOperationRequest>, CartError> {
        self.check(context.seed_data())?;
        Ok(context)
    }
}
