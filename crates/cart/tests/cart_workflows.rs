//! End-to-end tests of the add/update workflows over the in-memory collaborators.

use std::sync::{Arc, Mutex};

use storefront_cart::{
    AvailabilityConfig, CartError, CartOperationRequest, CheckAvailabilityActivity,
    OrderItemRequest, ValidateCartRequestActivity, add_item_workflow, update_item_workflow,
};
use storefront_catalog::{InMemoryCatalog, InventoryType, Product, ProductBundle, Sku, SkuBundleItem};
use storefront_core::{DomainError, DomainResult, OrderId, OrderItemId, ProductId, SkuId};
use storefront_inventory::{
    ContextualInventoryService, InMemoryInventory, InventoryContext, InventoryUnavailable,
};
use storefront_orders::{BundleOrderItem, DiscreteOrderItem, InMemoryOrderItems};

/// Wraps the in-memory ledger and records every quantity question.
#[derive(Default)]
struct RecordingInventory {
    ledger: InMemoryInventory,
    asked: Mutex<Vec<(SkuId, i64)>>,
}

impl RecordingInventory {
    fn asked(&self) -> Vec<(SkuId, i64)> {
        self.asked.lock().unwrap().clone()
    }
}

impl ContextualInventoryService for RecordingInventory {
    fn retrieve_quantity_available(
        &self,
        sku: &Sku,
        context: &InventoryContext,
    ) -> DomainResult<i64> {
        self.ledger.retrieve_quantity_available(sku, context)
    }

    fn is_available(
        &self,
        sku: &Sku,
        quantity: i64,
        context: &InventoryContext,
    ) -> DomainResult<bool> {
        self.asked.lock().unwrap().push((sku.id_typed(), quantity));
        self.ledger.is_available(sku, quantity, context)
    }
}

fn tracked(name: &str) -> Sku {
    Sku::new(SkuId::new(), name).with_inventory_type(InventoryType::CheckQuantity)
}

/// Two-component bundle (2 pots + 3 lids) sold through its own tracked sku.
struct Cookware {
    pot: Sku,
    lid: Sku,
    bundle_sku: Sku,
    catalog: Arc<InMemoryCatalog>,
    inventory: Arc<RecordingInventory>,
}

impl Cookware {
    fn new(use_item_inventory: Option<bool>) -> Self {
        storefront_observability::init_for_tests();

        let pot = tracked("Pot");
        let lid = tracked("Lid");
        let mut bundle = ProductBundle::new(ProductId::new(), "Cookware")
            .with_item(SkuBundleItem::new(pot.clone(), 2).unwrap())
            .with_item(SkuBundleItem::new(lid.clone(), 3).unwrap());
        if let Some(flag) = use_item_inventory {
            bundle = bundle.with_use_item_inventory(flag);
        }
        let bundle_sku = tracked("Cookware").with_default_product(Product::Bundle(bundle));

        let inventory = RecordingInventory::default();
        for sku in [&pot, &lid, &bundle_sku] {
            inventory.ledger.set_stock(sku.id_typed(), 100).unwrap();
        }

        let catalog = InMemoryCatalog::new()
            .with_sku(pot.clone())
            .with_sku(lid.clone())
            .with_sku(bundle_sku.clone());

        Self {
            pot,
            lid,
            bundle_sku,
            catalog: Arc::new(catalog),
            inventory: Arc::new(inventory),
        }
    }

    fn add(&self, config: AvailabilityConfig, quantity: i64) -> Result<(), CartError> {
        let workflow = add_item_workflow(
            Arc::clone(&self.catalog),
            InMemoryOrderItems::new(),
            Arc::clone(&self.inventory),
            config,
        );
        let request = CartOperationRequest::new(
            OrderId::new(),
            OrderItemRequest::add(self.bundle_sku.id_typed(), quantity),
        );
        workflow
            .process(request)
            .map(|_| ())
            .map_err(|e| e.into_cause())
    }
}

fn item_inventory() -> AvailabilityConfig {
    AvailabilityConfig::default().with_default_check_bundle_item_inventory(true)
}

#[test]
fn per_component_bundle_checks_multiplied_quantities() {
    let cookware = Cookware::new(Some(true));
    cookware.add(AvailabilityConfig::default(), 4).unwrap();

    assert_eq!(
        cookware.inventory.asked(),
        vec![(cookware.pot.id_typed(), 8), (cookware.lid.id_typed(), 12)]
    );
}

#[test]
fn bundle_level_checks_only_the_bundle_sku() {
    let cookware = Cookware::new(Some(false));
    cookware.add(item_inventory(), 4).unwrap();

    assert_eq!(
        cookware.inventory.asked(),
        vec![(cookware.bundle_sku.id_typed(), 4)]
    );
}

#[test]
fn unset_flag_follows_the_configured_default() {
    let cookware = Cookware::new(None);

    cookware.add(AvailabilityConfig::default(), 4).unwrap();
    assert_eq!(
        cookware.inventory.asked(),
        vec![(cookware.bundle_sku.id_typed(), 4)]
    );

    cookware.inventory.asked.lock().unwrap().clear();
    cookware.add(item_inventory(), 4).unwrap();
    assert_eq!(
        cookware.inventory.asked(),
        vec![(cookware.pot.id_typed(), 8), (cookware.lid.id_typed(), 12)]
    );
}

#[test]
fn short_component_fails_the_workflow_at_the_availability_activity() {
    let cookware = Cookware::new(Some(true));
    cookware.inventory.ledger.set_stock(cookware.lid.id_typed(), 10).unwrap();

    let workflow = add_item_workflow(
        Arc::clone(&cookware.catalog),
        InMemoryOrderItems::new(),
        Arc::clone(&cookware.inventory),
        AvailabilityConfig::default(),
    );
    let request = CartOperationRequest::new(
        OrderId::new(),
        OrderItemRequest::add(cookware.bundle_sku.id_typed(), 4),
    );

    let err = workflow.process(request).unwrap_err();
    assert_eq!(err.workflow(), "add_item");
    assert_eq!(err.activity(), "check_availability");
    assert_eq!(
        err.into_cause(),
        CartError::Unavailable(InventoryUnavailable::insufficient(
            cookware.lid.id_typed(),
            12,
            10
        ))
    );
}

#[test]
fn invalid_request_never_reaches_the_inventory() {
    let cookware = Cookware::new(Some(true));
    let workflow = add_item_workflow(
        Arc::clone(&cookware.catalog),
        InMemoryOrderItems::new(),
        Arc::clone(&cookware.inventory),
        AvailabilityConfig::default(),
    );
    assert_eq!(
        workflow.activity_names(),
        vec![
            ValidateCartRequestActivity::NAME,
            CheckAvailabilityActivity::<InMemoryCatalog, InMemoryOrderItems, InMemoryInventory>::NAME,
        ]
    );

    let request = CartOperationRequest::new(
        OrderId::new(),
        OrderItemRequest::update(OrderItemId::new(), 1),
    );
    let err = workflow.process(request).unwrap_err();
    assert_eq!(err.activity(), "validate_request");
    assert!(matches!(err.cause(), CartError::Domain(DomainError::Validation(_))));
    assert!(cookware.inventory.asked().is_empty());
}

#[test]
fn update_is_not_blocked_by_the_orders_own_reservation() {
    storefront_observability::init_for_tests();

    let mug = tracked("Mug");
    let order_id = OrderId::new();
    let item_id = OrderItemId::new();
    let inventory = Arc::new(InMemoryInventory::new());
    inventory.set_stock(mug.id_typed(), 5).unwrap();
    inventory.reserve(order_id, mug.id_typed(), 3).unwrap();
    inventory.reserve(OrderId::new(), mug.id_typed(), 1).unwrap();

    let order_items =
        InMemoryOrderItems::new().with_item(DiscreteOrderItem::new(item_id, order_id, mug.clone(), 3));
    let workflow = update_item_workflow(
        InMemoryCatalog::new(),
        order_items,
        Arc::clone(&inventory),
        AvailabilityConfig::default(),
    );

    // 5 on hand, 1 held by someone else: this order may go up to 4.
    let ok = CartOperationRequest::new(order_id, OrderItemRequest::update(item_id, 4));
    let context = workflow.process(ok.clone()).unwrap();
    assert_eq!(context.seed_data(), &ok);

    let too_many = CartOperationRequest::new(order_id, OrderItemRequest::update(item_id, 5));
    let err = workflow.process(too_many).unwrap_err().into_cause();
    assert_eq!(
        err.as_unavailable(),
        Some(&InventoryUnavailable::insufficient(mug.id_typed(), 5, 4))
    );
}

#[test]
fn update_of_bundle_item_with_unavailable_sku_fails_with_zero() {
    let cookware = Cookware::new(Some(true));
    let order_id = OrderId::new();
    let item_id = OrderItemId::new();
    let retired = cookware.bundle_sku.clone().with_available(false);
    let bundle = retired.bundle().cloned().unwrap();
    let order_items = InMemoryOrderItems::new().with_item(BundleOrderItem::new(
        item_id, order_id, retired.clone(), bundle, 1,
    ));

    let workflow = update_item_workflow(
        Arc::clone(&cookware.catalog),
        order_items,
        Arc::clone(&cookware.inventory),
        AvailabilityConfig::default(),
    );
    let err = workflow
        .process(CartOperationRequest::new(order_id, OrderItemRequest::update(item_id, 2)))
        .unwrap_err()
        .into_cause();

    assert_eq!(
        err,
        CartError::Unavailable(InventoryUnavailable::sku_unavailable(retired.id_typed(), 2))
    );
    assert!(cookware.inventory.asked().is_empty());
}

#[test]
fn workflow_can_be_shared_across_threads() {
    let cookware = Cookware::new(Some(true));
    let workflow = Arc::new(add_item_workflow(
        Arc::clone(&cookware.catalog),
        InMemoryOrderItems::new(),
        Arc::clone(&cookware.inventory),
        AvailabilityConfig::default(),
    ));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let workflow = Arc::clone(&workflow);
            let sku_id = cookware.bundle_sku.id_typed();
            std::thread::spawn(move || {
                workflow
                    .process(CartOperationRequest::new(
                        OrderId::new(),
                        OrderItemRequest::add(sku_id, 1),
                    ))
                    .is_ok()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
    assert_eq!(cookware.inventory.asked().len(), 8);
}
