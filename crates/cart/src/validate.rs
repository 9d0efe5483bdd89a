use storefront_core::DomainError;
use storefront_workflow::{Activity, ProcessContext};

use crate::error::CartError;
use crate::request::CartOperationRequest;

/// Which cart operation a workflow performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Add,
    Update,
}

/// Rejects requests whose shape does not match the workflow they were sent to.
///
/// Quantities are not validated here.
#[derive(Debug, Clone, Copy)]
pub struct ValidateCartRequestActivity {
    kind: RequestKind,
}

impl ValidateCartRequestActivity {
    pub const NAME: &'static str = "validate_request";

    pub fn new(kind: RequestKind) -> Self {
        Self { kind }
    }
}

impl Activity<CartOperationRequest> for ValidateCartRequestActivity {
    type Error = CartError;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn execute(
        &self,
        context: ProcessContext<CartOperationRequest>,
    ) -> Result<ProcessContext<CartOperationRequest>, CartError> {
        let request = &context.seed_data().item_request;
        match self.kind {
            RequestKind::Add => {
                if request.order_item_id.is_some() {
                    return Err(DomainError::validation(
                        "add request must not reference an existing order item",
                    )
                    .into());
                }
                if request.sku_id.is_none() {
                    return Err(DomainError::validation("add request requires a sku id").into());
                }
            }
            RequestKind::Update => {
                if request.order_item_id.is_none() {
                    return Err(
                        DomainError::validation("update request requires an order item id").into(),
                    );
                }
            }
        }
        Ok(context)
    }
}
