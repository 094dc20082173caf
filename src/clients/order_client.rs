use chrono::{DateTime, Utc};
use tracing::{debug, error, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::board::{Board, Group};
use crate::domain::{Order, OrderDraft, OrderPatch, PaymentStatus};
use crate::order_actor::{validate_draft, OrderAction, OrderError};

/// Client for the order board actor.
///
/// Every command returns the order as stored after the command ran. Callers
/// that keep a selected/open order should replace their copy with it.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl_basic_client!(OrderClient, Order, OrderError, order);

impl OrderClient {
    #[instrument(skip(self), fields(customer = %draft.customer_name))]
    pub async fn add_order(&self, draft: OrderDraft) -> Result<Order, OrderError> {
        if let Err(e) = validate_draft(&draft) {
            error!(error = %e, "Draft rejected");
            return Err(e);
        }
        debug!("Sending request");
        let order = self.inner.create(draft).await?;
        info!(order_id = %order.id, deadline = %order.deadline, "Order created");
        Ok(order)
    }

    #[instrument(skip(self))]
    pub async fn advance_status(&self, id: String) -> Result<Order, OrderError> {
        debug!("Sending request");
        let applied = self.inner.perform_action(id, OrderAction::Advance).await?;
        if applied.changed {
            info!(status = %applied.item.status, "Order advanced");
        } else {
            debug!("Order already delivered");
        }
        Ok(applied.item)
    }

    #[instrument(skip(self))]
    pub async fn update_payment_status(&self, id: String, status: PaymentStatus) -> Result<Order, OrderError> {
        debug!("Sending request");
        let applied = self.inner.perform_action(id, OrderAction::SetPayment(status)).await?;
        info!(payment = %applied.item.payment_status, changed = applied.changed, "Payment updated");
        Ok(applied.item)
    }

    /// Drag-and-drop onto a column.
    #[instrument(skip(self))]
    pub async fn reclassify(&self, id: String, group: Group) -> Result<Order, OrderError> {
        debug!("Sending request");
        let applied = self.inner.perform_action(id, OrderAction::Reclassify(group)).await?;
        if applied.changed {
            info!(status = %applied.item.status, "Order moved by hand");
        } else {
            debug!("Order already in target group");
        }
        Ok(applied.item)
    }

    /// Like [`OrderClient::reclassify`], with the column given by name.
    #[instrument(skip(self))]
    pub async fn reclassify_to(&self, id: String, group: &str) -> Result<Order, OrderError> {
        let group = group.parse::<Group>().map_err(|_| {
            error!("Unknown group");
            OrderError::GroupNotFound(group.to_string())
        })?;
        self.reclassify(id, group).await
    }

    /// An empty patch only re-reads the order.
    #[instrument(skip(self))]
    pub async fn update_details(&self, id: String, patch: OrderPatch) -> Result<Order, OrderError> {
        if patch.is_empty() {
            debug!("Empty patch, fetching current order");
            return self.get_order(id.clone()).await?.ok_or(OrderError::NotFound(id));
        }
        debug!("Sending request");
        let applied = self.inner.update(id, patch).await?;
        info!(changed = applied.changed, "Order details updated");
        Ok(applied.item)
    }

    pub async fn attach_payment_screenshot(
        &self,
        id: String,
        reference: impl Into<String>,
    ) -> Result<Order, OrderError> {
        let patch = OrderPatch { payment_screenshot: Some(reference.into()), ..OrderPatch::default() };
        self.update_details(id, patch).await
    }

    /// Fresh column view of the collection as seen at `now`.
    #[instrument(skip(self))]
    pub async fn board(&self, now: DateTime<Utc>) -> Result<Board, OrderError> {
        let snapshot = self.list_orders().await?;
        let board = Board::build(&snapshot.items, now);
        debug!(version = snapshot.version, active = board.summary.active, "Board built");
        Ok(board)
    }
}
