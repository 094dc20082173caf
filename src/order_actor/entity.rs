use chrono::{DateTime, Utc};

use super::actions::OrderAction;
use super::error::OrderError;
use crate::actor_framework::Entity;
use crate::domain::{Order, OrderDraft, OrderPatch, OrderStatus};

/// Checks the minimal field constraints for a new order and returns its deadline.
pub fn validate_draft(draft: &OrderDraft) -> Result<DateTime<Utc>, OrderError> {
    if draft.customer_name.trim().is_empty() {
        return Err(OrderError::InvalidDraft("customer name is required".to_string()));
    }
    if draft.items.trim().is_empty() {
        return Err(OrderError::InvalidDraft("items are required".to_string()));
    }
    if draft.quantity == Some(0) {
        return Err(OrderError::InvalidDraft("quantity must be at least 1".to_string()));
    }
    if let Some(amount) = draft.amount {
        if !amount.is_finite() || amount < 0.0 {
            return Err(OrderError::InvalidDraft(format!("amount must be non-negative, got {amount}")));
        }
    }
    draft
        .deadline
        .ok_or_else(|| OrderError::InvalidDraft("deadline is required".to_string()))
}

impl Entity for Order {
    type Id = String;
    type CreatePayload = OrderDraft;
    type Patch = OrderPatch;
    type Action = OrderAction;
    type Error = OrderError;

    fn id(&self) -> &String { &self.id }

    /// Creates a new Order from a validated draft.
    ///
    /// # Notes
    /// Every order enters the pipeline at `inquiry`. Payment starts `unpaid`
    /// unless the draft says otherwise.
    fn from_create(id: String, draft: OrderDraft, created_at: DateTime<Utc>) -> Result<Self, OrderError> {
        let deadline = validate_draft(&draft)?;

        Ok(Self {
            id,
            customer_name: draft.customer_name,
            items: draft.items,
            quantity: draft.quantity.unwrap_or(1),
            amount: draft.amount.unwrap_or(0.0),
            status: OrderStatus::Inquiry,
            payment_status: draft.payment_status.unwrap_or_default(),
            deadline,
            notes: draft.notes,
            payment_screenshot: draft.payment_screenshot,
            phone: draft.phone,
            created_at,
        })
    }

    /// Updates notes, phone and the payment screenshot reference.
    ///
    /// Fields left as `None` in the patch are kept.
    fn on_update(&mut self, patch: OrderPatch) -> Result<bool, OrderError> {
        let mut changed = false;
        for (field, value) in [
            (&mut self.notes, patch.notes),
            (&mut self.phone, patch.phone),
            (&mut self.payment_screenshot, patch.payment_screenshot),
        ] {
            if value.is_some() && *field != value {
                *field = value;
                changed = true;
            }
        }
        Ok(changed)
    }

    fn handle_action(&mut self, action: OrderAction) -> Result<bool, OrderError> {
        match action {
            OrderAction::Advance => match self.status.next() {
                Some(next) => {
                    self.status = next;
                    Ok(true)
                }
                None => Ok(false),
            },
            OrderAction::SetPayment(status) => {
                let changed = self.payment_status != status;
                self.payment_status = status;
                Ok(changed)
            }
            OrderAction::Reclassify(group) => {
                if group.contains(self.status) {
                    return Ok(false);
                }
                self.status = group.entry_status();
                Ok(true)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Group;
    use crate::domain::PaymentStatus;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
    }

    fn draft() -> OrderDraft {
        OrderDraft::new("Priya", "Red Velvet Cake", now() + Duration::hours(6))
    }

    fn created(status: OrderStatus) -> Order {
        let mut order = Order::from_create("order_1".to_string(), draft(), now()).unwrap();
        order.status = status;
        order
    }

    #[test]
    fn create_applies_defaults() {
        let order = Order::from_create("order_7".to_string(), draft(), now()).unwrap();
        assert_eq!(order.id, "order_7");
        assert_eq!(order.status, OrderStatus::Inquiry);
        assert_eq!(order.payment_status, PaymentStatus::Unpaid);
        assert_eq!(order.quantity, 1);
        assert_eq!(order.amount, 0.0);
        assert_eq!(order.created_at, now());
    }

    #[test]
    fn create_keeps_payment_override() {
        let draft = draft().payment_status(PaymentStatus::Paid).quantity(12).amount(850.0);
        let order = Order::from_create("order_1".to_string(), draft, now()).unwrap();
        assert_eq!(order.payment_status, PaymentStatus::Paid);
        assert_eq!(order.quantity, 12);
        assert_eq!(order.amount, 850.0);
    }

    #[test]
    fn invalid_drafts_are_rejected() {
        let cases = [
            OrderDraft { customer_name: "  ".into(), ..draft() },
            OrderDraft { items: String::new(), ..draft() },
            draft().quantity(0),
            draft().amount(-1.0),
            draft().amount(f64::NAN),
            OrderDraft { deadline: None, ..draft() },
        ];
        for case in cases {
            let result = Order::from_create("order_1".to_string(), case.clone(), now());
            assert!(matches!(result, Err(OrderError::InvalidDraft(_))), "accepted {case:?}");
        }
    }

    #[test]
    fn validation_yields_the_deadline() {
        let due = now() + Duration::hours(6);
        assert_eq!(validate_draft(&draft()), Ok(due));
        assert_eq!(
            validate_draft(&OrderDraft { deadline: None, ..draft() }),
            Err(OrderError::InvalidDraft("deadline is required".to_string()))
        );
    }

    #[test]
    fn past_deadline_is_accepted() {
        let draft = OrderDraft::new("Sam", "Banana Bread", now() - Duration::hours(1));
        assert!(Order::from_create("order_1".to_string(), draft, now()).is_ok());
    }

    #[test]
    fn advance_is_single_step_and_stops_at_delivered() {
        let mut order = created(OrderStatus::Ready);
        assert_eq!(order.handle_action(OrderAction::Advance), Ok(true));
        assert_eq!(order.status, OrderStatus::OutForDelivery);
        assert_eq!(order.handle_action(OrderAction::Advance), Ok(true));
        assert_eq!(order.status, OrderStatus::Delivered);

        let before = order.clone();
        assert_eq!(order.handle_action(OrderAction::Advance), Ok(false));
        assert_eq!(order, before);
    }

    #[test]
    fn payment_can_go_anywhere() {
        let mut order = created(OrderStatus::Confirmed);
        order.handle_action(OrderAction::SetPayment(PaymentStatus::Paid)).unwrap();
        assert_eq!(order.handle_action(OrderAction::SetPayment(PaymentStatus::Unpaid)), Ok(true));
        assert_eq!(order.payment_status, PaymentStatus::Unpaid);
        assert_eq!(order.handle_action(OrderAction::SetPayment(PaymentStatus::Unpaid)), Ok(false));
    }

    #[test]
    fn reclassify_into_own_group_is_noop() {
        let mut order = created(OrderStatus::OutForDelivery);
        let before = order.clone();
        assert_eq!(order.handle_action(OrderAction::Reclassify(Group::Delivery)), Ok(false));
        assert_eq!(order, before);
    }

    #[test]
    fn reclassify_jumps_to_entry_status() {
        let mut order = created(OrderStatus::Inquiry);
        assert_eq!(order.handle_action(OrderAction::Reclassify(Group::Delivery)), Ok(true));
        assert_eq!(order.status, OrderStatus::Ready);

        // Backwards is allowed for manual drops.
        assert_eq!(order.handle_action(OrderAction::Reclassify(Group::OrdersIn)), Ok(true));
        assert_eq!(order.status, OrderStatus::Inquiry);

        let mut done = created(OrderStatus::Delivered);
        done.handle_action(OrderAction::Reclassify(Group::Baking)).unwrap();
        assert_eq!(done.status, OrderStatus::Baking);
    }

    #[test]
    fn patch_only_touches_given_fields() {
        let mut order = created(OrderStatus::Baking);
        order.notes = Some("less sugar".into());

        let patch = OrderPatch { payment_screenshot: Some("upi-2231.png".into()), ..OrderPatch::default() };
        assert_eq!(order.on_update(patch), Ok(true));
        assert_eq!(order.payment_screenshot.as_deref(), Some("upi-2231.png"));
        assert_eq!(order.notes.as_deref(), Some("less sugar"));

        assert_eq!(order.on_update(OrderPatch::default()), Ok(false));
    }
}
