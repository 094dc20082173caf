use chrono::{DateTime, Utc};
use strum::{AsRefStr, Display, EnumString};

use super::status::OrderStatus;

/// Payment state of an order. Unlike [`OrderStatus`] there is no ordering;
/// any value may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    Pending,
    Paid,
}

impl PaymentStatus {
    /// Badge text shown on a card.
    pub fn label(self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "UNPAID",
            PaymentStatus::Pending => "₹ PENDING",
            PaymentStatus::Paid => "PAID",
        }
    }
}

/// Represents a customer order on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub items: String,
    pub quantity: u32,
    pub amount: f64,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub deadline: DateTime<Utc>,
    pub notes: Option<String>,
    /// Reference to an attached proof-of-payment asset. Opaque to the engine.
    pub payment_screenshot: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a new order.
///
/// `quantity`, `amount` and `payment_status` fall back to defaults when unset;
/// `deadline` is required and its absence rejects the draft.
#[derive(Debug, Clone, Default)]
pub struct OrderDraft {
    pub customer_name: String,
    pub items: String,
    pub quantity: Option<u32>,
    pub amount: Option<f64>,
    pub payment_status: Option<PaymentStatus>,
    pub deadline: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub payment_screenshot: Option<String>,
    pub phone: Option<String>,
}

/// Payload for editing the free-form details of an existing order.
#[derive(Debug, Clone, Default)]
pub struct OrderPatch {
    pub notes: Option<String>,
    pub phone: Option<String>,
    pub payment_screenshot: Option<String>,
}

impl OrderDraft {
    pub fn new(
        customer_name: impl Into<String>,
        items: impl Into<String>,
        deadline: DateTime<Utc>,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            items: items.into(),
            deadline: Some(deadline),
            ..Self::default()
        }
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn payment_status(mut self, status: PaymentStatus) -> Self {
        self.payment_status = Some(status);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

impl OrderPatch {
    pub fn is_empty(&self) -> bool {
        self.notes.is_none() && self.phone.is_none() && self.payment_screenshot.is_none()
    }
}

impl Order {
    pub fn is_delivered(&self) -> bool {
        self.status == OrderStatus::Delivered
    }

    pub fn is_paid(&self) -> bool {
        self.payment_status == PaymentStatus::Paid
    }
}
