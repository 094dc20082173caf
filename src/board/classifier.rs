use chrono::{DateTime, Duration, Utc};
use strum::{AsRefStr, Display, EnumString};

use crate::domain::{Order, OrderStatus};

/// Hours-until-deadline at or below which an order is [`Urgency::Urgent`].
pub const URGENT_WITHIN_HOURS: i64 = 4;
/// Hours-until-deadline at or below which an order is [`Urgency::Soon`].
pub const SOON_WITHIN_HOURS: i64 = 24;

/// Board column. Membership depends on status alone, never on the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Group {
    OrdersIn,
    Baking,
    Delivery,
    Done,
}

impl Group {
    /// Columns in display order.
    pub const ALL: [Group; 4] = [Group::OrdersIn, Group::Baking, Group::Delivery, Group::Done];

    /// The group a stage is shown in.
    pub fn of(status: OrderStatus) -> Group {
        match status {
            OrderStatus::Inquiry | OrderStatus::Confirmed => Group::OrdersIn,
            OrderStatus::Baking => Group::Baking,
            OrderStatus::Ready | OrderStatus::OutForDelivery => Group::Delivery,
            OrderStatus::Delivered => Group::Done,
        }
    }

    pub fn statuses(self) -> &'static [OrderStatus] {
        match self {
            Group::OrdersIn => &[OrderStatus::Inquiry, OrderStatus::Confirmed],
            Group::Baking => &[OrderStatus::Baking],
            Group::Delivery => &[OrderStatus::Ready, OrderStatus::OutForDelivery],
            Group::Done => &[OrderStatus::Delivered],
        }
    }

    pub fn contains(self, status: OrderStatus) -> bool {
        Group::of(status) == self
    }

    /// Stage an order lands in when dropped onto this column.
    pub fn entry_status(self) -> OrderStatus {
        self.statuses()[0]
    }

    pub fn label(self) -> &'static str {
        match self {
            Group::OrdersIn => "Orders In",
            Group::Baking => "Baking",
            Group::Delivery => "Delivery",
            Group::Done => "Done",
        }
    }
}

/// Styling tier derived only from time-to-deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Urgency {
    Urgent,
    Soon,
    Normal,
}

pub fn group_of(order: &Order) -> Group {
    Group::of(order.status)
}

/// Urgency of a deadline as seen at `now`. Overdue deadlines are urgent.
pub fn urgency_level(deadline: DateTime<Utc>, now: DateTime<Utc>) -> Urgency {
    let remaining = deadline - now;
    if remaining <= Duration::hours(URGENT_WITHIN_HOURS) {
        Urgency::Urgent
    } else if remaining <= Duration::hours(SOON_WITHIN_HOURS) {
        Urgency::Soon
    } else {
        Urgency::Normal
    }
}
