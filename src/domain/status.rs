use strum::{AsRefStr, Display, EnumString};

/// Fulfillment stage of an order.
///
/// Stages form a fixed pipeline; see [`OrderStatus::FLOW`]. The string form is
/// the snake_case name (`"out_for_delivery"`), used for parsing and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum OrderStatus {
    Inquiry,
    Confirmed,
    Baking,
    Ready,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    /// Every stage in pipeline order.
    pub const FLOW: [OrderStatus; 6] = [
        OrderStatus::Inquiry,
        OrderStatus::Confirmed,
        OrderStatus::Baking,
        OrderStatus::Ready,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    /// Zero-based index of this stage in [`OrderStatus::FLOW`].
    pub fn position(self) -> usize {
        match self {
            OrderStatus::Inquiry => 0,
            OrderStatus::Confirmed => 1,
            OrderStatus::Baking => 2,
            OrderStatus::Ready => 3,
            OrderStatus::OutForDelivery => 4,
            OrderStatus::Delivered => 5,
        }
    }

    /// The stage immediately after this one, or `None` once delivered.
    pub fn next(self) -> Option<OrderStatus> {
        Self::FLOW.get(self.position() + 1).copied()
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// Human-readable name shown on cards and in the detail sheet.
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Inquiry => "Inquiry",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Baking => "Baking",
            OrderStatus::Ready => "Ready",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
        }
    }
}

/// Successor of a stage given by name.
///
/// Unrecognized names have no successor, same as `delivered`.
pub fn next_status(raw: &str) -> Option<OrderStatus> {
    raw.parse::<OrderStatus>().ok().and_then(OrderStatus::next)
}
