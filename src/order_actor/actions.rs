use crate::board::Group;
use crate::domain::PaymentStatus;

/// Commands applied to a single existing order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrderAction {
    /// Moves one stage forward. Does nothing once delivered.
    Advance,
    /// Sets the payment status; every transition is allowed.
    SetPayment(PaymentStatus),
    /// Manual drop onto a column.
    ///
    /// Jumps to the column's entry stage unless the order is already in it.
    /// This is the only way to skip stages or move backwards.
    Reclassify(Group),
}
