use chrono::{DateTime, Utc};

use super::classifier::{urgency_level, Group, Urgency};
use super::labels::{deadline_label, DeadlineLabel};
use crate::domain::{Order, OrderStatus};

/// An order together with everything derived from it at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub order: Order,
    pub urgency: Urgency,
    pub deadline_label: DeadlineLabel,
    pub next_status: Option<OrderStatus>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub group: Group,
    /// Earliest deadline first.
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoardSummary {
    /// Orders not yet delivered.
    pub active: usize,
    /// Undelivered orders past their deadline.
    pub overdue: usize,
    /// Amount still owed on undelivered orders that are not paid.
    pub outstanding_amount: f64,
}

/// Column view of the order collection as seen at `now`.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    pub now: DateTime<Utc>,
    pub columns: Vec<Column>,
    pub summary: BoardSummary,
}

impl Card {
    pub fn new(order: Order, now: DateTime<Utc>) -> Self {
        Self {
            urgency: urgency_level(order.deadline, now),
            deadline_label: deadline_label(order.deadline, now),
            next_status: order.status.next(),
            order,
        }
    }
}

impl Board {
    /// Groups `orders` into columns. Ties on deadline keep collection order.
    pub fn build(orders: &[Order], now: DateTime<Utc>) -> Self {
        let mut columns: Vec<Column> = Group::ALL
            .into_iter()
            .map(|group| Column { group, cards: Vec::new() })
            .collect();
        let mut summary = BoardSummary::default();

        for order in orders {
            let card = Card::new(order.clone(), now);
            if !order.is_delivered() {
                summary.active += 1;
                if card.deadline_label.is_overdue() {
                    summary.overdue += 1;
                }
                if !order.is_paid() {
                    summary.outstanding_amount += order.amount;
                }
            }
            let group = Group::of(order.status);
            if let Some(column) = columns.iter_mut().find(|c| c.group == group) {
                column.cards.push(card);
            }
        }

        for column in &mut columns {
            column.cards.sort_by_key(|card| card.order.deadline);
        }

        Self { now, columns, summary }
    }

    pub fn column(&self, group: Group) -> Option<&Column> {
        self.columns.iter().find(|c| c.group == group)
    }

    /// Order ids of one column in display order.
    pub fn ids_in(&self, group: Group) -> Vec<&str> {
        self.column(group)
            .map(|c| c.cards.iter().map(|card| card.order.id.as_str()).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PaymentStatus;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
    }

    fn order(id: &str, status: OrderStatus, due_in: Duration, amount: f64) -> Order {
        Order {
            id: id.to_string(),
            customer_name: format!("customer {id}"),
            items: "Chocolate Cake".to_string(),
            quantity: 1,
            amount,
            status,
            payment_status: PaymentStatus::Unpaid,
            deadline: now() + due_in,
            notes: None,
            payment_screenshot: None,
            phone: None,
            created_at: now() - Duration::days(1),
        }
    }

    #[test]
    fn columns_sorted_by_deadline() {
        let orders = vec![
            order("a", OrderStatus::Inquiry, Duration::hours(30), 10.0),
            order("b", OrderStatus::Confirmed, Duration::hours(2), 10.0),
            order("c", OrderStatus::Baking, Duration::hours(5), 10.0),
            order("d", OrderStatus::Inquiry, Duration::hours(10), 10.0),
        ];
        let board = Board::build(&orders, now());

        assert_eq!(board.ids_in(Group::OrdersIn), vec!["b", "d", "a"]);
        assert_eq!(board.ids_in(Group::Baking), vec!["c"]);
        assert!(board.ids_in(Group::Delivery).is_empty());
        assert_eq!(
            board.columns.iter().map(|c| c.group).collect::<Vec<_>>(),
            Group::ALL.to_vec()
        );
    }

    #[test]
    fn equal_deadlines_keep_collection_order() {
        let orders = vec![
            order("first", OrderStatus::Ready, Duration::hours(3), 0.0),
            order("second", OrderStatus::OutForDelivery, Duration::hours(3), 0.0),
            order("third", OrderStatus::Ready, Duration::hours(3), 0.0),
        ];
        let board = Board::build(&orders, now());
        assert_eq!(board.ids_in(Group::Delivery), vec!["first", "second", "third"]);
    }

    #[test]
    fn earliest_new_order_goes_to_front_of_its_column_only() {
        let mut orders = vec![
            order("a", OrderStatus::Inquiry, Duration::hours(5), 0.0),
            order("b", OrderStatus::Baking, Duration::hours(1), 0.0),
        ];
        let before = Board::build(&orders, now());

        orders.insert(0, order("new", OrderStatus::Inquiry, Duration::minutes(30), 0.0));
        let after = Board::build(&orders, now());

        assert_eq!(after.ids_in(Group::OrdersIn), vec!["new", "a"]);
        assert_eq!(after.column(Group::Baking), before.column(Group::Baking));
    }

    #[test]
    fn cards_carry_derived_fields() {
        let orders = vec![order("late", OrderStatus::Baking, Duration::minutes(-5), 0.0)];
        let board = Board::build(&orders, now());
        let card = &board.column(Group::Baking).unwrap().cards[0];

        assert_eq!(card.urgency, Urgency::Urgent);
        assert_eq!(card.deadline_label, DeadlineLabel::Overdue);
        assert_eq!(card.next_status, Some(OrderStatus::Ready));
    }

    #[test]
    fn summary_counts_active_and_outstanding() {
        let mut paid = order("paid", OrderStatus::Baking, Duration::hours(3), 500.0);
        paid.payment_status = PaymentStatus::Paid;
        let orders = vec![
            order("late", OrderStatus::Confirmed, Duration::hours(-1), 250.0),
            paid,
            order("done", OrderStatus::Delivered, Duration::hours(-10), 900.0),
            order("pending", OrderStatus::Ready, Duration::hours(8), 120.5),
        ];
        let summary = Board::build(&orders, now()).summary;

        assert_eq!(summary.active, 3);
        assert_eq!(summary.overdue, 1);
        assert_eq!(summary.outstanding_amount, 370.5);
    }
}
