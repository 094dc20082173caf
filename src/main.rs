use chrono::{Duration, Utc};
use tracing::{error, info, Instrument};

use bakery_board::{setup_tracing, BoardConfig, BoardSystem, Group, OrderDraft, PaymentStatus};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting bakery board");

    let system = BoardSystem::new(BoardConfig::from_env());
    let client = system.order_client.clone();
    let now = Utc::now();

    let span = tracing::info_span!("order_intake");
    let ids = async {
        let drafts = [
            OrderDraft::new("Asha", "Chocolate Cake", now + Duration::hours(3)).amount(650.0),
            OrderDraft::new("Ravi", "Cupcakes x12", now + Duration::hours(20)).amount(480.0).phone("98450 12345"),
            OrderDraft::new("Meera", "Fruit Cake", now + Duration::hours(72)).amount(900.0).notes("eggless"),
        ];
        let mut ids = Vec::new();
        for draft in drafts {
            ids.push(client.add_order(draft).await.map_err(|e| e.to_string())?.id);
        }
        Ok::<_, String>(ids)
    }
    .instrument(span)
    .await?;

    // Rejected on purpose: no customer name
    if let Err(e) = client.add_order(OrderDraft::new("", "Brownies x12", now + Duration::hours(5))).await {
        error!(error = %e, "Order intake failed (expected)");
    }

    let span = tracing::info_span!("kitchen_flow");
    async {
        client.advance_status(ids[0].clone()).await?;
        client.advance_status(ids[0].clone()).await?;
        client.update_payment_status(ids[0].clone(), PaymentStatus::Pending).await?;
        client.reclassify(ids[1].clone(), Group::Delivery).await?;
        client.attach_payment_screenshot(ids[1].clone(), "payments/ravi-upi.png").await?;
        client.update_payment_status(ids[1].clone(), PaymentStatus::Paid).await?;
        Ok::<_, bakery_board::OrderError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let board = client.board(Utc::now()).await.map_err(|e| e.to_string())?;
    for column in &board.columns {
        info!(group = column.group.label(), count = column.cards.len(), "Column");
        for card in &column.cards {
            info!(
                order_id = %card.order.id,
                customer = %card.order.customer_name,
                status = card.order.status.label(),
                urgency = %card.urgency,
                due = %card.deadline_label,
                payment = card.order.payment_status.label(),
                "Card"
            );
        }
    }
    info!(
        active = board.summary.active,
        overdue = board.summary.overdue,
        outstanding = board.summary.outstanding_amount,
        "Summary"
    );

    drop(client);
    system.shutdown().await?;

    info!("Bakery board stopped");
    Ok(())
}
