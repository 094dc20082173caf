//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_action`] to assert behavior.

use crate::actor_framework::{Applied, Entity, ResourceClient, ResourceRequest, Snapshot};
use tokio::sync::{mpsc, oneshot};

type Reply<T, E> = oneshot::Sender<Result<T, E>>;

/// Creates a mock client and a receiver for asserting requests.
///
/// The test plays the actor: it reads requests off `receiver` and answers them,
/// so success, failure and ordering are fully scripted.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreatePayload, Reply<T, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Reply<Option<T>, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<Reply<Snapshot<T>, T::Error>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Reply<Applied<T>, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Patch, Reply<Applied<T>, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update { id, patch, respond_to }) => Some((id, patch, respond_to)),
        _ => None,
    }
}

/// True when no request is waiting. Use after the client call has returned.
pub fn is_idle<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> bool {
    receiver.try_recv().is_err()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Order, OrderDraft};
    use chrono::{TimeZone, Utc};

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let deadline = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

        let create_task = tokio::spawn(async move {
            client.create(OrderDraft::new("Test", "Cookies x24", deadline)).await
        });

        let (payload, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(payload.customer_name, "Test");
        let order = Order::from_create("order_1".to_string(), payload, deadline).unwrap();
        responder.send(Ok(order)).unwrap();

        let result = create_task.await.unwrap().unwrap();
        assert_eq!(result.id, "order_1");
    }
}
