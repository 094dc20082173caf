use std::fmt::{Debug, Display};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use crate::clock::Clock;

// =============================================================================
// 1. THE ABSTRACTION (Entity trait, hooks and actions)
// =============================================================================

/// Errors raised by the actor plumbing itself, before any entity logic runs.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: PartialEq + Clone + Send + Sync + Display + Debug;
    type CreatePayload: Send + Debug;
    type Patch: Send + Debug;
    type Action: Send + Debug;
    type Error: std::error::Error + From<FrameworkError> + Send + 'static;

    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from a fresh ID, the payload and the creation time
    fn from_create(
        id: Self::Id,
        payload: Self::CreatePayload,
        created_at: DateTime<Utc>,
    ) -> Result<Self, Self::Error>;

    /// Apply a patch. Returns whether anything changed.
    fn on_update(&mut self, patch: Self::Patch) -> Result<bool, Self::Error>;

    /// Handle a custom domain-specific action. Returns whether anything changed.
    fn handle_action(&mut self, action: Self::Action) -> Result<bool, Self::Error>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T, E> = oneshot::Sender<Result<T, E>>;

/// Result of a mutating request: the record as stored afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Applied<T> {
    pub item: T,
    pub changed: bool,
}

/// Point-in-time copy of the whole collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<T> {
    /// Bumped once per request that changed the collection.
    pub version: u64,
    pub items: Vec<T>,
}

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        payload: T::CreatePayload,
        respond_to: Response<T, T::Error>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>, T::Error>,
    },
    List {
        respond_to: Response<Snapshot<T>, T::Error>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<Applied<T>, T::Error>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<Applied<T>, T::Error>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Sole owner of a collection of entities. Requests are applied one at a time
/// in arrival order, and a request that fails leaves the collection untouched.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    /// Newest first.
    store: Vec<T>,
    version: u64,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
    clock: Arc<dyn Clock>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
        clock: Arc<dyn Clock>,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Vec::new(),
            version: 0,
            next_id_fn: Box::new(next_id_fn),
            clock,
        };
        (actor, ResourceClient::new(sender))
    }

    pub async fn run(mut self) {
        info!(entity = std::any::type_name::<T>(), "ResourceActor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { payload, respond_to } => {
                    let _ = respond_to.send(self.handle_create(payload));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.iter().find(|item| item.id() == &id).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let _ = respond_to.send(Ok(Snapshot {
                        version: self.version,
                        items: self.store.clone(),
                    }));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    let _ = respond_to.send(self.apply(id, |item| item.on_update(patch)));
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let _ = respond_to.send(self.apply(id, |item| item.handle_action(action)));
                }
            }
        }
        info!(entity = std::any::type_name::<T>(), items = self.store.len(), "ResourceActor stopped");
    }

    fn handle_create(&mut self, payload: T::CreatePayload) -> Result<T, T::Error> {
        // Ids are drawn even for rejected payloads; gaps are fine, reuse is not.
        let id = (self.next_id_fn)();
        let item = T::from_create(id, payload, self.clock.now())?;
        self.store.insert(0, item.clone());
        self.version += 1;
        debug!(id = %item.id(), version = self.version, "Item created");
        Ok(item)
    }

    /// Runs `mutate` on a copy and commits it only on success.
    fn apply(
        &mut self,
        id: T::Id,
        mutate: impl FnOnce(&mut T) -> Result<bool, T::Error>,
    ) -> Result<Applied<T>, T::Error> {
        let Some(slot) = self.store.iter_mut().find(|item| item.id() == &id) else {
            warn!(id = %id, "Item not found");
            return Err(FrameworkError::NotFound(id.to_string()).into());
        };

        let mut draft = slot.clone();
        let changed = mutate(&mut draft)?;
        if changed {
            *slot = draft;
            self.version += 1;
        }
        debug!(id = %id, changed, version = self.version, "Request applied");
        Ok(Applied { item: slot.clone(), changed })
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, payload: T::CreatePayload) -> Result<T, T::Error> {
        self.request(|respond_to| ResourceRequest::Create { payload, respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, T::Error> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn list(&self) -> Result<Snapshot<T>, T::Error> {
        self.request(|respond_to| ResourceRequest::List { respond_to }).await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<Applied<T>, T::Error> {
        self.request(|respond_to| ResourceRequest::Update { id, patch, respond_to }).await
    }

    pub async fn perform_action(&self, id: T::Id, action: T::Action) -> Result<Applied<T>, T::Error> {
        self.request(|respond_to| ResourceRequest::Action { id, action, respond_to }).await
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R, T::Error>) -> ResourceRequest<T>,
    ) -> Result<R, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
