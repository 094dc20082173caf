use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur during order operations.
///
/// `NotFound` and `GroupNotFound` are both "unknown reference" failures; see
/// [`OrderError::is_not_found`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),
    #[error("Group not found: {0}")]
    GroupNotFound(String),
    #[error("Invalid order draft: {0}")]
    InvalidDraft(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl OrderError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, OrderError::NotFound(_) | OrderError::GroupNotFound(_))
    }
}

impl From<FrameworkError> for OrderError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
