//! # Bakery order board
//!
//! Classification and transition engine for a bakery's order board.
//!
//! - **Domain types** - [`Order`], [`OrderDraft`], [`OrderStatus`] and the fixed pipeline
//! - **Classifier** - [`Group`], [`Urgency`] and [`DeadlineLabel`], pure functions of `(order, now)`
//! - **Command processing** - a [`ResourceActor`](actor_framework::ResourceActor) owns the
//!   collection and applies commands one at a time; [`OrderClient`] is the handle to it
//! - **System** - [`BoardSystem`] starts and stops the actor, [`setup_tracing`] configures logging
//!
//! ```no_run
//! # async fn demo() -> Result<(), bakery_board::OrderError> {
//! use bakery_board::{BoardConfig, BoardSystem, OrderDraft};
//!
//! let system = BoardSystem::new(BoardConfig::default());
//! let deadline = chrono::Utc::now() + chrono::Duration::hours(6);
//! let order = system.order_client.add_order(OrderDraft::new("Asha", "Vanilla Cake", deadline)).await?;
//! let order = system.order_client.advance_status(order.id).await?;
//! let board = system.order_client.board(chrono::Utc::now()).await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod board;
pub mod clients;
pub mod clock;
pub mod domain;
pub mod order_actor;

#[cfg(test)]
mod mock_framework;

pub use app_system::{setup_tracing, BoardConfig, BoardSystem};
pub use board::{Board, DeadlineLabel, Group, Urgency};
pub use clients::OrderClient;
pub use domain::{Order, OrderDraft, OrderPatch, OrderStatus, PaymentStatus};
pub use order_actor::OrderError;
