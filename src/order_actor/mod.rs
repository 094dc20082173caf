//! Order command handling on top of the generic actor framework.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::validate_draft;
pub use error::*;
