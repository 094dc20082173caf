//! Read side of the board: grouping, urgency, deadline labels and the column view.
//!
//! Everything here is a pure function of orders and an explicit `now`.

pub mod classifier;
pub mod labels;
pub mod view;

pub use classifier::*;
pub use labels::*;
pub use view::*;
