#[macro_use]
mod macros;
pub mod order_client;

pub use order_client::OrderClient;
