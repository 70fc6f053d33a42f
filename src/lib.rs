pub mod api;
pub mod config;
pub mod core;
pub mod infrastructure;
pub mod visualization;

pub use crate::core::engine::SettlementEngine;
pub use crate::core::errors::CashoutError;
pub use crate::core::models::settlement::{Balance, Transfer};
pub use crate::core::services::CashoutService;
pub use visualization::Visualization;

#[cfg(test)]
mod tests;
