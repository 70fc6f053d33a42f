mod engine_tests;

use crate::core::engine::to_cents;
use crate::core::models::settlement::{Balance, Transfer};
use crate::core::services::CashoutService;
use crate::infrastructure::logging::in_memory::InMemoryLogging;
use crate::infrastructure::storage::in_memory::InMemoryStorage;
use std::collections::HashMap;

pub fn create_test_service() -> CashoutService<InMemoryLogging, InMemoryStorage> {
    let storage = InMemoryStorage::new();
    let logging = InMemoryLogging::new();
    CashoutService::new(storage, logging, 8)
}

pub fn balances(pairs: &[(&str, f64)]) -> Vec<Balance> {
    pairs.iter().map(|(player, amount)| Balance::new(*player, *amount)).collect()
}

pub fn transfer(from: &str, to: &str, amount: f64) -> Transfer {
    Transfer {
        from: from.to_string(),
        to: to.to_string(),
        amount,
    }
}

/// Credits minus debits per player, in cents.
pub fn net_cents(transfers: &[Transfer]) -> HashMap<String, i64> {
    let mut net = HashMap::new();
    for t in transfers {
        *net.entry(t.to.clone()).or_insert(0) += to_cents(t.amount);
        *net.entry(t.from.clone()).or_insert(0) -= to_cents(t.amount);
    }
    net
}
