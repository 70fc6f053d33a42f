pub mod in_memory;

use crate::core::errors::CashoutError;
use crate::core::models::audit::AppLog;
use async_trait::async_trait;

/// Activity trail of ledger actions, separate from diagnostic tracing.
#[async_trait]
pub trait LoggingService: Send + Sync {
    async fn log_action(&self, action: &str, details: serde_json::Value) -> Result<(), CashoutError>;
    async fn get_logs(&self) -> Result<Vec<AppLog>, CashoutError>;
}
