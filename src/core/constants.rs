pub const PLAYER_ADDED: &str = "PLAYER_ADDED";
pub const PLAYER_REMOVED: &str = "PLAYER_REMOVED";
pub const LEDGER_CLEARED: &str = "LEDGER_CLEARED";
pub const SETTLEMENT_CALCULATED: &str = "SETTLEMENT_CALCULATED";

pub const MAX_NAME_LENGTH: usize = 64;
pub const MAX_AMOUNT: f64 = 1_000_000.0;
