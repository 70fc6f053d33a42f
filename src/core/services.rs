use crate::core::constants::{
    LEDGER_CLEARED, MAX_AMOUNT, MAX_NAME_LENGTH, PLAYER_ADDED, PLAYER_REMOVED, SETTLEMENT_CALCULATED,
};
use crate::core::engine::{MAX_BALANCE, SettlementEngine, from_cents, is_settleable, to_cents};
use crate::core::errors::CashoutError;
use crate::core::models::{
    audit::AppLog,
    player::Player,
    settlement::{Balance, SettlementOutcome, SettlementSummary},
};
use crate::core::report;
use crate::infrastructure::logging::LoggingService;
use crate::infrastructure::storage::Storage;
use chrono::Utc;
use serde_json::json;
use std::collections::HashSet;
use tracing::info;
use uuid::Uuid;

pub struct CashoutService<L: LoggingService, S: Storage> {
    storage: S,
    logging: L,
    max_players: usize,
}

impl<L: LoggingService, S: Storage> CashoutService<L, S> {
    pub fn new(storage: S, logging: L, max_players: usize) -> Self {
        CashoutService {
            storage,
            logging,
            max_players,
        }
    }

    fn validate_string_input(&self, field: &str, value: &str, max_length: usize) -> Result<(), CashoutError> {
        if value.trim().is_empty() {
            return Err(CashoutError::invalid(
                field,
                format!("Invalid {}", field),
                format!("{} is required", field),
            ));
        }
        if value.chars().count() > max_length {
            return Err(CashoutError::invalid(
                field,
                format!("{} Too Long", field),
                format!("{} cannot exceed {} characters", field, max_length),
            ));
        }
        if value.chars().any(|c| c.is_control() || "<>{}[]".contains(c)) {
            return Err(CashoutError::invalid(
                field,
                format!("Invalid {}", field),
                format!("{} contains invalid characters", field),
            ));
        }
        Ok(())
    }

    fn validate_amount_input(&self, field: &str, amount: f64) -> Result<(), CashoutError> {
        if !amount.is_finite() {
            return Err(CashoutError::invalid(
                field,
                "Invalid Amount",
                format!("{} must be a finite number", field),
            ));
        }
        if amount < 0.0 {
            return Err(CashoutError::invalid(
                field,
                "Invalid Amount",
                format!("{} cannot be negative", field),
            ));
        }
        if amount > MAX_AMOUNT {
            return Err(CashoutError::invalid(
                field,
                "Amount Too Large",
                format!("{} cannot exceed 1,000,000", field),
            ));
        }
        let scaled = amount * 100.0;
        if (scaled - scaled.round()).abs() > 1e-6 {
            return Err(CashoutError::invalid(
                field,
                "Invalid Amount",
                format!("{} cannot have more than 2 decimal places", field),
            ));
        }
        Ok(())
    }

    pub async fn add_player(&self, name: String, buy_in: f64, cash_out: f64) -> Result<Player, CashoutError> {
        let name = name.trim().to_string();
        self.validate_string_input("name", &name, MAX_NAME_LENGTH)?;
        self.validate_amount_input("buy_in", buy_in)?;
        self.validate_amount_input("cash_out", cash_out)?;

        let player = Player {
            id: Uuid::new_v4().to_string(),
            name,
            buy_in,
            cash_out,
            joined_at: Utc::now(),
        };
        self.storage.insert_player(player.clone(), self.max_players).await?;
        info!(player = %player.name, net_gain = player.net_gain(), "Player added");

        self.logging
            .log_action(
                PLAYER_ADDED,
                json!({
                    "player_id": player.id,
                    "name": player.name,
                    "buy_in": player.buy_in,
                    "cash_out": player.cash_out,
                }),
            )
            .await?;

        Ok(player)
    }

    pub async fn remove_player(&self, player_id: &str) -> Result<Player, CashoutError> {
        let player = self
            .storage
            .remove_player(player_id)
            .await?
            .ok_or_else(|| CashoutError::PlayerNotFound(player_id.to_string()))?;
        info!(player = %player.name, "Player removed");

        self.logging
            .log_action(PLAYER_REMOVED, json!({ "player_id": player.id, "name": player.name }))
            .await?;
        Ok(player)
    }

    pub async fn get_player(&self, player_id: &str) -> Result<Option<Player>, CashoutError> {
        self.storage.get_player(player_id).await
    }

    pub async fn list_players(&self) -> Result<Vec<Player>, CashoutError> {
        self.storage.get_players().await
    }

    /// Net gain of every player, in the order they joined.
    pub async fn net_balances(&self) -> Result<Vec<Balance>, CashoutError> {
        let players = self.storage.get_players().await?;
        Ok(players.iter().map(Balance::from).collect())
    }

    /// Settles the whole table. Refuses to run when the chips cashed out do
    /// not match the chips bought.
    pub async fn calculate_settlement(&self) -> Result<SettlementSummary, CashoutError> {
        let players = self.storage.get_players().await?;
        let balances: Vec<Balance> = players.iter().map(Balance::from).collect();

        let imbalance = SettlementEngine::imbalance(&balances);
        if to_cents(imbalance) != 0 {
            return Err(CashoutError::UnbalancedLedger(imbalance));
        }

        let transfers = SettlementEngine::settle(&balances);
        let total_buy_in = from_cents(players.iter().map(|p| to_cents(p.buy_in)).sum());
        let total_cash_out = from_cents(players.iter().map(|p| to_cents(p.cash_out)).sum());
        info!(players = players.len(), transfers = transfers.len(), "Settlement calculated");

        self.logging
            .log_action(
                SETTLEMENT_CALCULATED,
                json!({
                    "players": players.len(),
                    "transfers": transfers.len(),
                    "total_buy_in": total_buy_in,
                }),
            )
            .await?;

        Ok(SettlementSummary {
            lines: report::transfer_lines(&transfers),
            players,
            transfers,
            total_buy_in,
            total_cash_out,
        })
    }

    /// Stateless settlement of caller-supplied balances. Identifiers are
    /// trimmed and must be non-empty and unique, and at most `max_players`
    /// balances are accepted. The zero-sum precondition is not enforced and
    /// any remainder comes back in `residual`.
    pub fn settle_balances(&self, balances: &[Balance]) -> Result<SettlementOutcome, CashoutError> {
        if balances.len() > self.max_players {
            return Err(CashoutError::TooManyPlayers(self.max_players));
        }

        let mut trimmed = Vec::with_capacity(balances.len());
        let mut seen = HashSet::new();
        for balance in balances {
            let player = balance.player.trim();
            self.validate_string_input("player", player, MAX_NAME_LENGTH)?;
            if !is_settleable(balance.amount) {
                return Err(CashoutError::invalid(
                    "amount",
                    "Invalid Amount",
                    format!(
                        "amount for {} must be a finite number no larger than {} in magnitude",
                        player, MAX_BALANCE
                    ),
                ));
            }
            if !seen.insert(player) {
                return Err(CashoutError::DuplicatePlayer(player.to_string()));
            }
            trimmed.push(Balance::new(player, balance.amount));
        }
        Ok(SettlementEngine::settle_detailed(&trimmed))
    }

    pub async fn clear(&self) -> Result<usize, CashoutError> {
        let removed = self.storage.clear().await?;
        info!(removed, "Ledger cleared");
        self.logging.log_action(LEDGER_CLEARED, json!({ "removed": removed })).await?;
        Ok(removed)
    }

    pub async fn get_app_logs(&self) -> Result<Vec<AppLog>, CashoutError> {
        self.logging.get_logs().await
    }
}
