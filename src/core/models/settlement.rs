use super::player::Player;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Net position of one player. Positive is owed money, negative owes money.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Balance {
    pub player: String,
    pub amount: f64,
}

impl Balance {
    pub fn new(player: impl Into<String>, amount: f64) -> Self {
        Balance {
            player: player.into(),
            amount,
        }
    }
}

impl From<&Player> for Balance {
    fn from(player: &Player) -> Self {
        Balance::new(player.name.clone(), player.net_gain())
    }
}

/// `from` pays `to` the given amount.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Transfer {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

impl std::fmt::Display for Transfer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} owes {} ${:.2}", self.from, self.to, self.amount)
    }
}

/// Transfers plus whatever the matching pass could not place.
/// `residual` is empty whenever the input balances sum to zero.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SettlementOutcome {
    pub transfers: Vec<Transfer>,
    pub residual: Vec<Balance>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SettlementSummary {
    pub players: Vec<Player>,
    pub transfers: Vec<Transfer>,
    pub total_buy_in: f64,
    pub total_cash_out: f64,
    pub lines: Vec<String>,
}
