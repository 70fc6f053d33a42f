use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One seat at the table: what the player bought in for and what they cashed out.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub buy_in: f64,
    pub cash_out: f64,
    #[schema(value_type = String, example = "2024-06-01T12:34:56Z")]
    pub joined_at: DateTime<Utc>,
}

impl Player {
    /// Positive when the player is owed money, negative when they owe.
    pub fn net_gain(&self) -> f64 {
        self.cash_out - self.buy_in
    }
}
