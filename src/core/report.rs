use crate::core::models::{player::Player, settlement::Transfer};
use tracing::debug;

pub const NO_TRANSACTIONS: &str = "No transactions required.";

/// One display line per transfer, or a single line saying nothing is owed.
pub fn transfer_lines(transfers: &[Transfer]) -> Vec<String> {
    debug!("Rendering {} transfers", transfers.len());
    if transfers.is_empty() {
        return vec![NO_TRANSACTIONS.to_string()];
    }
    transfers.iter().map(Transfer::to_string).collect()
}

pub fn player_line(player: &Player) -> String {
    format!(
        "{}: Buy-in: ${:.2}, Cash-out: ${:.2}, Net gain: ${:.2}",
        player.name,
        player.buy_in,
        player.cash_out,
        player.net_gain()
    )
}
