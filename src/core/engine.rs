//! Turns a snapshot of net balances into the payments that zero them.
//!
//! Amounts are quantized to whole cents on the way in and all matching runs on
//! integer cents, so "this balance is settled" is an exact comparison.

use crate::core::models::settlement::{Balance, SettlementOutcome, Transfer};
use tracing::{debug, warn};

const CENTS_PER_UNIT: f64 = 100.0;

/// Largest balance magnitude the engine will settle. Its cent value stays
/// well under 2^53, so the conversion to cents and back is exact and no
/// running total can overflow.
pub const MAX_BALANCE: f64 = 1e13;

/// Whether the engine can settle `amount` at all.
pub fn is_settleable(amount: f64) -> bool {
    amount.is_finite() && amount.abs() <= MAX_BALANCE
}

/// Rounds half away from zero to the nearest cent. Callers keep `amount`
/// within [`MAX_BALANCE`].
pub fn to_cents(amount: f64) -> i64 {
    (amount * CENTS_PER_UNIT).round() as i64
}

pub fn from_cents(cents: i64) -> f64 {
    cents as f64 / CENTS_PER_UNIT
}

struct Position<'a> {
    player: &'a str,
    cents: i64,
}

pub struct SettlementEngine;

impl SettlementEngine {
    /// Settles `balances` and returns the transfers in the order they were matched.
    ///
    /// Entries that round to zero cents are ignored. If the balances do not sum
    /// to zero the unmatched remainder is dropped and logged; use
    /// [`SettlementEngine::settle_detailed`] to inspect it.
    pub fn settle(balances: &[Balance]) -> Vec<Transfer> {
        let outcome = Self::settle_detailed(balances);
        if !outcome.residual.is_empty() {
            warn!(
                residual = ?outcome.residual,
                "Balances do not sum to zero, dropping unmatched remainder"
            );
        }
        outcome.transfers
    }

    /// Greedy two-pointer matching of the largest remaining debt against the
    /// largest remaining credit.
    ///
    /// Each step fully settles at least one side, so `n` non-zero balances
    /// never produce more than `n - 1` transfers. Equal amounts keep their
    /// input order (the sort is stable).
    ///
    /// Non-finite amounts are skipped. Amounts beyond [`MAX_BALANCE`] are not
    /// matched and come back unchanged in `residual`.
    pub fn settle_detailed(balances: &[Balance]) -> SettlementOutcome {
        let mut oversized = Vec::new();
        let mut positions: Vec<Position<'_>> = balances
            .iter()
            .filter_map(|balance| {
                if !balance.amount.is_finite() {
                    warn!(player = %balance.player, amount = balance.amount, "Skipping non-finite balance");
                    return None;
                }
                if !is_settleable(balance.amount) {
                    warn!(player = %balance.player, amount = balance.amount, "Balance too large to settle");
                    oversized.push(balance.clone());
                    return None;
                }
                let cents = to_cents(balance.amount);
                (cents != 0).then_some(Position {
                    player: balance.player.as_str(),
                    cents,
                })
            })
            .collect();
        positions.sort_by_key(|position| position.cents);

        debug!("Settling {} non-zero balances", positions.len());

        let mut transfers = Vec::with_capacity(positions.len().saturating_sub(1));
        let mut low = 0;
        let mut high = positions.len().saturating_sub(1);

        while low < high {
            let owed = positions[low].cents;
            let due = positions[high].cents;
            // Only one side of zero is left: nobody to pair with.
            if owed >= 0 || due <= 0 {
                break;
            }

            let cents = (-owed).min(due);
            transfers.push(Transfer {
                from: positions[low].player.to_string(),
                to: positions[high].player.to_string(),
                amount: from_cents(cents),
            });
            positions[low].cents += cents;
            positions[high].cents -= cents;

            if positions[low].cents == 0 {
                low += 1;
            }
            if positions[high].cents == 0 {
                high -= 1;
            }
        }

        let mut residual: Vec<Balance> = positions
            .iter()
            .filter(|position| position.cents != 0)
            .map(|position| Balance::new(position.player, from_cents(position.cents)))
            .collect();
        residual.extend(oversized);

        debug!("Produced {} transfers", transfers.len());
        SettlementOutcome { transfers, residual }
    }

    /// Signed sum, after cent rounding, of the balances the engine would
    /// match. Zero means those balances can be fully settled.
    pub fn imbalance(balances: &[Balance]) -> f64 {
        let cents: i128 = balances
            .iter()
            .filter(|balance| is_settleable(balance.amount))
            .map(|balance| i128::from(to_cents(balance.amount)))
            .sum();
        cents as f64 / CENTS_PER_UNIT
    }
}
