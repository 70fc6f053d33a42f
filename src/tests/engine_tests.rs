use crate::core::engine::{MAX_BALANCE, SettlementEngine, to_cents};
use crate::core::models::settlement::Balance;
use crate::tests::{balances, net_cents, transfer};

#[test]
fn test_one_debtor_two_creditors() {
    let input = balances(&[("A", -30.0), ("B", 10.0), ("C", 20.0)]);
    let transfers = SettlementEngine::settle(&input);

    assert_eq!(transfers, vec![transfer("A", "C", 20.0), transfer("A", "B", 10.0)]);
    let net = net_cents(&transfers);
    assert_eq!(net["A"], -3000);
    assert_eq!(net["B"], 1000);
    assert_eq!(net["C"], 2000);
}

#[test]
fn test_largest_creditor_paid_first() {
    let input = balances(&[("A", -50.0), ("B", 20.0), ("C", 30.0)]);
    let transfers = SettlementEngine::settle(&input);

    assert_eq!(transfers, vec![transfer("A", "C", 30.0), transfer("A", "B", 20.0)]);
}

#[test]
fn test_all_zero_needs_no_transfers() {
    let input = balances(&[("A", 0.0), ("B", 0.0)]);
    assert!(SettlementEngine::settle(&input).is_empty());
    assert!(SettlementEngine::settle(&[]).is_empty());
}

#[test]
fn test_zero_balance_excluded() {
    let input = balances(&[("A", -15.0), ("B", 15.0), ("C", 0.0)]);
    let transfers = SettlementEngine::settle(&input);

    assert_eq!(transfers, vec![transfer("A", "B", 15.0)]);
    assert!(transfers.iter().all(|t| t.from != "C" && t.to != "C"));
}

#[test]
fn test_exact_match_advances_both_cursors() {
    let input = balances(&[("Alice", 30.0), ("Bob", -30.0), ("Carol", 20.0), ("Dan", -20.0)]);
    let transfers = SettlementEngine::settle(&input);

    assert_eq!(
        transfers,
        vec![transfer("Bob", "Alice", 30.0), transfer("Dan", "Carol", 20.0)]
    );
}

#[test]
fn test_equal_debts_keep_input_order() {
    let forward = SettlementEngine::settle(&balances(&[("A", -10.0), ("B", -10.0), ("C", 20.0)]));
    assert_eq!(forward, vec![transfer("A", "C", 10.0), transfer("B", "C", 10.0)]);

    let reversed = SettlementEngine::settle(&balances(&[("B", -10.0), ("A", -10.0), ("C", 20.0)]));
    assert_eq!(reversed, vec![transfer("B", "C", 10.0), transfer("A", "C", 10.0)]);
}

#[test]
fn test_equal_credits_keep_input_order() {
    // The creditor cursor walks from the end, so the later of two equal
    // credits is paid first.
    let transfers = SettlementEngine::settle(&balances(&[("X", -20.0), ("P", 10.0), ("Q", 10.0)]));
    assert_eq!(transfers, vec![transfer("X", "Q", 10.0), transfer("X", "P", 10.0)]);
}

#[test]
fn test_fractional_amounts_settle_exactly() {
    let input = balances(&[("A", -0.1), ("B", -0.2), ("C", 0.3)]);
    let outcome = SettlementEngine::settle_detailed(&input);

    assert_eq!(outcome.transfers, vec![transfer("B", "C", 0.2), transfer("A", "C", 0.1)]);
    assert!(outcome.residual.is_empty());
}

#[test]
fn test_accumulated_float_drift_is_absorbed() {
    // 0.1 + 0.2 != 0.3 in binary floating point
    let creditor = 0.1 + 0.2;
    let input = balances(&[("A", -0.3), ("B", creditor)]);
    let outcome = SettlementEngine::settle_detailed(&input);

    assert_eq!(outcome.transfers, vec![transfer("A", "B", 0.3)]);
    assert!(outcome.residual.is_empty());
}

#[test]
fn test_sub_cent_amounts_are_zero() {
    let input = balances(&[("A", 0.004), ("B", -0.004)]);
    assert!(SettlementEngine::settle(&input).is_empty());
}

#[test]
fn test_unbalanced_input_reports_residual() {
    let input = balances(&[("A", -30.0), ("B", 10.0)]);
    let outcome = SettlementEngine::settle_detailed(&input);

    assert_eq!(outcome.transfers, vec![transfer("A", "B", 10.0)]);
    assert_eq!(outcome.residual, vec![Balance::new("A", -20.0)]);

    // the plain entry point drops the remainder
    assert_eq!(SettlementEngine::settle(&input), outcome.transfers);
}

#[test]
fn test_only_creditors_produces_nothing() {
    let input = balances(&[("B", 20.0), ("A", 10.0)]);
    let outcome = SettlementEngine::settle_detailed(&input);

    assert!(outcome.transfers.is_empty());
    assert_eq!(outcome.residual, vec![Balance::new("A", 10.0), Balance::new("B", 20.0)]);
}

#[test]
fn test_non_finite_balances_skipped() {
    let input = balances(&[("A", f64::NAN), ("B", -5.0), ("C", 5.0), ("D", f64::INFINITY)]);
    let outcome = SettlementEngine::settle_detailed(&input);

    assert_eq!(outcome.transfers, vec![transfer("B", "C", 5.0)]);
    assert!(outcome.residual.is_empty());
}

#[test]
fn test_imbalance() {
    assert_eq!(SettlementEngine::imbalance(&balances(&[("A", -30.0), ("B", 25.0)])), -5.0);
    assert_eq!(SettlementEngine::imbalance(&balances(&[("A", -0.3), ("B", 0.1 + 0.2)])), 0.0);
    assert_eq!(SettlementEngine::imbalance(&[]), 0.0);
}

#[test]
fn test_half_cent_rounds_away_from_zero() {
    assert_eq!(to_cents(0.125), 13);
    assert_eq!(to_cents(-0.125), -13);

    let transfers = SettlementEngine::settle(&balances(&[("A", -0.005), ("B", 0.005)]));
    assert_eq!(transfers, vec![transfer("A", "B", 0.01)]);
}

#[test]
fn test_largest_settleable_balance() {
    let input = balances(&[("A", -MAX_BALANCE), ("B", MAX_BALANCE)]);
    let outcome = SettlementEngine::settle_detailed(&input);

    assert_eq!(outcome.transfers, vec![transfer("A", "B", MAX_BALANCE)]);
    assert!(outcome.residual.is_empty());
}

#[test]
fn test_oversized_balances_left_unmatched() {
    let input = balances(&[("A", -1e17), ("B", 1e17), ("C", -5.0), ("D", 5.0)]);
    let outcome = SettlementEngine::settle_detailed(&input);

    assert_eq!(outcome.transfers, vec![transfer("C", "D", 5.0)]);
    assert_eq!(outcome.residual, vec![Balance::new("A", -1e17), Balance::new("B", 1e17)]);
    assert_eq!(SettlementEngine::imbalance(&input), 0.0);
}

#[test]
fn test_transfer_display() {
    assert_eq!(transfer("Bob", "Alice", 12.5).to_string(), "Bob owes Alice $12.50");
}
