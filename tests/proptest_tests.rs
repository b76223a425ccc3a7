//! Property-based tests for the numeric invariants.
//!
//! Run with: `cargo test --features all --test proptest_tests`

#![cfg(feature = "core")]

use chrono::NaiveDate;
use priznani::core::*;
use priznani::period::aggregate;
use priznani::vat::split_amount;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ── Proptest Strategies ─────────────────────────────────────────────────────

/// Any amount up to 8 integer digits, 2 fractional, both signs.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (-9_999_999_999i64..=9_999_999_999i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// A strictly positive amount.
fn arb_positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..=9_999_999_999i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_rate() -> impl Strategy<Value = VatRate> {
    prop_oneof![
        Just(VatRate::Standard),
        Just(VatRate::Reduced),
        Just(VatRate::Zero),
    ]
}

fn arb_direction() -> impl Strategy<Value = TaxDirection> {
    prop_oneof![Just(TaxDirection::Sale), Just(TaxDirection::Purchase)]
}

/// A finalized transaction dated May–July 2024, so that a June aggregation
/// sees both in-period and out-of-period inputs.
fn arb_transaction() -> impl Strategy<Value = Transaction> {
    (
        arb_direction(),
        arb_rate(),
        arb_amount(),
        5u32..=7,
        1u32..=28,
        any::<bool>(),
    )
        .prop_map(|(direction, rate, amount, month, day, included)| {
            TransactionBuilder::new(direction, "generated", amount, date(2024, month, day))
                .rate(rate)
                .tax_included(included)
                .build()
                .unwrap()
        })
}

// ── Property Tests ──────────────────────────────────────────────────────────

proptest! {
    /// net_base + tax_amount == gross_total exactly, after rounding, for
    /// every representable amount.
    #[test]
    fn rounding_closure(amount in arb_amount(), rate in arb_rate(), included in any::<bool>()) {
        let s = split_amount(amount, rate, included);
        prop_assert_eq!(s.net_base + s.tax_amount, s.gross_total);
        prop_assert!(s.net_base.scale() <= 2);
        prop_assert!(s.tax_amount.scale() <= 2);
    }

    /// Rate 0 passes the amount through untouched regardless of inclusion.
    #[test]
    fn zero_rate_is_identity(amount in arb_amount(), included in any::<bool>()) {
        let s = split_amount(amount, VatRate::Zero, included);
        prop_assert_eq!(s.net_base, amount);
        prop_assert_eq!(s.tax_amount, Decimal::ZERO);
        prop_assert_eq!(s.gross_total, amount);
    }

    /// Splitting a gross amount and re-adding tax onto the resulting net
    /// base reproduces the gross within one rounding unit.
    #[test]
    fn gross_net_inversion(gross in arb_positive_amount(), rate in arb_rate()) {
        let split = split_amount(gross, rate, true);
        let back = split_amount(split.net_base, rate, false);
        prop_assert!((back.gross_total - gross).abs() <= dec!(0.01));
    }

    /// The six bucketed bases sum to the bases of the filtered set — no
    /// transaction dropped or double-counted.
    #[test]
    fn aggregation_completeness(txs in prop::collection::vec(arb_transaction(), 0..40)) {
        let period = Period::month(2024, 6).unwrap();
        let s = aggregate(&txs, period);
        let bucketed = s.output_base_standard
            + s.output_base_reduced
            + s.output_base_zero
            + s.input_base_standard
            + s.input_base_reduced
            + s.input_base_zero;
        let expected: Decimal = txs
            .iter()
            .filter(|t| period.contains(t.date))
            .map(|t| t.net_base)
            .sum();
        prop_assert_eq!(bucketed, expected);
    }

    /// Aggregation is a pure function of its inputs.
    #[test]
    fn aggregation_idempotent(txs in prop::collection::vec(arb_transaction(), 0..40)) {
        let period = Period::quarter(2024, 2).unwrap();
        prop_assert_eq!(aggregate(&txs, period), aggregate(&txs, period));
    }

    /// liability > 0 exactly when output tax exceeds input tax.
    #[test]
    fn liability_sign_convention(txs in prop::collection::vec(arb_transaction(), 0..40)) {
        let s = aggregate(&txs, Period::month(2024, 6).unwrap());
        prop_assert_eq!(
            s.liability() > Decimal::ZERO,
            s.total_output_tax() > s.total_input_tax()
        );
    }
}
