use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::core::{VatRate, VatSplit};

/// Round to currency precision — 2 decimal places, half-up (away from
/// zero), the rounding the VAT act prescribes for computed tax.
fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Split an amount into net base, tax amount and gross total.
///
/// Tax-inclusive amounts are divided out (`net = amount / (1 + rate)`),
/// tax-exclusive amounts have the tax added on top. Both components are
/// rounded *independently* and the gross total is derived from the rounded
/// parts — rounding before summing is the legally required order of
/// operations, so `net_base + tax_amount == gross_total` holds exactly on
/// the returned figures.
///
/// Negative amounts are accepted (refunds and corrections); a zero amount
/// is meaningless but is the upstream ledger's problem, not this one's.
pub fn split_amount(amount: Decimal, rate: VatRate, tax_included: bool) -> VatSplit {
    if rate == VatRate::Zero {
        let amount = round_currency(amount);
        return VatSplit {
            net_base: amount,
            tax_amount: Decimal::ZERO,
            gross_total: amount,
        };
    }

    let factor = rate.percent() / dec!(100);
    let (net_base, tax_amount) = if tax_included {
        let net_raw = amount / (Decimal::ONE + factor);
        (round_currency(net_raw), round_currency(amount - net_raw))
    } else {
        (round_currency(amount), round_currency(amount * factor))
    };

    VatSplit {
        net_base,
        tax_amount,
        gross_total: net_base + tax_amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_rate_gross() {
        let s = split_amount(dec!(1210.00), VatRate::Standard, true);
        assert_eq!(s.net_base, dec!(1000.00));
        assert_eq!(s.tax_amount, dec!(210.00));
        assert_eq!(s.gross_total, dec!(1210.00));
    }

    #[test]
    fn standard_rate_net() {
        let s = split_amount(dec!(1000.00), VatRate::Standard, false);
        assert_eq!(s.net_base, dec!(1000.00));
        assert_eq!(s.tax_amount, dec!(210.00));
        assert_eq!(s.gross_total, dec!(1210.00));
    }

    #[test]
    fn half_rounds_up() {
        // 0.50 * 21 % = 0.105 → 0.11
        let s = split_amount(dec!(0.50), VatRate::Standard, false);
        assert_eq!(s.tax_amount, dec!(0.11));
        assert_eq!(s.gross_total, dec!(0.61));
    }

    #[test]
    fn half_rounds_away_from_zero_when_negative() {
        let s = split_amount(dec!(-0.50), VatRate::Standard, false);
        assert_eq!(s.tax_amount, dec!(-0.11));
        assert_eq!(s.gross_total, dec!(-0.61));
    }

    #[test]
    fn gross_derived_from_rounded_components() {
        // 100.00 / 1.21 = 82.6446…, tax 17.3553… — each rounds on its own
        let s = split_amount(dec!(100.00), VatRate::Standard, true);
        assert_eq!(s.net_base, dec!(82.64));
        assert_eq!(s.tax_amount, dec!(17.36));
        assert_eq!(s.gross_total, dec!(100.00));
    }

    #[test]
    fn zero_rate_short_circuits() {
        for included in [true, false] {
            let s = split_amount(dec!(500.55), VatRate::Zero, included);
            assert_eq!(s.net_base, dec!(500.55));
            assert_eq!(s.tax_amount, Decimal::ZERO);
            assert_eq!(s.gross_total, dec!(500.55));
        }
    }

    #[test]
    fn reduced_rate_gross() {
        let s = split_amount(dec!(560), VatRate::Reduced, true);
        assert_eq!(s.net_base, dec!(500.00));
        assert_eq!(s.tax_amount, dec!(60.00));
        assert_eq!(s.gross_total, dec!(560.00));
    }
}
