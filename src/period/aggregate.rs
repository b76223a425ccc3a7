use tracing::debug;

use super::PeriodSummary;
use crate::core::{Period, TaxDirection, Transaction, VatRate};

/// Fold the transactions dated inside `period` into a fresh summary.
///
/// Every matching transaction lands in exactly one bucket; transactions
/// outside the period are ignored. The inputs must already be finalized
/// (rate, inclusion and split computed) — this function never recomputes
/// them.
pub fn aggregate(transactions: &[Transaction], period: Period) -> PeriodSummary {
    let mut summary = PeriodSummary::empty(period);
    let mut matched = 0usize;

    for tx in transactions.iter().filter(|t| period.contains(t.date)) {
        matched += 1;
        match (tx.direction, tx.rate) {
            (TaxDirection::Sale, VatRate::Standard) => {
                summary.output_base_standard += tx.net_base;
                summary.output_tax_standard += tx.tax_amount;
            }
            (TaxDirection::Sale, VatRate::Reduced) => {
                summary.output_base_reduced += tx.net_base;
                summary.output_tax_reduced += tx.tax_amount;
            }
            (TaxDirection::Sale, VatRate::Zero) => {
                summary.output_base_zero += tx.net_base;
            }
            (TaxDirection::Purchase, VatRate::Standard) => {
                summary.input_base_standard += tx.net_base;
                summary.input_tax_standard += tx.tax_amount;
            }
            (TaxDirection::Purchase, VatRate::Reduced) => {
                summary.input_base_reduced += tx.net_base;
                summary.input_tax_reduced += tx.tax_amount;
            }
            (TaxDirection::Purchase, VatRate::Zero) => {
                summary.input_base_zero += tx.net_base;
            }
        }
    }

    debug!(period = %period, matched, "aggregated filing period");
    summary
}
