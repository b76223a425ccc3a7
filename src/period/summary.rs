use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::Period;

/// Totals of one filing period, freshly built by
/// [`aggregate`](super::aggregate) on every call.
///
/// The 0 % buckets carry no tax accumulator — the tax there is
/// definitionally zero, and summing it would manufacture a phantom
/// "0.00 at 0 %" figure downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// The period the summary covers.
    pub period: Period,
    /// Net bases of sales at the standard rate.
    pub output_base_standard: Decimal,
    /// Output tax at the standard rate.
    pub output_tax_standard: Decimal,
    /// Net bases of sales at the reduced rate.
    pub output_base_reduced: Decimal,
    /// Output tax at the reduced rate.
    pub output_tax_reduced: Decimal,
    /// Net bases of zero-rated and exempt sales.
    pub output_base_zero: Decimal,
    /// Net bases of purchases at the standard rate.
    pub input_base_standard: Decimal,
    /// Input tax at the standard rate.
    pub input_tax_standard: Decimal,
    /// Net bases of purchases at the reduced rate.
    pub input_base_reduced: Decimal,
    /// Input tax at the reduced rate.
    pub input_tax_reduced: Decimal,
    /// Net bases of zero-rated and exempt purchases.
    pub input_base_zero: Decimal,
}

impl PeriodSummary {
    pub(crate) fn empty(period: Period) -> Self {
        Self {
            period,
            output_base_standard: Decimal::ZERO,
            output_tax_standard: Decimal::ZERO,
            output_base_reduced: Decimal::ZERO,
            output_tax_reduced: Decimal::ZERO,
            output_base_zero: Decimal::ZERO,
            input_base_standard: Decimal::ZERO,
            input_tax_standard: Decimal::ZERO,
            input_base_reduced: Decimal::ZERO,
            input_tax_reduced: Decimal::ZERO,
            input_base_zero: Decimal::ZERO,
        }
    }

    /// VAT charged on sales, owed to the tax office.
    pub fn total_output_tax(&self) -> Decimal {
        self.output_tax_standard + self.output_tax_reduced
    }

    /// VAT paid on purchases, deductible against output tax.
    pub fn total_input_tax(&self) -> Decimal {
        self.input_tax_standard + self.input_tax_reduced
    }

    /// Output tax minus input tax. Positive is payable, negative is an
    /// excess deduction (refund due).
    pub fn liability(&self) -> Decimal {
        self.total_output_tax() - self.total_input_tax()
    }
}
