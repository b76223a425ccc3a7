use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::VatError;
use super::types::*;
use crate::classify::classify;
use crate::vat::split_amount;

/// Builder for recording transactions.
///
/// `build()` runs the rate/inclusion classifier over the description for
/// anything not explicitly overridden, then computes the net/tax/gross
/// split. The classifier is a best-effort heuristic — callers that know
/// the rate or inclusion with certainty (a structured invoice, a human
/// confirmation) should set them via [`rate`](Self::rate) and
/// [`tax_included`](Self::tax_included).
///
/// ```
/// use chrono::NaiveDate;
/// use priznani::core::*;
/// use rust_decimal_macros::dec;
///
/// let purchase = TransactionBuilder::new(
///     TaxDirection::Purchase,
///     "oběd s klientem",
///     dec!(560),
///     NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
/// )
/// .document("U-2024-112")
/// .build()
/// .unwrap();
///
/// assert_eq!(purchase.rate, VatRate::Reduced);
/// assert!(purchase.tax_included); // retail purchases are quoted gross
/// assert_eq!(purchase.net_base, dec!(500.00));
/// assert_eq!(purchase.tax_amount, dec!(60.00));
/// ```
pub struct TransactionBuilder {
    direction: TaxDirection,
    description: String,
    amount: Decimal,
    date: NaiveDate,
    rate: Option<VatRate>,
    tax_included: Option<bool>,
    counterparty_tax_id: Option<String>,
    document_number: Option<String>,
    document_date: Option<NaiveDate>,
}

impl TransactionBuilder {
    pub fn new(
        direction: TaxDirection,
        description: impl Into<String>,
        amount: Decimal,
        date: NaiveDate,
    ) -> Self {
        Self {
            direction,
            description: description.into(),
            amount,
            date,
            rate: None,
            tax_included: None,
            counterparty_tax_id: None,
            document_number: None,
            document_date: None,
        }
    }

    /// Override the classified rate.
    pub fn rate(mut self, rate: VatRate) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Override the classified inclusion flag.
    pub fn tax_included(mut self, included: bool) -> Self {
        self.tax_included = Some(included);
        self
    }

    /// Tax id (DIČ) of the other party.
    pub fn counterparty(mut self, tax_id: impl Into<String>) -> Self {
        self.counterparty_tax_id = Some(tax_id.into());
        self
    }

    /// Invoice/receipt number of the source document.
    pub fn document(mut self, number: impl Into<String>) -> Self {
        self.document_number = Some(number.into());
        self
    }

    /// Date on the source document, when distinct from the booking date.
    pub fn document_date(mut self, date: NaiveDate) -> Self {
        self.document_date = Some(date);
        self
    }

    /// Build the transaction: classify, then compute the split.
    pub fn build(self) -> Result<Transaction, VatError> {
        // Input limits to prevent abuse
        if self.description.len() > 2_000 {
            return Err(VatError::Builder(
                "description cannot exceed 2,000 characters".into(),
            ));
        }

        let classified = classify(&self.description, self.direction);
        let rate = self.rate.unwrap_or(classified.rate);
        let tax_included = self.tax_included.unwrap_or(classified.tax_included);
        let split = split_amount(self.amount, rate, tax_included);

        Ok(Transaction {
            direction: self.direction,
            description: self.description,
            date: self.date,
            declared_amount: self.amount,
            rate,
            tax_included,
            net_base: split.net_base,
            tax_amount: split.tax_amount,
            gross_total: split.gross_total,
            counterparty_tax_id: self.counterparty_tax_id,
            document_number: self.document_number,
            document_date: self.document_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn classifier_runs_when_not_overridden() {
        let tx = TransactionBuilder::new(
            TaxDirection::Sale,
            "consulting services",
            dec!(1000),
            date(2024, 6, 1),
        )
        .build()
        .unwrap();
        assert_eq!(tx.rate, VatRate::Standard);
        assert!(!tx.tax_included);
        assert_eq!(tx.gross_total, dec!(1210.00));
    }

    #[test]
    fn explicit_overrides_win() {
        let tx = TransactionBuilder::new(
            TaxDirection::Sale,
            "oběd pro tým", // reduced keyword, would classify as 12 %
            dec!(1210),
            date(2024, 6, 1),
        )
        .rate(VatRate::Standard)
        .tax_included(true)
        .build()
        .unwrap();
        assert_eq!(tx.rate, VatRate::Standard);
        assert_eq!(tx.net_base, dec!(1000.00));
    }

    #[test]
    fn oversized_description_rejected() {
        let result = TransactionBuilder::new(
            TaxDirection::Sale,
            "x".repeat(2_001),
            dec!(100),
            date(2024, 6, 1),
        )
        .build();
        assert!(result.is_err());
    }
}
