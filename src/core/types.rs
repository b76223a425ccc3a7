use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::VatError;

/// Direction of a transaction relative to the filer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxDirection {
    /// A sale — VAT charged is output tax, owed to the tax office.
    Sale,
    /// A purchase — VAT paid is input tax, deductible against output tax.
    Purchase,
}

/// The three legal Czech VAT rates (zákon o DPH, rates in force since 2024).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VatRate {
    /// 21 % — standard rate, the legally mandated default.
    Standard,
    /// 12 % — reduced rate (food service, books, lodging, basic medicine,
    /// public transport).
    Reduced,
    /// 0 % — zero-rated and exempt supplies (intra-community exports,
    /// medical care, education, regulated financial services).
    Zero,
}

impl VatRate {
    /// Rate percentage (21, 12 or 0).
    pub fn percent(&self) -> Decimal {
        match self {
            Self::Standard => dec!(21),
            Self::Reduced => dec!(12),
            Self::Zero => Decimal::ZERO,
        }
    }

    /// Parse from a raw percentage.
    ///
    /// Anything outside {0, 12, 21} is a data-integrity error and is
    /// rejected loudly rather than defaulted.
    pub fn try_from_percent(percent: Decimal) -> Result<Self, VatError> {
        if percent == dec!(21) {
            Ok(Self::Standard)
        } else if percent == dec!(12) {
            Ok(Self::Reduced)
        } else if percent == Decimal::ZERO {
            Ok(Self::Zero)
        } else {
            Err(VatError::UnsupportedRate(percent))
        }
    }
}

/// Net/tax/gross split of a single amount, at currency precision.
///
/// Invariant: `net_base + tax_amount == gross_total` exactly — the gross
/// total is derived from the already-rounded components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatSplit {
    /// Price excluding tax, 2 decimal places.
    pub net_base: Decimal,
    /// Tax amount, 2 decimal places.
    pub tax_amount: Decimal,
    /// Price including tax.
    pub gross_total: Decimal,
}

/// A single financial event with its VAT computation finalized.
///
/// Built via [`TransactionBuilder`] and immutable afterwards; the ledger
/// that records it owns it, this crate only ever borrows slices of them.
///
/// [`TransactionBuilder`]: super::TransactionBuilder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Sale (output tax) or purchase (input tax).
    pub direction: TaxDirection,
    /// Freeform description as entered by the user. Consulted only for
    /// rate/inclusion classification, never re-parsed after computation.
    pub description: String,
    /// Booking date — decides which filing period the transaction falls in.
    pub date: NaiveDate,
    /// The amount as entered (gross or net depending on `tax_included`).
    pub declared_amount: Decimal,
    /// Applicable rate, classified or explicitly overridden.
    pub rate: VatRate,
    /// Whether `declared_amount` already contains the tax.
    pub tax_included: bool,
    /// Price excluding tax.
    pub net_base: Decimal,
    /// Tax amount; zero for zero-rated supplies.
    pub tax_amount: Decimal,
    /// Price including tax.
    pub gross_total: Decimal,
    /// Tax id (DIČ) of the other party. Mandatory on control statement
    /// rows above the materiality threshold.
    pub counterparty_tax_id: Option<String>,
    /// Invoice/receipt number; used for compliance scoring, not tax math.
    pub document_number: Option<String>,
    /// Date on the source document, when distinct from the booking date.
    pub document_date: Option<NaiveDate>,
}

/// The filer as registered with the tax office.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilerProfile {
    /// Czech tax id (DIČ), e.g. "CZ12345678".
    pub tax_id: String,
    /// Registered legal name.
    pub legal_name: String,
    /// Registered address, single line.
    pub registered_address: String,
    /// Routing code of the responsible tax office (finanční úřad).
    pub tax_office_code: String,
    /// Routing code of the territorial branch (územní pracoviště), if any.
    pub tax_office_branch: Option<String>,
}

/// One filing period — a calendar month or quarter.
///
/// Construction validates the key; a malformed period is rejected with
/// [`VatError::InvalidPeriod`] instead of silently clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    year: i32,
    span: PeriodSpan,
}

/// Month or quarter inside a period's year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodSpan {
    /// Calendar month, 1–12.
    Month(u8),
    /// Calendar quarter, 1–4.
    Quarter(u8),
}

impl Period {
    /// A monthly period.
    pub fn month(year: i32, month: u8) -> Result<Self, VatError> {
        if !(1..=12).contains(&month) {
            return Err(VatError::InvalidPeriod(format!(
                "month {month} out of range 1-12"
            )));
        }
        Ok(Self {
            year,
            span: PeriodSpan::Month(month),
        })
    }

    /// A quarterly period.
    pub fn quarter(year: i32, quarter: u8) -> Result<Self, VatError> {
        if !(1..=4).contains(&quarter) {
            return Err(VatError::InvalidPeriod(format!(
                "quarter {quarter} out of range 1-4"
            )));
        }
        Ok(Self {
            year,
            span: PeriodSpan::Quarter(quarter),
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn span(&self) -> PeriodSpan {
        self.span
    }

    /// Whether a booking date falls inside this period.
    pub fn contains(&self, date: NaiveDate) -> bool {
        if date.year() != self.year {
            return false;
        }
        match self.span {
            PeriodSpan::Month(m) => date.month() == u32::from(m),
            PeriodSpan::Quarter(q) => date.month0() / 3 + 1 == u32::from(q),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.span {
            PeriodSpan::Month(m) => write!(f, "{}-{:02}", self.year, m),
            PeriodSpan::Quarter(q) => write!(f, "{}-Q{}", self.year, q),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rate_percent_roundtrip() {
        for rate in [VatRate::Standard, VatRate::Reduced, VatRate::Zero] {
            assert_eq!(VatRate::try_from_percent(rate.percent()).unwrap(), rate);
        }
    }

    #[test]
    fn unsupported_rate_rejected() {
        assert!(VatRate::try_from_percent(dec!(19)).is_err());
        assert!(VatRate::try_from_percent(dec!(15)).is_err());
        assert!(VatRate::try_from_percent(dec!(-21)).is_err());
    }

    #[test]
    fn month_bounds() {
        assert!(Period::month(2024, 0).is_err());
        assert!(Period::month(2024, 13).is_err());
        assert!(Period::month(2024, 12).is_ok());
    }

    #[test]
    fn quarter_bounds() {
        assert!(Period::quarter(2024, 0).is_err());
        assert!(Period::quarter(2024, 5).is_err());
        assert!(Period::quarter(2024, 4).is_ok());
    }

    #[test]
    fn month_containment() {
        let p = Period::month(2024, 6).unwrap();
        assert!(p.contains(date(2024, 6, 1)));
        assert!(p.contains(date(2024, 6, 30)));
        assert!(!p.contains(date(2024, 7, 1)));
        assert!(!p.contains(date(2023, 6, 15)));
    }

    #[test]
    fn quarter_containment() {
        let p = Period::quarter(2024, 2).unwrap();
        assert!(p.contains(date(2024, 4, 1)));
        assert!(p.contains(date(2024, 6, 30)));
        assert!(!p.contains(date(2024, 3, 31)));
        assert!(!p.contains(date(2024, 7, 1)));
    }

    #[test]
    fn period_display() {
        assert_eq!(Period::month(2024, 6).unwrap().to_string(), "2024-06");
        assert_eq!(Period::quarter(2024, 2).unwrap().to_string(), "2024-Q2");
    }
}
