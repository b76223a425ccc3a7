use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during VAT computation or filing export.
///
/// Compliance findings are deliberately *not* errors — they are expected,
/// user-facing outcomes and travel as [`ComplianceVerdict`] return values.
///
/// [`ComplianceVerdict`]: crate::compliance::ComplianceVerdict
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VatError {
    /// A rate percentage outside the legal set {0, 12, 21}.
    #[error("unsupported VAT rate: {0}%")]
    UnsupportedRate(Decimal),

    /// A period key outside the calendar (month 0 or 13, quarter 0 or 5).
    #[error("invalid period: {0}")]
    InvalidPeriod(String),

    /// Builder encountered invalid or missing input.
    #[error("builder error: {0}")]
    Builder(String),

    /// XML generation error.
    #[error("XML error: {0}")]
    Xml(String),
}
