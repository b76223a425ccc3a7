use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::dic::validate_dic;
use crate::core::{FilerProfile, Transaction, VatRate};
use crate::period::PeriodSummary;

/// Net base above which a control statement row must name the
/// counterparty's DIČ.
pub const CONTROL_ROW_THRESHOLD: Decimal = dec!(10_000);

/// Tunable knobs for the pre-filing check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceConfig {
    /// Soft typo/fraud guard: warn when the liability magnitude exceeds
    /// this. Not a legal rule.
    pub large_liability_threshold: Decimal,
}

impl Default for ComplianceConfig {
    fn default() -> Self {
        Self {
            large_liability_threshold: dec!(1_000_000),
        }
    }
}

/// Outcome of the pre-filing check. Produced per export attempt, never
/// stored. Blocking issues must refuse the export; warnings let it proceed
/// after explicit acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceVerdict {
    /// False when any blocking issue is present.
    pub ok: bool,
    /// Issues that must prevent the export, in discovery order.
    pub blocking_issues: Vec<String>,
    /// Findings the user should acknowledge, in discovery order.
    pub warnings: Vec<String>,
}

/// Check a period's data before any filing document is rendered.
///
/// Pure and side-effect-free: inspects the summary, the underlying
/// transactions and the filer profile, mutates nothing, and collects every
/// finding rather than stopping at the first.
pub fn validate(
    summary: &PeriodSummary,
    transactions: &[Transaction],
    profile: &FilerProfile,
    config: &ComplianceConfig,
) -> ComplianceVerdict {
    let mut blocking = Vec::new();
    let mut warnings = Vec::new();

    if profile.tax_id.trim().is_empty() {
        blocking.push("filer profile is missing the tax id (DIČ)".to_string());
    } else if let Err(e) = validate_dic(&profile.tax_id) {
        blocking.push(format!("filer tax id is malformed: {e}"));
    }
    if profile.legal_name.trim().is_empty() {
        blocking.push("filer profile is missing the legal name".to_string());
    }
    if profile.registered_address.trim().is_empty() {
        warnings.push("filer profile has no registered address".to_string());
    }
    if profile.tax_office_code.trim().is_empty() {
        warnings.push(
            "filer profile has no tax office routing code; the portal default will apply"
                .to_string(),
        );
    }

    let in_period: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| summary.period.contains(t.date))
        .collect();

    // A period with nothing in it is reported, not silently accepted — a
    // nil return still needs the filer's explicit confirmation.
    if in_period.is_empty() {
        blocking.push(format!(
            "no transactions recorded for {}; confirm a nil return explicitly",
            summary.period
        ));
    }

    for tx in &in_period {
        match &tx.counterparty_tax_id {
            None if tx.net_base > CONTROL_ROW_THRESHOLD => {
                warnings.push(format!(
                    "'{}' ({}): net base {} exceeds {} but no counterparty tax id is recorded",
                    tx.description, tx.date, tx.net_base, CONTROL_ROW_THRESHOLD
                ));
            }
            Some(dic) => {
                if let Err(e) = validate_dic(dic) {
                    warnings.push(format!(
                        "'{}' ({}): counterparty tax id is malformed: {e}",
                        tx.description, tx.date
                    ));
                }
            }
            None => {}
        }
        if tx.rate != VatRate::Zero && tx.document_number.is_none() {
            warnings.push(format!(
                "'{}' ({}): taxed transaction has no document number",
                tx.description, tx.date
            ));
        }
    }

    let liability = summary.liability();
    if liability.abs() > config.large_liability_threshold {
        warnings.push(format!(
            "period liability {} exceeds the configured threshold {}; check for mistyped amounts",
            liability, config.large_liability_threshold
        ));
    }

    let ok = blocking.is_empty();
    debug!(
        ok,
        blocking = blocking.len(),
        warnings = warnings.len(),
        "compliance check"
    );
    ComplianceVerdict {
        ok,
        blocking_issues: blocking,
        warnings,
    }
}
