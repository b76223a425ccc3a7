//! VAT return (document DP3) generation.

use rust_decimal::Decimal;
use tracing::debug;

use super::DP3_NAMESPACE;
use super::xml_utils::{XmlWriter, format_whole, round_whole, write_header};
use crate::core::{FilerProfile, VatError};
use crate::period::PeriodSummary;

/// Render the period's VAT return.
///
/// Buckets that never accumulated anything are omitted entirely — the
/// schema treats presence as meaningful, and an explicit zero element
/// would change the document's meaning.
pub fn render_return(summary: &PeriodSummary, profile: &FilerProfile) -> Result<String, VatError> {
    let mut w = XmlWriter::new()?;
    w.start_document("VatReturn", DP3_NAMESPACE)?;
    write_header(&mut w, summary.period, profile)?;

    write_bucket(
        &mut w,
        "OutputStandard",
        summary.output_base_standard,
        Some(summary.output_tax_standard),
    )?;
    write_bucket(
        &mut w,
        "OutputReduced",
        summary.output_base_reduced,
        Some(summary.output_tax_reduced),
    )?;
    write_bucket(&mut w, "OutputZero", summary.output_base_zero, None)?;
    write_bucket(
        &mut w,
        "InputStandard",
        summary.input_base_standard,
        Some(summary.input_tax_standard),
    )?;
    write_bucket(
        &mut w,
        "InputReduced",
        summary.input_base_reduced,
        Some(summary.input_tax_reduced),
    )?;
    write_bucket(&mut w, "InputZero", summary.input_base_zero, None)?;

    // Exactly one of Payable/Refundable. A liability of exactly zero is
    // still reported as payable — the element is never omitted. The choice
    // is made on the whole-unit figure, so a refund that rounds away stays
    // on the payable side with value zero.
    let liability = round_whole(summary.liability());
    if liability >= Decimal::ZERO {
        w.empty_element("Payable", &[("amount", &format_whole(liability))])?;
    } else {
        w.empty_element("Refundable", &[("amount", &format_whole(-liability))])?;
    }

    w.end_document("VatReturn")?;
    let xml = w.into_string()?;
    debug!(period = %summary.period, bytes = xml.len(), "rendered VAT return");
    Ok(xml)
}

fn write_bucket(
    w: &mut XmlWriter,
    name: &str,
    base: Decimal,
    tax: Option<Decimal>,
) -> Result<(), VatError> {
    let tax_is_zero = tax.is_none_or(|t| t.is_zero());
    if base.is_zero() && tax_is_zero {
        return Ok(());
    }
    match tax {
        Some(tax) => w.empty_element(
            name,
            &[("base", &format_whole(base)), ("tax", &format_whole(tax))],
        ),
        None => w.empty_element(name, &[("base", &format_whole(base))]),
    }
}
