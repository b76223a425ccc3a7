//! Control statement (document KH1) generation.

use tracing::debug;

use super::KH1_NAMESPACE;
use super::xml_utils::{XmlWriter, format_whole, write_header};
use crate::compliance::CONTROL_ROW_THRESHOLD;
use crate::core::{FilerProfile, TaxDirection, Transaction, VatError};
use crate::period::PeriodSummary;

/// Render the period's control statement.
///
/// One row per transaction in the summary's period whose net base lies
/// above the materiality threshold. Sale rows and purchase rows use
/// distinct element and counterparty-role names, and each direction
/// numbers its rows from 1 in input order.
pub fn render_control_statement(
    summary: &PeriodSummary,
    transactions: &[Transaction],
    profile: &FilerProfile,
) -> Result<String, VatError> {
    let mut w = XmlWriter::new()?;
    w.start_document("ControlStatement", KH1_NAMESPACE)?;
    write_header(&mut w, summary.period, profile)?;

    let mut sales = 0u32;
    for tx in transactions
        .iter()
        .filter(|t| t.direction == TaxDirection::Sale && qualifies(summary, t))
    {
        sales += 1;
        write_row(&mut w, "SaleRow", "buyer-tax-id", sales, tx)?;
    }

    let mut purchases = 0u32;
    for tx in transactions
        .iter()
        .filter(|t| t.direction == TaxDirection::Purchase && qualifies(summary, t))
    {
        purchases += 1;
        write_row(&mut w, "PurchaseRow", "supplier-tax-id", purchases, tx)?;
    }

    w.end_document("ControlStatement")?;
    let xml = w.into_string()?;
    debug!(
        period = %summary.period,
        sales,
        purchases,
        bytes = xml.len(),
        "rendered control statement"
    );
    Ok(xml)
}

fn qualifies(summary: &PeriodSummary, tx: &Transaction) -> bool {
    summary.period.contains(tx.date) && tx.net_base > CONTROL_ROW_THRESHOLD
}

fn write_row(
    w: &mut XmlWriter,
    element: &str,
    role_attr: &str,
    row: u32,
    tx: &Transaction,
) -> Result<(), VatError> {
    let row_number = row.to_string();
    // The row date is the source document's; the booking date stands in
    // when the document carries none.
    let date = tx
        .document_date
        .unwrap_or(tx.date)
        .format("%Y-%m-%d")
        .to_string();
    let base = format_whole(tx.net_base);
    let tax = format_whole(tx.tax_amount);

    let mut attrs: Vec<(&str, &str)> = vec![("row", &row_number)];
    if let Some(dic) = &tx.counterparty_tax_id {
        attrs.push((role_attr, dic));
    }
    if let Some(doc) = &tx.document_number {
        attrs.push(("document", doc));
    }
    attrs.push(("date", &date));
    attrs.push(("base", &base));
    attrs.push(("tax", &tax));
    w.empty_element(element, &attrs)
}
