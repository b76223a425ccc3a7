use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use rust_decimal::{Decimal, RoundingStrategy};
use std::io::Cursor;

use crate::core::{FilerProfile, Period, PeriodSpan, VatError};

fn xml_io(e: std::io::Error) -> VatError {
    VatError::Xml(format!("XML write error: {e}"))
}

/// Thin wrapper over the quick-xml event writer for attribute-element
/// documents — the EPO schemas carry data in attributes, not text nodes.
pub struct XmlWriter {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl XmlWriter {
    pub fn new() -> Result<Self, VatError> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_io)?;
        Ok(Self { writer })
    }

    pub fn into_string(self) -> Result<String, VatError> {
        let buf = self.writer.into_inner().into_inner();
        String::from_utf8(buf).map_err(|e| VatError::Xml(format!("XML UTF-8 error: {e}")))
    }

    /// Open the document root with its namespace and generator identity.
    pub fn start_document(&mut self, root: &str, namespace: &str) -> Result<(), VatError> {
        let mut elem = BytesStart::new(root);
        elem.push_attribute(("xmlns", namespace));
        elem.push_attribute(("generator-name", super::GENERATOR_NAME));
        elem.push_attribute(("generator-version", super::GENERATOR_VERSION));
        self.writer.write_event(Event::Start(elem)).map_err(xml_io)
    }

    pub fn end_document(&mut self, root: &str) -> Result<(), VatError> {
        self.writer
            .write_event(Event::End(BytesEnd::new(root)))
            .map_err(xml_io)
    }

    /// Write a childless element carrying only attributes.
    pub fn empty_element(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<(), VatError> {
        let mut elem = BytesStart::new(name);
        for (k, v) in attrs {
            elem.push_attribute((*k, *v));
        }
        self.writer.write_event(Event::Empty(elem)).map_err(xml_io)
    }
}

/// Shared header + filer-identity prefix of both document kinds.
pub fn write_header(
    w: &mut XmlWriter,
    period: Period,
    profile: &FilerProfile,
) -> Result<(), VatError> {
    let year = period.year().to_string();
    let mut attrs: Vec<(&str, String)> = vec![("year", year)];
    match period.span() {
        PeriodSpan::Month(m) => attrs.push(("month", m.to_string())),
        PeriodSpan::Quarter(q) => attrs.push(("quarter", q.to_string())),
    }
    attrs.push(("tax-office", profile.tax_office_code.clone()));
    if let Some(branch) = &profile.tax_office_branch {
        attrs.push(("tax-office-branch", branch.clone()));
    }
    let borrowed: Vec<(&str, &str)> = attrs.iter().map(|(k, v)| (*k, v.as_str())).collect();
    w.empty_element("Header", &borrowed)?;

    w.empty_element(
        "Filer",
        &[
            ("tax-id", profile.tax_id.as_str()),
            ("legal-name", profile.legal_name.as_str()),
            ("address", profile.registered_address.as_str()),
        ],
    )
}

/// Round to the whole currency unit, half-up (away from zero).
pub fn round_whole(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Format a Decimal as the whole-unit integer the schemas require.
/// Sub-unit precision is carried through aggregation and dropped only
/// here, at the point of emission.
pub fn format_whole(amount: Decimal) -> String {
    let rounded = round_whole(amount);
    if rounded.is_zero() {
        "0".to_string()
    } else {
        rounded.normalize().to_string()
    }
}
