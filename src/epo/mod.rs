//! EPO filing document generation (Czech tax portal submissions).
//!
//! Two documents, two schemas:
//!
//! - **DP3** — the VAT return ([`render_return`])
//! - **KH1** — the control statement / kontrolní hlášení
//!   ([`render_control_statement`])
//!
//! The builders are deliberately independent — the schemas diverge in
//! namespace, row semantics and element names — and share only the
//! header/filer prefix helper in `xml_utils`. Both are pure functions of
//! their inputs: identical inputs render byte-identical documents.
//!
//! # Example
//!
//! ```no_run
//! use priznani::compliance::{ComplianceConfig, validate};
//! use priznani::core::*;
//! use priznani::epo;
//! use priznani::period::aggregate;
//!
//! let transactions: Vec<Transaction> = todo!(); // from the ledger
//! let profile: FilerProfile = todo!();
//!
//! let summary = aggregate(&transactions, Period::month(2024, 6).unwrap());
//! let verdict = validate(&summary, &transactions, &profile, &ComplianceConfig::default());
//! if verdict.ok {
//!     let vat_return = epo::render_return(&summary, &profile).unwrap();
//!     let control = epo::render_control_statement(&summary, &transactions, &profile).unwrap();
//! }
//! ```

mod dp3;
mod kh1;
pub(crate) mod xml_utils;

pub use dp3::render_return;
pub use kh1::render_control_statement;

/// Namespace of the VAT return document.
pub const DP3_NAMESPACE: &str = "urn:cz:epo:dph-dp3:02";

/// Namespace of the control statement document.
pub const KH1_NAMESPACE: &str = "urn:cz:epo:dph-kh1:01";

/// Generator identity stamped on every document root.
pub const GENERATOR_NAME: &str = env!("CARGO_PKG_NAME");

/// Version stamped next to [`GENERATOR_NAME`].
pub const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");
