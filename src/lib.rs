//! # priznani
//!
//! Czech VAT computation and filing-export library: classifies freeform
//! transaction descriptions into the legal rates, computes the
//! net/tax/gross split with statutory rounding, aggregates filing periods,
//! runs a pre-filing compliance check, and renders the two EPO submission
//! documents — the DP3 VAT return and the KH1 control statement
//! (kontrolní hlášení).
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Every operation is a pure, synchronous computation over in-memory values:
//! the crate performs no I/O, holds no locks, and retains no state between
//! calls, so it can be driven from any number of concurrent callers.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use priznani::core::*;
//! use rust_decimal_macros::dec;
//!
//! let sale = TransactionBuilder::new(
//!     TaxDirection::Sale,
//!     "web development for client",
//!     dec!(20000),
//!     NaiveDate::from_ymd_opt(2024, 6, 12).unwrap(),
//! )
//! .counterparty("CZ87654321")
//! .document("FV-2024-017")
//! .build()
//! .unwrap();
//!
//! assert_eq!(sale.rate, VatRate::Standard);
//! assert_eq!(sale.tax_amount, dec!(4200.00));
//! assert_eq!(sale.gross_total, dec!(24200.00));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Transaction types, classification, VAT math, aggregation, compliance |
//! | `epo` | DP3 return & KH1 control statement XML generation |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod classify;

#[cfg(feature = "core")]
pub mod vat;

#[cfg(feature = "core")]
pub mod period;

#[cfg(feature = "core")]
pub mod compliance;

#[cfg(feature = "epo")]
pub mod epo;
