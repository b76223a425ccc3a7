//! Core types for transactions, filing periods and the filer profile.
//!
//! A [`Transaction`] is immutable once built: [`TransactionBuilder::build`]
//! runs classification and the VAT split exactly once, and nothing in this
//! crate ever recomputes a transaction afterwards.

mod builder;
mod error;
mod types;

pub use builder::TransactionBuilder;
pub use error::VatError;
pub use types::*;
