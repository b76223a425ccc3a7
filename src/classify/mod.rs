//! Rate and tax-inclusion classification of freeform transaction text.
//!
//! The upstream ledger accepts whatever the user typed ("oběd s klientem
//! 560", "hosting invoice 21% dph plus vat") and needs a definite rate and
//! gross/net convention before the transaction can be recorded. The
//! classifier always resolves — ambiguity is never an error — and the
//! result is a presentation hint the caller may override before the
//! transaction is finalized.

mod rules;

pub use rules::{Classification, classify};
