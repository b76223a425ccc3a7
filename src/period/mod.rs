//! Filing-period aggregation.
//!
//! [`aggregate`] folds a slice of finalized transactions into a fresh
//! [`PeriodSummary`] — six accumulator buckets keyed by (direction, rate).
//! The fold is pure and idempotent; nothing is retained between calls, so
//! concurrent aggregations over the same or disjoint inputs need no
//! coordination.

mod aggregate;
mod summary;

pub use aggregate::aggregate;
pub use summary::PeriodSummary;
