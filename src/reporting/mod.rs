//! Reporting engine
//!
//! The four sales reports exist in two forms with the same semantics:
//!
//! - [`fold`]: in-process aggregation over a snapshot of invoices, used by
//!   the in-memory backend
//! - [`pipeline`]: MongoDB aggregation pipelines, used by the MongoDB backend
//!
//! Grouping keys, sort direction and limits are identical in both. The one
//! difference is tie order: the folds keep first-seen order, MongoDB makes
//! no promise.

pub mod fold;
#[cfg(feature = "mongodb_backend")]
pub mod pipeline;
