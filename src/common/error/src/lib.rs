//! Error types and result aliases for hypernet.
//!
//! Every fallible operation in the workspace returns [`HypernetResult`], so
//! callers can match on a single [`HypernetError`] regardless of whether the
//! failure came from the core model or from a format adapter.

mod error;

pub use error::{HypernetError, HypernetResult};
