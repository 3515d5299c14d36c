//! Fault types and accessor errors.
//!
//! Faults describe validation failures and are ordinary values. The
//! [`OutcomeError`] type covers the narrow set of programming errors that
//! arise from reading an outcome the wrong way.

mod access;
mod fault;

pub use access::OutcomeError;
pub use fault::{Fault, FaultKind, Faults, Severity};
