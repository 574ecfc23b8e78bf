//! Contract violations raised by misuse of the `Outcome` API

mod extensions;
mod types;

pub use extensions::{violate, ViolationExt};
pub use types::{ContractViolation, Result, ViolationKind};
