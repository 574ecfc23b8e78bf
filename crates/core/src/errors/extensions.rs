//! Extension traits for contract violations

use super::types::ContractViolation;

/// Turns a checked result into its value, treating a violation as fatal.
///
/// This is how the panicking accessors (`Outcome::value`, `Outcome::error`, ...)
/// surface misuse: the violation is logged through `tracing` and then raised as
/// a panic carrying the violation's message.
pub trait ViolationExt<T> {
    /// Return the value or panic on a contract violation
    fn or_violate(self) -> T;
}

impl<T> ViolationExt<T> for std::result::Result<T, ContractViolation> {
    #[track_caller]
    fn or_violate(self) -> T {
        match self {
            Ok(value) => value,
            Err(violation) => violate(violation),
        }
    }
}

/// Report a contract violation and panic
#[cold]
#[track_caller]
pub fn violate(violation: ContractViolation) -> ! {
    let location = std::panic::Location::caller();
    tracing::error!(
        kind = %violation.kind(),
        violation = ?violation,
        location = %location,
        "Outcome contract violated"
    );
    panic!("[{}] {violation}", violation.kind())
}
