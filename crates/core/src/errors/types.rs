//! Contract violation type definitions

/// Result type alias for checked `Outcome` operations
pub type Result<T> = std::result::Result<T, ContractViolation>;

/// Misuse of the `Outcome` API.
///
/// These are programmer errors, never domain failures. Domain failures travel
/// inside `Outcome::Failure` as ordinary data; a `ContractViolation` means the
/// caller built an impossible combination or asked for the payload of the
/// wrong variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ContractViolation {
    /// A failure was requested without an error value
    #[error("construction error: a failure needs an error value")]
    MissingError,

    /// A success was requested together with an error value
    #[error("construction error: an error value cannot be set on a success")]
    UnexpectedError,

    /// A value-bearing success was requested without a value
    #[error("construction error: a success of this type needs a value")]
    MissingValue,

    /// `value()` was called on a failure
    #[error("invalid state: cannot get the value of a failure")]
    ValueOfFailure,

    /// `value()` was called on a unit success
    #[error("invalid state: a unit success carries no value")]
    ValueOfUnit,

    /// `error()` was called on a success
    #[error("invalid state: cannot get the error of a success")]
    ErrorOfSuccess,
}

/// Broad class of a [`ContractViolation`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// Raised once, when an invalid combination is constructed
    Construction,
    /// Raised by an accessor called on the wrong variant
    InvalidState,
}

impl ContractViolation {
    /// Classify this violation
    #[must_use]
    pub fn kind(&self) -> ViolationKind {
        match self {
            ContractViolation::MissingError
            | ContractViolation::UnexpectedError
            | ContractViolation::MissingValue => ViolationKind::Construction,
            ContractViolation::ValueOfFailure
            | ContractViolation::ValueOfUnit
            | ContractViolation::ErrorOfSuccess => ViolationKind::InvalidState,
        }
    }

    /// Whether this is a construction-time violation
    #[must_use]
    pub fn is_construction(&self) -> bool {
        self.kind() == ViolationKind::Construction
    }

    /// Whether this is a wrong-variant accessor call
    #[must_use]
    pub fn is_invalid_state(&self) -> bool {
        self.kind() == ViolationKind::InvalidState
    }
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViolationKind::Construction => write!(f, "ConstructionError"),
            ViolationKind::InvalidState => write!(f, "InvalidStateError"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(
            ContractViolation::MissingError.kind(),
            ViolationKind::Construction
        );
        assert_eq!(
            ContractViolation::UnexpectedError.kind(),
            ViolationKind::Construction
        );
        assert_eq!(
            ContractViolation::MissingValue.kind(),
            ViolationKind::Construction
        );
        assert!(ContractViolation::ValueOfFailure.is_invalid_state());
        assert!(ContractViolation::ValueOfUnit.is_invalid_state());
        assert!(ContractViolation::ErrorOfSuccess.is_invalid_state());
        assert!(!ContractViolation::ErrorOfSuccess.is_construction());
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ContractViolation::ValueOfUnit.to_string(),
            "invalid state: a unit success carries no value"
        );
        assert_eq!(ViolationKind::InvalidState.to_string(), "InvalidStateError");
        assert_eq!(ViolationKind::Construction.to_string(), "ConstructionError");
    }
}
