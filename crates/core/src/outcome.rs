//! The `Outcome` type: an immutable success-or-failure value
//!
//! An `Outcome<T, E>` is created in its terminal state by one of the
//! constructors and never changes afterwards. Every chaining operation
//! consumes the receiver and produces a new `Outcome`.

use std::fmt;

use crate::conversion::IntoOutcome;
use crate::errors::{ContractViolation, Result, ViolationExt};

/// Private representation. Keeping it out of the public API means the only way
/// to obtain an `Outcome` is through its constructors, and nothing can reach
/// the payload mutably.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum State<T, E> {
    /// Success carrying a value
    Value(T),
    /// Success carrying no data. Only built for `T = ()`; the stored `()` is
    /// handed to chaining closures but never returned by accessors.
    Unit(T),
    /// Failure carrying its error
    Failure(E),
}

/// Outcome of an operation: a success with an optional value, or a failure
/// with a mandatory error.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "an `Outcome` may be a failure, which should be handled"]
pub struct Outcome<T, E> {
    state: State<T, E>,
}

/// Create a success carrying `value`
pub fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::ok(value)
}

/// Create a unit success, carrying no data
pub fn unit<E>() -> Outcome<(), E> {
    Outcome::unit()
}

/// Create a failure carrying `error`
pub fn fail<T, E>(error: E) -> Outcome<T, E> {
    Outcome::fail(error)
}

impl<T, E> Outcome<T, E> {
    /// Create a success carrying `value`.
    ///
    /// Any value is accepted, including `0`, `""` and `false`.
    pub fn ok(value: T) -> Self {
        Self {
            state: State::Value(value),
        }
    }

    /// Create a failure carrying `error`
    pub fn fail(error: E) -> Self {
        Self {
            state: State::Failure(error),
        }
    }

    /// Create a failure from an error that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::MissingError`] when `error` is `None`.
    pub fn try_fail(error: Option<E>) -> Result<Self> {
        error.map(Self::fail).ok_or(ContractViolation::MissingError)
    }

    /// Build an outcome from loose parts, checking both construction rules.
    ///
    /// A value supplied alongside a failure is discarded. Unit successes are
    /// only available as `Outcome<(), E>`, see [`Outcome::unit_from_parts`].
    ///
    /// # Errors
    ///
    /// - [`ContractViolation::MissingError`] for a failure without an error
    /// - [`ContractViolation::UnexpectedError`] for a success with an error
    /// - [`ContractViolation::MissingValue`] for a success without a value
    pub fn from_parts(is_success: bool, value: Option<T>, error: Option<E>) -> Result<Self> {
        match (is_success, value, error) {
            (true, _, Some(_)) => Err(ContractViolation::UnexpectedError),
            (true, Some(value), None) => Ok(Self::ok(value)),
            (true, None, None) => Err(ContractViolation::MissingValue),
            (false, _, error) => Self::try_fail(error),
        }
    }

    /// Whether this is a success, with or without a value
    #[must_use]
    pub fn is_success(&self) -> bool {
        !self.is_failure()
    }

    /// Whether this is a failure
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self.state, State::Failure(_))
    }

    /// Whether this is a unit success
    #[must_use]
    pub fn is_unit(&self) -> bool {
        matches!(self.state, State::Unit(_))
    }

    /// Whether this is a success carrying a value
    #[must_use]
    pub fn has_value(&self) -> bool {
        matches!(self.state, State::Value(_))
    }

    /// Borrow the success value.
    ///
    /// # Errors
    ///
    /// [`ContractViolation::ValueOfFailure`] on a failure and
    /// [`ContractViolation::ValueOfUnit`] on a unit success.
    pub fn try_value(&self) -> Result<&T> {
        match &self.state {
            State::Value(value) => Ok(value),
            State::Unit(_) => Err(ContractViolation::ValueOfUnit),
            State::Failure(_) => Err(ContractViolation::ValueOfFailure),
        }
    }

    /// Borrow the success value.
    ///
    /// # Panics
    ///
    /// Panics on a failure or a unit success. Check [`Outcome::has_value`]
    /// first, or use [`Outcome::try_value`].
    #[track_caller]
    pub fn value(&self) -> &T {
        self.try_value().or_violate()
    }

    /// Take the success value.
    ///
    /// # Errors
    ///
    /// Same as [`Outcome::try_value`].
    pub fn try_into_value(self) -> Result<T> {
        match self.state {
            State::Value(value) => Ok(value),
            State::Unit(_) => Err(ContractViolation::ValueOfUnit),
            State::Failure(_) => Err(ContractViolation::ValueOfFailure),
        }
    }

    /// Take the success value.
    ///
    /// # Panics
    ///
    /// Panics on a failure or a unit success.
    #[track_caller]
    pub fn into_value(self) -> T {
        self.try_into_value().or_violate()
    }

    /// Borrow the failure's error.
    ///
    /// # Errors
    ///
    /// [`ContractViolation::ErrorOfSuccess`] on any success.
    pub fn try_error(&self) -> Result<&E> {
        match &self.state {
            State::Failure(error) => Ok(error),
            State::Value(_) | State::Unit(_) => Err(ContractViolation::ErrorOfSuccess),
        }
    }

    /// Borrow the failure's error.
    ///
    /// # Panics
    ///
    /// Panics on a success. Check [`Outcome::is_failure`] first, or use
    /// [`Outcome::try_error`].
    #[track_caller]
    pub fn error(&self) -> &E {
        self.try_error().or_violate()
    }

    /// Take the failure's error.
    ///
    /// # Errors
    ///
    /// Same as [`Outcome::try_error`].
    pub fn try_into_error(self) -> Result<E> {
        match self.state {
            State::Failure(error) => Ok(error),
            State::Value(_) | State::Unit(_) => Err(ContractViolation::ErrorOfSuccess),
        }
    }

    /// Take the failure's error.
    ///
    /// # Panics
    ///
    /// Panics on a success.
    #[track_caller]
    pub fn into_error(self) -> E {
        self.try_into_error().or_violate()
    }

    /// Chain a step that runs only on success.
    ///
    /// The step receives the success payload (`()` for a unit success). What it
    /// returns is converted through [`IntoOutcome`]: an `Outcome` or `Result`
    /// is used as is, a plain value becomes a new success and `()` becomes a
    /// unit success. On a failure the step is skipped and the error is carried
    /// over unchanged.
    ///
    /// The step must report failures with the receiver's error type. When it
    /// uses another one, lift the receiver into a common error type with
    /// [`Outcome::err_into`] and convert the step's outcome the same way, or
    /// with [`Outcome::map_failure`].
    pub fn on_success<R, F>(self, f: F) -> Outcome<R::Value, E>
    where
        F: FnOnce(T) -> R,
        R: IntoOutcome<E>,
    {
        match self.state {
            State::Value(value) | State::Unit(value) => f(value).into_outcome(),
            State::Failure(error) => Outcome::fail(error),
        }
    }

    /// Chain a recovery step that runs only on failure.
    ///
    /// The step receives the error and may recover (return a success or a
    /// plain value) or replace the error with another failure. A success passes
    /// through untouched, unit successes included. To change the error *type*,
    /// use [`Outcome::on_failure_into`] or [`Outcome::map_failure`].
    pub fn on_failure<R, F>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce(E) -> R,
        R: IntoOutcome<E, Value = T>,
    {
        match self.state {
            State::Failure(error) => f(error).into_outcome(),
            state => Outcome { state },
        }
    }

    /// Chain a recovery step that may also change the error type.
    ///
    /// Like [`Outcome::on_failure`], but the step's outcome decides the new
    /// error type `E2`, so it can recover in some cases and fail with a
    /// different error in others. A success passes through re-typed as
    /// `Outcome<T, E2>`. A step returning a plain value leaves `E2` open;
    /// annotate the result or use `on_failure` instead.
    pub fn on_failure_into<E2, R, F>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> R,
        R: IntoOutcome<E2, Value = T>,
    {
        let state = match self.state {
            State::Failure(error) => return f(error).into_outcome(),
            State::Value(value) => State::Value(value),
            State::Unit(value) => State::Unit(value),
        };
        Outcome { state }
    }

    /// Transform the error of a failure, leaving successes as they are
    pub fn map_failure<F2, F>(self, f: F) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        let state = match self.state {
            State::Value(value) => State::Value(value),
            State::Unit(value) => State::Unit(value),
            State::Failure(error) => State::Failure(f(error)),
        };
        Outcome { state }
    }

    /// Widen the error type, typically into an enum covering several steps
    pub fn err_into<F2>(self) -> Outcome<T, F2>
    where
        E: Into<F2>,
    {
        self.map_failure(Into::into)
    }

    /// Run a side effect on the success value, if any
    pub fn tap_success<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let State::Value(ref value) = self.state {
            f(value);
        }
        self
    }

    /// Run a side effect on the error, if any
    pub fn tap_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let State::Failure(ref error) = self.state {
            f(error);
        }
        self
    }

    /// Borrow both payloads
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        let state = match &self.state {
            State::Value(value) => State::Value(value),
            State::Unit(value) => State::Unit(value),
            State::Failure(error) => State::Failure(error),
        };
        Outcome { state }
    }

    /// Convert into a standard `Result`; a unit success becomes `Ok(None)`
    pub fn into_result(self) -> std::result::Result<Option<T>, E> {
        match self.state {
            State::Value(value) => Ok(Some(value)),
            State::Unit(_) => Ok(None),
            State::Failure(error) => Err(error),
        }
    }

    /// Success payload of either kind, or the error. Used by the aggregators,
    /// where a unit slot contributes its `()`.
    pub(crate) fn into_payload(self) -> std::result::Result<T, E> {
        match self.state {
            State::Value(value) | State::Unit(value) => Ok(value),
            State::Failure(error) => Err(error),
        }
    }
}

impl<E> Outcome<(), E> {
    /// Create a unit success, carrying no data
    pub fn unit() -> Self {
        Self {
            state: State::Unit(()),
        }
    }

    /// Build a unit outcome from loose parts, checking both construction rules.
    ///
    /// # Errors
    ///
    /// - [`ContractViolation::MissingError`] for a failure without an error
    /// - [`ContractViolation::UnexpectedError`] for a success with an error
    pub fn unit_from_parts(is_success: bool, error: Option<E>) -> Result<Self> {
        match (is_success, error) {
            (true, Some(_)) => Err(ContractViolation::UnexpectedError),
            (true, None) => Ok(Self::unit()),
            (false, error) => Self::try_fail(error),
        }
    }
}

impl<T, E> From<std::result::Result<T, E>> for Outcome<T, E> {
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(error) => Self::fail(error),
        }
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Value(value) => f.debug_tuple("Success").field(value).finish(),
            State::Unit(_) => f.write_str("Success"),
            State::Failure(error) => f.debug_tuple("Failure").field(error).finish(),
        }
    }
}
