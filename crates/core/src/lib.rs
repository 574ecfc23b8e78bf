//! Immutable success/failure values for composing fallible steps.
//!
//! An [`Outcome`] is either a success, optionally carrying a value, or a
//! failure carrying an error. Failures are ordinary data: they travel through
//! [`Outcome::on_success`] chains untouched until an [`Outcome::on_failure`]
//! step recovers from them or replaces them.
//!
//! ## Key Components
//!
//! - **`outcome`**: the [`Outcome`] type, its constructors ([`ok`], [`unit`],
//!   [`fail`]), accessors and chaining operations.
//! - **`conversion`**: the [`IntoOutcome`] boundary deciding how a step's
//!   return value becomes an outcome. Plain values are accepted for std
//!   primitives, strings, `Vec`, `Option`, `Box` and small tuples; other types
//!   are wrapped with [`ok`].
//! - **`aggregate`**: [`all`] for tuples with per-slot types and [`all_iter`]
//!   for homogeneous collections.
//! - **`errors`**: [`ContractViolation`], raised when the API itself is misused.
//!
//! ```
//! use outcome::{all, fail, ok, unit, Outcome};
//!
//! fn even(n: i32) -> Outcome<i32, String> {
//!     if n % 2 == 0 { ok(n) } else { fail(format!("{n} is odd")) }
//! }
//!
//! let doubled = even(4).on_success(|n| n * 2);
//! assert_eq!(*doubled.value(), 8);
//!
//! let recovered = even(3).on_failure(|_| 0);
//! assert_eq!(*recovered.value(), 0);
//!
//! let both = all((even(2), "two"));
//! assert_eq!(both.into_value(), (2, "two"));
//!
//! let done: Outcome<(), String> = unit();
//! assert!(done.is_success() && done.try_value().is_err());
//! ```

pub mod aggregate;
pub mod conversion;
pub mod errors;
pub mod outcome;

pub use self::{
    aggregate::{all, all_iter, Combine},
    conversion::IntoOutcome,
    errors::{ContractViolation, ViolationExt, ViolationKind},
    outcome::{fail, ok, unit, Outcome},
};
