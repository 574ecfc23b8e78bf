//! Conversion of step results into `Outcome`s
//!
//! Chaining closures and `all` slots may produce an `Outcome`, a standard
//! `Result`, `()` or a plain value. [`IntoOutcome`] is the compile-time
//! boundary between those cases: outcome-like values are passed through as
//! they are, plain values are wrapped as successes.
//!
//! Plain values are recognised for a fixed set of types: the numeric
//! primitives, `bool`, `char`, `String`, `&str`, `Vec<T>`, `Option<T>`,
//! `Box<T>` and tuples of two to four elements. Any other type, including
//! caller-defined structs, has to be wrapped with `ok(..)` before it is
//! returned from a step or placed in an `all` slot.

use crate::outcome::Outcome;

/// Anything that can stand in for an `Outcome<Self::Value, E>`
pub trait IntoOutcome<E> {
    /// Success type of the resulting outcome
    type Value;

    /// Perform the conversion
    fn into_outcome(self) -> Outcome<Self::Value, E>;
}

impl<T, E> IntoOutcome<E> for Outcome<T, E> {
    type Value = T;

    fn into_outcome(self) -> Outcome<T, E> {
        self
    }
}

impl<T, E> IntoOutcome<E> for Result<T, E> {
    type Value = T;

    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::from(self)
    }
}

/// A step with nothing to report yields a unit success.
impl<E> IntoOutcome<E> for () {
    type Value = ();

    fn into_outcome(self) -> Outcome<(), E> {
        Outcome::unit()
    }
}

macro_rules! plain_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl<E> IntoOutcome<E> for $ty {
                type Value = $ty;

                fn into_outcome(self) -> Outcome<$ty, E> {
                    Outcome::ok(self)
                }
            }
        )+
    };
}

plain_value!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
);

impl<'a, E> IntoOutcome<E> for &'a str {
    type Value = &'a str;

    fn into_outcome(self) -> Outcome<&'a str, E> {
        Outcome::ok(self)
    }
}

macro_rules! plain_container {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl<T, E> IntoOutcome<E> for $ty<T> {
                type Value = $ty<T>;

                fn into_outcome(self) -> Outcome<$ty<T>, E> {
                    Outcome::ok(self)
                }
            }
        )+
    };
}

plain_container!(Vec, Option, Box);

/// Tuples are wrapped whole; their elements are not inspected.
macro_rules! plain_tuple {
    ($($item:ident),+) => {
        impl<E, $($item),+> IntoOutcome<E> for ($($item,)+) {
            type Value = ($($item,)+);

            fn into_outcome(self) -> Outcome<Self::Value, E> {
                Outcome::ok(self)
            }
        }
    };
}

plain_tuple!(A, B);
plain_tuple!(A, B, C);
plain_tuple!(A, B, C, D);
