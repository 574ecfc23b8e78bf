//! Aggregation of several outcomes into one
//!
//! [`all`] takes a tuple whose slots may each hold a different success type
//! and yields the tuple of their values, stopping at the first failure.
//! [`all_iter`] is the homogeneous fallback for collections whose length is
//! only known at runtime; it returns a `Vec` and loses per-slot typing.

use crate::conversion::IntoOutcome;
use crate::outcome::Outcome;

/// A fixed-size group of outcome-like slots sharing the error type `E`
pub trait Combine<E> {
    /// Tuple of the slots' success types, in slot order
    type Output;

    /// Collect every slot's value, or return the first failure
    fn combine(self) -> Outcome<Self::Output, E>;
}

/// Combine a tuple of outcomes, raw values or `Result`s into one outcome.
///
/// Slots are examined left to right. Raw values count as successes and a unit
/// success contributes `()`. The first failure found is returned and the slots
/// after it are never looked at. Slots with different error types are brought
/// to a common `E` with [`Outcome::err_into`] beforehand.
pub fn all<E, C>(outcomes: C) -> Outcome<C::Output, E>
where
    C: Combine<E>,
{
    outcomes.combine()
}

/// Combine any number of outcomes of one type into an outcome of a `Vec`.
///
/// The iterator is not advanced past the first failure.
pub fn all_iter<I, T, E>(outcomes: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator,
    I::Item: IntoOutcome<E, Value = T>,
{
    let outcomes = outcomes.into_iter();
    let mut values = Vec::with_capacity(outcomes.size_hint().0);
    for (index, outcome) in outcomes.enumerate() {
        match outcome.into_outcome().into_payload() {
            Ok(value) => values.push(value),
            Err(error) => return short_circuit(index, error),
        }
    }
    Outcome::ok(values)
}

fn short_circuit<T, E>(index: usize, error: E) -> Outcome<T, E> {
    tracing::trace!(slot = index, "aggregation stopped at first failure");
    Outcome::fail(error)
}

impl<T, E> FromIterator<Outcome<T, E>> for Outcome<Vec<T>, E> {
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iter: I) -> Self {
        all_iter(iter)
    }
}

macro_rules! combine_tuple {
    ($($index:tt $slot:ident),+) => {
        impl<E, $($slot),+> Combine<E> for ($($slot,)+)
        where
            $($slot: IntoOutcome<E>,)+
        {
            type Output = ($(<$slot as IntoOutcome<E>>::Value,)+);

            #[allow(non_snake_case)]
            fn combine(self) -> Outcome<Self::Output, E> {
                let ($($slot,)+) = self;
                $(
                    let $slot = match $slot.into_outcome().into_payload() {
                        Ok(value) => value,
                        Err(error) => return short_circuit($index, error),
                    };
                )+
                Outcome::ok(($($slot,)+))
            }
        }
    };
}

combine_tuple!(0 T0);
combine_tuple!(0 T0, 1 T1);
combine_tuple!(0 T0, 1 T1, 2 T2);
combine_tuple!(0 T0, 1 T1, 2 T2, 3 T3);
combine_tuple!(0 T0, 1 T1, 2 T2, 3 T3, 4 T4);
combine_tuple!(0 T0, 1 T1, 2 T2, 3 T3, 4 T4, 5 T5);
combine_tuple!(0 T0, 1 T1, 2 T2, 3 T3, 4 T4, 5 T5, 6 T6);
combine_tuple!(0 T0, 1 T1, 2 T2, 3 T3, 4 T4, 5 T5, 6 T6, 7 T7);
combine_tuple!(0 T0, 1 T1, 2 T2, 3 T3, 4 T4, 5 T5, 6 T6, 7 T7, 8 T8);
combine_tuple!(0 T0, 1 T1, 2 T2, 3 T3, 4 T4, 5 T5, 6 T6, 7 T7, 8 T8, 9 T9);
combine_tuple!(0 T0, 1 T1, 2 T2, 3 T3, 4 T4, 5 T5, 6 T6, 7 T7, 8 T8, 9 T9, 10 T10);
combine_tuple!(0 T0, 1 T1, 2 T2, 3 T3, 4 T4, 5 T5, 6 T6, 7 T7, 8 T8, 9 T9, 10 T10, 11 T11);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{fail, ok, unit};

    #[test]
    fn test_single_slot() {
        let outcome = all::<&str, _>((ok::<i32, &str>(5),));
        assert_eq!(outcome.into_value(), (5,));
    }

    #[test]
    fn test_heterogeneous_slots_keep_their_types() {
        let outcome = all((ok::<i32, &str>(1), ok("abc"), ok(true)));
        let (number, text, flag): (i32, &str, bool) = outcome.into_value();
        assert_eq!(number, 1);
        assert_eq!(text, "abc");
        assert!(flag);
    }

    #[test]
    fn test_unit_slot_contributes_unit() {
        let outcome = all((unit::<String>(), ok(2u8)));
        assert_eq!(outcome.into_value(), ((), 2));
    }

    #[test]
    fn test_results_are_accepted_as_slots() {
        let parsed = all(("12".parse::<u32>(), "7".parse::<u32>()));
        assert_eq!(parsed.into_value(), (12, 7));

        let broken = all(("12".parse::<u32>(), "x".parse::<u32>()));
        assert!(broken.is_failure());
    }

    #[test]
    fn test_twelve_slots() {
        let outcome = all::<(), _>((1u8, 2u16, 3u32, 4u64, 5i8, 6i16, 7i32, 8i64, 'c', "s", true, 1.5f64));
        let value = outcome.into_value();
        assert_eq!(value.0, 1);
        assert_eq!(value.8, 'c');
        assert_eq!(value.11, 1.5);
    }

    #[test]
    fn test_iter_collects_in_order() {
        let outcome = all_iter(vec![ok::<i32, String>(3), ok(1), ok(2)]);
        assert_eq!(outcome.into_value(), vec![3, 1, 2]);
    }

    #[test]
    fn test_iter_stops_pulling_after_first_failure() {
        let mut pulled = 0;
        let items = (0..10).map(|n| {
            pulled += 1;
            if n == 3 {
                fail::<i32, i32>(n)
            } else {
                ok(n)
            }
        });
        let outcome = all_iter(items);
        assert_eq!(*outcome.error(), 3);
        assert_eq!(pulled, 4);
    }

    #[test]
    fn test_iter_of_nothing_is_empty_success() {
        let outcome = all_iter(Vec::<Outcome<u8, String>>::new());
        assert!(outcome.value().is_empty());
    }

    #[test]
    fn test_collect_via_from_iterator() {
        let collected: Outcome<Vec<u8>, &str> = vec![ok(1), fail("second"), fail("third")]
            .into_iter()
            .collect();
        assert_eq!(*collected.error(), "second");
    }
}
