//! Shared helpers for the integration tests
#![allow(dead_code)]

use std::sync::OnceLock;

use outcome::{fail, ok, unit, Outcome};
use proptest::prelude::*;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static TRACING: OnceLock<()> = OnceLock::new();

/// Install a test-friendly subscriber once per test binary.
///
/// `RUST_LOG=outcome=trace` shows aggregation short-circuits and contract
/// violations while a test runs.
pub fn init_tracing() {
    TRACING.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_test_writer().compact().with_target(false))
            .try_init();
    });
}

/// Unit success on even numbers
pub fn success_if_even(num: i32) -> Outcome<(), String> {
    if num % 2 == 0 {
        unit()
    } else {
        fail("not even".to_string())
    }
}

/// Success carrying the number itself on even numbers
pub fn success_if_even_with_number(num: i32) -> Outcome<i32, String> {
    if num % 2 == 0 {
        ok(num)
    } else {
        fail("not even".to_string())
    }
}

/// Success carrying a sentence on even numbers
pub fn success_if_even_with_text(num: i32) -> Outcome<String, String> {
    if num % 2 == 0 {
        ok(format!("{num} is even."))
    } else {
        fail("not even".to_string())
    }
}

/// Property-based test generators
pub mod generators {
    use super::*;

    /// Any outcome over `i64` values and `String` errors, unit successes excluded
    pub fn valued_outcome() -> impl Strategy<Value = Outcome<i64, String>> {
        prop_oneof![
            any::<i64>().prop_map(ok::<i64, String>),
            ".{0,16}".prop_map(fail::<i64, String>),
        ]
    }

    /// A list of outcomes; roughly one in four is a failure
    pub fn outcome_list() -> impl Strategy<Value = Vec<Outcome<i64, String>>> {
        prop::collection::vec(
            prop_oneof![
                3 => any::<i64>().prop_map(ok::<i64, String>),
                1 => "[a-z]{1,8}".prop_map(fail::<i64, String>),
            ],
            0..32,
        )
    }
}
