//! Shared proptest strategies for unit tests.

use proptest::prelude::*;

use crate::ParamSpec;

/// Generates integer specs with `min <= default <= max`.
pub(crate) fn arb_int_spec() -> impl Strategy<Value = ParamSpec<i64>> {
    (-1_000_000_i64..1_000_000, 0_i64..1_000_000)
        .prop_flat_map(|(min, span)| {
            let max = min + span;
            (Just(min), Just(max), min..=max)
        })
        .prop_map(|(min, max, default)| {
            ParamSpec::new(min, max, default).expect("generated bounds are ordered")
        })
}

/// Generates finite real specs with `min <= default <= max`.
pub(crate) fn arb_real_spec() -> impl Strategy<Value = ParamSpec<f64>> {
    (-1_000_000.0_f64..1_000_000.0, 0.0_f64..1_000_000.0, 0.0_f64..=1.0)
        .prop_map(|(min, span, fraction)| {
            let max = min + span;
            let default = min + (max - min) * fraction;
            ParamSpec::new(min, max, default.clamp(min, max))
                .expect("generated bounds are ordered")
        })
}

/// Generates plausible email addresses with a local part of 0 to 12 characters.
pub(crate) fn arb_email() -> impl Strategy<Value = String> {
    (
        prop::string::string_regex("[a-z0-9._+-]{0,12}").unwrap(),
        prop::string::string_regex("[a-z0-9-]{1,10}\\.[a-z]{2,4}").unwrap(),
    )
        .prop_map(|(local, domain)| format!("{}@{}", local, domain))
}
