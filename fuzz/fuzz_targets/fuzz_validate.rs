#![no_main]

use libfuzzer_sys::fuzz_target;

use fibseq_core::validate::{is_valid_positive_integer, validate};

fuzz_target!(|input: &str| {
    // The predicate and the hinting validator must agree on pass/fail
    assert_eq!(is_valid_positive_integer(input), validate(input).is_ok());
});
