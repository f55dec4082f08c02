#![no_main]

use libfuzzer_sys::fuzz_target;

use fibseq_core::SequenceLimits;

fuzz_target!(|input: &str| {
    let limits = SequenceLimits::default();
    // Should not panic; accepted counts stay within the limits
    if let Ok(count) = limits.parse_request(input.trim()) {
        assert!(count >= 1 && count <= limits.max_length());
    }
});
