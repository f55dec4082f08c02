#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use fibseq_core::iterator::FibIterator;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // Use first 2 bytes as the count, capped at 2000 for speed
    let count = i64::from(u16::from_le_bytes([data[0], data[1]]) % 2_000);

    match fibseq_core::generate(count) {
        Ok(values) => {
            let lazy: Vec<BigUint> = FibIterator::new().take(values.len()).collect();
            assert_eq!(values, lazy);
        }
        Err(_) => assert_eq!(count, 0),
    }
});
