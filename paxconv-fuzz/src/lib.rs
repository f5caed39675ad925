//! Fuzzing entry points for paxconv-core
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_convert

use paxconv_core::constants::{PAXTON_AFFIX, PAXTON_LEN};

pub fn fuzz_parse(data: &[u8]) {
    use paxconv_core::parser::parse_kantec;

    // Arbitrary bytes, lossily decoded - should never panic
    let text = String::from_utf8_lossy(data);
    let _ = parse_kantec(&text);
}

pub fn fuzz_convert(data: &[u8]) {
    let text = String::from_utf8_lossy(data);

    // Any successful conversion must have the fixed shape
    if let Ok(paxton) = paxconv_core::convert(&text) {
        let s = paxton.as_str();
        assert_eq!(s.len(), PAXTON_LEN);
        assert!(s.starts_with(PAXTON_AFFIX) && s.ends_with(PAXTON_AFFIX));
    }
}

pub fn fuzz_checksum(data: &[u8]) {
    use paxconv_core::checksum;

    let _ = checksum::calculate(data);
}
