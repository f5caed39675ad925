//! Property-based tests using proptest

use paxconv_core::{
    checksum,
    constants::{MARKER, PAXTON_AFFIX, PAXTON_LEN},
    convert, convert_id,
    encoder::encode,
    parser::parse_kantec,
    ErrorKind, KantecId,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_every_valid_card_converts(facility in any::<u8>(), card in any::<u16>()) {
        let input = format!("{:02X}:{}", facility, card);
        let paxton = convert(&input).unwrap();
        let text = paxton.as_str();

        prop_assert_eq!(text.len(), PAXTON_LEN);
        prop_assert!(text.starts_with(PAXTON_AFFIX));
        prop_assert!(text.ends_with(PAXTON_AFFIX));
        prop_assert_eq!(text.matches(MARKER).count(), 2);
    }

    #[test]
    fn prop_display_round_trips_through_parser(facility in any::<u8>(), card in any::<u16>()) {
        let id = KantecId::new(facility, card);
        prop_assert_eq!(parse_kantec(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn prop_distinct_cards_render_distinctly(
        a in (any::<u8>(), any::<u16>()),
        b in (any::<u8>(), any::<u16>())
    ) {
        prop_assume!(a != b);
        let pa = convert_id(&KantecId::new(a.0, a.1));
        let pb = convert_id(&KantecId::new(b.0, b.1));
        prop_assert_ne!(pa, pb);
    }

    #[test]
    fn prop_card_above_range_rejected(facility in any::<u8>(), card in 65_536u64..u64::MAX) {
        let err = convert(&format!("{:02X}:{}", facility, card)).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn prop_facility_above_range_rejected(facility in 256u32..0x10_0000, card in any::<u16>()) {
        let err = convert(&format!("{:X}:{}", facility, card)).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn prop_non_hex_facility_is_format_error(facility in "[G-Zg-z]{1,2}", card in any::<u16>()) {
        let err = convert(&format!("{}:{}", facility, card)).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn prop_parse_never_panics(input in "\\PC{0,32}") {
        let _ = parse_kantec(&input);
    }

    #[test]
    fn prop_checksum_deterministic(data in prop::collection::vec(any::<u8>(), 0..16)) {
        prop_assert_eq!(checksum::calculate(&data), checksum::calculate(&data));
    }

    #[test]
    fn prop_stored_checksum_verifies(facility in any::<u8>(), card in any::<u16>()) {
        let record = encode(&KantecId::new(facility, card));
        prop_assert!(record.verify_checksum());
    }

    #[test]
    fn prop_checksum_matches_formula(sum in any::<u8>()) {
        let expected = i16::from(sum & 0x0F) + 0x17 - i16::from(sum >> 4) * 4;
        prop_assert_eq!(checksum::raw(sum), expected);
        prop_assert_eq!(checksum::calculate(&[sum]), expected.rem_euclid(256) as u8);
    }
}

/// Flags every byte sum whose checksum does not fit in a byte
#[test]
fn test_out_of_range_sums_are_flagged() {
    let flagged: Vec<u8> = (0..=u8::MAX).filter(|s| !checksum::is_in_range(*s)).collect();

    // Exactly the sums whose high nibble exceeds 5 and whose low nibble
    // cannot make up the deficit
    for sum in &flagged {
        assert!(sum >> 4 >= 6, "unexpected out-of-range sum {:#04x}", sum);
        assert!(checksum::raw(*sum) < 0);
    }
    assert!(flagged.contains(&0x60));
    assert!(!flagged.contains(&0x5F));
}

#[test]
fn test_every_facility_converts() {
    for facility in 0..=u8::MAX {
        for card in [0u16, 1, 255, 256, 52042, u16::MAX] {
            let paxton = convert_id(&KantecId::new(facility, card));
            assert!(paxton.as_str().starts_with(PAXTON_AFFIX));
            assert!(paxton.as_str().ends_with(PAXTON_AFFIX));
        }
    }
}
