//! Core types for Kantec and Paxton10 card numbers

use crate::checksum;
use crate::constants::{
    CARD_OFFSET, CHECKSUM_OFFSET, FACILITY_OFFSET, FIXED_BYTE, MARKER, MARKER_POSITIONS,
    PAXTON_AFFIX, PAXTON_LEN, RECORD_HEADER, RECORD_LEN, TYPE_BYTE,
};
use crate::error::ConvertError;
use alloc::format;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// A Kantec card number: one-byte facility code and two-byte card number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KantecId {
    /// Facility code, written as two hex digits
    pub facility: u8,

    /// Card number, written in decimal
    pub card: u16,
}

impl KantecId {
    /// Create a new Kantec card number
    pub const fn new(facility: u8, card: u16) -> Self {
        Self { facility, card }
    }
}

impl fmt::Display for KantecId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}:{}", self.facility, self.card)
    }
}

impl FromStr for KantecId {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse_kantec(s)
    }
}

/// The numeric record behind a Paxton10 card number
///
/// Layout:
/// ```text
/// AB CD EF 82 01 <card lo> <card hi> <facility> <checksum>
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "std", derive(Deserialize), serde(try_from = "[u8; 9]"))]
pub struct EncodedRecord([u8; RECORD_LEN]);

impl EncodedRecord {
    pub(crate) const fn from_raw(bytes: [u8; RECORD_LEN]) -> Self {
        Self(bytes)
    }

    /// All record bytes, checksum last
    pub fn as_bytes(&self) -> &[u8; RECORD_LEN] {
        &self.0
    }

    /// Bytes covered by the checksum
    pub fn payload(&self) -> &[u8] {
        &self.0[..CHECKSUM_OFFSET]
    }

    /// Card number stored in the record
    pub fn card(&self) -> u16 {
        u16::from_le_bytes([self.0[CARD_OFFSET], self.0[CARD_OFFSET + 1]])
    }

    /// Facility code stored in the record
    pub fn facility(&self) -> u8 {
        self.0[FACILITY_OFFSET]
    }

    /// Stored checksum byte
    pub fn checksum(&self) -> u8 {
        self.0[CHECKSUM_OFFSET]
    }

    /// Check the stored checksum against the payload
    pub fn verify_checksum(&self) -> bool {
        checksum::verify(self.payload(), self.checksum())
    }
}

impl TryFrom<[u8; RECORD_LEN]> for EncodedRecord {
    type Error = ConvertError;

    /// Accept raw bytes only if the fixed bytes and checksum are intact
    fn try_from(bytes: [u8; RECORD_LEN]) -> Result<Self, Self::Error> {
        let fixed = &bytes[..CARD_OFFSET];
        if fixed[..RECORD_HEADER.len()] != RECORD_HEADER
            || fixed[RECORD_HEADER.len()] != TYPE_BYTE
            || fixed[RECORD_HEADER.len() + 1] != FIXED_BYTE
        {
            return Err(ConvertError::InvalidEncoding(format!(
                "unexpected fixed bytes {:02X?}",
                fixed
            )));
        }

        let record = Self(bytes);
        if !record.verify_checksum() {
            return Err(ConvertError::InvalidEncoding(format!(
                "checksum {:02X} does not match payload",
                record.checksum()
            )));
        }

        Ok(record)
    }
}

/// A rendered Paxton10 card number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "std", derive(Deserialize), serde(try_from = "String"))]
pub struct PaxtonId(String);

impl PaxtonId {
    pub(crate) fn from_rendered(rendered: String) -> Self {
        debug_assert_eq!(rendered.len(), PAXTON_LEN);
        debug_assert!(rendered.starts_with(PAXTON_AFFIX) && rendered.ends_with(PAXTON_AFFIX));
        Self(rendered)
    }

    /// Borrow the card number text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaxtonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PaxtonId {
    type Error = ConvertError;

    /// Accept text only if it has the fixed Paxton10 shape
    fn try_from(text: String) -> Result<Self, Self::Error> {
        if text.len() != PAXTON_LEN
            || !text.starts_with(PAXTON_AFFIX)
            || !text.ends_with(PAXTON_AFFIX)
        {
            return Err(ConvertError::InvalidEncoding(text));
        }

        // Marker k sits after the prefix, 2 * position hex digits and k earlier markers
        let marker_at = |i: usize| {
            MARKER_POSITIONS
                .iter()
                .enumerate()
                .any(|(k, pos)| i == PAXTON_AFFIX.len() + 2 * pos + k)
        };
        let body = &text[PAXTON_AFFIX.len()..PAXTON_LEN - PAXTON_AFFIX.len()];
        let well_formed = body.char_indices().all(|(j, c)| {
            if marker_at(PAXTON_AFFIX.len() + j) {
                c == MARKER
            } else {
                c.is_ascii_digit() || ('A'..='F').contains(&c)
            }
        });
        if !well_formed {
            return Err(ConvertError::InvalidEncoding(text));
        }

        Ok(Self(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode;
    use alloc::string::ToString;

    #[test]
    fn test_kantec_display_is_canonical() {
        assert_eq!(KantecId::new(0x4D, 52042).to_string(), "4D:52042");
        assert_eq!(KantecId::new(0x0A, 7).to_string(), "0A:7");
    }

    #[test]
    fn test_kantec_from_str() {
        let id: KantecId = "4d:52042".parse().unwrap();
        assert_eq!(id, KantecId::new(0x4D, 52042));
    }

    #[test]
    fn test_record_accessors() {
        let record = encode(&KantecId::new(0x35, 46655));

        assert_eq!(record.card(), 46655);
        assert_eq!(record.facility(), 0x35);
        assert_eq!(record.checksum(), 0x17);
        assert_eq!(record.payload().len(), RECORD_LEN - 1);
        assert!(record.verify_checksum());
    }

    #[test]
    fn test_record_checksum_mismatch_detected() {
        let record = encode(&KantecId::new(0x4D, 52042));
        let mut bytes = *record.as_bytes();
        bytes[CHECKSUM_OFFSET] ^= 0x01;

        assert!(!EncodedRecord::from_raw(bytes).verify_checksum());
    }

    #[test]
    fn test_record_try_from_bytes() {
        let record = encode(&KantecId::new(0x4D, 52042));
        assert_eq!(EncodedRecord::try_from(*record.as_bytes()), Ok(record));

        let mut bad_checksum = *record.as_bytes();
        bad_checksum[CHECKSUM_OFFSET] ^= 0x01;
        assert!(EncodedRecord::try_from(bad_checksum).unwrap_err().is_format());

        let mut bad_header = *record.as_bytes();
        bad_header[0] = 0x00;
        assert!(EncodedRecord::try_from(bad_header).is_err());
    }

    #[test]
    fn test_paxton_try_from_string() {
        let good = "9716ABCDEFZ82Z014ACB4D139716".to_string();
        assert_eq!(PaxtonId::try_from(good.clone()).unwrap().as_str(), good);

        for bad in [
            "hello",
            "0000ABCDEFZ82Z014ACB4D139716",
            "9716ABCDEF882Z014ACB4D139716",
            "9716ABCDEFZ82Z014acb4d139716",
            "9716ABCDEFZ82Z014ACB4D1397160",
        ] {
            assert!(
                PaxtonId::try_from(bad.to_string()).is_err(),
                "accepted {}",
                bad
            );
        }
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_deserialize_rejects_malformed_values() {
        assert!(serde_json::from_str::<PaxtonId>("\"hello\"").is_err());
        assert!(serde_json::from_str::<EncodedRecord>("[0,0,0,0,0,0,0,0,0]").is_err());

        let id: PaxtonId = serde_json::from_str("\"9716ABCDEFZ82Z013FB635179716\"").unwrap();
        assert_eq!(id.as_str(), "9716ABCDEFZ82Z013FB635179716");

        let record = encode(&KantecId::new(0x35, 46655));
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(serde_json::from_str::<EncodedRecord>(&json).unwrap(), record);
    }
}
