//! Record encoding

use crate::checksum;
use crate::constants::{
    CARD_OFFSET, CHECKSUM_OFFSET, FACILITY_OFFSET, FIXED_BYTE, RECORD_HEADER, RECORD_LEN,
    TYPE_BYTE,
};
use crate::types::{EncodedRecord, KantecId};

#[cfg(feature = "logging")]
use tracing::trace;

/// Encode a Kantec card number into its record
///
/// The record is laid out as:
/// 1. Header (3 bytes): `AB CD EF`
/// 2. Type byte: `82`
/// 3. Fixed byte: `01`
/// 4. Card number (2 bytes, little-endian)
/// 5. Facility code (1 byte)
/// 6. Checksum over bytes 1-5 (1 byte)
pub fn encode(id: &KantecId) -> EncodedRecord {
    let mut buf = [0u8; RECORD_LEN];

    buf[..RECORD_HEADER.len()].copy_from_slice(&RECORD_HEADER);
    buf[RECORD_HEADER.len()] = TYPE_BYTE;
    buf[RECORD_HEADER.len() + 1] = FIXED_BYTE;
    buf[CARD_OFFSET..CARD_OFFSET + 2].copy_from_slice(&id.card.to_le_bytes());
    buf[FACILITY_OFFSET] = id.facility;
    buf[CHECKSUM_OFFSET] = checksum::calculate(&buf[..CHECKSUM_OFFSET]);

    #[cfg(feature = "logging")]
    trace!(
        facility = id.facility,
        card = id.card,
        checksum = buf[CHECKSUM_OFFSET],
        "Encoded record"
    );

    EncodedRecord::from_raw(buf)
}

/// Builder for records from raw numeric fields
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordBuilder {
    facility: u8,
    card: u16,
}

impl RecordBuilder {
    /// Create a builder for facility 0, card 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the facility code
    pub fn facility(mut self, facility: u8) -> Self {
        self.facility = facility;
        self
    }

    /// Set the card number
    pub fn card(mut self, card: u16) -> Self {
        self.card = card;
        self
    }

    /// The Kantec card number this builder describes
    pub fn kantec(&self) -> KantecId {
        KantecId::new(self.facility, self.card)
    }

    /// Build and encode the record
    pub fn build(self) -> EncodedRecord {
        encode(&self.kantec())
    }
}
