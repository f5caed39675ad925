//! Constants for the Kantec and Paxton10 card number formats

/// Literal prefix and suffix of every Paxton10 card number
pub const PAXTON_AFFIX: &str = "9716";

/// Fixed three-byte header at the start of every encoded record
pub const RECORD_HEADER: [u8; 3] = [0xAB, 0xCD, 0xEF];

/// Card type byte following the header
pub const TYPE_BYTE: u8 = 0x82;

/// Fixed byte between the type byte and the card number
pub const FIXED_BYTE: u8 = 0x01;

/// Marker letter inserted positionally into the rendered record
pub const MARKER: char = 'Z';

/// Byte indices before which a marker is written during rendering
///
/// The first marker sits between the header and the type byte, the second
/// between the type byte and the fixed byte. Markers are never part of the
/// numeric record and never enter the checksum.
pub const MARKER_POSITIONS: [usize; 2] = [3, 4];

/// Number of numeric bytes in an encoded record (including the checksum)
pub const RECORD_LEN: usize = 9;

/// Offset of the little-endian card number (2 bytes)
pub const CARD_OFFSET: usize = 5;

/// Offset of the facility code
pub const FACILITY_OFFSET: usize = 7;

/// Offset of the checksum, always the last byte
pub const CHECKSUM_OFFSET: usize = RECORD_LEN - 1;

/// Length of a rendered Paxton10 card number:
/// prefix + two hex digits per byte + markers + suffix = 28 characters
pub const PAXTON_LEN: usize =
    PAXTON_AFFIX.len() * 2 + RECORD_LEN * 2 + MARKER_POSITIONS.len();

/// Separator between facility code and card number in Kantec notation
pub const KANTEC_DELIMITER: char = ':';

/// Largest facility code (one byte)
pub const MAX_FACILITY: u64 = u8::MAX as u64;

/// Largest card number (two bytes)
pub const MAX_CARD: u64 = u16::MAX as u64;

/// Base constant of the checksum formula
pub const CHECKSUM_BASE: i16 = 0x17;

/// Multiplier applied to the high nibble of the byte sum
pub const CHECKSUM_HIGH_WEIGHT: i16 = 4;
