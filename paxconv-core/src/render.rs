//! Paxton10 text rendering

use crate::constants::{MARKER, MARKER_POSITIONS, PAXTON_AFFIX, PAXTON_LEN};
use crate::types::{EncodedRecord, PaxtonId};
use alloc::string::String;

/// Symbol for each nibble value
const NIBBLE_SYMBOLS: &[u8; 16] = b"0123456789ABCDEF";

/// Render a record as a Paxton10 card number
///
/// Every byte becomes two uppercase hex digits. A `Z` marker is written
/// before the type byte and before the fixed byte, and the whole is wrapped
/// in the `9716` prefix and suffix:
///
/// ```text
/// 9716 ABCDEF Z 82 Z 01 4ACB 4D 13 9716
/// ```
pub fn render(record: &EncodedRecord) -> PaxtonId {
    let mut out = String::with_capacity(PAXTON_LEN);
    out.push_str(PAXTON_AFFIX);

    for (index, byte) in record.as_bytes().iter().enumerate() {
        if MARKER_POSITIONS.contains(&index) {
            out.push(MARKER);
        }
        out.push(char::from(NIBBLE_SYMBOLS[usize::from(byte >> 4)]));
        out.push(char::from(NIBBLE_SYMBOLS[usize::from(byte & 0x0F)]));
    }

    out.push_str(PAXTON_AFFIX);

    PaxtonId::from_rendered(out)
}
