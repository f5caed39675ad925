//! Kantec card number parsing
//!
//! Accepted form is `<hex>:<decimal>`, e.g. `4D:52042`. Whitespace around
//! the whole value and around either side of the colon is ignored.

use crate::constants::{KANTEC_DELIMITER, MAX_CARD, MAX_FACILITY};
use crate::error::{ConvertError, Field};
use crate::types::KantecId;
use alloc::string::{String, ToString};

#[cfg(feature = "logging")]
use tracing::trace;

/// Parse a Kantec card number
///
/// Structural problems (delimiter, empty sides, bad digits) are reported
/// before range problems, so `ZZ:99999` is a format error even though the
/// card number is also out of range.
pub fn parse_kantec(input: &str) -> Result<KantecId, ConvertError> {
    let trimmed = input.trim();

    let mut parts = trimmed.split(KANTEC_DELIMITER);
    let (facility_text, card_text) = match (parts.next(), parts.next(), parts.next()) {
        (Some(facility), Some(card), None) => (facility.trim(), card.trim()),
        (_, None, _) => return Err(ConvertError::MissingDelimiter(input.to_string())),
        _ => return Err(ConvertError::TooManyDelimiters(input.to_string())),
    };

    if facility_text.is_empty() {
        return Err(ConvertError::EmptyField {
            field: Field::Facility,
            input: input.to_string(),
        });
    }
    if card_text.is_empty() {
        return Err(ConvertError::EmptyField {
            field: Field::Card,
            input: input.to_string(),
        });
    }

    let facility = parse_number(facility_text, 16)
        .ok_or_else(|| ConvertError::InvalidHex(facility_text.to_string()))?;
    let card = parse_number(card_text, 10)
        .ok_or_else(|| ConvertError::InvalidDecimal(card_text.to_string()))?;

    let facility = match facility {
        Some(value) if value <= MAX_FACILITY => value as u8,
        _ => return Err(ConvertError::FacilityOutOfRange(facility_text.to_uppercase())),
    };
    let card = match card {
        Some(value) if value <= MAX_CARD => value as u16,
        _ => return Err(ConvertError::CardOutOfRange(String::from(card_text))),
    };

    #[cfg(feature = "logging")]
    trace!(facility = facility, card = card, "Parsed Kantec card number");

    Ok(KantecId::new(facility, card))
}

/// Parse an unsigned numeral in the given radix
///
/// Returns `None` if any character is not a digit of the radix, and
/// `Some(None)` if the digits are valid but the value overflows `u64`.
fn parse_number(text: &str, radix: u32) -> Option<Option<u64>> {
    if !text.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    Some(u64::from_str_radix(text, radix).ok())
}
