//! Paxton10 record checksum
//!
//! 1. Sum the record bytes as unsigned 8-bit values (wrapping)
//! 2. Split the sum into its low and high nibbles
//! 3. `checksum = low + (0x17 - high * 4)`
//! 4. Store the result as a single byte
//!
//! Step 3 always fits a byte while the high nibble is at most 5. Larger
//! sums can produce a negative value, which is stored wrapped to eight bits
//! rather than clamped. [`is_in_range`] reports whether a sum is affected.

use crate::constants::{CHECKSUM_BASE, CHECKSUM_HIGH_WEIGHT};

#[cfg(feature = "logging")]
use tracing::{debug, trace};

/// Sum bytes with 8-bit wrapping
pub fn byte_sum(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |acc, b| acc.wrapping_add(*b))
}

/// The checksum formula without any reduction to a byte
///
/// Ranges from -37 (`sum = 0xF0`) to 38 (`sum = 0x0F`).
pub fn raw(sum: u8) -> i16 {
    let low = i16::from(sum & 0x0F);
    let high = i16::from(sum >> 4);

    low + (CHECKSUM_BASE - high * CHECKSUM_HIGH_WEIGHT)
}

/// Whether the formula yields a value that fits in a byte for this sum
pub fn is_in_range(sum: u8) -> bool {
    (0..=i16::from(u8::MAX)).contains(&raw(sum))
}

/// Calculate the checksum byte for a record payload
///
/// # Examples
///
/// ```
/// use paxconv_core::checksum;
///
/// let payload = [0xAB, 0xCD, 0xEF, 0x82, 0x01, 0x4A, 0xCB, 0x4D];
/// assert_eq!(checksum::calculate(&payload), 0x13);
/// ```
pub fn calculate(data: &[u8]) -> u8 {
    let sum = byte_sum(data);
    let value = raw(sum);

    #[cfg(feature = "logging")]
    log_out_of_range(sum, value);

    let checksum = value.rem_euclid(256) as u8;

    #[cfg(feature = "logging")]
    trace!(
        len = data.len(),
        sum = sum,
        checksum = checksum,
        "Calculated checksum"
    );

    checksum
}

#[cfg(feature = "logging")]
fn log_out_of_range(sum: u8, value: i16) {
    if !is_in_range(sum) {
        debug!(
            sum = sum,
            raw = value,
            "Checksum formula left byte range, storing wrapped value"
        );
    }
}

/// Verify a checksum byte against a payload
pub fn verify(data: &[u8], expected: u8) -> bool {
    calculate(data) == expected
}
