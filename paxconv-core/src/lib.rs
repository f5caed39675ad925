//! # Paxconv Core
//!
//! Converts Kantec card numbers (`4D:52042`) into Paxton10 card numbers
//! (`9716ABCDEFZ82Z014ACB4D139716`).
//!
//! ## Modules
//!
//! - `constants`: Record layout and format constants
//! - `types`: Core types (KantecId, EncodedRecord, PaxtonId)
//! - `parser`: Kantec text parsing and validation
//! - `encoder`: Record encoding
//! - `checksum`: Record checksum
//! - `render`: Paxton10 text rendering
//! - `fixtures`: Verified card pairs and self-check

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod checksum;
pub mod constants;
pub mod encoder;
pub mod error;
pub mod fixtures;
pub mod parser;
pub mod render;
pub mod types;

// Re-export commonly used types
pub use error::{ConvertError, ErrorKind};
pub use types::{EncodedRecord, KantecId, PaxtonId};

/// Result type alias for conversion operations
pub type Result<T> = core::result::Result<T, ConvertError>;

/// Convert a Kantec card number string to Paxton10
///
/// # Examples
///
/// ```
/// let paxton = paxconv_core::convert("4D:52042").unwrap();
/// assert_eq!(paxton.as_str(), "9716ABCDEFZ82Z014ACB4D139716");
/// ```
pub fn convert(kantec: &str) -> Result<PaxtonId> {
    let id = parser::parse_kantec(kantec)?;
    Ok(convert_id(&id))
}

/// Convert an already parsed Kantec card number
pub fn convert_id(id: &KantecId) -> PaxtonId {
    render::render(&encoder::encode(id))
}
