//! Error types for card number conversion

use alloc::string::String;
use core::fmt;

/// Which side of a Kantec number an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Hexadecimal facility code before the colon
    Facility,
    /// Decimal card number after the colon
    Card,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Facility => f.write_str("facility code"),
            Field::Card => f.write_str("card number"),
        }
    }
}

/// Broad category of a [`ConvertError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Structurally malformed input
    Format,
    /// Well-formed input with a value outside its byte range
    Range,
    /// The codec itself could not produce output
    Internal,
}

/// Errors that can occur while converting a Kantec card number
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// No colon between facility code and card number
    #[cfg_attr(feature = "std", error("Invalid format. Expected 'XX:NNNNN', got '{0}'"))]
    MissingDelimiter(String),

    /// More than one colon
    #[cfg_attr(feature = "std", error("Invalid format. Expected a single ':', got '{0}'"))]
    TooManyDelimiters(String),

    /// One side of the colon is empty
    #[cfg_attr(feature = "std", error("Invalid format. Missing {field} in '{input}'"))]
    EmptyField {
        /// The side that was empty.
        field: Field,
        /// The full input as given.
        input: String,
    },

    /// Facility code contains a non-hex character
    #[cfg_attr(feature = "std", error("Invalid hex facility code '{0}'"))]
    InvalidHex(String),

    /// Card number contains a non-digit character
    #[cfg_attr(feature = "std", error("Invalid decimal card number '{0}'"))]
    InvalidDecimal(String),

    /// Facility code above 0xFF
    #[cfg_attr(feature = "std", error("Facility code must be 00-FF (hex), got {0}"))]
    FacilityOutOfRange(String),

    /// Card number above 65535
    #[cfg_attr(feature = "std", error("Card number must be 0-65535, got {0}"))]
    CardOutOfRange(String),

    /// Text or bytes that do not have the Paxton10 shape
    #[cfg_attr(feature = "std", error("Invalid Paxton10 encoding: {0}"))]
    InvalidEncoding(String),

    /// A byte could not be rendered
    #[cfg_attr(feature = "std", error("Internal encoding error: {0}"))]
    Internal(String),
}

impl ConvertError {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingDelimiter(_)
            | Self::TooManyDelimiters(_)
            | Self::EmptyField { .. }
            | Self::InvalidHex(_)
            | Self::InvalidDecimal(_)
            | Self::InvalidEncoding(_) => ErrorKind::Format,
            Self::FacilityOutOfRange(_) | Self::CardOutOfRange(_) => ErrorKind::Range,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }

    /// True for structurally malformed input
    pub fn is_format(&self) -> bool {
        self.kind() == ErrorKind::Format
    }

    /// True for values outside the facility or card range
    pub fn is_range(&self) -> bool {
        self.kind() == ErrorKind::Range
    }
}
