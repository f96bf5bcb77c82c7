//! # Error Types
//!
//! The error enum used throughout the barcode codec, derived with
//! `thiserror`.
//!
//! Only *structural* problems are errors: input that matches neither
//! barcode pattern, a missing-but-required checksum letter, a number too
//! large for its field, or a failed prefix check. A barcode that parses
//! but carries a mistyped checksum is NOT an error — it is reported
//! through [`SangerBarcode::valid`](crate::SangerBarcode::valid), so
//! callers can distinguish "malformed" from "well-formed but incorrect".

use thiserror::Error;

/// Errors produced while parsing or encoding Sanger barcodes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BarcodeError {
    /// Input matched neither the human nor the machine barcode pattern.
    #[error("barcode {input:?} is not in a recognised format")]
    InvalidFormat {
        /// The rejected input text.
        input: String,
    },

    /// Human input lacked its trailing checksum letter and the caller
    /// demanded one.
    #[error("barcode {input:?} is missing its checksum letter")]
    ChecksumRequired {
        /// The rejected input text.
        input: String,
    },

    /// The barcode number does not fit the 7-digit number region.
    #[error("number {number} is too big to encode as a barcode")]
    NumberTooLong {
        /// The out-of-range number.
        number: u64,
    },

    /// A decoded barcode did not carry the prefix the caller expected.
    #[error("barcode prefix {actual:?} does not match expected prefix {expected:?}")]
    PrefixMismatch {
        /// The prefix the caller asked for.
        expected: String,
        /// The prefix actually decoded from the barcode.
        actual: String,
    },
}
