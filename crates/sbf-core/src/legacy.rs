//! # Legacy Forwarding Helpers
//!
//! Free functions kept for compatibility with the long-standing LIMS
//! barcode API. Each one forwards into the [`SangerBarcode`] factories
//! and reshapes the result — component tuples, `Option`s where old call
//! sites expect a soft failure — and none carries logic of its own.
//!
//! New code should construct a [`SangerBarcode`] and use its accessors
//! directly.

use crate::barcode::SangerBarcode;
use crate::checksum::Checksum;
use crate::error::BarcodeError;
use crate::prefix::Prefix;

/// Split a machine barcode into `(machine_prefix, number, checksum_byte)`,
/// with the prefix in its zero-padded string form.
///
/// Prefer [`SangerBarcode::from_machine`] and the component accessors.
///
/// # Errors
///
/// [`BarcodeError::InvalidFormat`] when the input does not parse.
pub fn split_barcode(machine_barcode: u64) -> Result<(String, u64, u8), BarcodeError> {
    let barcode = SangerBarcode::from_machine(machine_barcode)?;
    match (barcode.prefix(), barcode.number(), barcode.checksum()) {
        (Some(prefix), Some(number), Some(checksum)) => {
            Ok((prefix.machine_s(), number, checksum.machine()))
        }
        _ => Err(BarcodeError::InvalidFormat {
            input: machine_barcode.to_string(),
        }),
    }
}

/// Split a human barcode into `(human_prefix, number_text, checksum)`.
///
/// # Errors
///
/// [`BarcodeError::InvalidFormat`] when the input does not parse.
pub fn split_human_barcode(human_barcode: &str) -> Result<(String, String, char), BarcodeError> {
    let barcode = SangerBarcode::from_human(human_barcode)?;
    match (barcode.prefix(), barcode.number(), barcode.checksum()) {
        (Some(prefix), Some(number), Some(checksum)) => {
            Ok((prefix.human().to_string(), number.to_string(), checksum.human()))
        }
        _ => Err(BarcodeError::InvalidFormat {
            input: human_barcode.to_string(),
        }),
    }
}

/// Extract the barcode number from a machine barcode, or `None` when the
/// input does not parse (old call sites expect a soft failure here).
pub fn number_to_human(machine_barcode: u64) -> Option<u64> {
    SangerBarcode::from_machine(machine_barcode)
        .ok()
        .and_then(|barcode| barcode.number())
}

/// The human prefix of a machine barcode, or `None` unless the barcode
/// parses *and* verifies.
pub fn prefix_from_barcode(machine_barcode: u64) -> Option<String> {
    let barcode = SangerBarcode::from_machine(machine_barcode).ok()?;
    if !barcode.valid() {
        return None;
    }
    barcode.prefix().map(|p| p.human().to_string())
}

/// Convert a numeric prefix to its two-character human form, e.g.
/// `122` to `"DN"`.
pub fn prefix_to_human(machine_prefix: u32) -> String {
    Prefix::from_machine(machine_prefix).human().to_string()
}

/// Convert a full human barcode to its EAN13 numeral.
///
/// # Errors
///
/// [`BarcodeError::InvalidFormat`] when the text does not parse or the
/// barcode does not verify — a mistyped checksum, most likely.
pub fn human_to_machine_barcode(human_barcode: &str) -> Result<u64, BarcodeError> {
    let barcode = SangerBarcode::from_human(human_barcode)?;
    if !barcode.valid() {
        return Err(BarcodeError::InvalidFormat {
            input: human_barcode.to_string(),
        });
    }
    barcode.machine_barcode()
}

/// Convert a machine barcode to its human form, e.g. `4500001234757` to
/// `"PR1234K"`. `None` when the input does not parse or verify.
pub fn barcode_to_human(machine_barcode: u64) -> Option<String> {
    SangerBarcode::from_machine(machine_barcode)
        .ok()
        .and_then(|barcode| barcode.human_barcode())
}

/// Convert a machine barcode to its human form, additionally requiring
/// the decoded prefix to match `expected_prefix`.
///
/// # Errors
///
/// [`BarcodeError::PrefixMismatch`] when the barcode decodes under a
/// different prefix; [`BarcodeError::InvalidFormat`] when it does not
/// parse or verify at all.
pub fn barcode_to_human_checked(
    machine_barcode: u64,
    expected_prefix: &str,
) -> Result<String, BarcodeError> {
    let barcode = SangerBarcode::from_machine(machine_barcode)?;
    if let Some(prefix) = barcode.prefix() {
        if prefix.human() != expected_prefix {
            return Err(BarcodeError::PrefixMismatch {
                expected: expected_prefix.to_string(),
                actual: prefix.human().to_string(),
            });
        }
    }
    barcode
        .human_barcode()
        .ok_or_else(|| BarcodeError::InvalidFormat {
            input: machine_barcode.to_string(),
        })
}

/// Verify the EAN13 check digit of a full machine barcode.
pub fn check_ean(machine_barcode: u64) -> bool {
    SangerBarcode::from_machine(machine_barcode)
        .map(|barcode| barcode.check_ean())
        .unwrap_or(false)
}

/// The EAN13 machine barcode for a prefix and number, e.g. `("PR", 1234)`
/// to `4500001234757`.
///
/// # Errors
///
/// [`BarcodeError::NumberTooLong`] when the number exceeds the 7-digit
/// region.
pub fn calculate_barcode(human_prefix: &str, number: u64) -> Result<u64, BarcodeError> {
    SangerBarcode::from_prefix_and_number(human_prefix, number).machine_barcode()
}

/// The single-letter internal checksum for a prefix and number, e.g.
/// `("PR", 1234)` to `'K'`.
pub fn calculate_checksum(human_prefix: &str, number: u64) -> char {
    Checksum::from_prefix_and_number(&Prefix::from_human(human_prefix), number).human()
}
