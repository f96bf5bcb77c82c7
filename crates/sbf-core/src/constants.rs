//! # Encoding Constants
//!
//! Field widths and offsets shared by the prefix, checksum, and barcode
//! codecs. These values define the physical label format and must never
//! change: barcodes printed years ago still have to decode to the same
//! components.

/// Subtracted from a prefix letter's byte value during conversion to a
/// number, so that `A` has a value of 1 and `Z` a value of 26.
pub const ASCII_OFFSET: u8 = 64;

/// Base used when combining the two prefix letter values into one number.
///
/// Note: base 27 (not 26) produces a two-digit jump between `AZ` (53) and
/// `BA` (55). The printed labels encode it this way, so it is maintained
/// for compatibility.
pub const PREFIX_BASE: u32 = 27;

/// Digit length of the numeric prefix region of a machine barcode.
pub const PREFIX_LENGTH: usize = 3;

/// Digit length of the unique barcode number region.
pub const NUMBER_LENGTH: usize = 7;

/// Digit length of the internal checksum region.
pub const CHECKSUM_LENGTH: usize = 2;

/// Digit length of the internally generated portion of a machine barcode,
/// ignoring the trailing EAN13 print check digit.
pub const INTERNAL_LENGTH: usize = PREFIX_LENGTH + NUMBER_LENGTH + CHECKSUM_LENGTH;

/// Added to the 0-indexed mod-23 remainder to produce the checksum letter,
/// giving the range `A`..=`W`.
pub const CHECKSUM_ASCII_OFFSET: u8 = 65;

/// Smallest number that no longer fits the 7-digit number region.
pub const NUMBER_LIMIT: u64 = 10_000_000;
