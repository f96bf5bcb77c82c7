//! # Internal Checksum
//!
//! The internally generated checksum that guards user-typed barcodes. In
//! human form it is the single trailing letter (`A`–`W`); in machine form
//! it is that letter's byte value, occupying the two digits just before
//! the EAN13 print check digit.
//!
//! This checksum is independent of the EAN13 check digit: the EAN13
//! protects scans of the printed label, the internal checksum protects
//! keyboard entry of the short human form.

use serde::{Deserialize, Serialize};

use crate::constants::CHECKSUM_ASCII_OFFSET;
use crate::prefix::Prefix;

/// A barcode's internal checksum, carrying both its human and machine
/// forms.
///
/// Two checksums are equal when their human forms are equal, regardless
/// of how each was constructed. Comparing a checksum against any other
/// type does not compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Checksum {
    human: char,
    machine: u8,
}

impl Checksum {
    /// Create a checksum from its single-letter human form.
    pub fn from_human(human_checksum: char) -> Self {
        let mut buf = [0u8; 4];
        let machine = human_checksum.encode_utf8(&mut buf).as_bytes()[0];
        Self {
            human: human_checksum,
            machine,
        }
    }

    /// Create a checksum from its byte-value machine form.
    pub fn from_machine(machine_checksum: u8) -> Self {
        Self {
            human: char::from(machine_checksum),
            machine: machine_checksum,
        }
    }

    /// Derive the checksum for a prefix and barcode number.
    ///
    /// The content string `prefix.human + number` is reversed, each byte
    /// is weighted by its 1-based position, and the weighted sum mod 23
    /// selects a letter from `A`..=`W`.
    pub fn from_prefix_and_number(prefix: &Prefix, number: u64) -> Self {
        let content = format!("{}{}", prefix.human(), number);
        let sum: u64 = content
            .bytes()
            .rev()
            .enumerate()
            .map(|(index, byte)| u64::from(byte) * (index as u64 + 1))
            .sum();
        Self::from_machine((sum % 23) as u8 + CHECKSUM_ASCII_OFFSET)
    }

    /// The single-letter human form (e.g. `'K'`).
    pub fn human(&self) -> char {
        self.human
    }

    /// The byte-value machine form (e.g. `75`).
    pub fn machine(&self) -> u8 {
        self.machine
    }
}

impl std::fmt::Display for Checksum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.human)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_to_machine() {
        let checksum = Checksum::from_human('K');
        assert_eq!(checksum.machine(), 75);
    }

    #[test]
    fn test_machine_to_human() {
        let checksum = Checksum::from_machine(75);
        assert_eq!(checksum.human(), 'K');
    }

    #[test]
    fn test_equal_regardless_of_construction() {
        assert_eq!(Checksum::from_human('K'), Checksum::from_machine(75));
        assert_ne!(Checksum::from_human('K'), Checksum::from_human('P'));
    }

    #[test]
    fn test_derived_from_prefix_and_number() {
        // "PR1234" reversed is "4321RP"; the weighted byte sum is 1390,
        // and 1390 mod 23 = 10, selecting 'K'.
        let checksum = Checksum::from_prefix_and_number(&Prefix::from_human("PR"), 1234);
        assert_eq!(checksum.human(), 'K');
        assert_eq!(checksum.machine(), 75);
    }

    #[test]
    fn test_derived_low_prefix() {
        let checksum = Checksum::from_prefix_and_number(&Prefix::from_human("BD"), 1);
        assert_eq!(checksum.human(), 'P');
        assert_eq!(checksum.machine(), 80);
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let prefix = Prefix::from_human("DN");
        let first = Checksum::from_prefix_and_number(&prefix, 12345);
        let second = Checksum::from_prefix_and_number(&prefix, 12345);
        assert_eq!(first, second);
    }

    #[test]
    fn test_letter_range_is_a_to_w() {
        for number in 0..200 {
            let checksum = Checksum::from_prefix_and_number(&Prefix::from_human("PR"), number);
            assert!(
                ('A'..='W').contains(&checksum.human()),
                "checksum {} out of range for number {number}",
                checksum.human()
            );
        }
    }

    #[test]
    fn test_display_is_human_form() {
        assert_eq!(Checksum::from_machine(80).to_string(), "P");
    }

    #[test]
    fn test_serde_round_trip() {
        let checksum = Checksum::from_human('K');
        let json = serde_json::to_string(&checksum).unwrap();
        let parsed: Checksum = serde_json::from_str(&json).unwrap();
        assert_eq!(checksum, parsed);
    }
}
