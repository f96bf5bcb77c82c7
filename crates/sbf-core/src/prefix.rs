//! # Barcode Prefix
//!
//! The two-letter code at the front of every human barcode, identifying
//! the barcode's category or source (`DN` for DNA plates, `PR` for
//! projects, and so on). In machine form it is a base-27 number rendered
//! as the first three digits of the EAN13.
//!
//! ## Compatibility Invariant
//!
//! The letter-pair encoding is deliberately asymmetric. Encoding clamps
//! each letter's value below at zero (`max(0, byte − 64)`) but applies no
//! upper clamp, and decoding reconstructs letters arithmetically without
//! undoing the clamp. For the printable `A`–`Z` range the two directions
//! agree; outside it they do not, and the printed-label history means the
//! asymmetry must be preserved, not repaired.

use serde::{Deserialize, Serialize};

use crate::constants::{ASCII_OFFSET, CHECKSUM_LENGTH, NUMBER_LENGTH, PREFIX_BASE, PREFIX_LENGTH};

/// A barcode prefix, carrying both its human and machine forms.
///
/// Construction never fails and performs no format validation; nonsense
/// input is simply encoded or decoded by the formulas above. Rejecting
/// nonsensical prefixes is the parser's job, not this type's.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Prefix {
    human: String,
    machine: u32,
}

impl Prefix {
    /// Create a prefix from its two-character human form (e.g. `"DN"`).
    pub fn from_human(human_prefix: &str) -> Self {
        let machine = calculate_machine(human_prefix);
        Self {
            human: human_prefix.to_string(),
            machine,
        }
    }

    /// Create a prefix from its numeric machine form (e.g. `122`).
    ///
    /// Intended domain is 0–728, the range two uppercase letters encode
    /// to; larger values decode to whatever bytes the arithmetic yields.
    pub fn from_machine(machine_prefix: u32) -> Self {
        Self {
            human: calculate_human(machine_prefix),
            machine: machine_prefix,
        }
    }

    /// The two-character human form (e.g. `"DN"`).
    pub fn human(&self) -> &str {
        &self.human
    }

    /// The numeric machine form (e.g. `122`).
    pub fn machine(&self) -> u32 {
        self.machine
    }

    /// The machine form zero-padded to three digits, as it appears at the
    /// front of a machine barcode (e.g. `"122"`, `"058"`).
    pub fn machine_s(&self) -> String {
        format!("{:0width$}", self.machine, width = PREFIX_LENGTH)
    }

    /// The machine form shifted into the most-significant digits of the
    /// 12-digit internal barcode body.
    pub fn machine_full(&self) -> u64 {
        u64::from(self.machine) * 10u64.pow((NUMBER_LENGTH + CHECKSUM_LENGTH) as u32)
    }
}

impl From<&str> for Prefix {
    /// Coerce raw human text into a prefix, for call sites that accept
    /// either form.
    fn from(human_prefix: &str) -> Self {
        Self::from_human(human_prefix)
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.human)
    }
}

/// Combine the first two bytes of the human form into a base-27 number.
///
/// A byte below the offset (or a missing byte) contributes zero; bytes
/// above `Z` are passed through un-clamped.
fn calculate_machine(human: &str) -> u32 {
    let bytes = human.as_bytes();
    let first = letter_value(bytes.first());
    let second = letter_value(bytes.get(1));
    first * PREFIX_BASE + second
}

fn letter_value(byte: Option<&u8>) -> u32 {
    byte.map_or(0, |b| u32::from(b.saturating_sub(ASCII_OFFSET)))
}

/// Reconstruct the two-character human form from the machine number.
fn calculate_human(machine: u32) -> String {
    let first = char::from((machine / PREFIX_BASE + u32::from(ASCII_OFFSET)) as u8);
    let second = char::from((machine % PREFIX_BASE + u32::from(ASCII_OFFSET)) as u8);
    format!("{first}{second}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_human_encodes_base27() {
        // P = 16, R = 18: 16 * 27 + 18 = 450
        assert_eq!(Prefix::from_human("PR").machine(), 450);
        // B = 2, D = 4: 2 * 27 + 4 = 58
        assert_eq!(Prefix::from_human("BD").machine(), 58);
        // A = 1, A = 1
        assert_eq!(Prefix::from_human("AA").machine(), 28);
        assert_eq!(Prefix::from_human("ZZ").machine(), 728);
    }

    #[test]
    fn test_from_machine_decodes_letters() {
        assert_eq!(Prefix::from_machine(450).human(), "PR");
        assert_eq!(Prefix::from_machine(58).human(), "BD");
        assert_eq!(Prefix::from_machine(728).human(), "ZZ");
    }

    #[test]
    fn test_az_ba_two_digit_jump() {
        // Base 27 leaves a gap between AZ and BA.
        assert_eq!(Prefix::from_human("AZ").machine(), 53);
        assert_eq!(Prefix::from_human("BA").machine(), 55);
    }

    #[test]
    fn test_machine_s_zero_pads() {
        assert_eq!(Prefix::from_human("PR").machine_s(), "450");
        assert_eq!(Prefix::from_human("BD").machine_s(), "058");
        assert_eq!(Prefix::from_machine(5).machine_s(), "005");
    }

    #[test]
    fn test_machine_full_shifts_nine_digits() {
        assert_eq!(Prefix::from_human("PR").machine_full(), 450_000_000_000);
        assert_eq!(Prefix::from_human("BD").machine_full(), 58_000_000_000);
    }

    #[test]
    fn test_round_trip_for_uppercase_letters() {
        let prefix = Prefix::from_human("DN");
        assert_eq!(Prefix::from_machine(prefix.machine()).human(), "DN");
    }

    #[test]
    fn test_encode_decode_asymmetry() {
        // '!' (33) clamps to 0 on encode; decode reconstructs byte 64 ('@').
        // The legacy labels depend on the clamp staying one-directional.
        let clamped = Prefix::from_human("A!");
        assert_eq!(clamped.machine(), 27);
        assert_eq!(Prefix::from_machine(27).human(), "A@");
    }

    #[test]
    fn test_lowercase_not_clamped_above() {
        // 'a' (97) encodes as 33 — above the letter range, passed through.
        assert_eq!(Prefix::from_human("aa").machine(), 33 * 27 + 33);
    }

    #[test]
    fn test_short_input_contributes_zero() {
        assert_eq!(Prefix::from_human("A").machine(), 27);
        assert_eq!(Prefix::from_human("").machine(), 0);
    }

    #[test]
    fn test_display_is_human_form() {
        assert_eq!(Prefix::from_human("PR").to_string(), "PR");
    }

    #[test]
    fn test_from_str_coercion() {
        assert_eq!(Prefix::from("DN"), Prefix::from_human("DN"));
    }

    #[test]
    fn test_serde_round_trip() {
        let prefix = Prefix::from_human("PR");
        let json = serde_json::to_string(&prefix).unwrap();
        let parsed: Prefix = serde_json::from_str(&json).unwrap();
        assert_eq!(prefix, parsed);
    }
}
