//! # SangerBarcode — the barcode value object
//!
//! Composes the prefix, internal checksum, and EAN13 codecs into a single
//! immutable value that can be built from human text, machine text or
//! numerals, or a raw `(prefix, number)` pair, and renders the missing
//! representation on demand.
//!
//! ## Validity vs. structure
//!
//! Structural problems (text matching neither barcode pattern, a missing
//! checksum letter when one was demanded) surface as [`BarcodeError`]s at
//! construction. A barcode that *parses* but carries a mistyped checksum
//! or a corrupt EAN digit is a different state: construction succeeds and
//! [`SangerBarcode::valid`] reports `false`. The free-form
//! [`SangerBarcode::from_user_input`] factory never errors at all — it
//! degrades unrecognisable input to an explicitly invalid barcode so that
//! scanner and keyboard input can be handled without pre-validation.

use serde::{Deserialize, Serialize};

use crate::checksum::Checksum;
use crate::constants::{
    CHECKSUM_LENGTH, INTERNAL_LENGTH, NUMBER_LENGTH, NUMBER_LIMIT, PREFIX_LENGTH,
};
use crate::ean;
use crate::error::BarcodeError;
use crate::prefix::Prefix;

/// Rendering of a barcode whose content never parsed.
const INVALID_REP: &str = "[invalid format]";

/// A Sanger-format laboratory tracking barcode.
///
/// # Equality
///
/// Two barcodes are equal when **both** are valid and their human forms
/// match. An invalid barcode equals nothing, itself included, so this
/// type implements [`PartialEq`] but deliberately not `Eq`. Comparing a
/// barcode against a raw string or integer does not compile; parse the
/// other side first or use [`SangerBarcode::matches`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SangerBarcode {
    content: Content,
}

/// Parsed barcode content.
///
/// `Invalid` records that construction was attempted from content that
/// matched neither pattern — only [`SangerBarcode::from_user_input`]
/// produces it, the stricter factories error instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
enum Content {
    Components {
        prefix: Prefix,
        number: u64,
        /// Stored only when the input carried one; otherwise derived
        /// from the prefix and number on demand.
        checksum: Option<Checksum>,
        /// The 13-digit code as supplied, when built from machine input.
        provided_machine: Option<u64>,
    },
    Invalid,
}

/// The closed set of values a barcode can be fuzzily matched against.
///
/// Built via `From` conversions so call sites can pass a barcode
/// reference, raw text, or a numeric code directly to
/// [`SangerBarcode::matches`].
#[derive(Debug, Clone, Copy)]
pub enum BarcodeLike<'a> {
    /// Another already-parsed barcode.
    Barcode(&'a SangerBarcode),
    /// Raw text in either the human or the machine format.
    Text(&'a str),
    /// A machine barcode as a number.
    Code(u64),
}

impl<'a> From<&'a SangerBarcode> for BarcodeLike<'a> {
    fn from(barcode: &'a SangerBarcode) -> Self {
        Self::Barcode(barcode)
    }
}

impl<'a> From<&'a str> for BarcodeLike<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl From<u64> for BarcodeLike<'_> {
    fn from(code: u64) -> Self {
        Self::Code(code)
    }
}

impl SangerBarcode {
    /// Parse a human barcode such as `"PR1234K"` or, checksum omitted,
    /// `"PR1234"`.
    ///
    /// # Errors
    ///
    /// [`BarcodeError::InvalidFormat`] when the text does not match
    /// `two uppercase letters, 1–7 digits, 0–1 uppercase letters`.
    pub fn from_human(human_barcode: &str) -> Result<Self, BarcodeError> {
        let (prefix, number, checksum) = parse_human(human_barcode)?;
        Ok(Self {
            content: Content::Components {
                prefix,
                number,
                checksum,
                provided_machine: None,
            },
        })
    }

    /// Parse a human barcode, rejecting one without its checksum letter.
    ///
    /// # Errors
    ///
    /// As [`SangerBarcode::from_human`], plus
    /// [`BarcodeError::ChecksumRequired`] when the trailing letter is
    /// absent.
    pub fn from_human_requiring_checksum(human_barcode: &str) -> Result<Self, BarcodeError> {
        let (prefix, number, checksum) = parse_human(human_barcode)?;
        if checksum.is_none() {
            return Err(BarcodeError::ChecksumRequired {
                input: human_barcode.to_string(),
            });
        }
        Ok(Self {
            content: Content::Components {
                prefix,
                number,
                checksum,
                provided_machine: None,
            },
        })
    }

    /// Parse a full 13-digit machine barcode supplied as a number.
    ///
    /// A value that renders to 12 digits is left-padded with one `'0'`:
    /// low-numbered prefixes produce EAN13 codes starting with zero, and
    /// integer conversion drops that digit.
    ///
    /// # Errors
    ///
    /// [`BarcodeError::InvalidFormat`] when the digits do not lay out as
    /// prefix(3) + number(7) + checksum(2) + EAN(1).
    pub fn from_machine(machine_barcode: u64) -> Result<Self, BarcodeError> {
        Self::from_machine_str(&machine_barcode.to_string())
    }

    /// Parse a machine barcode supplied as text, applying the same
    /// 12-to-13 digit zero-padding as [`SangerBarcode::from_machine`].
    pub fn from_machine_str(machine_barcode: &str) -> Result<Self, BarcodeError> {
        let (prefix, number, checksum, provided) = parse_machine(machine_barcode)?;
        Ok(Self {
            content: Content::Components {
                prefix,
                number,
                checksum: Some(checksum),
                provided_machine: Some(provided),
            },
        })
    }

    /// Build a barcode directly from a prefix and number.
    ///
    /// The prefix may be a [`Prefix`] or raw human text. Construction is
    /// infallible; a number too big for the 7-digit region surfaces later
    /// as [`BarcodeError::NumberTooLong`] from
    /// [`SangerBarcode::machine_barcode`] and as `valid() == false`.
    pub fn from_prefix_and_number(prefix: impl Into<Prefix>, number: u64) -> Self {
        Self {
            content: Content::Components {
                prefix: prefix.into(),
                number,
                checksum: None,
                provided_machine: None,
            },
        }
    }

    /// Accept free-form user input: a human barcode with or without its
    /// checksum, or a machine barcode.
    ///
    /// Never errors. Input matching neither pattern yields an explicitly
    /// invalid barcode — check [`SangerBarcode::valid`].
    pub fn from_user_input(input: &str) -> Self {
        Self::from_human(input)
            .or_else(|_| Self::from_machine_str(input))
            .unwrap_or(Self {
                content: Content::Invalid,
            })
    }

    /// The barcode's prefix, absent when the content never parsed.
    pub fn prefix(&self) -> Option<&Prefix> {
        match &self.content {
            Content::Components { prefix, .. } => Some(prefix),
            Content::Invalid => None,
        }
    }

    /// The barcode number, absent when the content never parsed.
    pub fn number(&self) -> Option<u64> {
        match &self.content {
            Content::Components { number, .. } => Some(*number),
            Content::Invalid => None,
        }
    }

    /// The internal checksum: the stored one when the input carried a
    /// checksum, otherwise derived from the prefix and number.
    pub fn checksum(&self) -> Option<Checksum> {
        match &self.content {
            Content::Components {
                prefix,
                number,
                checksum,
                ..
            } => Some(checksum.unwrap_or_else(|| Checksum::from_prefix_and_number(prefix, *number))),
            Content::Invalid => None,
        }
    }

    /// Whether this barcode verifies.
    ///
    /// Requires the number to fit its field, the checksum derived from
    /// `(prefix, number)` to agree with the stored one, and — when the
    /// barcode came from machine input — the EAN13 check digit to hold.
    /// A barcode without a stored checksum verifies against itself.
    pub fn valid(&self) -> bool {
        match &self.content {
            Content::Components {
                prefix,
                number,
                checksum,
                provided_machine,
            } => {
                let number_fits = *number < NUMBER_LIMIT;
                let derived = Checksum::from_prefix_and_number(prefix, *number);
                let checksum_agrees = checksum.map_or(true, |stored| stored == derived);
                let ean_holds = provided_machine.map_or(true, ean::validate);
                number_fits && checksum_agrees && ean_holds
            }
            Content::Invalid => false,
        }
    }

    /// Whether machine input was provided and its EAN13 check digit
    /// verifies. `false` for barcodes built any other way.
    pub fn check_ean(&self) -> bool {
        match &self.content {
            Content::Components {
                provided_machine: Some(provided),
                ..
            } => ean::validate(*provided),
            _ => false,
        }
    }

    /// The full 13-digit machine barcode.
    ///
    /// Returns the provided value verbatim when the barcode was built
    /// from machine input; otherwise derives the 12-digit body and
    /// appends its EAN13 check digit.
    ///
    /// # Errors
    ///
    /// [`BarcodeError::NumberTooLong`] when the number does not fit the
    /// 7-digit region; [`BarcodeError::InvalidFormat`] when the content
    /// never parsed.
    pub fn machine_barcode(&self) -> Result<u64, BarcodeError> {
        match &self.content {
            Content::Components {
                provided_machine: Some(provided),
                ..
            } => Ok(*provided),
            Content::Components { .. } => {
                let body = self.sanger_body()?;
                Ok(body * 10 + u64::from(ean::calculate(body)))
            }
            Content::Invalid => Err(BarcodeError::InvalidFormat {
                input: String::new(),
            }),
        }
    }

    /// The human barcode, e.g. `"PR1234K"`. `None` unless the barcode is
    /// valid.
    pub fn human_barcode(&self) -> Option<String> {
        if !self.valid() {
            return None;
        }
        match &self.content {
            Content::Components { prefix, number, .. } => {
                let checksum = self.checksum()?;
                Some(format!("{}{}{}", prefix.human(), number, checksum.human()))
            }
            Content::Invalid => None,
        }
    }

    /// Fuzzily compare against another barcode, raw text, or a numeric
    /// machine code. Unparseable right-hand sides compare unequal rather
    /// than erroring, so raw scanner input can be matched directly.
    pub fn matches<'a>(&self, other: impl Into<BarcodeLike<'a>>) -> bool {
        match other.into() {
            BarcodeLike::Barcode(barcode) => self == barcode,
            BarcodeLike::Text(text) => *self == Self::from_user_input(text),
            BarcodeLike::Code(code) => {
                Self::from_machine(code).is_ok_and(|barcode| *self == barcode)
            }
        }
    }

    /// The 12-digit pre-EAN13 body: prefix(3) + number(7) + checksum(2).
    ///
    /// The checksum byte is always recomputed from the prefix and number
    /// here — the label never carries a mistyped checksum even when one
    /// was stored. Only one of the two checksum digits is meaningful; the
    /// byte lands in the field via `number * 100 + byte`, exactly as the
    /// legacy labels encode it.
    fn sanger_body(&self) -> Result<u64, BarcodeError> {
        match &self.content {
            Content::Components { prefix, number, .. } => {
                if *number >= NUMBER_LIMIT {
                    return Err(BarcodeError::NumberTooLong { number: *number });
                }
                let checksum = Checksum::from_prefix_and_number(prefix, *number);
                Ok(prefix.machine_full() + number * 100 + u64::from(checksum.machine()))
            }
            Content::Invalid => Err(BarcodeError::InvalidFormat {
                input: String::new(),
            }),
        }
    }
}

impl PartialEq for SangerBarcode {
    fn eq(&self, other: &Self) -> bool {
        match (self.human_barcode(), other.human_barcode()) {
            (Some(ours), Some(theirs)) => ours == theirs,
            _ => false,
        }
    }
}

impl std::fmt::Display for SangerBarcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.human_barcode(), self.machine_barcode()) {
            (Some(human), Ok(machine)) => write!(f, "{human} ({machine})"),
            _ => f.write_str(INVALID_REP),
        }
    }
}

/// Match `^[A-Z]{2}\d{1,7}[A-Z]?$` and split into components.
fn parse_human(text: &str) -> Result<(Prefix, u64, Option<Checksum>), BarcodeError> {
    let invalid = || BarcodeError::InvalidFormat {
        input: text.to_string(),
    };

    // Shortest possible form: two letters and one digit.
    let bytes = text.as_bytes();
    if bytes.len() < 3 {
        return Err(invalid());
    }
    let (prefix_bytes, rest) = bytes.split_at(2);
    if !prefix_bytes.iter().all(u8::is_ascii_uppercase) {
        return Err(invalid());
    }

    let (digits, checksum) = match rest.split_last() {
        Some((last, head)) if last.is_ascii_uppercase() => {
            (head, Some(Checksum::from_human(char::from(*last))))
        }
        _ => (rest, None),
    };
    if digits.is_empty() || digits.len() > NUMBER_LENGTH || !digits.iter().all(u8::is_ascii_digit)
    {
        return Err(invalid());
    }

    let prefix = Prefix::from_human(std::str::from_utf8(prefix_bytes).map_err(|_| invalid())?);
    Ok((prefix, decimal_value(digits), checksum))
}

/// Match the 13-digit machine layout prefix(3) + number(7) + checksum(2)
/// + EAN(1), left-padding 12-digit renderings first.
fn parse_machine(text: &str) -> Result<(Prefix, u64, Checksum, u64), BarcodeError> {
    let invalid = || BarcodeError::InvalidFormat {
        input: text.to_string(),
    };

    let padded: std::borrow::Cow<'_, str> = if text.len() == INTERNAL_LENGTH {
        format!("0{text}").into()
    } else {
        text.into()
    };
    let bytes = padded.as_bytes();
    if bytes.len() != INTERNAL_LENGTH + 1 || !bytes.iter().all(u8::is_ascii_digit) {
        return Err(invalid());
    }

    let checksum_region = &bytes[INTERNAL_LENGTH - CHECKSUM_LENGTH..INTERNAL_LENGTH];
    let prefix = Prefix::from_machine(decimal_value(&bytes[..PREFIX_LENGTH]) as u32);
    let number = decimal_value(&bytes[PREFIX_LENGTH..PREFIX_LENGTH + NUMBER_LENGTH]);
    let checksum = Checksum::from_machine(decimal_value(checksum_region) as u8);
    Ok((prefix, number, checksum, decimal_value(bytes)))
}

/// Numeric value of a run of ASCII digits.
fn decimal_value(digits: &[u8]) -> u64 {
    digits
        .iter()
        .fold(0, |value, byte| value * 10 + u64::from(byte - b'0'))
}
