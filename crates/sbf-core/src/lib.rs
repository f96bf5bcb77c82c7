//! # sbf-core — Sanger Barcode Format Codec
//!
//! Converts between the two representations of a laboratory tracking
//! barcode: the short printable human form (`PR1234K` — two-letter
//! prefix, up to seven digits, one checksum letter) and the 13-digit
//! EAN13 numeral printed on the machine-readable label
//! (`4500001234757`). Barcodes can also be built directly from a
//! `(prefix, number)` pair.
//!
//! The encoding reproduces the legacy label scheme bit-for-bit: the
//! base-27 letter-pair prefix, the internal mod-23 checksum letter, and
//! the standard EAN13 check digit — including the scheme's historical
//! quirks, which are load-bearing for barcodes already printed on
//! physical labels.
//!
//! ## Key Design Principles
//!
//! 1. **One constructor per input kind.** `from_human`, `from_machine`,
//!    and `from_prefix_and_number` are separate factories, so supplying
//!    zero or several input kinds is unrepresentable. The free-form
//!    `from_user_input` dispatcher never errors — it degrades to an
//!    explicitly invalid barcode for unrecognisable scanner input.
//!
//! 2. **Structural errors vs. validity.** Text matching neither pattern
//!    is a [`BarcodeError`]; a barcode that parses but fails its
//!    checksum is a *valid-question* answered by
//!    [`SangerBarcode::valid`], never an error.
//!
//! 3. **Typed comparison.** Equality is defined between barcodes only,
//!    and fuzzy matching against raw text or numerals goes through the
//!    closed [`BarcodeLike`] set — no stringly-typed comparison surface.
//!
//! 4. **Pure and eager.** Every derivation is a total pure function
//!    computed without interior mutability, so all types are `Send +
//!    Sync` with nothing to lock.
//!
//! ## Crate Policy
//!
//! - No dependencies on other workspace crates (this is the leaf).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Public value types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod barcode;
pub mod checksum;
pub mod constants;
pub mod ean;
pub mod empty;
pub mod error;
pub mod legacy;
pub mod prefix;

// Re-export primary types for ergonomic imports.
pub use barcode::{BarcodeLike, SangerBarcode};
pub use checksum::Checksum;
pub use empty::EmptyBarcode;
pub use error::BarcodeError;
pub use prefix::Prefix;
