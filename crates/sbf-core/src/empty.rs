//! # EmptyBarcode — matching the deliberate absence of a barcode
//!
//! A convenience matcher for call sites that explicitly expect *no*
//! input — verifying an empty bed on a robot deck, for example. Keeping
//! "no barcode expected" as its own type lets a content-free
//! [`SangerBarcode`](crate::SangerBarcode) stay plainly invalid instead
//! of becoming a special case, and avoids surprising behaviour when
//! empty strings show up unexpectedly.

use serde::{Deserialize, Serialize};

/// Rendering of the empty-barcode sentinel.
const STRING_REP: &str = "[empty]";

/// Matcher for deliberately absent barcode input.
///
/// Equal only to other `EmptyBarcode` values; comparison against a
/// `SangerBarcode` — invalid or otherwise — does not compile, keeping
/// "nothing expected" and "failed to parse" distinct states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmptyBarcode;

impl EmptyBarcode {
    /// Create the sentinel.
    pub fn new() -> Self {
        Self
    }

    /// True when the input is missing entirely or blank after trimming.
    pub fn matches(&self, input: Option<&str>) -> bool {
        input.map_or(true, |text| text.trim().is_empty())
    }
}

impl std::fmt::Display for EmptyBarcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(STRING_REP)
    }
}
