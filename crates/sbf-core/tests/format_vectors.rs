//! # Label Format Vector Tests
//!
//! End-to-end vectors pinning the barcode codec to values read off real
//! printed labels. If these tests fail, newly encoded barcodes will not
//! match labels already attached to physical plates and tubes — the one
//! compatibility break this library exists to prevent.
//!
//! Each vector carries the full component breakdown so a failure points
//! at the responsible stage: prefix encoding, internal checksum, body
//! layout, or EAN13 check digit.

use sbf_core::{ean, legacy, Checksum, Prefix, SangerBarcode};

/// A known-good barcode with every intermediate value spelled out.
struct Vector {
    human_prefix: &'static str,
    number: u64,
    checksum: char,
    machine_prefix: u32,
    machine_prefix_s: &'static str,
    pre_ean13: u64,
    ean13: u64,
    human_full: &'static str,
}

const VECTORS: &[Vector] = &[
    Vector {
        human_prefix: "PR",
        number: 1234,
        checksum: 'K',
        machine_prefix: 450,
        machine_prefix_s: "450",
        pre_ean13: 450_000_123_475,
        ean13: 4_500_001_234_757,
        human_full: "PR1234K",
    },
    // A low-numbered prefix: its EAN13 starts with a zero that integer
    // conversion strips, leaving a 12-digit numeral.
    Vector {
        human_prefix: "BD",
        number: 1,
        checksum: 'P',
        machine_prefix: 58,
        machine_prefix_s: "058",
        pre_ean13: 58_000_000_180,
        ean13: 580_000_001_806,
        human_full: "BD1P",
    },
];

// ---------------------------------------------------------------------------
// Component stages
// ---------------------------------------------------------------------------

#[test]
fn test_prefix_stage() {
    for vector in VECTORS {
        let prefix = Prefix::from_human(vector.human_prefix);
        assert_eq!(prefix.machine(), vector.machine_prefix);
        assert_eq!(prefix.machine_s(), vector.machine_prefix_s);
        assert_eq!(
            Prefix::from_machine(vector.machine_prefix).human(),
            vector.human_prefix
        );
    }
}

#[test]
fn test_checksum_stage() {
    for vector in VECTORS {
        let prefix = Prefix::from_human(vector.human_prefix);
        let checksum = Checksum::from_prefix_and_number(&prefix, vector.number);
        assert_eq!(checksum.human(), vector.checksum);
    }
}

#[test]
fn test_ean_stage() {
    for vector in VECTORS {
        assert_eq!(
            u64::from(ean::calculate(vector.pre_ean13)),
            vector.ean13 % 10
        );
        assert!(ean::validate(vector.ean13));
    }
}

// ---------------------------------------------------------------------------
// Full codec, every construction path
// ---------------------------------------------------------------------------

#[test]
fn test_encode_from_pair() {
    for vector in VECTORS {
        let barcode = SangerBarcode::from_prefix_and_number(vector.human_prefix, vector.number);
        assert_eq!(barcode.human_barcode().as_deref(), Some(vector.human_full));
        assert_eq!(barcode.machine_barcode(), Ok(vector.ean13));
    }
}

#[test]
fn test_decode_from_machine() {
    for vector in VECTORS {
        let barcode = SangerBarcode::from_machine(vector.ean13).expect("vector parses");
        assert!(barcode.valid());
        assert_eq!(barcode.human_barcode().as_deref(), Some(vector.human_full));
        assert_eq!(barcode.number(), Some(vector.number));
    }
}

#[test]
fn test_parse_from_human() {
    for vector in VECTORS {
        let barcode = SangerBarcode::from_human(vector.human_full).expect("vector parses");
        assert!(barcode.valid());
        assert_eq!(barcode.machine_barcode(), Ok(vector.ean13));
    }
}

#[test]
fn test_user_input_dispatch_agrees() {
    for vector in VECTORS {
        let from_text = SangerBarcode::from_user_input(vector.human_full);
        let from_digits = SangerBarcode::from_user_input(&vector.ean13.to_string());
        assert_eq!(from_text, from_digits);
        assert!(from_text.matches(vector.ean13));
    }
}

#[test]
fn test_twelve_and_thirteen_digit_text_agree() {
    // "580000001806" (scanner output, leading zero lost) and
    // "0580000001806" (full label) decode identically.
    let stripped = SangerBarcode::from_machine_str("580000001806").expect("12-digit form parses");
    let full = SangerBarcode::from_machine_str("0580000001806").expect("13-digit form parses");
    assert_eq!(stripped, full);
    assert_eq!(stripped.human_barcode().as_deref(), Some("BD1P"));
}

// ---------------------------------------------------------------------------
// Legacy forwarding layer
// ---------------------------------------------------------------------------

#[test]
fn test_legacy_layer_vectors() {
    for vector in VECTORS {
        assert_eq!(
            legacy::calculate_barcode(vector.human_prefix, vector.number),
            Ok(vector.ean13)
        );
        assert_eq!(
            legacy::calculate_checksum(vector.human_prefix, vector.number),
            vector.checksum
        );
        assert_eq!(
            legacy::split_barcode(vector.ean13),
            Ok((
                vector.machine_prefix_s.to_string(),
                vector.number,
                vector.checksum as u8
            ))
        );
        assert_eq!(
            legacy::prefix_to_human(vector.machine_prefix),
            vector.human_prefix
        );
        assert_eq!(
            legacy::human_to_machine_barcode(vector.human_full),
            Ok(vector.ean13)
        );
        assert_eq!(
            legacy::barcode_to_human(vector.ean13).as_deref(),
            Some(vector.human_full)
        );
        assert!(legacy::check_ean(vector.ean13));
    }
}
