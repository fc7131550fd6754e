//! Byte-level test vectors for the turn data section format.
//!
//! Any reader or writer of turn data files, in any language, should agree
//! with these vectors.

use serde::{Deserialize, Serialize};

/// Hex encoding of [`crate::sample_store`] with [`crate::SAMPLE_CHECKSUM`].
pub const SAMPLE_SECTION_HEX: &str = concat!(
    "efbeadde",     // checksum
    "03000000",     // count
    "67824a",       // turn instructions
    "0500ffff0700", // lane data ids
    "000001000200", // entry class ids
    "1030ff",       // pre-turn bearings
    "204000",       // post-turn bearings
);

/// A section vector that can be shared across implementations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestVector {
    /// Unique identifier for this vector.
    pub id: String,
    /// Human-readable description.
    pub description: String,
    /// Serialized section (hex-encoded).
    pub input_hex: String,
    /// Expected connectivity checksum.
    pub expected_checksum: Option<u32>,
    /// Expected record count.
    pub expected_count: Option<u32>,
    /// Expected error message fragment (if decoding should fail).
    pub expected_error: Option<String>,
}

impl TestVector {
    fn valid(id: &str, description: &str, input_hex: &str, checksum: u32, count: u32) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            input_hex: input_hex.into(),
            expected_checksum: Some(checksum),
            expected_count: Some(count),
            expected_error: None,
        }
    }

    fn invalid(id: &str, description: &str, input_hex: &str, error: &str) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            input_hex: input_hex.into(),
            expected_checksum: None,
            expected_count: None,
            expected_error: Some(error.into()),
        }
    }

    /// Returns true if decoding this vector should fail.
    #[must_use]
    pub fn expects_error(&self) -> bool {
        self.expected_error.is_some()
    }
}

/// Sections that decode successfully.
pub fn section_vectors() -> Vec<TestVector> {
    vec![
        TestVector::valid(
            "section_empty",
            "Empty store, zero checksum",
            "00000000 00000000",
            0,
            0,
        ),
        TestVector::valid(
            "section_empty_max_checksum",
            "Empty store, all-ones checksum",
            "ffffffff 00000000",
            u32::MAX,
            0,
        ),
        TestVector::valid(
            "section_single",
            "Turn right, lanes 5, entry class 1, bearings 90 and 180 degrees",
            "04030201 01000000 43 0500 0100 40 80",
            0x0102_0304,
            1,
        ),
        TestVector::valid(
            "section_single_no_lanes",
            "No-turn instruction without lane data",
            "00000000 01000000 11 ffff 0000 00 00",
            0,
            1,
        ),
        TestVector::valid(
            "section_sample",
            "The three-record sample store",
            SAMPLE_SECTION_HEX,
            0xdead_beef,
            3,
        ),
    ]
}

/// Sections that must be rejected.
pub fn malformed_vectors() -> Vec<TestVector> {
    vec![
        TestVector::invalid("truncated_empty", "No bytes at all", "", "unexpected end"),
        TestVector::invalid(
            "truncated_header",
            "Checksum without count",
            "efbeadde",
            "unexpected end",
        ),
        TestVector::invalid(
            "truncated_column",
            "Count of two, one record of columns",
            "00000000 02000000 43 0500 0100 40 80",
            "unexpected end",
        ),
        TestVector::invalid(
            "inflated_count",
            "Count of u32::MAX with a one-record body",
            "00000000 ffffffff 43 0500 0100 40 80",
            "unexpected end",
        ),
        TestVector::invalid(
            "trailing_bytes",
            "Empty section followed by two bytes",
            "00000000 00000000 0000",
            "trailing bytes",
        ),
    ]
}

/// All vectors, valid first.
pub fn all_vectors() -> Vec<TestVector> {
    let mut vectors = section_vectors();
    vectors.extend(malformed_vectors());
    vectors
}

/// Serializes all vectors to pretty JSON for other implementations.
pub fn vectors_json() -> String {
    serde_json::to_string_pretty(&all_vectors()).expect("Failed to serialize vectors")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::golden::hex_decode;

    #[test]
    fn ids_are_unique() {
        let vectors = all_vectors();
        let mut ids: Vec<&str> = vectors.iter().map(|v| v.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), vectors.len());
    }

    #[test]
    fn valid_vectors_have_section_size() {
        for vector in section_vectors() {
            let bytes = hex_decode(&vector.input_hex);
            let count = vector.expected_count.unwrap() as usize;
            assert_eq!(bytes.len(), 8 + 7 * count, "vector {}", vector.id);
        }
    }

    #[test]
    fn json_round_trip() {
        let parsed: Vec<TestVector> = serde_json::from_str(&vectors_json()).unwrap();
        assert_eq!(parsed, all_vectors());
        assert!(parsed.iter().any(TestVector::expects_error));
    }
}
