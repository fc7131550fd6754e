//! Golden test utilities for format verification.
//!
//! Provides helpers for verifying that encoded sections match
//! expected golden files.

use std::fs;
use std::path::{Path, PathBuf};

/// A golden test that compares output against expected files.
pub struct GoldenTest {
    name: String,
    golden_dir: PathBuf,
    update_mode: bool,
}

impl GoldenTest {
    /// Creates a new golden test.
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the test (used for file naming)
    /// * `golden_dir` - Directory containing golden files
    pub fn new(name: impl Into<String>, golden_dir: impl AsRef<Path>) -> Self {
        Self {
            name: name.into(),
            golden_dir: golden_dir.as_ref().to_path_buf(),
            update_mode: std::env::var("UPDATE_GOLDEN").is_ok(),
        }
    }

    /// Creates a golden test using the testkit's `golden` directory.
    pub fn with_default_dir(name: impl Into<String>) -> Self {
        let golden_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("golden");
        Self::new(name, golden_dir)
    }

    /// Forces update mode on or off, ignoring `UPDATE_GOLDEN`.
    #[must_use]
    pub fn update_mode(mut self, update: bool) -> Self {
        self.update_mode = update;
        self
    }

    /// Asserts that the given bytes match the golden file.
    ///
    /// Golden files hold hex text so that diffs stay reviewable. In update
    /// mode the file is rewritten instead.
    pub fn assert_bytes(&self, suffix: &str, actual: &[u8]) {
        let path = self.file_path(suffix);
        let actual_hex = hex_encode(actual);

        if self.update_mode {
            self.update_golden_file(&path, actual_hex.as_bytes());
            return;
        }

        if !path.exists() {
            panic!(
                "Golden file not found: {:?}\n\
                 Run with UPDATE_GOLDEN=1 to create it.\n\
                 Actual bytes (hex): {}",
                path, actual_hex
            );
        }

        let expected = hex_decode(&fs::read_to_string(&path).expect("Failed to read golden file"));

        if actual != expected.as_slice() {
            panic!(
                "Golden test '{}' failed for '{}':\n\
                 Expected ({} bytes): {}\n\
                 Actual ({} bytes): {}\n\
                 Run with UPDATE_GOLDEN=1 to update.",
                self.name,
                suffix,
                expected.len(),
                hex_encode(&expected),
                actual.len(),
                actual_hex
            );
        }
    }

    /// Asserts that the given string matches the golden file.
    pub fn assert_text(&self, suffix: &str, actual: &str) {
        let path = self.file_path(suffix);

        if self.update_mode {
            self.update_golden_file(&path, actual.as_bytes());
            return;
        }

        if !path.exists() {
            panic!(
                "Golden file not found: {:?}\n\
                 Run with UPDATE_GOLDEN=1 to create it.\n\
                 Actual:\n{}",
                path, actual
            );
        }

        let expected = fs::read_to_string(&path).expect("Failed to read golden file");

        if actual != expected {
            panic!(
                "Golden test '{}' failed for '{}':\n\
                 --- Expected ---\n{}\n\
                 --- Actual ---\n{}\n\
                 Run with UPDATE_GOLDEN=1 to update.",
                self.name, suffix, expected, actual
            );
        }
    }

    fn file_path(&self, suffix: &str) -> PathBuf {
        let filename = if suffix.is_empty() {
            format!("{}.golden", self.name)
        } else {
            format!("{}_{}.golden", self.name, suffix)
        };
        self.golden_dir.join(filename)
    }

    fn update_golden_file(&self, path: &Path, data: &[u8]) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create golden directory");
        }
        fs::write(path, data).expect("Failed to write golden file");
        println!("Updated golden file: {:?}", path);
    }
}

/// Encodes bytes as hexadecimal string.
pub fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Decodes hexadecimal string to bytes, ignoring whitespace.
pub fn hex_decode(hex: &str) -> Vec<u8> {
    let hex: String = hex.chars().filter(|c| !c.is_whitespace()).collect();
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).expect("Invalid hex"))
        .collect()
}
