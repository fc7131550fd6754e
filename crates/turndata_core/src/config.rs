//! Options for loading turn data files.

/// Options controlling how a turn data section is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadConfig {
    /// Checksum of the graph the data will be used with.
    ///
    /// `None` skips the comparison and leaves it to the caller.
    pub expected_checksum: Option<u32>,

    /// Whether bytes after the section are tolerated.
    pub allow_trailing_bytes: bool,

    /// Largest record count accepted from a section header.
    pub max_records: u32,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            expected_checksum: None,
            allow_trailing_bytes: false,
            max_records: u32::MAX,
        }
    }
}

impl LoadConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the section to carry `checksum`.
    #[must_use]
    pub const fn expected_checksum(mut self, checksum: u32) -> Self {
        self.expected_checksum = Some(checksum);
        self
    }

    /// Sets whether bytes after the section are tolerated.
    #[must_use]
    pub const fn allow_trailing_bytes(mut self, value: bool) -> Self {
        self.allow_trailing_bytes = value;
        self
    }

    /// Sets the largest accepted record count.
    #[must_use]
    pub const fn max_records(mut self, max: u32) -> Self {
        self.max_records = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = LoadConfig::default();
        assert_eq!(config.expected_checksum, None);
        assert!(!config.allow_trailing_bytes);
        assert_eq!(config.max_records, u32::MAX);
    }

    #[test]
    fn builder_pattern() {
        let config = LoadConfig::new()
            .expected_checksum(0xdead_beef)
            .allow_trailing_bytes(true)
            .max_records(16);

        assert_eq!(config.expected_checksum, Some(0xdead_beef));
        assert!(config.allow_trailing_bytes);
        assert_eq!(config.max_records, 16);
    }

    #[test]
    fn usable_in_const_context() {
        const STRICT: LoadConfig = LoadConfig {
            expected_checksum: None,
            allow_trailing_bytes: false,
            max_records: u32::MAX,
        }
        .expected_checksum(7);
        assert_eq!(STRICT.expected_checksum, Some(7));
    }
}
