//! Scanner configuration.

/// Options that alter how the scanner applies its lexical rules.
///
/// The default matches keywords as fixed-length prefixes of the source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Require that a keyword is not immediately followed by an
    /// alphanumeric character.
    ///
    /// When `false` (the default) keywords match as fixed-length prefixes,
    /// so `andor` scans as `AND OR` and `format` as `FOR IDENTIFIER("mat")`.
    /// When `true` both scan as a single identifier.
    pub strict_keywords: bool,
}

impl ScannerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the keyword boundary check.
    pub fn strict_keywords(mut self, enabled: bool) -> Self {
        self.strict_keywords = enabled;
        self
    }
}
