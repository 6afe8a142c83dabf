//! Parsing and matching options

/// Options controlling how versions and ranges are parsed and matched.
///
/// The default is strict parsing with prerelease exclusion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Options {
    /// Accept the loose grammar (`=v1.2.3`, `1.2.3beta`, leading zeros)
    pub loose: bool,
    /// Let prerelease versions satisfy ranges that do not pin their tuple
    pub include_prerelease: bool,
}

impl Options {
    /// Strict options
    pub const fn new() -> Self {
        Options {
            loose: false,
            include_prerelease: false,
        }
    }

    /// Options with loose parsing enabled
    pub const fn loose() -> Self {
        Options {
            loose: true,
            include_prerelease: false,
        }
    }

    /// Options with prerelease inclusion enabled
    pub const fn include_prerelease() -> Self {
        Options {
            loose: false,
            include_prerelease: true,
        }
    }

    pub const fn with_loose(mut self, loose: bool) -> Self {
        self.loose = loose;
        self
    }

    pub const fn with_include_prerelease(mut self, include_prerelease: bool) -> Self {
        self.include_prerelease = include_prerelease;
        self
    }
}
