//! Semantic version value, ordering and increments

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::grammar::{self, VersionMatch, MAX_LENGTH, MAX_SAFE_INTEGER};
use crate::{Options, SemverError};

/// A single dot separated prerelease identifier
#[derive(Debug, Clone)]
pub enum Identifier {
    /// Digits only, within the safe integer range
    Numeric(u64),
    /// Anything else (letters, hyphens, or digits too large to be numeric)
    AlphaNumeric(String),
}

impl Identifier {
    /// Parse a prerelease identifier that already passed the grammar
    pub(crate) fn parse(s: &str) -> Self {
        if s.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = s.parse::<u64>() {
                if n < MAX_SAFE_INTEGER {
                    return Identifier::Numeric(n);
                }
            }
        }
        Identifier::AlphaNumeric(s.to_string())
    }

    pub fn is_numeric(&self) -> bool {
        match self {
            Identifier::Numeric(_) => true,
            Identifier::AlphaNumeric(s) => is_digits(s),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::AlphaNumeric(s) => write!(f, "{}", s),
        }
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Identifier {}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Identifier::Numeric(a), Identifier::Numeric(b)) => a.cmp(b),
            (Identifier::AlphaNumeric(a), Identifier::AlphaNumeric(b)) => compare_identifiers(a, b),
            _ => compare_identifiers(&self.to_string(), &other.to_string()),
        }
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Compare two identifiers: numeric ones numerically, numeric before
/// alphanumeric, alphanumeric ones in ASCII order.
pub(crate) fn compare_identifiers(a: &str, b: &str) -> Ordering {
    match (is_digits(a), is_digits(b)) {
        (true, true) => {
            let a = a.trim_start_matches('0');
            let b = b.trim_start_matches('0');
            a.len().cmp(&b.len()).then_with(|| a.cmp(b))
        }
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}

/// Positional comparison of prerelease sequences.
///
/// A sequence that runs out first is the lesser one.
fn compare_sequences<T, F>(a: &[T], b: &[T], cmp: F) -> Ordering
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut i = 0;
    loop {
        match (a.get(i), b.get(i)) {
            (None, None) => return Ordering::Equal,
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (Some(x), Some(y)) => match cmp(x, y) {
                Ordering::Equal => i += 1,
                other => return other,
            },
        }
    }
}

/// Release types accepted by [`Version::inc`] and returned by [`Version::diff`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseType {
    Major,
    Premajor,
    Minor,
    Preminor,
    Patch,
    Prepatch,
    Prerelease,
    Release,
    Pre,
}

impl ReleaseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseType::Major => "major",
            ReleaseType::Premajor => "premajor",
            ReleaseType::Minor => "minor",
            ReleaseType::Preminor => "preminor",
            ReleaseType::Patch => "patch",
            ReleaseType::Prepatch => "prepatch",
            ReleaseType::Prerelease => "prerelease",
            ReleaseType::Release => "release",
            ReleaseType::Pre => "pre",
        }
    }

    /// True for the release types that produce a prerelease
    pub fn is_pre(&self) -> bool {
        matches!(
            self,
            ReleaseType::Premajor
                | ReleaseType::Preminor
                | ReleaseType::Prepatch
                | ReleaseType::Prerelease
                | ReleaseType::Pre
        )
    }
}

impl FromStr for ReleaseType {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "major" => Ok(ReleaseType::Major),
            "premajor" => Ok(ReleaseType::Premajor),
            "minor" => Ok(ReleaseType::Minor),
            "preminor" => Ok(ReleaseType::Preminor),
            "patch" => Ok(ReleaseType::Patch),
            "prepatch" => Ok(ReleaseType::Prepatch),
            "prerelease" => Ok(ReleaseType::Prerelease),
            "release" => Ok(ReleaseType::Release),
            "pre" => Ok(ReleaseType::Pre),
            _ => Err(SemverError::InvalidReleaseType(s.to_string())),
        }
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A parsed semantic version.
///
/// Equality and ordering follow SemVer precedence, so build metadata is ignored.
/// Use [`Version::compare_build`] for a build-aware total order.
#[derive(Debug, Clone)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Vec<Identifier>,
    pub build: Vec<String>,
    raw: String,
    options: Options,
}

impl Version {
    /// Create a release version from its three components
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease: Vec::new(),
            build: Vec::new(),
            raw: format!("{}.{}.{}", major, minor, patch),
            options: Options::default(),
        }
    }

    /// Parse a version with strict options
    pub fn parse(input: &str) -> Result<Self, SemverError> {
        Self::parse_with(input, Options::default())
    }

    /// Parse a version with the given options
    pub fn parse_with(input: &str, options: Options) -> Result<Self, SemverError> {
        if input.len() > MAX_LENGTH {
            return Err(SemverError::too_long());
        }

        let m = grammar::full_version(input.trim(), options.loose)
            .ok_or_else(|| SemverError::InvalidVersion(input.to_string()))?;

        Self::from_match(m, input, options)
    }

    /// Build a version from a grammar match, checking the component bounds
    pub(crate) fn from_match(m: VersionMatch<'_>, raw: &str, options: Options) -> Result<Self, SemverError> {
        let major = parse_component(m.major, "major")?;
        let minor = parse_component(m.minor, "minor")?;
        let patch = parse_component(m.patch, "patch")?;

        let prerelease = m
            .prerelease
            .map(|pre| pre.split('.').map(Identifier::parse).collect())
            .unwrap_or_default();
        let build = m
            .build
            .map(|build| build.split('.').map(str::to_string).collect())
            .unwrap_or_default();

        Ok(Version {
            major,
            minor,
            patch,
            prerelease,
            build,
            raw: raw.to_string(),
            options,
        })
    }

    /// `0.0.0-0`, the lowest version there is
    pub(crate) fn lowest() -> Self {
        let mut version = Version::new(0, 0, 0);
        version.prerelease.push(Identifier::Numeric(0));
        version.normalized()
    }

    /// Drop build metadata and resync the raw string with the fields
    pub(crate) fn normalized(mut self) -> Self {
        self.build.clear();
        self.raw = self.to_string();
        self
    }

    /// The input this version was parsed from
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn options(&self) -> Options {
        self.options
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// Compare `major.minor.patch` only
    pub fn compare_main(&self, other: &Version) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
    }

    /// Compare prerelease sequences; a release is greater than any prerelease
    pub fn compare_pre(&self, other: &Version) -> Ordering {
        match (self.prerelease.is_empty(), other.prerelease.is_empty()) {
            (true, true) => Ordering::Equal,
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
            (false, false) => compare_sequences(&self.prerelease, &other.prerelease, Identifier::cmp),
        }
    }

    /// Compare build metadata only.
    ///
    /// The first pair of identifiers that differ as text decides, even when
    /// they are numerically equal (`007` against `7`).
    pub fn compare_build_metadata(&self, other: &Version) -> Ordering {
        let mut i = 0;
        loop {
            match (self.build.get(i), other.build.get(i)) {
                (None, None) => return Ordering::Equal,
                (Some(_), None) => return Ordering::Greater,
                (None, Some(_)) => return Ordering::Less,
                (Some(a), Some(b)) if a == b => i += 1,
                (Some(a), Some(b)) => return compare_identifiers(a, b),
            }
        }
    }

    /// Precedence order, falling back to build metadata on ties
    pub fn compare_build(&self, other: &Version) -> Ordering {
        self.cmp(other).then_with(|| self.compare_build_metadata(other))
    }

    /// Return the version bumped by `release`.
    ///
    /// `identifier` names the prerelease line for the `pre*` release types,
    /// e.g. `1.2.3` bumped by `prerelease` with `beta` is `1.2.4-beta.0`.
    pub fn inc(&self, release: ReleaseType, identifier: Option<&str>) -> Result<Version, SemverError> {
        let mut next = self.clone();
        next.increment(release, identifier)?;
        next.raw = next.to_string();
        if !next.build.is_empty() {
            next.raw.push('+');
            next.raw.push_str(&next.build.join("."));
        }
        Ok(next)
    }

    fn increment(&mut self, release: ReleaseType, identifier: Option<&str>) -> Result<(), SemverError> {
        if release.is_pre() {
            if let Some(identifier) = identifier {
                if !grammar::is_prerelease(identifier, self.options.loose) {
                    return Err(SemverError::InvalidIdentifier(identifier.to_string()));
                }
            }
        }

        match release {
            ReleaseType::Premajor => {
                self.prerelease.clear();
                self.patch = 0;
                self.minor = 0;
                self.major += 1;
                self.increment(ReleaseType::Pre, identifier)?;
            }
            ReleaseType::Preminor => {
                self.prerelease.clear();
                self.patch = 0;
                self.minor += 1;
                self.increment(ReleaseType::Pre, identifier)?;
            }
            ReleaseType::Prepatch => {
                // Clear first so the patch bump always happens
                self.prerelease.clear();
                self.increment(ReleaseType::Patch, identifier)?;
                self.increment(ReleaseType::Pre, identifier)?;
            }
            ReleaseType::Prerelease => {
                if self.prerelease.is_empty() {
                    self.increment(ReleaseType::Patch, identifier)?;
                }
                self.increment(ReleaseType::Pre, identifier)?;
            }
            ReleaseType::Release => {
                if self.prerelease.is_empty() {
                    return Err(SemverError::NotPrerelease(self.raw.clone()));
                }
                self.prerelease.clear();
            }
            ReleaseType::Major => {
                // 1.0.0-5 bumps to 1.0.0, 1.1.0 bumps to 2.0.0
                if self.minor != 0 || self.patch != 0 || self.prerelease.is_empty() {
                    self.major += 1;
                }
                self.minor = 0;
                self.patch = 0;
                self.prerelease.clear();
            }
            ReleaseType::Minor => {
                if self.patch != 0 || self.prerelease.is_empty() {
                    self.minor += 1;
                }
                self.patch = 0;
                self.prerelease.clear();
            }
            ReleaseType::Patch => {
                if self.prerelease.is_empty() {
                    self.patch += 1;
                }
                self.prerelease.clear();
            }
            ReleaseType::Pre => {
                if self.prerelease.is_empty() {
                    self.prerelease.push(Identifier::Numeric(0));
                } else {
                    let last_numeric = self
                        .prerelease
                        .iter()
                        .rposition(|id| matches!(id, Identifier::Numeric(_)));
                    match last_numeric {
                        Some(pos) => {
                            if let Identifier::Numeric(n) = &mut self.prerelease[pos] {
                                *n += 1;
                            }
                        }
                        None => self.prerelease.push(Identifier::Numeric(0)),
                    }
                }

                if let Some(identifier) = identifier {
                    let replacement = vec![
                        Identifier::AlphaNumeric(identifier.to_string()),
                        Identifier::Numeric(0),
                    ];
                    let same_line = self
                        .prerelease
                        .first()
                        .is_some_and(|first| compare_identifiers(&first.to_string(), identifier) == Ordering::Equal);
                    // 1.2.0-beta.1 bumps to 1.2.0-beta.2, 1.2.0-beta.foo to 1.2.0-beta.0
                    let keeps_counter = self.prerelease.get(1).is_some_and(Identifier::is_numeric);
                    if !same_line || !keeps_counter {
                        self.prerelease = replacement;
                    }
                }
            }
        }

        Ok(())
    }

    /// The release type separating two versions, or `None` if they are equal
    pub fn diff(&self, other: &Version) -> Option<ReleaseType> {
        let (high, low) = match self.cmp(other) {
            Ordering::Equal => return None,
            Ordering::Greater => (self, other),
            Ordering::Less => (other, self),
        };

        let high_has_pre = high.is_prerelease();
        let low_has_pre = low.is_prerelease();

        if low_has_pre && !high_has_pre {
            // Going from a prerelease to a release needs special casing:
            // 1.0.0-1 -> 1.x.y is major, 1.1.0-1 -> 1.1.0 is minor
            if low.patch == 0 && low.minor == 0 {
                return Some(ReleaseType::Major);
            }
            if low.compare_main(high) == Ordering::Equal {
                if low.minor != 0 && low.patch == 0 {
                    return Some(ReleaseType::Minor);
                }
                return Some(ReleaseType::Patch);
            }
        }

        let release = if self.major != other.major {
            (ReleaseType::Premajor, ReleaseType::Major)
        } else if self.minor != other.minor {
            (ReleaseType::Preminor, ReleaseType::Minor)
        } else if self.patch != other.patch {
            (ReleaseType::Prepatch, ReleaseType::Patch)
        } else {
            return Some(ReleaseType::Prerelease);
        };

        Some(if high_has_pre { release.0 } else { release.1 })
    }
}

fn parse_component(s: &str, name: &'static str) -> Result<u64, SemverError> {
    s.parse::<u64>()
        .ok()
        .filter(|n| *n <= MAX_SAFE_INTEGER)
        .ok_or(SemverError::InvalidComponent(name))
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.prerelease.is_empty() {
            let pre: Vec<String> = self.prerelease.iter().map(|id| id.to_string()).collect();
            write!(f, "-{}", pre.join("."))?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_main(other).then_with(|| self.compare_pre(other))
    }
}
