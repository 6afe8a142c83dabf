//! Semver facade providing high-level string operations
//!
//! Predicates and lookups fold invalid input into `None`/`false`; operations
//! whose answer would be meaningless for invalid input return the error.

use std::cmp::Ordering;

use crate::grammar;
use crate::query::{self, Direction};
use crate::{compare, constraint, Operator, Options, Range, ReleaseType, SemverError, Version};

/// Main facade for semantic versioning operations
pub struct Semver;

impl Semver {
    /// Parse a version, `None` if it is invalid
    pub fn parse(version: &str) -> Option<Version> {
        Version::parse(version).ok()
    }

    /// The canonical form of a version, `None` if it is invalid
    pub fn valid(version: &str) -> Option<String> {
        Self::parse(version).map(|v| v.to_string())
    }

    /// Trim the input and strip any leading `=`/`v` run before validating it
    pub fn clean(version: &str) -> Option<String> {
        let stripped = version.trim().trim_start_matches(['=', 'v']);
        Self::valid(stripped)
    }

    /// Pull the first `major(.minor(.patch))` run out of arbitrary text
    pub fn coerce(version: &str) -> Option<Version> {
        let (major, minor, patch) = grammar::coerce_parts(version)?;
        let coerced = format!("{}.{}.{}", major, minor.unwrap_or("0"), patch.unwrap_or("0"));
        Version::parse(&coerced).ok()
    }

    /// Bump a version, `None` on an invalid version, release type or identifier
    pub fn inc(version: &str, release: &str, identifier: Option<&str>) -> Option<String> {
        let release = release.parse::<ReleaseType>().ok()?;
        let version = Self::parse(version)?;
        version.inc(release, identifier).ok().map(|v| v.to_string())
    }

    /// The most significant component that differs, `None` if equal
    pub fn diff(a: &str, b: &str) -> Result<Option<ReleaseType>, SemverError> {
        Ok(Version::parse(a)?.diff(&Version::parse(b)?))
    }

    pub fn major(version: &str) -> Result<u64, SemverError> {
        Ok(Version::parse(version)?.major)
    }

    pub fn minor(version: &str) -> Result<u64, SemverError> {
        Ok(Version::parse(version)?.minor)
    }

    pub fn patch(version: &str) -> Result<u64, SemverError> {
        Ok(Version::parse(version)?.patch)
    }

    /// The prerelease identifiers, `None` for a release or an invalid version
    pub fn prerelease(version: &str) -> Option<Vec<String>> {
        let version = Self::parse(version)?;
        if version.prerelease.is_empty() {
            return None;
        }
        Some(version.prerelease.iter().map(|id| id.to_string()).collect())
    }

    pub fn compare(a: &str, b: &str) -> Result<Ordering, SemverError> {
        Ok(compare::compare(&Version::parse(a)?, &Version::parse(b)?))
    }

    pub fn rcompare(a: &str, b: &str) -> Result<Ordering, SemverError> {
        Ok(compare::rcompare(&Version::parse(a)?, &Version::parse(b)?))
    }

    pub fn compare_loose(a: &str, b: &str) -> Result<Ordering, SemverError> {
        compare::compare_loose(a, b)
    }

    pub fn compare_build(a: &str, b: &str) -> Result<Ordering, SemverError> {
        Ok(compare::compare_build(&Version::parse(a)?, &Version::parse(b)?))
    }

    /// Check if version1 > version2
    pub fn greater_than(version1: &str, version2: &str) -> Result<bool, SemverError> {
        Self::cmp(version1, ">", version2)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &str, version2: &str) -> Result<bool, SemverError> {
        Self::cmp(version1, ">=", version2)
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &str, version2: &str) -> Result<bool, SemverError> {
        Self::cmp(version1, "<", version2)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &str, version2: &str) -> Result<bool, SemverError> {
        Self::cmp(version1, "<=", version2)
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &str, version2: &str) -> Result<bool, SemverError> {
        Self::cmp(version1, "==", version2)
    }

    /// Check if version1 != version2
    pub fn not_equal_to(version1: &str, version2: &str) -> Result<bool, SemverError> {
        Self::cmp(version1, "!=", version2)
    }

    /// Compare version1 to version2 using the given operator
    pub fn cmp(version1: &str, operator: &str, version2: &str) -> Result<bool, SemverError> {
        let operator = operator.parse::<Operator>()?;
        Ok(compare::cmp(
            &Version::parse(version1)?,
            operator,
            &Version::parse(version2)?,
        ))
    }

    /// Check if a version satisfies a range
    pub fn satisfies(version: &str, range: &str) -> bool {
        match Range::parse(range) {
            Ok(range) => range.test_str(version),
            Err(_) => false,
        }
    }

    /// Return all versions that satisfy the given range
    pub fn satisfied_by(versions: &[&str], range: &str) -> Vec<String> {
        let Ok(range) = Range::parse(range) else {
            return Vec::new();
        };

        versions
            .iter()
            .filter(|v| range.test_str(v))
            .map(|v| v.to_string())
            .collect()
    }

    /// The canonical form of a range, `"*"` for one that matches everything
    pub fn valid_range(range: &str) -> Option<String> {
        let range = Range::parse(range).ok()?;
        let canonical = range.to_string();
        if canonical.is_empty() {
            Some("*".to_string())
        } else {
            Some(canonical)
        }
    }

    /// The highest satisfying version, as given
    pub fn max_satisfying(versions: &[&str], range: &str) -> Option<String> {
        Self::pick_satisfying(versions, range, Ordering::Greater)
    }

    /// The lowest satisfying version, as given
    pub fn min_satisfying(versions: &[&str], range: &str) -> Option<String> {
        Self::pick_satisfying(versions, range, Ordering::Less)
    }

    fn pick_satisfying(versions: &[&str], range: &str, wanted: Ordering) -> Option<String> {
        let range = Range::parse(range).ok()?;
        let options = range.options();

        let mut best: Option<(&str, Version)> = None;
        for &candidate in versions {
            let Ok(version) = Version::parse_with(candidate, options) else {
                continue;
            };
            if !range.test(&version) {
                continue;
            }
            let replace = match &best {
                Some((_, current)) => version.cmp(current) == wanted,
                None => true,
            };
            if replace {
                best = Some((candidate, version));
            }
        }

        best.map(|(raw, _)| raw.to_string())
    }

    /// The lowest version that can satisfy the range
    pub fn min_version(range: &str) -> Result<Option<Version>, SemverError> {
        Ok(Range::parse(range)?.min_version())
    }

    /// Check whether a version lies past the range; `hilo` is `>` or `<`
    pub fn outside(version: &str, range: &str, hilo: &str) -> Result<bool, SemverError> {
        let direction = hilo.parse::<Direction>()?;
        let version = Version::parse(version)?;
        let range = Range::parse(range)?;
        Ok(query::outside(&version, &range, direction))
    }

    pub fn gtr(version: &str, range: &str) -> Result<bool, SemverError> {
        Self::outside(version, range, ">")
    }

    pub fn ltr(version: &str, range: &str) -> Result<bool, SemverError> {
        Self::outside(version, range, "<")
    }

    /// Check whether some version could satisfy both ranges
    pub fn intersects(range1: &str, range2: &str) -> Result<bool, SemverError> {
        Ok(Range::parse(range1)?.intersects(&Range::parse(range2)?))
    }

    /// Check whether every version matched by `sub` is matched by `dom`
    pub fn subset(sub: &str, dom: &str) -> Result<bool, SemverError> {
        if sub == dom {
            return Ok(true);
        }
        let sub = Range::parse(sub)?;
        let dom = Range::parse(dom)?;
        Ok(constraint::subset(&sub, &dom, Options::default()))
    }

    /// The canonical comparator strings of every clause
    pub fn to_comparators(range: &str) -> Result<Vec<Vec<String>>, SemverError> {
        Ok(Range::parse(range)?.to_comparators())
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        // Invalid versions are dropped, the rest keep their original spelling
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| Some((Version::parse(v).ok()?, i)))
            .collect();

        parsed.sort_by(|(a, _), (b, _)| {
            let cmp = a.compare_build(b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_satisfies_positive() {
        // Hyphen ranges
        assert!(Semver::satisfies("1.2.3", "1.0.0 - 2.0.0"));
        assert!(Semver::satisfies("1.2.3", "1.2.3+asdf - 2.4.3+asdf"));
        assert!(Semver::satisfies("2.4.3", "1.2.3+asdf - 2.4.3+asdf"));

        // Caret with build metadata
        assert!(Semver::satisfies("1.2.3", "^1.2.3+build"));
        assert!(Semver::satisfies("1.3.0", "^1.2.3+build"));

        // Basic ranges
        assert!(Semver::satisfies("1.0.0", "1.0.0"));
        assert!(Semver::satisfies("1.2.3", "*"));
        assert!(Semver::satisfies("v1.2.3", "*"));

        // Greater than/less than
        assert!(Semver::satisfies("1.0.0", ">=1.0.0"));
        assert!(Semver::satisfies("1.0.1", ">=1.0.0"));
        assert!(Semver::satisfies("1.1.0", ">=1.0.0"));
        assert!(Semver::satisfies("1.0.1", ">1.0.0"));
        assert!(Semver::satisfies("1.1.0", ">1.0.0"));
        assert!(Semver::satisfies("2.0.0", "<=2.0.0"));
        assert!(Semver::satisfies("1.9999.9999", "<=2.0.0"));
        assert!(Semver::satisfies("0.2.9", "<=2.0.0"));
        assert!(Semver::satisfies("1.9999.9999", "<2.0.0"));
        assert!(Semver::satisfies("0.2.9", "<2.0.0"));

        // With spaces
        assert!(Semver::satisfies("1.0.0", ">= 1.0.0"));
        assert!(Semver::satisfies("1.0.1", ">=  1.0.0"));
        assert!(Semver::satisfies("1.1.0", ">=   1.0.0"));
        assert!(Semver::satisfies("1.0.1", "> 1.0.0"));
        assert!(Semver::satisfies("1.1.0", ">  1.0.0"));
        assert!(Semver::satisfies("2.0.0", "<=   2.0.0"));
        assert!(Semver::satisfies("1.9999.9999", "<= 2.0.0"));
        assert!(Semver::satisfies("0.2.9", "<=  2.0.0"));
        assert!(Semver::satisfies("1.9999.9999", "<    2.0.0"));

        // Version with v prefix
        assert!(Semver::satisfies("v0.1.97", ">=0.1.97"));
        assert!(Semver::satisfies("0.1.97", ">=0.1.97"));

        // Or ranges
        assert!(Semver::satisfies("1.2.4", "0.1.20 || 1.2.4"));
        assert!(Semver::satisfies("0.0.0", ">=0.2.3 || <0.0.1"));
        assert!(Semver::satisfies("0.2.3", ">=0.2.3 || <0.0.1"));
        assert!(Semver::satisfies("0.2.4", ">=0.2.3 || <0.0.1"));

        // Wildcard
        assert!(Semver::satisfies("2.1.3", "2.x.x"));
        assert!(Semver::satisfies("1.2.3", "1.2.x"));
        assert!(Semver::satisfies("2.1.3", "1.2.x || 2.x"));
        assert!(Semver::satisfies("1.2.3", "1.2.x || 2.x"));
        assert!(Semver::satisfies("1.2.3", "x"));
        assert!(Semver::satisfies("2.1.3", "2.*.*"));
        assert!(Semver::satisfies("1.2.3", "1.2.*"));
        assert!(Semver::satisfies("2.1.3", "1.2.* || 2.*"));
        assert!(Semver::satisfies("1.2.3", "1.2.* || 2.*"));
        assert!(Semver::satisfies("1.2.3", "*"));

        // Tilde
        assert!(Semver::satisfies("2.4.5", "~2.4"));
        assert!(Semver::satisfies("2.4.0", "~2.4"));
        assert!(Semver::satisfies("1.2.3", "~1"));
        assert!(Semver::satisfies("1.0.7", "~1.0"));
        assert!(Semver::satisfies("1.2.3", "~> 1"));
        assert!(Semver::satisfies("0.5.5", "~v0.5.4-pre"));

        // Partial versions
        assert!(Semver::satisfies("1.0.0", ">=1"));
        assert!(Semver::satisfies("1.0.0", ">= 1"));
        assert!(Semver::satisfies("1.3.0", ">1.2"));
        assert!(Semver::satisfies("1.1.1", "<1.2"));
        assert!(Semver::satisfies("1.1.1", "< 1.2"));

        // Combined ranges
        assert!(Semver::satisfies("1.2.3", "~1.2.1 >=1.2.3"));
        assert!(Semver::satisfies("1.2.3", "~1.2.1 =1.2.3"));
        assert!(Semver::satisfies("1.2.3", "~1.2.1 1.2.3"));
        assert!(Semver::satisfies("1.2.3", "~1.2.1 >=1.2.3 1.2.3"));
        assert!(Semver::satisfies("1.2.3", "~1.2.1 1.2.3 >=1.2.3"));
        assert!(Semver::satisfies("1.2.3", ">=1.2.1 1.2.3"));
        assert!(Semver::satisfies("1.2.3", "1.2.3 >=1.2.1"));
        assert!(Semver::satisfies("1.2.3", ">=1.2.3 >=1.2.1"));
        assert!(Semver::satisfies("1.2.3", ">=1.2.1 >=1.2.3"));
        assert!(Semver::satisfies("1.2.8", ">=1.2"));

        // Caret
        assert!(Semver::satisfies("1.8.1", "^1.2.3"));
        assert!(Semver::satisfies("0.1.2", "^0.1.2"));
        assert!(Semver::satisfies("0.1.2", "^0.1"));
        assert!(Semver::satisfies("1.4.2", "^1.2"));
        assert!(Semver::satisfies("1.4.2", "^1.2 ^1"));
        assert!(Semver::satisfies("1.2.3-pre", "^1.2.3-alpha"));
        assert!(Semver::satisfies("0.0.1-beta", "^0.0.1-alpha"));

        // Prerelease tuple opted in by the range
        assert!(Semver::satisfies("1.2.3-beta.4", ">1.2.3-alpha.3"));
        assert!(Semver::satisfies("1.2.3-beta", "<=1.2.3-beta || >2"));
    }

    #[test]
    fn test_satisfies_negative() {
        // Hyphen ranges
        assert!(!Semver::satisfies("2.2.3", "1.0.0 - 2.0.0"));
        assert!(!Semver::satisfies("2.4.3-alpha", "1.2.3+asdf - 2.4.3+asdf"));

        // Caret with build metadata
        assert!(!Semver::satisfies("2.0.0", "^1.2.3+build"));
        assert!(!Semver::satisfies("1.2.0", "^1.2.3+build"));

        // Loose-only versions are invalid here
        assert!(!Semver::satisfies("1.0.0beta", "1"));
        assert!(!Semver::satisfies("1.0.0beta", "<1"));
        assert!(!Semver::satisfies("1.0.0beta", "< 1"));

        // Exact version mismatch
        assert!(!Semver::satisfies("1.0.1", "1.0.0"));

        // Greater than/less than failures
        assert!(!Semver::satisfies("0.0.0", ">=1.0.0"));
        assert!(!Semver::satisfies("0.0.1", ">=1.0.0"));
        assert!(!Semver::satisfies("0.1.0", ">=1.0.0"));
        assert!(!Semver::satisfies("0.0.1", ">1.0.0"));
        assert!(!Semver::satisfies("0.1.0", ">1.0.0"));
        assert!(!Semver::satisfies("3.0.0", "<=2.0.0"));
        assert!(!Semver::satisfies("2.9999.9999", "<=2.0.0"));
        assert!(!Semver::satisfies("2.2.9", "<=2.0.0"));
        assert!(!Semver::satisfies("2.9999.9999", "<2.0.0"));
        assert!(!Semver::satisfies("2.2.9", "<2.0.0"));

        // Version with v prefix
        assert!(!Semver::satisfies("v0.1.93", ">=0.1.97"));
        assert!(!Semver::satisfies("0.1.93", ">=0.1.97"));

        // Or ranges
        assert!(!Semver::satisfies("1.2.3", "0.1.20 || 1.2.4"));
        assert!(!Semver::satisfies("0.0.3", ">=0.2.3 || <0.0.1"));
        assert!(!Semver::satisfies("0.2.2", ">=0.2.3 || <0.0.1"));

        // Wildcard
        assert!(!Semver::satisfies("1.1.3", "2.x.x"));
        assert!(!Semver::satisfies("3.1.3", "2.x.x"));
        assert!(!Semver::satisfies("1.3.3", "1.2.x"));
        assert!(!Semver::satisfies("3.1.3", "1.2.x || 2.x"));
        assert!(!Semver::satisfies("1.1.3", "1.2.x || 2.x"));
        assert!(!Semver::satisfies("1.1.3", "2.*.*"));
        assert!(!Semver::satisfies("3.1.3", "2.*.*"));
        assert!(!Semver::satisfies("1.3.3", "1.2.*"));
        assert!(!Semver::satisfies("3.1.3", "1.2.* || 2.*"));
        assert!(!Semver::satisfies("1.1.3", "1.2.* || 2.*"));

        // Exact major/minor mismatch
        assert!(!Semver::satisfies("1.1.2", "2"));
        assert!(!Semver::satisfies("2.4.1", "2.3"));

        // Tilde
        assert!(!Semver::satisfies("3.0.0", "~2.4"));
        assert!(!Semver::satisfies("2.3.9", "~2.4"));
        assert!(!Semver::satisfies("2.5.0", "~2.4"));
        assert!(!Semver::satisfies("0.2.3", "~1"));

        // Less than
        assert!(!Semver::satisfies("1.0.0", "<1"));
        assert!(!Semver::satisfies("1.1.1", ">=1.2"));

        // Prereleases outside the range's own tuple
        assert!(!Semver::satisfies("0.5.4-alpha", "~v0.5.4-beta"));
        assert!(!Semver::satisfies("1.3.0-beta", ">1.2"));
        assert!(!Semver::satisfies("1.2.3-beta", "<=1.2.3"));
        assert!(!Semver::satisfies("1.2.3-beta", "<1.2.3"));
        assert!(!Semver::satisfies("1.2.3-beta", "^1.2.3"));
        assert!(!Semver::satisfies("2.0.0-alpha", "^1.2.3"));

        // Caret
        assert!(!Semver::satisfies("1.2.2", "^1.2.3"));
        assert!(!Semver::satisfies("1.1.9", "^1.2"));

        // Invalid ranges never match
        assert!(!Semver::satisfies("1.2.3", "blerg"));
        assert!(!Semver::satisfies("1.2.3", ">=1.2.3 foo"));
    }

    #[test]
    fn test_satisfied_by() {
        let versions = vec!["1.0.0", "1.0.7", "1.1.0", "2.0.0", "0.9999.9999", "1.0"];
        let result = Semver::satisfied_by(&versions, "~1.0");
        assert_eq!(result, vec!["1.0.0", "1.0.7"]);

        let versions2 = vec!["1.0.0", "1.1.0", "2.9999.9999", "3.0.0", "3.1.0", "4.0.0", "4.1.0"];
        let result2 = Semver::satisfied_by(&versions2, ">1.0.0 <3.0.0 || >=4.0.0");
        assert_eq!(result2, vec!["1.1.0", "2.9999.9999", "4.0.0", "4.1.0"]);

        let versions3 = vec!["0.1.1", "0.1.9999", "0.2.0", "0.2.1", "0.3.0"];
        let result3 = Semver::satisfied_by(&versions3, "^0.2.0");
        assert_eq!(result3, vec!["0.2.0", "0.2.1"]);

        assert!(Semver::satisfied_by(&versions3, "not a range").is_empty());
    }

    #[test]
    fn test_valid_and_clean() {
        assert_eq!(Semver::valid("1.2.3"), Some("1.2.3".to_string()));
        assert_eq!(Semver::valid(" v1.2.3-beta+build "), Some("1.2.3-beta".to_string()));
        assert_eq!(Semver::valid("1.2"), None);
        assert_eq!(Semver::valid("=1.2.3"), None);
        assert_eq!(Semver::valid(&format!("1.2.{}", "9".repeat(300))), None);

        assert_eq!(Semver::clean("  =v1.2.3  "), Some("1.2.3".to_string()));
        assert_eq!(Semver::clean("==vv1.2.3"), Some("1.2.3".to_string()));
        assert_eq!(Semver::clean("~1.2.3"), None);
        assert_eq!(Semver::clean("1.2.3-beta+001"), Some("1.2.3-beta".to_string()));
    }

    #[test]
    fn test_coerce() {
        let coerce = |s: &str| Semver::coerce(s).map(|v| v.to_string());
        assert_eq!(coerce("v2"), Some("2.0.0".to_string()));
        assert_eq!(coerce("1.2"), Some("1.2.0".to_string()));
        assert_eq!(coerce("version 1.2.3.4"), Some("1.2.3".to_string()));
        assert_eq!(coerce("42.6.7.9.3-alpha"), Some("42.6.7".to_string()));
        assert_eq!(coerce("1.2.3-beta"), Some("1.2.3".to_string()));
        assert_eq!(coerce("foo"), None);
        assert_eq!(coerce(""), None);
        assert_eq!(coerce("\u{0661} 2.3.4"), Some("2.3.4".to_string()));
    }

    #[test]
    fn test_inc() {
        assert_eq!(Semver::inc("1.2.3", "major", None), Some("2.0.0".to_string()));
        assert_eq!(Semver::inc("1.2.3", "minor", None), Some("1.3.0".to_string()));
        assert_eq!(Semver::inc("1.2.3", "patch", None), Some("1.2.4".to_string()));
        assert_eq!(
            Semver::inc("1.2.3", "prerelease", Some("beta")),
            Some("1.2.4-beta.0".to_string())
        );
        assert_eq!(Semver::inc("1.2.3", "fake", None), None);
        assert_eq!(Semver::inc("fake", "major", None), None);
    }

    #[test]
    fn test_components() {
        assert_eq!(Semver::major("1.2.3"), Ok(1));
        assert_eq!(Semver::minor("1.2.3"), Ok(2));
        assert_eq!(Semver::patch("1.2.3"), Ok(3));
        assert!(Semver::major("1.2").is_err());
        assert_eq!(
            Semver::prerelease("1.2.3-alpha.1"),
            Some(vec!["alpha".to_string(), "1".to_string()])
        );
        assert_eq!(Semver::prerelease("1.2.3"), None);
    }

    #[test]
    fn test_compare() {
        assert_eq!(Semver::compare("1.2.3", "1.2.4"), Ok(Ordering::Less));
        assert_eq!(Semver::rcompare("1.2.3", "1.2.4"), Ok(Ordering::Greater));
        assert_eq!(Semver::compare("1.2.3+a", "1.2.3+b"), Ok(Ordering::Equal));
        assert_eq!(Semver::compare_build("1.2.3+a", "1.2.3+b"), Ok(Ordering::Less));
        assert_eq!(
            Semver::compare("1.2", "1.2.3"),
            Err(SemverError::InvalidVersion("1.2".to_string()))
        );
    }

    #[test]
    fn test_cmp() {
        assert_eq!(Semver::greater_than("1.25.0", "1.24.0"), Ok(true));
        assert_eq!(Semver::greater_than_or_equal_to("1.25.0", "1.25.0"), Ok(true));
        assert_eq!(Semver::less_than("1.25.0", "1.26.0"), Ok(true));
        assert_eq!(Semver::less_than_or_equal_to("1.25.0", "1.24.0"), Ok(false));
        assert_eq!(Semver::equal_to("1.25.0", "1.25.0+build"), Ok(true));
        assert_eq!(Semver::not_equal_to("1.25.0", "1.25.0"), Ok(false));

        assert_eq!(Semver::cmp("1.25.0", "", "1.25.0"), Ok(true));
        assert_eq!(Semver::cmp("1.25.0", "=", "1.25.0"), Ok(true));
        assert_eq!(Semver::cmp("1.25.0", "===", "v1.25.0"), Ok(true));
        assert_eq!(Semver::cmp("1.25.0", "!==", "1.25.1"), Ok(true));
        assert_eq!(
            Semver::cmp("1.25.0", "<>", "1.25.0"),
            Err(SemverError::InvalidOperator("<>".to_string()))
        );
        assert!(Semver::cmp("1.25", ">", "1.25.0").is_err());
    }

    #[test]
    fn test_diff() {
        assert_eq!(Semver::diff("1.2.3", "2.0.0"), Ok(Some(ReleaseType::Major)));
        assert_eq!(Semver::diff("1.2.3", "1.2.3+build"), Ok(None));
        assert!(Semver::diff("1.2.3", "bad").is_err());
    }

    #[test]
    fn test_valid_range() {
        assert_eq!(Semver::valid_range("*"), Some("*".to_string()));
        assert_eq!(Semver::valid_range(""), Some("*".to_string()));
        assert_eq!(Semver::valid_range(">=0.0.0"), Some("*".to_string()));
        assert_eq!(Semver::valid_range("~1.2.3"), Some(">=1.2.3 <1.3.0-0".to_string()));
        assert_eq!(
            Semver::valid_range("1.2.3 - 2.3.4 || ^3"),
            Some(">=1.2.3 <=2.3.4||>=3.0.0 <4.0.0-0".to_string())
        );
        assert_eq!(Semver::valid_range("blerg"), None);
        assert_eq!(Semver::valid_range(">=1.2.3 foo"), None);
    }

    #[test]
    fn test_max_min_satisfying() {
        let versions = vec!["1.2.3", "1.2.4", "1.3.0-beta", "v1.2.5", "junk"];
        assert_eq!(Semver::max_satisfying(&versions, "~1.2"), Some("v1.2.5".to_string()));
        assert_eq!(Semver::min_satisfying(&versions, "~1.2"), Some("1.2.3".to_string()));
        assert_eq!(Semver::max_satisfying(&versions, "^2"), None);
        assert_eq!(Semver::max_satisfying(&versions, "blerg"), None);
        assert_eq!(Semver::min_satisfying(&[], "*"), None);
    }

    #[test]
    fn test_range_queries() {
        assert_eq!(
            Semver::min_version(">1.0.0").map(|v| v.map(|v| v.to_string())),
            Ok(Some("1.0.1".to_string()))
        );
        assert!(Semver::min_version("blerg").is_err());

        assert_eq!(Semver::gtr("2.0.0", "^1.2.3"), Ok(true));
        assert_eq!(Semver::ltr("1.0.0", "^1.2.3"), Ok(true));
        assert_eq!(Semver::outside("1.5.0", "^1.2.3", ">"), Ok(false));
        assert_eq!(
            Semver::outside("1.5.0", "^1.2.3", "="),
            Err(SemverError::InvalidDirection("=".to_string()))
        );

        assert_eq!(Semver::intersects("^1.0.0", "~1.5.0"), Ok(true));
        assert_eq!(Semver::intersects("^1.0.0", "^2.0.0"), Ok(false));
        assert!(Semver::intersects("^1.0.0", "blerg").is_err());

        assert_eq!(Semver::subset("~1.2.3", "^1.2.3"), Ok(true));
        assert_eq!(Semver::subset("^1.2.3", "~1.2.3"), Ok(false));
        assert_eq!(Semver::subset("blerg", "blerg"), Ok(true));
        assert!(Semver::subset("blerg", "*").is_err());

        assert_eq!(
            Semver::to_comparators("~1.2"),
            Ok(vec![vec![">=1.2.0".to_string(), "<1.3.0-0".to_string()]])
        );
    }

    #[test]
    fn test_sort() {
        let versions = vec!["1.0.0", "0.1.0", "0.1.0", "3.2.1", "2.4.0-alpha", "2.4.0"];
        let sorted = Semver::sort(&versions);
        assert_eq!(sorted, vec!["0.1.0", "0.1.0", "1.0.0", "2.4.0-alpha", "2.4.0", "3.2.1"]);

        let versions2 = vec!["1.2.3+b", "not-a-version", "1.2.3+a", "v1.2.3"];
        let sorted2 = Semver::sort(&versions2);
        assert_eq!(sorted2, vec!["v1.2.3", "1.2.3+a", "1.2.3+b"]);
    }

    #[test]
    fn test_rsort() {
        let versions = vec!["1.0.0", "0.1.0", "0.1.0", "3.2.1", "2.4.0-alpha", "2.4.0"];
        let rsorted = Semver::rsort(&versions);
        assert_eq!(rsorted, vec!["3.2.1", "2.4.0", "2.4.0-alpha", "1.0.0", "0.1.0", "0.1.0"]);

        let versions2 = vec!["1.2.3+b", "1.2.3+a", "v1.2.3"];
        let rsorted2 = Semver::rsort(&versions2);
        assert_eq!(rsorted2, vec!["1.2.3+b", "1.2.3+a", "v1.2.3"]);
    }
}
