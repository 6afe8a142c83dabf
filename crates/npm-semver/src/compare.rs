//! Version comparison utilities

use std::cmp::Ordering;

use crate::{Operator, Options, SemverError, Version};

/// Compare by SemVer precedence
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.cmp(b)
}

/// Reverse of [`compare`]
pub fn rcompare(a: &Version, b: &Version) -> Ordering {
    b.cmp(a)
}

/// Precedence, then build metadata
pub fn compare_build(a: &Version, b: &Version) -> Ordering {
    a.compare_build(b)
}

/// Parse both strings with the loose grammar and compare them
pub fn compare_loose(a: &str, b: &str) -> Result<Ordering, SemverError> {
    let a = Version::parse_with(a, Options::loose())?;
    let b = Version::parse_with(b, Options::loose())?;
    Ok(a.cmp(&b))
}

pub fn gt(a: &Version, b: &Version) -> bool {
    a > b
}

pub fn gte(a: &Version, b: &Version) -> bool {
    a >= b
}

pub fn lt(a: &Version, b: &Version) -> bool {
    a < b
}

pub fn lte(a: &Version, b: &Version) -> bool {
    a <= b
}

pub fn eq(a: &Version, b: &Version) -> bool {
    a == b
}

pub fn neq(a: &Version, b: &Version) -> bool {
    a != b
}

/// Compare `a` to `b` using the given operator.
///
/// `===` and `!==` compare the canonical strings rather than precedence.
pub fn cmp(a: &Version, operator: Operator, b: &Version) -> bool {
    match operator {
        Operator::StrictEqual => a.to_string() == b.to_string(),
        Operator::StrictNotEqual => a.to_string() != b.to_string(),
        _ => operator.accepts(a.cmp(b)),
    }
}

/// Sort ascending by [`compare_build`]
pub fn sort(versions: &mut [Version]) {
    versions.sort_by(compare_build);
}

/// Sort descending by [`compare_build`]
pub fn rsort(versions: &mut [Version]) {
    versions.sort_by(|a, b| compare_build(b, a));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_greater_than() {
        assert!(gt(&v("1.25.0"), &v("1.24.0")));
        assert!(!gt(&v("1.25.0"), &v("1.25.0")));
        assert!(!gt(&v("1.25.0"), &v("1.26.0")));
        assert!(gt(&v("1.25.0"), &v("1.25.0-rc.1")));
        assert!(!gt(&v("1.25.0+build.2"), &v("1.25.0+build.1")));
    }

    #[test]
    fn test_greater_than_or_equal_to() {
        assert!(gte(&v("1.25.0"), &v("1.24.0")));
        assert!(gte(&v("1.25.0"), &v("1.25.0")));
        assert!(!gte(&v("1.25.0"), &v("1.26.0")));
    }

    #[test]
    fn test_less_than() {
        assert!(!lt(&v("1.25.0"), &v("1.24.0")));
        assert!(!lt(&v("1.25.0"), &v("1.25.0")));
        assert!(lt(&v("1.25.0"), &v("1.26.0")));
        assert!(lt(&v("1.0.0-alpha"), &v("1.0.0-alpha.1")));
        assert!(lt(&v("1.0.0-beta.2"), &v("1.0.0-beta.11")));
    }

    #[test]
    fn test_less_than_or_equal_to() {
        assert!(!lte(&v("1.25.0"), &v("1.24.0")));
        assert!(lte(&v("1.25.0"), &v("1.25.0")));
        assert!(lte(&v("1.25.0"), &v("1.26.0")));
    }

    #[test]
    fn test_equal_to() {
        assert!(!eq(&v("1.25.0"), &v("1.24.0")));
        assert!(eq(&v("1.25.0"), &v("1.25.0")));
        assert!(eq(&v("1.25.0"), &v("v1.25.0+build")));
        assert!(!neq(&v("1.25.0"), &v("1.25.0")));
        assert!(neq(&v("1.25.0"), &v("1.26.0")));
    }

    #[test]
    fn test_cmp() {
        let (a, b, c) = (v("1.25.0"), v("1.24.0"), v("1.25.0+build"));

        assert!(cmp(&a, Operator::GreaterThan, &b));
        assert!(cmp(&a, Operator::GreaterThanOrEqual, &a));
        assert!(!cmp(&a, Operator::LessThan, &b));
        assert!(cmp(&b, Operator::LessThanOrEqual, &a));
        assert!(cmp(&a, Operator::Equal, &c));
        assert!(cmp(&a, Operator::NotEqual, &b));
        assert!(cmp(&a, Operator::StrictEqual, &c));
        assert!(cmp(&a, Operator::StrictNotEqual, &b));
    }

    #[test]
    fn test_compare_variants() {
        assert_eq!(compare(&v("1.0.0"), &v("2.0.0")), Ordering::Less);
        assert_eq!(rcompare(&v("1.0.0"), &v("2.0.0")), Ordering::Greater);
        assert_eq!(compare(&v("1.0.0+a"), &v("1.0.0+b")), Ordering::Equal);
        assert_eq!(compare_build(&v("1.0.0+a"), &v("1.0.0+b")), Ordering::Less);
        assert_eq!(compare_build(&v("1.0.0"), &v("1.0.0+b")), Ordering::Less);
        assert_eq!(compare_loose("=01.2.3", "v1.2.3"), Ok(Ordering::Equal));
        assert!(compare_loose("foo", "1.2.3").is_err());
    }

    #[test]
    fn test_sort() {
        let mut versions: Vec<Version> = ["1.2.3+b", "0.1.0", "1.2.3", "1.2.3-beta", "1.2.3+a"]
            .iter()
            .map(|s| v(s))
            .collect();

        sort(&mut versions);
        let sorted: Vec<String> = versions.iter().map(|v| v.raw().to_string()).collect();
        assert_eq!(sorted, vec!["0.1.0", "1.2.3-beta", "1.2.3", "1.2.3+a", "1.2.3+b"]);

        rsort(&mut versions);
        let sorted: Vec<String> = versions.iter().map(|v| v.raw().to_string()).collect();
        assert_eq!(sorted, vec!["1.2.3+b", "1.2.3+a", "1.2.3", "1.2.3-beta", "0.1.0"]);
    }
}
