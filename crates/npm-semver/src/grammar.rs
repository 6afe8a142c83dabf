//! Grammar fragments for versions, comparators and range tokens
//!
//! Every fragment is a small recognizer over `&str`, and the larger shapes are
//! built by calling the smaller ones in order: a full version is a main triple
//! followed by an optional prerelease and build suffix, a comparator is an
//! operator prefix followed by a full version, and a partial version is the
//! x-range shape used by tilde, caret, hyphen and bare x-ranges.
//!
//! Only the substitutions that operate on arbitrary text (build stripping, star
//! stripping, whitespace collapsing and coercion) are regex based.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

/// Inputs longer than this are rejected before matching
pub const MAX_LENGTH: usize = 256;

/// Largest integer a version component may hold (2^53 - 1)
pub const MAX_SAFE_INTEGER: u64 = 9_007_199_254_740_991;

lazy_static! {
    static ref BUILD_RE: Regex = Regex::new(r"\+[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*").unwrap();

    static ref STAR_RE: Regex = Regex::new(r"(?:<|>)?=?\s*\*").unwrap();

    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();

    static ref COERCE_RE: Regex = Regex::new(
        r"(?:^|[^0-9])([0-9]{1,16})(?:\.([0-9]{1,16}))?(?:\.([0-9]{1,16}))?(?:$|[^0-9])"
    ).unwrap();
}

/// A successful match of the full version grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct VersionMatch<'a> {
    pub major: &'a str,
    pub minor: &'a str,
    pub patch: &'a str,
    pub prerelease: Option<&'a str>,
    pub build: Option<&'a str>,
}

/// A successful match of the partial (x-range) grammar.
///
/// Missing components and `x`, `X`, `*` wildcards are both `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Partial<'a> {
    pub major: Option<u64>,
    pub minor: Option<u64>,
    pub patch: Option<u64>,
    pub prerelease: Option<&'a str>,
}

impl Partial<'_> {
    /// True if any component is missing or a wildcard
    pub fn has_wildcard(&self) -> bool {
        self.patch.is_none()
    }
}

fn is_identifier_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-'
}

/// `0|[1-9]\d*`, or `\d+` in loose mode
pub(crate) fn is_numeric_identifier(s: &str, loose: bool) -> bool {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    loose || s == "0" || !s.starts_with('0')
}

/// `\d*[a-zA-Z-][a-zA-Z0-9-]*`
pub(crate) fn is_non_numeric_identifier(s: &str) -> bool {
    !s.is_empty()
        && s.bytes().all(is_identifier_byte)
        && s.bytes().any(|b| !b.is_ascii_digit())
}

pub(crate) fn is_prerelease_identifier(s: &str, loose: bool) -> bool {
    is_non_numeric_identifier(s) || is_numeric_identifier(s, loose)
}

/// `[0-9A-Za-z-]+`
pub(crate) fn is_build_identifier(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(is_identifier_byte)
}

/// One or more dot separated prerelease identifiers
pub(crate) fn is_prerelease(s: &str, loose: bool) -> bool {
    s.split('.').all(|id| is_prerelease_identifier(id, loose))
}

/// One or more dot separated build identifiers
pub(crate) fn is_build(s: &str) -> bool {
    s.split('.').all(is_build_identifier)
}

fn split_digits(s: &str) -> (&str, &str) {
    let end = s.bytes().position(|b| !b.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

fn numeric_part(s: &str, loose: bool) -> Option<(&str, &str)> {
    let (digits, rest) = split_digits(s);
    if is_numeric_identifier(digits, loose) {
        Some((digits, rest))
    } else {
        None
    }
}

/// `[v=\s]*`
fn strip_loose_prefix(s: &str) -> &str {
    s.trim_start_matches(|c: char| c == 'v' || c == '=' || c.is_whitespace())
}

/// `(-PRERELEASE)?(+BUILD)?` anchored at the end of the input
fn suffix(rest: &str, loose: bool) -> Option<(Option<&str>, Option<&str>)> {
    let (pre_part, build) = match rest.find('+') {
        Some(pos) => (&rest[..pos], Some(&rest[pos + 1..])),
        None => (rest, None),
    };

    let prerelease = if pre_part.is_empty() {
        None
    } else {
        let pre = match pre_part.strip_prefix('-') {
            Some(pre) => pre,
            None if loose => pre_part,
            None => return None,
        };
        if !is_prerelease(pre, loose) {
            return None;
        }
        Some(pre)
    };

    if let Some(build) = build {
        if !is_build(build) {
            return None;
        }
    }

    Some((prerelease, build))
}

/// `v?MAJOR.MINOR.PATCH(-PRERELEASE)?(+BUILD)?`, anchored on both ends.
///
/// Loose mode accepts any run of `v`, `=` and whitespace as a prefix, leading
/// zeros in numeric parts and a prerelease without the `-` separator.
pub(crate) fn full_version(input: &str, loose: bool) -> Option<VersionMatch<'_>> {
    let rest = if loose {
        strip_loose_prefix(input)
    } else {
        input.strip_prefix('v').unwrap_or(input)
    };

    let (major, rest) = numeric_part(rest, loose)?;
    let rest = rest.strip_prefix('.')?;
    let (minor, rest) = numeric_part(rest, loose)?;
    let rest = rest.strip_prefix('.')?;
    let (patch, rest) = numeric_part(rest, loose)?;
    let (prerelease, build) = suffix(rest, loose)?;

    Some(VersionMatch {
        major,
        minor,
        patch,
        prerelease,
        build,
    })
}

/// `((?:<|>)?=?)`, returning the operator and the remaining input
pub(crate) fn operator_prefix(input: &str) -> (&str, &str) {
    let bytes = input.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'<') | Some(b'>')) {
        end = 1;
    }
    if bytes.get(end) == Some(&b'=') {
        end += 1;
    }
    input.split_at(end)
}

/// `OP\s*VERSION` or the empty string.
///
/// The empty string yields no version and stands for "any".
pub(crate) fn comparator(input: &str, loose: bool) -> Option<(&str, Option<VersionMatch<'_>>)> {
    if input.is_empty() {
        return Some(("", None));
    }
    let (operator, rest) = operator_prefix(input);
    full_version(rest.trim_start(), loose).map(|m| (operator, Some(m)))
}

fn x_component(s: &str, loose: bool) -> Option<(Option<u64>, &str)> {
    match s.as_bytes().first() {
        Some(b'x') | Some(b'X') | Some(b'*') => Some((None, &s[1..])),
        _ => {
            let (digits, rest) = numeric_part(s, loose)?;
            let value = digits.parse::<u64>().ok()?;
            Some((Some(value), rest))
        }
    }
}

/// `[v=\s]*XR(\.XR(\.XR(-PRERELEASE)?(+BUILD)?)?)?` where `XR` is a numeric
/// identifier or one of `x`, `X`, `*`, anchored on both ends.
pub(crate) fn partial(input: &str, loose: bool) -> Option<Partial<'_>> {
    let rest = strip_loose_prefix(input);
    let (major, mut rest) = x_component(rest, loose)?;
    let mut minor = None;
    let mut patch = None;
    let mut prerelease = None;

    if let Some(after) = rest.strip_prefix('.') {
        let (value, after) = x_component(after, loose)?;
        minor = value;
        rest = after;

        if let Some(after) = rest.strip_prefix('.') {
            let (value, after) = x_component(after, loose)?;
            patch = value;
            let (pre, _build) = suffix(after, loose)?;
            prerelease = pre;
            rest = "";
        }
    }

    if !rest.is_empty() {
        return None;
    }

    // A wildcard hides every component after it.
    let minor = major.and(minor);
    let patch = minor.and(patch);

    Some(Partial {
        major,
        minor,
        patch,
        prerelease,
    })
}

/// Remove the first `+BUILD` run from a range token
pub(crate) fn strip_build(token: &str) -> Cow<'_, str> {
    BUILD_RE.replace(token, "")
}

/// Remove the first `(<|>)?=?\s*\*` run from a rewritten token
pub(crate) fn strip_star(token: &str) -> Cow<'_, str> {
    STAR_RE.replace(token, "")
}

/// Trim and collapse every whitespace run into a single space
pub(crate) fn collapse_whitespace(input: &str) -> String {
    WHITESPACE_RE.replace_all(input.trim(), " ").into_owned()
}

/// Split on whitespace runs, keeping the empty pieces at either end
pub(crate) fn split_whitespace_runs(input: &str) -> Vec<&str> {
    WHITESPACE_RE.split(input).collect()
}

/// True for `>=0.0.0` (or `>=0.0.0-0` when prereleases are included)
pub(crate) fn is_gte_zero(token: &str, include_prerelease: bool) -> bool {
    let Some(rest) = token.trim().strip_prefix(">=") else {
        return false;
    };
    let expected = if include_prerelease { "0.0.0-0" } else { "0.0.0" };
    rest.trim_start() == expected
}

/// Find the first `MAJOR(.MINOR(.PATCH)?)?` run of at most 16 digits per part
/// that is not glued to further digits.
pub(crate) fn coerce_parts(input: &str) -> Option<(&str, Option<&str>, Option<&str>)> {
    let caps = COERCE_RE.captures(input)?;
    let major = caps.get(1)?.as_str();
    let minor = caps.get(2).map(|m| m.as_str());
    let patch = caps.get(3).map(|m| m.as_str());
    Some((major, minor, patch))
}
