//! Ranges: `||` separated sets of comparator clauses
//!
//! Parsing runs every clause through a rewrite pipeline (hyphen ranges,
//! operator spacing, carets, tildes, x-ranges, stars) until only plain
//! comparators remain, then builds and simplifies the comparator list.

use std::fmt;
use std::str::FromStr;

use log::trace;

use crate::constraint::Comparator;
use crate::grammar::{self, Partial};
use crate::{Options, SemverError, Version};

/// A parsed range in disjunctive normal form.
///
/// A version satisfies the range if it satisfies every comparator of at least
/// one clause, subject to the prerelease exclusion rule.
#[derive(Debug, Clone)]
pub struct Range {
    raw: String,
    set: Vec<Vec<Comparator>>,
    options: Options,
}

impl Range {
    /// Parse a range with strict options
    pub fn parse(input: &str) -> Result<Self, SemverError> {
        Self::parse_with(input, Options::default())
    }

    /// Parse a range with the given options
    pub fn parse_with(input: &str, options: Options) -> Result<Self, SemverError> {
        let raw = grammar::collapse_whitespace(input);

        let mut set = Vec::new();
        for clause in raw.split("||") {
            let comparators = parse_clause(clause, options).map_err(|err| match err {
                SemverError::InvalidComparator(comparator) => SemverError::InvalidRangeComparator {
                    range: raw.clone(),
                    comparator,
                },
                other => other,
            })?;
            if !comparators.is_empty() {
                set.push(comparators);
            }
        }

        if set.is_empty() {
            return Err(SemverError::InvalidRange(raw));
        }

        if set.len() > 1 {
            let first = set[0].clone();
            set.retain(|comparators| !is_null_set(comparators));
            if set.is_empty() {
                set.push(first);
            } else if set.len() > 1 {
                if let Some(any) = set.iter().find(|comparators| is_any(comparators)).cloned() {
                    set = vec![any];
                }
            }
        }

        trace!("range {:?} parsed into {:?}", raw, set);

        Ok(Range { raw, set, options })
    }

    /// A range holding a single comparator
    pub fn from_comparator(comparator: Comparator, options: Options) -> Self {
        Range {
            raw: comparator.to_string(),
            set: vec![vec![comparator]],
            options,
        }
    }

    /// The input with whitespace collapsed
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The comparator clauses
    pub fn set(&self) -> &[Vec<Comparator>] {
        &self.set
    }

    pub fn options(&self) -> Options {
        self.options
    }

    /// Check whether a version satisfies this range
    pub fn test(&self, version: &Version) -> bool {
        self.set
            .iter()
            .any(|comparators| test_set(comparators, version, self.options))
    }

    /// Parse a version with this range's options and test it; unparseable
    /// versions never satisfy
    pub fn test_str(&self, version: &str) -> bool {
        Version::parse_with(version, self.options)
            .map(|version| self.test(&version))
            .unwrap_or(false)
    }

    /// Check whether some version could satisfy both ranges
    pub fn intersects(&self, other: &Range) -> bool {
        let options = self.options;
        self.set.iter().any(|this| {
            is_satisfiable(this, options)
                && other.set.iter().any(|that| {
                    is_satisfiable(that, options)
                        && this
                            .iter()
                            .all(|a| that.iter().all(|b| a.intersects(b, options)))
                })
        })
    }

    /// The canonical comparator strings of every clause
    pub fn to_comparators(&self) -> Vec<Vec<String>> {
        self.set
            .iter()
            .map(|comparators| {
                let joined = comparators
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                joined.trim().split(' ').map(str::to_string).collect()
            })
            .collect()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clauses: Vec<String> = self
            .set
            .iter()
            .map(|comparators| {
                comparators
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
                    .trim()
                    .to_string()
            })
            .collect();
        write!(f, "{}", clauses.join("||").trim())
    }
}

impl FromStr for Range {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Range::parse(s)
    }
}

impl From<Comparator> for Range {
    fn from(comparator: Comparator) -> Self {
        Range::from_comparator(comparator, Options::default())
    }
}

fn is_null_set(comparators: &[Comparator]) -> bool {
    comparators.first().is_some_and(Comparator::is_null_set)
}

fn is_any(comparators: &[Comparator]) -> bool {
    comparators.len() == 1 && comparators[0].is_any()
}

/// Every comparator matches, and a prerelease version only passes when some
/// comparator carries a prerelease on the same `major.minor.patch`.
pub(crate) fn test_set(comparators: &[Comparator], version: &Version, options: Options) -> bool {
    if !comparators.iter().all(|c| c.test(version)) {
        return false;
    }

    if version.is_prerelease() && !options.include_prerelease {
        return comparators.iter().any(|c| match c.version() {
            Some(allowed) => allowed.is_prerelease() && allowed.compare_main(version).is_eq(),
            None => false,
        });
    }

    true
}

/// Pairwise check that repeatedly pops a comparator and requires it to
/// intersect every one still left.
///
/// Looser than an exact interval check: `>1.0.0 <1.0.1-0` passes although no
/// version lies between the two bounds, and the prerelease rule is not applied.
pub(crate) fn is_satisfiable(comparators: &[Comparator], options: Options) -> bool {
    let mut remaining: Vec<&Comparator> = comparators.iter().collect();
    while let Some(candidate) = remaining.pop() {
        if !remaining
            .iter()
            .all(|other| candidate.intersects(other, options))
        {
            return false;
        }
    }
    true
}

fn parse_clause(clause: &str, options: Options) -> Result<Vec<Comparator>, SemverError> {
    let clause = clause.trim();

    let clause = replace_hyphen(clause, options).unwrap_or_else(|| clause.to_string());
    trace!("hyphen replace: {:?}", clause);

    let tokens = trim_operators(&clause);
    trace!("operator trim: {:?}", tokens);

    let rewritten = tokens
        .iter()
        .map(|token| rewrite_token(token, options))
        .collect::<Vec<_>>()
        .join(" ");
    trace!("rewritten: {:?}", rewritten);

    let mut pieces: Vec<&str> = grammar::split_whitespace_runs(&rewritten)
        .into_iter()
        .map(|piece| {
            if grammar::is_gte_zero(piece, options.include_prerelease) {
                ""
            } else {
                piece
            }
        })
        .collect();

    if options.loose {
        pieces.retain(|piece| grammar::comparator(piece, true).is_some());
    }

    let mut comparators: Vec<Comparator> = Vec::new();
    for piece in pieces {
        let comparator = Comparator::parse_with(piece, options)?;
        if comparator.is_null_set() {
            return Ok(vec![comparator]);
        }
        if !comparators.contains(&comparator) {
            comparators.push(comparator);
        }
    }

    if comparators.len() > 1 && comparators.iter().any(Comparator::is_any) {
        comparators.retain(|c| !c.is_any());
    }

    Ok(comparators)
}

/// Join a lone operator token with the token that follows it
fn trim_operators(clause: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut pending: Option<&str> = None;

    for word in clause.split(' ') {
        if let Some(operator) = pending.take() {
            let operator = if operator == "~>" { "~" } else { operator };
            tokens.push(format!("{}{}", operator, word));
            continue;
        }
        if is_lone_operator(word) {
            pending = Some(word);
        } else {
            tokens.push(word.to_string());
        }
    }

    if let Some(operator) = pending {
        tokens.push(operator.to_string());
    }

    tokens
}

fn is_lone_operator(word: &str) -> bool {
    matches!(word, "<" | ">" | "<=" | ">=" | "=" | "~" | "~>" | "^")
}

fn rewrite_token(token: &str, options: Options) -> String {
    let token = grammar::strip_build(token);

    let rewritten = map_words(&token, |word| replace_caret(word, options));
    let rewritten = map_words(&rewritten, |word| replace_tilde(word, options));
    let rewritten = map_words(&rewritten, |word| replace_x_range(word, options));

    grammar::strip_star(rewritten.trim()).into_owned()
}

fn map_words<F>(input: &str, f: F) -> String
where
    F: Fn(&str) -> String,
{
    input.split_whitespace().map(f).collect::<Vec<_>>().join(" ")
}

fn pre_zero(options: Options) -> &'static str {
    if options.include_prerelease {
        "-0"
    } else {
        ""
    }
}

/// `A - B` becomes `>=A <=B`, widening partial bounds
fn replace_hyphen(clause: &str, options: Options) -> Option<String> {
    let (from_text, to_text) = clause.split_once(" - ")?;
    let from = grammar::partial(from_text, options.loose)?;
    let to = grammar::partial(to_text, options.loose)?;
    let z = pre_zero(options);

    let lower = match (from.major, from.minor, from.patch) {
        (None, _, _) => String::new(),
        (Some(major), None, _) => format!(">={}.0.0{}", major, z),
        (Some(major), Some(minor), None) => format!(">={}.{}.0{}", major, minor, z),
        _ if from.prerelease.is_some() => format!(">={}", from_text),
        _ => format!(">={}{}", from_text, z),
    };

    let upper = match (to.major, to.minor, to.patch) {
        (None, _, _) => String::new(),
        (Some(major), None, _) => format!("<{}.0.0-0", major.saturating_add(1)),
        (Some(major), Some(minor), None) => {
            format!("<{}.{}.0-0", major, minor.saturating_add(1))
        }
        (Some(major), Some(minor), Some(patch)) => match to.prerelease {
            Some(pre) => format!("<={}.{}.{}-{}", major, minor, patch, pre),
            None if options.include_prerelease => {
                format!("<{}.{}.{}-0", major, minor, patch.saturating_add(1))
            }
            None => format!("<={}", to_text),
        },
    };

    Some(format!("{} {}", lower, upper).trim().to_string())
}

/// `^1.2.3` allows changes that keep the leftmost non-zero component
fn replace_caret(word: &str, options: Options) -> String {
    let Some(partial) = word
        .strip_prefix('^')
        .and_then(|rest| grammar::partial(rest, options.loose))
    else {
        return word.to_string();
    };
    let z = pre_zero(options);

    let rewritten = match (partial.major, partial.minor, partial.patch) {
        (None, _, _) => String::new(),
        (Some(major), None, _) => format!(">={}.0.0{} <{}.0.0-0", major, z, major.saturating_add(1)),
        (Some(0), Some(minor), None) => {
            format!(">=0.{}.0{} <0.{}.0-0", minor, z, minor.saturating_add(1))
        }
        (Some(major), Some(minor), None) => {
            format!(">={}.{}.0{} <{}.0.0-0", major, minor, z, major.saturating_add(1))
        }
        (Some(major), Some(minor), Some(patch)) => {
            let lower = match partial.prerelease {
                Some(pre) => format!(">={}.{}.{}-{}", major, minor, patch, pre),
                None if major == 0 => format!(">=0.{}.{}{}", minor, patch, z),
                None => format!(">={}.{}.{}", major, minor, patch),
            };
            let upper = match (major, minor) {
                (0, 0) => format!("<0.0.{}-0", patch.saturating_add(1)),
                (0, _) => format!("<0.{}.0-0", minor.saturating_add(1)),
                _ => format!("<{}.0.0-0", major.saturating_add(1)),
            };
            format!("{} {}", lower, upper)
        }
    };

    trace!("caret {:?} => {:?}", word, rewritten);
    rewritten
}

/// `~1.2.3` allows patch-level changes, `~1` minor-level ones
fn replace_tilde(word: &str, options: Options) -> String {
    let Some(partial) = word
        .strip_prefix('~')
        .map(|rest| rest.strip_prefix('>').unwrap_or(rest))
        .and_then(|rest| grammar::partial(rest, options.loose))
    else {
        return word.to_string();
    };

    let rewritten = match (partial.major, partial.minor, partial.patch) {
        (None, _, _) => String::new(),
        (Some(major), None, _) => format!(">={}.0.0 <{}.0.0-0", major, major.saturating_add(1)),
        (Some(major), Some(minor), None) => {
            format!(">={}.{}.0 <{}.{}.0-0", major, minor, major, minor.saturating_add(1))
        }
        (Some(major), Some(minor), Some(patch)) => {
            let lower = match partial.prerelease {
                Some(pre) => format!(">={}.{}.{}-{}", major, minor, patch, pre),
                None => format!(">={}.{}.{}", major, minor, patch),
            };
            format!("{} <{}.{}.0-0", lower, major, minor.saturating_add(1))
        }
    };

    trace!("tilde {:?} => {:?}", word, rewritten);
    rewritten
}

/// Expand `1.x`, `>1.2`, `<=1` and friends into plain comparators
fn replace_x_range(word: &str, options: Options) -> String {
    let (operator, rest) = grammar::operator_prefix(word);
    let Some(partial) = grammar::partial(rest, options.loose) else {
        return word.to_string();
    };

    let rewritten = x_range(operator, &partial, options).unwrap_or_else(|| word.to_string());
    trace!("x-range {:?} => {:?}", word, rewritten);
    rewritten
}

fn x_range(operator: &str, partial: &Partial<'_>, options: Options) -> Option<String> {
    let wildcard = partial.has_wildcard();
    let operator = if operator == "=" && wildcard { "" } else { operator };
    let mut pre = pre_zero(options);

    let Some(mut major) = partial.major else {
        // Everything is excluded by `>*` and `<*`
        return Some(if operator == ">" || operator == "<" {
            "<0.0.0-0".to_string()
        } else {
            "*".to_string()
        });
    };

    if !operator.is_empty() && wildcard {
        let mut minor = partial.minor.unwrap_or(0);
        let mut operator = operator;
        match operator {
            ">" => {
                // >1 => >=2.0.0, >1.2 => >=1.3.0
                operator = ">=";
                if partial.minor.is_none() {
                    major = major.saturating_add(1);
                    minor = 0;
                } else {
                    minor = minor.saturating_add(1);
                }
            }
            "<=" => {
                // <=0.7.x is really <0.8.0
                operator = "<";
                if partial.minor.is_none() {
                    major = major.saturating_add(1);
                } else {
                    minor = minor.saturating_add(1);
                }
            }
            _ => {}
        }
        if operator == "<" {
            pre = "-0";
        }
        return Some(format!("{}{}.{}.0{}", operator, major, minor, pre));
    }

    match (partial.minor, partial.patch) {
        (None, _) => Some(format!(">={}.0.0{} <{}.0.0-0", major, pre, major.saturating_add(1))),
        (Some(minor), None) => Some(format!(
            ">={}.{}.0{} <{}.{}.0-0",
            major,
            minor,
            pre,
            major,
            minor.saturating_add(1)
        )),
        _ => None,
    }
}
