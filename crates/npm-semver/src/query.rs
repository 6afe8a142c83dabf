//! Queries that relate a range to concrete versions

use std::fmt;
use std::str::FromStr;

use log::trace;

use crate::{Comparator, Identifier, Operator, Range, SemverError, Version};

impl Range {
    /// The highest version in `versions` that satisfies this range.
    ///
    /// Of several equal versions the first one wins.
    pub fn max_satisfying<'a>(&self, versions: &'a [Version]) -> Option<&'a Version> {
        versions
            .iter()
            .filter(|version| self.test(version))
            .fold(None, |max, version| match max {
                Some(max) if max >= version => Some(max),
                _ => Some(version),
            })
    }

    /// The lowest version in `versions` that satisfies this range
    pub fn min_satisfying<'a>(&self, versions: &'a [Version]) -> Option<&'a Version> {
        versions
            .iter()
            .filter(|version| self.test(version))
            .fold(None, |min, version| match min {
                Some(min) if min <= version => Some(min),
                _ => Some(version),
            })
    }

    /// The lowest version that could possibly satisfy this range
    pub fn min_version(&self) -> Option<Version> {
        let zero = Version::new(0, 0, 0);
        if self.test(&zero) {
            return Some(zero);
        }

        let lowest = Version::lowest();
        if self.test(&lowest) {
            return Some(lowest);
        }

        let mut min: Option<Version> = None;
        for comparators in self.set() {
            let mut clause_min: Option<Version> = None;

            for comparator in comparators {
                let Comparator::Bound { operator, version } = comparator else {
                    continue;
                };

                let mut candidate = version.clone().normalized();
                match operator {
                    Operator::GreaterThan => {
                        if candidate.prerelease.is_empty() {
                            candidate.patch += 1;
                        } else {
                            candidate.prerelease.push(Identifier::Numeric(0));
                        }
                        candidate = candidate.normalized();
                    }
                    Operator::Equal | Operator::GreaterThanOrEqual => {}
                    // Upper bounds never raise the minimum
                    _ => continue,
                }

                if clause_min.as_ref().map_or(true, |current| candidate > *current) {
                    clause_min = Some(candidate);
                }
            }

            if let Some(clause_min) = clause_min {
                if min.as_ref().map_or(true, |current| *current > clause_min) {
                    min = Some(clause_min);
                }
            }
        }

        trace!("minimum candidate for {:?}: {:?}", self.raw(), min);
        min.filter(|min| self.test(min))
    }
}

/// Which side of a range [`outside`] looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Above every version the range admits (`>`)
    Above,
    /// Below every version the range admits (`<`)
    Below,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Above => ">",
            Direction::Below => "<",
        }
    }

    /// `a` lies further in this direction than `b`
    fn beyond(&self, a: &Version, b: &Version) -> bool {
        match self {
            Direction::Above => a > b,
            Direction::Below => a < b,
        }
    }

    /// `a` lies further against this direction than `b`
    fn short_of(&self, a: &Version, b: &Version) -> bool {
        match self {
            Direction::Above => a < b,
            Direction::Below => a > b,
        }
    }

    fn at_or_short_of(&self, a: &Version, b: &Version) -> bool {
        match self {
            Direction::Above => a <= b,
            Direction::Below => a >= b,
        }
    }

    /// The strict and inclusive operators pointing this way
    fn operators(&self) -> (Operator, Operator) {
        match self {
            Direction::Above => (Operator::GreaterThan, Operator::GreaterThanOrEqual),
            Direction::Below => (Operator::LessThan, Operator::LessThanOrEqual),
        }
    }
}

impl FromStr for Direction {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ">" => Ok(Direction::Above),
            "<" => Ok(Direction::Below),
            _ => Err(SemverError::InvalidDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Check whether `version` lies entirely past `range` in the given direction.
///
/// A version that satisfies the range is never outside it. Otherwise every
/// clause must leave `version` on the far side of its extreme bound.
pub fn outside(version: &Version, range: &Range, direction: Direction) -> bool {
    if range.test(version) {
        return false;
    }

    let floor = Version::new(0, 0, 0);
    let (comp, ecomp) = direction.operators();

    for comparators in range.set() {
        // The match-everything comparator counts as `>=0.0.0`
        let bounds: Vec<(Operator, &Version)> = comparators
            .iter()
            .map(|comparator| match comparator {
                Comparator::Any => (Operator::GreaterThanOrEqual, &floor),
                Comparator::Bound { operator, version } => (*operator, version),
            })
            .collect();

        let Some(&first) = bounds.first() else {
            continue;
        };
        let mut high = first;
        let mut low = first;
        for &bound in &bounds {
            if direction.beyond(bound.1, high.1) {
                high = bound;
            } else if direction.short_of(bound.1, low.1) {
                low = bound;
            }
        }

        if high.0 == comp || high.0 == ecomp {
            return false;
        }

        if (low.0 == Operator::Equal || low.0 == comp) && direction.at_or_short_of(version, low.1) {
            return false;
        } else if low.0 == ecomp && direction.short_of(version, low.1) {
            return false;
        }
    }

    true
}

/// Greater than every version the range admits
pub fn gtr(version: &Version, range: &Range) -> bool {
    outside(version, range, Direction::Above)
}

/// Less than every version the range admits
pub fn ltr(version: &Version, range: &Range) -> bool {
    outside(version, range, Direction::Below)
}
