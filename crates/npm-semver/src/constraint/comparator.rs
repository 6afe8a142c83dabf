//! Single operator/version comparators

use std::fmt;
use std::str::FromStr;

use crate::constraint::Range;
use crate::grammar::{self, MAX_LENGTH};
use crate::{Operator, Options, SemverError, Version};

/// One `operator version` pair, or the match-everything comparator.
///
/// Only `Equal` and the four inequality operators ever appear in a comparator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparator {
    /// The empty comparator, satisfied by every version
    Any,
    Bound { operator: Operator, version: Version },
}

impl Comparator {
    /// Create a bound comparator
    pub fn new(operator: Operator, version: Version) -> Result<Self, SemverError> {
        match operator {
            Operator::Equal
            | Operator::LessThan
            | Operator::LessThanOrEqual
            | Operator::GreaterThan
            | Operator::GreaterThanOrEqual => Ok(Comparator::Bound { operator, version }),
            other => Err(SemverError::InvalidOperator(other.as_str().to_string())),
        }
    }

    /// Parse a comparator with strict options
    pub fn parse(input: &str) -> Result<Self, SemverError> {
        Self::parse_with(input, Options::default())
    }

    /// Parse `OP VERSION` (or the empty string) with the given options
    pub fn parse_with(input: &str, options: Options) -> Result<Self, SemverError> {
        let normalized = grammar::collapse_whitespace(input);

        let (operator, m) = grammar::comparator(&normalized, options.loose)
            .ok_or_else(|| SemverError::InvalidComparator(normalized.clone()))?;
        let Some(m) = m else {
            return Ok(Comparator::Any);
        };

        let text = normalized[operator.len()..].trim_start();
        if text.len() > MAX_LENGTH {
            return Err(SemverError::too_long());
        }

        let operator = operator.parse::<Operator>()?;
        let version = Version::from_match(m, text, options)?;

        Ok(Comparator::Bound { operator, version })
    }

    /// The operator, `Equal` for [`Comparator::Any`]
    pub fn operator(&self) -> Operator {
        match self {
            Comparator::Any => Operator::Equal,
            Comparator::Bound { operator, .. } => *operator,
        }
    }

    /// The bound version, `None` for [`Comparator::Any`]
    pub fn version(&self) -> Option<&Version> {
        match self {
            Comparator::Any => None,
            Comparator::Bound { version, .. } => Some(version),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Comparator::Any)
    }

    /// `<0.0.0-0`, which nothing satisfies
    pub fn is_null_set(&self) -> bool {
        match self {
            Comparator::Bound {
                operator: Operator::LessThan,
                version,
            } => *version == Version::lowest(),
            _ => false,
        }
    }

    /// `<0.0.0` or `<0.0.0-anything`
    fn is_below_zero(&self) -> bool {
        match self {
            Comparator::Bound {
                operator: Operator::LessThan,
                version,
            } => version.compare_main(&Version::new(0, 0, 0)).is_eq(),
            _ => false,
        }
    }

    /// The canonical string, empty for [`Comparator::Any`]
    pub fn value(&self) -> String {
        self.to_string()
    }

    /// Check a version against this comparator alone.
    ///
    /// The prerelease exclusion rule belongs to ranges and is not applied here.
    pub fn test(&self, version: &Version) -> bool {
        match self {
            Comparator::Any => true,
            Comparator::Bound {
                operator,
                version: bound,
            } => operator.accepts(version.cmp(bound)),
        }
    }

    /// Check whether some version could satisfy both comparators
    pub fn intersects(&self, other: &Comparator, options: Options) -> bool {
        match (self, other) {
            (Comparator::Any, Comparator::Any) => return true,
            (
                Comparator::Bound {
                    operator: Operator::Equal,
                    version,
                },
                _,
            ) => return Range::from_comparator(other.clone(), options).test(version),
            (
                Comparator::Any,
                Comparator::Bound {
                    operator: Operator::Equal,
                    version,
                },
            ) => return Range::from_comparator(Comparator::Any, options).test(version),
            (Comparator::Any, _) | (_, Comparator::Any) => return true,
            (
                _,
                Comparator::Bound {
                    operator: Operator::Equal,
                    version,
                },
            ) => return Range::from_comparator(self.clone(), options).test(version),
            _ => {}
        }

        if options.include_prerelease {
            if self.is_null_set() || other.is_null_set() {
                return false;
            }
        } else if self.is_below_zero() || other.is_below_zero() {
            return false;
        }

        let (
            Comparator::Bound {
                operator: a_op,
                version: a,
            },
            Comparator::Bound {
                operator: b_op,
                version: b,
            },
        ) = (self, other)
        else {
            return true;
        };

        // Same direction: both unbounded on one side
        if (a_op.is_greater() && b_op.is_greater()) || (a_op.is_less() && b_op.is_less()) {
            return true;
        }

        if a == b && a_op.is_inclusive() && b_op.is_inclusive() {
            return true;
        }

        (a < b && a_op.is_greater() && b_op.is_less()) || (a > b && a_op.is_less() && b_op.is_greater())
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparator::Any => Ok(()),
            Comparator::Bound { operator, version } => write!(f, "{}{}", operator, version),
        }
    }
}

impl FromStr for Comparator {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Comparator::parse(s)
    }
}
