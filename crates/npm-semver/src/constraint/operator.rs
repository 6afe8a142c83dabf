//! Operator types for version comparisons

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::SemverError;

/// Comparison operators accepted by [`crate::compare::cmp`].
///
/// Comparators only ever carry `Equal` and the four inequality operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal by precedence (``, `=` or `==`)
    Equal,
    /// Not equal by precedence (!=)
    NotEqual,
    /// Identical canonical strings (===)
    StrictEqual,
    /// Different canonical strings (!==)
    StrictNotEqual,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
}

impl Operator {
    /// The string form used in canonical comparators. `Equal` is the empty string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "",
            Operator::NotEqual => "!=",
            Operator::StrictEqual => "===",
            Operator::StrictNotEqual => "!==",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
        }
    }

    /// Get all supported operator spellings
    pub fn supported_operators() -> &'static [&'static str] {
        &["", "=", "==", "===", "!=", "!==", "<", "<=", ">", ">="]
    }

    /// Whether an ordering between two versions satisfies this operator.
    ///
    /// The strict operators are decided by precedence here; two versions with
    /// equal precedence always share a canonical string.
    pub fn accepts(&self, ordering: Ordering) -> bool {
        match self {
            Operator::Equal | Operator::StrictEqual => ordering == Ordering::Equal,
            Operator::NotEqual | Operator::StrictNotEqual => ordering != Ordering::Equal,
            Operator::LessThan => ordering == Ordering::Less,
            Operator::LessThanOrEqual => ordering != Ordering::Greater,
            Operator::GreaterThan => ordering == Ordering::Greater,
            Operator::GreaterThanOrEqual => ordering != Ordering::Less,
        }
    }

    /// True for `>` and `>=`
    pub fn is_greater(&self) -> bool {
        matches!(self, Operator::GreaterThan | Operator::GreaterThanOrEqual)
    }

    /// True for `<` and `<=`
    pub fn is_less(&self) -> bool {
        matches!(self, Operator::LessThan | Operator::LessThanOrEqual)
    }

    /// True for the operators that admit the bound itself
    pub fn is_inclusive(&self) -> bool {
        matches!(
            self,
            Operator::LessThanOrEqual | Operator::GreaterThanOrEqual
        )
    }
}

impl FromStr for Operator {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "=" | "==" => Ok(Operator::Equal),
            "!=" => Ok(Operator::NotEqual),
            "===" => Ok(Operator::StrictEqual),
            "!==" => Ok(Operator::StrictNotEqual),
            "<" => Ok(Operator::LessThan),
            "<=" => Ok(Operator::LessThanOrEqual),
            ">" => Ok(Operator::GreaterThan),
            ">=" => Ok(Operator::GreaterThanOrEqual),
            _ => Err(SemverError::InvalidOperator(s.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
