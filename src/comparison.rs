//! Comparison operators used by attribute-based role constraints.
//!
//! Only the vocabulary lives here. Evaluating an operator against runtime
//! attribute values is the job of the constraint evaluator.

use crate::error::{Error, Result};

/// A comparison between a constraint value and a runtime attribute.
///
/// Each operator has a fixed short token, which is what gets stored and
/// what [`Display`](std::fmt::Display) prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "persistence", derive(serde::Serialize, serde::Deserialize))]
pub enum ComparisonOperator {
    /// `eq`
    #[cfg_attr(feature = "persistence", serde(rename = "eq"))]
    Equals,
    /// `neq`
    #[cfg_attr(feature = "persistence", serde(rename = "neq"))]
    NotEquals,
    /// `gt`
    #[cfg_attr(feature = "persistence", serde(rename = "gt"))]
    GreaterThan,
    /// `gte`
    #[cfg_attr(feature = "persistence", serde(rename = "gte"))]
    GreaterThanOrEqualTo,
    /// `lt`
    #[cfg_attr(feature = "persistence", serde(rename = "lt"))]
    LessThan,
    /// `lte`
    #[cfg_attr(feature = "persistence", serde(rename = "lte"))]
    LessThanOrEqualTo,
}

impl ComparisonOperator {
    /// Every operator, in declaration order.
    pub const ALL: [ComparisonOperator; 6] = [
        ComparisonOperator::Equals,
        ComparisonOperator::NotEquals,
        ComparisonOperator::GreaterThan,
        ComparisonOperator::GreaterThanOrEqualTo,
        ComparisonOperator::LessThan,
        ComparisonOperator::LessThanOrEqualTo,
    ];

    /// The operator's token.
    pub const fn token(self) -> &'static str {
        match self {
            ComparisonOperator::Equals => "eq",
            ComparisonOperator::NotEquals => "neq",
            ComparisonOperator::GreaterThan => "gt",
            ComparisonOperator::GreaterThanOrEqualTo => "gte",
            ComparisonOperator::LessThan => "lt",
            ComparisonOperator::LessThanOrEqualTo => "lte",
        }
    }

    /// Look up an operator by token.
    ///
    /// Surrounding whitespace is ignored; the match is otherwise exact and
    /// case-sensitive. Unknown tokens give `None`.
    ///
    /// ```rust
    /// use directory_rbac::ComparisonOperator;
    ///
    /// assert_eq!(ComparisonOperator::from_name(" gte "), Some(ComparisonOperator::GreaterThanOrEqualTo));
    /// assert_eq!(ComparisonOperator::from_name("GTE"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|op| op.token() == name)
    }

    /// Like [`from_name`](Self::from_name), for a value that may be absent.
    pub fn from_optional(name: Option<&str>) -> Option<Self> {
        name.and_then(Self::from_name)
    }
}

impl std::fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

impl std::str::FromStr for ComparisonOperator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| Error::UnknownOperator(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        for op in ComparisonOperator::ALL {
            assert_eq!(ComparisonOperator::from_name(&op.to_string()), Some(op));
        }
    }

    #[test]
    fn test_lookup_miss() {
        assert_eq!(ComparisonOperator::from_optional(None), None);
        assert_eq!(ComparisonOperator::from_name("bogus"), None);
        assert_eq!(ComparisonOperator::from_name(""), None);
        assert_eq!(ComparisonOperator::from_name("Equals"), None);
        assert_eq!(ComparisonOperator::from_name("EQ"), None);
    }

    #[test]
    fn test_display_is_token() {
        assert_eq!(ComparisonOperator::NotEquals.to_string(), "neq");
        assert_eq!(ComparisonOperator::LessThanOrEqualTo.to_string(), "lte");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("\tlt\n".parse::<ComparisonOperator>().unwrap(), ComparisonOperator::LessThan);
        assert!(matches!(
            "like".parse::<ComparisonOperator>(),
            Err(Error::UnknownOperator(_))
        ));
    }
}
