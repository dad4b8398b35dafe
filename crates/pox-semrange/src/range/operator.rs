//! Operator types for range comparators

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Comparison operators for a single range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal (=)
    Equal,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid operator \"{0}\", expected one of: {ops}", ops = Operator::supported_operators().join(", "))]
pub struct InvalidOperatorError(pub String);

impl Operator {
    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
        }
    }

    /// Get all supported operators
    pub fn supported_operators() -> &'static [&'static str] {
        &["=", "<", "<=", ">", ">="]
    }
}

impl FromStr for Operator {
    type Err = InvalidOperatorError;

    /// Parse operator from string, the empty operator means `=`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "=" => Ok(Operator::Equal),
            "<" => Ok(Operator::LessThan),
            "<=" => Ok(Operator::LessThanOrEqual),
            ">" => Ok(Operator::GreaterThan),
            ">=" => Ok(Operator::GreaterThanOrEqual),
            _ => Err(InvalidOperatorError(s.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("".parse::<Operator>().unwrap(), Operator::Equal);
        assert_eq!("=".parse::<Operator>().unwrap(), Operator::Equal);
        assert_eq!("<".parse::<Operator>().unwrap(), Operator::LessThan);
        assert_eq!("<=".parse::<Operator>().unwrap(), Operator::LessThanOrEqual);
        assert_eq!(">".parse::<Operator>().unwrap(), Operator::GreaterThan);
        assert_eq!(">=".parse::<Operator>().unwrap(), Operator::GreaterThanOrEqual);

        let err = "!=".parse::<Operator>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid operator \"!=\", expected one of: =, <, <=, >, >=");
        assert!("==".parse::<Operator>().is_err());
    }

    #[test]
    fn test_display() {
        for op in Operator::supported_operators() {
            assert_eq!(op.parse::<Operator>().unwrap().to_string(), *op);
        }
    }
}
