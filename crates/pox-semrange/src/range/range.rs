//! Single comparator range

use std::fmt;

use super::Operator;
use crate::grammar::COMPARATOR_RE;
use crate::{Comparator, Version, VersionParser};

/// A single comparator (e.g., ">=1.0.0")
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Range {
    operator: Operator,
    version: Version,
}

impl Range {
    /// Create a new range
    pub fn new(operator: Operator, version: Version) -> Self {
        Range { operator, version }
    }

    /// Parse a canonical comparator token such as `>=1.2.3` or `1.2.3-beta`.
    ///
    /// Returns `None` for anything that is not an optional operator followed by a strict
    /// version, including versions whose components overflow.
    pub fn parse_token(token: &str) -> Option<Self> {
        let caps = COMPARATOR_RE.captures(token)?;
        let operator = caps.get(1).map_or("", |m| m.as_str()).parse().ok()?;

        match VersionParser::new().parse(&caps[2]) {
            Ok(version) => Some(Range::new(operator, version)),
            Err(err) => {
                log::trace!("Skipping comparator token \"{}\": {}", token, err);
                None
            }
        }
    }

    /// Get the operator
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Get the version
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Check if the given version satisfies this range. Build metadata is ignored.
    pub fn is_satisfied_by(&self, version: &Version) -> bool {
        Comparator::matches(version, self.operator, &self.version)
    }

    /// Check if this range accepts every release, which only `>=0.0.0` does
    pub fn is_satisfied_by_any(&self) -> bool {
        self.operator == Operator::GreaterThanOrEqual && self.version.is_equivalent_to(&Version::new(0, 0, 0))
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.version)
    }
}
