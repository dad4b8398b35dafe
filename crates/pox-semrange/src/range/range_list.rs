//! RangeList - disjunction of conjunctive range groups

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use super::Range;
use crate::{RangeCompiler, Version};

/// Ranges combined as an OR of AND-groups.
///
/// A version satisfies the list when every range of at least one group holds. Unless
/// `include_pre_release` is set, a pre-release version is only visible to a group that
/// names a pre-release on the same major.minor.patch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RangeList {
    groups: Vec<Vec<Range>>,
    include_pre_release: bool,
}

impl RangeList {
    /// Create a range list from AND-groups. Empty groups are dropped.
    pub fn new(groups: Vec<Vec<Range>>, include_pre_release: bool) -> Self {
        RangeList {
            groups: groups.into_iter().filter(|group| !group.is_empty()).collect(),
            include_pre_release,
        }
    }

    /// Compile a range expression, see [`RangeCompiler::compile`]
    pub fn parse(range: &str, include_pre_release: bool) -> Self {
        RangeCompiler::compile(range, include_pre_release)
    }

    /// Get the AND-groups
    pub fn groups(&self) -> &[Vec<Range>] {
        &self.groups
    }

    /// Check if pre-releases are admitted without being named by a range
    pub fn include_pre_release(&self) -> bool {
        self.include_pre_release
    }

    /// Check if the list holds no group at all, in which case nothing satisfies it
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Check if the given version satisfies at least one group
    pub fn is_satisfied_by(&self, version: &Version) -> bool {
        self.groups
            .iter()
            .any(|group| self.is_group_satisfied_by(group, version))
    }

    /// Check if some group accepts every release
    pub fn is_satisfied_by_any(&self) -> bool {
        self.groups
            .iter()
            .any(|group| group.iter().all(Range::is_satisfied_by_any))
    }

    fn is_group_satisfied_by(&self, group: &[Range], version: &Version) -> bool {
        if !group.iter().all(|range| range.is_satisfied_by(version)) {
            return false;
        }

        if !version.is_pre_release() || self.include_pre_release {
            return true;
        }

        group.iter().any(|range| {
            let bound = range.version();
            bound.is_pre_release() && bound.same_release_line(version)
        })
    }
}

impl fmt::Display for RangeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                write!(f, " || ")?;
            }
            for (j, range) in group.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", range)?;
            }
        }
        Ok(())
    }
}

impl FromStr for RangeList {
    type Err = Infallible;

    /// Compile without admitting unnamed pre-releases
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(RangeCompiler::compile(s, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Operator;

    fn v(version: &str) -> Version {
        Version::parse(version).unwrap()
    }

    fn group(tokens: &[&str]) -> Vec<Range> {
        tokens.iter().map(|t| Range::parse_token(t).unwrap()).collect()
    }

    #[test]
    fn test_new_drops_empty_groups() {
        let list = RangeList::new(vec![vec![], group(&[">=1.0.0"]), vec![]], false);
        assert_eq!(list.groups().len(), 1);
        assert!(!list.is_empty());

        let empty = RangeList::new(vec![vec![]], false);
        assert!(empty.is_empty());
        assert!(!empty.is_satisfied_by(&v("1.0.0")));
    }

    #[test]
    fn test_and_or_semantics() {
        let list = RangeList::new(
            vec![group(&[">1.2.1", "<1.2.8"]), group(&[">2.0.0"])],
            false,
        );

        assert!(list.is_satisfied_by(&v("2.0.1")));
        assert!(list.is_satisfied_by(&v("1.2.2")));
        assert!(!list.is_satisfied_by(&v("1.2.8")));
        assert!(!list.is_satisfied_by(&v("2.0.0")));
    }

    #[test]
    fn test_pre_release_visibility() {
        let list = RangeList::new(vec![group(&[">=1.2.3-alpha", "<2.0.0"])], false);
        assert!(list.is_satisfied_by(&v("1.2.3-beta")));
        assert!(!list.is_satisfied_by(&v("1.2.4-beta")));
        assert!(list.is_satisfied_by(&v("1.2.4")));

        let including = RangeList::new(vec![group(&[">=1.2.3-alpha", "<2.0.0"])], true);
        assert!(including.is_satisfied_by(&v("1.2.4-beta")));

        // A pre-release bound in another group does not make the version visible
        let split = RangeList::new(vec![group(&["<1.0.0"]), group(&["=1.5.0-rc.1"])], false);
        assert!(!split.is_satisfied_by(&v("0.9.0-rc.1")));
        assert!(split.is_satisfied_by(&v("1.5.0-rc.1")));
    }

    #[test]
    fn test_is_satisfied_by_any() {
        assert!(RangeList::new(vec![group(&[">=0.0.0"])], false).is_satisfied_by_any());
        assert!(RangeList::new(vec![group(&["<1.0.0"]), group(&[">=0.0.0"])], false).is_satisfied_by_any());
        assert!(!RangeList::new(vec![group(&[">=0.0.0", "<1.0.0"])], false).is_satisfied_by_any());
        assert!(!RangeList::new(vec![], false).is_satisfied_by_any());
    }

    #[test]
    fn test_display() {
        let list = RangeList::new(
            vec![
                group(&[">=1.2.3", "<2.0.0"]),
                vec![Range::new(Operator::Equal, v("3.0.0-rc.1"))],
            ],
            false,
        );
        assert_eq!(list.to_string(), ">=1.2.3 <2.0.0 || =3.0.0-rc.1");
    }

    #[test]
    fn test_from_str() {
        let list: RangeList = "^1.2.3".parse().unwrap();
        assert!(!list.include_pre_release());
        assert!(list.is_satisfied_by(&v("1.9.0")));
        assert_eq!(list, RangeList::parse("^1.2.3", false));
    }
}
