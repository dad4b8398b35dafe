//! Hyphen ranges: `1.2.3 - 2.3.4`

use super::partial::Partial;
use super::{exclusive_upper, join_bounds, next_major, next_minor};
use crate::grammar::HYPHEN_RE;

pub(super) fn normalize(clause: &str, include_pre_release: bool) -> Option<String> {
    let caps = HYPHEN_RE.captures(clause)?;
    let from = Partial::from_captures(&caps, 1)?;
    let to = Partial::from_captures(&caps, 5)?;

    let lower = from.major.map(|_| format!(">={}", from.floor()));

    // A partial upper bound covers its whole release line
    let upper = match (to.major, to.minor, to.patch) {
        (None, _, _) => None,
        (Some(major), None, _) => exclusive_upper(next_major(major), include_pre_release),
        (Some(major), Some(minor), None) => exclusive_upper(next_minor(major, minor), include_pre_release),
        (Some(_), Some(_), Some(_)) => Some(format!("<={}", to.floor())),
    };

    Some(join_bounds(lower, upper, include_pre_release))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_versions() {
        assert_eq!(normalize("1.2.3 - 2.3.4", false).unwrap(), ">=1.2.3 <=2.3.4");
        assert_eq!(normalize("1.2.3 - 2.3.4", true).unwrap(), ">=1.2.3 <=2.3.4");
        assert_eq!(normalize("v1.2.3 - v2.3.4", false).unwrap(), ">=1.2.3 <=2.3.4");
        assert_eq!(normalize("1.2.3+asdf - 2.4.3+asdf", false).unwrap(), ">=1.2.3 <=2.4.3");
        assert_eq!(normalize("  1.0.0   -   2.0.0 ", false).unwrap(), ">=1.0.0 <=2.0.0");
    }

    #[test]
    fn test_partial_versions() {
        assert_eq!(normalize("1.2 - 2.3.4", false).unwrap(), ">=1.2.0 <=2.3.4");
        assert_eq!(normalize("1.2.3 - 2.3", false).unwrap(), ">=1.2.3 <2.4.0");
        assert_eq!(normalize("1.2.3 - 2", false).unwrap(), ">=1.2.3 <3.0.0");
        assert_eq!(normalize("1.2.3 - 2", true).unwrap(), ">=1.2.3 <3.0.0-0");
        assert_eq!(normalize("1 - 2.x", false).unwrap(), ">=1.0.0 <3.0.0");
        assert_eq!(normalize("* - 2.0.0", false).unwrap(), "<=2.0.0");
        assert_eq!(normalize("1.0.0 - *", false).unwrap(), ">=1.0.0");
        assert_eq!(normalize("x - x", true).unwrap(), ">=0.0.0-0");
    }

    #[test]
    fn test_pre_release_bounds() {
        assert_eq!(normalize("1.2.3-alpha - 2.3.4-beta", false).unwrap(), ">=1.2.3-alpha <=2.3.4-beta");
        assert_eq!(normalize("1.2.3-alpha - 2.3.4-beta", true).unwrap(), ">=1.2.3-alpha <=2.3.4-beta");
    }

    #[test]
    fn test_declines() {
        assert_eq!(normalize("1.2.3-2.3.4", false), None);
        assert_eq!(normalize("1.2.3 -2.3.4", false), None);
        assert_eq!(normalize("^1.2.3 - 2.3.4", false), None);
        assert_eq!(normalize("1.2.3", false), None);
        assert_eq!(normalize("1.2.3 - 5000000000", false), None);
    }
}
