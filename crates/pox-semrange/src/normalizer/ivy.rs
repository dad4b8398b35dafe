//! Ivy interval ranges
//!
//! `[` opening and `]` closing are inclusive, `]` opening and `[` closing are exclusive,
//! `(` and `)` leave the side unbounded: `[1.0,2.0[` is `>=1.0.0 <2.0.0` and `(,2.0]` is
//! `<=2.0.0`. Missing components of a bound default to zero.

use regex::Captures;

use super::{any_version, join_bounds};
use crate::grammar::IVY_RE;
use crate::version_parser::parse_numeric;
use crate::Version;

const LATEST: &str = "latest";
const LATEST_INTEGRATION: &str = "latest.integration";

pub(super) fn normalize(clause: &str, include_pre_release: bool) -> Option<String> {
    let clause = clause.trim();
    if clause == LATEST || clause == LATEST_INTEGRATION {
        return Some(any_version(include_pre_release));
    }

    let caps = IVY_RE.captures(clause)?;
    let lower = bound(&caps, 2)?;
    let upper = bound(&caps, 5)?;

    let lower = match (&caps[1], lower) {
        (_, None) => None,
        ("[", Some(version)) => Some(format!(">={}", version)),
        ("]", Some(version)) => Some(format!(">{}", version)),
        _ => return None,
    };

    let upper = match (&caps[8], upper) {
        (_, None) => None,
        ("]", Some(version)) => Some(format!("<={}", version)),
        ("[", Some(version)) => Some(format!("<{}", version)),
        _ => return None,
    };

    Some(join_bounds(lower, upper, include_pre_release))
}

/// Read one side of the interval. `Some(None)` is an empty side, `None` an oversized number.
fn bound(caps: &Captures, first: usize) -> Option<Option<Version>> {
    let Some(major) = caps.get(first) else {
        return Some(None);
    };

    let number = |index: usize| match caps.get(index) {
        Some(m) => parse_numeric(m.as_str()).ok(),
        None => Some(0),
    };

    let major = parse_numeric(major.as_str()).ok()?;
    Some(Some(Version::new(major, number(first + 1)?, number(first + 2)?)))
}
