//! X-ranges: `1.2.x`, `1.*`, `>=2.X`, `<=1.2.+` and bare partial versions such as `1.2`

use super::partial::Partial;
use super::{any_version, exclusive_upper, join_bounds, next_major, next_minor, no_version, upper_suffix};
use crate::grammar::{COMPARATOR_RE, X_RANGE_RE};
use crate::{Operator, Version};

pub(super) fn normalize(term: &str, include_pre_release: bool) -> Option<String> {
    // Canonical tokens stay exactly as written
    if COMPARATOR_RE.is_match(term) {
        return None;
    }

    let caps = X_RANGE_RE.captures(term)?;
    let written_operator = caps.get(1).map_or("", |m| m.as_str());
    let operator: Operator = written_operator.parse().ok()?;
    let partial = Partial::from_captures(&caps, 2)?;

    if partial.is_complete() {
        return Some(format!("{}{}", written_operator, partial.floor()));
    }

    let Some(major) = partial.major else {
        return Some(match operator {
            Operator::LessThan | Operator::GreaterThan => no_version(include_pre_release),
            _ => any_version(include_pre_release),
        });
    };

    let floor = Version::new(major, partial.minor.unwrap_or(0), 0);
    let next = match partial.minor {
        None => next_major(major),
        Some(minor) => next_minor(major, minor),
    };

    Some(match operator {
        Operator::Equal => join_bounds(
            Some(format!(">={}", floor)),
            exclusive_upper(next, include_pre_release),
            include_pre_release,
        ),
        Operator::GreaterThanOrEqual => format!(">={}", floor),
        Operator::LessThan => format!("<{}{}", floor, upper_suffix(include_pre_release)),
        // Strictly above the release line: everything from the next line on
        Operator::GreaterThan => match next {
            Some(next) => format!(">={}", next),
            None => no_version(include_pre_release),
        },
        // Up to and including the release line: everything below the next line
        Operator::LessThanOrEqual => {
            exclusive_upper(next, include_pre_release).unwrap_or_else(|| any_version(include_pre_release))
        }
    })
}
