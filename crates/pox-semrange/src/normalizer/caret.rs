//! Caret ranges: `^1.2.3` allows changes that keep the left-most non-zero component

use super::partial::Partial;
use super::{any_version, exclusive_upper, join_bounds, next_major, next_minor, next_patch};
use crate::grammar::CARET_RE;

pub(super) fn normalize(term: &str, include_pre_release: bool) -> Option<String> {
    let caps = CARET_RE.captures(term)?;
    let partial = Partial::from_captures(&caps, 1)?;

    let Some(major) = partial.major else {
        return Some(any_version(include_pre_release));
    };

    let next = match (major, partial.minor, partial.patch) {
        (_, None, _) => next_major(major),
        (0, Some(minor), None) => next_minor(0, minor),
        (_, Some(_), None) => next_major(major),
        (0, Some(0), Some(patch)) => next_patch(0, 0, patch),
        (0, Some(minor), Some(_)) => next_minor(0, minor),
        _ => next_major(major),
    };

    Some(join_bounds(
        Some(format!(">={}", partial.floor())),
        exclusive_upper(next, include_pre_release),
        include_pre_release,
    ))
}
