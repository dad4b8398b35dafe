//! Tilde ranges: `~1.2.3` allows patch level changes

use super::partial::Partial;
use super::{any_version, exclusive_upper, join_bounds, next_major, next_minor};
use crate::grammar::TILDE_RE;

pub(super) fn normalize(term: &str, include_pre_release: bool) -> Option<String> {
    let caps = TILDE_RE.captures(term)?;
    let partial = Partial::from_captures(&caps, 1)?;

    let Some(major) = partial.major else {
        return Some(any_version(include_pre_release));
    };

    let next = match partial.minor {
        None => next_major(major),
        Some(minor) => next_minor(major, minor),
    };

    Some(join_bounds(
        Some(format!(">={}", partial.floor())),
        exclusive_upper(next, include_pre_release),
        include_pre_release,
    ))
}
