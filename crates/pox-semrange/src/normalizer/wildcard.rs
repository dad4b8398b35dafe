//! Wildcard clauses: `*` or nothing at all

use super::any_version;

pub(super) fn normalize(clause: &str, include_pre_release: bool) -> Option<String> {
    match clause.trim() {
        "" | "*" => Some(any_version(include_pre_release)),
        _ => None,
    }
}
