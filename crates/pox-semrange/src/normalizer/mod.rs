//! Range syntax normalizers
//!
//! Each normalizer rewrites one syntax (caret, tilde, hyphen, x-range, Ivy interval or
//! wildcard) into canonical comparator tokens separated by spaces, e.g. `^1.2.3` becomes
//! `>=1.2.3 <2.0.0`. A normalizer returns `None` when the input is not written in its
//! syntax.

mod caret;
mod hyphen;
mod ivy;
mod partial;
mod tilde;
mod wildcard;
mod x_range;

use crate::Version;

/// Range syntaxes understood by the compiler, in dispatch priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Normalizer {
    /// `*` or an empty clause
    Wildcard,
    /// `[1.0,2.0[`, `(,2.0]`, `latest`, ...
    Ivy,
    /// `1.2.3 - 2.3.4`
    Hyphen,
    /// `^1.2.3`
    Caret,
    /// `~1.2.3`, `~>1.2`
    Tilde,
    /// `1.2.x`, `>=1.*`, `2`
    XRange,
}

impl Normalizer {
    /// Normalizers matching a whole OR-clause
    pub const CLAUSE: [Normalizer; 3] = [Normalizer::Wildcard, Normalizer::Ivy, Normalizer::Hyphen];

    /// Normalizers matching a single space separated term of a clause
    pub const TERM: [Normalizer; 3] = [Normalizer::Caret, Normalizer::Tilde, Normalizer::XRange];

    /// Short name used in log output
    pub fn name(&self) -> &'static str {
        match self {
            Normalizer::Wildcard => "wildcard",
            Normalizer::Ivy => "ivy",
            Normalizer::Hyphen => "hyphen",
            Normalizer::Caret => "caret",
            Normalizer::Tilde => "tilde",
            Normalizer::XRange => "x-range",
        }
    }

    /// Rewrite `input` into canonical comparator tokens, or `None` if it is not in this syntax
    pub fn normalize(&self, input: &str, include_pre_release: bool) -> Option<String> {
        match self {
            Normalizer::Wildcard => wildcard::normalize(input, include_pre_release),
            Normalizer::Ivy => ivy::normalize(input, include_pre_release),
            Normalizer::Hyphen => hyphen::normalize(input, include_pre_release),
            Normalizer::Caret => caret::normalize(input, include_pre_release),
            Normalizer::Tilde => tilde::normalize(input, include_pre_release),
            Normalizer::XRange => x_range::normalize(input, include_pre_release),
        }
    }

    /// Rewrite one OR-clause into canonical form.
    ///
    /// The clause-wide syntaxes are tried first; otherwise every term is rewritten by the
    /// first term syntax accepting it. Terms nobody accepts are kept as written.
    pub fn normalize_clause(clause: &str, include_pre_release: bool) -> String {
        if let Some(normalized) = first_match(&Self::CLAUSE, clause, include_pre_release) {
            return normalized;
        }

        clause
            .split_whitespace()
            .map(|term| first_match(&Self::TERM, term, include_pre_release).unwrap_or_else(|| term.to_string()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn first_match(normalizers: &[Normalizer], input: &str, include_pre_release: bool) -> Option<String> {
    normalizers.iter().find_map(|normalizer| {
        let normalized = normalizer.normalize(input, include_pre_release)?;
        log::trace!("{} normalizer rewrote \"{}\" to \"{}\"", normalizer.name(), input, normalized);
        Some(normalized)
    })
}

/// Suffix marking the lowest pre-release of a version
const LOWEST_PRE_RELEASE: &str = "-0";

/// Suffix appended to synthesized exclusive upper bounds
fn upper_suffix(include_pre_release: bool) -> &'static str {
    if include_pre_release {
        LOWEST_PRE_RELEASE
    } else {
        ""
    }
}

/// The canonical form of "every version"
fn any_version(include_pre_release: bool) -> String {
    format!(">=0.0.0{}", upper_suffix(include_pre_release))
}

/// The canonical form of "no version at all"
fn no_version(include_pre_release: bool) -> String {
    format!("<0.0.0{}", upper_suffix(include_pre_release))
}

fn next_major(major: u32) -> Option<Version> {
    Some(Version::new(major.checked_add(1)?, 0, 0))
}

fn next_minor(major: u32, minor: u32) -> Option<Version> {
    Some(Version::new(major, minor.checked_add(1)?, 0))
}

fn next_patch(major: u32, minor: u32, patch: u32) -> Option<Version> {
    Some(Version::new(major, minor, patch.checked_add(1)?))
}

/// `<next` for the start of the next release line. `None` when the line has no successor.
fn exclusive_upper(next: Option<Version>, include_pre_release: bool) -> Option<String> {
    next.map(|next| format!("<{}{}", next, upper_suffix(include_pre_release)))
}

fn join_bounds(lower: Option<String>, upper: Option<String>, include_pre_release: bool) -> String {
    match (lower, upper) {
        (Some(lower), Some(upper)) => format!("{} {}", lower, upper),
        (Some(bound), None) | (None, Some(bound)) => bound,
        (None, None) => any_version(include_pre_release),
    }
}
