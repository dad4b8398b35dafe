//! Token grammar shared by the version parser and the range normalizers

use lazy_static::lazy_static;
use regex::Regex;

/// A numeric identifier without leading zeros
pub(crate) const NUMERIC_IDENTIFIER: &str = r"0|[1-9][0-9]*";

/// A single pre-release identifier: numeric, or alphanumeric with at least one non-digit
pub(crate) const PRE_RELEASE_IDENTIFIER: &str = r"0|[1-9][0-9]*|[0-9]*[A-Za-z-][0-9A-Za-z-]*";

/// A single build metadata identifier
pub(crate) const BUILD_IDENTIFIER: &str = r"[0-9A-Za-z-]+";

/// Component of a partial version: a number or one of the wildcard markers
pub(crate) const X_RANGE_IDENTIFIER: &str = r"0|[1-9][0-9]*|x|X|\*|\+";

/// Comparison operators accepted in front of a version
pub(crate) const OPERATOR: &str = r"<=|>=|<|>|=";

lazy_static! {
    static ref PRE_RELEASE: String = format!(
        r"(?:{pre})(?:\.(?:{pre}))*",
        pre = PRE_RELEASE_IDENTIFIER
    );

    static ref BUILD: String = format!(r"(?:{b})(?:\.(?:{b}))*", b = BUILD_IDENTIFIER);

    /// Strict `MAJOR.MINOR.PATCH[-PRE][+BUILD]` without anchors.
    /// Captures: major, minor, patch, pre-release, build.
    static ref VERSION: String = format!(
        r"({n})\.({n})\.({n})(?:-({pre}))?(?:\+({build}))?",
        n = NUMERIC_IDENTIFIER,
        pre = *PRE_RELEASE,
        build = *BUILD
    );

    /// Partial version as written in range expressions, optionally prefixed with `v` or `=`.
    /// Captures: major, minor, patch, pre-release. Build metadata is matched but not captured.
    static ref PARTIAL: String = format!(
        r"[v=]*({xr})(?:\.({xr})(?:\.({xr})(?:-({pre}))?(?:\+{build})?)?)?",
        xr = X_RANGE_IDENTIFIER,
        pre = *PRE_RELEASE,
        build = *BUILD
    );

    /// Partial version used inside Ivy intervals, missing components default to zero.
    static ref IVY_PARTIAL: &'static str = r"([0-9]+)(?:\.([0-9]+))?(?:\.([0-9]+))?";

    pub(crate) static ref VERSION_RE: Regex = Regex::new(&format!(r"^{}$", *VERSION)).unwrap();

    /// A canonical comparator token such as `>=1.2.3-beta`
    pub(crate) static ref COMPARATOR_RE: Regex =
        Regex::new(&format!(r"^({})?({})$", OPERATOR, *VERSION)).unwrap();

    pub(crate) static ref CARET_RE: Regex = Regex::new(&format!(r"^\^\s*{}$", *PARTIAL)).unwrap();

    pub(crate) static ref TILDE_RE: Regex = Regex::new(&format!(r"^~>?\s*{}$", *PARTIAL)).unwrap();

    /// Captures: operator, then the four partial groups
    pub(crate) static ref X_RANGE_RE: Regex =
        Regex::new(&format!(r"^({})?\s*{}$", OPERATOR, *PARTIAL)).unwrap();

    /// Captures: the four groups of the lower partial, then the four groups of the upper one
    pub(crate) static ref HYPHEN_RE: Regex =
        Regex::new(&format!(r"^\s*{}\s+-\s+{}\s*$", *PARTIAL, *PARTIAL)).unwrap();

    /// Captures: opening bracket, lower (3 groups), upper (3 groups), closing bracket
    pub(crate) static ref IVY_RE: Regex = Regex::new(&format!(
        r"^(\[|\]|\()\s*(?:{p})?\s*,\s*(?:{p})?\s*(\]|\[|\))$",
        p = *IVY_PARTIAL
    )).unwrap();

    /// Whitespace between an operator and the version it applies to
    pub(crate) static ref OPERATOR_WHITESPACE_RE: Regex =
        Regex::new(r"(<=|>=|<|>|=|\^|~>?)\s+").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_grammar() {
        assert!(VERSION_RE.is_match("0.0.0"));
        assert!(VERSION_RE.is_match("1.2.3-alpha.1+build.5"));
        assert!(VERSION_RE.is_match("1.2.3-0a.-x"));
        assert!(VERSION_RE.is_match("1.2.3+001"));

        assert!(!VERSION_RE.is_match("01.2.3"));
        assert!(!VERSION_RE.is_match("1.2"));
        assert!(!VERSION_RE.is_match("1.2.3.4"));
        assert!(!VERSION_RE.is_match("1.2.3-01"));
        assert!(!VERSION_RE.is_match("1.2.3-alpha..1"));
        assert!(!VERSION_RE.is_match("1.2.3-"));
        assert!(!VERSION_RE.is_match("1.2.3+"));
        assert!(!VERSION_RE.is_match("v1.2.3"));

        // Only ASCII digits count
        assert!(!VERSION_RE.is_match("1\u{663}.0.0"));
        assert!(!VERSION_RE.is_match("1.0.0-\u{663}a"));
        assert!(!VERSION_RE.is_match("1.0.0-1\u{663}"));
        assert!(!VERSION_RE.is_match("1.0.0+\u{663}"));
    }

    #[test]
    fn test_comparator_grammar() {
        let caps = COMPARATOR_RE.captures(">=1.2.3-beta").unwrap();
        assert_eq!(caps.get(1).unwrap().as_str(), ">=");
        assert_eq!(caps.get(2).unwrap().as_str(), "1.2.3-beta");

        let caps = COMPARATOR_RE.captures("1.2.3").unwrap();
        assert!(caps.get(1).is_none());

        assert!(!COMPARATOR_RE.is_match("=>1.2.3"));
        assert!(!COMPARATOR_RE.is_match(">=1.2"));
        assert!(!COMPARATOR_RE.is_match("^1.2.3"));
    }

    #[test]
    fn test_range_grammars() {
        assert!(CARET_RE.is_match("^1.2"));
        assert!(CARET_RE.is_match("^v1.2.3-beta+build"));
        assert!(TILDE_RE.is_match("~>1.2"));
        assert!(X_RANGE_RE.is_match(">=1.x"));
        assert!(X_RANGE_RE.is_match("1.2.+"));
        assert!(HYPHEN_RE.is_match("1.2.3 - 2.3"));
        assert!(!HYPHEN_RE.is_match("1.2.3-2.3"));
        assert!(IVY_RE.is_match("[1.0,2.0]"));
        assert!(IVY_RE.is_match("(,2.0["));
        assert!(IVY_RE.is_match("]1, )"));
        assert!(!IVY_RE.is_match("{1.0,2.0}"));
        assert!(!IVY_RE.is_match("[\u{661},2]"));
        assert!(!X_RANGE_RE.is_match("1.\u{663}"));
    }
}
