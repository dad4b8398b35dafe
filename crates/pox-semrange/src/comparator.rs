//! Version precedence

use std::cmp::Ordering;

use crate::{Operator, Version};

/// Comparator ordering versions by SemVer precedence
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &Version, version2: &Version) -> bool {
        Self::matches(version1, Operator::GreaterThan, version2)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::matches(version1, Operator::GreaterThanOrEqual, version2)
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &Version, version2: &Version) -> bool {
        Self::matches(version1, Operator::LessThan, version2)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::matches(version1, Operator::LessThanOrEqual, version2)
    }

    /// Check if version1 and version2 have the same precedence
    pub fn equal_to(version1: &Version, version2: &Version) -> bool {
        Self::matches(version1, Operator::Equal, version2)
    }

    /// Check if version1 and version2 differ in precedence
    pub fn not_equal_to(version1: &Version, version2: &Version) -> bool {
        !Self::equal_to(version1, version2)
    }

    /// Compare version1 to version2 using the given operator
    pub fn matches(version1: &Version, operator: Operator, version2: &Version) -> bool {
        let ordering = Self::compare(version1, version2);
        match operator {
            Operator::Equal => ordering == Ordering::Equal,
            Operator::LessThan => ordering == Ordering::Less,
            Operator::LessThanOrEqual => ordering != Ordering::Greater,
            Operator::GreaterThan => ordering == Ordering::Greater,
            Operator::GreaterThanOrEqual => ordering != Ordering::Less,
        }
    }

    /// Total order over versions by precedence. Build metadata never takes part.
    pub fn compare(a: &Version, b: &Version) -> Ordering {
        a.major()
            .cmp(&b.major())
            .then_with(|| a.minor().cmp(&b.minor()))
            .then_with(|| a.patch().cmp(&b.patch()))
            .then_with(|| compare_pre_release(a.pre_release(), b.pre_release()))
    }
}

fn compare_pre_release(a: &[String], b: &[String]) -> Ordering {
    // A release sorts above any of its pre-releases
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }

    for (left, right) in a.iter().zip(b) {
        if left == right {
            continue;
        }
        let ordering = compare_identifier(left, right);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    a.len().cmp(&b.len())
}

fn compare_identifier(a: &str, b: &str) -> Ordering {
    match (is_numeric(a), is_numeric(b)) {
        (true, true) => compare_digits(a, b),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => {
            if has_digit(a) && has_digit(b) {
                if let Some(ordering) = compare_natural(a, b) {
                    return ordering;
                }
            }
            a.cmp(b)
        }
    }
}

/// Natural ordering for alphanumeric identifiers: `macro2 < macro10`.
///
/// This goes beyond SemVer 2.0.0 §11, which orders such identifiers purely by ASCII.
/// Returns `None` when the identifiers should fall back to ASCII ordering.
fn compare_natural(a: &str, b: &str) -> Option<Ordering> {
    let (a_prefix, a_rest) = split_at_first_digit(a);
    let (b_prefix, b_rest) = split_at_first_digit(b);
    if a_prefix != b_prefix {
        return None;
    }

    let (a_digits, a_tail) = split_digit_run(a_rest);
    let (b_digits, b_tail) = split_digit_run(b_rest);

    match compare_digits(a_digits, b_digits) {
        Ordering::Equal => {}
        ordering => return Some(ordering),
    }

    // Same number, possibly spelled with different leading zeros: keep going on the tails
    let ordering = if has_digit(a_tail) && has_digit(b_tail) {
        compare_natural(a_tail, b_tail).unwrap_or_else(|| a_tail.cmp(b_tail))
    } else {
        a_tail.cmp(b_tail)
    };

    match ordering {
        Ordering::Equal => None,
        ordering => Some(ordering),
    }
}

fn split_at_first_digit(s: &str) -> (&str, &str) {
    let index = s.find(|c: char| c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(index)
}

fn split_digit_run(s: &str) -> (&str, &str) {
    let index = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(index)
}

/// Compare two digit strings numerically without narrowing them to a fixed width
fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn has_digit(s: &str) -> bool {
    s.bytes().any(|b| b.is_ascii_digit())
}
