//! Semver facade providing high-level version operations on plain strings

use std::cmp::Ordering;

use crate::{Comparator, RangeCompiler, RangeList, Version, VersionParser};

/// Main facade for semantic versioning operations.
///
/// Every method takes untrusted text: versions that fail to parse never satisfy a range and
/// are left out of sorted or filtered results.
pub struct Semver;

impl Semver {
    /// Check if a version satisfies a range
    pub fn satisfies(version: &str, range: &str) -> bool {
        Self::satisfies_with_pre_release(version, range, false)
    }

    /// Check if a version satisfies a range, optionally admitting pre-releases the range
    /// does not name
    pub fn satisfies_with_pre_release(version: &str, range: &str, include_pre_release: bool) -> bool {
        let range = RangeCompiler::compile(range, include_pre_release);
        Self::satisfies_parsed(version, &range)
    }

    /// Return all versions that satisfy the given range, in input order
    pub fn satisfied_by(versions: &[&str], range: &str) -> Vec<String> {
        let range = RangeCompiler::compile(range, false);

        versions
            .iter()
            .filter(|version| Self::satisfies_parsed(version, &range))
            .map(|version| version.to_string())
            .collect()
    }

    /// Return the highest version satisfying the range
    pub fn max_satisfying(versions: &[&str], range: &str) -> Option<String> {
        Self::best_satisfying(versions, range, Ordering::Greater)
    }

    /// Return the lowest version satisfying the range
    pub fn min_satisfying(versions: &[&str], range: &str) -> Option<String> {
        Self::best_satisfying(versions, range, Ordering::Less)
    }

    /// Compile a range once for repeated checks with [`Semver::satisfies_parsed`]
    pub fn parse_range(range: &str, include_pre_release: bool) -> RangeList {
        RangeCompiler::compile(range, include_pre_release)
    }

    /// Check a version against a compiled range
    pub fn satisfies_parsed(version: &str, range: &RangeList) -> bool {
        match Version::parse(version) {
            Ok(version) => range.is_satisfied_by(&version),
            Err(_) => false,
        }
    }

    /// Check if a version string is valid
    pub fn is_valid(version: &str) -> bool {
        VersionParser::new().is_valid(version)
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn best_satisfying(versions: &[&str], range: &str, preferred: Ordering) -> Option<String> {
        let range = RangeCompiler::compile(range, false);
        let mut best: Option<(Version, &str)> = None;

        for &text in versions {
            let Ok(version) = Version::parse(text) else {
                continue;
            };
            if !range.is_satisfied_by(&version) {
                continue;
            }

            let better = match &best {
                Some((current, _)) => Comparator::compare(&version, current) == preferred,
                None => true,
            };
            if better {
                best = Some((version, text));
            }
        }

        best.map(|(_, text)| text.to_string())
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        // Parsed versions with their original index
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| Some((Version::parse(v).ok()?, i)))
            .collect();

        // Stable, so equivalent versions keep their input order
        parsed.sort_by(|(a, _), (b, _)| {
            let cmp = Comparator::compare(a, b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}
