//! Parsed semantic version

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::{Comparator, RangeCompiler, VersionParser, VersionParserError};

/// A strictly parsed SemVer 2.0.0 version.
///
/// Equality (`==`) is exact and includes build metadata. Precedence, which ignores build
/// metadata, is available through [`Version::cmp_precedence`] and [`Comparator`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: u32,
    minor: u32,
    patch: u32,
    pre_release: Vec<String>,
    build: Vec<String>,
}

impl Version {
    /// Create a release version without pre-release or build identifiers
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self::from_parts(major, minor, patch, Vec::new(), Vec::new())
    }

    /// Parse a version string, see [`VersionParser::parse`]
    pub fn parse(version: &str) -> Result<Self, VersionParserError> {
        VersionParser::new().parse(version)
    }

    pub(crate) fn from_parts(
        major: u32,
        minor: u32,
        patch: u32,
        pre_release: Vec<String>,
        build: Vec<String>,
    ) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release,
            build,
        }
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn patch(&self) -> u32 {
        self.patch
    }

    /// Pre-release identifiers, empty for a release version
    pub fn pre_release(&self) -> &[String] {
        &self.pre_release
    }

    /// Build metadata identifiers
    pub fn build(&self) -> &[String] {
        &self.build
    }

    /// Check if this version carries a pre-release tag
    pub fn is_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// A stable version has a non-zero major and no pre-release tag
    pub fn is_stable(&self) -> bool {
        self.major > 0 && self.pre_release.is_empty()
    }

    /// Check if both versions share major, minor and patch
    pub fn same_release_line(&self, other: &Version) -> bool {
        self.major == other.major && self.minor == other.minor && self.patch == other.patch
    }

    /// Check if both versions have the same precedence (build metadata is ignored)
    pub fn is_equivalent_to(&self, other: &Version) -> bool {
        self.cmp_precedence(other) == Ordering::Equal
    }

    /// Compare by SemVer precedence
    pub fn cmp_precedence(&self, other: &Version) -> Ordering {
        Comparator::compare(self, other)
    }

    /// Check if this version satisfies a range expression
    pub fn satisfies(&self, range: &str) -> bool {
        self.satisfies_with_pre_release(range, false)
    }

    /// Check if this version satisfies a range expression, optionally admitting
    /// pre-releases the range does not name explicitly
    pub fn satisfies_with_pre_release(&self, range: &str, include_pre_release: bool) -> bool {
        RangeCompiler::compile(range, include_pre_release).is_satisfied_by(self)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre_release.is_empty() {
            write!(f, "-{}", self.pre_release.join("."))?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build.join("."))?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = VersionParserError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Version::parse(value)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Version {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        Version::parse(&text).map_err(serde::de::Error::custom)
    }
}
