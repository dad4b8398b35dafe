//! Partially specified versions as written in range expressions

use regex::{Captures, Match};

/// A version with possibly missing or wildcard components.
///
/// Once a component is missing, every component to its right is missing as well, so
/// `1.x.3` reads as `1.x.x`. A pre-release tag is only kept on a complete version.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(super) struct Partial {
    pub major: Option<u32>,
    pub minor: Option<u32>,
    pub patch: Option<u32>,
    pub pre_release: Option<String>,
}

impl Partial {
    /// Read a partial from four consecutive capture groups (major, minor, patch, pre-release)
    /// starting at `first`. Returns `None` when a component does not fit in 32 bits.
    pub fn from_captures(caps: &Captures, first: usize) -> Option<Self> {
        let major = component(caps.get(first))?;
        let minor = major.and(component(caps.get(first + 1))?);
        let patch = minor.and(component(caps.get(first + 2))?);
        let pre_release = patch.and(caps.get(first + 3)).map(|m| m.as_str().to_string());

        Some(Partial {
            major,
            minor,
            patch,
            pre_release,
        })
    }

    /// Check if every component is given
    pub fn is_complete(&self) -> bool {
        self.patch.is_some()
    }

    /// The smallest version matching this partial: missing components become zero
    pub fn floor(&self) -> String {
        let mut floor = format!(
            "{}.{}.{}",
            self.major.unwrap_or(0),
            self.minor.unwrap_or(0),
            self.patch.unwrap_or(0)
        );
        if let Some(pre) = &self.pre_release {
            floor.push('-');
            floor.push_str(pre);
        }
        floor
    }
}

fn component(m: Option<Match<'_>>) -> Option<Option<u32>> {
    match m.map(|m| m.as_str()) {
        None | Some("x" | "X" | "*" | "+") => Some(None),
        Some(digits) => digits.parse().ok().map(Some),
    }
}
