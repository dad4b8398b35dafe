//! Strict version parsing

use thiserror::Error;

use crate::grammar::VERSION_RE;
use crate::Version;

/// Error type for version parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionParserError {
    #[error("Invalid version string \"{0}\"")]
    MalformedVersion(String),
    #[error("Numeric value \"{0}\" exceeds the supported maximum of {max}", max = u32::MAX)]
    NumericOverflow(String),
}

/// Version parser turning strict SemVer 2.0.0 text into [`Version`] values
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionParser;

impl VersionParser {
    /// Create a new version parser
    pub fn new() -> Self {
        VersionParser
    }

    /// Check if a version string is valid
    pub fn is_valid(&self, version: &str) -> bool {
        self.parse(version).is_ok()
    }

    /// Parse a version string.
    ///
    /// Surrounding whitespace is ignored, a `v` prefix is not. Every numeric component is
    /// checked against the 32 bit range before it is stored, so oversized input is reported
    /// as [`VersionParserError::NumericOverflow`] instead of wrapping.
    pub fn parse(&self, version: &str) -> Result<Version, VersionParserError> {
        let version = version.trim();

        let caps = VERSION_RE
            .captures(version)
            .ok_or_else(|| VersionParserError::MalformedVersion(version.to_string()))?;

        let major = parse_numeric(&caps[1])?;
        let minor = parse_numeric(&caps[2])?;
        let patch = parse_numeric(&caps[3])?;

        let pre_release = match caps.get(4) {
            Some(pre) => {
                let identifiers = split_identifiers(pre.as_str());
                for identifier in &identifiers {
                    if identifier.bytes().all(|b| b.is_ascii_digit()) {
                        parse_numeric(identifier)?;
                    }
                }
                identifiers
            }
            None => Vec::new(),
        };

        let build = caps.get(5).map_or_else(Vec::new, |m| split_identifiers(m.as_str()));

        Ok(Version::from_parts(major, minor, patch, pre_release, build))
    }
}

/// Parse a digits-only token. The grammar guarantees the token shape, so any failure
/// reported by `u32::from_str` is an overflow.
pub(crate) fn parse_numeric(token: &str) -> Result<u32, VersionParserError> {
    token
        .parse::<u32>()
        .map_err(|_| VersionParserError::NumericOverflow(token.to_string()))
}

fn split_identifiers(input: &str) -> Vec<String> {
    input.split('.').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(version: &str) -> Result<Version, VersionParserError> {
        VersionParser::new().parse(version)
    }

    #[test]
    fn test_parse_versions() {
        let v = parse("1.2.3").unwrap();
        assert_eq!((v.major(), v.minor(), v.patch()), (1, 2, 3));
        assert!(v.pre_release().is_empty());
        assert!(v.build().is_empty());

        let v = parse("1.0.0-alpha.1+build.5.x-y").unwrap();
        assert_eq!(v.pre_release(), ["alpha", "1"]);
        assert_eq!(v.build(), ["build", "5", "x-y"]);

        let v = parse("0.0.0+001").unwrap();
        assert!(v.pre_release().is_empty());
        assert_eq!(v.build(), ["001"]);

        let v = parse("1.2.3-0a.--").unwrap();
        assert_eq!(v.pre_release(), ["0a", "--"]);

        // Space padding
        assert_eq!(parse(" 1.0.0").unwrap(), Version::new(1, 0, 0));
        assert_eq!(parse("1.0.0\t").unwrap(), Version::new(1, 0, 0));
        assert_eq!(parse("4294967295.0.0").unwrap().major(), u32::MAX);
    }

    #[test]
    fn test_parse_fails() {
        for version in [
            "",
            "a",
            "1",
            "1.2",
            "1.2.3.4",
            "v1.2.3",
            "=1.2.3",
            "01.2.3",
            "1.02.3",
            "1.2.03",
            "1.2.3-01",
            "1.2.3-",
            "1.2.3+",
            "1.2.3-alpha..1",
            "1.2.3-.alpha",
            "1.2.3-alpha.",
            "1.2.3+build..5",
            "1.2.3-alpha_1",
            "1.2.3+foo bar",
            "1.2.3 4",
            "-1.2.3",
            "1\u{663}.0.0",
            "1.0.0-\u{663}a",
            "1.0.0-1\u{663}",
            "1.0.0+b\u{663}",
        ] {
            assert_eq!(
                parse(version),
                Err(VersionParserError::MalformedVersion(version.trim().to_string())),
                "{version}"
            );
        }
    }

    #[test]
    fn test_parse_overflow() {
        assert_eq!(
            parse("99999999999999999999999.0.0"),
            Err(VersionParserError::NumericOverflow("99999999999999999999999".to_string()))
        );
        assert_eq!(
            parse("1.4294967296.0"),
            Err(VersionParserError::NumericOverflow("4294967296".to_string()))
        );
        assert_eq!(
            parse("1.0.0-alpha.4294967296"),
            Err(VersionParserError::NumericOverflow("4294967296".to_string()))
        );

        // Only fully numeric pre-release identifiers are range checked
        assert!(parse("1.0.0-alpha4294967296").is_ok());
        // Build metadata is never numeric
        assert!(parse("1.0.0+99999999999999999999").is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            parse("foo").unwrap_err().to_string(),
            "Invalid version string \"foo\""
        );
        assert_eq!(
            parse("5000000000.0.0").unwrap_err().to_string(),
            "Numeric value \"5000000000\" exceeds the supported maximum of 4294967295"
        );
    }

    #[test]
    fn test_is_valid() {
        let parser = VersionParser::new();
        assert!(parser.is_valid("1.0.0"));
        assert!(parser.is_valid("1.0.0-rc.1+sha.5114f85"));
        assert!(!parser.is_valid("1.0"));
        assert!(!parser.is_valid("latest"));
    }
}
