//! Semantic version parsing, precedence and range matching
//!
//! This crate parses strict SemVer 2.0.0 versions, orders them by precedence, and compiles
//! range expressions written in several syntaxes (npm comparators, caret, tilde, hyphen and
//! x-ranges, Ivy intervals) into a canonical OR-of-AND list of comparators.
//!
//! ```
//! use pox_semrange::{RangeList, Semver, Version};
//!
//! let range = RangeList::parse("^1.2.3 || >=3.0.0-rc.1 <3.1.0", false);
//! assert!(range.is_satisfied_by(&Version::parse("1.9.0").unwrap()));
//! assert!(!Semver::satisfies("2.0.0", "^1.2.3"));
//! ```

mod comparator;
mod grammar;
pub mod normalizer;
pub mod range;
mod range_compiler;
mod semver;
mod version;
mod version_parser;

pub use comparator::Comparator;
pub use normalizer::Normalizer;
pub use range::{InvalidOperatorError, Operator, Range, RangeList};
pub use range_compiler::RangeCompiler;
pub use semver::Semver;
pub use version::Version;
pub use version_parser::{VersionParser, VersionParserError};
