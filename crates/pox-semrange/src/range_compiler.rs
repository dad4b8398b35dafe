//! Range expression compiler
//!
//! Turns free-form range text (`^1.2 || >=2.0.0 <3.0.0-0`, `[1.0,2.0[`, `1.x`, ...) into a
//! [`RangeList`] of canonical comparators. Compilation never fails: clauses and tokens that
//! cannot be understood are skipped, so the worst case is a list that nothing satisfies.

use crate::grammar::OPERATOR_WHITESPACE_RE;
use crate::{Normalizer, Range, RangeList};

/// Compiles range expressions into [`RangeList`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeCompiler;

impl RangeCompiler {
    /// Compile a range expression.
    ///
    /// The text is split on `||` into OR-clauses. Each clause is normalized into canonical
    /// comparator tokens, and every token is turned into a [`Range`]. Clauses left without
    /// any range are dropped. With `include_pre_release` set, pre-release versions are
    /// admitted by the compiled ranges whether or not a range names them.
    pub fn compile(range: &str, include_pre_release: bool) -> RangeList {
        let groups = range
            .trim()
            .split("||")
            .filter_map(|clause| Self::compile_clause(clause, include_pre_release))
            .collect();

        let list = RangeList::new(groups, include_pre_release);
        log::debug!("Compiled range \"{}\" to \"{}\"", range, list);
        list
    }

    fn compile_clause(clause: &str, include_pre_release: bool) -> Option<Vec<Range>> {
        let clause = OPERATOR_WHITESPACE_RE.replace_all(clause.trim(), "$1");
        let normalized = Normalizer::normalize_clause(&clause, include_pre_release);

        let group: Vec<Range> = normalized
            .split_whitespace()
            .filter_map(|token| {
                let range = Range::parse_token(token);
                if range.is_none() {
                    log::trace!("Ignoring unrecognized range token \"{}\"", token);
                }
                range
            })
            .collect();

        if group.is_empty() {
            log::trace!("Dropping range clause \"{}\": no comparator left", clause);
            return None;
        }

        Some(group)
    }
}
