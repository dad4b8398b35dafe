//! Range types for version matching

mod operator;
#[allow(clippy::module_inception)]
mod range;
mod range_list;

pub use operator::{InvalidOperatorError, Operator};
pub use range::Range;
pub use range_list::RangeList;
