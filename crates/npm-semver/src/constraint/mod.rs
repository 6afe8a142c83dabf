//! Comparators, ranges and the operations between them

mod comparator;
mod operator;
pub(crate) mod range;
mod subset;

pub use comparator::Comparator;
pub use operator::Operator;
pub use range::Range;
pub use subset::subset;
