//! Small self-contained algorithms: descending sort, manual integer
//! rendering and statistical mode.

pub mod decimal;
pub mod mode;
pub mod sort;

pub use decimal::to_decimal_string;
pub use mode::mode;
pub use sort::{sort_descending, sorted_descending};
