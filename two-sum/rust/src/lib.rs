pub mod error;
pub mod finder;
pub mod solution;

pub use error::{Error, Result, TwoSumError};
pub use finder::{find_pair, Pair};
pub use solution::Solution;
