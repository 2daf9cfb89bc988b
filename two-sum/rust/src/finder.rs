use std::{
    collections::HashMap,
    fmt::{self, Display, Formatter},
};

use tracing::{debug, trace};

use crate::error::{Error, Result};

/// Two positions into the input whose values sum to the target.
/// Always ordered, `low() <= high()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair {
    low: usize,
    high: usize,
}

impl Pair {
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    pub fn low(&self) -> usize {
        self.low
    }

    pub fn high(&self) -> usize {
        self.high
    }
}

impl Display for Pair {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.low, self.high)
    }
}

impl From<Pair> for [usize; 2] {
    fn from(pair: Pair) -> Self {
        [pair.low, pair.high]
    }
}

impl From<Pair> for (usize, usize) {
    fn from(pair: Pair) -> Self {
        (pair.low, pair.high)
    }
}

/// Finds two positions in `values` whose values add up to `target`, in a single pass.
/// Can return either of
/// * `Result::Ok(Pair)` for the first position that has an earlier complement,
///   paired with the complement's first position
/// * `Result::Err(Error::NoPairFound)` if the scan finishes without a match
///
/// ```
/// use two_sum::find_pair;
/// use std::result::Result;
/// use std::error::Error;
///
/// fn main() -> Result<(), Box<dyn Error>> {
///     let pair = find_pair(&[2, 7, 11, 15], 9)?;
///
///     assert_eq!((0, 1), <(usize, usize)>::from(pair));
///     assert_eq!("[0,1]", pair.to_string());
///     Ok(())
/// }
/// ```
pub fn find_pair(values: &[i32], target: i32) -> Result<Pair> {
    let mut position_by_value: HashMap<i32, usize> = HashMap::with_capacity(values.len());

    for (i, &n) in values.iter().enumerate() {
        // An overflowing complement can't be any i32 we've seen
        if let Some(diff) = target.checked_sub(n) {
            if let Some(&j) = position_by_value.get(&diff) {
                let pair = Pair::new(i, j);
                trace!(target, %pair, "found pair");
                return Ok(pair);
            }
        }

        position_by_value.entry(n).or_insert(i);
    }

    debug!(target, len = values.len(), "no pair found");
    Err(Error::NoPairFound { target })
}
