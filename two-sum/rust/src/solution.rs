use crate::{
    error::{Error, Result},
    finder::find_pair,
};

pub struct Solution;

impl Solution {
    /// `int[] twoSum(int[] nums, int target)`, with the missing-pair case surfaced as an error.
    pub fn two_sum(nums: Vec<i32>, target: i32) -> Result<Vec<i32>> {
        let pair = find_pair(&nums, target)?;

        let low = i32::try_from(pair.low()).map_err(|_| Error::IndexOutOfRange(pair.low()))?;
        let high = i32::try_from(pair.high()).map_err(|_| Error::IndexOutOfRange(pair.high()))?;

        Ok(vec![low, high])
    }
}
