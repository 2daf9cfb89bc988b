use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwoSumError {
    #[error("No pair of values sums to {target}")]
    NoPairFound { target: i32 },
    #[error("Position {0} does not fit in an i32")]
    IndexOutOfRange(usize),
}

pub type Error = TwoSumError;
pub type Result<T> = std::result::Result<T, Error>;
