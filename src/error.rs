use num_bigint::{BigInt, BigUint};

pub type Result<T> = std::result::Result<T, FibonacciError>;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FibonacciError {
    /// The seed is negative or fails the `5s² ± 4` perfect-square test.
    #[error("Invalid seed: {0} is not a nonnegative Fibonacci number")]
    InvalidSeed(BigInt),
    #[error("Invalid length: sequence length must be nonzero")]
    InvalidLength,
    #[error("Invalid position: {0} (positions start at 1)")]
    InvalidPosition(i64),
    /// Summaries need a finite sequence.
    #[error("Undefined length: an unbounded sequence has no summary")]
    UndefinedLength,
    #[error("Invalid precision: {0} fractional digits (must be at least 1)")]
    InvalidPrecision(u32),
    #[error("Precision exhausted at position {position}: expected {expected}, closed form gave {computed}")]
    PrecisionExhausted {
        position: u64,
        expected: BigUint,
        computed: BigInt,
    },
}
