use crate::vector::Vector;

/// Failures when decoding a [`Vector`] from its `x,y,z` text form.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    #[error("Expected 3 comma separated components, found {0}")]
    FieldCount(usize),
    #[error("Invalid vector component: {0:?}")]
    InvalidComponent(String),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("Invalid order: {0:?}. Must be a permutation of \"xyz\"")]
    InvalidOrder(String),
    #[error("Step must be non-zero on every axis. Got ({0})")]
    ZeroStep(Vector),
    #[error("Range has more elements than can be indexed")]
    TooLarge,
    #[error("Index {index} out of range for length {len}")]
    OutOfBounds { index: isize, len: usize },
    #[error("({0}) is not in range")]
    NotFound(Vector),
    #[error("Slice step cannot be zero")]
    SliceStepZero,
    #[error("Window [{first}; {len}] doesn't fit a range of length {range_len}")]
    WindowOutOfBounds {
        first: i64,
        len: usize,
        range_len: usize,
    },
    #[error("Invalid denominator: {0}")]
    InvalidDenominator(i64),
}
