//! Error taxonomy for share decoding and secret reconstruction

use num_bigint::BigInt;
use thiserror::Error;

/// A share value or identifier that cannot be turned into a point
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("base {0} is not supported (expected 2..=36)")]
    InvalidBase(String),

    #[error("invalid digit '{digit}' at position {position} for base {base}")]
    InvalidDigit {
        digit: char,
        position: usize,
        base: u32,
    },

    #[error("share value is empty")]
    EmptyValue,

    #[error("share identifier '{0}' is not a non-negative integer")]
    InvalidIdentifier(String),
}

/// Failure of exact integer arithmetic during interpolation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("x-coordinate {0} appears more than once")]
    DuplicateX(BigInt),

    #[error("interpolated value {numerator}/{denominator} is not an integer")]
    InexactDivision {
        numerator: BigInt,
        denominator: BigInt,
    },
}

/// Reconstruction failure for a single input record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("failed to decode share '{id}'")]
    Decode {
        id: String,
        #[source]
        source: DecodeError,
    },

    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    #[error("insufficient shares: need {required}, but only {available} available")]
    InsufficientData { required: usize, available: usize },

    #[error("point set has {actual} points, threshold requires exactly {expected}")]
    ThresholdMismatch { expected: usize, actual: usize },
}
