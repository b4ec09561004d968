//! # Error reporting for fractions
//!
//! A collection of enums describing the problems encountered when creating fractions, when
//! dividing by them and when approximating floats by them.
use std::error::Error;
use std::fmt;

/// A `FractionError` is created when an operation would leave a fraction with a zero denominator,
/// or when a float operand could not be converted into a fraction.
///
/// It is the highest error in the hierarchy.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum FractionError {
    /// A fraction was created, or its denominator was set, with a zero denominator.
    ZeroDenominator,
    /// The divisor of a division, or the argument of a reciprocal, was zero.
    DivisionByZero,
    /// A float could not be approximated by a fraction.
    Conversion(ConversionError),
}

impl fmt::Display for FractionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FractionError::ZeroDenominator => f.write_str("denominator must be unequal to zero"),
            FractionError::DivisionByZero => f.write_str("division by zero"),
            FractionError::Conversion(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl Error for FractionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FractionError::ZeroDenominator | FractionError::DivisionByZero => None,
            FractionError::Conversion(error) => Some(error),
        }
    }
}

impl From<ConversionError> for FractionError {
    fn from(error: ConversionError) -> Self {
        FractionError::Conversion(error)
    }
}

/// A `ConversionError` describes why a float couldn't be approximated by a fraction.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ConversionError {
    /// The requested relative tolerance was not strictly positive.
    InvalidTolerance,
    /// The value to approximate was NaN or infinite.
    NotFinite,
    /// No convergent of the continued fraction expansion was within tolerance.
    NotConverged {
        /// Number of convergents that were computed before giving up.
        iterations: u32,
    },
    /// The convergent found doesn't fit in the integer type of the fraction.
    ///
    /// This includes negative values approximated by fractions over unsigned integers.
    Overflow,
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConversionError::InvalidTolerance => f.write_str("tolerance must be greater than zero"),
            ConversionError::NotFinite => f.write_str("only finite values can be approximated"),
            ConversionError::NotConverged { iterations } => {
                write!(f, "no approximation within tolerance after {} convergents", iterations)
            }
            ConversionError::Overflow => {
                f.write_str("approximation does not fit in the integer type of the fraction")
            }
        }
    }
}

impl Error for ConversionError {}
