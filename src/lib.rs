//! # Exact fractions
//!
//! A `Fraction` is a quotient of two integers of a fixed width type chosen by the caller. Sums,
//! differences, products and quotients of fractions are exact, as long as the integer type
//! doesn't overflow.
//!
//! Floats are brought into the fraction domain through their continued fraction expansion, which
//! yields the approximation with the smallest denominator within a relative tolerance. This also
//! happens implicitly when a float is used as an operand:
//!
//! ```
//! use fraction::Fraction;
//!
//! let x = Fraction::new(3, 4).unwrap() * 0.4_f64;
//! assert_eq!(x, Fraction::new(6, 20).unwrap());
//! ```
#![warn(missing_docs)]

#[cfg(test)]
#[macro_use]
extern crate approx;

pub use continued_fraction::{Approximation, to_fraction, to_fraction_with_tolerance};
pub use error::{ConversionError, FractionError};
pub use fraction::Fraction;
pub use traits::{Floating, Integral};

pub mod continued_fraction;
pub mod error;
pub mod fraction;
pub mod traits;
