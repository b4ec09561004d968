//! # Continued fractions
//!
//! Approximating floats by fractions through their continued fraction expansion.
//!
//! The convergents `h_n / k_n` of the expansion of a value are its best rational approximations:
//! no fraction with a denominator smaller than `k_n` is closer. The first convergent within
//! tolerance is therefore also the approximation with the smallest denominator.
use log::{debug, trace};
use num_traits::NumCast;

use crate::error::ConversionError;
use crate::fraction::Fraction;
use crate::traits::{Floating, Integral};

/// Number of convergents computed before the expansion is abandoned, unless configured otherwise.
///
/// Denominators of convergents grow at least as fast as the Fibonacci numbers, after this many
/// terms they no longer fit in 64 bits.
pub const DEFAULT_MAX_ITERATIONS: u32 = 96;

/// Settings for approximating floats by fractions.
///
/// The default tolerance is the machine epsilon of the float type.
///
/// # Example
///
/// ```
/// use fraction::{Approximation, Fraction};
///
/// let approximation = Approximation::new().tolerance(1e-3);
/// let pi: Fraction<i32> = approximation.approximate(std::f64::consts::PI).unwrap();
/// assert_eq!(pi, Fraction::new(22, 7).unwrap());
/// ```
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Approximation<F> {
    tolerance: F,
    max_iterations: u32,
}

impl<F: Floating> Default for Approximation<F> {
    fn default() -> Self {
        Self {
            tolerance: F::epsilon(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl<F: Floating> Approximation<F> {
    /// Settings with the machine epsilon as tolerance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the relative tolerance.
    ///
    /// It is validated only when a value is approximated.
    #[must_use]
    pub fn tolerance(self, tolerance: F) -> Self {
        Self { tolerance, ..self }
    }

    /// Set the maximum number of convergents to compute.
    #[must_use]
    pub fn max_iterations(self, max_iterations: u32) -> Self {
        Self { max_iterations, ..self }
    }

    /// Approximate a value by a fraction.
    ///
    /// # Arguments
    ///
    /// * `value`: Finite float to approximate.
    ///
    /// # Return value
    ///
    /// A fraction `h / k` with `|h / k - value| < |value| * tolerance`, where `k` is the smallest
    /// denominator reached by the expansion. Values smaller than the tolerance in magnitude are
    /// approximated by `0 / 1`.
    ///
    /// # Errors
    ///
    /// When the tolerance is not strictly positive, the value is not finite, the expansion didn't
    /// reach the tolerance or the result doesn't fit in `T`.
    pub fn approximate<T: Integral>(&self, value: F) -> Result<Fraction<T>, ConversionError> {
        // Also rejects a NaN tolerance
        if !(self.tolerance > F::zero()) {
            return Err(ConversionError::InvalidTolerance);
        }
        if !value.is_finite() {
            return Err(ConversionError::NotFinite);
        }

        let target = value.abs();
        if target < self.tolerance {
            return Ok(Fraction::default());
        }
        let bound = target * self.tolerance;

        let (mut h1, mut h2) = (F::one(), F::zero());
        let (mut k1, mut k2) = (F::zero(), F::one());
        let mut x = target;

        for iteration in 1..=self.max_iterations {
            let a = x.floor();
            (h1, h2) = (a * h1 + h2, h1);
            (k1, k2) = (a * k1 + k2, k1);

            if (h1 / k1 - target).abs() < bound {
                trace!("approximated {} by {} / {} after {} convergents", value, h1, k1, iteration);
                let numerator = if value < F::zero() { -h1 } else { h1 };
                return convergent_to_fraction(numerator, k1);
            }

            let remainder = x - a;
            if remainder.is_zero() {
                debug!("expansion of {} terminated at {} / {} outside of tolerance", value, h1, k1);
                return Err(ConversionError::NotConverged { iterations: iteration });
            }
            x = remainder.recip();
        }

        debug!("no approximation of {} within {} convergents", value, self.max_iterations);
        Err(ConversionError::NotConverged { iterations: self.max_iterations })
    }
}

/// Approximate a float by a fraction, within a relative tolerance of the machine epsilon.
///
/// See `Approximation::approximate`.
pub fn to_fraction<F: Floating, T: Integral>(value: F) -> Result<Fraction<T>, ConversionError> {
    Approximation::default().approximate(value)
}

/// Approximate a float by a fraction, within a relative tolerance.
///
/// See `Approximation::approximate`.
pub fn to_fraction_with_tolerance<F: Floating, T: Integral>(
    value: F,
    tolerance: F,
) -> Result<Fraction<T>, ConversionError> {
    Approximation::default().tolerance(tolerance).approximate(value)
}

/// Truncate a convergent, which is integral valued, to the integer type of the fraction.
fn convergent_to_fraction<F: Floating, T: Integral>(
    numerator: F,
    denominator: F,
) -> Result<Fraction<T>, ConversionError> {
    match (<T as NumCast>::from(numerator), <T as NumCast>::from(denominator)) {
        (Some(numerator), Some(denominator)) => {
            // The denominator of a convergent is at least one
            Ok(Fraction::new_raw(numerator, denominator))
        }
        _ => {
            debug!("convergent {} / {} does not fit in the integer type", numerator, denominator);
            Err(ConversionError::Overflow)
        }
    }
}
