//! # Fractions
//!
//! A quotient of two fixed width integers, stored exactly as it was created or computed.
//!
//! Fractions are not kept in lowest terms: `6 / 20` and `3 / 10` are different values of the type
//! until `simplify` is called. Equality is structural accordingly, while the ordering compares the
//! represented rational numbers. See the `ordering` module.
use std::fmt;

use num_integer::Integer;
use num_traits::{FromPrimitive, NumCast, One, ToPrimitive, Zero};

use crate::continued_fraction::to_fraction;
use crate::error::{ConversionError, FractionError};
use crate::traits::{Floating, Integral};

mod macros;
mod ops;
mod ordering;

/// A fraction with an integral numerator and a denominator that is never zero.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Fraction<T> {
    numerator: T,
    denominator: T,
}

impl<T: Integral> Fraction<T> {
    /// Create a new fraction.
    ///
    /// # Arguments
    ///
    /// * `numerator`: Any value.
    /// * `denominator`: Any value except zero.
    ///
    /// # Errors
    ///
    /// `FractionError::ZeroDenominator` when the denominator is zero.
    pub fn new(numerator: T, denominator: T) -> Result<Self, FractionError> {
        if denominator.is_zero() {
            Err(FractionError::ZeroDenominator)
        } else {
            Ok(Self::new_raw(numerator, denominator))
        }
    }

    /// Create a new fraction without checking the denominator.
    pub(crate) fn new_raw(numerator: T, denominator: T) -> Self {
        debug_assert!(!denominator.is_zero());

        Self { numerator, denominator }
    }

    /// Create a fraction with denominator one.
    pub fn from_integer(value: T) -> Self {
        Self::new_raw(value, T::one())
    }

    /// Approximate a float by a fraction within the machine epsilon of its type.
    ///
    /// See `Approximation` for other tolerances.
    pub fn from_float<F: Floating>(value: F) -> Result<Self, ConversionError> {
        to_fraction(value)
    }

    /// The numerator as stored, not necessarily in lowest terms.
    pub fn numerator(&self) -> T {
        self.numerator
    }

    /// The denominator as stored, never zero but possibly negative.
    pub fn denominator(&self) -> T {
        self.denominator
    }

    /// Mutable access to the numerator, which can take any value.
    pub fn numerator_mut(&mut self) -> &mut T {
        &mut self.numerator
    }

    /// Replace the denominator.
    ///
    /// # Errors
    ///
    /// `FractionError::ZeroDenominator` when the new value is zero. The fraction is not modified.
    pub fn set_denominator(&mut self, denominator: T) -> Result<(), FractionError> {
        if denominator.is_zero() {
            return Err(FractionError::ZeroDenominator);
        }

        self.denominator = denominator;
        Ok(())
    }

    /// Numerator and denominator.
    pub fn into_parts(self) -> (T, T) {
        (self.numerator, self.denominator)
    }

    /// The quotient in double precision.
    pub fn to_f64(&self) -> f64 {
        self.to_float()
    }

    /// The quotient in single precision.
    ///
    /// Both parts are cast to `f32` and divided in `f32`.
    pub fn to_f32(&self) -> f32 {
        self.to_float()
    }

    /// The quotient in the precision of any float type.
    pub fn to_float<F: Floating>(&self) -> F {
        cast::<T, F>(self.numerator) / cast::<T, F>(self.denominator)
    }

    /// Greatest common divisor of the numerator and the denominator.
    ///
    /// Always positive, as the denominator is not zero. `gcd(0, d)` is `|d|`.
    ///
    /// # Panics
    ///
    /// When the result doesn't fit in `T`: both parts are `T::min_value()`, or one of them is zero
    /// and the other `T::min_value()`.
    pub fn gcd(&self) -> T {
        Integer::gcd(&self.numerator, &self.denominator)
    }

    /// Least common multiple of the denominators of two fractions.
    ///
    /// This is the denominator that sums and differences of the two fractions are expressed in.
    pub fn lcm(&self, other: &Self) -> T {
        Integer::lcm(&self.denominator, &other.denominator)
    }

    /// Divide numerator and denominator by their greatest common divisor.
    ///
    /// A zero fraction becomes `0 / 1` and equal parts become `1 / 1`. Otherwise, the sign is not
    /// moved between numerator and denominator.
    pub fn simplify(&mut self) -> &mut Self {
        if self.numerator.is_zero() {
            self.denominator = T::one();
        } else if self.numerator == self.denominator {
            // Also where the greatest common divisor doesn't fit in `T`
            self.numerator = T::one();
            self.denominator = T::one();
        } else {
            let divisor = self.gcd();
            self.numerator = self.numerator / divisor;
            self.denominator = self.denominator / divisor;
        }

        self
    }

    /// The multiplicative inverse.
    ///
    /// # Errors
    ///
    /// `FractionError::DivisionByZero` when the numerator is zero.
    pub fn reciprocal(self) -> Result<Self, FractionError> {
        if self.numerator.is_zero() {
            Err(FractionError::DivisionByZero)
        } else {
            Ok(Self::new_raw(self.denominator, self.numerator))
        }
    }

    /// Absolute values of both parts.
    ///
    /// Overflows when a part is `T::min_value()` of a signed type, like the `abs` of the primitive
    /// integers does.
    pub fn abs(self) -> Self {
        Self::new_raw(self.numerator.abs(), self.denominator.abs())
    }
}

/// Integer to float casts don't fail for the primitive types; very large values become infinite.
fn cast<T: Integral, F: Floating>(value: T) -> F {
    <F as NumCast>::from(value).unwrap_or_else(F::nan)
}

/// Zero as `0 / 1`.
impl<T: Integral> Default for Fraction<T> {
    fn default() -> Self {
        Self::new_raw(T::zero(), T::one())
    }
}

impl<T: Integral> From<T> for Fraction<T> {
    fn from(value: T) -> Self {
        Self::from_integer(value)
    }
}

impl<T: Integral> Zero for Fraction<T> {
    fn zero() -> Self {
        Self::default()
    }

    /// Any fraction with a zero numerator, not only `0 / 1`.
    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl<T: Integral> One for Fraction<T> {
    fn one() -> Self {
        Self::new_raw(T::one(), T::one())
    }

    /// Any fraction with equal numerator and denominator, not only `1 / 1`.
    fn is_one(&self) -> bool {
        self.numerator == self.denominator
    }
}

/// Integers as `n / 1`, floats through their continued fraction expansion.
impl<T: Integral> FromPrimitive for Fraction<T> {
    fn from_i64(n: i64) -> Option<Self> {
        T::from_i64(n).map(Self::from_integer)
    }

    fn from_u64(n: u64) -> Option<Self> {
        T::from_u64(n).map(Self::from_integer)
    }

    fn from_i128(n: i128) -> Option<Self> {
        T::from_i128(n).map(Self::from_integer)
    }

    fn from_u128(n: u128) -> Option<Self> {
        T::from_u128(n).map(Self::from_integer)
    }

    fn from_f32(n: f32) -> Option<Self> {
        to_fraction(n).ok()
    }

    fn from_f64(n: f64) -> Option<Self> {
        to_fraction(n).ok()
    }
}

impl<T: Integral> Fraction<T> {
    /// The quotient truncated towards zero, if it fits in `T`.
    fn truncated(&self) -> Option<T> {
        self.numerator.checked_div(&self.denominator)
    }
}

/// Integers are the quotient truncated towards zero.
impl<T: Integral> ToPrimitive for Fraction<T> {
    fn to_i64(&self) -> Option<i64> {
        self.truncated()?.to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.truncated()?.to_u64()
    }

    fn to_i128(&self) -> Option<i128> {
        self.truncated()?.to_i128()
    }

    fn to_u128(&self) -> Option<u128> {
        self.truncated()?.to_u128()
    }

    fn to_f32(&self) -> Option<f32> {
        Some(self.to_float())
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.to_float())
    }
}

impl<T: Integral> fmt::Display for Fraction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
