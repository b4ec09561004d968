//! # Arithmetic
//!
//! Named methods for each combination of operation and operand, and the operators built on them.
//!
//! Operands are other fractions, integers of the storage type (as `value / 1`) and floats. Floats
//! are first approximated by a fraction within the machine epsilon of their type. Results are not
//! simplified.
//!
//! Operators panic where the named methods return an error, like integer division by zero does.
//!
//! Operators are implemented for both `f32` and `f64`, so a float literal operand needs a suffix
//! (`0.4_f64`) whenever the type of the result has to be known before the end of the statement.
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{One, Signed, Zero};

use crate::continued_fraction::to_fraction;
use crate::error::FractionError;
use crate::fraction::Fraction;
use crate::traits::{Floating, Integral};

impl<T: Integral> Fraction<T> {
    /// Add another fraction.
    ///
    /// With equal denominators, only the numerators are added. Otherwise both fractions are first
    /// expressed in the least common multiple of the denominators.
    pub fn add_fraction(&mut self, other: &Self) -> &mut Self {
        self.combine(other, |x, y| x + y)
    }

    /// Add an integer.
    pub fn add_integer(&mut self, value: T) -> &mut Self {
        self.add_fraction(&Self::from_integer(value))
    }

    /// Add a float, after approximating it by a fraction.
    pub fn add_float<F: Floating>(&mut self, value: F) -> Result<&mut Self, FractionError> {
        let other = to_fraction(value)?;
        Ok(self.add_fraction(&other))
    }

    /// Subtract another fraction.
    ///
    /// See `add_fraction` for the denominator of the result.
    pub fn sub_fraction(&mut self, other: &Self) -> &mut Self {
        self.combine(other, |x, y| x - y)
    }

    /// Subtract an integer.
    pub fn sub_integer(&mut self, value: T) -> &mut Self {
        self.sub_fraction(&Self::from_integer(value))
    }

    /// Subtract a float, after approximating it by a fraction.
    pub fn sub_float<F: Floating>(&mut self, value: F) -> Result<&mut Self, FractionError> {
        let other = to_fraction(value)?;
        Ok(self.sub_fraction(&other))
    }

    /// Multiply numerators and denominators.
    pub fn mul_fraction(&mut self, other: &Self) -> &mut Self {
        self.numerator = self.numerator * other.numerator;
        self.denominator = self.denominator * other.denominator;

        self
    }

    /// Multiply the numerator by an integer.
    pub fn mul_integer(&mut self, value: T) -> &mut Self {
        self.numerator = self.numerator * value;

        self
    }

    /// Multiply by a float, after approximating it by a fraction.
    pub fn mul_float<F: Floating>(&mut self, value: F) -> Result<&mut Self, FractionError> {
        let other = to_fraction(value)?;
        Ok(self.mul_fraction(&other))
    }

    /// Multiply by the reciprocal of another fraction.
    ///
    /// # Errors
    ///
    /// `FractionError::DivisionByZero` if the numerator of `other` is zero. The fraction is not
    /// modified.
    pub fn div_fraction(&mut self, other: &Self) -> Result<&mut Self, FractionError> {
        if other.numerator.is_zero() {
            return Err(FractionError::DivisionByZero);
        }

        self.numerator = self.numerator * other.denominator;
        self.denominator = self.denominator * other.numerator;

        Ok(self)
    }

    /// Multiply the denominator by an integer.
    ///
    /// # Errors
    ///
    /// `FractionError::DivisionByZero` if `value` is zero.
    pub fn div_integer(&mut self, value: T) -> Result<&mut Self, FractionError> {
        if value.is_zero() {
            return Err(FractionError::DivisionByZero);
        }

        self.denominator = self.denominator * value;

        Ok(self)
    }

    /// Divide by a float, after approximating it by a fraction.
    ///
    /// # Errors
    ///
    /// If the float can't be approximated, or it is approximated by zero.
    pub fn div_float<F: Floating>(&mut self, value: F) -> Result<&mut Self, FractionError> {
        let other = to_fraction(value)?;
        self.div_fraction(&other)
    }

    fn combine(&mut self, other: &Self, operation: impl Fn(T, T) -> T) -> &mut Self {
        if self.denominator == other.denominator {
            self.numerator = operation(self.numerator, other.numerator);
        } else {
            let common = self.lcm(other);
            self.numerator = operation(
                self.numerator * (common / self.denominator),
                other.numerator * (common / other.denominator),
            );
            self.denominator = common;
        }

        self
    }
}

/// Approximate a float appearing in an operator expression.
fn float_operand<F: Floating, T: Integral>(value: F) -> Fraction<T> {
    match to_fraction(value) {
        Ok(fraction) => fraction,
        Err(error) => panic!("{}", error),
    }
}

macro_rules! impl_assign_operator {
    (
        $trait:ident, $method:ident,
        $fraction_kind:ident $by_fraction:ident,
        $integer_kind:ident $by_integer:ident,
        $by_float:ident
    ) => {
        impl<T: Integral> $trait for Fraction<T> {
            fn $method(&mut self, rhs: Self) {
                impl_assign_operator!(@$fraction_kind self.$by_fraction(&rhs));
            }
        }

        impl<T: Integral> $trait<&Fraction<T>> for Fraction<T> {
            fn $method(&mut self, rhs: &Self) {
                impl_assign_operator!(@$fraction_kind self.$by_fraction(rhs));
            }
        }

        impl<T: Integral> $trait<T> for Fraction<T> {
            fn $method(&mut self, rhs: T) {
                impl_assign_operator!(@$integer_kind self.$by_integer(rhs));
            }
        }

        impl_assign_operator!(@float $trait, $method, $by_float, f32);
        impl_assign_operator!(@float $trait, $method, $by_float, f64);
    };
    (@float $trait:ident, $method:ident, $by_float:ident, $float:ident) => {
        impl<T: Integral> $trait<$float> for Fraction<T> {
            fn $method(&mut self, rhs: $float) {
                impl_assign_operator!(@fallible self.$by_float(rhs));
            }
        }
    };
    (@infallible $call:expr) => {
        $call;
    };
    (@fallible $call:expr) => {
        if let Err(error) = $call {
            panic!("{}", error);
        }
    };
}
impl_assign_operator!(AddAssign, add_assign, infallible add_fraction, infallible add_integer, add_float);
impl_assign_operator!(SubAssign, sub_assign, infallible sub_fraction, infallible sub_integer, sub_float);
impl_assign_operator!(MulAssign, mul_assign, infallible mul_fraction, infallible mul_integer, mul_float);
impl_assign_operator!(DivAssign, div_assign, fallible div_fraction, fallible div_integer, div_float);

/// Binary operators, copying the left hand side and applying the assigning operator to it.
macro_rules! impl_operator {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl<T: Integral> $trait for Fraction<T> {
            type Output = Self;

            fn $method(mut self, rhs: Self) -> Self::Output {
                $assign_trait::$assign_method(&mut self, rhs);
                self
            }
        }

        impl<T: Integral> $trait<&Fraction<T>> for Fraction<T> {
            type Output = Self;

            fn $method(mut self, rhs: &Self) -> Self::Output {
                $assign_trait::$assign_method(&mut self, rhs);
                self
            }
        }

        impl<T: Integral> $trait<Fraction<T>> for &Fraction<T> {
            type Output = Fraction<T>;

            fn $method(self, rhs: Fraction<T>) -> Self::Output {
                $trait::$method(*self, rhs)
            }
        }

        impl<T: Integral> $trait for &Fraction<T> {
            type Output = Fraction<T>;

            fn $method(self, rhs: Self) -> Self::Output {
                $trait::$method(*self, rhs)
            }
        }

        impl<T: Integral> $trait<T> for Fraction<T> {
            type Output = Self;

            fn $method(mut self, rhs: T) -> Self::Output {
                $assign_trait::$assign_method(&mut self, rhs);
                self
            }
        }

        impl_operator!(@float $trait, $method, $assign_trait, $assign_method, f32);
        impl_operator!(@float $trait, $method, $assign_trait, $assign_method, f64);
        impl_operator!(
            @integer $trait, $method, $assign_trait, $assign_method,
            i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
        );
    };
    (@float $trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $float:ident) => {
        impl<T: Integral> $trait<$float> for Fraction<T> {
            type Output = Self;

            fn $method(mut self, rhs: $float) -> Self::Output {
                $assign_trait::$assign_method(&mut self, rhs);
                self
            }
        }

        impl<T: Integral> $trait<Fraction<T>> for $float {
            type Output = Fraction<T>;

            fn $method(self, rhs: Fraction<T>) -> Self::Output {
                let mut result = float_operand(self);
                $assign_trait::$assign_method(&mut result, rhs);
                result
            }
        }
    };
    (@integer $trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $($t:ident),*) => {
        $(
            impl $trait<Fraction<$t>> for $t {
                type Output = Fraction<$t>;

                fn $method(self, rhs: Fraction<$t>) -> Self::Output {
                    let mut result = Fraction::from_integer(self);
                    $assign_trait::$assign_method(&mut result, rhs);
                    result
                }
            }
        )*
    };
}
impl_operator!(Add, add, AddAssign, add_assign);
impl_operator!(Sub, sub, SubAssign, sub_assign);
impl_operator!(Mul, mul, MulAssign, mul_assign);
impl_operator!(Div, div, DivAssign, div_assign);

impl<T: Integral + Signed> Neg for Fraction<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new_raw(-self.numerator, self.denominator)
    }
}

impl<T: Integral + Signed> Neg for &Fraction<T> {
    type Output = Fraction<T>;

    fn neg(self) -> Self::Output {
        Neg::neg(*self)
    }
}

macro_rules! impl_fold {
    ($trait:ident, $trait_method:ident, $initial_value:expr, $base_trait:ident, $base_trait_method:ident) => {
        impl<T: Integral> $trait for Fraction<T> {
            fn $trait_method<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold($initial_value, $base_trait::$base_trait_method)
            }
        }

        impl<'a, T: Integral> $trait<&'a Fraction<T>> for Fraction<T> {
            fn $trait_method<I: Iterator<Item = &'a Fraction<T>>>(iter: I) -> Self {
                iter.fold($initial_value, $base_trait::$base_trait_method)
            }
        }
    };
}
impl_fold!(Sum, sum, Self::zero(), Add, add);
impl_fold!(Product, product, Self::one(), Mul, mul);
