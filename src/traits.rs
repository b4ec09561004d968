//! # Traits
//!
//! The number types a `Fraction` is defined over, and the float types it interoperates with.
//!
//! Numerators and denominators are fixed width integers. Arithmetic on them keeps the native
//! semantics of the chosen type: overflow panics in debug builds and wraps in release builds.
use std::fmt::{Debug, Display};
use std::hash::Hash;

use num_integer::Integer;
use num_traits::{Float, FromPrimitive, PrimInt};

/// Integer types that can be used as the numerator and denominator of a `Fraction`.
///
/// Only implemented for the primitive integers. The operator impls on `Fraction` rely on the
/// float types not being `Integral`.
pub trait Integral: PrimInt + Integer + FromPrimitive + Hash + Debug + Display {
    /// The absolute value of a number.
    ///
    /// Compute the additive inverse if the number is smaller than the additive identity. This is
    /// the identity for unsigned types, and overflows for the minimum of signed types.
    fn abs(self) -> Self {
        if self < Self::zero() {
            Self::zero() - self
        } else {
            self
        }
    }
}

macro_rules! impl_integral {
    ($($t:ident),*) => {
        $(impl Integral for $t {})*
    }
}
impl_integral!(i8, i16, i32, i64, i128, isize);
impl_integral!(u8, u16, u32, u64, u128, usize);

/// Float types that can be approximated by a `Fraction`, and that it can be converted into.
pub trait Floating: Float + FromPrimitive + Debug + Display {}
impl Floating for f32 {}
impl Floating for f64 {}
