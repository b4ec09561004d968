//! # Ordering of fractions
//!
//! Fractions are ordered by the rational number they represent, computed exactly with integer
//! division only. This makes the ordering inconsistent with the structural equality: `1 / 2` and
//! `2 / 4` compare as `Ordering::Equal` but are not `==`. For that reason, `Ord` is not
//! implemented. Use `value_eq` for equality of the represented numbers, or `simplify` both sides
//! before comparing with `==`.
use std::cmp::Ordering;

use crate::fraction::Fraction;
use crate::traits::Integral;

impl<T: Integral> PartialOrd for Fraction<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(compare((self.numerator, self.denominator), (other.numerator, other.denominator)))
    }
}

impl<T: Integral> Fraction<T> {
    /// Whether two fractions represent the same rational number.
    ///
    /// Unlike `==`, this holds for `1 / 2` and `2 / 4`.
    pub fn value_eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }

    /// Compare the quotients in double precision.
    ///
    /// Large numerators and denominators are rounded before they are compared, such that distinct
    /// values can compare as equal. Quotients that are not comparable are considered equal.
    pub fn cmp_ratio(&self, other: &Self) -> Ordering {
        self.to_f64().partial_cmp(&other.to_f64()).unwrap_or(Ordering::Equal)
    }
}

/// Compare two fractions, as stored.
///
/// The floored integer parts are compared first. If they are equal, the fractional parts are
/// compared through their reciprocals, in reverse. This terminates like Euclid's algorithm does.
fn compare<T: Integral>(
    (numerator, denominator): (T, T),
    (other_numerator, other_denominator): (T, T),
) -> Ordering {
    match (floor_parts(numerator, denominator), floor_parts(other_numerator, other_denominator)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some((quotient, remainder)), Some((other_quotient, other_remainder))) => {
            quotient.cmp(&other_quotient).then_with(|| {
                match (remainder.is_zero(), other_remainder.is_zero()) {
                    (true, true) => Ordering::Equal,
                    (true, false) => Ordering::Less,
                    (false, true) => Ordering::Greater,
                    // A remainder has the sign of its divisor, the fractional parts are positive
                    (false, false) => compare(
                        (other_denominator, other_remainder),
                        (denominator, remainder),
                    ),
                }
            })
        }
    }
}

/// Floored quotient and the remainder with the sign of the divisor.
///
/// `None` when the quotient doesn't fit in `T`. That only happens for `T::min_value() / -1`, which
/// is larger than any other fraction over `T`.
fn floor_parts<T: Integral>(numerator: T, denominator: T) -> Option<(T, T)> {
    numerator.checked_div(&denominator)?;

    Some(numerator.div_mod_floor(&denominator))
}
