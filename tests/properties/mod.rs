//! Construction, approximation, simplification and comparison.
use std::cmp::Ordering;
use std::f64::consts::{E, PI};

use approx::assert_relative_eq;

use fraction::{
    Approximation, ConversionError, Fraction, FractionError, frac, to_fraction,
    to_fraction_with_tolerance,
};

#[test]
fn construction() {
    for numerator in [-100, -1, 0, 1, 7, 1 << 20] {
        for denominator in [-9, -1, 1, 2, 1 << 30] {
            let x = Fraction::new(numerator, denominator).unwrap();
            assert_eq!(x.numerator(), numerator);
            assert_eq!(x.denominator(), denominator);
        }
        assert_eq!(Fraction::new(numerator, 0), Err(FractionError::ZeroDenominator));
    }
}

#[test]
fn invalid_tolerance() {
    for tolerance in [0.0, -1.0, -f64::EPSILON] {
        assert_eq!(
            to_fraction_with_tolerance::<_, i32>(1.375, tolerance),
            Err(ConversionError::InvalidTolerance),
        );
    }
}

#[test]
fn round_trip() {
    let x: Fraction<i32> = to_fraction(1.375).unwrap();
    assert_relative_eq!(x.to_f64(), 1.375);
    assert_eq!(x, frac!(11, 8));

    for value in [0.1, 0.3, 2.0 / 3.0, 123.456, -0.2, PI, E] {
        let x: Fraction<i64> = to_fraction(value).unwrap();
        assert_relative_eq!(x.to_f64(), value, max_relative = f64::EPSILON);
    }

    for value in [0.1_f32, 0.3, 0.4, -2.5] {
        let x: Fraction<i32> = to_fraction(value).unwrap();
        assert_relative_eq!(x.to_f32(), value, max_relative = f32::EPSILON);
    }
}

#[test]
fn smallest_denominator() {
    let approximation = Approximation::new().tolerance(1e-3);
    let x: Fraction<i32> = approximation.approximate(PI).unwrap();
    assert_eq!(x, frac!(22, 7));

    let x: Fraction<i32> = approximation.approximate(0.3333).unwrap();
    assert_eq!(x, frac!(1, 3));
}

#[test]
fn simplify() {
    let mut x = frac!(11_534_336, 8_388_608);
    x.simplify();
    assert_eq!(x, frac!(11, 8));

    let mut x = frac!(-45, 105);
    x.simplify();
    let once = x;
    x.simplify();
    assert_eq!(once, x);
    assert_eq!(x, frac!(-3, 7));
}

#[test]
fn different_denominators() {
    assert_eq!(frac!(3, 4) + frac!(2, 5), frac!(23, 20));
    assert_eq!(frac!(3, 4) / frac!(2, 5), frac!(15, 8));

    let mut x = frac!(3, 4) * 0.4_f64;
    assert_eq!(x, frac!(6, 20));
    x.simplify();
    assert_eq!(x, frac!(3, 10));
}

#[test]
fn structural_equality() {
    assert_ne!(frac!(1, 2), frac!(2, 4));
    assert_eq!(*frac!(1, 2).simplify(), *frac!(2, 4).simplify());
    assert!(frac!(1, 2).value_eq(&frac!(2, 4)));
}

#[test]
fn ordering() {
    assert!(frac!(1, 3) < frac!(1, 2));
    assert!(frac!(1, 2) > frac!(1, 3));
    assert_eq!(frac!(1, 2).partial_cmp(&frac!(2, 4)), Some(Ordering::Equal));

    // Quotients that round to the same double
    let x: Fraction<i64> = frac!(1 << 60, (1 << 60) + 1);
    let y: Fraction<i64> = frac!((1 << 60) - 1, 1 << 60);
    assert!(x > y);
    assert_eq!(x.cmp_ratio(&y), Ordering::Equal);
    assert_eq!(frac!(1, 3).cmp_ratio(&frac!(1, 2)), Ordering::Less);
}

#[test]
fn division_by_zero() {
    let mut x = frac!(3, 4);
    assert_eq!(x.div_fraction(&frac!(0, 4)), Err(FractionError::DivisionByZero));
    assert_eq!(x, frac!(3, 4));
}
