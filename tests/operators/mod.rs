//! Arithmetic with fractions, integers and floats as operands, on either side of the operator.
use fraction::{Fraction, frac};

type T = i32;

fn f(numerator: T, denominator: T) -> Fraction<T> {
    frac!(numerator, denominator)
}

#[test]
fn add_assign() {
    let mut x = f(3, 4);
    x += f(2, 5);
    assert_eq!(x, f(23, 20));

    let mut x = f(3, 4);
    x += 0.4_f64;
    assert_eq!(x, f(23, 20));

    let mut x = f(3, 4);
    x += f(2, 4);
    assert_eq!(x, f(5, 4));

    let mut x = f(3, 4);
    x += 4;
    assert_eq!(x, f(19, 4));

    let mut x = f(3, 4);
    x += &f(1, 4);
    assert_eq!(x, f(4, 4));
}

#[test]
fn sub_assign() {
    let mut x = f(3, 4);
    x -= f(2, 5);
    assert_eq!(x, f(7, 20));

    let mut x = f(3, 4);
    x -= 0.4_f64;
    assert_eq!(x, f(7, 20));

    let mut x = f(3, 4);
    x -= f(2, 4);
    assert_eq!(x, f(1, 4));

    let mut x = f(3, 4);
    x -= 4;
    assert_eq!(x, f(-13, 4));
}

#[test]
fn mul_assign() {
    let mut x = f(3, 4);
    x *= f(2, 5);
    assert_eq!(x, f(6, 20));
    x.simplify();
    assert_eq!(x, f(3, 10));

    let mut x = f(3, 4);
    x *= 0.4_f64;
    assert_eq!(x, f(6, 20));
    x.simplify();
    assert_eq!(x, f(3, 10));

    let mut x = f(3, 4);
    x *= 4;
    assert_eq!(x, f(12, 4));
    x.simplify();
    assert_eq!(x, f(3, 1));
}

#[test]
fn div_assign() {
    let mut x = f(3, 4);
    x /= f(2, 5);
    assert_eq!(x, f(15, 8));
    x.simplify();
    assert_eq!(x, f(15, 8));

    let mut x = f(3, 4);
    x /= 0.4_f64;
    assert_eq!(x, f(15, 8));

    let mut x = f(3, 4);
    x /= 4;
    assert_eq!(x, f(3, 16));
    x.simplify();
    assert_eq!(x, f(3, 16));
}

#[test]
fn add() {
    assert_eq!(f(3, 4) + f(2, 5), f(23, 20));
    assert_eq!(f(3, 4) + 0.4_f64, f(23, 20));
    assert_eq!(0.75_f64 + f(2, 5), f(23, 20));
    assert_eq!(f(3, 4) + f(2, 4), f(5, 4));
    assert_eq!(f(3, 4) + 1, f(7, 4));
    assert_eq!(1 + f(3, 4), f(7, 4));
    assert_eq!(&f(3, 4) + &f(1, 4), f(4, 4));
}

#[test]
fn sub() {
    assert_eq!(f(3, 4) - f(2, 5), f(7, 20));
    assert_eq!(f(3, 4) - 0.4_f64, f(7, 20));
    assert_eq!(0.75_f64 - f(2, 5), f(7, 20));
    assert_eq!(f(3, 4) - f(2, 4), f(1, 4));
    assert_eq!(1 - f(3, 4), f(1, 4));
}

#[test]
fn mul() {
    let mut x = f(3, 4) * f(2, 5);
    assert_eq!(x, f(6, 20));
    x.simplify();
    assert_eq!(x, f(3, 10));

    let mut x = f(3, 4) * 0.4_f64;
    assert_eq!(x, f(6, 20));
    x.simplify();
    assert_eq!(x, f(3, 10));

    let mut x = 0.75_f64 * f(2, 5);
    assert_eq!(x, f(6, 20));
    x.simplify();
    assert_eq!(x, f(3, 10));

    assert_eq!(2 * f(3, 4), f(6, 4));
}

#[test]
fn div() {
    let mut x = f(3, 4) / f(2, 5);
    assert_eq!(x, f(15, 8));
    x.simplify();
    assert_eq!(x, f(15, 8));

    assert_eq!(f(3, 4) / 0.4_f64, f(15, 8));
    assert_eq!(0.75_f64 / f(2, 5), f(15, 8));
    assert_eq!(2 / f(3, 4), f(8, 3));
}

#[test]
fn chain() {
    let mut x = f(3, 4);
    x += f(2, 5) - f(3, 4);
    assert_eq!(x, f(8, 20));
    x.simplify();
    assert_eq!(x, f(2, 5));

    let mut x = f(3, 4);
    x += 0.4_f64 / f(2, 5) - (f(3, 4) * 0.75_f64);
    assert_eq!(x, f(95, 80));
    x.simplify();
    assert_eq!(x, f(19, 16));
}

#[test]
fn unsigned() {
    let mut x: Fraction<u64> = frac!(3, 4);
    x += 0.4_f64;
    assert_eq!(x, frac!(23, 20));
    x *= 2;
    assert_eq!(x, frac!(46, 20));
    assert_eq!(5_u64 - x, frac!(54, 20));
}

#[test]
fn wide() {
    let x: Fraction<i128> = frac!(1, 1 << 100);
    let y: Fraction<i128> = frac!(1, 3);
    assert_eq!(x + y, frac!(3 + (1 << 100), 3 << 100));
}

#[test]
#[should_panic]
fn panic_divide_by_zero() {
    let _result = f(3, 4) / f(0, 1);
}

#[test]
#[should_panic]
fn panic_divide_by_zero_float() {
    let _result = f(3, 4) / 0.0_f64;
}

#[test]
#[should_panic]
fn panic_negative_float_unsigned() {
    let x: Fraction<u32> = frac!(3, 4);
    let _result = x * -0.5_f64;
}
