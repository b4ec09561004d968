/// Shorthand for creating a fraction in tests.
///
/// Panics when the denominator is zero.
#[macro_export]
macro_rules! frac {
    ($value:expr) => {
        $crate::Fraction::from_integer($value)
    };
    ($numerator:expr, $denominator:expr) => {
        $crate::Fraction::new($numerator, $denominator).unwrap()
    };
}
