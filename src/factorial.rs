/* taylorsin | factorial.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/******************************************************************************/

use crate::common::Real;
use crate::error::{invalid_argument, Result};

/******************************************************************************/

/// Largest `n` for which `n!` fits in a `u128`
pub const MAX_FACTORIAL_INPUT: i32 = 34;

/// Computes `n!`, or `None` if the result does not fit in a `u128`
///
/// Any `n <= 0` yields 1, since the product is empty.
pub const fn checked_factorial(n: i32) -> Option<u128> {
    let mut result: u128 = 1;
    let mut i = 1;
    while i <= n {
        result = match result.checked_mul(i as u128) {
            Some(x) => x,
            None => return None
        };
        i += 1;
    }
    Some(result)
}

/// Computes `n!`
///
/// Any `n <= 0` yields 1, since the product is empty.
///
/// # Panics
///
/// Panics if `n` is greater than [`MAX_FACTORIAL_INPUT`]. Use [`checked_factorial()`] or
/// [`try_factorial()`] when `n` is not known to be in range.
///
/// ```
/// assert_eq!(taylorsin::factorial(5), 120);
/// assert_eq!(taylorsin::factorial(0), 1);
/// ```
pub const fn factorial(n: i32) -> u128 {
    match checked_factorial(n) {
        Some(x) => x,
        None => panic!("factorial overflows u128")
    }
}

/// Computes `n!`, rejecting negative inputs and inputs whose factorial does not fit in a `u128`
pub fn try_factorial(n: i32) -> Result<u128> {
    if n < 0 {
        return Err(invalid_argument("n", n, "factorial is not defined for negative numbers"));
    }
    checked_factorial(n).ok_or_else(|| invalid_argument("n", n, "factorial overflows u128 past 34"))
}

/// Computes `n!` as a float
///
/// Integer arithmetic is used up to [`MAX_FACTORIAL_INPUT`], the remaining factors are multiplied
/// in `T`. The result is infinite once `n!` exceeds the range of `T`.
pub(crate) fn real_factorial<T: Real>(n: i64) -> T {
    let exact = n.clamp(0, MAX_FACTORIAL_INPUT as i64) as i32;
    let mut result = T::from_factorial(factorial(exact));
    let mut i = exact as i64 + 1;
    while i <= n && result.is_finite() {
        result *= T::from_int(i);
        i += 1;
    }
    result
}

/******************************************************************************/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use approx::assert_relative_eq;

    #[test]
    fn test_factorial_small() {
        let expected = [1, 1, 2, 6, 24, 120, 720];
        for (n, f) in expected.into_iter().enumerate() {
            assert_eq!(factorial(n as i32), f);
        }
    }

    #[test]
    fn test_factorial_non_positive() {
        assert_eq!(factorial(-1), 1);
        assert_eq!(factorial(i32::MIN), 1);
    }

    #[test]
    fn test_factorial_limits() {
        assert_eq!(factorial(20), 2_432_902_008_176_640_000);
        assert_eq!(checked_factorial(MAX_FACTORIAL_INPUT), Some(295_232_799_039_604_140_847_618_609_643_520_000_000));
        assert_eq!(checked_factorial(MAX_FACTORIAL_INPUT + 1), None);
    }

    #[test]
    #[should_panic]
    fn test_factorial_overflow_panics() {
        factorial(MAX_FACTORIAL_INPUT + 1);
    }

    #[test]
    fn test_try_factorial() {
        assert_eq!(try_factorial(6), Ok(720));
        assert!(matches!(try_factorial(-3), Err(Error::InvalidArgument { name: "n", value: -3, .. })));
        assert!(matches!(try_factorial(35), Err(Error::InvalidArgument { value: 35, .. })));
    }

    #[test]
    fn test_real_factorial() {
        assert_eq!(real_factorial::<f64>(-5), 1.0);
        assert_eq!(real_factorial::<f64>(6), 720.0);
        assert_eq!(real_factorial::<f64>(20), 2_432_902_008_176_640_000.0);
        assert_relative_eq!(real_factorial::<f64>(35), 1.0333147966386145e40, max_relative = 1e-14);
        assert_relative_eq!(real_factorial::<f64>(170), 7.257415615307999e306, max_relative = 1e-12);
        assert!(real_factorial::<f64>(171).is_infinite());
        assert!(real_factorial::<f64>(i64::MAX).is_infinite());
        assert!(real_factorial::<f32>(34).is_finite());
        assert!(real_factorial::<f32>(35).is_infinite());
    }

    #[test]
    fn test_factorial_is_const() {
        const F: u128 = factorial(11);
        assert_eq!(F, 39_916_800);
    }
}
