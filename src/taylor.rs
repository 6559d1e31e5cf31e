/* taylorsin | taylor.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Truncated Taylor series of the sine function
 *
 *   sin(theta) = sum over k >= 0 of (-1)^k * theta^(2k + 1) / (2k + 1)!
 *
 * All three evaluators compute the same truncated sum. They only differ in how much work is
 * repeated from one term to the next.
 */

/******************************************************************************/

use crate::common::{Real, RECIPROCAL_COUNT};
use crate::error::{invalid_argument, Result};
use crate::factorial::real_factorial;

/******************************************************************************/

/// Default truncation depth of the parameterized evaluators
///
/// Six terms means the last term used is `theta^11 / 11!`.
pub const DEFAULT_TERMS: i32 = 6;

/// Fixed truncation depth of [`sin_series_precomputed()`]: one term per table entry plus the first one
pub const PRECOMPUTED_TERMS: i32 = RECIPROCAL_COUNT as i32 + 1;

/// Largest term count [`try_sin_series_naive()`] accepts for `f64`
///
/// The last term of a 85 term series divides by `169!`. The next one would need `171!`, which
/// does not fit in an `f64`.
pub const MAX_NAIVE_TERMS: i32 = 85;

/******************************************************************************/

/// Sine approximation with every term computed from scratch
///
/// Sums `max_n` terms of the series. Each term computes its sign, its power of `theta` and its
/// factorial independently, which makes this the most expensive evaluator. A `max_n` of zero or
/// less yields the empty sum, `0`.
///
/// Factorials are exact up to `34!` and continued in `T` beyond that. Summation stops at the
/// first term whose factorial overflows `T` (from `171!` for `f64`, `35!` for `f32`), since
/// every later term would be divided by infinity.
///
/// ```
/// let s = taylorsin::sin_series_naive(0.5f64, taylorsin::DEFAULT_TERMS);
/// assert!((s - 0.479425538604203).abs() < 1e-9);
/// ```
pub fn sin_series_naive<T: Real>(theta: T, max_n: i32) -> T {
    let mut result = T::zero();
    for k in 0..max_n {
        let exponent = 2 * k as i64 + 1;
        let den: T = real_factorial(exponent);
        if den.is_infinite() {
            log::trace!("({}) {exponent}! overflows, stopping at term {k}", core::any::type_name::<T>());
            break;
        }
        let sign = T::from_int((-1i64).pow(k as u32));
        let power = theta.powi(exponent as i32);
        result += sign * power / den;
    }
    result
}

/// Checked version of [`sin_series_naive()`]
///
/// Rejects `max_n < 1`, and any `max_n` whose last factorial does not fit in `T`
/// ([`MAX_NAIVE_TERMS`] for `f64`, 17 for `f32`).
pub fn try_sin_series_naive<T: Real>(theta: T, max_n: i32) -> Result<T> {
    if max_n < 1 {
        return Err(invalid_argument("max_n", max_n, "term count must be at least 1"));
    }
    if real_factorial::<T>(2 * max_n as i64 - 1).is_infinite() {
        return Err(invalid_argument("max_n", max_n, "factorial of the last term overflows the float type"));
    }
    Ok(sin_series_naive(theta, max_n))
}

/******************************************************************************/

/// Sine approximation with every term derived from the previous one
///
/// Sums `n` terms of the series using
/// `term[k + 1] = term[k] * -theta^2 / ((2k + 2) * (2k + 3))`,
/// so no power or factorial is ever recomputed. For `n <= 1` only the first term, `theta`, is
/// returned. Note that this differs from [`sin_series_naive()`], which returns `0` for `n <= 0`.
///
/// Once the term underflows to zero the remaining iterations cannot change the sum, so the loop
/// ends early.
///
/// ```
/// let s = taylorsin::sin_series_incremental(0.5f64, taylorsin::DEFAULT_TERMS);
/// assert!((s - 0.479425538604203).abs() < 1e-9);
/// ```
pub fn sin_series_incremental<T: Real>(theta: T, n: i32) -> T {
    let mut term = theta;
    let mut acc = term;
    let mut j: i64 = 1;
    let mtheta2 = -theta * theta;
    for _ in 1..n {
        if term.is_zero() && mtheta2.is_finite() {
            break;
        }
        j += 1;
        term /= T::from_int(j);
        j += 1;
        term /= T::from_int(j);
        term *= mtheta2;
        acc += term;
    }
    acc
}

/// Checked version of [`sin_series_incremental()`]
///
/// Rejects `n < 1`.
pub fn try_sin_series_incremental<T: Real>(theta: T, n: i32) -> Result<T> {
    if n < 1 {
        return Err(invalid_argument("n", n, "term count must be at least 1"));
    }
    Ok(sin_series_incremental(theta, n))
}

/******************************************************************************/

/// Sine approximation using the precomputed coefficient table
///
/// Same recurrence as [`sin_series_incremental()`], except that the two divisions per term are
/// replaced by one multiplication with an entry of [`Real::RECIPROCALS`]. The term count is fixed
/// to [`PRECOMPUTED_TERMS`].
///
/// ```
/// let s = taylorsin::sin_series_precomputed(0.5f64);
/// assert!((s - 0.479425538604203).abs() < 1e-9);
/// ```
pub fn sin_series_precomputed<T: Real>(theta: T) -> T {
    let mut term = theta;
    let mut acc = term;
    let mtheta2 = -theta * theta;
    for rfac in T::RECIPROCALS {
        term *= rfac;
        term *= mtheta2;
        acc += term;
    }
    acc
}

/******************************************************************************/
