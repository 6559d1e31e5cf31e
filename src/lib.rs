/* taylorsin | lib.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Truncated Taylor series sine approximations */

/******************************************************************************/

#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/******************************************************************************/

mod common;
mod error;
mod factorial;
mod taylor;

pub use common::{coefficient_table, Real, RECIPROCAL_COUNT};
pub use error::{Error, Result};
pub use factorial::{checked_factorial, factorial, try_factorial, MAX_FACTORIAL_INPUT};
pub use taylor::{
    sin_series_incremental, sin_series_naive, sin_series_precomputed, try_sin_series_incremental,
    try_sin_series_naive, DEFAULT_TERMS, MAX_NAIVE_TERMS, PRECOMPUTED_TERMS
};

/******************************************************************************/

/// Series evaluation strategy
///
/// All strategies compute the same truncated series, so they are interchangeable at the call site.
/// They differ only in the amount of arithmetic performed per call.
///
/// ```
/// use taylorsin::Evaluator;
///
/// for evaluator in Evaluator::ALL {
///     let s: f64 = evaluator.sin(0.5);
///     assert!((s - 0.479425538604203).abs() < 1e-9);
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Evaluator {
    /// [`sin_series_naive()`]
    Naive,
    /// [`sin_series_incremental()`]
    Incremental,
    /// [`sin_series_precomputed()`]
    Precomputed
}

impl Evaluator {
    /// Every strategy, from the most to the least expensive
    pub const ALL: [Evaluator; 3] = [Evaluator::Naive, Evaluator::Incremental, Evaluator::Precomputed];

    /// Evaluates the sine of `theta` with this strategy at its default truncation depth
    pub fn sin<T: Real>(self, theta: T) -> T {
        match self {
            Evaluator::Naive => sin_series_naive(theta, DEFAULT_TERMS),
            Evaluator::Incremental => sin_series_incremental(theta, DEFAULT_TERMS),
            Evaluator::Precomputed => sin_series_precomputed(theta)
        }
    }

    /// Number of series terms used by [`Evaluator::sin()`]
    ///
    /// The naive and incremental evaluators take their depth as a parameter and default to
    /// [`DEFAULT_TERMS`]. The precomputed one is tied to the coefficient table size.
    pub const fn terms(self) -> i32 {
        match self {
            Evaluator::Naive | Evaluator::Incremental => DEFAULT_TERMS,
            Evaluator::Precomputed => PRECOMPUTED_TERMS
        }
    }

    /// Short lowercase name of the strategy
    pub const fn name(self) -> &'static str {
        match self {
            Evaluator::Naive => "naive",
            Evaluator::Incremental => "incremental",
            Evaluator::Precomputed => "precomputed"
        }
    }
}

impl core::fmt::Display for Evaluator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/******************************************************************************/
