/* taylorsin | common.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/******************************************************************************/

use num_traits::float::FloatCore;
use num_traits::NumAssignOps;

include!(concat!(env!("OUT_DIR"), "/taylor_tables.rs"));

/******************************************************************************/

/// Number of entries in the precomputed coefficient table
pub const RECIPROCAL_COUNT: usize = RECIPROCAL_TABLE.len();

mod sealed {
    pub trait Sealed {}
}

/// Floating point types the series evaluators can work with
///
/// This trait is sealed and implemented for [`f32`] and [`f64`]. Each implementation carries its
/// own copy of the coefficient table, rounded once from the `f64` values generated at build time.
pub trait Real: FloatCore + NumAssignOps + sealed::Sealed {
    /// Term-transition reciprocals `1 / (2m * (2m + 1))` for `m = 1..=5`
    ///
    /// Multiplying a term by entry `k` has the same effect as dividing it by the next two
    /// integers of the factorial.
    const RECIPROCALS: [Self; RECIPROCAL_COUNT];

    /// Lossy conversion from a signed integer
    fn from_int(x: i64) -> Self;

    /// Lossy conversion from a factorial value
    fn from_factorial(x: u128) -> Self;
}

macro_rules! gen_reciprocal_table {
    ($type: ty) => {
        {
            let mut table = [0.0; RECIPROCAL_COUNT];
            let mut i = 0;
            while i < RECIPROCAL_COUNT {
                table[i] = RECIPROCAL_TABLE[i] as $type;
                i += 1;
            }
            table
        }
    }
}

macro_rules! impl_real {
    ($type: ty) => {
        impl sealed::Sealed for $type {}

        impl Real for $type {
            const RECIPROCALS: [$type; RECIPROCAL_COUNT] = {
                gen_reciprocal_table!($type)
            };

            #[inline]
            fn from_int(x: i64) -> Self {
                x as $type
            }

            #[inline]
            fn from_factorial(x: u128) -> Self {
                x as $type
            }
        }
    }
}

impl_real!(f32);
impl_real!(f64);

/// Returns a copy of the precomputed coefficient table for the requested precision
///
/// ```
/// let table = taylorsin::coefficient_table::<f64>();
/// assert_eq!(table[0], 1.0 / 6.0);
/// assert_eq!(table.len(), 5);
/// ```
pub fn coefficient_table<T: Real>() -> [T; RECIPROCAL_COUNT] {
    T::RECIPROCALS
}

/******************************************************************************/
