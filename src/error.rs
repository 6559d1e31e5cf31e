/* taylorsin | error.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/******************************************************************************/

/// Errors reported by the checked `try_*` functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An integer argument is outside the range the function accepts
    #[error("invalid argument `{name}` = {value}: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter
        name: &'static str,
        /// Value that was passed
        value: i32,
        /// Accepted range
        reason: &'static str
    }
}

/// Result type of the checked `try_*` functions
pub type Result<T> = core::result::Result<T, Error>;

/******************************************************************************/

pub(crate) fn invalid_argument(name: &'static str, value: i32, reason: &'static str) -> Error {
    log::debug!("rejecting {name} = {value}: {reason}");
    Error::InvalidArgument { name, value, reason }
}

/******************************************************************************/
