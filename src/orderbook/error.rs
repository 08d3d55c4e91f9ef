//! Order book error types.

use super::order::Side;
use super::price::Price;
use std::fmt;

/// Structural failures of book mutations. These indicate a locator that no
/// longer points at a live order; the engine surfaces them as a not-found
/// result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookError {
    /// No level exists at the addressed price.
    UnknownLevel {
        /// Side the locator addressed.
        side: Side,
        /// Price with no remaining level.
        price: Price,
    },

    /// The level exists but the slot holds no live order.
    StaleLocator {
        /// Side the locator addressed.
        side: Side,
        /// Price of the level.
        price: Price,
        /// Slot handle that failed to resolve.
        slot: u64,
    },
}

impl fmt::Display for BookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookError::UnknownLevel { side, price } => {
                write!(f, "no {side} level at {price}")
            }
            BookError::StaleLocator { side, price, slot } => {
                write!(f, "no live order at {side} {price} slot {slot}")
            }
        }
    }
}

impl std::error::Error for BookError {}
