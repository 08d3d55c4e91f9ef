//! Typed input events and result events for the line protocol.

use crate::orderbook::{OrderId, Price, Side, Symbol};
use std::fmt;

/// A validated input event, one per accepted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// `O <oid> <symbol> <side> <qty> <px>` — place a limit order.
    Submit {
        id: OrderId,
        symbol: Symbol,
        side: Side,
        qty: u16,
        price: Price,
    },
    /// `X <oid>` — cancel a resting order.
    Cancel { id: OrderId },
    /// `P` — print the resting book.
    Print,
}

/// A result event, one per output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// One side of a crossing event, at the resting order's price.
    Fill {
        id: OrderId,
        symbol: Symbol,
        qty: u16,
        price: Price,
    },
    /// Cancel confirmation.
    Canceled { id: OrderId },
    /// One resting order in a book print.
    Entry {
        id: OrderId,
        symbol: Symbol,
        side: Side,
        open_qty: u16,
        price: Price,
    },
    /// A rejected input line.
    Reject(Reject),
}

/// Why an input line was rejected. `Display` is the canonical wire text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Leading token is not one of `O`, `X`, `P`.
    UnknownAction,
    /// Tokenization failure or wrong token count for the action.
    MalformedInput,
    /// Order id is not a positive 32-bit integer.
    MalformedOid,
    /// Symbol is empty, too long, or not alphanumeric.
    InvalidSymbol,
    /// Side is not exactly `B` or `S`.
    InvalidSide,
    /// Quantity is not a positive 16-bit integer.
    InvalidQuantity,
    /// Price does not match the positive 7.5 decimal format.
    InvalidPrice,
    /// A new order reused an id that was already accepted.
    DuplicateOrderId,
    /// Cancel for an id that is not resting.
    OrderNotFound,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RejectReason::UnknownAction => "Incorrect action character",
            RejectReason::MalformedInput => "Malformed input",
            RejectReason::MalformedOid => "Malformed oid",
            RejectReason::InvalidSymbol => "Invalid symbol",
            RejectReason::InvalidSide => "Incorrect side character",
            RejectReason::InvalidQuantity => "Invalid quantity",
            RejectReason::InvalidPrice => "Invalid price",
            RejectReason::DuplicateOrderId => "Duplicate order id",
            RejectReason::OrderNotFound => "Order not found",
        };
        f.write_str(text)
    }
}

/// A rejected line: the offending oid as it appeared on the wire (possibly
/// empty, possibly unparseable) and the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reject {
    pub oid: String,
    pub reason: RejectReason,
}

impl Reject {
    pub fn new(oid: impl Into<String>, reason: RejectReason) -> Self {
        Reject {
            oid: oid.into(),
            reason,
        }
    }

    /// A reject carrying a validated order id.
    pub fn for_order(id: OrderId, reason: RejectReason) -> Self {
        Reject {
            oid: id.to_string(),
            reason,
        }
    }
}

impl fmt::Display for Reject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.oid.is_empty() {
            write!(f, "E {}", self.reason)
        } else {
            write!(f, "E {} {}", self.oid, self.reason)
        }
    }
}

impl std::error::Error for Reject {}
