//! Order identity and the sides of the book.

use super::price::Price;
use super::symbol::Symbol;
use std::fmt;

/// A protocol-assigned order id. Valid ids are `1..=2^31-1` and are never
/// reused once accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderId(pub u32);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which side of the book an order rests on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Buy side.
    Bid,
    /// Sell side.
    Ask,
}

impl Side {
    /// The side an incoming order matches against.
    pub fn opposite(self) -> Side {
        match self {
            Side::Bid => Side::Ask,
            Side::Ask => Side::Bid,
        }
    }

    /// Whether an incoming order on this side at `limit` crosses a resting
    /// opposite-side order at `resting`.
    pub fn crosses(self, limit: Price, resting: Price) -> bool {
        match self {
            Side::Bid => resting <= limit,
            Side::Ask => resting >= limit,
        }
    }

    /// The single-character wire form (`B` / `S`).
    pub fn to_wire(self) -> char {
        match self {
            Side::Bid => 'B',
            Side::Ask => 'S',
        }
    }

    /// Parse the single-character wire form.
    pub fn from_wire(text: &str) -> Option<Side> {
        match text {
            "B" => Some(Side::Bid),
            "S" => Some(Side::Ask),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Bid => f.write_str("Bid"),
            Side::Ask => f.write_str("Ask"),
        }
    }
}

/// A resting or in-flight limit order.
///
/// Identity fields never change after acceptance; only `open_qty` moves,
/// and only downward. An order leaves the book when `open_qty` reaches
/// zero or it is cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub symbol: Symbol,
    pub side: Side,
    /// Quantity at acceptance.
    pub quantity: u16,
    /// Quantity still open. Invariant: `1..=quantity` while resting.
    pub open_qty: u16,
    pub price: Price,
    /// Engine-wide acceptance sequence, a deterministic tie-break witness.
    pub seq: u64,
}
