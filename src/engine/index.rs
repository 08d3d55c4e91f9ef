//! Process-wide order-id index.

use crate::orderbook::{OrderId, Price, Side, Symbol};
use rustc_hash::FxHashMap;

/// A stable reference from an order id to its slot in some price-level
/// queue. Valid until the order fills or is cancelled, across unrelated
/// mutations elsewhere in the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locator {
    pub symbol: Symbol,
    pub side: Side,
    pub price: Price,
    pub slot: u64,
}

/// Lifecycle of an id the engine has accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderState {
    /// The order rests in a book at the locator.
    Resting(Locator),
    /// The order filled or was cancelled. Terminal; the id stays known so
    /// it can never be reused.
    Closed,
}

/// Mapping from order id to its state. Ids are never forgotten, which
/// makes duplicate detection and cancel both O(1).
#[derive(Debug, Default)]
pub struct OrderIndex {
    entries: FxHashMap<OrderId, OrderState>,
}

impl OrderIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the id was ever accepted, resting or closed.
    pub fn contains(&self, id: OrderId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Register a resting order. Returns `false` without touching the
    /// index if the id was seen before.
    pub fn insert(&mut self, id: OrderId, locator: Locator) -> bool {
        if self.entries.contains_key(&id) {
            return false;
        }
        self.entries.insert(id, OrderState::Resting(locator));
        true
    }

    /// The locator of a resting order.
    pub fn lookup(&self, id: OrderId) -> Option<Locator> {
        match self.entries.get(&id) {
            Some(OrderState::Resting(locator)) => Some(*locator),
            _ => None,
        }
    }

    /// Take a resting order out of the index, leaving the id known but
    /// closed. Returns `None` if the id is unknown or already closed.
    pub fn remove(&mut self, id: OrderId) -> Option<Locator> {
        match self.entries.get_mut(&id) {
            Some(state) => match *state {
                OrderState::Resting(locator) => {
                    *state = OrderState::Closed;
                    Some(locator)
                }
                OrderState::Closed => None,
            },
            None => None,
        }
    }

    /// Mark an id terminally closed: a full fill, or an incoming order
    /// that never rested.
    pub fn close(&mut self, id: OrderId) {
        self.entries.insert(id, OrderState::Closed);
    }

    /// Number of ids currently resting.
    pub fn resting_count(&self) -> usize {
        self.entries
            .values()
            .filter(|state| matches!(state, OrderState::Resting(_)))
            .count()
    }

    /// Number of ids ever accepted.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All resting ids with their locators, in no particular order.
    pub fn resting(&self) -> impl Iterator<Item = (OrderId, Locator)> + '_ {
        self.entries.iter().filter_map(|(id, state)| match state {
            OrderState::Resting(locator) => Some((*id, *locator)),
            OrderState::Closed => None,
        })
    }
}
