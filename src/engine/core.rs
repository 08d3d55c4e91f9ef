//! Engine state: all symbol books plus the process-wide order index.

use super::index::OrderIndex;
use crate::orderbook::{Order, OrderId, Price, Symbol, SymbolBook};
use std::collections::BTreeMap;

/// A deterministic, single-threaded matching engine over any number of
/// symbols.
///
/// The engine owns all state. One input line is fully processed, and all
/// of its result events emitted, before the next begins; the result list
/// of an accepted order is committed atomically as the return value of
/// [`Engine::apply`](crate::Engine::apply). Rejected lines leave the
/// state untouched. Embedders that want parallel callers must wrap the
/// engine in a lock; it is not reentrant.
#[derive(Debug, Default)]
pub struct Engine {
    pub(super) books: BTreeMap<Symbol, SymbolBook>,
    pub(super) index: OrderIndex,
    /// Monotonic acceptance sequence stamped onto each accepted order.
    pub(super) next_seq: u64,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Best bid price for `symbol`, if any.
    pub fn best_bid(&self, symbol: &str) -> Option<Price> {
        self.book(symbol)?.best_bid()
    }

    /// Best ask price for `symbol`, if any.
    pub fn best_ask(&self, symbol: &str) -> Option<Price> {
        self.book(symbol)?.best_ask()
    }

    /// Midpoint of best bid and best ask for `symbol`, in ticks.
    pub fn mid_price(&self, symbol: &str) -> Option<f64> {
        self.book(symbol)?.mid_price()
    }

    /// Best ask minus best bid for `symbol`, in ticks.
    pub fn spread(&self, symbol: &str) -> Option<i64> {
        self.book(symbol)?.spread()
    }

    /// A copy of a resting order, located through the index.
    pub fn order(&self, id: OrderId) -> Option<Order> {
        let locator = self.index.lookup(id)?;
        self.books
            .get(&locator.symbol)?
            .order(locator.side, locator.price, locator.slot)
            .copied()
    }

    /// Number of orders resting across all books.
    pub fn resting_order_count(&self) -> usize {
        self.index.resting_count()
    }

    fn book(&self, symbol: &str) -> Option<&SymbolBook> {
        self.books.get(&Symbol::from_wire(symbol)?)
    }

    /// Structural self-checks over the whole engine: every book's own
    /// invariants, index and book agreement order by order, and matching
    /// resting counts. Intended for tests and debug sweeps.
    pub fn assert_invariants(&self) {
        for (symbol, book) in &self.books {
            assert_eq!(*symbol, book.symbol(), "book keyed under wrong symbol");
            book.assert_invariants();
        }

        let mut resting = 0usize;
        for (id, locator) in self.index.resting() {
            resting += 1;
            let book = self
                .books
                .get(&locator.symbol)
                .unwrap_or_else(|| panic!("order {id} located in a missing book"));
            let order = book
                .order(locator.side, locator.price, locator.slot)
                .unwrap_or_else(|| panic!("order {id} locator does not resolve"));
            assert_eq!(order.id, id, "locator for {id} resolves to {}", order.id);
            assert_eq!(order.symbol, locator.symbol);
            assert_eq!(order.side, locator.side);
            assert_eq!(order.price, locator.price);
            assert!(order.open_qty > 0);
        }

        let booked: usize = self.books.values().map(SymbolBook::order_count).sum();
        assert_eq!(resting, booked, "index and books disagree on order count");
    }
}
