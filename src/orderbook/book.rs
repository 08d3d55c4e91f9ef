//! Per-symbol order book: a bid side and an ask side of price levels.

use super::error::BookError;
use super::level::{HeadFill, PriceLevel};
use super::order::{Order, OrderId, Side};
use super::price::Price;
use super::symbol::Symbol;
use std::collections::BTreeMap;
use tracing::trace;

/// A copy of the best resting order's identity on one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestQuote {
    pub price: Price,
    pub id: OrderId,
    pub open_qty: u16,
}

/// The resting orders for a single symbol, split by side and keyed by
/// price.
///
/// The book owns its orders by value inside the level queues. Bids are
/// consumed from the highest price down, asks from the lowest up. No empty
/// level survives any mutation.
#[derive(Debug, Clone)]
pub struct SymbolBook {
    symbol: Symbol,
    bids: BTreeMap<Price, PriceLevel>,
    asks: BTreeMap<Price, PriceLevel>,
}

impl SymbolBook {
    pub fn new(symbol: Symbol) -> Self {
        SymbolBook {
            symbol,
            bids: BTreeMap::new(),
            asks: BTreeMap::new(),
        }
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// The best price and head order on `side`: maximum price for bids,
    /// minimum for asks.
    pub fn best(&self, side: Side) -> Option<BestQuote> {
        let (price, level) = match side {
            Side::Bid => self.bids.iter().next_back()?,
            Side::Ask => self.asks.iter().next()?,
        };
        let head = level.front()?;
        Some(BestQuote {
            price: *price,
            id: head.id,
            open_qty: head.open_qty,
        })
    }

    /// Best bid price, if any.
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.keys().next_back().copied()
    }

    /// Best ask price, if any.
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.keys().next().copied()
    }

    /// Midpoint of best bid and best ask, in ticks.
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some((bid.ticks() as f64 + ask.ticks() as f64) / 2.0),
            _ => None,
        }
    }

    /// Best ask minus best bid, in ticks.
    pub fn spread(&self) -> Option<i64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask.ticks() - bid.ticks()),
            _ => None,
        }
    }

    /// Append `order` at the tail of its side/price level, creating the
    /// level if absent. Returns the slot handle for the order's locator.
    pub fn insert(&mut self, order: Order) -> u64 {
        trace!(
            "Book {}: resting order {} {} {} @ {}",
            self.symbol, order.id, order.side, order.open_qty, order.price
        );
        let price = order.price;
        self.side_mut(order.side)
            .entry(price)
            .or_insert_with(|| PriceLevel::new(price))
            .push_back(order)
    }

    /// Fill up to `take` against the head order at the best price on
    /// `side`. Removes the head order when fully filled and the level when
    /// it empties. Returns `None` when the side is empty.
    pub fn fill_best(&mut self, side: Side, take: u16) -> Option<HeadFill> {
        let price = match side {
            Side::Bid => self.bids.keys().next_back().copied()?,
            Side::Ask => self.asks.keys().next().copied()?,
        };
        let levels = self.side_mut(side);
        let level = levels.get_mut(&price)?;
        let fill = level.fill_front(take)?;
        if level.is_empty() {
            levels.remove(&price);
        }
        Some(fill)
    }

    /// Unlink the order addressed by a locator's `(side, price, slot)`.
    /// Removes the level if it empties.
    pub fn remove(&mut self, side: Side, price: Price, slot: u64) -> Result<Order, BookError> {
        let levels = self.side_mut(side);
        let level = levels
            .get_mut(&price)
            .ok_or(BookError::UnknownLevel { side, price })?;
        let order = level
            .cancel(slot)
            .ok_or(BookError::StaleLocator { side, price, slot })?;
        if level.is_empty() {
            levels.remove(&price);
        }
        Ok(order)
    }

    /// The live order addressed by `(side, price, slot)`, if still open.
    pub fn order(&self, side: Side, price: Price, slot: u64) -> Option<&Order> {
        self.side(side).get(&price)?.get(slot)
    }

    /// Number of live orders resting on both sides.
    pub fn order_count(&self) -> usize {
        self.bids
            .values()
            .chain(self.asks.values())
            .map(PriceLevel::order_count)
            .sum()
    }

    /// Ask-side orders in canonical print order: levels descending by
    /// price, newest order first within a level.
    pub fn asks_descending(&self) -> impl Iterator<Item = &Order> {
        self.asks
            .values()
            .rev()
            .flat_map(|level| level.iter_live().rev())
    }

    /// Bid-side orders in canonical print order: levels descending by
    /// price, oldest order first within a level.
    pub fn bids_descending(&self) -> impl Iterator<Item = &Order> {
        self.bids.values().rev().flat_map(PriceLevel::iter_live)
    }

    /// Price levels on `side`, iterated in ascending price order.
    pub fn levels(&self, side: Side) -> impl DoubleEndedIterator<Item = &PriceLevel> {
        self.side(side).values()
    }

    fn side(&self, side: Side) -> &BTreeMap<Price, PriceLevel> {
        match side {
            Side::Bid => &self.bids,
            Side::Ask => &self.asks,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut BTreeMap<Price, PriceLevel> {
        match side {
            Side::Bid => &mut self.bids,
            Side::Ask => &mut self.asks,
        }
    }

    /// Structural self-checks used by tests and the engine's invariant
    /// sweep: no empty level, level keys match level prices, per-level
    /// accounting matches the queued orders, and every order belongs to
    /// this book's symbol and its level's side and price.
    pub fn assert_invariants(&self) {
        for (side, levels) in [(Side::Bid, &self.bids), (Side::Ask, &self.asks)] {
            for (price, level) in levels {
                assert!(!level.is_empty(), "empty level at {price}");
                assert_eq!(*price, level.price(), "level key mismatch at {price}");
                let mut open: u64 = 0;
                let mut count = 0usize;
                for order in level.iter_live() {
                    assert!(order.open_qty > 0, "closed order queued at {price}");
                    assert!(
                        order.open_qty <= order.quantity,
                        "open above original for {}",
                        order.id
                    );
                    assert_eq!(order.symbol, self.symbol, "foreign order {}", order.id);
                    assert_eq!(order.side, side, "order {} on wrong side", order.id);
                    assert_eq!(order.price, *price, "order {} at wrong level", order.id);
                    open += u64::from(order.open_qty);
                    count += 1;
                }
                assert_eq!(open, level.open_quantity(), "qty drift at {price}");
                assert_eq!(count, level.order_count(), "count drift at {price}");
            }
        }
        if let (Some(bid), Some(ask)) = (self.best_bid(), self.best_ask()) {
            assert!(bid < ask, "crossed book: {bid} >= {ask}");
        }
    }
}
