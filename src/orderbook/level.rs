//! A single price level: a FIFO queue of orders at one price on one side.

use super::order::{Order, OrderId};
use super::price::Price;
use std::collections::VecDeque;
use tracing::trace;

/// Outcome of filling quantity against the head of a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadFill {
    /// The resting order that traded.
    pub maker: OrderId,
    /// Whether that order was fully filled and removed.
    pub maker_filled: bool,
}

/// A FIFO queue of orders resting at a single price.
///
/// Each order is addressed by a stable slot id, `base` plus its position at
/// insertion time. Cancelling marks the entry dead in place and quantity
/// accounting moves to the live counters; dead entries at the front are
/// swept eagerly so the head of the queue is always a live order. This
/// gives O(1) amortized cancel without invalidating other slots.
#[derive(Debug, Clone)]
pub struct PriceLevel {
    price: Price,
    entries: VecDeque<Order>,
    /// Slot id of `entries[0]`.
    base: u64,
    /// Number of live (open) orders in `entries`.
    live: usize,
    /// Total open quantity across live orders.
    open_qty: u64,
}

impl PriceLevel {
    pub fn new(price: Price) -> Self {
        PriceLevel {
            price,
            entries: VecDeque::new(),
            base: 0,
            live: 0,
            open_qty: 0,
        }
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// Number of live orders queued at this price.
    pub fn order_count(&self) -> usize {
        self.live
    }

    /// Total open quantity across live orders.
    pub fn open_quantity(&self) -> u64 {
        self.open_qty
    }

    /// A level with no live orders must be removed by its owner.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Append an order at the tail of the queue and return its slot id.
    pub fn push_back(&mut self, order: Order) -> u64 {
        let slot = self.base + self.entries.len() as u64;
        self.live += 1;
        self.open_qty += u64::from(order.open_qty);
        trace!(
            "Level {}: queued order {} at slot {}",
            self.price, order.id, slot
        );
        self.entries.push_back(order);
        slot
    }

    /// The earliest live order at this price, if any.
    pub fn front(&self) -> Option<&Order> {
        self.entries.front()
    }

    /// The live order at `slot`, if it is still open.
    pub fn get(&self, slot: u64) -> Option<&Order> {
        let index = slot.checked_sub(self.base)? as usize;
        self.entries.get(index).filter(|order| order.open_qty > 0)
    }

    /// Fill up to `take` against the head order. Returns `None` on an
    /// empty level.
    pub fn fill_front(&mut self, take: u16) -> Option<HeadFill> {
        let head = self.entries.front_mut()?;
        let take = take.min(head.open_qty);
        head.open_qty -= take;
        self.open_qty -= u64::from(take);
        let maker = head.id;
        if head.open_qty == 0 {
            self.live -= 1;
            self.sweep_front();
            Some(HeadFill {
                maker,
                maker_filled: true,
            })
        } else {
            Some(HeadFill {
                maker,
                maker_filled: false,
            })
        }
    }

    /// Remove the order at `slot`. Returns the order as it rested, or
    /// `None` when the slot is out of range or already closed.
    pub fn cancel(&mut self, slot: u64) -> Option<Order> {
        let index = slot.checked_sub(self.base)? as usize;
        let entry = self.entries.get_mut(index)?;
        if entry.open_qty == 0 {
            return None;
        }
        let order = *entry;
        entry.open_qty = 0;
        self.live -= 1;
        self.open_qty -= u64::from(order.open_qty);
        self.sweep_front();
        trace!(
            "Level {}: removed order {} from slot {}",
            self.price, order.id, slot
        );
        Some(order)
    }

    /// Live orders, head (earliest) first.
    pub fn iter_live(&self) -> impl DoubleEndedIterator<Item = &Order> {
        self.entries.iter().filter(|order| order.open_qty > 0)
    }

    /// Drop the run of dead entries at the front so the head stays live.
    fn sweep_front(&mut self) {
        while self
            .entries
            .front()
            .is_some_and(|order| order.open_qty == 0)
        {
            self.entries.pop_front();
            self.base += 1;
        }
    }
}
