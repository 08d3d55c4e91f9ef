//! Whole-engine snapshots and the canonical print order.

use super::core::Engine;
use crate::orderbook::{BookSnapshot, Order};
use crate::protocol::Report;
use serde::{Deserialize, Serialize};

/// A snapshot of every book the engine holds, symbols in ascending
/// lexical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub books: Vec<BookSnapshot>,
}

impl EngineSnapshot {
    /// The snapshot for one symbol, if present.
    pub fn book(&self, symbol: &str) -> Option<&BookSnapshot> {
        self.books.iter().find(|book| book.symbol == symbol)
    }
}

impl Engine {
    /// Snapshot all books down to `depth` levels per side; `depth == 0`
    /// means full books. Symbols with nothing resting are skipped.
    pub fn snapshot(&self, depth: usize) -> EngineSnapshot {
        EngineSnapshot {
            books: self
                .books
                .values()
                .filter(|book| book.order_count() > 0)
                .map(|book| book.snapshot(depth))
                .collect(),
        }
    }

    /// The `P` result: every resting order, symbols ascending, asks
    /// before bids per symbol, each side's levels descending by price.
    /// Within a level asks list the newest order first and bids the
    /// oldest, reproducing the canonical book print.
    pub(super) fn book_entries(&self) -> Vec<Report> {
        let entry = |order: &Order| Report::Entry {
            id: order.id,
            symbol: order.symbol,
            side: order.side,
            open_qty: order.open_qty,
            price: order.price,
        };

        let mut out = Vec::new();
        for book in self.books.values() {
            out.extend(book.asks_descending().map(entry));
            out.extend(book.bids_descending().map(entry));
        }
        out
    }
}
