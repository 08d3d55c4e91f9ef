//! Serializable book snapshots for embedders.

use super::book::SymbolBook;
use super::level::PriceLevel;
use super::order::Side;
use serde::{Deserialize, Serialize};

/// Aggregate view of one price level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSnapshot {
    /// Price in ticks (wire value times `10^5`).
    pub price: i64,
    /// Total open quantity at this price.
    pub open_quantity: u64,
    /// Number of resting orders queued at this price.
    pub order_count: usize,
}

/// A snapshot of one symbol's book, bids best-first and asks best-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSnapshot {
    pub symbol: String,
    /// Bid levels, highest price first.
    pub bids: Vec<LevelSnapshot>,
    /// Ask levels, lowest price first.
    pub asks: Vec<LevelSnapshot>,
}

impl BookSnapshot {
    /// Best bid price and quantity.
    pub fn best_bid(&self) -> Option<(i64, u64)> {
        self.bids
            .first()
            .map(|level| (level.price, level.open_quantity))
    }

    /// Best ask price and quantity.
    pub fn best_ask(&self) -> Option<(i64, u64)> {
        self.asks
            .first()
            .map(|level| (level.price, level.open_quantity))
    }

    /// Midpoint of best bid and best ask, in ticks.
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid, _)), Some((ask, _))) => Some((bid as f64 + ask as f64) / 2.0),
            _ => None,
        }
    }

    /// Best ask minus best bid, in ticks.
    pub fn spread(&self) -> Option<i64> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid, _)), Some((ask, _))) => Some(ask - bid),
            _ => None,
        }
    }

    /// Total open quantity on the bid side.
    pub fn total_bid_volume(&self) -> u64 {
        self.bids.iter().map(|level| level.open_quantity).sum()
    }

    /// Total open quantity on the ask side.
    pub fn total_ask_volume(&self) -> u64 {
        self.asks.iter().map(|level| level.open_quantity).sum()
    }
}

impl SymbolBook {
    /// Snapshot the book down to `depth` levels per side; `depth == 0`
    /// means the full book.
    pub fn snapshot(&self, depth: usize) -> BookSnapshot {
        let limit = if depth == 0 { usize::MAX } else { depth };
        let view = |level: &PriceLevel| LevelSnapshot {
            price: level.price().ticks(),
            open_quantity: level.open_quantity(),
            order_count: level.order_count(),
        };

        let bids: Vec<LevelSnapshot> = self
            .levels(Side::Bid)
            .rev()
            .take(limit)
            .map(view)
            .collect();

        let asks: Vec<LevelSnapshot> = self.levels(Side::Ask).take(limit).map(view).collect();

        BookSnapshot {
            symbol: self.symbol().to_string(),
            bids,
            asks,
        }
    }
}
