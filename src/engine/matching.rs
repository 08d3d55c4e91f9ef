//! The core matching walk: price-time priority with multi-level sweeps.

use super::core::Engine;
use super::index::OrderIndex;
use crate::orderbook::{Order, SymbolBook};
use crate::protocol::Report;
use tracing::trace;

impl Engine {
    /// Match `taker` against the opposite side of `book` while its price
    /// crosses and quantity remains.
    ///
    /// One routine serves both sides: the best-price direction and the
    /// cross predicate are the only side-dependent pieces, and both live
    /// on [`crate::orderbook::Side`]. Each trade emits the taker's fill
    /// line first, then the maker's, always at the maker's resting price.
    /// Fully filled makers are removed from the book and closed in the
    /// index. The walk never fails partway: it runs until the taker is
    /// exhausted or the book stops crossing.
    pub(super) fn match_incoming(
        book: &mut SymbolBook,
        index: &mut OrderIndex,
        taker: &mut Order,
        out: &mut Vec<Report>,
    ) {
        let opposite = taker.side.opposite();

        while taker.open_qty > 0 {
            let quote = match book.best(opposite) {
                Some(quote) => quote,
                None => break,
            };
            if !taker.side.crosses(taker.price, quote.price) {
                break;
            }

            let take = taker.open_qty.min(quote.open_qty);
            trace!(
                "match {}: {} x {} against {} @ {}",
                taker.symbol, taker.id, take, quote.id, quote.price
            );
            out.push(Report::Fill {
                id: taker.id,
                symbol: taker.symbol,
                qty: take,
                price: quote.price,
            });
            out.push(Report::Fill {
                id: quote.id,
                symbol: taker.symbol,
                qty: take,
                price: quote.price,
            });

            taker.open_qty -= take;
            let fill = match book.fill_best(opposite, take) {
                Some(fill) => fill,
                None => break,
            };
            if fill.maker_filled {
                index.close(fill.maker);
            }
        }
    }
}
