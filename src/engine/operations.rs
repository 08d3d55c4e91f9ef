//! Engine operations: apply a line, place an order, cancel an order.

use super::core::Engine;
use super::index::Locator;
use crate::orderbook::{Order, OrderId, Price, Side, Symbol, SymbolBook};
use crate::protocol::{self, Event, Reject, RejectReason, Report};
use tracing::{debug, trace};

impl Engine {
    /// Process one input line and return the rendered result lines, in
    /// emission order.
    pub fn apply(&mut self, line: &str) -> Vec<String> {
        let reports = match protocol::parse_line(line) {
            Ok(event) => self.process(event),
            Err(reject) => vec![Report::Reject(reject)],
        };
        reports.iter().map(protocol::render).collect()
    }

    /// Typed counterpart of [`Engine::apply`].
    pub fn process(&mut self, event: Event) -> Vec<Report> {
        match event {
            Event::Submit {
                id,
                symbol,
                side,
                qty,
                price,
            } => self.submit(id, symbol, side, qty, price),
            Event::Cancel { id } => self.cancel(id),
            Event::Print => self.book_entries(),
        }
    }

    /// Accept a new order: match it against the opposite side, then rest
    /// any residual.
    fn submit(
        &mut self,
        id: OrderId,
        symbol: Symbol,
        side: Side,
        qty: u16,
        price: Price,
    ) -> Vec<Report> {
        if self.index.contains(id) {
            debug!("rejecting order {id}: id already accepted");
            return vec![Report::Reject(Reject::for_order(
                id,
                RejectReason::DuplicateOrderId,
            ))];
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        let mut order = Order {
            id,
            symbol,
            side,
            quantity: qty,
            open_qty: qty,
            price,
            seq,
        };
        trace!("accepted order {id} {symbol} {side} {qty} @ {price} (seq {seq})");

        let mut out = Vec::new();
        let book = self
            .books
            .entry(symbol)
            .or_insert_with(|| SymbolBook::new(symbol));
        Self::match_incoming(book, &mut self.index, &mut order, &mut out);

        if order.open_qty > 0 {
            let slot = book.insert(order);
            let registered = self.index.insert(
                id,
                Locator {
                    symbol,
                    side,
                    price,
                    slot,
                },
            );
            debug_assert!(registered, "duplicate id past the acceptance gate");
        } else {
            self.index.close(id);
        }
        out
    }

    /// Cancel a resting order through its locator.
    fn cancel(&mut self, id: OrderId) -> Vec<Report> {
        let Some(locator) = self.index.remove(id) else {
            debug!("rejecting cancel {id}: not resting");
            return vec![Report::Reject(Reject::for_order(
                id,
                RejectReason::OrderNotFound,
            ))];
        };

        let removed = match self.books.get_mut(&locator.symbol) {
            Some(book) => book.remove(locator.side, locator.price, locator.slot),
            None => {
                debug!("cancel {id}: no book for {}", locator.symbol);
                return vec![Report::Reject(Reject::for_order(
                    id,
                    RejectReason::OrderNotFound,
                ))];
            }
        };

        match removed {
            Ok(order) => {
                trace!(
                    "cancelled order {id} with {} open at {}",
                    order.open_qty, order.price
                );
                vec![Report::Canceled { id }]
            }
            Err(err) => {
                debug!("cancel {id} failed: {err}");
                vec![Report::Reject(Reject::for_order(
                    id,
                    RejectReason::OrderNotFound,
                ))]
            }
        }
    }
}
