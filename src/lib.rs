//! # Deterministic Limit Order Matching Engine
//!
//! A single-venue, in-process limit order matching engine written in Rust.
//! The engine accepts order events as text lines, matches them against a
//! resting book under price-time (FIFO) priority, and emits a canonical
//! stream of result events: fills, cancels, book prints, and errors.
//!
//! ## Key Properties
//!
//! - **Deterministic**: identical input streams produce byte-identical
//!   output streams. Prices are scaled integers, books are ordered maps,
//!   and ties break on acceptance order.
//!
//! - **Price-Time Priority**: an incoming order sweeps the most aggressive
//!   opposite levels first; within a level the earliest resting order
//!   trades first. Fills always print at the resting order's price.
//!
//! - **O(1) Amortized Cancel**: a process-wide index maps every order id
//!   to a stable locator inside its price-level queue, so cancels never
//!   scan the book.
//!
//! - **Single-Threaded Core**: one input line is fully processed before
//!   the next begins, with no internal suspension points. Embedders that
//!   need parallel callers wrap the engine in a lock; separate engines
//!   share nothing.
//!
//! ## Design Goals
//!
//! 1. **Correctness**: the book, the level queues, and the id index stay
//!    mutually consistent across every event, and the output stream is
//!    exactly ordered.
//! 2. **Typed boundaries**: wire text is parsed once at the edge into
//!    typed events and rendered once at emission; the engine core never
//!    re-reads strings.
//! 3. **Observability**: mutations trace through `tracing`, and
//!    serializable snapshots expose the book state to embedders.
//!
//! ## Example
//!
//! ```
//! use crossbook::Engine;
//!
//! let mut engine = Engine::new();
//! assert!(engine.apply("O 10000 IBM B 10 100.00000").is_empty());
//! assert_eq!(
//!     engine.apply("O 10001 IBM S 4 100.00000"),
//!     vec!["F 10001 IBM 4 100.00000", "F 10000 IBM 4 100.00000"],
//! );
//! assert_eq!(engine.apply("P"), vec!["P 10000 IBM B 6 100.00000"]);
//! ```

mod engine;
mod orderbook;
mod protocol;

pub use engine::{Engine, EngineSnapshot, Locator, OrderIndex, OrderState};
pub use orderbook::{
    BestQuote, BookError, BookSnapshot, HeadFill, LevelSnapshot, Order, OrderId, Price, PriceLevel,
    Side, Symbol, SymbolBook,
};
pub use protocol::{parse_line, render, Event, Reject, RejectReason, Report};
