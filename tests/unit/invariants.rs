//! Structural invariants checked after every event of a mixed workload.

use crossbook::{Engine, OrderId};

/// Ledger mirroring the quantity-conservation invariant: the open
/// quantity resting in the books always equals accepted quantity minus
/// filled quantity minus cancelled open quantity.
#[derive(Default)]
struct Ledger {
    accepted: u64,
    filled: u64,
    cancelled: u64,
}

impl Ledger {
    /// Record a line and its results. Must be called with the engine
    /// state *before* the line is applied, so cancelled open quantity can
    /// be observed.
    fn step(&mut self, engine: &mut Engine, line: &str) -> Vec<String> {
        let pending_cancel = line
            .strip_prefix("X ")
            .and_then(|oid| oid.parse().ok())
            .and_then(|oid| engine.order(OrderId(oid)))
            .map(|order| u64::from(order.open_qty));

        let out = engine.apply(line);

        if line.starts_with("O ") && !out.iter().any(|l| l.starts_with("E ")) {
            let qty: u64 = line
                .split(' ')
                .nth(4)
                .and_then(|t| t.parse().ok())
                .unwrap();
            self.accepted += qty;
        }
        for result in &out {
            if result.starts_with("F ") {
                let qty: u64 = result.split(' ').nth(3).and_then(|t| t.parse().ok()).unwrap();
                self.filled += qty;
            }
            if result.starts_with("X ") {
                self.cancelled += pending_cancel.unwrap_or(0);
            }
        }
        out
    }

    fn resting(&self) -> u64 {
        // Each fill event carries one side's quantity, and every trade
        // emits two events, so the filled tally already counts both the
        // taker's and the maker's depletion.
        self.accepted - self.filled - self.cancelled
    }
}

#[test]
fn test_invariants_hold_across_mixed_workload() {
    let lines = [
        "O 1 IBM B 10 100.00000",
        "O 2 IBM B 20 99.00000",
        "O 3 IBM S 15 101.00000",
        "O 4 AAPL B 10 50.00000",
        "O 5 IBM S 5 100.00000",   // fills against 1
        "X 2",
        "O 6 IBM S 30 99.50000",   // fills the rest of 1, rests
        "O 7 IBM B 40 101.00000",  // sweeps 6 then 3, rests
        "X 3",                     // already filled -> error
        "O 8 AAPL S 10 50.00000",  // fills 4 exactly
        "P",
        "O 9 IBM B 1 100.00000",
        "X 9",
        "P",
    ];

    let mut engine = Engine::new();
    let mut ledger = Ledger::default();
    for line in lines {
        ledger.step(&mut engine, line);
        engine.assert_invariants();

        let snapshot = engine.snapshot(0);
        let resting: u64 = snapshot
            .books
            .iter()
            .map(|book| book.total_bid_volume() + book.total_ask_volume())
            .sum();
        assert_eq!(resting, ledger.resting(), "after {line:?}");
    }
}

#[test]
fn test_book_never_crossed_between_events() {
    let lines = [
        "O 1 IBM B 10 100.00000",
        "O 2 IBM S 10 100.00000",
        "O 3 IBM B 10 105.00000",
        "O 4 IBM S 25 95.00000",
        "O 5 IBM B 1 95.00000",
        "O 6 IBM S 1 200.00000",
    ];

    let mut engine = Engine::new();
    for line in lines {
        engine.apply(line);
        if let (Some(bid), Some(ask)) = (engine.best_bid("IBM"), engine.best_ask("IBM")) {
            assert!(bid < ask, "crossed after {line:?}: {bid} >= {ask}");
        }
        engine.assert_invariants();
    }
}

#[test]
fn test_index_matches_resting_orders() {
    let mut engine = Engine::new();
    for line in [
        "O 1 IBM B 10 100.00000",
        "O 2 IBM B 10 100.00000",
        "O 3 IBM S 10 101.00000",
        "X 1",
        "O 4 IBM S 5 100.00000", // partially fills 2
    ] {
        engine.apply(line);
    }

    assert_eq!(engine.resting_order_count(), 2);
    assert_eq!(engine.order(OrderId(1)), None);
    assert_eq!(engine.order(OrderId(2)).unwrap().open_qty, 5);
    assert_eq!(engine.order(OrderId(3)).unwrap().open_qty, 10);
    assert_eq!(engine.order(OrderId(4)), None);
    engine.assert_invariants();
}
