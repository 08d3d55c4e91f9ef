//! Literal end-to-end scenarios over the line protocol.

use crossbook::Engine;

/// Apply every line and collect all result lines in order.
fn transcript(lines: &[&str]) -> Vec<String> {
    let mut engine = Engine::new();
    lines
        .iter()
        .flat_map(|line| engine.apply(line))
        .collect()
}

#[test]
fn test_scenario_basic_cross() {
    let out = transcript(&[
        "O 10000 IBM B 10 100.00000",
        "O 10001 IBM B 10 99.00000",
        "O 10002 IBM S 5 101.00000",
        "O 10003 IBM S 5 100.00000",
    ]);
    assert_eq!(out, vec!["F 10003 IBM 5 100.00000", "F 10000 IBM 5 100.00000"]);
}

#[test]
fn test_scenario_duplicate_id() {
    let mut engine = Engine::new();
    assert!(engine.apply("O 10008 IBM S 10 102.00000").is_empty());
    assert_eq!(
        engine.apply("O 10008 IBM S 10 102.00000"),
        vec!["E 10008 Duplicate order id"]
    );
}

#[test]
fn test_scenario_cancel_then_cancel_again() {
    let mut engine = Engine::new();
    assert!(engine.apply("O 10002 IBM S 5 101.00000").is_empty());
    assert_eq!(engine.apply("X 10002"), vec!["X 10002"]);
    assert_eq!(engine.apply("X 10002"), vec!["E 10002 Order not found"]);
}

#[test]
fn test_scenario_multi_level_sweep() {
    let mut engine = Engine::new();
    for line in [
        "O 10007 IBM S 10 101.00000",
        "O 10008 IBM S 10 102.00000",
        "O 10009 IBM S 10 102.00000",
    ] {
        assert!(engine.apply(line).is_empty());
    }

    // 10008 is consumed before 10009: price-time FIFO.
    assert_eq!(
        engine.apply("O 10010 IBM B 13 102.00000"),
        vec![
            "F 10010 IBM 10 101.00000",
            "F 10007 IBM 10 101.00000",
            "F 10010 IBM 3 102.00000",
            "F 10008 IBM 3 102.00000",
        ]
    );
}

#[test]
fn test_scenario_print_ordering() {
    let mut engine = Engine::new();
    for line in [
        "O 10006 IBM B 10 100.00000",
        "O 10001 IBM B 10 99.00000",
        "O 10005 IBM B 10 99.00000",
        "O 10007 IBM S 10 101.00000",
        "O 10008 IBM S 10 102.00000",
        "O 10009 IBM S 10 102.00000",
    ] {
        assert!(engine.apply(line).is_empty());
    }

    assert_eq!(
        engine.apply("P"),
        vec![
            "P 10009 IBM S 10 102.00000",
            "P 10008 IBM S 10 102.00000",
            "P 10007 IBM S 10 101.00000",
            "P 10006 IBM B 10 100.00000",
            "P 10001 IBM B 10 99.00000",
            "P 10005 IBM B 10 99.00000",
        ]
    );
}

#[test]
fn test_scenario_cross_symbol_isolation() {
    let out = transcript(&["O 1 IBM B 10 100.00000", "O 2 AAPL S 10 50.00000"]);
    assert!(out.is_empty());
}

#[test]
fn test_full_example_session() {
    let out = transcript(&[
        "O 10000 IBM B 10 100.00000",
        "O 10001 IBM B 10 99.00000",
        "O 10002 IBM S 5 101.00000",
        "O 10003 IBM S 5 100.00000",
        "O 10004 IBM S 5 100.00000",
        "X 10002",
        "O 10005 IBM B 10 99.00000",
        "O 10006 IBM B 10 100.00000",
        "O 10007 IBM S 10 101.00000",
        "O 10008 IBM S 10 102.00000",
        "O 10008 IBM S 10 102.00000",
        "O 10009 IBM S 10 102.00000",
        "P",
        "O 10010 IBM B 13 102.00000",
    ]);
    assert_eq!(
        out,
        vec![
            "F 10003 IBM 5 100.00000",
            "F 10000 IBM 5 100.00000",
            "F 10004 IBM 5 100.00000",
            "F 10000 IBM 5 100.00000",
            "X 10002",
            "E 10008 Duplicate order id",
            "P 10009 IBM S 10 102.00000",
            "P 10008 IBM S 10 102.00000",
            "P 10007 IBM S 10 101.00000",
            "P 10006 IBM B 10 100.00000",
            "P 10001 IBM B 10 99.00000",
            "P 10005 IBM B 10 99.00000",
            "F 10010 IBM 10 101.00000",
            "F 10007 IBM 10 101.00000",
            "F 10010 IBM 3 102.00000",
            "F 10008 IBM 3 102.00000",
        ]
    );
}

#[test]
fn test_cancel_then_replace_matches_fresh_book() {
    // Cancelling an order and placing a new one at the same price is
    // indistinguishable from never having placed the first.
    let mut with_churn = Engine::new();
    with_churn.apply("O 1 IBM S 5 101.00000");
    with_churn.apply("X 1");
    with_churn.apply("O 2 IBM S 5 101.00000");

    let mut fresh = Engine::new();
    fresh.apply("O 2 IBM S 5 101.00000");

    assert_eq!(with_churn.apply("P"), fresh.apply("P"));
    assert_eq!(
        with_churn.apply("O 3 IBM B 5 101.00000"),
        fresh.apply("O 3 IBM B 5 101.00000")
    );
}

#[test]
fn test_boundary_fields_round_trip() {
    let mut engine = Engine::new();
    assert!(engine.apply("O 1 A B 1 0.00001").is_empty());
    assert!(engine.apply("O 2147483647 ZZZZZZZZ S 65535 9999999.99999").is_empty());

    assert_eq!(
        engine.apply("P"),
        vec![
            "P 1 A B 1 0.00001",
            "P 2147483647 ZZZZZZZZ S 65535 9999999.99999",
        ]
    );
}

#[test]
fn test_error_lines_are_byte_exact() {
    let mut engine = Engine::new();
    let cases = [
        ("Q 5 IBM B 1 1.00000", "E 5 Incorrect action character"),
        ("O 5 IBM B 1", "E 5 Malformed input"),
        ("O 0x1 IBM B 1 1.00000", "E 0x1 Malformed oid"),
        ("O 5 WAYTOOLONG B 1 1.00000", "E 5 Invalid symbol"),
        ("O 5 IBM buy 1 1.00000", "E 5 Incorrect side character"),
        ("O 5 IBM B 70000 1.00000", "E 5 Invalid quantity"),
        ("O 5 IBM B 1 1.0", "E 5 Invalid price"),
        ("X 6", "E 6 Order not found"),
    ];
    for (line, expected) in cases {
        assert_eq!(engine.apply(line), vec![expected.to_string()], "{line:?}");
    }
}
