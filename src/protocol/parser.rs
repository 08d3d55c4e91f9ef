//! Lexer and validator for the input line protocol.
//!
//! A line is tokenized on runs of ASCII spaces and validated field by
//! field into a typed [`Event`]. Parsing happens exactly once at this
//! boundary; the engine never re-reads wire text.

use super::event::{Event, Reject, RejectReason};
use crate::orderbook::{OrderId, Price, Side, Symbol};

/// Largest accepted order id (positive 32-bit integer range).
const MAX_OID: u64 = i32::MAX as u64;

/// Parse one input line into an [`Event`], or a [`Reject`] carrying the
/// canonical error text.
///
/// Trailing newlines are tolerated. Tabs and any whitespace other than the
/// ASCII space are malformed.
pub fn parse_line(line: &str) -> Result<Event, Reject> {
    let line = trim_line_ending(line);

    if line.chars().any(|c| c.is_whitespace() && c != ' ') {
        return Err(Reject::new(second_token(line), RejectReason::MalformedInput));
    }

    let tokens: Vec<&str> = line.split(' ').filter(|t| !t.is_empty()).collect();
    let oid_text = tokens.get(1).copied().unwrap_or("");

    let action = match tokens.first() {
        Some(token) => *token,
        None => return Err(Reject::new("", RejectReason::MalformedInput)),
    };

    match action {
        "O" => {
            if tokens.len() != 6 {
                return Err(Reject::new(oid_text, RejectReason::MalformedInput));
            }
            let id = parse_oid(tokens[1])
                .ok_or_else(|| Reject::new(tokens[1], RejectReason::MalformedOid))?;
            let symbol = Symbol::from_wire(tokens[2])
                .ok_or_else(|| Reject::for_order(id, RejectReason::InvalidSymbol))?;
            let side = Side::from_wire(tokens[3])
                .ok_or_else(|| Reject::for_order(id, RejectReason::InvalidSide))?;
            let qty = parse_qty(tokens[4])
                .ok_or_else(|| Reject::for_order(id, RejectReason::InvalidQuantity))?;
            let price = Price::from_wire(tokens[5])
                .ok_or_else(|| Reject::for_order(id, RejectReason::InvalidPrice))?;
            Ok(Event::Submit {
                id,
                symbol,
                side,
                qty,
                price,
            })
        }
        "X" => {
            if tokens.len() != 2 {
                return Err(Reject::new(oid_text, RejectReason::MalformedInput));
            }
            let id = parse_oid(tokens[1])
                .ok_or_else(|| Reject::new(tokens[1], RejectReason::MalformedOid))?;
            Ok(Event::Cancel { id })
        }
        "P" => {
            if tokens.len() != 1 {
                return Err(Reject::new(oid_text, RejectReason::MalformedInput));
            }
            Ok(Event::Print)
        }
        _ => Err(Reject::new(oid_text, RejectReason::UnknownAction)),
    }
}

fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// The second space-separated field, used as the oid of a reject when the
/// line never reached field validation.
fn second_token(line: &str) -> &str {
    line.split(|c: char| c.is_whitespace())
        .filter(|t| !t.is_empty())
        .nth(1)
        .unwrap_or("")
}

/// `[1-9][0-9]{0,9}`, value in `1..=2^31-1`.
fn parse_oid(token: &str) -> Option<OrderId> {
    let value = parse_positive_decimal(token, 10)?;
    if value > MAX_OID {
        return None;
    }
    Some(OrderId(value as u32))
}

/// `[1-9][0-9]{0,4}`, value in `1..=65535`.
fn parse_qty(token: &str) -> Option<u16> {
    let value = parse_positive_decimal(token, 5)?;
    u16::try_from(value).ok()
}

/// A decimal with no sign, no leading zero, and at most `max_digits`
/// digits.
fn parse_positive_decimal(token: &str, max_digits: usize) -> Option<u64> {
    if token.is_empty() || token.len() > max_digits {
        return None;
    }
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if token.starts_with('0') {
        return None;
    }
    token.parse().ok()
}
