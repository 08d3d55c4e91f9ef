//! Canonical wire rendering of result events.

use super::event::Report;

/// Render a result event as one output line, without a trailing newline.
pub fn render(report: &Report) -> String {
    match report {
        Report::Fill {
            id,
            symbol,
            qty,
            price,
        } => format!("F {id} {symbol} {qty} {price}"),
        Report::Canceled { id } => format!("X {id}"),
        Report::Entry {
            id,
            symbol,
            side,
            open_qty,
            price,
        } => format!("P {id} {symbol} {} {open_qty} {price}", side.to_wire()),
        Report::Reject(reject) => reject.to_string(),
    }
}
