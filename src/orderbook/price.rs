//! Fixed-point price representation.

use std::fmt;

/// Number of fractional digits carried by a [`Price`].
pub const PRICE_FRACTION_DIGITS: usize = 5;

/// Scaling factor between the wire decimal and the internal tick count.
pub const PRICE_SCALE: i64 = 100_000;

/// Maximum number of integer digits accepted on the wire (7.5 format).
const MAX_INTEGER_DIGITS: usize = 7;

/// A price as a scaled integer: the wire value multiplied by `10^5`.
///
/// Prices are used as ordered map keys on both sides of the book, so they
/// must compare exactly. Two prices are equal iff their tick counts are
/// equal; ordering is plain integer ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(i64);

impl Price {
    /// Build a price directly from a tick count.
    pub const fn from_ticks(ticks: i64) -> Self {
        Price(ticks)
    }

    /// The raw tick count (wire value times `10^5`).
    pub const fn ticks(self) -> i64 {
        self.0
    }

    /// Parse the wire form: `INT "." FRAC` with 1-7 integer digits and
    /// exactly 5 fractional digits, value strictly positive. The integer
    /// part carries no leading zeros except as the single digit `0`.
    pub fn from_wire(text: &str) -> Option<Self> {
        let (int_part, frac_part) = text.split_once('.')?;
        if int_part.is_empty() || int_part.len() > MAX_INTEGER_DIGITS {
            return None;
        }
        if frac_part.len() != PRICE_FRACTION_DIGITS {
            return None;
        }
        if !int_part.bytes().all(|b| b.is_ascii_digit())
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }
        if int_part.len() > 1 && int_part.starts_with('0') {
            return None;
        }
        let integer: i64 = int_part.parse().ok()?;
        let fraction: i64 = frac_part.parse().ok()?;
        let ticks = integer * PRICE_SCALE + fraction;
        if ticks <= 0 {
            return None;
        }
        Some(Price(ticks))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:05}", self.0 / PRICE_SCALE, self.0 % PRICE_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format_round_trip() {
        for text in ["100.00000", "0.00001", "9999999.99999", "1.50000"] {
            let price = Price::from_wire(text).unwrap();
            assert_eq!(price.to_string(), text);
        }
    }

    #[test]
    fn test_ordering_is_integer_ordering() {
        let low = Price::from_wire("99.99999").unwrap();
        let high = Price::from_wire("100.00000").unwrap();
        assert!(low < high);
        assert_eq!(high.ticks(), 10_000_000);
    }

    #[test]
    fn test_rejects_malformed_wire_forms() {
        for text in [
            "100",          // no fraction
            "100.0000",     // four fractional digits
            "100.000000",   // six fractional digits
            ".00001",       // empty integer part
            "12345678.00000", // eight integer digits
            "007.00000",    // leading zeros
            "0.00000",      // zero value
            "-1.00000",     // sign
            "1e2.00000",    // non-digit
            "100,00000",    // wrong separator
        ] {
            assert!(Price::from_wire(text).is_none(), "accepted {text:?}");
        }
    }

    #[test]
    fn test_boundary_values() {
        assert_eq!(Price::from_wire("0.00001").unwrap().ticks(), 1);
        assert_eq!(
            Price::from_wire("9999999.99999").unwrap().ticks(),
            999_999_999_999
        );
    }
}
