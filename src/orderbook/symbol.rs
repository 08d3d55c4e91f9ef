//! Compact instrument symbol.

use std::fmt;
use std::str;

/// Maximum symbol length on the wire.
pub const MAX_SYMBOL_LEN: usize = 8;

/// An instrument symbol: 1-8 ASCII alphanumeric bytes stored inline.
///
/// Comparison is byte-exact and case-preserving. The derived `Ord` compares
/// the padded buffer first, which yields ascending lexical order because
/// the zero padding sorts below every alphanumeric byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    buf: [u8; MAX_SYMBOL_LEN],
    len: u8,
}

impl Symbol {
    /// Parse and validate the wire form. Returns `None` for an empty,
    /// oversized, or non-alphanumeric symbol.
    pub fn from_wire(text: &str) -> Option<Self> {
        let bytes = text.as_bytes();
        if bytes.is_empty() || bytes.len() > MAX_SYMBOL_LEN {
            return None;
        }
        if !bytes.iter().all(|b| b.is_ascii_alphanumeric()) {
            return None;
        }
        let mut buf = [0u8; MAX_SYMBOL_LEN];
        buf[..bytes.len()].copy_from_slice(bytes);
        Some(Symbol {
            buf,
            len: bytes.len() as u8,
        })
    }

    /// The symbol text. The buffer is validated ASCII at construction.
    pub fn as_str(&self) -> &str {
        str::from_utf8(&self.buf[..self.len as usize]).unwrap_or("")
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
