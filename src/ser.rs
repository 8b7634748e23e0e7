//! BSV encoding.
//!
//! This module provides the [`Encoder`] that converts an in-memory
//! [`Table`](crate::Table) into the BSV byte stream.
//!
//! Encoding is total: every well-formed table encodes, and a value's text is
//! valid UTF-8 by construction, so there is no error path.
//!
//! ## Usage
//!
//! Most users should use the high-level [`encode`](crate::encode) function:
//!
//! ```rust
//! use bsv::{bsv, encode};
//!
//! let table = bsv![["A", "B"], ["C"]];
//! let bytes = encode(&table);
//! assert_eq!(bytes, [b'A', 0xFE, b'B', 0xFF, b'C']);
//! ```
//!
//! ## Direct Encoder Usage
//!
//! The encoder can also be driven directly, e.g. to reuse its buffer across
//! several tables:
//!
//! ```rust
//! use bsv::{bsv, Encoder};
//!
//! let mut encoder = Encoder::new();
//! encoder.encode_table(&bsv![["A"]]);
//! let bytes = encoder.into_inner();
//! assert_eq!(bytes, b"A");
//! ```

use crate::format::{EMPTY_STRING_MARKER, LINE_BREAK, NULL_MARKER, VALUE_SEPARATOR};
use crate::value::{Line, Value};

/// The BSV encoder.
///
/// Appends the encoding of one or more tables into an owned byte buffer,
/// handed off with [`Encoder::into_inner`].
pub struct Encoder {
    output: Vec<u8>,
}

impl Encoder {
    /// Creates an encoder with a small pre-allocated buffer.
    #[must_use]
    pub fn new() -> Self {
        // 256 bytes covers typical small tables without reallocation
        Self::with_capacity(256)
    }

    /// Creates an encoder whose buffer starts at the given capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Encoder {
            output: Vec::with_capacity(capacity),
        }
    }

    /// Appends the encoding of `table` to the buffer.
    ///
    /// Lines are joined by the line-break marker and values within a line by
    /// the value-separator marker; neither appears before the first element
    /// or after the last. A null value encodes as the single null marker, an
    /// empty string as the single empty-string marker, and text as its raw
    /// UTF-8 bytes.
    ///
    /// An empty table and a table holding exactly one empty line both encode
    /// to zero bytes. The two shapes are indistinguishable once encoded;
    /// [`decode`](crate::decode) maps the empty stream to the one-empty-line
    /// form.
    pub fn encode_table(&mut self, table: &[Line]) {
        let mut is_first_line = true;
        for line in table {
            if !is_first_line {
                self.output.push(LINE_BREAK);
            }
            is_first_line = false;
            let mut is_first_value = true;
            for value in line {
                if !is_first_value {
                    self.output.push(VALUE_SEPARATOR);
                }
                is_first_value = false;
                self.encode_value(value);
            }
        }
    }

    fn encode_value(&mut self, value: &Value) {
        match value {
            Value::Null => self.output.push(NULL_MARKER),
            Value::Empty => self.output.push(EMPTY_STRING_MARKER),
            // A hand-built Text("") collapses to the empty-string marker so
            // the stream never contains a zero-length text production.
            Value::Text(s) if s.is_empty() => self.output.push(EMPTY_STRING_MARKER),
            Value::Text(s) => self.output.extend_from_slice(s.as_bytes()),
        }
    }

    /// Consumes the encoder, returning the encoded bytes.
    #[must_use]
    pub fn into_inner(self) -> Vec<u8> {
        self.output
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Encodes a table into a freshly allocated BSV byte stream.
///
/// Never fails. See [`Encoder::encode_table`] for the exact byte layout and
/// the degenerate empty-table collapse.
///
/// # Examples
///
/// ```rust
/// use bsv::{bsv, encode};
///
/// assert_eq!(encode(&bsv![[null]]), [0xFD]);
/// assert_eq!(encode(&bsv![[""]]), [0xFC]);
/// assert_eq!(encode(&[]), Vec::<u8>::new());
/// ```
#[must_use]
pub fn encode(table: &[Line]) -> Vec<u8> {
    let mut encoder = Encoder::new();
    encoder.encode_table(table);
    encoder.into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bsv;

    #[test]
    fn test_single_value_encodings() {
        assert_eq!(encode(&bsv![[null]]), [NULL_MARKER]);
        assert_eq!(encode(&bsv![[""]]), [EMPTY_STRING_MARKER]);
        assert_eq!(encode(&bsv![["A"]]), [b'A']);
    }

    #[test]
    fn test_separators_between_values_and_lines() {
        let bytes = encode(&bsv![["A", "B"], ["C"]]);
        assert_eq!(bytes, [b'A', VALUE_SEPARATOR, b'B', LINE_BREAK, b'C']);
    }

    #[test]
    fn test_no_trailing_delimiters() {
        let bytes = encode(&bsv![["A"], ["B"]]);
        assert_eq!(*bytes.last().unwrap(), b'B');
    }

    #[test]
    fn test_degenerate_collapse() {
        assert_eq!(encode(&[]), Vec::<u8>::new());
        assert_eq!(encode(&bsv![[]]), Vec::<u8>::new());
    }

    #[test]
    fn test_zero_length_text_collapses_to_marker() {
        let table = vec![vec![Value::Text(String::new())]];
        assert_eq!(encode(&table), [EMPTY_STRING_MARKER]);
    }

    #[test]
    fn test_multibyte_text_passes_through() {
        let bytes = encode(&bsv![["🌎"]]);
        assert_eq!(bytes, "🌎".as_bytes());
    }

    #[test]
    fn test_buffer_reuse_across_tables() {
        let mut encoder = Encoder::new();
        encoder.encode_table(&bsv![["A"]]);
        encoder.encode_table(&bsv![["B"]]);
        // Two tables appended back to back; the caller owns the framing.
        assert_eq!(encoder.into_inner(), b"AB");
    }
}
