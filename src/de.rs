//! BSV decoding.
//!
//! This module provides [`decode`], which parses a BSV byte stream back into
//! a [`Table`], and the [`Scanner`] it is built on.
//!
//! ## Overview
//!
//! Decoding is a single left-to-right pass with no backtracking. The scanner
//! repeatedly finds the next delimiter byte (`0xFE` or `0xFF`); the bytes
//! strictly between two delimiters form one value slice, classified as:
//!
//! - the single null marker byte → null value
//! - the single empty-string marker byte → empty string
//! - one or more other bytes → strict UTF-8 text (malformed bytes are an
//!   encoding error)
//! - zero bytes → no value at all, legal only when both neighboring
//!   delimiters are line breaks or the stream edge (see
//!   [`empty_value_allowed`])
//!
//! Each [`Scanner::step`] reports the classified value (if any) together
//! with the boundary that closed it, so the control flow in [`decode`] stays
//! a flat loop and the final pending line is pushed in one visible place.
//!
//! ## Usage
//!
//! ```rust
//! use bsv::{bsv, decode, encode};
//!
//! let table = bsv![["Hello", null], ["World"]];
//! let decoded = decode(&encode(&table)).unwrap();
//! assert_eq!(decoded, table);
//! ```
//!
//! Errors abort the whole call; no partial table is returned:
//!
//! ```rust
//! use bsv::{decode, Error};
//!
//! assert!(matches!(decode(&[0xFE]), Err(Error::Structural { .. })));
//! assert!(matches!(decode(&[0x80]), Err(Error::Encoding { .. })));
//! ```

use crate::error::{Error, Result};
use crate::format::{is_delimiter, EMPTY_STRING_MARKER, LINE_BREAK, NULL_MARKER};
use crate::value::{Line, Table, Value};

/// The delimiter kind that closed a value slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Boundary {
    /// The slice was closed by `0xFE`; the current line continues.
    ValueSeparator,
    /// The slice was closed by `0xFF`; the current line is complete.
    LineBreak,
    /// The slice ran to the end of the stream.
    EndOfStream,
}

/// The result of one scanner step: at most one decoded value, plus the
/// boundary that closed its slice. `value` is `None` exactly when the slice
/// was empty in a position where the format allows that.
#[derive(Debug)]
pub struct ScanStep {
    pub value: Option<Value>,
    pub boundary: Boundary,
}

/// Cursor-based scanner over a BSV byte stream.
///
/// Borrows the input for the duration of the scan and allocates only for
/// decoded text. Used by [`decode`]; exposed for callers that want to drive
/// the scan themselves (e.g. to count lines without building a table).
pub struct Scanner<'a> {
    bytes: &'a [u8],
    /// Start of the next value slice.
    pos: usize,
    /// Delimiter byte that closed the previous slice; `None` at stream start.
    opened_by: Option<u8>,
}

impl<'a> Scanner<'a> {
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Scanner {
            bytes,
            pos: 0,
            opened_by: None,
        }
    }

    /// Scans the next value slice and classifies it.
    ///
    /// After a step returning [`Boundary::EndOfStream`] the scanner is
    /// exhausted; further calls keep reporting end of stream.
    ///
    /// # Errors
    ///
    /// [`Error::Structural`] for an empty slice next to a value separator,
    /// [`Error::Encoding`] for text that is not valid UTF-8.
    pub fn step(&mut self) -> Result<ScanStep> {
        // pos sits one past the final delimiter once the stream is
        // exhausted; clamping keeps repeated steps at end of stream valid.
        let start = self.pos.min(self.bytes.len());
        let mut end = start;
        while end < self.bytes.len() && !is_delimiter(self.bytes[end]) {
            end += 1;
        }
        let closing = self.bytes.get(end).copied();

        let value = self.classify(&self.bytes[start..end], start, closing)?;
        self.opened_by = closing;
        self.pos = end + 1;

        let boundary = match closing {
            None => Boundary::EndOfStream,
            Some(LINE_BREAK) => Boundary::LineBreak,
            Some(_) => Boundary::ValueSeparator,
        };
        Ok(ScanStep { value, boundary })
    }

    fn classify(&self, slice: &[u8], start: usize, closing: Option<u8>) -> Result<Option<Value>> {
        match slice {
            [NULL_MARKER] => Ok(Some(Value::Null)),
            [EMPTY_STRING_MARKER] => Ok(Some(Value::Empty)),
            [] => {
                if empty_value_allowed(self.opened_by, closing) {
                    Ok(None)
                } else {
                    Err(Error::structural(
                        start,
                        "empty value bounded by a value separator",
                    ))
                }
            }
            text => {
                let text = std::str::from_utf8(text).map_err(|e| Error::encoding(start, e))?;
                Ok(Some(Value::Text(text.to_string())))
            }
        }
    }
}

/// The adjacency rule for zero-length value slices.
///
/// An empty slice stands for "no value here" and is only legal when both the
/// delimiter before it and the delimiter after it are line breaks, with the
/// stream edge counting as a line break on either side. Every other empty
/// slice (one touching a value separator) is a structural error.
///
/// `before`/`after` are the neighboring delimiter bytes, `None` at the
/// stream edge.
#[inline]
#[must_use]
pub fn empty_value_allowed(before: Option<u8>, after: Option<u8>) -> bool {
    before.map_or(true, |b| b == LINE_BREAK) && after.map_or(true, |b| b == LINE_BREAK)
}

/// Decodes a BSV byte stream into a [`Table`].
///
/// The decoder borrows `bytes` read-only and returns an owned table. Any
/// violation aborts the whole call; there is no repair mode and no partial
/// result.
///
/// The line in progress is always emitted when the scan ends, so the
/// zero-length stream decodes to one line with zero values (`vec![vec![]]`),
/// never to a zero-line table. This mirrors the encoder, for which an empty
/// table and a single-empty-line table produce identical (empty) output.
///
/// # Errors
///
/// [`Error::Structural`] if the stream cannot be partitioned into valid
/// value slices, [`Error::Encoding`] if a value's bytes are not UTF-8.
///
/// # Examples
///
/// ```rust
/// use bsv::{bsv, decode};
///
/// let table = decode(&[b'A', 0xFE, 0xFD]).unwrap();
/// assert_eq!(table, bsv![["A", null]]);
///
/// assert_eq!(decode(&[]).unwrap(), bsv![[]]);
/// ```
pub fn decode(bytes: &[u8]) -> Result<Table> {
    let mut table = Table::new();
    let mut line = Line::new();
    let mut scanner = Scanner::new(bytes);
    loop {
        let ScanStep { value, boundary } = scanner.step()?;
        if let Some(value) = value {
            line.push(value);
        }
        match boundary {
            Boundary::ValueSeparator => {}
            Boundary::LineBreak => table.push(std::mem::take(&mut line)),
            Boundary::EndOfStream => break,
        }
    }
    // The pending line is emitted unconditionally, even when empty.
    table.push(line);
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::VALUE_SEPARATOR;

    #[test]
    fn test_empty_value_allowed_predicate() {
        // Stream edges and line breaks permit the empty slice.
        assert!(empty_value_allowed(None, None));
        assert!(empty_value_allowed(None, Some(LINE_BREAK)));
        assert!(empty_value_allowed(Some(LINE_BREAK), None));
        assert!(empty_value_allowed(Some(LINE_BREAK), Some(LINE_BREAK)));
        // A value separator on either side forbids it.
        assert!(!empty_value_allowed(Some(VALUE_SEPARATOR), None));
        assert!(!empty_value_allowed(None, Some(VALUE_SEPARATOR)));
        assert!(!empty_value_allowed(
            Some(VALUE_SEPARATOR),
            Some(LINE_BREAK)
        ));
        assert!(!empty_value_allowed(
            Some(LINE_BREAK),
            Some(VALUE_SEPARATOR)
        ));
    }

    #[test]
    fn test_scanner_steps_through_two_lines() {
        let bytes = [b'A', VALUE_SEPARATOR, b'B', LINE_BREAK, b'C'];
        let mut scanner = Scanner::new(&bytes);

        let step = scanner.step().unwrap();
        assert_eq!(step.value, Some(Value::Text("A".to_string())));
        assert_eq!(step.boundary, Boundary::ValueSeparator);

        let step = scanner.step().unwrap();
        assert_eq!(step.value, Some(Value::Text("B".to_string())));
        assert_eq!(step.boundary, Boundary::LineBreak);

        let step = scanner.step().unwrap();
        assert_eq!(step.value, Some(Value::Text("C".to_string())));
        assert_eq!(step.boundary, Boundary::EndOfStream);
    }

    #[test]
    fn test_scanner_skips_empty_slice_between_line_breaks() {
        let bytes = [LINE_BREAK, LINE_BREAK];
        let mut scanner = Scanner::new(&bytes);
        for expected in [Boundary::LineBreak, Boundary::LineBreak, Boundary::EndOfStream] {
            let step = scanner.step().unwrap();
            assert_eq!(step.value, None);
            assert_eq!(step.boundary, expected);
        }
    }

    #[test]
    fn test_scanner_is_exhausted_after_end_of_stream() {
        let mut scanner = Scanner::new(b"A");
        assert_eq!(scanner.step().unwrap().boundary, Boundary::EndOfStream);
        for _ in 0..3 {
            let step = scanner.step().unwrap();
            assert_eq!(step.value, None);
            assert_eq!(step.boundary, Boundary::EndOfStream);
        }
    }

    #[test]
    fn test_empty_stream_decodes_to_one_empty_line() {
        assert_eq!(decode(&[]).unwrap(), vec![vec![]]);
    }

    #[test]
    fn test_lone_line_break_decodes_to_two_empty_lines() {
        assert_eq!(decode(&[LINE_BREAK]).unwrap(), vec![vec![], vec![]]);
    }

    #[test]
    fn test_lone_separator_is_structural_error() {
        let err = decode(&[VALUE_SEPARATOR]).unwrap_err();
        assert!(matches!(err, Error::Structural { position: 0, .. }));
    }

    #[test]
    fn test_adjacent_separators_are_structural_error() {
        let err = decode(&[VALUE_SEPARATOR, VALUE_SEPARATOR]).unwrap_err();
        assert!(matches!(err, Error::Structural { position: 0, .. }));
    }

    #[test]
    fn test_separator_adjacent_to_line_break_is_structural_error() {
        // Line break immediately followed by a separator: the empty slice
        // between them opens on 0xFF but closes on 0xFE.
        let err = decode(&[b'A', LINE_BREAK, VALUE_SEPARATOR, b'B']).unwrap_err();
        assert!(matches!(err, Error::Structural { position: 2, .. }));

        // Separator immediately followed by a line break.
        let err = decode(&[b'A', VALUE_SEPARATOR, LINE_BREAK, b'B']).unwrap_err();
        assert!(matches!(err, Error::Structural { position: 2, .. }));
    }

    #[test]
    fn test_invalid_utf8_is_encoding_error() {
        let err = decode(&[0x80]).unwrap_err();
        assert!(matches!(err, Error::Encoding { position: 0, .. }));
    }

    #[test]
    fn test_encoding_error_points_at_first_bad_byte() {
        // "AB" followed by a stray continuation byte.
        let err = decode(&[b'A', b'B', 0x80]).unwrap_err();
        assert_eq!(err.position(), Some(2));
    }

    #[test]
    fn test_marker_byte_inside_text_is_encoding_error() {
        // A null marker that is part of a longer slice is not a null value;
        // it is a byte UTF-8 rejects.
        let err = decode(&[b'A', NULL_MARKER]).unwrap_err();
        assert!(matches!(err, Error::Encoding { .. }));
    }

    #[test]
    fn test_no_partial_table_on_error() {
        // Valid first line, broken second line: the whole call fails.
        let bytes = [b'A', LINE_BREAK, VALUE_SEPARATOR, VALUE_SEPARATOR];
        assert!(decode(&bytes).is_err());
    }
}
