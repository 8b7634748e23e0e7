//! # bsv
//!
//! An implementation of BSV (Binary Separated Values): a binary
//! serialization format for jagged two-dimensional tables of optional UTF-8
//! text values.
//!
//! ## What is BSV?
//!
//! BSV stores a table (an ordered sequence of lines, each an ordered
//! sequence of values) as a single byte stream. Instead of quoting or
//! escaping, it reserves the four top byte values as structural markers:
//!
//! | Byte   | Meaning          |
//! |--------|------------------|
//! | `0xFF` | line break       |
//! | `0xFE` | value separator  |
//! | `0xFD` | null value       |
//! | `0xFC` | empty string     |
//!
//! None of these bytes can occur inside valid UTF-8, so values may contain
//! *any* text, including newlines, tabs, NUL bytes, and emoji, with zero
//! escaping and a trivial byte-level scan on decode.
//!
//! ## Key Features
//!
//! - **No escaping**: text round-trips byte-for-byte, whatever it contains
//! - **Null-aware**: null and the empty string are distinct wire values
//! - **Strict decoding**: structural and UTF-8 violations reject the whole
//!   stream with a positioned error; there is no partial or best-effort parse
//! - **File helpers**: save, load, and line-preserving append in [`store`]
//! - **Serde-friendly**: [`Value`] serializes as an optional string, so
//!   tables round-trip through `serde_json` for debugging
//!
//! ## Quick Start
//!
//! ```rust
//! use bsv::{bsv, decode, encode};
//!
//! let table = bsv![
//!     ["Hello", "🌎", null, ""],
//!     ["Test"],
//! ];
//!
//! let bytes = encode(&table);
//! let decoded = decode(&bytes)?;
//! assert_eq!(decoded, table);
//! # Ok::<(), bsv::Error>(())
//! ```
//!
//! ## A format quirk to know about
//!
//! There is no delimiter before the first line or value, so the empty table
//! and a table holding exactly one empty line both encode to zero bytes.
//! The distinction is lost on the wire by design; [`decode`] always maps
//! the empty stream to the one-empty-line form:
//!
//! ```rust
//! use bsv::{bsv, decode, encode};
//!
//! assert_eq!(encode(&bsv![]), encode(&bsv![[]]));
//! assert_eq!(decode(&[])?, bsv![[]]);
//! # Ok::<(), bsv::Error>(())
//! ```
//!
//! ## Concurrency
//!
//! [`encode`] and [`decode`] are pure computations over owned or borrowed
//! buffers; they never block and can run concurrently on independent inputs
//! without coordination. [`store::append`] is the one exception; see its
//! docs for the caller-side serialization obligation.
//!
//! ## Demos
//!
//! Runnable walkthroughs live in the `demos/` directory:
//!
//! - **`quickstart.rs`** - encode, decode, and pretty-print a table
//! - **`persistence.rs`** - save, load, and append files
//!
//! Run one with: `cargo run --example <name>`

pub mod de;
pub mod error;
pub mod format;
pub mod macros;
pub mod ser;
pub mod store;
pub mod value;

pub use de::{decode, Scanner};
pub use error::{Error, Result};
pub use ser::{encode, Encoder};
pub use store::{append, load, save};
pub use value::{pretty, Line, Table, Value};

use std::io;

/// Encodes `table` and writes the bytes to `writer`.
///
/// # Examples
///
/// ```rust
/// use bsv::{bsv, to_writer};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &bsv![["A"]]).unwrap();
/// assert_eq!(buffer, b"A");
/// ```
///
/// # Errors
///
/// Returns an error if writing fails; the encoding itself cannot fail.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(mut writer: W, table: &[Line]) -> Result<()>
where
    W: io::Write,
{
    writer.write_all(&encode(table))?;
    Ok(())
}

/// Reads all bytes from `reader` and decodes them into a [`Table`].
///
/// # Examples
///
/// ```rust
/// use bsv::{bsv, from_reader};
/// use std::io::Cursor;
///
/// let table = from_reader(Cursor::new(b"A\xFE\xFD")).unwrap();
/// assert_eq!(table, bsv![["A", null]]);
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the bytes are not valid BSV.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R) -> Result<Table>
where
    R: io::Read,
{
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    decode(&bytes)
}
