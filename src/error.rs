//! Error types for BSV encoding, decoding, and persistence.
//!
//! ## Error Categories
//!
//! - **Structural errors**: the byte stream cannot be partitioned into
//!   values because an empty value slice sits next to a value separator
//!   where the format forbids one
//! - **Encoding errors**: a value slice's bytes are not valid UTF-8
//! - **I/O errors**: file reading/writing failures from the persistence
//!   helpers, surfaced with the underlying [`std::io::Error`] intact
//!
//! Decoding never partially succeeds: any violation aborts the whole call
//! and no table is returned. All decode errors carry the byte offset at
//! which the violation was detected.
//!
//! ## Examples
//!
//! ```rust
//! use bsv::{decode, Error};
//!
//! // Two adjacent value separators bound an empty slice, which is illegal.
//! let result = decode(&[0xFE, 0xFE]);
//! assert!(matches!(result, Err(Error::Structural { .. })));
//! ```

use std::str::Utf8Error;
use thiserror::Error;

/// Represents all possible errors that can occur while decoding BSV bytes
/// or persisting them to disk.
///
/// Decode errors include the byte offset of the violation to aid debugging.
#[derive(Debug, Error)]
pub enum Error {
    /// The byte stream cannot be split into valid value slices: an empty
    /// slice is adjacent to a value separator.
    #[error("invalid value byte sequence at offset {position}: {msg}")]
    Structural { position: usize, msg: String },

    /// A value slice holds bytes that are not valid UTF-8.
    #[error("invalid UTF-8 in value at offset {position}")]
    Encoding {
        position: usize,
        #[source]
        source: Utf8Error,
    },

    /// I/O failure while loading, saving, or appending a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a structural error at the given byte offset.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bsv::Error;
    ///
    /// let err = Error::structural(4, "empty value bounded by a separator");
    /// assert!(err.to_string().contains("offset 4"));
    /// ```
    pub fn structural(position: usize, msg: &str) -> Self {
        Error::Structural {
            position,
            msg: msg.to_string(),
        }
    }

    /// Creates an encoding error for a value whose bytes failed UTF-8
    /// validation. `value_start` is the offset of the value slice within
    /// the stream; the reported position points at the first invalid byte.
    pub fn encoding(value_start: usize, source: Utf8Error) -> Self {
        Error::Encoding {
            position: value_start + source.valid_up_to(),
            source,
        }
    }

    /// Returns the byte offset this decode error points at, if any.
    ///
    /// I/O errors carry no stream offset.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::Structural { position, .. } | Error::Encoding { position, .. } => {
                Some(*position)
            }
            Error::Io(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
