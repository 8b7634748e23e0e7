//! File persistence for BSV tables.
//!
//! Thin blocking wrappers around [`encode`](crate::encode) and
//! [`decode`](crate::decode): whole-file save and load, plus an append that
//! joins the new table onto an existing file with a single line-break
//! marker.
//!
//! ## Concurrency
//!
//! [`save`] and [`load`] are plain whole-file operations. [`append`] opens
//! the file in append mode and falls back to creating it when missing; the
//! window between the failed open and the create is a race under concurrent
//! appenders, and two appenders interleaving their writes is another. This
//! crate does not lock files. Callers that append to a shared path from
//! more than one process or thread must serialize those appends themselves.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use bsv::{bsv, store};
//!
//! let table = bsv![["Hello", null]];
//! store::save(&table, "data.bsv")?;
//! let loaded = store::load("data.bsv")?;
//! assert_eq!(loaded, table);
//! # Ok::<(), bsv::Error>(())
//! ```

use crate::de::decode;
use crate::error::Result;
use crate::format::LINE_BREAK;
use crate::ser::encode;
use crate::value::{Line, Table};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Writes `encode(table)` to `path`, replacing any existing file.
///
/// # Errors
///
/// Underlying I/O failures (permissions, missing directory, disk full)
/// surface unchanged as [`Error::Io`](crate::Error::Io). No partial-write
/// recovery is attempted.
pub fn save<P: AsRef<Path>>(table: &[Line], path: P) -> Result<()> {
    fs::write(path, encode(table))?;
    Ok(())
}

/// Reads `path` and decodes its contents into a [`Table`].
///
/// # Errors
///
/// I/O failures surface as [`Error::Io`](crate::Error::Io); malformed file
/// contents produce the same structural/encoding errors as
/// [`decode`](crate::decode).
pub fn load<P: AsRef<Path>>(path: P) -> Result<Table> {
    let bytes = fs::read(path)?;
    decode(&bytes)
}

/// Appends `table` to the file at `path`.
///
/// If the file exists, a single line-break marker is written first, so the
/// appended table's first line starts a new line of the stored stream. If it
/// does not exist, the file is created and the encoded bytes are written
/// with no leading marker; appending to a fresh path is equivalent to
/// [`save`].
///
/// The existing file's contents are not validated; appending to a file that
/// does not hold BSV data produces a stream that will fail to decode later.
///
/// Not safe under concurrent appenders; see the module docs.
///
/// # Errors
///
/// Underlying I/O failures surface unchanged as
/// [`Error::Io`](crate::Error::Io).
pub fn append<P: AsRef<Path>>(table: &[Line], path: P) -> Result<()> {
    // Open-for-append on the existing file is atomic; only the fallback
    // create leaves a check-then-act window.
    let (mut file, existed) = match OpenOptions::new().append(true).open(&path) {
        Ok(file) => (file, true),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            let file = OpenOptions::new().write(true).create_new(true).open(&path)?;
            (file, false)
        }
        Err(err) => return Err(err.into()),
    };
    if existed {
        file.write_all(&[LINE_BREAK])?;
    }
    file.write_all(&encode(table))?;
    Ok(())
}
