//! Data model for BSV tables.
//!
//! This module provides the [`Value`] enum representing one table cell, the
//! [`Line`] and [`Table`] aliases for the jagged two-dimensional structure,
//! and a debug pretty-printer for decoded tables.
//!
//! ## Core Types
//!
//! - [`Value`]: one cell: null, the empty string, or non-empty text
//! - [`Line`]: an ordered row of values (`Vec<Value>`)
//! - [`Table`]: an ordered sequence of lines (`Vec<Line>`)
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use bsv::Value;
//!
//! let null = Value::Null;
//! let empty = Value::from("");
//! let text = Value::from("hello");
//!
//! // Option maps naturally onto the null/text split
//! let from_none = Value::from(None::<String>);
//! assert!(from_none.is_null());
//! ```
//!
//! ### Inspecting Values
//!
//! ```rust
//! use bsv::Value;
//!
//! let value = Value::from("hello");
//! assert!(value.is_text());
//! assert_eq!(value.as_str(), Some("hello"));
//! assert_eq!(Value::Null.as_str(), None);
//! assert_eq!(Value::Empty.as_str(), Some(""));
//! ```
//!
//! ### Building Tables
//!
//! ```rust
//! use bsv::{bsv, pretty};
//!
//! let table = bsv![["Hello", null, ""], ["Test"]];
//! println!("{}", pretty(&table));
//! ```

use serde::de::Visitor;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One cell of a BSV table.
///
/// The wire format distinguishes null from the empty string (separate marker
/// bytes), so the model does too. It does *not* distinguish the empty string
/// from zero-length text: every constructor collapses `""` into
/// [`Value::Empty`], and the decoder never produces a zero-length
/// [`Value::Text`].
///
/// # Examples
///
/// ```rust
/// use bsv::Value;
///
/// assert_eq!(Value::from(Some("a")), Value::Text("a".to_string()));
/// assert_eq!(Value::from(Some("")), Value::Empty);
/// assert_eq!(Value::from(None::<&str>), Value::Null);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Value {
    /// The absent value, encoded as the single marker byte `0xFD`.
    #[default]
    Null,
    /// The empty string, encoded as the single marker byte `0xFC`.
    Empty,
    /// Non-empty UTF-8 text, encoded as its raw bytes.
    Text(String),
}

/// One row of a table: an ordered sequence of values. Order is significant
/// and duplicates are preserved.
pub type Line = Vec<Value>;

/// A jagged two-dimensional table: an ordered sequence of lines. Lines may
/// have differing lengths, including zero.
pub type Table = Vec<Line>;

impl Value {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is the empty string.
    #[inline]
    #[must_use]
    pub const fn is_empty_string(&self) -> bool {
        matches!(self, Value::Empty)
    }

    /// Returns `true` if the value is non-empty text.
    #[inline]
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Returns the textual content, or `None` for a null value.
    ///
    /// [`Value::Empty`] yields `Some("")`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bsv::Value;
    ///
    /// assert_eq!(Value::from("hi").as_str(), Some("hi"));
    /// assert_eq!(Value::Empty.as_str(), Some(""));
    /// assert_eq!(Value::Null.as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Null => None,
            Value::Empty => Some(""),
            Value::Text(s) => Some(s),
        }
    }

    /// Consumes the value, returning its content as an `Option<String>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bsv::Value;
    ///
    /// assert_eq!(Value::from("hi").into_option(), Some("hi".to_string()));
    /// assert_eq!(Value::Empty.into_option(), Some(String::new()));
    /// assert_eq!(Value::Null.into_option(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn into_option(self) -> Option<String> {
        match self {
            Value::Null => None,
            Value::Empty => Some(String::new()),
            Value::Text(s) => Some(s),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            Value::Empty
        } else {
            Value::Text(value.to_string())
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        if value.is_empty() {
            Value::Empty
        } else {
            Value::Text(value)
        }
    }
}

impl From<Option<&str>> for Value {
    fn from(value: Option<&str>) -> Self {
        match value {
            None => Value::Null,
            Some(s) => Value::from(s),
        }
    }
}

impl From<Option<String>> for Value {
    fn from(value: Option<String>) -> Self {
        match value {
            None => Value::Null,
            Some(s) => Value::from(s),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Empty => write!(f, "\"\""),
            Value::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Empty => serializer.serialize_some(""),
            Value::Text(s) => serializer.serialize_some(s.as_str()),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or null")
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserializer.deserialize_str(ValueVisitor)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }
        }

        deserializer.deserialize_option(ValueVisitor)
    }
}

/// Renders a decoded table as human-readable text, one bracketed line per
/// row with quoted values and bare `null`s.
///
/// Intended for debugging and demos, not for machine consumption; the output
/// is not parsed by anything in this crate.
///
/// # Examples
///
/// ```rust
/// use bsv::{bsv, pretty};
///
/// let table = bsv![["A", null], []];
/// assert_eq!(pretty(&table), "[\n  [\"A\", null]\n  []\n]");
/// ```
#[must_use]
pub fn pretty(table: &[Line]) -> String {
    let mut out = String::from("[");
    for line in table {
        out.push_str("\n  [");
        let mut is_first = true;
        for value in line {
            if !is_first {
                out.push_str(", ");
            }
            is_first = false;
            out.push_str(&value.to_string());
        }
        out.push(']');
    }
    out.push_str("\n]");
    out
}
