//! The [`bsv!`] macro for building tables from literals.

/// Builds a [`Table`](crate::Table) from a bracketed list of lines.
///
/// Each line is a bracketed list of cell expressions; the bare token `null`
/// produces [`Value::Null`](crate::Value::Null), anything else goes through
/// `Value::from`, so `""` collapses to the empty-string value.
///
/// # Examples
///
/// ```rust
/// use bsv::{bsv, Value};
///
/// let table = bsv![["Hello", null, ""], ["Test"]];
/// assert_eq!(table[0][1], Value::Null);
/// assert_eq!(table[0][2], Value::Empty);
/// assert_eq!(table[1][0], Value::Text("Test".to_string()));
///
/// let empty: bsv::Table = bsv![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! bsv {
    // Cell: the bare null keyword
    (@value null) => {
        $crate::Value::Null
    };

    // Cell: any other expression, converted through Value::from
    (@value $value:expr) => {
        $crate::Value::from($value)
    };

    // Table: zero or more bracketed lines
    ( $( [ $( $value:tt ),* $(,)? ] ),* $(,)? ) => {{
        let table: $crate::Table = vec![
            $( vec![ $( $crate::bsv!(@value $value) ),* ] ),*
        ];
        table
    }};
}
