//! Parser for the canonical text format

use std::str::FromStr;

use tracing::trace;

use crate::error::{Error, Result};
use crate::matrix::{Element, SparseMatrix};

/// Parses a matrix from its text form
///
/// The first two lines are the `rows=` and `cols=` headers; every other
/// non-blank line is an entry `(row, col, value)`. Zero-valued entries are
/// accepted and dropped. Negative header values and coordinates are
/// accepted as written.
pub fn parse<T: Element>(text: &str) -> Result<SparseMatrix<T>> {
    let mut lines = text.lines();

    let n_rows = parse_header(lines.next(), 1, "rows")?;
    let n_cols = parse_header(lines.next(), 2, "cols")?;

    let mut matrix = SparseMatrix::with_shape(n_rows, n_cols);

    for (idx, raw) in lines.enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let line_no = idx + 3;
        let (row, col, value) = parse_entry::<T>(line, line_no)?;
        trace!(line = line_no, row, col, "parsed entry");

        if !value.is_zero() {
            matrix.set_element(row, col, value);
        }
    }

    Ok(matrix)
}

fn parse_header(line: Option<&str>, line_no: usize, name: &str) -> Result<i64> {
    let malformed = |reason: String| Error::MalformedHeader {
        line: line_no,
        reason,
    };

    let line = line.ok_or_else(|| malformed(format!("missing `{name}=` header")))?;
    // Anything after a second `=` is ignored
    let value = line
        .splitn(3, '=')
        .nth(1)
        .ok_or_else(|| malformed(format!("expected `{name}=<integer>`, found {line:?}")))?;

    value
        .trim()
        .parse()
        .map_err(|_| malformed(format!("`{name}` value {:?} is not an integer", value.trim())))
}

fn parse_entry<T: Element>(line: &str, line_no: usize) -> Result<(i64, i64, T)> {
    let malformed = || Error::MalformedEntry { line: line_no };

    let inner = line
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(malformed)?;

    let mut fields = inner.split(',').map(str::trim);
    let (row, col, value) = match (fields.next(), fields.next(), fields.next(), fields.next()) {
        (Some(row), Some(col), Some(value), None) => (row, col, value),
        _ => return Err(malformed()),
    };

    let row = row.parse().map_err(|_| malformed())?;
    let col = col.parse().map_err(|_| malformed())?;
    let value = T::from_str_radix(value, 10).map_err(|_| malformed())?;

    Ok((row, col, value))
}

impl<T: Element> FromStr for SparseMatrix<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::IntMatrix;

    #[test]
    fn test_parse_basic() {
        let text = "rows=3\ncols=4\n(0, 1, 5)\n(2,3,-7)\n";
        let matrix: IntMatrix = parse(text).unwrap();

        assert_eq!(matrix.shape(), (3, 4));
        assert_eq!(matrix.nnz(), 2);
        assert_eq!(matrix.get_element(0, 1), 5);
        assert_eq!(matrix.get_element(2, 3), -7);
    }

    #[test]
    fn test_parse_header_whitespace_and_blank_lines() {
        let text = "rows = 2 \ncols=  2\n\n   \n  ( 1 , 0 , 9 )  \n\n";
        let matrix: IntMatrix = text.parse().unwrap();

        assert_eq!(matrix.shape(), (2, 2));
        assert_eq!(matrix.get_element(1, 0), 9);
    }

    #[test]
    fn test_zero_entries_dropped() {
        let matrix: IntMatrix = parse("rows=2\ncols=2\n(0,0,0)\n(1,1,1)\n").unwrap();
        assert_eq!(matrix.nnz(), 1);
    }

    #[test]
    fn test_later_entry_overwrites() {
        let matrix: IntMatrix = parse("rows=2\ncols=2\n(0,0,4)\n(0,0,6)\n").unwrap();
        assert_eq!(matrix.get_element(0, 0), 6);

        // A later zero clears nothing: zero triples are skipped entirely
        let matrix: IntMatrix = parse("rows=2\ncols=2\n(0,0,4)\n(0,0,0)\n").unwrap();
        assert_eq!(matrix.get_element(0, 0), 4);
    }

    #[test]
    fn test_missing_header() {
        assert!(matches!(
            parse::<i64>(""),
            Err(Error::MalformedHeader { line: 1, .. })
        ));
        assert!(matches!(
            parse::<i64>("rows=2\n"),
            Err(Error::MalformedHeader { line: 2, .. })
        ));
    }

    #[test]
    fn test_non_integer_header() {
        assert!(matches!(
            parse::<i64>("rows=two\ncols=2\n"),
            Err(Error::MalformedHeader { line: 1, .. })
        ));
        assert!(matches!(
            parse::<i64>("rows=2\ncols\n"),
            Err(Error::MalformedHeader { line: 2, .. })
        ));
    }

    #[test]
    fn test_negative_header_accepted() {
        let matrix: IntMatrix = parse("rows=-1\ncols=3\n").unwrap();
        assert_eq!(matrix.shape(), (-1, 3));
    }

    #[test]
    fn test_header_value_stops_at_second_equals() {
        let matrix: IntMatrix = parse("rows=2=x\ncols=3=\n(1, 2, 4)\n").unwrap();
        assert_eq!(matrix.shape(), (2, 3));
        assert_eq!(matrix.get_element(1, 2), 4);
    }

    #[test]
    fn test_malformed_entries() {
        for bad in [
            "0,0,5)",
            "(0,0,5",
            "[0,0,5]",
            "(0,0)",
            "(0,0,5,1)",
            "(0,x,5)",
            "(0,0,5.5)",
            "(,0,5)",
        ] {
            let text = format!("rows=2\ncols=2\n(0,0,5)\n{bad}\n");
            assert!(
                matches!(parse::<i64>(&text), Err(Error::MalformedEntry { line: 4 })),
                "expected MalformedEntry for {bad:?}"
            );
        }
    }

    #[test]
    fn test_value_out_of_range_for_element_type() {
        assert!(matches!(
            parse::<i8>("rows=1\ncols=1\n(0,0,300)\n"),
            Err(Error::MalformedEntry { line: 3 })
        ));
    }
}
