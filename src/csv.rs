//! Minimal CSV/TSV parser that produces a [`Table`] of display strings.

use std::path::Path;

use crate::types::{Row, Table};

/// Delimiter for parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Tab,
}

impl Delimiter {
    /// Tab for `.tsv`/`.tab` files, comma for everything else.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("tsv") || ext.eq_ignore_ascii_case("tab") => {
                Self::Tab
            }
            _ => Self::Comma,
        }
    }

    fn as_char(self) -> char {
        match self {
            Self::Comma => ',',
            Self::Tab => '\t',
        }
    }
}

/// Parse CSV/TSV bytes into a [`Table`].
///
/// Blank lines are skipped, cells are trimmed, and short rows are padded
/// with empty cells so every row has the same width.
pub fn parse_delimited(data: &[u8], delim: Delimiter, has_header: bool) -> Table {
    let text = String::from_utf8_lossy(data);
    let sep = delim.as_char();

    let mut rows: Vec<Row> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            split_csv_line(line, sep)
                .into_iter()
                .map(|field| field.trim().to_string())
                .collect()
        })
        .collect();

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut rows {
        row.resize(width, String::new());
    }

    if has_header && !rows.is_empty() {
        let header = rows.remove(0);
        Table::with_header(header, rows)
    } else {
        Table::new(rows)
    }
}

/// Split a CSV line respecting quoted fields.
fn split_csv_line(line: &str, sep: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    // Escaped quote
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(ch);
            }
        } else if ch == '"' {
            in_quotes = true;
        } else if ch == sep {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    fields.push(current);
    fields
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp
)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_with_header() {
        let data = b"NAME,CPU,AGE\nweb-1,250m,3h12m\nweb-2,1,45s";
        let table = parse_delimited(data, Delimiter::Comma, true);
        assert_eq!(table.header.as_ref().unwrap(), &["NAME", "CPU", "AGE"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], ["web-1", "250m", "3h12m"]);
    }

    #[test]
    fn test_parse_tsv() {
        let data = b"a\tb\n1\t2";
        let table = parse_delimited(data, Delimiter::Tab, false);
        assert!(table.header.is_none());
        assert_eq!(table.rows, [["a", "b"], ["1", "2"]]);
    }

    #[test]
    fn test_quoted_csv() {
        let data = b"\"Hello, World\",42\n\"She said \"\"hi\"\"\",0";
        let table = parse_delimited(data, Delimiter::Comma, false);
        assert_eq!(table.rows[0][0], "Hello, World");
        assert_eq!(table.rows[1][0], "She said \"hi\"");
    }

    #[test]
    fn test_ragged_rows_are_padded() {
        let data = b"a,b,c\nd\n\ne,f";
        let table = parse_delimited(data, Delimiter::Comma, false);
        assert_eq!(table.rows.len(), 3);
        assert!(table.rows.iter().all(|r| r.len() == 3));
        assert_eq!(table.rows[1], ["d", "", ""]);
    }

    #[test]
    fn test_empty_csv() {
        let table = parse_delimited(b"", Delimiter::Comma, true);
        assert!(table.rows.is_empty());
        assert!(table.header.is_none());
    }

    #[test]
    fn test_delimiter_from_path() {
        assert_eq!(Delimiter::from_path(Path::new("pods.tsv")), Delimiter::Tab);
        assert_eq!(Delimiter::from_path(Path::new("pods.TAB")), Delimiter::Tab);
        assert_eq!(Delimiter::from_path(Path::new("pods.csv")), Delimiter::Comma);
        assert_eq!(Delimiter::from_path(Path::new("pods")), Delimiter::Comma);
    }
}
