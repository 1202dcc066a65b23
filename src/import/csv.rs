//! CSV import: RFC4180-style parser plus the card extraction rules.
//!
//! The parser handles double-quote-escaped quotes, commas inside quoted
//! fields and embedded newlines inside quoted fields. `\n` and `\r\n` end a
//! row only outside quotes. Fields are trimmed as they are read and rows
//! whose fields are all empty are dropped.

use super::normalize::RawCard;
use crate::error::ImportError;

/// Parses CSV text into rows of trimmed fields.
pub fn parse_rows(text: &str) -> Result<Vec<Vec<String>>, ImportError> {
    if text.trim().is_empty() {
        return Err(ImportError::EmptyCsv);
    }

    let chars: Vec<char> = text.chars().collect();
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut end_row = |row: &mut Vec<String>, field: &mut String| {
        row.push(field.trim().to_string());
        field.clear();
        if row.iter().any(|f| !f.is_empty()) {
            rows.push(std::mem::take(row));
        } else {
            row.clear();
        }
    };

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();
        match c {
            '"' => {
                if in_quotes && next == Some('"') {
                    // Escaped quote
                    field.push('"');
                    i += 1;
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                row.push(field.trim().to_string());
                field.clear();
            }
            '\n' if !in_quotes => end_row(&mut row, &mut field),
            '\r' if !in_quotes && next == Some('\n') => {
                i += 1;
                end_row(&mut row, &mut field);
            }
            _ => field.push(c),
        }
        i += 1;
    }

    // Flush the last row when the file does not end with a newline.
    if !field.is_empty() || !row.is_empty() {
        end_row(&mut row, &mut field);
    }

    Ok(rows)
}

/// Returns true if the first row is a header to skip.
fn is_header(row: &[String]) -> bool {
    row.first().is_some_and(|cell| {
        let cell = cell.to_lowercase();
        cell == "deck_name" || cell == "front" || cell == "question"
    })
}

/// Extracts cards from CSV text.
///
/// Supported row shapes: 4+ columns (deck_name, deck_description, front,
/// back - deck name and description are discarded) or exactly 2 columns
/// (front, back). Rows of other lengths are skipped, as are rows with both
/// front and back empty.
pub fn parse_cards(text: &str) -> Result<Vec<RawCard>, ImportError> {
    let rows = parse_rows(text)?;
    if rows.is_empty() {
        return Err(ImportError::EmptyCsv);
    }

    let start = if is_header(&rows[0]) { 1 } else { 0 };
    let mut cards = Vec::new();

    for row in rows.into_iter().skip(start) {
        let (front, back) = match row.len() {
            n if n >= 4 => (&row[2], &row[3]),
            2 => (&row[0], &row[1]),
            _ => continue,
        };
        if front.is_empty() && back.is_empty() {
            continue;
        }
        cards.push(RawCard {
            id: None,
            front: Some(front.clone()),
            back: Some(back.clone()),
        });
    }

    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(text: &str) -> Vec<(String, String)> {
        parse_cards(text)
            .unwrap()
            .into_iter()
            .map(|c| (c.front.unwrap_or_default(), c.back.unwrap_or_default()))
            .collect()
    }

    #[test]
    fn test_two_column_rows() {
        let cards = pairs("Q1,A1\nQ2,A2\n");

        assert_eq!(
            cards,
            vec![
                ("Q1".to_string(), "A1".to_string()),
                ("Q2".to_string(), "A2".to_string())
            ]
        );
    }

    #[test]
    fn test_four_column_rows_discard_deck_columns() {
        let cards = pairs("deck_name,deck_description,front,back\n\"D1\",\"desc\",\"Q\",\"A\"\n");

        assert_eq!(cards, vec![("Q".to_string(), "A".to_string())]);
    }

    #[test]
    fn test_header_detection_is_case_insensitive() {
        assert_eq!(pairs("FRONT,back\nQ,A\n").len(), 1);
        assert_eq!(pairs("Question,Answer\nQ,A\n").len(), 1);
        // Not a header, so the first row is data too.
        assert_eq!(pairs("hello,world\nQ,A\n").len(), 2);
    }

    #[test]
    fn test_quoted_comma_and_doubled_quote() {
        let rows = parse_rows("\"Hello, \"\"world\"\"\",back\n").unwrap();

        assert_eq!(rows[0][0], "Hello, \"world\"");
        assert_eq!(rows[0][1], "back");
    }

    #[test]
    fn test_embedded_newline_inside_quotes() {
        let rows = parse_rows("\"line one\nline two\",back\n").unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], "line one\nline two");
    }

    #[test]
    fn test_crlf_row_terminators() {
        let rows = parse_rows("a,b\r\nc,d\r\n").unwrap();

        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_blank_rows_are_dropped() {
        let rows = parse_rows("a,b\n,\n  ,  \nc,d\n").unwrap();

        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_last_row_without_trailing_newline() {
        let rows = parse_rows("a,b\nc,d").unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec!["c", "d"]);
    }

    #[test]
    fn test_rows_of_other_lengths_are_skipped() {
        let cards = pairs("only_one\nQ,A\nx,y,z\n");

        assert_eq!(cards, vec![("Q".to_string(), "A".to_string())]);
    }

    #[test]
    fn test_row_with_both_fields_empty_is_skipped() {
        // Four columns, front and back blank after trim.
        let cards = pairs("D,desc, , \nD,desc,Q,A\n");

        assert_eq!(cards, vec![("Q".to_string(), "A".to_string())]);
    }

    #[test]
    fn test_empty_text_is_rejected() {
        assert!(matches!(parse_rows(""), Err(ImportError::EmptyCsv)));
        assert!(matches!(parse_rows("  \n  "), Err(ImportError::EmptyCsv)));
    }
}
