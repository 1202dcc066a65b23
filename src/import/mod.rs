//! File import: format detection, parsing and normalization into canonical
//! decks. Both paths funnel their cards into one synthetic "Imported Deck".

pub mod csv;
pub mod json;
pub mod normalize;

pub use json::JsonShape;
pub use normalize::{RawCard, RawDeck, normalize_decks};

use crate::error::ImportError;
use crate::models::Deck;
use std::path::Path;

/// Supported import file formats, decided by file extension alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Json,
    Csv,
}

impl ImportFormat {
    /// Detects the format from a path's extension (case-insensitive).
    /// Anything other than `.json` or `.csv` is rejected.
    pub fn from_path(path: &Path) -> Result<Self, ImportError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("csv") => Ok(Self::Csv),
            _ => Err(ImportError::UnsupportedExtension),
        }
    }
}

/// Parses and normalizes import file contents into decks ready to append to
/// the collection. No side effects: errors here mean nothing was written.
pub fn parse_contents(format: ImportFormat, contents: &str) -> Result<Vec<Deck>, ImportError> {
    if contents.trim().is_empty() {
        return Err(ImportError::EmptyFile);
    }

    let cards = match format {
        ImportFormat::Json => json::parse_cards(contents)?.1,
        ImportFormat::Csv => csv::parse_cards(contents)?,
    };

    Ok(normalize_decks(vec![RawDeck::imported(cards)]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(
            ImportFormat::from_path(Path::new("decks.json")).unwrap(),
            ImportFormat::Json
        );
        assert_eq!(
            ImportFormat::from_path(Path::new("DECKS.CSV")).unwrap(),
            ImportFormat::Csv
        );
        assert!(ImportFormat::from_path(Path::new("notes.txt")).is_err());
        assert!(ImportFormat::from_path(Path::new("no_extension")).is_err());
    }

    #[test]
    fn test_csv_contents_become_one_imported_deck() {
        let decks = parse_contents(ImportFormat::Csv, "Q1,A1\nQ2,A2\n").unwrap();

        assert_eq!(decks.len(), 1);
        assert_eq!(decks[0].name, "Imported Deck");
        assert_eq!(decks[0].cards.len(), 2);
        assert_eq!(decks[0].cards[0].front, "Q1");
        assert_eq!(decks[0].cards[0].back, "A1");
        assert_eq!(decks[0].cards[1].front, "Q2");
        assert_eq!(decks[0].cards[1].back, "A2");
    }

    #[test]
    fn test_headered_csv_discards_deck_columns() {
        let text = "deck_name,deck_description,front,back\n\"D1\",\"desc\",\"Q\",\"A\"\n";
        let decks = parse_contents(ImportFormat::Csv, text).unwrap();

        assert_eq!(decks.len(), 1);
        assert_eq!(decks[0].name, "Imported Deck");
        assert!(decks[0].description.is_empty());
        assert_eq!(decks[0].cards.len(), 1);
        assert_eq!(decks[0].cards[0].front, "Q");
        assert_eq!(decks[0].cards[0].back, "A");
    }

    #[test]
    fn test_bare_card_array_json() {
        let decks = parse_contents(ImportFormat::Json, r#"[{"front":"Q","back":"A"}]"#).unwrap();

        assert_eq!(decks.len(), 1);
        assert_eq!(decks[0].name, "Imported Deck");
        assert_eq!(decks[0].cards.len(), 1);
        assert_eq!(decks[0].cards[0].front, "Q");
        assert_eq!(decks[0].cards[0].back, "A");
    }

    #[test]
    fn test_empty_contents_rejected() {
        assert!(matches!(
            parse_contents(ImportFormat::Json, "   "),
            Err(ImportError::EmptyFile)
        ));
    }
}
