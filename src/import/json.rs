//! JSON import: a small tagged-variant parser that tries each known payload
//! shape in priority order and reports which one matched.

use super::normalize::{RawCard, RawDeck};
use crate::error::ImportError;
use serde_json::Value;

/// The payload shapes the importer accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonShape {
    /// Array of deck objects, detected by a `cards` array on the first
    /// element. Cards from all decks are flattened into one imported deck;
    /// original grouping is lost (known lossy transform).
    DeckArray,
    /// Array of bare card objects, detected by `front`/`back` keys on the
    /// first element.
    CardArray,
    /// A single deck object.
    SingleDeck,
    /// A single bare card object.
    SingleCard,
}

/// Classifies a payload without consuming it.
fn classify(value: &Value) -> Result<JsonShape, ImportError> {
    match value {
        Value::Array(items) => match items.first() {
            // An empty array imports as an empty deck; treat it as decks.
            None => Ok(JsonShape::DeckArray),
            Some(first) if first.get("cards").is_some_and(Value::is_array) => {
                Ok(JsonShape::DeckArray)
            }
            Some(first) if first.get("front").is_some() || first.get("back").is_some() => {
                Ok(JsonShape::CardArray)
            }
            Some(_) => Err(ImportError::UnrecognizedArrayShape),
        },
        Value::Object(map) => {
            if map.get("cards").is_some_and(Value::is_array) {
                Ok(JsonShape::SingleDeck)
            } else if map.contains_key("front") || map.contains_key("back") {
                Ok(JsonShape::SingleCard)
            } else {
                Err(ImportError::UnrecognizedObjectShape)
            }
        }
        _ => Err(ImportError::NotArrayOrObject),
    }
}

/// Parses JSON text into the flattened card list plus the shape that
/// matched. Whatever the input shape, the cards end up in one synthetic
/// imported deck downstream.
pub fn parse_cards(text: &str) -> Result<(JsonShape, Vec<RawCard>), ImportError> {
    let value: Value = serde_json::from_str(text)?;
    let shape = classify(&value)?;
    log::debug!("import: JSON payload matched shape {shape:?}");

    let cards = match shape {
        JsonShape::DeckArray => {
            let decks: Vec<RawDeck> = serde_json::from_value(value)?;
            decks.into_iter().flat_map(|d| d.cards).collect()
        }
        JsonShape::CardArray => serde_json::from_value(value)?,
        JsonShape::SingleDeck => {
            let deck: RawDeck = serde_json::from_value(value)?;
            deck.cards
        }
        JsonShape::SingleCard => vec![serde_json::from_value(value)?],
    };

    Ok((shape, cards))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_array_is_flattened() {
        let (shape, cards) = parse_cards(
            r#"[
                {"name":"A","cards":[{"front":"Q1","back":"A1"}]},
                {"name":"B","cards":[{"front":"Q2","back":"A2"}]}
            ]"#,
        )
        .unwrap();

        assert_eq!(shape, JsonShape::DeckArray);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].front.as_deref(), Some("Q2"));
    }

    #[test]
    fn test_bare_card_array() {
        let (shape, cards) = parse_cards(r#"[{"front":"Q","back":"A"}]"#).unwrap();

        assert_eq!(shape, JsonShape::CardArray);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].front.as_deref(), Some("Q"));
        assert_eq!(cards[0].back.as_deref(), Some("A"));
    }

    #[test]
    fn test_single_deck_object() {
        let (shape, cards) =
            parse_cards(r#"{"name":"D","cards":[{"front":"Q","back":"A"}]}"#).unwrap();

        assert_eq!(shape, JsonShape::SingleDeck);
        assert_eq!(cards.len(), 1);
    }

    #[test]
    fn test_single_card_object() {
        let (shape, cards) = parse_cards(r#"{"front":"Q","back":"A"}"#).unwrap();

        assert_eq!(shape, JsonShape::SingleCard);
        assert_eq!(cards.len(), 1);
    }

    #[test]
    fn test_card_with_one_side_missing() {
        let (_, cards) = parse_cards(r#"{"front":"Q"}"#).unwrap();

        assert_eq!(cards[0].front.as_deref(), Some("Q"));
        assert_eq!(cards[0].back, None);
    }

    #[test]
    fn test_empty_array_yields_no_cards() {
        let (shape, cards) = parse_cards("[]").unwrap();

        assert_eq!(shape, JsonShape::DeckArray);
        assert!(cards.is_empty());
    }

    #[test]
    fn test_ambiguous_array_is_rejected() {
        let err = parse_cards(r#"[{"foo":1}]"#).unwrap_err();
        assert!(matches!(err, ImportError::UnrecognizedArrayShape));
    }

    #[test]
    fn test_ambiguous_object_is_rejected() {
        let err = parse_cards(r#"{"foo":1}"#).unwrap_err();
        assert!(matches!(err, ImportError::UnrecognizedObjectShape));
    }

    #[test]
    fn test_scalar_is_rejected() {
        let err = parse_cards("42").unwrap_err();
        assert!(matches!(err, ImportError::NotArrayOrObject));
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let err = parse_cards("{ this is not valid json }").unwrap_err();
        assert!(matches!(err, ImportError::Json(_)));
    }
}
