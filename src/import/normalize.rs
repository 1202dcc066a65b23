//! Normalization pass turning loosely-shaped import payloads into canonical
//! decks: fresh ids where missing, trimmed text, defaults for empty fields.

use crate::models::{Card, Deck, fresh_id};
use serde::Deserialize;

/// Card as it appears in an import payload; every field may be missing.
#[derive(Debug, Default, Deserialize)]
pub struct RawCard {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub front: Option<String>,
    #[serde(default)]
    pub back: Option<String>,
}

/// Deck as it appears in an import payload.
#[derive(Debug, Default, Deserialize)]
pub struct RawDeck {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cards: Vec<RawCard>,
}

impl RawDeck {
    /// The synthetic deck both import paths funnel their cards into.
    pub fn imported(cards: Vec<RawCard>) -> Self {
        Self {
            id: None,
            name: Some("Imported Deck".to_string()),
            description: None,
            cards,
        }
    }
}

/// Normalizes raw decks into canonical ones.
///
/// Ids already present in the payload are kept; missing ones are assigned
/// fresh. A missing deck name defaults to "Imported Deck"; a present but
/// blank one gets the index-qualified "Imported Deck N".
pub fn normalize_decks(raw: Vec<RawDeck>) -> Vec<Deck> {
    raw.into_iter()
        .enumerate()
        .map(|(index, deck)| Deck {
            id: deck.id.unwrap_or_else(fresh_id),
            name: deck_name(deck.name, index),
            description: deck
                .description
                .map(|d| d.trim().to_string())
                .unwrap_or_default(),
            cards: deck.cards.into_iter().map(normalize_card).collect(),
        })
        .collect()
}

fn normalize_card(card: RawCard) -> Card {
    Card {
        id: card.id.unwrap_or_else(fresh_id),
        front: untitled_if_empty(card.front),
        back: untitled_if_empty(card.back),
    }
}

fn deck_name(name: Option<String>, index: usize) -> String {
    match name {
        None => "Imported Deck".to_string(),
        Some(n) => {
            let trimmed = n.trim();
            if trimmed.is_empty() {
                format!("Imported Deck {}", index + 1)
            } else {
                trimmed.to_string()
            }
        }
    }
}

fn untitled_if_empty(field: Option<String>) -> String {
    let trimmed = field.as_deref().unwrap_or("").trim();
    if trimmed.is_empty() {
        "Untitled".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_ids_get_fresh_ones() {
        let raw = vec![RawDeck::imported(vec![RawCard {
            id: None,
            front: Some("Q".into()),
            back: Some("A".into()),
        }])];

        let decks = normalize_decks(raw);
        assert!(decks[0].id > 0);
        assert!(decks[0].cards[0].id > 0);
        assert_ne!(decks[0].id, decks[0].cards[0].id);
    }

    #[test]
    fn test_existing_ids_are_kept() {
        let raw = vec![RawDeck {
            id: Some(42),
            name: Some("Kept".into()),
            description: None,
            cards: vec![RawCard {
                id: Some(7),
                front: Some("Q".into()),
                back: Some("A".into()),
            }],
        }];

        let decks = normalize_decks(raw);
        assert_eq!(decks[0].id, 42);
        assert_eq!(decks[0].cards[0].id, 7);
    }

    #[test]
    fn test_blank_deck_name_gets_index_qualified_default() {
        let raw = vec![
            RawDeck {
                name: Some("   ".into()),
                ..Default::default()
            },
            RawDeck {
                name: None,
                ..Default::default()
            },
        ];

        let decks = normalize_decks(raw);
        assert_eq!(decks[0].name, "Imported Deck 1");
        assert_eq!(decks[1].name, "Imported Deck");
    }

    #[test]
    fn test_empty_card_fields_default_to_untitled() {
        let raw = vec![RawDeck::imported(vec![RawCard {
            id: None,
            front: Some("  ".into()),
            back: None,
        }])];

        let decks = normalize_decks(raw);
        assert_eq!(decks[0].cards[0].front, "Untitled");
        assert_eq!(decks[0].cards[0].back, "Untitled");
    }

    #[test]
    fn test_text_fields_are_trimmed() {
        let raw = vec![RawDeck {
            id: None,
            name: Some("  Geography  ".into()),
            description: Some("  capitals  ".into()),
            cards: vec![RawCard {
                id: None,
                front: Some(" Q ".into()),
                back: Some(" A ".into()),
            }],
        }];

        let decks = normalize_decks(raw);
        assert_eq!(decks[0].name, "Geography");
        assert_eq!(decks[0].description, "capitals");
        assert_eq!(decks[0].cards[0].front, "Q");
        assert_eq!(decks[0].cards[0].back, "A");
    }
}
