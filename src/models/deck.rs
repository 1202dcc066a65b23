//! Deck is a named set of cards with an optional description.
use super::Card;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Deck {
    /// Creates an empty deck with a fresh id. Name and description are
    /// stored trimmed; validation of the name happens in the operation layer.
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            id: super::fresh_id(),
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            cards: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_creation() {
        let deck = Deck::new(" Polish Vocabulary ", "");

        assert_eq!(deck.name, "Polish Vocabulary");
        assert!(deck.description.is_empty());
        assert!(deck.cards.is_empty());
    }

    #[test]
    fn test_deck_deserializes_without_description_or_cards() {
        let deck: Deck = serde_json::from_str(r#"{"id":1,"name":"D"}"#).unwrap();

        assert_eq!(deck.name, "D");
        assert!(deck.description.is_empty());
        assert!(deck.cards.is_empty());
    }
}
