//! Card is a pair <front, back>. Only text is used on both sides.
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: i64,
    pub front: String,
    pub back: String,
}

impl Card {
    /// Creates a card with a fresh id. Front and back are stored trimmed.
    pub fn new(front: &str, back: &str) -> Self {
        Self {
            id: super::fresh_id(),
            front: front.trim().to_string(),
            back: back.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_creation_trims_fields() {
        let card = Card::new("  hello  ", " cześć ");

        assert_eq!(card.front, "hello");
        assert_eq!(card.back, "cześć");
    }

    #[test]
    fn test_card_clone() {
        let card1 = Card::new("hello", "cześć");
        let card2 = card1.clone();

        assert_eq!(card1, card2);
    }
}
