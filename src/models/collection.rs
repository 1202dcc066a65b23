//! Container for all available decks.
//!
//! Serializes transparently as a JSON array of decks, which is the shape the
//! remote API and the local cache both store.
use super::Deck;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    pub decks: Vec<Deck>,
}

impl Collection {
    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    pub fn find_deck(&self, id: i64) -> Option<&Deck> {
        self.decks.iter().find(|d| d.id == id)
    }

    pub fn find_deck_mut(&mut self, id: i64) -> Option<&mut Deck> {
        self.decks.iter_mut().find(|d| d.id == id)
    }

    /// Inserts a deck at the front; newly created decks go first.
    pub fn prepend(&mut self, deck: Deck) {
        self.decks.insert(0, deck);
    }

    /// Removes and returns the deck with the given id, if present.
    pub fn remove_deck(&mut self, id: i64) -> Option<Deck> {
        let index = self.decks.iter().position(|d| d.id == id)?;
        Some(self.decks.remove(index))
    }

    /// All (front, back) pairs across all decks, in collection order.
    pub fn card_pairs(&self) -> Vec<(String, String)> {
        self.decks
            .iter()
            .flat_map(|d| d.cards.iter())
            .map(|c| (c.front.clone(), c.back.clone()))
            .collect()
    }

    pub fn card_count(&self) -> usize {
        self.decks.iter().map(|d| d.cards.len()).sum()
    }

    pub fn from_decks(decks: Vec<Deck>) -> Self {
        Self { decks }
    }
}
