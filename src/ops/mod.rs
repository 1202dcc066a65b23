//! Deck and card operations.
//!
//! Every operation takes the store explicitly, starts from a fresh `load()`
//! and persists the whole collection back through `save()` — full-collection
//! read-modify-write, last write wins. Destructive operations return a
//! `PendingUndo` capturing the prior state.

pub mod undo;

pub use undo::{PendingUndo, UNDO_WINDOW, UndoAction};

use crate::error::{ImportError, OpError};
use crate::import::{ImportFormat, parse_contents};
use crate::models::{Card, Deck};
use crate::store::Store;
use std::path::Path;

/// Creates a deck and prepends it to the collection. The trimmed name must
/// be non-empty; the description may be blank.
pub fn create_deck(store: &Store, name: &str, description: &str) -> Result<Deck, OpError> {
    if name.trim().is_empty() {
        return Err(OpError::EmptyDeckName);
    }

    let deck = Deck::new(name, description);
    let mut collection = store.load();
    collection.prepend(deck.clone());
    store.save(&collection)?;
    Ok(deck)
}

/// Renames a deck and replaces its description. An empty trimmed name keeps
/// the old one. The updated deck is also pushed to the remote side on its
/// own (fire-and-forget).
pub fn edit_deck(store: &Store, id: i64, name: &str, description: &str) -> Result<Deck, OpError> {
    let mut collection = store.load();
    let deck = collection.find_deck_mut(id).ok_or(OpError::DeckNotFound)?;

    let name = name.trim();
    if !name.is_empty() {
        deck.name = name.to_string();
    }
    deck.description = description.trim().to_string();
    let updated = deck.clone();

    store.save(&collection)?;
    store.update_remote(&updated);
    Ok(updated)
}

/// Deletes a deck. Returns an undo that prepends it back.
pub fn delete_deck(store: &Store, id: i64) -> Result<PendingUndo, OpError> {
    let mut collection = store.load();
    let removed = collection.remove_deck(id).ok_or(OpError::DeckNotFound)?;
    store.save(&collection)?;

    let message = format!("Deleted \"{}\"", removed.name);
    Ok(PendingUndo::new(message, UndoAction::RestoreDeck(removed)))
}

/// Adds a card to a deck. Both sides are required after trimming.
pub fn add_card(store: &Store, deck_id: i64, front: &str, back: &str) -> Result<Card, OpError> {
    if front.trim().is_empty() || back.trim().is_empty() {
        return Err(OpError::EmptyCardField);
    }

    let mut collection = store.load();
    let deck = collection
        .find_deck_mut(deck_id)
        .ok_or(OpError::DeckNotFound)?;
    let card = Card::new(front, back);
    deck.cards.push(card.clone());

    store.save(&collection)?;
    Ok(card)
}

/// Edits both sides of a card. Fields are trimmed; a side left empty
/// becomes "Untitled" (edits are not rejected the way creates are).
pub fn edit_card(
    store: &Store,
    deck_id: i64,
    card_id: i64,
    front: &str,
    back: &str,
) -> Result<Card, OpError> {
    let mut collection = store.load();
    let deck = collection
        .find_deck_mut(deck_id)
        .ok_or(OpError::DeckNotFound)?;
    let card = deck
        .cards
        .iter_mut()
        .find(|c| c.id == card_id)
        .ok_or(OpError::CardNotFound)?;

    card.front = non_empty_or_untitled(front);
    card.back = non_empty_or_untitled(back);
    let updated = card.clone();

    store.save(&collection)?;
    Ok(updated)
}

fn non_empty_or_untitled(field: &str) -> String {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        "Untitled".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Deletes a card from a deck. Returns an undo that appends it back.
pub fn delete_card(store: &Store, deck_id: i64, card_id: i64) -> Result<PendingUndo, OpError> {
    let mut collection = store.load();
    let deck = collection
        .find_deck_mut(deck_id)
        .ok_or(OpError::DeckNotFound)?;
    let index = deck
        .cards
        .iter()
        .position(|c| c.id == card_id)
        .ok_or(OpError::CardNotFound)?;
    let card = deck.cards.remove(index);

    store.save(&collection)?;
    Ok(PendingUndo::new(
        "Card deleted",
        UndoAction::RestoreCard { deck_id, card },
    ))
}

/// Result of a successful import.
pub struct ImportOutcome {
    pub decks_added: usize,
    pub cards_added: usize,
    /// Restores the exact pre-import collection snapshot.
    pub undo: PendingUndo,
}

/// Imports decks from a `.json` or `.csv` file and appends them to the
/// collection. All-or-nothing: any parse or normalization error aborts
/// before anything is written.
pub fn import_file(store: &Store, path: &Path) -> Result<ImportOutcome, ImportError> {
    let format = ImportFormat::from_path(path)?;
    let contents = std::fs::read_to_string(path)?;
    import_contents(store, format, &contents)
}

/// Import from already-read file contents. Split out from `import_file` so
/// parsing and merging are testable without touching the filesystem.
pub fn import_contents(
    store: &Store,
    format: ImportFormat,
    contents: &str,
) -> Result<ImportOutcome, ImportError> {
    let decks = parse_contents(format, contents)?;

    let before = store.load();
    let mut merged = before.clone();
    let decks_added = decks.len();
    let cards_added = decks.iter().map(|d| d.cards.len()).sum();
    // Imported decks go to the back, unlike user-created ones.
    merged.decks.extend(decks);

    store.save(&merged)?;

    let message = format!(
        "Successfully imported {decks_added} deck{}",
        if decks_added == 1 { "" } else { "s" }
    );
    Ok(ImportOutcome {
        decks_added,
        cards_added,
        undo: PendingUndo::new(message, UndoAction::RestoreCollection(before)),
    })
}
