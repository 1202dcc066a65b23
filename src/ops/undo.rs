//! Time-bounded undo for destructive operations.
//!
//! Each destructive operation captures the removed/previous state before
//! mutating the collection and hands back a `PendingUndo`. Applying it
//! replays the capture through the store; once the window elapses the
//! capture is discarded and the operation is permanent.

use crate::error::StoreError;
use crate::models::{Card, Collection, Deck};
use crate::store::Store;
use std::time::{Duration, Instant};

/// How long an undo stays available.
pub const UNDO_WINDOW: Duration = Duration::from_secs(6);

/// What an undo puts back.
#[derive(Debug)]
pub enum UndoAction {
    /// Deleted deck, restored by prepending it to the current collection.
    RestoreDeck(Deck),
    /// Deleted card, restored by appending it back to its deck. If the deck
    /// itself is gone by then, the restore is silently dropped.
    RestoreCard { deck_id: i64, card: Card },
    /// Whole-collection snapshot taken before an import; undo saves it back
    /// verbatim rather than diffing out the added decks.
    RestoreCollection(Collection),
}

#[derive(Debug)]
pub struct PendingUndo {
    pub message: String,
    action: UndoAction,
    expires_at: Instant,
}

impl PendingUndo {
    pub fn new(message: impl Into<String>, action: UndoAction) -> Self {
        Self::with_window(message, action, UNDO_WINDOW)
    }

    pub fn with_window(message: impl Into<String>, action: UndoAction, window: Duration) -> Self {
        Self {
            message: message.into(),
            action,
            expires_at: Instant::now() + window,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    /// Replays the captured state through the store. Works on a fresh load
    /// so it composes with whatever happened since the deletion.
    pub fn apply(self, store: &Store) -> Result<(), StoreError> {
        match self.action {
            UndoAction::RestoreDeck(deck) => {
                let mut collection = store.load();
                collection.prepend(deck);
                store.save(&collection)
            }
            UndoAction::RestoreCard { deck_id, card } => {
                let mut collection = store.load();
                match collection.find_deck_mut(deck_id) {
                    Some(deck) => {
                        deck.cards.push(card);
                        store.save(&collection)
                    }
                    None => {
                        log::warn!("undo: deck {deck_id} no longer exists, card not restored");
                        Ok(())
                    }
                }
            }
            UndoAction::RestoreCollection(snapshot) => store.save(&snapshot),
        }
    }
}
