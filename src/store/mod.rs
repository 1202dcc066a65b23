//! Store adapter mediating between the in-memory collection and its
//! local/remote persisted forms.
//!
//! Writes are local-first: the SQLite cache is authoritative for immediate
//! UI consistency and the remote endpoint is an eventually-consistent mirror.
//! Reads prefer the remote copy and fall back to the cache when the server
//! is unreachable. The store never holds the collection itself; callers load
//! a fresh copy per operation and save the whole thing back.

pub mod cache;
pub mod remote;

pub use cache::LocalCache;
pub use remote::RemoteApi;

use crate::error::StoreError;
use crate::models::{Collection, Deck};

pub struct Store {
    cache: LocalCache,
    remote: Option<RemoteApi>,
}

impl Store {
    /// Creates a store over a local cache and an optional remote endpoint.
    /// With no remote the store is purely offline.
    pub fn new(cache: LocalCache, remote: Option<RemoteApi>) -> Self {
        Self { cache, remote }
    }

    /// Loads the collection: remote first, local cache as fallback.
    ///
    /// A successful remote fetch overwrites the cache. Any failure along the
    /// way is logged and recovered; a corrupt cache loads as an empty
    /// collection. This never returns an error to the caller.
    pub fn load(&self) -> Collection {
        if let Some(remote) = &self.remote {
            match remote.fetch_decks() {
                Ok(collection) => {
                    match serde_json::to_string(&collection) {
                        Ok(json) => {
                            if let Err(e) = self.cache.write(&json) {
                                log::warn!("load: failed to refresh cache: {e}");
                            }
                        }
                        Err(e) => log::warn!("load: failed to serialize fetched decks: {e}"),
                    }
                    return collection;
                }
                Err(e) => {
                    log::warn!("load: remote fetch failed, using local cache: {e}");
                }
            }
        }

        match self.cache.read() {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(collection) => collection,
                Err(e) => {
                    log::error!("load: cached decks are corrupt, starting empty: {e}");
                    Collection::default()
                }
            },
            Ok(None) => Collection::default(),
            Err(e) => {
                log::error!("load: cache read failed, starting empty: {e}");
                Collection::default()
            }
        }
    }

    /// Saves the collection: cache synchronously, remote best-effort.
    ///
    /// A remote push failure is logged and swallowed; it never reverts the
    /// local write. Only a cache failure is reported.
    pub fn save(&self, collection: &Collection) -> Result<(), StoreError> {
        let json = serde_json::to_string(collection)?;
        self.cache.write(&json)?;

        if let Some(remote) = &self.remote {
            if let Err(e) = remote.push_decks(collection) {
                log::warn!("save: remote push failed, local copy kept: {e}");
            }
        }
        Ok(())
    }

    /// Fire-and-forget partial update of a single deck on the remote side.
    /// Failure does not roll back local state.
    pub fn update_remote(&self, deck: &Deck) {
        if let Some(remote) = &self.remote {
            if let Err(e) = remote.update_deck(deck) {
                log::warn!("update_remote: deck {} not pushed: {e}", deck.id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Card, Deck};

    fn offline_store() -> Store {
        Store::new(LocalCache::open_in_memory().unwrap(), None)
    }

    fn sample_collection() -> Collection {
        let mut deck = Deck::new("Polish Vocabulary", "basic words");
        deck.cards.push(Card::new("cześć", "hello"));
        deck.cards.push(Card::new("dziękuję", "thank you"));
        Collection::from_decks(vec![deck])
    }

    #[test]
    fn test_save_then_load_roundtrip_without_remote() {
        let store = offline_store();
        let collection = sample_collection();

        store.save(&collection).unwrap();
        assert_eq!(store.load(), collection);
    }

    #[test]
    fn test_load_with_unreachable_remote_falls_back_to_cache() {
        // Port 9 (discard) is not listening; the fetch fails fast and the
        // cached copy wins.
        let remote = RemoteApi::new("http://127.0.0.1:9").unwrap();
        let store = Store::new(LocalCache::open_in_memory().unwrap(), Some(remote));
        let collection = sample_collection();

        store.save(&collection).unwrap();
        assert_eq!(store.load(), collection);
    }

    #[test]
    fn test_load_empty_cache_returns_empty_collection() {
        let store = offline_store();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_corrupt_cache_returns_empty_collection() {
        let cache = LocalCache::open_in_memory().unwrap();
        cache.write("{ this is not valid json }").unwrap();
        let store = Store::new(cache, None);

        assert!(store.load().is_empty());
    }
}
