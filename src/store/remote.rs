//! HTTP client for the deck collection endpoint.
//!
//! All calls are best-effort from the store's point of view: the adapter
//! logs failures and falls back to the local cache, so this client just
//! reports them faithfully.

use crate::models::{Collection, Deck};
use std::time::Duration;

/// Request timeout. Keeps a dead or slow server from wedging the UI thread.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

pub struct RemoteApi {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl RemoteApi {
    /// Creates a client for the given base URL, e.g. `http://localhost:3000`.
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// GET /api/decks - fetches the full collection.
    pub fn fetch_decks(&self) -> Result<Collection, reqwest::Error> {
        self.client
            .get(format!("{}/api/decks", self.base_url))
            .send()?
            .error_for_status()?
            .json()
    }

    /// POST /api/decks - replaces the entire remote collection.
    pub fn push_decks(&self, collection: &Collection) -> Result<(), reqwest::Error> {
        self.client
            .post(format!("{}/api/decks", self.base_url))
            .json(collection)
            .send()?
            .error_for_status()?;
        Ok(())
    }

    /// PUT /api/decks/{id} - partial update of a single deck.
    pub fn update_deck(&self, deck: &Deck) -> Result<(), reqwest::Error> {
        self.client
            .put(format!("{}/api/decks/{}", self.base_url, deck.id))
            .json(deck)
            .send()?
            .error_for_status()?;
        Ok(())
    }
}
